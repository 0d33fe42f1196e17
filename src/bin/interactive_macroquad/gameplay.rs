use crate::constants::MAX_FRAMES_PER_TICK;
use crate::controls::FrameActions;
use crate::model::next_detection;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.cycle_detection {
        state.detection = next_detection(state.detection);
        if state.result.is_some() {
            state.throw_rock();
        }
    }

    if actions.throw_rock {
        state.throw_rock();
    }

    if actions.toggle_animation {
        if state.playback.is_running() {
            state.stop_animation();
        } else {
            state.start_animation();
        }
    }
}

/// Feeds wall-clock time into the playback and pulls as many frames as the
/// pacing interval allows. The playback itself never keeps time.
pub(crate) fn step_animation(state: &mut AppRuntime, frame_dt: f32) {
    state.hit_banner_s = (state.hit_banner_s - frame_dt).max(0.0);
    if !state.playback.is_running() {
        return;
    }
    let Some(interval) = state.playback.frame_interval() else {
        return;
    };
    let interval_s = interval.as_secs_f32();

    state.frame_clock_s += frame_dt;
    let mut pulled = 0;
    while state.frame_clock_s >= interval_s && pulled < MAX_FRAMES_PER_TICK {
        state.frame_clock_s -= interval_s;
        pulled += 1;
        let Some(frame) = state.playback.advance_frame() else {
            break;
        };
        state.show_frame(frame);
    }

    // Drop any backlog after a long stall instead of fast-forwarding.
    if pulled == MAX_FRAMES_PER_TICK {
        state.frame_clock_s = 0.0;
    }
}
