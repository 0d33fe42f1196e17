use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::prelude::*;

use parabolic_throw::TrajectoryResult;
use parabolic_throw::core::window::scene_window;

const PLOT_SIZE: (u32, u32) = (1200, 600);
const ROCK_COLOR: RGBColor = RGBColor(149, 165, 166);
const TARGET_COLOR: RGBColor = RGBColor(231, 76, 60);
const PATH_COLOR: RGBColor = RGBColor(52, 152, 219);

pub(crate) fn plot_file_name() -> String {
    format!("throw_{}.png", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Draws the path, target, apex and landing point of `result` into a
/// timestamped PNG under `dir`.
pub(crate) fn write_png(result: &TrajectoryResult, dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(plot_file_name());
    draw_plot(result, &path)?;
    Ok(path)
}

fn draw_plot(result: &TrajectoryResult, path: &Path) -> Result<(), Box<dyn Error>> {
    let (x_span, y_span) = scene_window(Some(result), result.target());
    let summary = result.summary();

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Rock Trajectory", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-1.0f64..x_span, -0.5f64..y_span)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()?;

    let target = result.target();
    if target.enabled {
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (target.distance_m, 0.0),
                (target.right_edge_m(), target.height_m),
            ],
            TARGET_COLOR.mix(0.8).filled(),
        )))?;
    }

    chart.draw_series(LineSeries::new(
        result.samples().iter().map(|s| (s.x, s.y)),
        PATH_COLOR.stroke_width(2),
    ))?;

    if let Some((apex_x, apex_y)) = result.apex_point() {
        chart.draw_series(std::iter::once(Circle::new(
            (apex_x, apex_y),
            5,
            ROCK_COLOR.mix(0.5).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("Max Height: {:.2} m", summary.max_height_m),
            (apex_x, apex_y),
            ("sans-serif", 16).into_font(),
        )))?;
    }

    chart.draw_series(std::iter::once(Circle::new(
        (summary.range_m, 0.0),
        6,
        ROCK_COLOR.filled(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        format!("Range: {:.2} m", summary.range_m),
        (summary.range_m, y_span * 0.05),
        ("sans-serif", 16).into_font(),
    )))?;

    if let Some(hit_time) = result.hit_time() {
        let (hit_x, hit_y) = parabolic_throw::core::ballistics::position_at_time(
            result.params(),
            hit_time,
        );
        chart.draw_series(std::iter::once(Circle::new(
            (hit_x, hit_y),
            7,
            BLACK.stroke_width(2),
        )))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{plot_file_name, write_png};
    use parabolic_throw::{TargetSpec, ThrowParameters, compute_trajectory};

    #[test]
    fn plot_file_name_is_timestamped_png() {
        let name = plot_file_name();
        assert!(name.starts_with("throw_"));
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), "throw_YYYYMMDD_HHMMSS.png".len());
    }

    #[test]
    fn write_png_creates_the_file_in_the_given_dir() {
        let dir = std::env::temp_dir().join(format!("parabolic_throw_plot_{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir is writable");

        let result = compute_trajectory(ThrowParameters::default(), TargetSpec::at(30.0, 1.0, 2.0))
            .expect("calculation should succeed");
        let path = write_png(&result, &dir).expect("plot is drawn");

        assert_eq!(path.parent(), Some(dir.as_path()));
        let written = fs::metadata(&path).expect("png exists");
        assert!(written.len() > 0);

        fs::remove_dir_all(&dir).expect("temp dir is removable");
    }
}
