use crate::models::DistributionKind;
use crate::processors::EmpiricalCdf;
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 800;
const FONT_FAMILY: &str = "sans-serif";

/// `(x, y)`를 steps-post 형태의 꺾은선 좌표로 변환
fn step_points(cdf: &EmpiricalCdf) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(cdf.len() * 2);
    let mut previous_y = 0.0;

    for (x, y) in cdf.rows() {
        let x = x as f64;
        points.push((x, previous_y));
        points.push((x, y));
        previous_y = y;
    }

    points
}

/// Draw a CDF as a step plot and save it as PNG.
pub fn plot_cdf(cdf: &EmpiricalCdf, kind: DistributionKind, path: &Path) -> Result<(), String> {
    if cdf.is_empty() {
        return Err("No samples available for the CDF plot".to_string());
    }

    let points = step_points(cdf);
    let min_x = cdf.x[0] as f64;
    let mut max_x = cdf.x[cdf.len() - 1] as f64;
    if max_x <= min_x {
        max_x = min_x + 1.0;
    }

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} CDF", kind.display_name()),
            (FONT_FAMILY, 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(min_x..max_x, 0.0..1.05)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Interval")
        .y_desc("Cumulative share")
        .axis_desc_style((FONT_FAMILY, 20))
        .label_style((FONT_FAMILY, 15))
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(LineSeries::new(points, RGBColor(65, 105, 225).stroke_width(2)))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_points() {
        let cdf = EmpiricalCdf::from_samples(vec![1, 3]).unwrap();
        let points = step_points(&cdf);
        assert_eq!(
            points,
            vec![(1.0, 0.0), (1.0, 0.25), (3.0, 0.25), (3.0, 1.0)]
        );
    }
}
