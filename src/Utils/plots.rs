use gnuplot::{AxesCommon, Caption, Color, Figure};
use plotters::prelude::*;

/// Draws the sampled curve of a function to a PNG file.
///
/// The drawing area is rebuilt from scratch on every call: caption with the
/// function text, x / f(x) axis labels, background mesh and a legend entry.
/// Non-finite samples (singularities in the numeric path) are filtered out
/// before ranging and drawing.
pub fn plot_curve(
    function_label: &str,
    curve: &[(f64, f64)],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let finite: Vec<(f64, f64)> = curve
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if finite.is_empty() {
        return Err("no finite points to plot".into());
    }

    let x_min = finite.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = finite.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let y_min = finite.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = finite.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    // degenerate spans still need a drawable window
    let (y_min, y_max) = if y_min == y_max {
        (y_min - 1.0, y_max + 1.0)
    } else {
        (y_min, y_max)
    };
    let (x_min, x_max) = if x_min == x_max {
        (x_min - 1.0, x_max + 1.0)
    } else {
        (x_min, x_max)
    };

    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(format!("f(x) = {}", function_label), ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("f(x)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(finite, &Palette99::pick(0)))?
        .label(format!(" {}", function_label))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(0))
        });

    chart
        .configure_series_labels()
        .background_style(&plotters::style::Color::mix(&WHITE, 0.8))
        .border_style(&BLACK)
        .draw()?;

    root_area.present()?;
    Ok(())
}

/// Same drawing through the gnuplot backend.
pub fn plot_curve_gnuplot(
    function_label: &str,
    curve: &[(f64, f64)],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let finite: Vec<(f64, f64)> = curve
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if finite.is_empty() {
        return Err("no finite points to plot".into());
    }
    let x: Vec<f64> = finite.iter().map(|p| p.0).collect();
    let y: Vec<f64> = finite.iter().map(|p| p.1).collect();

    let mut fg = Figure::new();
    fg.axes2d()
        .set_title(&format!("f(x) = {}", function_label), &[])
        .set_x_label("x", &[])
        .set_y_label("f(x)", &[])
        .lines(&x, &y, &[Caption(function_label), Color(gnuplot::RGBString("blue"))]);
    fg.save_to_png(filename, 800, 600)?;
    Ok(())
}
