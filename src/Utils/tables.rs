use crate::pipeline::sample::SamplePoint;
use tabled::{builder::Builder, settings::Style};

/// Renders sample points as a two-column text table, rebuilt from scratch on
/// every call.
pub fn render_table(points: &[SamplePoint]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["x", "f(x)"]);
    for point in points {
        builder.push_record([point.x.to_string(), point.value.to_string()]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::symbolic_complex::PointValue;

    #[test]
    fn test_render_table_rows() {
        let points = vec![
            SamplePoint {
                x: 0,
                value: PointValue::Real(0.0),
            },
            SamplePoint {
                x: 1,
                value: PointValue::Undefined,
            },
        ];
        let rendered = render_table(&points);
        assert!(rendered.contains("f(x)"));
        assert!(rendered.contains("undefined"));
    }

    #[test]
    fn test_render_empty_table_keeps_header() {
        let rendered = render_table(&[]);
        assert!(rendered.contains('x'));
    }
}
