//! The sample operation: one exact value per integer of the closed range
//! for the table, and a dense lambdified grid for the plot curve.
//!
//! The two outputs stay separate code paths on purpose. The table
//! substitutes and classifies point by point (real, complex or undefined,
//! each renderable as text); the curve evaluates a numeric closure over a
//! fixed 400-point grid and keeps plain IEEE values, non-finite ones
//! included, for the plot surface to filter. Near a singularity the two may
//! disagree; the curve is visual, not exact.
//!
//! A range with x1 > x2 yields an empty table without complaint; the curve
//! is still produced, its grid simply running backwards.

use crate::pipeline::error::PipelineError;
use crate::pipeline::parse::{ExpressionSpec, ParsedExpression, parse, parse_integer_input};
use crate::symbolic::symbolic_complex::PointValue;
use crate::symbolic::utils::linspace;
use log::debug;

/// Number of evenly spaced points the plot curve is evaluated at.
pub const CURVE_POINTS: usize = 400;

/// Raw inputs of a table/plot action.
#[derive(Clone, Debug)]
pub struct TableRequest {
    pub expression: String,
    pub x1: String,
    pub x2: String,
}

/// One row of the value table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub x: i64,
    pub value: PointValue,
}

/// Table rows plus the plot curve for one sampling action.
#[derive(Clone, Debug)]
pub struct SampleResult {
    pub points: Vec<SamplePoint>,
    pub curve: Vec<(f64, f64)>,
}

/// Runs the full sampling action: parse, tabulate, trace the curve.
pub fn sample(request: &TableRequest) -> Result<SampleResult, PipelineError> {
    let parsed = parse(&ExpressionSpec::new(&request.expression))?;
    let x1 = parse_integer_input("x1", &request.x1)?;
    let x2 = parse_integer_input("x2", &request.x2)?;

    let points = sample_table(&parsed, x1, x2);
    let curve = sample_curve(&parsed, x1, x2);
    debug!(
        "sampled {} table points and {} curve points over [{}, {}]",
        points.len(),
        curve.len(),
        x1,
        x2
    );

    Ok(SampleResult { points, curve })
}

/// Exact path: one classified value per integer in [x1, x2], ascending.
pub fn sample_table(parsed: &ParsedExpression, x1: i64, x2: i64) -> Vec<SamplePoint> {
    (x1..=x2)
        .map(|x| SamplePoint {
            x,
            value: parsed.expr().eval_point(parsed.variable(), x as f64),
        })
        .collect()
}

/// Approximate path: the lambdified expression over an even grid spanning
/// [x1, x2].
pub fn sample_curve(parsed: &ParsedExpression, x1: i64, x2: i64) -> Vec<(f64, f64)> {
    let grid = linspace(x1 as f64, x2 as f64, CURVE_POINTS);
    let values = parsed.expr().calc_vector_lambdified1D(&grid);
    grid.into_iter().zip(values).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(expression: &str, x1: &str, x2: &str) -> TableRequest {
        TableRequest {
            expression: expression.to_string(),
            x1: x1.to_string(),
            x2: x2.to_string(),
        }
    }

    #[test]
    fn test_square_table() {
        let result = sample(&request("x^2", "0", "3")).unwrap();
        let rows: Vec<(i64, PointValue)> =
            result.points.iter().map(|p| (p.x, p.value)).collect();
        assert_eq!(
            rows,
            vec![
                (0, PointValue::Real(0.0)),
                (1, PointValue::Real(1.0)),
                (2, PointValue::Real(4.0)),
                (3, PointValue::Real(9.0)),
            ]
        );
    }

    #[test]
    fn test_table_count_and_order() {
        let result = sample(&request("x + 1", "-3", "4")).unwrap();
        assert_eq!(result.points.len(), 8); // x2 - x1 + 1
        let xs: Vec<i64> = result.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-3, -2, -1, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reversed_range_is_empty_but_curve_remains() {
        let result = sample(&request("x", "5", "1")).unwrap();
        assert!(result.points.is_empty());
        assert_eq!(result.curve.len(), CURVE_POINTS);
    }

    #[test]
    fn test_singular_point_does_not_abort_table() {
        let result = sample(&request("1/x", "-1", "1")).unwrap();
        assert_eq!(result.points.len(), 3);
        assert_eq!(result.points[0].value, PointValue::Real(-1.0));
        assert!(result.points[1].value.is_undefined());
        assert_eq!(result.points[2].value, PointValue::Real(1.0));
    }

    #[test]
    fn test_complex_values_in_table() {
        let result = sample(&request("sqrt(x)", "-1", "0")).unwrap();
        assert!(matches!(result.points[0].value, PointValue::Complex(_)));
        assert_eq!(result.points[1].value, PointValue::Real(0.0));
    }

    #[test]
    fn test_curve_has_fixed_point_count_and_span() {
        let result = sample(&request("x^2", "0", "3")).unwrap();
        assert_eq!(result.curve.len(), CURVE_POINTS);
        assert_eq!(result.curve.first().unwrap().0, 0.0);
        assert_eq!(result.curve.last().unwrap().0, 3.0);
    }

    #[test]
    fn test_non_integer_range_is_input_error() {
        let err = sample(&request("x", "0.5", "3")).unwrap_err();
        assert!(matches!(err, PipelineError::Input(_)));
    }

    #[test]
    fn test_bad_expression_is_parse_error() {
        let err = sample(&request("x +", "0", "3")).unwrap_err();
        assert!(matches!(err, PipelineError::Parse(_)));
    }
}
