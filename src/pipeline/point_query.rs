//! The point-query operation: the function's value at one arbitrary real
//! point, or the secant slope between two of them.
//!
//! Numeric conversions run first, so bad input text is rejected as an input
//! error before any symbolic work; equal x-values in a slope query are
//! rejected next, before anything is evaluated. A point where the function
//! has no finite value (real or complex) is an evaluation error here - a
//! single undefined operand makes the whole answer meaningless, unlike one
//! row of a table.

use crate::pipeline::error::PipelineError;
use crate::pipeline::parse::{ExpressionSpec, ParsedExpression, parse, parse_real_input};
use crate::symbolic::symbolic_complex::PointValue;
use log::debug;
use std::fmt;

/// Raw inputs of a value query.
#[derive(Clone, Debug)]
pub struct ValueRequest {
    pub expression: String,
    pub x: String,
}

/// Raw inputs of a slope query.
#[derive(Clone, Debug)]
pub struct SlopeRequest {
    pub expression: String,
    pub x1: String,
    pub x2: String,
}

/// f evaluated at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueResult {
    pub x: f64,
    pub value: PointValue,
}

impl fmt::Display for ValueResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "f({}) = {}", self.x, self.value)
    }
}

/// f evaluated at two points plus the secant slope between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlopeResult {
    pub x1: f64,
    pub x2: f64,
    pub f1: PointValue,
    pub f2: PointValue,
    pub slope: PointValue,
}

impl fmt::Display for SlopeResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "slope between {} and {}: {}",
            self.x1, self.x2, self.slope
        )
    }
}

/// Evaluates the function at one point.
pub fn value(request: &ValueRequest) -> Result<ValueResult, PipelineError> {
    let x = parse_real_input("x", &request.x)?;
    let parsed = parse(&ExpressionSpec::new(&request.expression))?;
    let value = evaluate_defined(&parsed, x)?;
    debug!("f({}) = {}", x, value);
    Ok(ValueResult { x, value })
}

/// Computes the secant slope (f(x2) - f(x1)) / (x2 - x1).
pub fn slope(request: &SlopeRequest) -> Result<SlopeResult, PipelineError> {
    let x1 = parse_real_input("x1", &request.x1)?;
    let x2 = parse_real_input("x2", &request.x2)?;
    if x1 == x2 {
        return Err(PipelineError::DivisionByZero(format!(
            "slope between equal points x1 = x2 = {}",
            x1
        )));
    }

    let parsed = parse(&ExpressionSpec::new(&request.expression))?;
    let f1 = evaluate_defined(&parsed, x1)?;
    let f2 = evaluate_defined(&parsed, x2)?;

    // complex arithmetic covers both real and complex operand values
    let rise = match (f1.as_complex(), f2.as_complex()) {
        (Some(a), Some(b)) => b - a,
        _ => {
            return Err(PipelineError::Evaluation(format!(
                "operands of the slope are undefined between {} and {}",
                x1, x2
            )));
        }
    };
    let slope = PointValue::from_complex(rise / (x2 - x1));
    debug!("slope between {} and {}: {}", x1, x2, slope);

    Ok(SlopeResult {
        x1,
        x2,
        f1,
        f2,
        slope,
    })
}

fn evaluate_defined(parsed: &ParsedExpression, x: f64) -> Result<PointValue, PipelineError> {
    let value = parsed.expr().eval_point(parsed.variable(), x);
    if value.is_undefined() {
        return Err(PipelineError::Evaluation(format!(
            "{} is undefined at {} = {}",
            parsed.expr(),
            parsed.variable(),
            x
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_request(expression: &str, x: &str) -> ValueRequest {
        ValueRequest {
            expression: expression.to_string(),
            x: x.to_string(),
        }
    }

    fn slope_request(expression: &str, x1: &str, x2: &str) -> SlopeRequest {
        SlopeRequest {
            expression: expression.to_string(),
            x1: x1.to_string(),
            x2: x2.to_string(),
        }
    }

    #[test]
    fn test_value_of_square() {
        let result = value(&value_request("x^2", "3")).unwrap();
        assert_eq!(result.value, PointValue::Real(9.0));
        assert_eq!(result.to_string(), "f(3) = 9");
    }

    #[test]
    fn test_value_at_fractional_point() {
        let result = value(&value_request("2*x", "0.5")).unwrap();
        assert_eq!(result.value, PointValue::Real(1.0));
    }

    #[test]
    fn test_value_can_be_complex() {
        let result = value(&value_request("sqrt(x)", "-9")).unwrap();
        assert!(matches!(result.value, PointValue::Complex(_)));
    }

    #[test]
    fn test_value_undefined_is_evaluation_error() {
        let err = value(&value_request("1/x", "0")).unwrap_err();
        assert!(matches!(err, PipelineError::Evaluation(_)));
    }

    #[test]
    fn test_value_non_numeric_is_input_error() {
        let err = value(&value_request("x^2", "three")).unwrap_err();
        assert!(matches!(err, PipelineError::Input(_)));
    }

    #[test]
    fn test_slope_of_square_between_one_and_three() {
        let result = slope(&slope_request("x^2", "1", "3")).unwrap();
        assert_eq!(result.slope, PointValue::Real(4.0)); // (9 - 1) / (3 - 1)
        assert_eq!(result.f1, PointValue::Real(1.0));
        assert_eq!(result.f2, PointValue::Real(9.0));
    }

    #[test]
    fn test_slope_equal_points_is_division_by_zero() {
        let err = slope(&slope_request("x^2", "2", "2")).unwrap_err();
        assert!(matches!(err, PipelineError::DivisionByZero(_)));
    }

    #[test]
    fn test_slope_equal_points_rejected_even_for_bad_expression() {
        // the equality check runs before the expression is even parsed
        let err = slope(&slope_request("x +", "2", "2")).unwrap_err();
        assert!(matches!(err, PipelineError::DivisionByZero(_)));
    }

    #[test]
    fn test_slope_non_numeric_is_input_error() {
        let err = slope(&slope_request("x^2", "a", "3")).unwrap_err();
        assert!(matches!(err, PipelineError::Input(_)));
    }

    #[test]
    fn test_slope_with_undefined_operand_is_evaluation_error() {
        let err = slope(&slope_request("1/x", "0", "2")).unwrap_err();
        assert!(matches!(err, PipelineError::Evaluation(_)));
    }

    #[test]
    fn test_slope_status_line() {
        let result = slope(&slope_request("x^2", "1", "3")).unwrap();
        assert_eq!(result.to_string(), "slope between 1 and 3: 4");
    }
}
