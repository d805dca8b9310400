//! The analyze operation: symbolic derivative, critical points and roots.
//!
//! Critical points are the roots of the derivative, each annotated with the
//! function's value there. They are reported as they are - candidates - with
//! no minimum/maximum/saddle classification, and the status line says so.
//!
//! Each solve distinguishes three outcomes: an empty set, a finite set
//! (real and/or complex values), or a solve error when no finite closed-form
//! answer exists.

use crate::pipeline::error::PipelineError;
use crate::pipeline::parse::{ExpressionSpec, parse};
use crate::symbolic::symbolic_complex::PointValue;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_solve::format_root;
use itertools::Itertools;
use log::debug;
use num_complex::Complex64;
use std::fmt;

/// Raw input of the analysis actions: just the expression text.
#[derive(Clone, Debug)]
pub struct AnalyzeRequest {
    pub expression: String,
}

impl AnalyzeRequest {
    pub fn new(expression: &str) -> Self {
        AnalyzeRequest {
            expression: expression.to_string(),
        }
    }
}

/// The simplified first derivative.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivativeResult {
    pub derivative: Expr,
}

impl fmt::Display for DerivativeResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "derivative: {}", self.derivative)
    }
}

/// A root of the derivative together with the function's value there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CriticalPoint {
    pub location: Complex64,
    pub value: PointValue,
}

/// All critical points of the function, unclassified.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtremaResult {
    pub points: Vec<CriticalPoint>,
}

impl fmt::Display for ExtremaResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.points.is_empty() {
            return write!(f, "no critical points");
        }
        let listed = self
            .points
            .iter()
            .map(|p| format!("({}, {})", format_root(&p.location), p.value))
            .join(", ");
        write!(f, "critical points (unclassified): {}", listed)
    }
}

/// Solutions of `expression = 0` (or `derivative = 0`). Empty means no
/// solutions; an unenumerable set never reaches this type.
#[derive(Clone, Debug, PartialEq)]
pub struct RootsResult {
    pub roots: Vec<Complex64>,
}

impl fmt::Display for RootsResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.roots.is_empty() {
            return write!(f, "no solutions");
        }
        let listed = self.roots.iter().map(format_root).join(", ");
        write!(f, "solutions: {}", listed)
    }
}

/// Derivative, critical points and roots in one report.
#[derive(Clone, Debug)]
pub struct AnalysisResult {
    pub derivative: Expr,
    pub critical_points: Vec<CriticalPoint>,
    pub roots: Vec<Complex64>,
}

/// Computes the simplified symbolic derivative.
pub fn differentiate(request: &AnalyzeRequest) -> Result<DerivativeResult, PipelineError> {
    let parsed = parse(&ExpressionSpec::new(&request.expression))?;
    let derivative = parsed.expr().diff(parsed.variable()).simplify();
    debug!("d/d{} [{}] = {}", parsed.variable(), parsed.expr(), derivative);
    Ok(DerivativeResult { derivative })
}

/// Solves derivative = 0 and annotates each solution with the function's
/// value there.
pub fn extrema(request: &AnalyzeRequest) -> Result<ExtremaResult, PipelineError> {
    let parsed = parse(&ExpressionSpec::new(&request.expression))?;
    let derivative = parsed.expr().diff(parsed.variable()).simplify();
    let locations = derivative.solve_for_zero(parsed.variable())?;

    let points = locations
        .into_iter()
        .map(|location| CriticalPoint {
            location,
            value: value_at(parsed.expr(), parsed.variable(), location),
        })
        .collect();
    Ok(ExtremaResult { points })
}

/// Solves expression = 0.
pub fn solve_zero(request: &AnalyzeRequest) -> Result<RootsResult, PipelineError> {
    let parsed = parse(&ExpressionSpec::new(&request.expression))?;
    let roots = parsed.expr().solve_for_zero(parsed.variable())?;
    debug!("{} roots of {} = 0", roots.len(), parsed.expr());
    Ok(RootsResult { roots })
}

/// Solves derivative = 0, without value annotations.
pub fn derivative_roots(request: &AnalyzeRequest) -> Result<RootsResult, PipelineError> {
    let parsed = parse(&ExpressionSpec::new(&request.expression))?;
    let derivative = parsed.expr().diff(parsed.variable()).simplify();
    let roots = derivative.solve_for_zero(parsed.variable())?;
    Ok(RootsResult { roots })
}

/// The combined report: derivative, critical points, roots.
pub fn analyze(request: &AnalyzeRequest) -> Result<AnalysisResult, PipelineError> {
    let derivative = differentiate(request)?.derivative;
    let critical_points = extrema(request)?.points;
    let roots = solve_zero(request)?.roots;
    Ok(AnalysisResult {
        derivative,
        critical_points,
        roots,
    })
}

// Function value at a (possibly complex) critical point location.
fn value_at(expr: &Expr, var: &str, location: Complex64) -> PointValue {
    if location.im.abs() < 1e-10 {
        expr.eval_point(var, location.re)
    } else {
        PointValue::from_complex(expr.eval_complex(var, location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::symbolic_solve::SolveFailure;
    use approx::assert_relative_eq;

    #[test]
    fn test_derivative_of_cube() {
        let result = differentiate(&AnalyzeRequest::new("x^3")).unwrap();
        let x = Expr::var("x");
        assert_eq!(
            result.derivative,
            Expr::Const(3.0) * x.pow(Expr::Const(2.0))
        );
    }

    #[test]
    fn test_derivative_status_line() {
        let result = differentiate(&AnalyzeRequest::new("x^3")).unwrap();
        assert_eq!(result.to_string(), "derivative: (3 * (x ^ 2))");
    }

    #[test]
    fn test_critical_point_of_cube() {
        let result = extrema(&AnalyzeRequest::new("x^3")).unwrap();
        assert_eq!(result.points.len(), 1);
        assert_relative_eq!(result.points[0].location.re, 0.0);
        assert_eq!(result.points[0].value, PointValue::Real(0.0));
    }

    #[test]
    fn test_critical_point_of_parabola_with_value() {
        // f(x) = x^2 - 4: critical point at 0, f(0) = -4
        let result = extrema(&AnalyzeRequest::new("x^2 - 4")).unwrap();
        assert_eq!(result.points.len(), 1);
        assert_eq!(result.points[0].value, PointValue::Real(-4.0));
    }

    #[test]
    fn test_extrema_status_line_says_unclassified() {
        let result = extrema(&AnalyzeRequest::new("x^2")).unwrap();
        assert!(result.to_string().contains("unclassified"));
    }

    #[test]
    fn test_no_critical_points_of_line() {
        // f'(x) = 2 has no roots
        let result = extrema(&AnalyzeRequest::new("2*x + 1")).unwrap();
        assert!(result.points.is_empty());
        assert_eq!(result.to_string(), "no critical points");
    }

    #[test]
    fn test_roots_of_shifted_parabola() {
        let result = solve_zero(&AnalyzeRequest::new("x^2 - 4")).unwrap();
        let reals: Vec<f64> = result.roots.iter().map(|r| r.re).collect();
        assert_eq!(reals, vec![-2.0, 2.0]);
        assert_eq!(result.to_string(), "solutions: -2, 2");
    }

    #[test]
    fn test_roots_distinguish_empty_from_error() {
        // x^2 + 1 = 0 has complex solutions, a finite set
        let complex = solve_zero(&AnalyzeRequest::new("x^2 + 1")).unwrap();
        assert_eq!(complex.roots.len(), 2);

        // a nonzero constant has no solutions at all
        let empty = solve_zero(&AnalyzeRequest::new("5")).unwrap();
        assert!(empty.roots.is_empty());
        assert_eq!(empty.to_string(), "no solutions");

        // sin(x) = 0 cannot be enumerated: an error, not an empty set
        let err = solve_zero(&AnalyzeRequest::new("sin(x)")).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Solve(SolveFailure::NoClosedForm(_))
        ));
    }

    #[test]
    fn test_identically_zero_reports_infinite_set() {
        let err = solve_zero(&AnalyzeRequest::new("x - x")).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Solve(SolveFailure::InfinitelyManySolutions)
        ));
    }

    #[test]
    fn test_derivative_roots_of_cube() {
        let result = derivative_roots(&AnalyzeRequest::new("x^3")).unwrap();
        assert_eq!(result.roots.len(), 1);
        assert_relative_eq!(result.roots[0].re, 0.0);
    }

    #[test]
    fn test_combined_analysis() {
        let result = analyze(&AnalyzeRequest::new("x^2 - 4")).unwrap();
        assert_eq!(result.critical_points.len(), 1);
        assert_eq!(result.roots.len(), 2);
        let x = Expr::var("x");
        assert_eq!(result.derivative, Expr::Const(2.0) * x.pow(Expr::Const(1.0)).simplify());
    }

    #[test]
    fn test_bad_expression_is_parse_error() {
        let err = differentiate(&AnalyzeRequest::new("")).unwrap_err();
        assert!(matches!(err, PipelineError::Parse(_)));
    }
}
