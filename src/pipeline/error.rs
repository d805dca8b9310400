//! Typed error taxonomy of the analysis pipeline. Every operation classifies
//! all of its internal failures into exactly one of these kinds with a
//! human-readable message; no raw failure reaches the caller. Errors are
//! values, never panics.

use crate::symbolic::symbolic_solve::SolveFailure;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Unparsable text, or an expression referencing a symbol other than the
    /// bound variable.
    #[error("parse error: {0}")]
    Parse(String),

    /// Non-numeric or missing range/point text, rejected before any symbolic
    /// work.
    #[error("input error: {0}")]
    Input(String),

    /// Substitution or domain failure during evaluation.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Equal x-values in a slope query.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// The solver cannot produce a finite closed-form answer; carries the
    /// reason, keeping this distinguishable from an empty solution set.
    #[error("solve error: {0}")]
    Solve(#[from] SolveFailure),
}
