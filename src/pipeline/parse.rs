//! The parse operation: raw expression text into a validated
//! single-variable symbolic object, plus the shared numeric input parsing
//! the other operations run before any symbolic work.
//!
//! Parsing is stateless and repeated on every action; two actions never
//! share a [`ParsedExpression`].

use crate::pipeline::error::PipelineError;
use crate::symbolic::symbolic_engine::Expr;
use log::debug;

/// The variable every expression is a function of.
pub const BOUND_VARIABLE: &str = "x";

/// One raw expression input: the text as typed plus the bound variable name.
#[derive(Clone, Debug)]
pub struct ExpressionSpec {
    pub text: String,
    pub variable: String,
}

impl ExpressionSpec {
    pub fn new(text: &str) -> Self {
        ExpressionSpec {
            text: text.to_string(),
            variable: BOUND_VARIABLE.to_string(),
        }
    }
}

/// A validated symbolic expression: parsed, and known to reference no
/// variable other than the bound one.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedExpression {
    expr: Expr,
    variable: String,
}

impl ParsedExpression {
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }
}

/// Parses and validates an expression spec.
///
/// Fails with a parse error when the text is empty, syntactically invalid,
/// or references any symbol other than the bound variable. Idempotent: the
/// same text always yields a structurally equal expression.
pub fn parse(spec: &ExpressionSpec) -> Result<ParsedExpression, PipelineError> {
    let text = spec.text.trim();
    if text.is_empty() {
        return Err(PipelineError::Parse("empty expression".to_string()));
    }

    let expr = Expr::parse_expression(text).map_err(PipelineError::Parse)?;

    let vars = expr.all_arguments_are_variables();
    if let Some(foreign) = vars.iter().find(|name| *name != &spec.variable) {
        return Err(PipelineError::Parse(format!(
            "unknown symbol `{}`: the expression may only use `{}`",
            foreign, spec.variable
        )));
    }

    debug!("parsed `{}` as {}", text, expr);
    Ok(ParsedExpression {
        expr,
        variable: spec.variable.clone(),
    })
}

/// Parses integer input text (range bounds), classified as an input error.
pub fn parse_integer_input(label: &str, text: &str) -> Result<i64, PipelineError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| PipelineError::Input(format!("{} must be an integer, got `{}`", label, text)))
}

/// Parses real input text (query points), classified as an input error.
pub fn parse_real_input(label: &str, text: &str) -> Result<f64, PipelineError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| PipelineError::Input(format!("{} must be a number, got `{}`", label, text)))
}
