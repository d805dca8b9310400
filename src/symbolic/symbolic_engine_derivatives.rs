//! # Differentiation and Evaluation Module
//!
//! Extends [`Expr`] with the operations the analysis pipeline is built on:
//!
//! - `diff(var)` - analytical differentiation by the standard rule table
//!   (power rule, product rule, quotient rule, chain rule)
//! - `sym_to_str(var)` - fully parenthesized string form
//! - `all_arguments_are_variables()` - variable extraction, the basis of the
//!   single-variable validation
//! - `eval1d(var, x)` - direct recursive evaluation without closure creation
//! - `compare_num1D(...)` - sanity cross-check of the analytical derivative
//!   against a central-difference numerical one
//!
//! The derivative is purely structural: a deterministic function of the input
//! tree with no numeric approximation involved.

use crate::symbolic::parse_expr::parse_expression_str;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{linspace, norm, numerical_derivative};
use std::f64::consts::PI;

impl Expr {
    /// Parses a mathematical expression from its string representation.
    ///
    /// # Supported syntax
    /// - Variables: x (or any identifier)
    /// - Constants: 3.14, -2.5, 1e-6, pi, e
    /// - Operators: +, -, *, /, ^
    /// - Functions: sin, cos, tg/tan, ctg/cot, their arc forms, exp, ln/log,
    ///   sqrt
    /// - Parentheses for grouping
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        parse_expression_str(input)
    }

    /// Computes the analytical derivative with respect to `var`.
    ///
    /// Implements the standard differentiation rules:
    /// - Power rule: d/dx(f^g) with constant g: g * f^(g-1) * f'
    /// - Product rule: d/dx(f*g) = f'*g + f*g'
    /// - Quotient rule: d/dx(f/g) = (f'*g - g'*f) / g^2
    /// - Chain rule for all function nodes
    ///
    /// The result is raw; callers that display it run `simplify()` on it.
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            // general f^g via the exponent-times-lowered-power form; when the
            // exponent depends on var the logarithmic term is added
            Expr::Pow(base, exp) => {
                let power_term = Expr::Mul(
                    Box::new(Expr::Mul(
                        exp.clone(),
                        Box::new(Expr::Pow(
                            base.clone(),
                            Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                        )),
                    )),
                    Box::new(base.diff(var)),
                );
                if exp.contains_variable(var) {
                    let log_term = Expr::Mul(
                        Box::new(Expr::Mul(
                            Box::new(Expr::Pow(base.clone(), exp.clone())),
                            Box::new(Expr::Ln(base.clone())),
                        )),
                        Box::new(exp.diff(var)),
                    );
                    Expr::Add(Box::new(power_term), Box::new(log_term))
                } else {
                    power_term
                }
            }
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::cos(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::ctg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::sin(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::arcsin(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                    )),
                    Box::new(Expr::Const(0.5)),
                )),
            ),
            Expr::arccos(expr) => Expr::Div(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(expr.diff(var)),
                )),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                    )),
                    Box::new(Expr::Const(0.5)),
                )),
            ),
            Expr::arctg(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Add(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                )),
            ),
            Expr::arcctg(expr) => Expr::Div(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(expr.diff(var)),
                )),
                Box::new(Expr::Add(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                )),
            ),
        }
    }

    /// String form with every subexpression parenthesized. Re-parses to a
    /// structurally equal tree.
    pub fn sym_to_str(&self, var: &str) -> String {
        match self {
            Expr::Var(name) => name.clone(),
            Expr::Const(val) => val.to_string(),
            Expr::Add(lhs, rhs) => format!("({}) + ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Sub(lhs, rhs) => format!("({}) - ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Mul(lhs, rhs) => format!("({}) * ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Div(lhs, rhs) => format!("({}) / ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Pow(base, exp) => format!("({}^{})", base.sym_to_str(var), exp.sym_to_str(var)),
            Expr::Exp(expr) => format!("exp({})", expr.sym_to_str(var)),
            Expr::Ln(expr) => format!("ln({})", expr.sym_to_str(var)),
            Expr::sin(expr) => format!("sin({})", expr.sym_to_str(var)),
            Expr::cos(expr) => format!("cos({})", expr.sym_to_str(var)),
            Expr::tg(expr) => format!("tg({})", expr.sym_to_str(var)),
            Expr::ctg(expr) => format!("ctg({})", expr.sym_to_str(var)),
            Expr::arcsin(expr) => format!("arcsin({})", expr.sym_to_str(var)),
            Expr::arccos(expr) => format!("arccos({})", expr.sym_to_str(var)),
            Expr::arctg(expr) => format!("arctg({})", expr.sym_to_str(var)),
            Expr::arcctg(expr) => format!("arcctg({})", expr.sym_to_str(var)),
        }
    }

    /// Extracts all unique variable names, sorted and deduplicated.
    ///
    /// The single-variable invariant of the pipeline is checked against this
    /// list: for a valid input it is empty or equals `[bound_variable]`.
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();

        match self {
            Expr::Var(name) => {
                vars.push(name.clone());
            }
            Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                vars.extend(lhs.all_arguments_are_variables());
                vars.extend(rhs.all_arguments_are_variables());
            }
            Expr::Exp(expr)
            | Expr::Ln(expr)
            | Expr::sin(expr)
            | Expr::cos(expr)
            | Expr::tg(expr)
            | Expr::ctg(expr)
            | Expr::arcsin(expr)
            | Expr::arccos(expr)
            | Expr::arctg(expr)
            | Expr::arcctg(expr) => {
                vars.extend(expr.all_arguments_are_variables());
            }
        }

        vars.sort();
        vars.dedup();
        vars
    }

    /// Evaluates the expression at `var = x` by direct recursion, without
    /// creating a closure.
    ///
    /// Domain failures follow IEEE semantics: ln of a negative is NaN,
    /// division by zero is infinite, and so on. Callers that need a
    /// classified value use the complex-aware evaluation layered on top.
    pub fn eval1d(&self, var: &str, x: f64) -> f64 {
        match self {
            Expr::Var(name) => {
                if name == var {
                    x
                } else {
                    f64::NAN
                }
            }
            Expr::Const(val) => *val,
            Expr::Add(lhs, rhs) => lhs.eval1d(var, x) + rhs.eval1d(var, x),
            Expr::Sub(lhs, rhs) => lhs.eval1d(var, x) - rhs.eval1d(var, x),
            Expr::Mul(lhs, rhs) => lhs.eval1d(var, x) * rhs.eval1d(var, x),
            Expr::Div(lhs, rhs) => lhs.eval1d(var, x) / rhs.eval1d(var, x),
            Expr::Pow(base, exp) => base.eval1d(var, x).powf(exp.eval1d(var, x)),
            Expr::Exp(expr) => expr.eval1d(var, x).exp(),
            Expr::Ln(expr) => expr.eval1d(var, x).ln(),
            Expr::sin(expr) => expr.eval1d(var, x).sin(),
            Expr::cos(expr) => expr.eval1d(var, x).cos(),
            Expr::tg(expr) => expr.eval1d(var, x).tan(),
            Expr::ctg(expr) => 1.0 / expr.eval1d(var, x).tan(),
            Expr::arcsin(expr) => expr.eval1d(var, x).asin(),
            Expr::arccos(expr) => expr.eval1d(var, x).acos(),
            Expr::arctg(expr) => expr.eval1d(var, x).atan(),
            Expr::arcctg(expr) => PI / 2.0 - expr.eval1d(var, x).atan(),
        }
    }

    /// Compares the analytical derivative against a central-difference
    /// numerical derivative over a linspace of `num_values` points.
    ///
    /// Returns the RMS distance between the two and whether it is below
    /// `max_norm`.
    pub fn compare_num1D(
        &self,
        var: &str,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> (f64, bool) {
        let analytical = self.diff(var).simplify();
        let f = self.lambdify1D();
        let df = analytical.lambdify1D();

        let x_values = linspace(start, end, num_values);
        let analytical_values: Vec<f64> = x_values.iter().map(|&x| df(x)).collect();
        let numerical_values = numerical_derivative(|x| f(x), &x_values, 1e-6);

        let res = norm(&analytical_values, &numerical_values);
        (res, res < max_norm)
    }
}
