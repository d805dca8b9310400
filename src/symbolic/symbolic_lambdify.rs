//! Lambdification: converting a symbolic expression into an executable
//! numeric closure. The closure tree mirrors the expression tree, so there is
//! no parsing or interpretation at call time; this is the fast path the plot
//! curve and the derivative cross-check sample through.

use crate::symbolic::symbolic_engine::Expr;
use std::f64::consts::PI;

impl Expr {
    /// Converts a single-variable expression into a `Fn(f64) -> f64` closure.
    ///
    /// Every variable node reads the single argument, so the caller is
    /// responsible for the expression actually being single-variable (the
    /// pipeline validates this at parse time). Domain failures follow IEEE
    /// semantics and surface as NaN or infinity in the output.
    ///
    /// # Examples
    /// ```
    /// use curvecalc::symbolic::symbolic_engine::Expr;
    /// let f = Expr::parse_expression("x^2").unwrap().lambdify1D();
    /// assert_eq!(f(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Var(_) => Box::new(|x| x),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D();
                let exp_fn = exp.lambdify1D();
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::Exp(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).exp())
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).ln())
            }
            Expr::sin(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).cos())
            }
            Expr::tg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).tan())
            }
            Expr::ctg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| 1.0 / expr_fn(x).tan())
            }
            Expr::arcsin(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).asin())
            }
            Expr::arccos(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).acos())
            }
            Expr::arctg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).atan())
            }
            Expr::arcctg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| PI / 2.0 - expr_fn(x).atan())
            }
        }
    }

    /// Evaluates the lambdified expression over a whole vector of inputs.
    ///
    /// The closure is created once and applied per point; this is the grid
    /// pass behind the plot curve.
    pub fn calc_vector_lambdified1D(&self, x: &[f64]) -> Vec<f64> {
        let f = self.lambdify1D();
        x.iter().map(|&xi| f(xi)).collect()
    }
}
