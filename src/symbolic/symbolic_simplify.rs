//! # Simplification Module
//!
//! Bottom-up algebraic cleanup of expression trees. The derivative rules
//! produce literal artifacts like `(3 - 1)` exponents and `* 1` factors;
//! one children-first pass of constant folding plus identity rules turns
//! `((3 * x^(3 - 1)) * 1)` into `(3 * (x ^ 2))`.
//!
//! Rules applied:
//! - constant folding for `+ - * / ^` on two constants
//! - `x + 0 = x`, `x - 0 = x`, `0 - x = -x`
//! - `x * 0 = 0`, `x * 1 = x`
//! - `0 / x = 0` (x nonzero), `x / 1 = x`
//! - `x ^ 1 = x`, `x ^ 0 = 1`, `1 ^ x = 1`
//!
//! Function nodes over constants are left unevaluated (`sin(2)` stays
//! symbolic); the numeric layers evaluate them when a number is needed.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Simplifies the expression by constant folding and identity rules.
    ///
    /// Children are simplified first, then the rules are applied at the
    /// current node, so folded constants propagate upward in one pass.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => simplify_add(lhs.simplify(), rhs.simplify()),
            Expr::Sub(lhs, rhs) => simplify_sub(lhs.simplify(), rhs.simplify()),
            Expr::Mul(lhs, rhs) => simplify_mul(lhs.simplify(), rhs.simplify()),
            Expr::Div(lhs, rhs) => simplify_div(lhs.simplify(), rhs.simplify()),
            Expr::Pow(base, exp) => simplify_pow(base.simplify(), exp.simplify()),
            Expr::Exp(expr) => Expr::Exp(Box::new(expr.simplify())),
            Expr::Ln(expr) => Expr::Ln(Box::new(expr.simplify())),
            Expr::sin(expr) => Expr::sin(Box::new(expr.simplify())),
            Expr::cos(expr) => Expr::cos(Box::new(expr.simplify())),
            Expr::tg(expr) => Expr::tg(Box::new(expr.simplify())),
            Expr::ctg(expr) => Expr::ctg(Box::new(expr.simplify())),
            Expr::arcsin(expr) => Expr::arcsin(Box::new(expr.simplify())),
            Expr::arccos(expr) => Expr::arccos(Box::new(expr.simplify())),
            Expr::arctg(expr) => Expr::arctg(Box::new(expr.simplify())),
            Expr::arcctg(expr) => Expr::arcctg(Box::new(expr.simplify())),
        }
    }
}

fn simplify_add(lhs: Expr, rhs: Expr) -> Expr {
    match (&lhs, &rhs) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
        (Expr::Const(a), _) if *a == 0.0 => rhs,
        (_, Expr::Const(b)) if *b == 0.0 => lhs,
        _ => Expr::Add(lhs.boxed(), rhs.boxed()),
    }
}

fn simplify_sub(lhs: Expr, rhs: Expr) -> Expr {
    match (&lhs, &rhs) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
        (_, Expr::Const(b)) if *b == 0.0 => lhs,
        (Expr::Const(a), _) if *a == 0.0 => {
            Expr::Mul(Box::new(Expr::Const(-1.0)), rhs.boxed())
        }
        _ => Expr::Sub(lhs.boxed(), rhs.boxed()),
    }
}

fn simplify_mul(lhs: Expr, rhs: Expr) -> Expr {
    match (&lhs, &rhs) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
        (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
        (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(0.0),
        (Expr::Const(a), _) if *a == 1.0 => rhs,
        (_, Expr::Const(b)) if *b == 1.0 => lhs,
        _ => Expr::Mul(lhs.boxed(), rhs.boxed()),
    }
}

fn simplify_div(lhs: Expr, rhs: Expr) -> Expr {
    match (&lhs, &rhs) {
        (Expr::Const(a), Expr::Const(b)) if *b != 0.0 => Expr::Const(a / b),
        (Expr::Const(a), _) if *a == 0.0 && !rhs.is_zero() => Expr::Const(0.0),
        (_, Expr::Const(b)) if *b == 1.0 => lhs,
        _ => Expr::Div(lhs.boxed(), rhs.boxed()),
    }
}

fn simplify_pow(base: Expr, exp: Expr) -> Expr {
    match (&base, &exp) {
        (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(*b)),
        (_, Expr::Const(b)) if *b == 1.0 => base,
        (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(1.0),
        (Expr::Const(a), _) if *a == 1.0 => Expr::Const(1.0),
        _ => Expr::Pow(base.boxed(), exp.boxed()),
    }
}
