//! Closed-form equation solving. An expression is solved for zero by
//! extracting its polynomial coefficients in the bound variable and applying
//! the closed-form root formulas, after factoring out roots at the origin.
//!
//! Coverage is deliberately bounded: linear and quadratic equations (with
//! complex root pairs when the discriminant is negative), plus any higher
//! power that deflates to one of those by stripping zero constant terms (so
//! `x^3 = 0` and `3*x^2 = 0` both resolve to {0}). Anything else - higher
//! degrees, transcendental equations such as `sin(x) = 0` with its infinite
//! periodic root set - is reported as [`SolveFailure::NoClosedForm`]: a
//! truncated list is never presented as a complete solution set.
//!
//! An equation that is identically zero is reported as
//! [`SolveFailure::InfinitelyManySolutions`], keeping "cannot enumerate"
//! distinguishable from "no solutions" (the empty vector).

use crate::symbolic::symbolic_engine::Expr;
use num_complex::Complex64;
use thiserror::Error;

/// Coefficients this close to zero are dropped when trimming and deflating.
const COEFF_EPS: f64 = 1e-12;

/// Why a solve could not produce a finite solution set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveFailure {
    /// The equation holds for every value of the variable.
    #[error("equation is identically zero: infinitely many solutions")]
    InfinitelyManySolutions,
    /// No closed-form finite solution set is available.
    #[error("no closed-form solution for `{0}`")]
    NoClosedForm(String),
}

impl Expr {
    /// Extracts ascending polynomial coefficients in `var`, or `None` when
    /// the expression is not polynomial in `var`.
    ///
    /// `[c0, c1, c2]` represents `c0 + c1*var + c2*var^2`. Subtrees free of
    /// `var` are evaluated numerically, so constant function applications
    /// like `sin(2)` still count as coefficients.
    pub fn polynomial_coefficients(&self, var: &str) -> Option<Vec<f64>> {
        if !self.contains_variable(var) {
            let value = self.eval1d(var, 0.0);
            return value.is_finite().then(|| vec![value]);
        }
        match self {
            Expr::Var(name) if name == var => Some(vec![0.0, 1.0]),
            Expr::Add(lhs, rhs) => {
                let a = lhs.polynomial_coefficients(var)?;
                let b = rhs.polynomial_coefficients(var)?;
                Some(poly_add(&a, &b, 1.0))
            }
            Expr::Sub(lhs, rhs) => {
                let a = lhs.polynomial_coefficients(var)?;
                let b = rhs.polynomial_coefficients(var)?;
                Some(poly_add(&a, &b, -1.0))
            }
            Expr::Mul(lhs, rhs) => {
                let a = lhs.polynomial_coefficients(var)?;
                let b = rhs.polynomial_coefficients(var)?;
                Some(poly_mul(&a, &b))
            }
            Expr::Div(lhs, rhs) => {
                // only division by a nonzero constant keeps it polynomial
                if rhs.contains_variable(var) {
                    return None;
                }
                let divisor = rhs.eval1d(var, 0.0);
                if !divisor.is_finite() || divisor == 0.0 {
                    return None;
                }
                let a = lhs.polynomial_coefficients(var)?;
                Some(a.into_iter().map(|c| c / divisor).collect())
            }
            Expr::Pow(base, exp) => {
                let n = match exp.as_ref() {
                    Expr::Const(n) if *n >= 0.0 && n.fract() == 0.0 && *n <= 64.0 => *n as usize,
                    _ => return None,
                };
                let b = base.polynomial_coefficients(var)?;
                let mut acc = vec![1.0];
                for _ in 0..n {
                    acc = poly_mul(&acc, &b);
                }
                Some(acc)
            }
            _ => None,
        }
    }

    /// Solves `self = 0` for `var`.
    ///
    /// Returns the distinct solutions (real ones have zero imaginary part),
    /// sorted real-first ascending; the empty vector means no solutions.
    pub fn solve_for_zero(&self, var: &str) -> Result<Vec<Complex64>, SolveFailure> {
        let simplified = self.simplify();
        let coeffs = simplified
            .polynomial_coefficients(var)
            .ok_or_else(|| SolveFailure::NoClosedForm(simplified.to_string()))?;
        solve_polynomial(coeffs)
    }
}

fn poly_add(a: &[f64], b: &[f64], sign: f64) -> Vec<f64> {
    let mut out = vec![0.0; a.len().max(b.len())];
    for (i, &c) in a.iter().enumerate() {
        out[i] += c;
    }
    for (i, &c) in b.iter().enumerate() {
        out[i] += sign * c;
    }
    out
}

fn poly_mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            out[i + j] += ca * cb;
        }
    }
    out
}

/// Roots of a polynomial given by ascending coefficients.
fn solve_polynomial(mut coeffs: Vec<f64>) -> Result<Vec<Complex64>, SolveFailure> {
    while coeffs.last().is_some_and(|c| c.abs() < COEFF_EPS) {
        coeffs.pop();
    }
    if coeffs.is_empty() {
        return Err(SolveFailure::InfinitelyManySolutions);
    }

    let mut roots: Vec<Complex64> = Vec::new();

    // factor out x^k: a root at the origin, whatever its multiplicity
    let zeros = coeffs.iter().take_while(|c| c.abs() < COEFF_EPS).count();
    if zeros > 0 {
        roots.push(Complex64::new(0.0, 0.0));
        coeffs.drain(..zeros);
    }

    match coeffs.len() - 1 {
        0 => {}
        1 => {
            roots.push(Complex64::new(-coeffs[0] / coeffs[1], 0.0));
        }
        2 => {
            let (c, b, a) = (coeffs[0], coeffs[1], coeffs[2]);
            let discriminant = b * b - 4.0 * a * c;
            if discriminant >= 0.0 {
                let sq = discriminant.sqrt();
                roots.push(Complex64::new((-b - sq) / (2.0 * a), 0.0));
                roots.push(Complex64::new((-b + sq) / (2.0 * a), 0.0));
            } else {
                let sq = (-discriminant).sqrt();
                roots.push(Complex64::new(-b / (2.0 * a), -sq / (2.0 * a)));
                roots.push(Complex64::new(-b / (2.0 * a), sq / (2.0 * a)));
            }
        }
        degree => {
            return Err(SolveFailure::NoClosedForm(format!(
                "polynomial with a residual factor of degree {}",
                degree
            )));
        }
    }

    roots.sort_by(|a, b| {
        a.re.partial_cmp(&b.re)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.im.partial_cmp(&b.im).unwrap_or(std::cmp::Ordering::Equal))
    });
    roots.dedup_by(|a, b| (*a - *b).norm() < 1e-9);
    Ok(roots)
}

/// Renders one root: plain number for real roots, complex form otherwise.
pub fn format_root(root: &Complex64) -> String {
    if root.im.abs() < 1e-10 {
        format!("{}", root.re)
    } else {
        format!("{}", root)
    }
}
