//! Complex-aware evaluation. The exact table path and the point queries need
//! more than IEEE f64 semantics: `sqrt(-4)` has a perfectly good complex
//! value, while `1/0` has none. [`PointValue`] is the three-way result the
//! data model calls for - real, complex, or undefined - and every variant
//! renders as text.

use crate::symbolic::symbolic_engine::Expr;
use num_complex::Complex64;
use num_traits::Zero;
use std::f64::consts::PI;
use std::fmt;

/// Imaginary parts below this are treated as real results of a complex
/// evaluation (they arise from rounding, e.g. a real cube root computed via
/// the principal complex branch).
const IM_TOLERANCE: f64 = 1e-10;

/// The value of a function at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointValue {
    /// Finite real value
    Real(f64),
    /// Finite complex value (e.g. sqrt of a negative number)
    Complex(Complex64),
    /// No finite value at this point (division by zero, indeterminate form)
    Undefined,
}

impl PointValue {
    pub fn is_real(&self) -> bool {
        matches!(self, PointValue::Real(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, PointValue::Undefined)
    }

    /// The value as a complex number, when it has one.
    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            PointValue::Real(v) => Some(Complex64::new(*v, 0.0)),
            PointValue::Complex(c) => Some(*c),
            PointValue::Undefined => None,
        }
    }

    /// Classifies a finished complex computation into the three-way value.
    pub fn from_complex(c: Complex64) -> PointValue {
        if !c.re.is_finite() || !c.im.is_finite() {
            PointValue::Undefined
        } else if c.im.abs() < IM_TOLERANCE {
            PointValue::Real(c.re)
        } else {
            PointValue::Complex(c)
        }
    }
}

impl fmt::Display for PointValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PointValue::Real(v) => write!(f, "{}", v),
            PointValue::Complex(c) => write!(f, "{}", c),
            PointValue::Undefined => write!(f, "undefined"),
        }
    }
}

impl Expr {
    /// Evaluates the expression at `var = x`, classifying the result.
    ///
    /// The real path is tried first; when it produces a non-finite value the
    /// evaluation is retried on the complex plane, which rescues domain
    /// failures like negative square roots and logs of negatives. Points
    /// with no finite value on either path come back [`PointValue::Undefined`].
    pub fn eval_point(&self, var: &str, x: f64) -> PointValue {
        let real = self.eval1d(var, x);
        if real.is_finite() {
            return PointValue::Real(real);
        }
        PointValue::from_complex(self.eval_complex(var, Complex64::new(x, 0.0)))
    }

    /// Evaluates the expression at a complex argument, with principal
    /// branches for the multivalued functions.
    pub fn eval_complex(&self, var: &str, z: Complex64) -> Complex64 {
        match self {
            Expr::Var(name) => {
                if name == var {
                    z
                } else {
                    Complex64::new(f64::NAN, f64::NAN)
                }
            }
            Expr::Const(val) => Complex64::new(*val, 0.0),
            Expr::Add(lhs, rhs) => lhs.eval_complex(var, z) + rhs.eval_complex(var, z),
            Expr::Sub(lhs, rhs) => lhs.eval_complex(var, z) - rhs.eval_complex(var, z),
            Expr::Mul(lhs, rhs) => lhs.eval_complex(var, z) * rhs.eval_complex(var, z),
            Expr::Div(lhs, rhs) => {
                let denominator = rhs.eval_complex(var, z);
                if denominator.is_zero() {
                    Complex64::new(f64::INFINITY, f64::INFINITY)
                } else {
                    lhs.eval_complex(var, z) / denominator
                }
            }
            Expr::Pow(base, exp) => {
                let b = base.eval_complex(var, z);
                let e = exp.eval_complex(var, z);
                if b.is_zero() && e.re > 0.0 {
                    Complex64::zero()
                } else {
                    b.powc(e)
                }
            }
            Expr::Exp(expr) => expr.eval_complex(var, z).exp(),
            Expr::Ln(expr) => expr.eval_complex(var, z).ln(),
            Expr::sin(expr) => expr.eval_complex(var, z).sin(),
            Expr::cos(expr) => expr.eval_complex(var, z).cos(),
            Expr::tg(expr) => expr.eval_complex(var, z).tan(),
            Expr::ctg(expr) => {
                let t = expr.eval_complex(var, z).tan();
                if t.is_zero() {
                    Complex64::new(f64::INFINITY, f64::INFINITY)
                } else {
                    Complex64::new(1.0, 0.0) / t
                }
            }
            Expr::arcsin(expr) => expr.eval_complex(var, z).asin(),
            Expr::arccos(expr) => expr.eval_complex(var, z).acos(),
            Expr::arctg(expr) => expr.eval_complex(var, z).atan(),
            Expr::arcctg(expr) => {
                Complex64::new(PI / 2.0, 0.0) - expr.eval_complex(var, z).atan()
            }
        }
    }
}
