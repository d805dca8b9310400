//! # Symbolic Engine Module
//!
//! Core expression tree for the function explorer. An [`Expr`] is an exact
//! algebraic representation of a single-variable function: it can be built
//! from text (see `parse_expr`), substituted into, differentiated
//! analytically, simplified, lambdified into a plain Rust closure, and solved
//! for zero.
//!
//! ## Main structures and methods
//!
//! ### `Expr` Enum
//! - **Variables**: `Var(String)` - the bound variable, conventionally "x"
//! - **Constants**: `Const(f64)` - numerical constants (also `pi` and `e`)
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `Exp`, `Ln`, `sin`, `cos`, etc. - mathematical functions
//!
//! ### Key methods
//! - `parse_expression_str(text)` - text into an expression tree
//! - `diff(var)` - analytical differentiation
//! - `simplify()` - constant folding and algebraic identities
//! - `lambdify1D()` - convert to an executable numeric function
//! - `set_variable(var, value)` - substitute the variable with a value
//!
//! Recursive `Box<Expr>` structure; operator overloads (`+ - * /`) allow
//! natural construction in code and tests. Trigonometric variants use
//! mathematical notation (tg, ctg) rather than programming names.

#![allow(non_camel_case_types)]

use std::fmt;

/// Symbolic expression tree. Each variant is one node kind; nested
/// expressions are boxed, so arbitrarily deep trees are representable.
///
/// Structural equality (`PartialEq`) is what the parser's idempotence
/// guarantee is stated in terms of: same text, same tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g. "x")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    /// Sine
    sin(Box<Expr>),
    /// Cosine
    cos(Box<Expr>),
    /// Tangent - mathematical notation 'tg'
    tg(Box<Expr>),
    /// Cotangent - mathematical notation 'ctg'
    ctg(Box<Expr>),
    /// Arcsine
    arcsin(Box<Expr>),
    /// Arccosine
    arccos(Box<Expr>),
    /// Arctangent - mathematical notation 'arctg'
    arctg(Box<Expr>),
    /// Arccotangent - mathematical notation 'arcctg'
    arcctg(Box<Expr>),
}

/// Pretty printing with explicit parentheses, so precedence never depends on
/// the reader. The output re-parses to a structurally equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tg(expr) => write!(f, "tg({})", expr),
            Expr::ctg(expr) => write!(f, "ctg({})", expr),
            Expr::arcsin(expr) => write!(f, "arcsin({})", expr),
            Expr::arccos(expr) => write!(f, "arccos({})", expr),
            Expr::arctg(expr) => write!(f, "arctg({})", expr),
            Expr::arcctg(expr) => write!(f, "arcctg({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// Creates a variable expression.
    pub fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    /// Substitutes a variable with a constant value throughout the
    /// expression.
    ///
    /// Recursively walks the tree and replaces every occurrence of `var`
    /// with `Const(value)`; everything else is rebuilt unchanged.
    pub fn set_variable(&self, var: &str, value: f64) -> Expr {
        match self {
            Expr::Var(name) if name == var => Expr::Const(value),
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Mul(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Pow(base, exp) => Expr::Pow(
                Box::new(base.set_variable(var, value)),
                Box::new(exp.set_variable(var, value)),
            ),
            Expr::Exp(expr) => Expr::Exp(Box::new(expr.set_variable(var, value))),
            Expr::Ln(expr) => Expr::Ln(Box::new(expr.set_variable(var, value))),
            Expr::sin(expr) => Expr::sin(Box::new(expr.set_variable(var, value))),
            Expr::cos(expr) => Expr::cos(Box::new(expr.set_variable(var, value))),
            Expr::tg(expr) => Expr::tg(Box::new(expr.set_variable(var, value))),
            Expr::ctg(expr) => Expr::ctg(Box::new(expr.set_variable(var, value))),
            Expr::arcsin(expr) => Expr::arcsin(Box::new(expr.set_variable(var, value))),
            Expr::arccos(expr) => Expr::arccos(Box::new(expr.set_variable(var, value))),
            Expr::arctg(expr) => Expr::arctg(Box::new(expr.set_variable(var, value))),
            Expr::arcctg(expr) => Expr::arcctg(Box::new(expr.set_variable(var, value))),
        }
    }

    /// Checks if the expression contains the given variable.
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
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
            | Expr::arcctg(expr) => expr.contains_variable(var_name),
        }
    }

    /// Convenience wrapper for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates exponential function e^(self).
    pub fn exp(self) -> Expr {
        Expr::Exp(self.boxed())
    }

    /// Creates natural logarithm ln(self).
    pub fn ln(self) -> Expr {
        Expr::Ln(self.boxed())
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Creates the square root as self^0.5, the canonical form `sqrt` parses
    /// into.
    pub fn sqrt(self) -> Expr {
        Expr::Pow(self.boxed(), Box::new(Expr::Const(0.5)))
    }

    /// Checks if expression is exactly the constant 0.
    pub fn is_zero(&self) -> bool {
        match self {
            Expr::Const(val) => val == &0.0,
            _ => false,
        }
    }

    /// Checks if expression is a constant.
    pub fn is_const(&self) -> bool {
        matches!(self, Expr::Const(_))
    }
}
