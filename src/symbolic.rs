#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use curvecalc::symbolic::symbolic_engine::Expr;
/// let input = "x^2 - 4";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let parsed_function = parsed_expression.lambdify1D();
/// println!("{}, f(3) = {}", input, parsed_function(3.0));
/// ```
pub mod parse_expr;
///____________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the symbolic expression tree
/// 2) turns a symbolic expression into a Rust function
/// 3) turns a symbolic expression into a string expression for printing
///# Example#
/// ```
/// use curvecalc::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x^3").unwrap();
/// // differentiate with respect to x
/// let df_dx = f.diff("x").simplify();
/// println!("df_dx = {}", df_dx);
/// // solve f = 0
/// let roots = f.solve_for_zero("x").unwrap();
/// assert_eq!(roots.len(), 1);
/// ```
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
/// complex-aware point evaluation: real, complex or undefined values
pub mod symbolic_complex;
/// lambdification of expressions into plain Rust closures
pub mod symbolic_lambdify;
/// algebraic simplification: constant folding and identity rules
pub mod symbolic_simplify;
/// closed-form root solving for polynomial equations
pub mod symbolic_solve;
#[cfg(test)]
mod symbolic_engine_tests;
/// bracket-aware scanning and small numeric helpers
pub mod utils;
