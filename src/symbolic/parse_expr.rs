use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{
    brackets_are_balanced, find_leftmost_operator_outside_brackets,
    find_rightmost_operator_outside_brackets, matching_bracket,
};
use std::f64::consts::{E, PI};

/// Turns a string expression into a symbolic expression.
///
/// The split strategy works top-down on operator precedence: the string is
/// divided at the rightmost `+`/`-` outside brackets (so chains associate to
/// the left), then at the rightmost `*`/`/`, then at the leftmost `^` (right
/// associative), and what remains is a bracketed group, a function call, a
/// number literal, a named constant or a variable.
///
/// # Example
/// ```
/// use curvecalc::symbolic::parse_expr::parse_expression_str;
/// let expr = parse_expression_str("x^2 - 4").unwrap();
/// assert_eq!(expr.to_string(), "((x ^ 2) - 4)");
/// ```
pub fn parse_expression_str(input: &str) -> Result<Expr, String> {
    if !brackets_are_balanced(input) {
        return Err(format!("unbalanced brackets in `{}`", input.trim()));
    }
    parse_node(input)
}

fn parse_node(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty expression".to_string());
    }

    // number literal first: this also absorbs signed and scientific forms
    // like "-2" and "1.5e-3" in one place
    if let Ok(value) = input.parse::<f64>() {
        return Ok(Expr::Const(value));
    }

    // a bracket pair wrapping the whole input is transparent
    if input.starts_with('(') && matching_bracket(input, 0) == Some(input.len() - 1) {
        return parse_node(&input[1..input.len() - 1]);
    }

    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['+', '-']) {
        let left = parse_node(&input[..pos])?;
        let right = parse_node(&input[pos + 1..])?;
        return Ok(match op {
            '+' => Expr::Add(left.boxed(), right.boxed()),
            _ => Expr::Sub(left.boxed(), right.boxed()),
        });
    }

    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['*', '/']) {
        let left = parse_node(&input[..pos])?;
        let right = parse_node(&input[pos + 1..])?;
        return Ok(match op {
            '*' => Expr::Mul(left.boxed(), right.boxed()),
            _ => Expr::Div(left.boxed(), right.boxed()),
        });
    }

    // no binary operator at this level, so a leading sign is unary; this sits
    // above the '^' split so that -x^2 stays -(x^2)
    if let Some(rest) = input.strip_prefix('-') {
        return Ok(Expr::Mul(
            Box::new(Expr::Const(-1.0)),
            parse_node(rest)?.boxed(),
        ));
    }
    if let Some(rest) = input.strip_prefix('+') {
        return parse_node(rest);
    }

    if let Some(pos) = find_leftmost_operator_outside_brackets(input, '^') {
        let base = parse_node(&input[..pos])?;
        let exponent = parse_node(&input[pos + 1..])?;
        return Ok(Expr::Pow(base.boxed(), exponent.boxed()));
    }

    // function application: name followed by a bracket pair closing at the end
    if let Some(open) = input.find('(') {
        if open > 0 && matching_bracket(input, open) == Some(input.len() - 1) {
            let name = input[..open].trim();
            let inner = parse_node(&input[open + 1..input.len() - 1])?;
            return function_by_name(name, inner);
        }
    }

    match input {
        "pi" | "Pi" | "PI" => return Ok(Expr::Const(PI)),
        "e" | "E" => return Ok(Expr::Const(E)),
        _ => {}
    }

    if is_identifier(input) {
        return Ok(Expr::Var(input.to_string()));
    }

    Err(format!("invalid expression fragment `{}`", input))
}

// Both conventional (tan, asin) and mathematical (tg, arcsin) spellings are
// accepted; sqrt and log are rewritten to their canonical tree forms.
fn function_by_name(name: &str, inner: Expr) -> Result<Expr, String> {
    let arg = inner.boxed();
    let expr = match name {
        "exp" => Expr::Exp(arg),
        "ln" | "log" => Expr::Ln(arg),
        "sqrt" => Expr::Pow(arg, Box::new(Expr::Const(0.5))),
        "sin" => Expr::sin(arg),
        "cos" => Expr::cos(arg),
        "tg" | "tan" => Expr::tg(arg),
        "ctg" | "cot" => Expr::ctg(arg),
        "arcsin" | "asin" => Expr::arcsin(arg),
        "arccos" | "acos" => Expr::arccos(arg),
        "arctg" | "arctan" | "atan" => Expr::arctg(arg),
        "arcctg" | "acot" => Expr::arcctg(arg),
        _ => return Err(format!("unknown function `{}`", name)),
    };
    Ok(expr)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constant() {
        let expr = parse_expression_str("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
    }

    #[test]
    fn test_parse_negative_constant() {
        let expr = parse_expression_str("-2.5").unwrap();
        assert_eq!(expr, Expr::Const(-2.5));
    }

    #[test]
    fn test_parse_scientific_literal() {
        let expr = parse_expression_str("3e-2").unwrap();
        assert_eq!(expr, Expr::Const(0.03));
    }

    #[test]
    fn test_parse_variable() {
        let expr = parse_expression_str("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_pi_and_e() {
        assert_eq!(
            parse_expression_str("pi").unwrap(),
            Expr::Const(std::f64::consts::PI)
        );
        assert_eq!(
            parse_expression_str("e").unwrap(),
            Expr::Const(std::f64::consts::E)
        );
    }

    #[test]
    fn test_parse_addition() {
        let expr = parse_expression_str("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_subtraction_chain_left_associative() {
        let expr = parse_expression_str("x - 2 + 3").unwrap();
        let x = Expr::Var("x".to_string());
        let expected = (x - Expr::Const(2.0)) + Expr::Const(3.0);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_multiplication_binds_tighter_than_addition() {
        let expr = parse_expression_str("x + 2 * 3").unwrap();
        let expected = Expr::Var("x".to_string()) + Expr::Const(2.0) * Expr::Const(3.0);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_division() {
        let expr = parse_expression_str("x / 2").unwrap();
        assert_eq!(
            expr,
            Expr::Div(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_power() {
        let expr = parse_expression_str("x^2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_power_right_associative() {
        let expr = parse_expression_str("x^2^3").unwrap();
        let expected = Expr::Var("x".to_string())
            .pow(Expr::Const(2.0).pow(Expr::Const(3.0)));
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_power_of_expression() {
        let expr = parse_expression_str("2*x^2").unwrap();
        let expected =
            Expr::Const(2.0) * Expr::Var("x".to_string()).pow(Expr::Const(2.0));
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_unary_minus_on_variable() {
        let expr = parse_expression_str("-x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_unary_minus_on_group() {
        let expr = parse_expression_str("-(x + 1)").unwrap();
        let expected = Expr::Mul(
            Box::new(Expr::Const(-1.0)),
            Box::new(Expr::Var("x".to_string()) + Expr::Const(1.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_brackets() {
        let expr = parse_expression_str("(x + 1) * 2").unwrap();
        let expected = (Expr::Var("x".to_string()) + Expr::Const(1.0)) * Expr::Const(2.0);
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_exponential() {
        let expr = parse_expression_str("exp(x)").unwrap();
        assert_eq!(expr, Expr::Exp(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_logarithm_spellings() {
        let ln = Expr::Ln(Box::new(Expr::Var("x".to_string())));
        assert_eq!(parse_expression_str("ln(x)").unwrap(), ln);
        assert_eq!(parse_expression_str("log(x)").unwrap(), ln);
    }

    #[test]
    fn test_parse_sqrt_is_half_power() {
        let expr = parse_expression_str("sqrt(x)").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(0.5))
            )
        );
    }

    #[test]
    fn test_parse_trig_spellings() {
        let tg = Expr::tg(Box::new(Expr::Var("x".to_string())));
        assert_eq!(parse_expression_str("tg(x)").unwrap(), tg);
        assert_eq!(parse_expression_str("tan(x)").unwrap(), tg);
    }

    #[test]
    fn test_parse_nested_functions() {
        let expr = parse_expression_str("sin(cos(x))").unwrap();
        assert_eq!(
            expr,
            Expr::sin(Box::new(Expr::cos(Box::new(Expr::Var("x".to_string())))))
        );
    }

    #[test]
    fn test_parse_function_in_larger_expression() {
        let expr = parse_expression_str("sin(x) + cos(x)").unwrap();
        let x = || Box::new(Expr::Var("x".to_string()));
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::sin(x())),
                Box::new(Expr::cos(x()))
            )
        );
    }

    #[test]
    fn test_parse_complex_expression() {
        let expr = parse_expression_str("(x + 1) * (x - 2) / exp(x)").unwrap();
        let x = || Expr::Var("x".to_string());
        let expected = Expr::Div(
            Box::new((x() + Expr::Const(1.0)) * (x() - Expr::Const(2.0))),
            Box::new(Expr::Exp(x().boxed())),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_expression_str("").is_err());
        assert!(parse_expression_str("   ").is_err());
    }

    #[test]
    fn test_parse_unbalanced_brackets() {
        assert!(parse_expression_str("(x + 1").is_err());
        assert!(parse_expression_str("x + 1)").is_err());
    }

    #[test]
    fn test_parse_trailing_operator() {
        assert!(parse_expression_str("x +").is_err());
    }

    #[test]
    fn test_parse_unknown_function() {
        assert!(parse_expression_str("sinh(x)").is_err());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_expression_str("2x").is_err());
        assert!(parse_expression_str("$?").is_err());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let a = parse_expression_str("x^2 - x - 1").unwrap();
        let b = parse_expression_str("x^2 - x - 1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_roundtrip_through_display() {
        for text in ["x^2 - 4", "sin(x) * exp(-x)", "1 / (x + 1)", "-x^3 + 2*x"] {
            let once = parse_expression_str(text).unwrap();
            let twice = parse_expression_str(&once.to_string()).unwrap();
            assert_eq!(once, twice, "round-trip failed for `{}`", text);
        }
    }
}
