use crate::symbolic::symbolic_engine::Expr;
//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_operator_construction() {
        let x = Expr::var("x");
        let expr = x.clone() + Expr::Const(2.0);
        let expected = Expr::Add(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_neg_is_mul_by_minus_one() {
        let x = Expr::var("x");
        assert_eq!(
            -x.clone(),
            Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(x))
        );
    }

    #[test]
    fn test_set_variable_substitutes_everywhere() {
        let expr = Expr::parse_expression("x^2 + x").unwrap();
        let substituted = expr.set_variable("x", 3.0);
        assert!(!substituted.contains_variable("x"));
        assert_relative_eq!(substituted.simplify().eval1d("x", 0.0), 12.0);
    }

    #[test]
    fn test_substitute_then_simplify_gives_constant() {
        let expr = Expr::parse_expression("2 * x + 1").unwrap();
        let value = expr.set_variable("x", 4.0).simplify();
        assert_eq!(value, Expr::Const(9.0));
    }

    #[test]
    fn test_contains_variable() {
        let expr = Expr::parse_expression("sin(x) + 1").unwrap();
        assert!(expr.contains_variable("x"));
        assert!(!expr.contains_variable("y"));
    }

    #[test]
    fn test_all_arguments_are_variables() {
        let expr = Expr::parse_expression("x^2 + 1").unwrap();
        assert_eq!(expr.all_arguments_are_variables(), vec!["x".to_string()]);
        let constant = Expr::parse_expression("2 + 2").unwrap();
        assert!(constant.all_arguments_are_variables().is_empty());
    }

    #[test]
    fn test_diff_power_rule() {
        let expr = Expr::parse_expression("x^2").unwrap();
        let derivative = expr.diff("x").simplify();
        let expected = Expr::Const(2.0) * Expr::var("x").pow(Expr::Const(1.0)).simplify();
        assert_eq!(derivative, expected);
    }

    #[test]
    fn test_diff_of_constant_is_zero() {
        let expr = Expr::parse_expression("42").unwrap();
        assert_eq!(expr.diff("x").simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_diff_sin_is_cos() {
        let expr = Expr::parse_expression("sin(x)").unwrap();
        let derivative = expr.diff("x").simplify();
        assert_eq!(derivative, Expr::cos(Box::new(Expr::var("x"))));
    }

    #[test]
    fn test_diff_matches_numerical_derivative() {
        for text in ["x^2", "x^3 - 2*x", "sin(x)", "exp(x) * x", "1 / (x + 3)"] {
            let expr = Expr::parse_expression(text).unwrap();
            let (res, ok) = expr.compare_num1D("x", 0.5, 2.0, 100, 1e-4);
            assert!(ok, "`{}` mismatch, norm {}", text, res);
        }
    }

    #[test]
    fn test_diff_is_deterministic() {
        let expr = Expr::parse_expression("x^3 + sin(x)").unwrap();
        assert_eq!(expr.diff("x"), expr.diff("x"));
    }

    #[test]
    fn test_sym_to_str_roundtrip() {
        let expr = Expr::parse_expression("x^2 - x - 1").unwrap();
        let reparsed = Expr::parse_expression(&expr.sym_to_str("x")).unwrap();
        assert_eq!(expr, reparsed);
    }

    #[test]
    fn test_display_roundtrip() {
        let expr = Expr::parse_expression("exp(-x) * sin(2 * x)").unwrap();
        let reparsed = Expr::parse_expression(&expr.to_string()).unwrap();
        assert_eq!(expr, reparsed);
    }

    #[test]
    fn test_eval1d_trig_identity() {
        let expr = Expr::parse_expression("sin(x)^2 + cos(x)^2").unwrap();
        for x in [-2.0, 0.0, 0.7, 3.5] {
            assert_relative_eq!(expr.eval1d("x", x), 1.0, epsilon = 1e-12);
        }
    }
}
