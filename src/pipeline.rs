/// # Expression pipeline
/// The four operations the hosting surface drives, each a stateless function
/// from an explicit request struct to a structured result or a typed error:
/// parse, sample (table + plot curve), analyze (derivative, critical points,
/// roots) and point query (value, secant slope).
///
/// ```
/// use curvecalc::pipeline::analyze::{AnalyzeRequest, solve_zero};
/// let roots = solve_zero(&AnalyzeRequest::new("x^2 - 4")).unwrap();
/// assert_eq!(roots.to_string(), "solutions: -2, 2");
/// ```
pub mod analyze;
pub mod error;
pub mod parse;
pub mod point_query;
pub mod sample;
