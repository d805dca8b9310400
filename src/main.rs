#![allow(non_snake_case)]
//! Console driver for the expression pipeline. It plays the role of the
//! hosting surface: it collects the raw inputs, runs each pipeline action,
//! and renders the results - table rows, a PNG plot, and one-line status
//! strings. Pipeline errors go to the shared status area (stdout); plot
//! rendering failures are surfaced separately on stderr, since the plot
//! cannot show inline text.

use curvecalc::Utils::logger::init_logging;
use curvecalc::Utils::plots::{plot_curve, plot_curve_gnuplot};
use curvecalc::Utils::tables::render_table;
use curvecalc::pipeline::analyze::{
    AnalyzeRequest, derivative_roots, differentiate, extrema, solve_zero,
};
use curvecalc::pipeline::point_query::{SlopeRequest, ValueRequest, slope, value};
use curvecalc::pipeline::sample::{TableRequest, sample};
use log::info;
use std::env;
use std::process::ExitCode;

const CREDITS: &str = "curvecalc - a symbolic single-variable function explorer";
const PLOT_FILE: &str = "curve.png";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("credits") {
        println!("{}", CREDITS);
        return ExitCode::SUCCESS;
    }

    if args.len() < 3 {
        eprintln!(
            "usage: curvecalc \"<expression of x>\" <x1> <x2> [x_query] [x2_query]\n       curvecalc credits\n\nset CURVECALC_LOG to off|debug|info|warn|error to control logging\nset CURVECALC_PLOT to gnuplot to switch the plot backend"
        );
        return ExitCode::FAILURE;
    }

    init_logging(env::var("CURVECALC_LOG").ok());

    let expression = args[0].clone();
    let (x1, x2) = (args[1].clone(), args[2].clone());

    // table + plot, the sampling action
    let table_request = TableRequest {
        expression: expression.clone(),
        x1,
        x2,
    };
    match sample(&table_request) {
        Ok(result) => {
            println!("{}", render_table(&result.points));
            let plotted = if env::var("CURVECALC_PLOT").as_deref() == Ok("gnuplot") {
                plot_curve_gnuplot(&expression, &result.curve, PLOT_FILE)
            } else {
                plot_curve(&expression, &result.curve, PLOT_FILE)
            };
            match plotted {
                Ok(()) => info!("curve written to {}", PLOT_FILE),
                // the plot surface has no status line of its own
                Err(e) => eprintln!("could not plot the function: {}", e),
            }
        }
        Err(e) => println!("Error: {}", e),
    }

    // analysis actions, each its own status line
    let analyze_request = AnalyzeRequest::new(&expression);
    match differentiate(&analyze_request) {
        Ok(result) => println!("{}", result),
        Err(e) => println!("Error: {}", e),
    }
    match extrema(&analyze_request) {
        Ok(result) => println!("{}", result),
        Err(e) => println!("Error: {}", e),
    }
    match solve_zero(&analyze_request) {
        Ok(result) => println!("f = 0: {}", result),
        Err(e) => println!("Error: {}", e),
    }
    match derivative_roots(&analyze_request) {
        Ok(result) => println!("f' = 0: {}", result),
        Err(e) => println!("Error: {}", e),
    }

    // optional point queries
    if args.len() >= 4 {
        let value_request = ValueRequest {
            expression: expression.clone(),
            x: args[3].clone(),
        };
        match value(&value_request) {
            Ok(result) => println!("{}", result),
            Err(e) => println!("Error: {}", e),
        }
    }
    if args.len() >= 5 {
        let slope_request = SlopeRequest {
            expression: expression.clone(),
            x1: args[3].clone(),
            x2: args[4].clone(),
        };
        match slope(&slope_request) {
            Ok(result) => println!("{}", result),
            Err(e) => println!("Error: {}", e),
        }
    }

    ExitCode::SUCCESS
}
