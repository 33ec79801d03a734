use fusecalc_rs::Evaluator;
use log::{debug, warn};
use std::process::ExitCode;

const SAMPLE_EXPRESSIONS: &[&str] = &[
    "3 + 5 * 10 / 2",
    "3 + 5.5 * (10 + 2)",
    "pow(2, 3) + 10",
    "min(4,6)",
    "max(7,3)",
    "abs(-5)",
    "2 / 0",
];

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let expressions: Vec<&str> = if args.is_empty() {
        debug!("No expressions given, running the samples");
        SAMPLE_EXPRESSIONS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let evaluator = Evaluator::new();
    let mut failures = 0;

    for expression in &expressions {
        match evaluator.evaluate_expression(expression) {
            Ok(result) => println!("Result: {}", result),
            Err(err) => {
                failures += 1;
                eprintln!("Error: {}", err);
                if let Some(position) = err.position() {
                    eprintln!("  {}", expression);
                    eprintln!("  {}", caret_line(expression, position));
                }
            }
        }
    }

    if failures > 0 {
        warn!("{} of {} expressions failed", failures, expressions.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Marker pointing at the character that starts at byte offset `position`.
fn caret_line(expression: &str, position: usize) -> String {
    let column = expression
        .get(..position)
        .map_or(0, |prefix| prefix.chars().count());
    format!("{}^", " ".repeat(column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusecalc_rs::evaluate;

    #[test]
    fn test_caret_points_at_error() {
        let expression = "1 + )";
        let err = evaluate(expression).unwrap_err();
        assert_eq!(err.position(), Some(4));
        assert_eq!(caret_line(expression, 4), "    ^");
    }

    #[test]
    fn test_caret_counts_characters_not_bytes() {
        let expression = "é + 1 $";
        let err = evaluate(expression).unwrap_err();
        let position = err.position().unwrap();
        assert_eq!(caret_line(expression, position), "^");
        assert_eq!(caret_line("1 + → 2", "1 + ".len()), "    ^");
    }

    #[test]
    fn test_caret_at_end_of_input() {
        assert_eq!(caret_line("12", 2), "  ^");
    }
}
