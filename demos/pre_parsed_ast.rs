use fusecalc_rs::Evaluator;

fn main() {
    pretty_env_logger::init();

    let evaluator = Evaluator::new();

    let expression = "3 + 5.5 * (10 + 2) - pow(2, abs(1 - 4))";
    let ast = match evaluator.parse_expression(expression) {
        Ok(ast) => ast,
        Err(err) => {
            println!("Error: {}", err);
            return;
        }
    };

    println!("Parsed: {}", ast);
    println!("Depth: {}", ast.depth());
    println!("Result: {}", evaluator.evaluate_ast(&ast));
}
