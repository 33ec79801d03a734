use fusecalc_rs::evaluate_batch;

fn main() {
    pretty_env_logger::init();

    let expressions = vec![
        "3 + 5 * 10 / 2",
        "pow(1.05, 10) * 1000",
        "max(7, 3) - min(4, 6)",
        "abs(2 - 9) / 0",
        "1 + )",
    ];

    for (i, result) in evaluate_batch(&expressions).into_iter().enumerate() {
        match result {
            Ok(value) => println!("Result {}: {}", i, value),
            Err(err) => println!("Error {}: {}", i, err),
        }
    }
}
