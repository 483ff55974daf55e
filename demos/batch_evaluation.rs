use intcalc::Calculator;

fn main() {
    pretty_env_logger::init();

    let requests = vec![
        ("(a + b) * 2", "a 120 b 30"),
        ("a / b", "a 80 b 0"),
        ("a - b * c", "a 10 b 2 c"),
    ];

    let calculator = Calculator::default();
    for (i, result) in calculator.calculate_batch(&requests).iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }
}
