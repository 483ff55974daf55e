use intcalc::{Calculator, CalculatorConfig, SubstitutionMode};

fn main() {
    pretty_env_logger::init();

    let calculator = Calculator::new(CalculatorConfig {
        substitution: SubstitutionMode::WholeWord,
    });

    let expression = "price * qty - discount / 2";
    let variables = "price 120 qty 3 discount 50";

    match calculator.calculate(expression, variables) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }
}
