pub mod calc;
pub mod error;

pub use calc::{Calculator, CalculatorConfig, SubstitutionMode};
pub use error::{EvalError, Integer, Result};

/// Evaluates `expression` with the default configuration after substituting
/// `variables` (`"name value name value ..."`, may be empty).
pub fn evaluate(expression: &str, variables: &str) -> Result<Integer> {
    Calculator::default().calculate(expression, variables)
}
