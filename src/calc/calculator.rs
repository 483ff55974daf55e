use crate::calc::{tokenize, Evaluator, SubstitutionMode, VariableBindings};
use crate::error::{Integer, Result};
use log::debug;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculatorConfig {
    pub substitution: SubstitutionMode,
}

/// Substitutes variables, tokenizes and evaluates expressions.
///
/// Holds only configuration; each call builds its own tokens and cursor, so a
/// single `Calculator` can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Evaluates `expression` after substituting `variables`, given as
    /// `"name value name value ..."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intcalc::Calculator;
    ///
    /// let calculator = Calculator::default();
    /// assert_eq!(calculator.calculate("x + 5", "x 10"), Ok(15));
    /// ```
    pub fn calculate(&self, expression: &str, variables: &str) -> Result<Integer> {
        debug!("Calculating {expression:?} with variables {variables:?}");
        let bindings = VariableBindings::parse(variables)?;
        let text = if bindings.is_empty() {
            expression.to_string()
        } else {
            bindings.apply(expression, self.config.substitution)
        };

        let tokens = tokenize(&text)?;
        Evaluator::new(&tokens).evaluate()
    }

    /// Evaluates independent `(expression, variables)` requests in parallel.
    /// Results keep the order of the input.
    pub fn calculate_batch<E, V>(&self, requests: &[(E, V)]) -> Vec<Result<Integer>>
    where
        E: AsRef<str> + Sync,
        V: AsRef<str> + Sync,
    {
        let count = requests.len();
        debug!("Calculating batch of {count} expressions");
        requests
            .par_iter()
            .map(|(expression, variables)| self.calculate(expression.as_ref(), variables.as_ref()))
            .collect()
    }
}
