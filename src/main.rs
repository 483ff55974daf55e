use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use intcalc::{Calculator, CalculatorConfig, Integer, SubstitutionMode};
use log::{debug, error};

/// Evaluates an integer arithmetic expression with + - * / and parentheses.
///
/// Anything not given on the command line is prompted for on stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression, e.g. "a + b * (c - 1)".
    #[arg(short, long)]
    expression: Option<String>,

    /// Variable values as "name value name value ...", e.g. "a 2 b 3 c 4".
    #[arg(short, long)]
    variables: Option<String>,

    /// Only substitute variable names that stand alone, not inside longer words.
    #[arg(long)]
    whole_word: bool,
}

fn read_or_prompt(
    value: Option<String>,
    input: &mut impl BufRead,
    message: &str,
) -> io::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let mut stdin = io::stdin().lock();
    let expression = match read_or_prompt(args.expression, &mut stdin, "Enter an expression: ") {
        Ok(expression) => expression,
        Err(e) => {
            error!("Failed to read the expression: {e}");
            return ExitCode::FAILURE;
        }
    };
    let variables = match read_or_prompt(
        args.variables,
        &mut stdin,
        "Enter variable values (for x, y, z: x 5 y 10 z 11): ",
    ) {
        Ok(variables) => variables,
        Err(e) => {
            error!("Failed to read the variables: {e}");
            return ExitCode::FAILURE;
        }
    };

    let substitution = if args.whole_word {
        SubstitutionMode::WholeWord
    } else {
        SubstitutionMode::Textual
    };
    let calculator = Calculator::new(CalculatorConfig { substitution });

    let result = calculator.calculate(&expression, &variables);
    match &result {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("Invalid input: {e}"),
    }
    exit_status(&result).into()
}

fn exit_status(result: &intcalc::Result<Integer>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_terminator() {
        let mut input = Cursor::new("2 + 3\r\n");
        assert_eq!(read_or_prompt(None, &mut input, "").unwrap(), "2 + 3");

        let mut input = Cursor::new("x 10\n");
        assert_eq!(read_or_prompt(None, &mut input, "").unwrap(), "x 10");
    }

    #[test]
    fn test_given_value_skips_reading() {
        let mut input = Cursor::new("ignored\n");
        assert_eq!(
            read_or_prompt(Some("1 * 2".to_string()), &mut input, "").unwrap(),
            "1 * 2"
        );
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_prompt_at_eof_is_empty() {
        let mut input = Cursor::new("");
        assert_eq!(read_or_prompt(None, &mut input, "").unwrap(), "");
    }

    #[test]
    fn test_prompts_read_consecutive_lines() {
        let mut input = Cursor::new("a * 2\na 21\n");
        let expression = read_or_prompt(None, &mut input, "").unwrap();
        let variables = read_or_prompt(None, &mut input, "").unwrap();
        assert_eq!(
            Calculator::default().calculate(&expression, &variables),
            Ok(42)
        );
    }

    #[test]
    fn test_exit_status_follows_result() {
        let calculator = Calculator::default();
        assert_eq!(exit_status(&calculator.calculate("2 + 3", "")), 0);
        assert_eq!(exit_status(&calculator.calculate("5 / 0", "")), 1);
        assert_eq!(exit_status(&calculator.calculate("x", "x")), 1);
    }
}
