//! Console front end for the Pay Classifier.
//!
//! This module prompts for the three pay figures, reads them from any
//! buffered reader, and writes the salary line to any writer. The binary
//! wires these to standard input and output; tests use in-memory buffers.
//!
//! # Example
//!
//! ```
//! use pay_classifier::console::run;
//! use pay_classifier::models::PayLabel;
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! let result = run(Cursor::new("10000 10000 10000"), &mut output).unwrap();
//!
//! assert_eq!(result.label, PayLabel::High);
//! assert!(String::from_utf8(output).unwrap().ends_with("Salary: High"));
//! ```

mod tokens;

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::calculation::classify;
use crate::error::{ClassifierError, ClassifierResult};
use crate::models::{ClassificationResult, PayInputs, PayLabel};

pub use tokens::TokenReader;

/// Prompt written before reading base pay.
pub const BASE_PAY_PROMPT: &str = "Enter base pay: ";

/// Prompt written before reading overtime pay.
pub const OVERTIME_PROMPT: &str = "Enter overtime pay: ";

/// Prompt written before reading the bonus amount.
pub const BONUS_PROMPT: &str = "Enter bonus amount: ";

/// Formats the final output line for a label.
///
/// # Examples
///
/// ```
/// use pay_classifier::console::format_salary_line;
/// use pay_classifier::models::PayLabel;
///
/// assert_eq!(format_salary_line(PayLabel::Low), "Salary: Low");
/// ```
pub fn format_salary_line(label: PayLabel) -> String {
    format!("Salary: {}", label)
}

/// Prompts for and reads base pay, overtime pay and bonus, in that order.
///
/// Each prompt is flushed before its value is read.
///
/// # Errors
///
/// Returns `InvalidInput` when a token is not an integer that fits in `i32`,
/// `MissingInput` when the reader ends before a value is read, and `Io`
/// when reading or writing fails.
pub fn read_pay_inputs<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
) -> ClassifierResult<PayInputs> {
    let mut tokens = TokenReader::new(reader);

    let base_pay = prompt_for_amount(&mut tokens, writer, BASE_PAY_PROMPT, "base pay")?;
    let overtime = prompt_for_amount(&mut tokens, writer, OVERTIME_PROMPT, "overtime pay")?;
    let bonus = prompt_for_amount(&mut tokens, writer, BONUS_PROMPT, "bonus amount")?;

    Ok(PayInputs::new(base_pay, overtime, bonus))
}

/// Runs one full prompt, classify, print cycle.
///
/// The salary line is written without a trailing newline.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
) -> ClassifierResult<ClassificationResult> {
    let inputs = read_pay_inputs(reader, writer)?;
    let result = classify(&inputs);

    write!(writer, "{}", format_salary_line(result.label))?;
    writer.flush()?;

    info!(
        total_pay = result.total_pay,
        label = %result.label,
        "Salary band printed"
    );

    Ok(result)
}

fn prompt_for_amount<R: BufRead, W: Write>(
    tokens: &mut TokenReader<R>,
    writer: &mut W,
    prompt: &str,
    field: &str,
) -> ClassifierResult<i32> {
    writer.write_all(prompt.as_bytes())?;
    writer.flush()?;

    let Some(token) = tokens.next_token()? else {
        warn!(field, "Input ended before value was entered");
        return Err(ClassifierError::MissingInput {
            field: field.to_string(),
        });
    };

    parse_amount(&token, field)
}

fn parse_amount(token: &[u8], field: &str) -> ClassifierResult<i32> {
    let parsed = match std::str::from_utf8(token) {
        Ok(text) => text.parse::<i32>().map_err(|err| err.to_string()),
        Err(err) => Err(err.to_string()),
    };

    parsed.map_err(|message| {
        let value = String::from_utf8_lossy(token).into_owned();
        warn!(field, value = %value, error = %message, "Rejected pay input");
        ClassifierError::InvalidInput {
            field: field.to_string(),
            value,
            message,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(input: &str) -> (ClassifierResult<ClassificationResult>, String) {
        let mut output = Vec::new();
        let result = run(Cursor::new(input.to_string()), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_format_salary_line_for_each_label() {
        assert_eq!(format_salary_line(PayLabel::High), "Salary: High");
        assert_eq!(format_salary_line(PayLabel::Medium), "Salary: Medium");
        assert_eq!(format_salary_line(PayLabel::Low), "Salary: Low");
        assert_eq!(format_salary_line(PayLabel::Entry), "Salary: Entry");
    }

    #[test]
    fn test_read_pay_inputs_in_order() {
        let mut output = Vec::new();
        let inputs = read_pay_inputs(Cursor::new("100\n200\n300\n"), &mut output).unwrap();

        assert_eq!(inputs, PayInputs::new(100, 200, 300));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter base pay: Enter overtime pay: Enter bonus amount: "
        );
    }

    #[test]
    fn test_parse_amount_accepts_signs() {
        assert_eq!(parse_amount(b"-42", "base pay").unwrap(), -42);
        assert_eq!(parse_amount(b"+42", "base pay").unwrap(), 42);
    }

    #[test]
    fn test_parse_amount_rejects_decimal_point() {
        let err = parse_amount(b"12.5", "bonus amount").unwrap_err();
        match err {
            ClassifierError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "bonus amount");
                assert_eq!(value, "12.5");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_amount_rejects_out_of_range() {
        let err = parse_amount(b"2147483648", "overtime pay").unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput { .. }));
    }

    #[test]
    fn test_run_writes_prompts_then_salary_line() {
        let (result, output) = run_with("10000\n10000\n10000\n");

        assert_eq!(result.unwrap().label, PayLabel::High);
        assert_eq!(
            output,
            "Enter base pay: Enter overtime pay: Enter bonus amount: Salary: High"
        );
    }

    #[test]
    fn test_run_stops_at_first_invalid_value() {
        let (result, output) = run_with("100\nabc\n300\n");

        assert!(matches!(
            result,
            Err(ClassifierError::InvalidInput { ref field, .. }) if field == "overtime pay"
        ));
        assert_eq!(output, "Enter base pay: Enter overtime pay: ");
    }

    #[test]
    fn test_run_reports_missing_bonus() {
        let (result, output) = run_with("100 200");

        assert!(matches!(
            result,
            Err(ClassifierError::MissingInput { ref field }) if field == "bonus amount"
        ));
        assert!(!output.contains("Salary"));
    }

    #[test]
    fn test_undecodable_bytes_after_bonus_are_ignored() {
        let mut output = Vec::new();
        let result = run(Cursor::new(b"10000 10000 10000 \xff\n".to_vec()), &mut output).unwrap();

        assert_eq!(result.label, PayLabel::High);
        assert!(String::from_utf8(output).unwrap().ends_with("Salary: High"));
    }

    #[test]
    fn test_undecodable_token_is_invalid_input() {
        let mut output = Vec::new();
        let err = run(Cursor::new(b"\xff\n1\n1\n".to_vec()), &mut output).unwrap_err();

        match err {
            ClassifierError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "base pay");
                assert_eq!(value, "\u{fffd}");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert_eq!(output, b"Enter base pay: ");
    }
}
