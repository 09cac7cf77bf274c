//! Portfolio budget input.
//!
//! The budget is read from an interactive prompt. A malformed answer gets one
//! more chance; a second malformed answer is fatal. Positivity is not checked
//! here, it is the allocator's concern.

use std::io::{BufRead, Write};

use log::warn;

use crate::error::FundError;
use crate::result::Result;

/// Prompt text shown before each attempt.
pub const PROMPT: &str = "Enter the value of your portfolio:";
/// Message shown after the first malformed answer.
pub const RETRY_MESSAGE: &str = "Error: Invalid Portfolio Value! \nPlease try again:";

/// Parse `raw` as a finite real number.
pub fn parse_budget(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| FundError::InvalidBudget(format!("{trimmed:?} is not a number")))?;
    if !value.is_finite() {
        return Err(FundError::InvalidBudget(format!(
            "{trimmed:?} is not a finite number"
        )));
    }
    Ok(value)
}

/// Interactive budget prompt over arbitrary input and output streams.
pub struct BudgetPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> BudgetPrompt<R, W> {
    /// Create a prompt reading answers from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for the budget, retrying exactly once on a malformed answer.
    ///
    /// The parsed value is echoed back on success. End of input counts as a
    /// malformed answer.
    pub fn read(&mut self) -> Result<f64> {
        let value = match self.attempt() {
            Ok(value) => value,
            Err(FundError::InvalidBudget(reason)) => {
                warn!("Rejected portfolio value: {}", reason);
                writeln!(self.output, "{}", RETRY_MESSAGE)?;
                self.attempt()?
            }
            Err(e) => return Err(e),
        };
        writeln!(self.output, "{}", value)?;
        Ok(value)
    }

    fn attempt(&mut self) -> Result<f64> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FundError::InvalidBudget("no input".to_string()));
        }
        parse_budget(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_prompt(answers: &str) -> (Result<f64>, String) {
        let mut output = Vec::new();
        let result = BudgetPrompt::new(answers.as_bytes(), &mut output).read();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_budget("500").unwrap(), 500.0);
        assert_eq!(parse_budget("  1e6\n").unwrap(), 1_000_000.0);
        assert_eq!(parse_budget("-12.5").unwrap(), -12.5);
    }

    #[test]
    fn rejects_text_and_non_finite_values() {
        for raw in ["abc", "", "12,000", "inf", "NaN"] {
            assert!(
                matches!(parse_budget(raw), Err(FundError::InvalidBudget(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn first_answer_accepted() {
        let (result, output) = run_prompt("10000\n");
        assert_eq!(result.unwrap(), 10000.0);
        assert_eq!(output, format!("{PROMPT}10000\n"));
    }

    #[test]
    fn retries_once_after_bad_answer() {
        let (result, output) = run_prompt("abc\n500\n");
        assert_eq!(result.unwrap(), 500.0);
        assert_eq!(output.matches(PROMPT).count(), 2);
        assert!(output.contains("Please try again:"));
    }

    #[test]
    fn second_bad_answer_is_fatal() {
        let (result, output) = run_prompt("abc\nxyz\n1000\n");
        assert!(matches!(result, Err(FundError::InvalidBudget(_))));
        assert_eq!(output.matches(PROMPT).count(), 2);
    }

    #[test]
    fn end_of_input_uses_up_attempts() {
        let (result, _) = run_prompt("");
        assert!(matches!(result, Err(FundError::InvalidBudget(_))));
    }
}
