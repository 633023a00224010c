//! Line-oriented prompting with bounded re-prompt loops.

use std::{
    io::{BufRead, Write},
    ops::RangeInclusive,
};

use crate::{core::EstimationError, prelude::*};

/// Re-prompt budget for a single question.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W, max_attempts: usize) -> Self {
        Self { input, output, max_attempts }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line to the user.
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result {
        writeln!(self.output, "{line}").context("failed to write to the terminal")
    }

    /// Ask until `parse` accepts the answer.
    ///
    /// Invalid input and unknown profiles are reported and asked again,
    /// any other error is returned immediately.
    pub fn ask<T>(
        &mut self,
        question: &str,
        mut parse: impl FnMut(&str) -> Result<T, EstimationError>,
    ) -> Result<T> {
        for attempt in 1..=self.max_attempts {
            write!(self.output, "{question}")?;
            self.output.flush()?;
            let answer = self.read_line()?;
            match parse(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(error) if error.is_recoverable_by_prompt() => {
                    debug!(attempt, %error, "rejected the answer");
                    writeln!(self.output, "Error: {error}")?;
                }
                Err(error) => return Err(error.into()),
            }
        }
        bail!("giving up after {} invalid answers to `{}`", self.max_attempts, question.trim())
    }

    pub fn number(&mut self, field: &NumberField) -> Result<f64> {
        self.ask(&field.question(), |answer| field.parse(answer))
    }

    /// Ask a yes/no question.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.ask(question, |answer| match answer.to_lowercase().as_str() {
            "yes" | "y" => Ok(true),
            "no" | "n" => Ok(false),
            _ => Err(EstimationError::invalid_input("answer", "please enter yes or no")),
        })
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n_bytes = self.input.read_line(&mut line).context("failed to read the answer")?;
        ensure!(n_bytes != 0, "the input is closed");
        Ok(line)
    }
}

/// Numeric question with a plausibility range and an optional default for an empty answer.
#[must_use]
pub struct NumberField {
    pub parameter: &'static str,
    pub label: &'static str,
    pub range: RangeInclusive<f64>,
    pub default: Option<f64>,
}

impl NumberField {
    pub const fn new(parameter: &'static str, label: &'static str, range: RangeInclusive<f64>) -> Self {
        Self { parameter, label, range, default: None }
    }

    pub const fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    fn question(&self) -> String {
        match self.default {
            Some(default) => format!("Enter {} (default {default}): ", self.label),
            None => format!("Enter {}: ", self.label),
        }
    }

    pub fn parse(&self, answer: &str) -> Result<f64, EstimationError> {
        let not_a_number =
            || EstimationError::invalid_input(self.parameter, "please enter a numeric value");
        if answer.is_empty() {
            return self.default.ok_or_else(not_a_number);
        }
        let value =
            answer.parse::<f64>().ok().filter(|value| value.is_finite()).ok_or_else(not_a_number)?;
        if value < *self.range.start() {
            return Err(EstimationError::invalid_input(
                self.parameter,
                format!("value must be at least {}", self.range.start()),
            ));
        }
        if value > *self.range.end() {
            return Err(EstimationError::invalid_input(
                self.parameter,
                format!("value must be at most {}", self.range.end()),
            ));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const MASS: NumberField = NumberField::new("mass", "vehicle mass (kg)", 800.0..=3000.0);

    fn prompter(input: &str) -> Prompter<Cursor<&str>, Vec<u8>> {
        Prompter::new(Cursor::new(input), Vec::new(), 3)
    }

    #[test]
    fn parse_ok() {
        assert!((MASS.parse("1500").unwrap() - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_not_a_number() {
        let error = MASS.parse("heavy").unwrap_err();
        assert_eq!(error.to_string(), "invalid mass: please enter a numeric value");
        assert!(MASS.parse("NaN").is_err());
        assert!(MASS.parse("inf").is_err());
    }

    #[test]
    fn parse_negative_mass() {
        let error = MASS.parse("-1500").unwrap_err();
        assert!(matches!(error, EstimationError::InvalidInput { parameter: "mass", .. }));
        assert_eq!(error.to_string(), "invalid mass: value must be at least 800");
    }

    #[test]
    fn parse_above_range() {
        assert_eq!(
            MASS.parse("3500").unwrap_err().to_string(),
            "invalid mass: value must be at most 3000",
        );
    }

    #[test]
    fn default_on_empty_answer() {
        let field = NumberField::new("drag coefficient", "drag coefficient (Cd)", 0.15..=0.50)
            .with_default(0.28);
        assert!((field.parse("").unwrap() - 0.28).abs() < f64::EPSILON);
        assert!(MASS.parse("").is_err());
    }

    #[test]
    fn reprompts_after_invalid_answers() {
        let mut prompter = prompter("-5\nabc\n1500\n");
        assert!((prompter.number(&MASS).unwrap() - 1500.0).abs() < f64::EPSILON);
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output.matches("Enter vehicle mass (kg): ").count(), 3);
        assert!(output.contains("Error: invalid mass: value must be at least 800"));
        assert!(output.contains("Error: invalid mass: please enter a numeric value"));
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut prompter = prompter("1\n2\n3\n1500\n");
        let error = prompter.number(&MASS).unwrap_err();
        assert!(error.to_string().starts_with("giving up after 3 invalid answers"));
    }

    #[test]
    fn closed_input() {
        let mut prompter = prompter("");
        assert_eq!(prompter.number(&MASS).unwrap_err().to_string(), "the input is closed");
    }

    #[test]
    fn unrecoverable_error_is_returned_at_once() {
        let mut prompter = prompter("anything\n");
        let error = prompter
            .ask("Go? ", |_| -> Result<(), _> { Err(EstimationError::division_guard("speed", 0)) })
            .unwrap_err();
        assert!(error.downcast_ref::<EstimationError>().is_some());
    }

    #[test]
    fn confirm() {
        let mut prompter = prompter("maybe\nY\n");
        assert!(prompter.confirm("Again? ").unwrap());
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("please enter yes or no"));
        assert!(!self::prompter("no\n").confirm("Again? ").unwrap());
    }
}
