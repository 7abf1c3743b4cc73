//! One-shot predict, validate and test commands

use anyhow::Result;
use std::io::{self, Write};

use progression::input::parse_line;
use progression::{selftest, Prediction, SequencePredictor, ValidationResult};

use super::display;

/// Numbers may arrive as one comma-separated argument or as several
fn join_args(numbers: &[String]) -> String {
    numbers.join(",")
}

fn exit_on_failure(ok: bool) -> Result<()> {
    io::stdout().flush()?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

pub fn predict(predictor: &mut SequencePredictor, numbers: &[String], json: bool) -> Result<()> {
    let prediction = match parse_line(&join_args(numbers)) {
        Ok(sequence) => predictor.predict(&sequence),
        Err(e) => Prediction::failure(&e),
    };

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&prediction)?)?;
    } else {
        display::write_prediction(&mut out, &prediction)?;
    }
    drop(out);
    exit_on_failure(prediction.success)
}

pub fn validate(predictor: &SequencePredictor, numbers: &[String], json: bool) -> Result<()> {
    let result = match parse_line(&join_args(numbers)) {
        Ok(sequence) => predictor.validate(&sequence),
        Err(e) => ValidationResult::invalid(&e),
    };

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        display::write_validation(&mut out, &result)?;
    }
    drop(out);
    exit_on_failure(result.is_valid)
}

pub fn test(json: bool) -> Result<()> {
    let report = selftest::run();

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        display::write_report(&mut out, &report)?;
    }
    drop(out);
    exit_on_failure(report.all_passed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_args_accepts_split_numbers() {
        let args: Vec<String> = ["3", "6", "9"].iter().map(|s| s.to_string()).collect();
        assert_eq!(parse_line(&join_args(&args)).unwrap(), vec![3.0, 6.0, 9.0]);

        let single = vec!["3,6,9".to_string()];
        assert_eq!(parse_line(&join_args(&single)).unwrap(), vec![3.0, 6.0, 9.0]);
    }
}
