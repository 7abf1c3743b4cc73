//! Terminal rendering shared by the menu and one-shot commands

use chrono::Local;
use console::style;
use std::io::{self, Write};

use progression::models::format_sequence;
use progression::selftest::SelfTestReport;
use progression::{Memory, Prediction, ValidationResult};

pub fn write_prediction<W: Write>(out: &mut W, prediction: &Prediction) -> io::Result<()> {
    match (prediction.next_number, prediction.common_difference) {
        (Some(next), Some(difference)) if prediction.success => writeln!(
            out,
            "{} Next number: {} (common difference: {})",
            style("✓").green(),
            style(next).cyan().bold(),
            difference
        ),
        _ => writeln!(out, "{} {}", style("✗").red(), prediction.message),
    }
}

pub fn write_validation<W: Write>(out: &mut W, result: &ValidationResult) -> io::Result<()> {
    if result.is_valid {
        writeln!(out, "{} {}", style("✓").green(), result.message)
    } else {
        writeln!(out, "{} {}", style("✗").red(), result.message)
    }
}

pub fn write_memories<W: Write>(out: &mut W, memories: &[Memory]) -> io::Result<()> {
    if memories.is_empty() {
        return writeln!(out, "{}", style("No memories yet.").dim());
    }

    writeln!(
        out,
        "{} ({})",
        style("Memories").bold(),
        style(memories.len()).cyan()
    )?;
    for memory in memories {
        writeln!(
            out,
            "  {:>3}. [{}] → {} (d = {})  {}",
            style(memory.index).dim(),
            format_sequence(&memory.sequence),
            style(memory.next_number).cyan(),
            memory.common_difference,
            style(
                memory
                    .timestamp
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
            )
            .dim()
        )?;
    }
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, report: &SelfTestReport) -> io::Result<()> {
    writeln!(out, "{}", style("Built-in tests").bold())?;
    for outcome in &report.outcomes {
        let mark = if outcome.passed {
            style("PASS").green()
        } else {
            style("FAIL").red()
        };
        writeln!(
            out,
            "  [{}] {:<16} [{}] {}",
            mark, outcome.name, outcome.sequence, outcome.prediction.message
        )?;
    }
    writeln!(out, "\n  {}/{} passed", report.passed, report.total)
}
