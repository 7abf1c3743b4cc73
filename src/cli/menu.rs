//! Interactive menu loop
//!
//! Reads choices line by line so it works the same on a terminal and on
//! piped input. End of input leaves the loop like choosing "Exit".

use anyhow::{Context, Result};
use console::style;
use std::io::{BufRead, Write};
use tracing::debug;

use progression::input::parse_line;
use progression::{selftest, Prediction, SequencePredictor};

use super::display;

pub struct Menu<R, W> {
    input: R,
    output: W,
    predictor: SequencePredictor,
}

enum Choice {
    Predict,
    Memories,
    Tests,
    Clear,
    Exit,
    Unknown(String),
}

impl Choice {
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "1" | "p" | "predict" => Choice::Predict,
            "2" | "m" | "memories" => Choice::Memories,
            "3" | "t" | "test" => Choice::Tests,
            "4" | "c" | "clear" => Choice::Clear,
            "5" | "q" | "quit" | "exit" => Choice::Exit,
            other => Choice::Unknown(other.to_string()),
        }
    }
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, predictor: SequencePredictor) -> Self {
        Self {
            input,
            output,
            predictor,
        }
    }

    pub fn into_predictor(self) -> SequencePredictor {
        self.predictor
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\n{} Arithmetic Sequence Predictor\n",
            style("🔮").bold()
        )?;

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match Choice::parse(&line) {
                Choice::Predict => {
                    write!(
                        self.output,
                        "Enter numbers separated by commas (or 'demo'): "
                    )?;
                    self.output.flush()?;
                    let Some(line) = self.read_line()? else {
                        break;
                    };
                    let prediction = match parse_line(&line) {
                        Ok(sequence) => self.predictor.predict(&sequence),
                        Err(e) => Prediction::failure(&e),
                    };
                    display::write_prediction(&mut self.output, &prediction)?;
                }
                Choice::Memories => {
                    display::write_memories(&mut self.output, self.predictor.memories())?;
                }
                Choice::Tests => {
                    display::write_report(&mut self.output, &selftest::run())?;
                }
                Choice::Clear => {
                    let n = self.predictor.memories().len();
                    self.predictor.clear();
                    writeln!(
                        self.output,
                        "{} Cleared {} memories",
                        style("✓").green(),
                        n
                    )?;
                }
                Choice::Exit => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                Choice::Unknown(other) => {
                    debug!("unknown menu choice: {:?}", other);
                    writeln!(
                        self.output,
                        "{} Invalid choice '{}'. Enter a number from 1 to 5.",
                        style("✗").red(),
                        other
                    )?;
                }
            }
            writeln!(self.output)?;
        }

        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", style("Menu").bold())?;
        writeln!(self.output, "  1. Predict next number")?;
        writeln!(self.output, "  2. View memories")?;
        writeln!(self.output, "  3. Run built-in tests")?;
        writeln!(self.output, "  4. Clear memories")?;
        writeln!(self.output, "  5. Exit")?;
        write!(self.output, "Choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next input line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok((n > 0).then_some(line))
    }
}
