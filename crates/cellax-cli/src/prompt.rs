//! Asking the operator for the merge decision on a terminal.

use std::io::{self, BufRead, Stderr, StdinLock, Write};

use tracing::warn;

use cellax_engine::{DecisionPrompt, MergePreview};
use cellax_model::MergeDecision;

use crate::preview::{DEFAULT_PREVIEW_LIMIT, preview_headline, preview_table};

/// Prints the preview and reads a choice from `input`.
///
/// Accepts `0`/`1`/`2` or `c`/`n`/`m`. End of input, or any I/O failure,
/// means [`MergeDecision::Cancel`]. Unrecognized answers are asked again.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    limit: usize,
}

impl TerminalPrompt<StdinLock<'static>, Stderr> {
    /// Reads stdin and writes to stderr, leaving stdout to the ontology document.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            limit: DEFAULT_PREVIEW_LIMIT,
        }
    }

    #[must_use]
    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, preview: &MergePreview) -> io::Result<MergeDecision> {
        writeln!(self.output, "{}", preview_headline(preview))?;
        writeln!(self.output, "{}", preview_table(preview, self.limit))?;
        for decision in MergeDecision::ALL {
            writeln!(self.output, "  [{}] {}", decision.index(), decision.label())?;
        }
        let mut line = String::new();
        loop {
            write!(self.output, "Choice: ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(MergeDecision::Cancel);
            }
            match line.parse::<MergeDecision>() {
                Ok(decision) => return Ok(decision),
                Err(_) => writeln!(self.output, "Please answer 0, 1 or 2.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> DecisionPrompt for TerminalPrompt<R, W> {
    fn decide(&mut self, preview: &MergePreview) -> MergeDecision {
        self.ask(preview).unwrap_or_else(|error| {
            warn!(%error, "prompt failed, cancelling");
            MergeDecision::Cancel
        })
    }
}
