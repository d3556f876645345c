//! Read-book-print loop driving a [`SecurityRegistry`].

use std::io::{BufRead, Write};

use intraday_core::{BookOutcome, SecurityRegistry};
use tracing::{debug, info, warn};

use crate::error::CliError;
use crate::input::{parse_line, Booking, InputLine};
use crate::output::Renderer;

pub const PROMPT: &str = "Enter {TRADE DATE (YYYY-MM-DD)} {SYMBOL} {PRICE} or quit to terminate";

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub booked: usize,
    pub rejected: usize,
}

pub struct Session<'a, W> {
    registry: &'a SecurityRegistry,
    renderer: Renderer,
    out: W,
    strict: bool,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(registry: &'a SecurityRegistry, renderer: Renderer, out: W, strict: bool) -> Self {
        Self {
            registry,
            renderer,
            out,
            strict,
        }
    }

    /// Process lines until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<SessionSummary, CliError> {
        let mut summary = SessionSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            let booking = match parse_line(&line) {
                Ok(InputLine::Blank) => continue,
                Ok(InputLine::Quit) => break,
                Ok(InputLine::Book(booking)) => booking,
                Err(source) => {
                    self.reject(&mut summary, line_number, source)?;
                    continue;
                }
            };

            match self.book(&booking) {
                Ok(()) => {
                    summary.booked += 1;
                    self.renderer.render(&mut self.out, &self.registry.list())?;
                }
                Err(source) => self.reject(&mut summary, line_number, source)?,
            }
        }

        Ok(summary)
    }

    fn book(&self, booking: &Booking) -> Result<(), intraday_core::ValidationError> {
        let outcome = self.registry.book(
            booking.trade_date,
            &booking.symbol,
            booking.price.value(),
        )?;

        match outcome {
            BookOutcome::Created => debug!(symbol = %booking.symbol, "created"),
            BookOutcome::Updated => debug!(symbol = %booking.symbol, "updated"),
            BookOutcome::Replaced { previous_date } => debug!(
                symbol = %booking.symbol,
                %previous_date,
                trade_date = %booking.trade_date,
                "replaced"
            ),
        }
        Ok(())
    }

    fn reject(
        &self,
        summary: &mut SessionSummary,
        line_number: usize,
        source: intraday_core::ValidationError,
    ) -> Result<(), CliError> {
        summary.rejected += 1;
        if self.strict {
            return Err(CliError::Rejected {
                line_number,
                source,
            });
        }

        warn!(line_number, error = %source, "rejected booking");
        info!("{PROMPT}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::cli::OutputFormat;

    use super::*;

    fn run(input: &str, strict: bool) -> (Result<SessionSummary, CliError>, String) {
        let registry = SecurityRegistry::new();
        let mut out = Vec::new();
        let result = Session::new(
            &registry,
            Renderer::new(OutputFormat::Table, false),
            &mut out,
            strict,
        )
        .run(Cursor::new(input));
        (result, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn prints_listing_after_each_booking() {
        let (result, output) = run("2024-01-02 aapl 178.44\n2024-01-01 GOOG 1149.49\n", false);

        assert_eq!(
            result.expect("session succeeds"),
            SessionSummary {
                booked: 2,
                rejected: 0
            }
        );
        assert_eq!(
            output,
            "< 2024-01-02 AAPL 178.44 178.44 178.44\n\
             < 2024-01-02 AAPL 178.44 178.44 178.44\n\
             < 2024-01-01 GOOG 1149.49 1149.49 1149.49\n"
        );
    }

    #[test]
    fn stops_at_quit() {
        let (result, output) = run("quit\n2024-01-02 AAPL 178.44\n", false);
        assert_eq!(result.expect("session succeeds").booked, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn lenient_mode_skips_rejected_lines() {
        let (result, output) = run("2024-01-02 GOOG 0\n\n2024-01-02 FB 184.19\n", false);

        assert_eq!(
            result.expect("session succeeds"),
            SessionSummary {
                booked: 1,
                rejected: 1
            }
        );
        assert_eq!(output, "< 2024-01-02 FB 184.19 184.19 184.19\n");
    }

    #[test]
    fn strict_mode_fails_on_first_rejected_line() {
        let (result, output) = run("2024-01-02 FB 184.19\n2024-01-02 GOOG\n", true);

        let err = result.expect_err("must fail");
        assert!(matches!(err, CliError::Rejected { line_number: 2, .. }));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(output, "< 2024-01-02 FB 184.19 184.19 184.19\n");
    }
}
