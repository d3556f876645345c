use std::io::Write;

use intraday_core::SecuritySnapshot;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Writes registry listings in the selected format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    pretty: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    pub fn render<W: Write>(
        &self,
        out: &mut W,
        snapshots: &[SecuritySnapshot],
    ) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Table => render_table(out, snapshots)?,
            OutputFormat::Json => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut *out, snapshots)?;
                } else {
                    serde_json::to_writer(&mut *out, snapshots)?;
                }
                writeln!(out)?;
            }
            OutputFormat::Ndjson => {
                for snapshot in snapshots {
                    serde_json::to_writer(&mut *out, snapshot)?;
                    writeln!(out)?;
                }
            }
        }

        out.flush()?;
        Ok(())
    }
}

fn render_table<W: Write>(out: &mut W, snapshots: &[SecuritySnapshot]) -> std::io::Result<()> {
    for snapshot in snapshots {
        writeln!(
            out,
            "< {} {} {} {} {}",
            snapshot.trade_date,
            snapshot.symbol,
            snapshot.high_price,
            snapshot.low_price,
            snapshot.average_price
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use intraday_core::{SecurityRegistry, TradeDate};
    use rust_decimal_macros::dec;

    use super::*;

    fn listing() -> Vec<SecuritySnapshot> {
        let registry = SecurityRegistry::new();
        let date = TradeDate::parse("2024-01-02").expect("valid date");
        registry.book(date, "fb", dec!(184.19)).expect("books");
        registry.book(date, "fb", dec!(196.50)).expect("books");
        registry.book(date, "aapl", dec!(178.44)).expect("books");
        registry.list()
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        Renderer::new(format, false)
            .render(&mut out, &listing())
            .expect("renders");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn table_rows_show_high_low_average() {
        assert_eq!(
            render(OutputFormat::Table),
            "< 2024-01-02 AAPL 178.44 178.44 178.44\n< 2024-01-02 FB 196.50 184.19 190.35\n"
        );
    }

    #[test]
    fn json_is_one_array() {
        let output = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        let rows = value.as_array().expect("array");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["average_price"], "190.35");
    }

    #[test]
    fn ndjson_is_one_object_per_line() {
        let output = render(OutputFormat::Ndjson);
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        let first: SecuritySnapshot = serde_json::from_str(lines[0]).expect("valid snapshot");
        assert_eq!(first.symbol.as_str(), "AAPL");
    }
}
