//! # lexstat-format
//!
//! **Tier 3 (Formatting)**
//!
//! Serializes [`DocumentReport`] rows as CSV, TSV or JSONL.
//!
//! ## What belongs here
//! * Report serialization (CSV/TSV/JSONL)
//! * Presentation rounding of ratios
//!
//! ## What does NOT belong here
//! * Business logic (calculating stats)
//! * CLI arg parsing
//! * Choosing or opening the output destination

use std::io::Write;

use anyhow::{Result, anyhow};
use lexstat_math::round_f64;
use lexstat_types::{Category, DocumentReport, REPORT_HEADER, ReportFormat};

/// Decimal places kept for percentages and averages in tabular output.
pub const DECIMALS: u32 = 4;

enum Sink<W: Write> {
    Delimited(csv::Writer<W>),
    Jsonl(W),
}

/// Streaming writer for one corpus report.
///
/// Tabular formats get [`REPORT_HEADER`] from [`ReportWriter::write_header`]
/// and one rounded row per document. JSONL has no header; each line is a
/// full-precision [`DocumentReport`].
pub struct ReportWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        let sink = match format {
            ReportFormat::Csv => Sink::Delimited(delimited(out, b',')),
            ReportFormat::Tsv => Sink::Delimited(delimited(out, b'\t')),
            ReportFormat::Jsonl => Sink::Jsonl(out),
        };
        Self { sink }
    }

    pub fn write_header(&mut self) -> Result<()> {
        if let Sink::Delimited(wtr) = &mut self.sink {
            wtr.write_record(REPORT_HEADER)?;
        }
        Ok(())
    }

    pub fn write_report(&mut self, report: &DocumentReport) -> Result<()> {
        match &mut self.sink {
            Sink::Delimited(wtr) => wtr.write_record(report_row(report))?,
            Sink::Jsonl(out) => writeln!(out, "{}", serde_json::to_string(report)?)?,
        }
        Ok(())
    }

    /// Flush buffered rows and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        match self.sink {
            Sink::Delimited(wtr) => wtr
                .into_inner()
                .map_err(|e| anyhow!("Failed to flush report: {}", e.error())),
            Sink::Jsonl(mut out) => {
                out.flush()?;
                Ok(out)
            }
        }
    }
}

fn delimited<W: Write>(out: W, delimiter: u8) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out)
}

/// The tabular cells of one report, in [`REPORT_HEADER`] order.
pub fn report_row(report: &DocumentReport) -> Vec<String> {
    let stats = &report.stats;
    let mut row = Vec::with_capacity(REPORT_HEADER.len());
    row.push(report.document.clone());
    row.push(report.size_bytes.to_string());
    row.push(stats.word_count.to_string());
    for category in Category::ALL {
        row.push(fmt_ratio(stats.percentages.get(category)));
    }
    row.push(stats.alphanumeric.to_string());
    row.push(stats.alphabetic.to_string());
    row.push(stats.digits.to_string());
    row.push(stats.numbers.to_string());
    row.push(fmt_ratio(stats.avg_syllables));
    row.push(fmt_ratio(stats.avg_word_length));
    row.push(stats.vocabulary.to_string());
    row
}

fn fmt_ratio(value: f64) -> String {
    round_f64(value, DECIMALS).to_string()
}
