//! Report types and output writers.
//!
//! The CLI renders a browse or facet result as a terminal listing,
//! pretty JSON, or a markdown table. The terminal writer applies the
//! display predicate the same way the inventory page does: out-of-stock
//! bottles are hidden from the rows while the headline count still
//! reflects the full filtered list.

use std::io::Write;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};

use crate::core::BottleRecord;
use crate::sort::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// The outcome of one browse: inputs echoed back, both counts, and the
/// filtered+sorted bottles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseReport {
    pub location: String,
    pub generated_at: DateTime<Utc>,
    pub search: String,
    pub selected_countries: Vec<String>,
    pub selected_wine_types: Vec<String>,
    pub sort: SortKey,
    /// Size of the filtered list, out-of-stock rows included. Can
    /// exceed the number of rows actually rendered.
    pub result_count: usize,
    /// How many of those rows pass the stock predicate.
    pub in_stock_count: usize,
    pub bottles: Vec<BottleRecord>,
}

/// Facet values available at a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetsReport {
    pub location: String,
    pub generated_at: DateTime<Utc>,
    pub countries: Vec<String>,
    pub wine_types: Vec<String>,
}

pub trait OutputWriter {
    fn write_browse(&mut self, report: &BrowseReport) -> anyhow::Result<()>;
    fn write_facets(&mut self, report: &FacetsReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_browse(&mut self, report: &BrowseReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_facets(&mut self, report: &FacetsReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_browse(&mut self, report: &BrowseReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Wine Cellar Inventory: {}", report.location)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{} results", report.result_count)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Vintage | Description | Country | Region | Price | Stock |")?;
        writeln!(self.writer, "|---------|-------------|---------|--------|-------|-------|")?;
        for bottle in &report.bottles {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                bottle.vintage,
                bottle.description,
                bottle.country,
                bottle.region,
                bottle.price_label(),
                bottle.total_in_stock
            )?;
        }
        Ok(())
    }

    fn write_facets(&mut self, report: &FacetsReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Facets: {}", report.location)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Countries")?;
        for country in &report.countries {
            writeln!(self.writer, "- {country}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "## Wine Types")?;
        for wine_type in &report.wine_types {
            writeln!(self.writer, "- {wine_type}")?;
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_browse(&mut self, report: &BrowseReport) -> anyhow::Result<()> {
        print_browse_header(report);
        print_bottles(&report.bottles);
        Ok(())
    }

    fn write_facets(&mut self, report: &FacetsReport) -> anyhow::Result<()> {
        println!("{}", format!("Facets: {}", report.location).bold().blue());
        println!();
        println!("{}", "Countries:".bold());
        for country in &report.countries {
            println!("  {country}");
        }
        println!();
        println!("{}", "Wine types:".bold());
        for wine_type in &report.wine_types {
            println!("  {wine_type}");
        }
        Ok(())
    }
}

fn print_browse_header(report: &BrowseReport) {
    println!(
        "{}",
        format!("Wine Cellar Inventory: {}", report.location)
            .bold()
            .blue()
    );
    let hidden = report.result_count - report.in_stock_count;
    if hidden > 0 {
        println!(
            "{} results ({} hidden, out of stock)",
            report.result_count.to_string().bold(),
            hidden
        );
    } else {
        println!("{} results", report.result_count.to_string().bold());
    }
    println!();
}

fn print_bottles(bottles: &[BottleRecord]) {
    if bottles.is_empty() {
        println!("{}", "No wine bottles found".italic());
        return;
    }
    for bottle in bottles {
        let mut origin = bottle.country.clone();
        for part in [&bottle.region, &bottle.sub_region] {
            if !part.is_empty() {
                origin.push_str(", ");
                origin.push_str(part);
            }
        }
        println!(
            "  {}  {}  {}  ({} in stock)",
            bottle.display_name().bold(),
            origin.dimmed(),
            bottle.price_label().green(),
            bottle.total_in_stock
        );
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

/// Like [`create_writer`], but targeting a file when one is given.
pub fn create_writer_to(
    format: OutputFormat,
    output: Option<&std::path::Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let Some(path) = output else {
        return Ok(create_writer(format));
    };
    let file = std::fs::File::create(path)?;
    match format {
        OutputFormat::Json => Ok(Box::new(JsonWriter::new(file))),
        OutputFormat::Markdown => Ok(Box::new(MarkdownWriter::new(file))),
        OutputFormat::Terminal => {
            anyhow::bail!("terminal output writes to stdout; use --format json or markdown with --output")
        }
    }
}
