// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rendering of a finished run for humans or for tools.

use super::Enumeration;
use crate::state::{Histogram, Statistics};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use strum_macros::{Display, EnumString};

const BANNER: &str = "-----FOUR-DIM PARTITIONS ENUMERATION-----";
const FOOTER: &str = "----END OF ENUMERATION----";

/// How the report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated `size \t count` table between banner lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// A finished run plus the wall-clock time it took.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(rename = "n")]
    pub max_size: usize,
    pub histogram: &'a Histogram,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<&'a Statistics>,
    pub complete: bool,
    pub elapsed_seconds: f64,
}

impl<'a> Report<'a> {
    pub fn new(enumeration: &'a Enumeration, elapsed: Duration, with_statistics: bool) -> Self {
        Self {
            max_size: enumeration.histogram.len(),
            histogram: &enumeration.histogram,
            statistics: with_statistics.then_some(&enumeration.statistics),
            complete: enumeration.complete,
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }

    /// Write the report in `format`.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)
            }
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", BANNER)?;
        write!(out, "{}", self.histogram)?;
        writeln!(out, "{}", FOOTER)?;
        if !self.complete {
            writeln!(out, "Search stopped early: counts are lower bounds.")?;
        }
        writeln!(
            out,
            "Total computation time needed: {:.6} seconds",
            self.elapsed_seconds
        )?;
        if let Some(statistics) = self.statistics {
            writeln!(out)?;
            write!(out, "{}", statistics)?;
        }
        Ok(())
    }
}
