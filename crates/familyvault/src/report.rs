//! Summary report over all records.
//!
//! The plain report has three sections, each introduced by an empty line and a
//! header, followed by one line per record in the order given:
//!
//! ```text
//!
//! Family Members:
//!  - Jane (Spouse) | Contact: jane@x.com
//!
//! Assets:
//!  - Property owned by Tanveer | Value: 500000.0 | Description: Apartment
//!
//! Documents:
//!  - Will | File: /p/will.pdf | Description: Last will
//! ```

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::record::{Asset, Document, Member, Record};

/// Header of the member section.
pub const MEMBERS_HEADER: &str = "Family Members:";

/// Header of the asset section.
pub const ASSETS_HEADER: &str = "Assets:";

/// Header of the document section.
pub const DOCUMENTS_HEADER: &str = "Documents:";

/// How a summary is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Sectioned text listing.
    #[default]
    Plain,
    /// Pretty-printed JSON object.
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// A read-only view over the three record sequences.
///
/// `Display` renders the plain report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary<'a> {
    /// Family members, in insertion order.
    pub members: &'a [Member],
    /// Assets, in insertion order.
    pub assets: &'a [Asset],
    /// Documents, in insertion order.
    pub documents: &'a [Document],
}

impl<'a> Summary<'a> {
    /// Create a summary over the given sequences.
    #[must_use]
    pub fn new(members: &'a [Member], assets: &'a [Asset], documents: &'a [Document]) -> Self {
        Self {
            members,
            assets,
            documents,
        }
    }

    /// Write the summary to `out` in the requested format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or JSON encoding fails.
    pub fn write_to<W: Write>(&self, mut out: W, format: ReportFormat) -> Result<()> {
        debug!(
            members = self.members.len(),
            assets = self.assets.len(),
            documents = self.documents.len(),
            %format,
            "writing summary"
        );
        match format {
            ReportFormat::Plain => write!(out, "{self}")?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut out, self)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, MEMBERS_HEADER, self.members)?;
        write_section(f, ASSETS_HEADER, self.assets)?;
        write_section(f, DOCUMENTS_HEADER, self.documents)
    }
}

fn write_section<R: Record>(f: &mut fmt::Formatter<'_>, header: &str, records: &[R]) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{header}")?;
    for record in records {
        writeln!(f, "{}", record.summary_line())?;
    }
    Ok(())
}

/// Write the plain summary report for the given sequences to `out`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary<W: Write>(
    out: W,
    members: &[Member],
    assets: &[Asset],
    documents: &[Document],
) -> Result<()> {
    Summary::new(members, assets, documents).write_to(out, ReportFormat::Plain)
}

/// Print the plain summary report to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn generate_summary(members: &[Member], assets: &[Asset], documents: &[Document]) -> Result<()> {
    write_summary(io::stdout().lock(), members, assets, documents)
}
