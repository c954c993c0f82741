//! Record creation with confirmation output.
//!
//! [`RecordFactory`] builds records and announces them on any writer; it can
//! be silenced. The `add_*` functions are the same factory bound to stdout.

use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::record::{Asset, Document, Member, Record};

/// Creates records and announces each one on a writer.
#[derive(Debug)]
pub struct RecordFactory<W> {
    out: W,
    announce: bool,
}

impl<W: Write> RecordFactory<W> {
    /// Create a factory that writes confirmations to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            announce: true,
        }
    }

    /// Enable or disable confirmation lines.
    #[must_use]
    pub fn with_announce(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }

    /// Whether confirmations are written.
    #[must_use]
    pub fn announces(&self) -> bool {
        self.announce
    }

    /// Consume the factory and return its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Create a family member.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation cannot be written.
    pub fn family_member(
        &mut self,
        name: impl Into<String>,
        relation: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Result<Member> {
        self.emit(Member::new(name, relation, contact_info))
    }

    /// Create an asset.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation cannot be written.
    pub fn asset(
        &mut self,
        asset_type: impl Into<String>,
        value: f64,
        owner: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Asset> {
        self.emit(Asset::new(asset_type, value, owner, description))
    }

    /// Create a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation cannot be written.
    pub fn document(
        &mut self,
        doc_type: impl Into<String>,
        file_path: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Document> {
        self.emit(Document::new(doc_type, file_path, description))
    }

    fn emit<R: Record>(&mut self, record: R) -> Result<R> {
        debug!(kind = R::KIND, "record created");
        if self.announce {
            writeln!(self.out, "{}", record.confirmation())?;
        }
        Ok(record)
    }
}

/// Create a family member and print its confirmation to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn add_family_member(name: &str, relation: &str, contact_info: &str) -> Result<Member> {
    RecordFactory::new(io::stdout().lock()).family_member(name, relation, contact_info)
}

/// Create an asset and print its confirmation to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn add_asset(asset_type: &str, value: f64, owner: &str, description: &str) -> Result<Asset> {
    RecordFactory::new(io::stdout().lock()).asset(asset_type, value, owner, description)
}

/// Create a document and print its confirmation to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn add_document(doc_type: &str, file_path: &str, description: &str) -> Result<Document> {
    RecordFactory::new(io::stdout().lock()).document(doc_type, file_path, description)
}
