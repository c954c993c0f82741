//! Ordered, caller-owned record collections.

use crate::record::{Asset, Document, Member};
use crate::report::Summary;

/// The three record sequences, each kept in insertion order.
///
/// Records are only ever appended; there is no lookup by key and no
/// deduplication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vault {
    members: Vec<Member>,
    assets: Vec<Asset>,
    documents: Vec<Document>,
}

impl Vault {
    /// Create an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a family member.
    pub fn push_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Append an asset.
    pub fn push_asset(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    /// Append a document.
    pub fn push_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Family members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Assets in insertion order.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Documents in insertion order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Total number of records of all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len() + self.assets.len() + self.documents.len()
    }

    /// Check if the vault holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A summary view over the current records.
    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        Summary::new(&self.members, &self.assets, &self.documents)
    }
}
