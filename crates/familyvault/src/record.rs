//! Record types tracked by familyvault.
//!
//! Each record is a flat aggregate of public fields. Nothing is validated:
//! empty strings, negative values, and duplicates are all accepted. An asset's
//! `owner` is a free-text label, not a reference to a [`Member`].

use serde::{Deserialize, Serialize};

/// Behavior shared by every record kind.
///
/// Rendering is kept separate from construction so that callers can build a
/// record without producing any output.
pub trait Record: std::fmt::Debug {
    /// Human-readable name of the record kind, as used in confirmations.
    const KIND: &'static str;

    /// The confirmation line announcing that this record was created.
    ///
    /// Lists every field in declaration order.
    fn confirmation(&self) -> String {
        format!("Added {}: {self:?}", Self::KIND)
    }

    /// The line describing this record in the summary report.
    fn summary_line(&self) -> String;
}

/// A family member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Full name.
    pub name: String,
    /// Relation to the family head (e.g. "Father", "Daughter").
    pub relation: String,
    /// Email address, phone number, or any other contact detail.
    pub contact_info: String,
}

impl Member {
    /// Create a member from its fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        relation: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            relation: relation.into(),
            contact_info: contact_info.into(),
        }
    }
}

impl Record for Member {
    const KIND: &'static str = "family member";

    fn summary_line(&self) -> String {
        format!(
            " - {} ({}) | Contact: {}",
            self.name, self.relation, self.contact_info
        )
    }
}

/// A financial or estate asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Kind of asset (e.g. "Property", "Bank Account").
    pub asset_type: String,
    /// Monetary value. No currency or precision is implied.
    ///
    /// JSON has no NaN or infinity, so non-finite values are written as the
    /// strings `"NaN"`, `"inf"`, and `"-inf"`.
    #[serde(with = "amount")]
    pub value: f64,
    /// Name of the owner.
    pub owner: String,
    /// Free-form notes.
    pub description: String,
}

impl Asset {
    /// Create an asset from its fields.
    #[must_use]
    pub fn new(
        asset_type: impl Into<String>,
        value: f64,
        owner: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            asset_type: asset_type.into(),
            value,
            owner: owner.into(),
            description: description.into(),
        }
    }
}

impl Record for Asset {
    const KIND: &'static str = "asset";

    fn summary_line(&self) -> String {
        // `{:?}` keeps the decimal point on integral values (500000.0).
        format!(
            " - {} owned by {} | Value: {:?} | Description: {}",
            self.asset_type, self.owner, self.value, self.description
        )
    }
}

mod amount {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            value.serialize(serializer)
        } else {
            serializer.serialize_str(&format!("{value:?}"))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => text
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid asset value '{text}'"))),
        }
    }
}

/// An important document such as a will or an identity card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Kind of document (e.g. "Will", "Property Deed").
    pub doc_type: String,
    /// Path or URL of the document. Never opened or checked.
    pub file_path: String,
    /// Free-form notes.
    pub description: String,
}

impl Document {
    /// Create a document from its fields.
    #[must_use]
    pub fn new(
        doc_type: impl Into<String>,
        file_path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            doc_type: doc_type.into(),
            file_path: file_path.into(),
            description: description.into(),
        }
    }
}

impl Record for Document {
    const KIND: &'static str = "document";

    fn summary_line(&self) -> String {
        format!(
            " - {} | File: {} | Description: {}",
            self.doc_type, self.file_path, self.description
        )
    }
}
