//! Sample data and the end-to-end demonstration run.

use std::io::Write;

use tracing::debug;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::factory::RecordFactory;
use crate::report::ReportFormat;
use crate::vault::Vault;

/// Create the sample records through `factory`, in a fixed order.
///
/// # Errors
///
/// Returns an error if a confirmation cannot be written.
pub fn populate<W: Write>(factory: &mut RecordFactory<W>) -> Result<Vault> {
    let mut vault = Vault::new();

    vault.push_member(factory.family_member(
        "Tanveer Bakshi",
        "Self",
        "tanveer@example.com",
    )?);
    vault.push_member(factory.family_member("Jane Doe", "Spouse", "jane@example.com")?);

    vault.push_asset(factory.asset(
        "Property",
        500_000.0,
        "Tanveer Bakshi",
        "Apartment in Bengaluru",
    )?);
    vault.push_asset(factory.asset("Bank Account", 20_000.0, "Jane Doe", "Savings account")?);

    vault.push_document(factory.document(
        "Will",
        "/path/to/will.pdf",
        "Last will and testament",
    )?);
    vault.push_document(factory.document("Aadhar", "/path/to/aadhar.pdf", "National ID")?);

    Ok(vault)
}

/// Populate the sample records and write the summary to `out`.
///
/// Confirmations are written only for the plain format, so JSON output stays
/// a single document.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run<W: Write>(mut out: W, options: &ReportConfig) -> Result<Vault> {
    let announce = options.show_confirmations && options.format == ReportFormat::Plain;

    let mut factory = RecordFactory::new(&mut out).with_announce(announce);
    let vault = populate(&mut factory)?;
    drop(factory);

    vault.summary().write_to(&mut out, options.format)?;
    debug!(records = vault.len(), "summary written");
    Ok(vault)
}
