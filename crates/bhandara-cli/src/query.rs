//! One-shot catalog queries.
//!
//! Each handler renders to the writer it is given so `main` can pass a locked
//! stdout and tests can pass a `Vec<u8>`.

use std::io::Write;

use bhandara_core::{
    filter, point_hints, rank, Catalog, Coordinates, LocationId, MailDraft, RegistrationForm,
};

use crate::render;

/// Print every location matching `query`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub(crate) fn run_search(catalog: &Catalog, query: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let matches = filter(catalog.locations(), query);
    if matches.is_empty() {
        writeln!(out, "no locations match '{query}'")?;
        return Ok(());
    }
    render::location_table(out, matches)?;
    Ok(())
}

/// Print the detail view for one location.
///
/// # Errors
///
/// Returns an error if the id is not in the catalog.
pub(crate) fn run_show(catalog: &Catalog, id: u32, out: &mut impl Write) -> anyhow::Result<()> {
    let location = catalog
        .get(LocationId(id))
        .ok_or_else(|| anyhow::anyhow!("no location with id {id}; run `search` to list ids"))?;
    render::location_detail(out, location)?;
    Ok(())
}

pub(crate) fn run_pins(catalog: &Catalog, query: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let points = point_hints(catalog.locations(), query);
    render::point_list(out, &points)?;
    Ok(())
}

pub(crate) fn run_nearby(
    catalog: &Catalog,
    position: Option<Coordinates>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let nearby = rank(catalog.locations(), position);
    render::nearby_list(out, &nearby)?;
    Ok(())
}

/// Compose the registration email and print the `mailto:` link to open.
///
/// # Errors
///
/// Returns an error listing the blank required fields.
pub(crate) fn run_register(
    form: &RegistrationForm,
    recipient: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let draft = MailDraft::compose(form, recipient)?;
    tracing::info!(name = %form.name, city = %form.city, "registration draft composed");

    writeln!(out, "To:      {}", draft.recipient)?;
    writeln!(out, "Subject: {}", draft.subject)?;
    writeln!(out)?;
    writeln!(out, "{}", draft.body)?;
    writeln!(out)?;
    writeln!(out, "Open this link in your mail client to send it:")?;
    writeln!(out, "{}", draft.mailto_url())?;
    Ok(())
}
