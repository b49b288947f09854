//! Rendering a census into delimited text or JSON records.
//!
//! The renderer is pure: it takes an already-sorted slice, keeps the top N
//! entries, and returns a string. Printing is the caller's business.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::entry::CountEntry;
use crate::error::TallyError;
use crate::options::OutputFormat;
use crate::Result;

/// Column labels for rendered output: count label first, path label second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Label for the count column / JSON count field
    pub count: String,
    /// Label for the path column / JSON path field
    pub path: String,
}

impl Header {
    /// Create a header from the two column labels.
    pub fn new(count: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            count: count.into(),
            path: path.into(),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new("File Count", "Directory")
    }
}

/// One JSON record: the header labels mapped to an entry's fields.
///
/// Serialized by hand so the key order is the header tuple order (count
/// first, then path) rather than whatever the map type would impose.
struct JsonRecord<'a> {
    header: &'a Header,
    entry: &'a CountEntry,
}

impl Serialize for JsonRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.header.count, &self.entry.count)?;
        map.serialize_entry(&self.header.path, &self.entry.path.to_string_lossy())?;
        map.end()
    }
}

/// Render the first `top_n` entries in the requested format.
///
/// If `top_n` exceeds the number of entries, everything is rendered; a
/// `top_n` of 0 renders no data rows. The delimited formats prepend a
/// header row when `header` is given; JSON requires one for its field
/// names and fails with [`TallyError::HeaderRequired`] without it.
///
/// The returned string carries no trailing newline.
pub fn render(
    entries: &[CountEntry],
    top_n: usize,
    format: OutputFormat,
    header: Option<&Header>,
) -> Result<String> {
    let taken = &entries[..top_n.min(entries.len())];

    match format.delimiter() {
        Some(sep) => Ok(render_delimited(taken, sep, header)),
        None => render_json(taken, header),
    }
}

fn render_delimited(entries: &[CountEntry], sep: char, header: Option<&Header>) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);

    if let Some(h) = header {
        lines.push(format!("{}{sep}{}", h.count, h.path));
    }
    for entry in entries {
        lines.push(format!("{}{sep}{}", entry.count, entry.path.display()));
    }

    lines.join("\n")
}

fn render_json(entries: &[CountEntry], header: Option<&Header>) -> Result<String> {
    let header = header.ok_or(TallyError::HeaderRequired)?;

    let records: Vec<JsonRecord<'_>> = entries
        .iter()
        .map(|entry| JsonRecord { header, entry })
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}
