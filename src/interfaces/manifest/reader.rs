use crate::domain::registration::{ProviderEntry, is_valid_identity};
use crate::error::DiscoveryError;
use csv::StringRecord;
use std::io::Read;

/// Reads registration entries from a provider manifest.
///
/// One entry per line, either `identity` or `identity, priority`. Blank lines
/// and lines starting with `#` are skipped; surrounding whitespace is trimmed.
/// Quotes have no special meaning.
pub struct ManifestReader<R: Read> {
    capability: String,
    reader: csv::Reader<R>,
}

impl<R: Read> ManifestReader<R> {
    /// Creates a reader for the manifest of `capability` from any `Read` source.
    pub fn new(capability: impl Into<String>, source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .quoting(false)
            .from_reader(source);
        Self {
            capability: capability.into(),
            reader,
        }
    }

    /// Returns an iterator that lazily reads and validates entries.
    pub fn entries(self) -> impl Iterator<Item = Result<ProviderEntry, DiscoveryError>> {
        let capability = self.capability;
        self.reader
            .into_records()
            .filter_map(move |record| match record {
                Ok(record) => parse_record(&capability, &record),
                Err(e) => Some(Err(DiscoveryError::from(e))),
            })
    }
}

fn parse_record(capability: &str, record: &StringRecord) -> Option<Result<ProviderEntry, DiscoveryError>> {
    let identity = record.get(0).unwrap_or_default();
    // whitespace-only line
    if (record.len() == 1 && identity.is_empty()) || identity.starts_with('#') {
        return None;
    }

    let line = record.position().map_or(0, |p| p.line());
    let malformed = |reason: String| DiscoveryError::MalformedManifest {
        capability: capability.to_string(),
        line,
        reason,
    };

    if record.len() > 2 {
        return Some(Err(malformed(format!(
            "expected at most 2 fields, found {}",
            record.len()
        ))));
    }
    if !is_valid_identity(identity) {
        return Some(Err(malformed(format!("invalid implementer identity '{identity}'"))));
    }

    let priority = match record.get(1) {
        None | Some("") => 0,
        Some(raw) => match raw.parse::<i32>() {
            Ok(priority) => priority,
            Err(_) => return Some(Err(malformed(format!("invalid priority '{raw}'")))),
        },
    };

    Some(Ok(ProviderEntry::with_priority(identity, priority)))
}
