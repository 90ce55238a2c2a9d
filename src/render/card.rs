//! Display cards derived from search records

use crate::config::OpenLibrarySettings;
use crate::results::BookRecord;
use serde::Serialize;

/// Shown when a record has no author
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Shown when a record has no first publication year
pub const UNKNOWN_YEAR: &str = "Year unknown";

/// Hosts used to build cover and detail URLs
#[derive(Debug, Clone)]
pub struct CardLinks {
    cover_host: String,
    library_host: String,
    placeholder_cover: String,
}

impl CardLinks {
    pub fn new(
        cover_host: impl Into<String>,
        library_host: impl Into<String>,
        placeholder_cover: impl Into<String>,
    ) -> Self {
        Self {
            cover_host: cover_host.into().trim_end_matches('/').to_string(),
            library_host: library_host.into().trim_end_matches('/').to_string(),
            placeholder_cover: placeholder_cover.into(),
        }
    }

    /// Medium-size cover for an identifier, or the placeholder
    pub fn cover_url(&self, cover_id: Option<i64>) -> String {
        match cover_id {
            Some(id) => format!("{}/b/id/{}-M.jpg", self.cover_host, id),
            None => self.placeholder_cover.clone(),
        }
    }

    pub fn detail_url(&self, key: &str) -> String {
        format!("{}{}", self.library_host, key)
    }
}

impl From<&OpenLibrarySettings> for CardLinks {
    fn from(settings: &OpenLibrarySettings) -> Self {
        Self::new(
            &settings.cover_url,
            &settings.library_url,
            &settings.placeholder_cover,
        )
    }
}

impl Default for CardLinks {
    fn default() -> Self {
        Self::from(&OpenLibrarySettings::default())
    }
}

/// Presentation-ready view of one record.
///
/// Text fields hold plain text with fallbacks applied. Markup escaping is done
/// by the templates, so the same card serializes cleanly to JSON.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DisplayCard {
    pub cover_url: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub detail_url: Option<String>,
}

impl DisplayCard {
    pub fn from_record(record: &BookRecord, links: &CardLinks) -> Self {
        Self {
            cover_url: links.cover_url(record.cover_id()),
            title: record.title.clone().unwrap_or_default(),
            author: record.first_author().unwrap_or(UNKNOWN_AUTHOR).to_string(),
            year: record
                .year()
                .map(|year| year.to_string())
                .unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
            detail_url: record.detail_key().map(|key| links.detail_url(key)),
        }
    }
}

/// Escape text for embedding in markup.
///
/// Equivalent to replacing `&`, `<`, `>`, `"` and `'` in that order, so
/// entities produced by the later substitutions are never re-escaped.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
