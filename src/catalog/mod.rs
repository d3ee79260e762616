//! Font catalog - the list of web font families to choose from.
//!
//! The catalog comes from the Google Fonts developer API. This crate does no
//! network I/O: callers fetch the response body however they like and hand
//! it in. Any failure along the way degrades to a short built-in list.

use crate::error::{Result, TateError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Catalog endpoint of the Google Fonts developer API
pub const CATALOG_API_URL: &str = "https://www.googleapis.com/webfonts/v1/webfonts";

/// CSS endpoint serving `@font-face` rules for a family
pub const STYLESHEET_API_URL: &str = "https://fonts.googleapis.com/css2";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GOOGLE_FONTS_API_KEY";

/// Family chosen by default when the catalog has it
pub const PREFERRED_DEFAULT_FAMILY: &str = "Noto Sans JP";

/// One family as listed by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleFont {
    pub family: String,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub subsets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Variant name to font file URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<HashMap<String, String>>,
}

impl GoogleFont {
    fn basic(family: &str) -> Self {
        Self {
            family: family.to_string(),
            variants: vec!["400".to_string()],
            subsets: vec!["latin".to_string()],
            category: None,
            version: None,
            last_modified: None,
            files: None,
        }
    }
}

/// Body of a catalog response. Only `items` is used.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    items: Vec<GoogleFont>,
}

/// Where a catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Parsed from a service response
    Remote,
    /// The built-in list, used after a failure
    Fallback,
}

/// Catalog access configuration, passed explicitly rather than read ad hoc
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_key: Option<String>,
}

impl CatalogConfig {
    /// Read the API key from `GOOGLE_FONTS_API_KEY`. An empty value counts as
    /// unset.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        Self { api_key }
    }
}

/// A list of font families
#[derive(Debug, Clone, PartialEq)]
pub struct FontCatalog {
    fonts: Vec<GoogleFont>,
    source: CatalogSource,
}

impl FontCatalog {
    /// Parse a catalog service response body.
    pub fn from_response_json(json: &str) -> Result<Self> {
        let response: CatalogResponse = serde_json::from_str(json)?;
        log::debug!("loaded font catalog with {} families", response.items.len());
        Ok(Self {
            fonts: response.items,
            source: CatalogSource::Remote,
        })
    }

    /// Commonly available families, used when the service cannot be reached.
    pub fn fallback() -> Self {
        let fonts = [PREFERRED_DEFAULT_FAMILY, "Roboto", "Open Sans", "Lato", "Montserrat"]
            .iter()
            .map(|f| GoogleFont::basic(f))
            .collect();
        Self {
            fonts,
            source: CatalogSource::Fallback,
        }
    }

    /// Parse a fetched body, or fall back to the built-in list if fetching or
    /// parsing failed.
    pub fn load_or_fallback(body: Result<String>) -> Self {
        match body.and_then(|json| Self::from_response_json(&json)) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("font catalog unavailable, using fallback list: {}", e);
                Self::fallback()
            }
        }
    }

    pub fn fonts(&self) -> &[GoogleFont] {
        &self.fonts
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == CatalogSource::Fallback
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.fonts.iter().map(|f| f.family.as_str())
    }

    pub fn find(&self, family: &str) -> Option<&GoogleFont> {
        self.fonts.iter().find(|f| f.family == family)
    }

    /// The family preselected for the user: Noto Sans JP when listed,
    /// otherwise the first family.
    pub fn default_family(&self) -> Option<&str> {
        self.find(PREFERRED_DEFAULT_FAMILY)
            .or_else(|| self.fonts.first())
            .map(|f| f.family.as_str())
    }
}

/// URL to request the catalog from
pub fn request_url(config: &CatalogConfig) -> String {
    match &config.api_key {
        Some(key) => format!("{}?key={}", CATALOG_API_URL, key),
        None => CATALOG_API_URL.to_string(),
    }
}

/// Stylesheet URL that makes a family available to a renderer
pub fn stylesheet_url(family: &str) -> String {
    format!(
        "{}?family={}:wght@400&display=swap",
        STYLESHEET_API_URL,
        RE_WHITESPACE.replace_all(family.trim(), "+")
    )
}

// ============================================================================
// Cache
// ============================================================================

/// Holds at most one catalog.
///
/// A catalog parsed from a real response is kept until `invalidate`. The
/// fallback list is kept too, but the next `get_or_fetch` tries the service
/// again. Fetching needs `&mut self`, so at most one fetch is in flight.
#[derive(Debug, Default)]
pub struct CatalogCache {
    catalog: Option<FontCatalog>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached catalog, fetching first if there is none or only the fallback.
    pub fn get_or_fetch<F>(&mut self, fetch: F) -> &FontCatalog
    where
        F: FnOnce() -> Result<String>,
    {
        let needs_fetch = self.catalog.as_ref().map_or(true, FontCatalog::is_fallback);
        if needs_fetch {
            self.catalog = Some(FontCatalog::load_or_fallback(fetch()));
        }
        self.catalog.get_or_insert_with(FontCatalog::fallback)
    }

    pub fn get(&self) -> Option<&FontCatalog> {
        self.catalog.as_ref()
    }

    pub fn invalidate(&mut self) {
        self.catalog = None;
    }
}

/// Convenience fetcher for a catalog response saved on disk
pub fn read_catalog_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        TateError::CatalogUnavailable(format!("{}: {}", path.display(), e))
    })
}
