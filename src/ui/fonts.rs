// SPDX-License-Identifier: MPL-2.0
//! Font family lookup.
//!
//! The catalog answers "does the host know this family?" before a window is
//! opened. System families come from the `fontdb` database bundled with
//! `resvg`, which scans the same font directories iced's text engine uses.

use crate::error::ValidationError;
use iced::Font;
use resvg::usvg::fontdb;
use std::cell::OnceCell;
use std::collections::HashSet;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Set of font family names a toast may request.
///
/// The system catalog is scanned lazily, on the first lookup.
pub struct FontCatalog {
    loader: fn() -> Vec<String>,
    families: OnceCell<Vec<String>>,
}

impl FontCatalog {
    /// Catalog of the fonts installed on this machine.
    #[must_use]
    pub fn system() -> Self {
        Self {
            loader: system_families,
            families: OnceCell::new(),
        }
    }

    /// Catalog with a fixed family list.
    pub fn from_families<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = normalize(families.into_iter().map(Into::into));
        Self {
            loader: Vec::new,
            families: OnceCell::from(names),
        }
    }

    /// Sorted, de-duplicated family names.
    pub fn families(&self) -> &[String] {
        self.families.get_or_init(self.loader)
    }

    /// Returns the catalog spelling of `name`.
    ///
    /// An exact match wins; otherwise the comparison ignores case.
    pub fn resolve(&self, name: &str) -> Result<String, ValidationError> {
        let families = self.families();
        families
            .iter()
            .find(|family| family.as_str() == name)
            .or_else(|| {
                let wanted = name.to_lowercase();
                families.iter().find(|family| family.to_lowercase() == wanted)
            })
            .cloned()
            .ok_or_else(|| ValidationError::InvalidFont {
                given: name.to_string(),
                available: families.to_vec(),
            })
    }
}

impl std::fmt::Debug for FontCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCatalog")
            .field("loaded", &self.families.get().map(Vec::len))
            .finish()
    }
}

/// Turns a resolved family name into a toolkit font.
///
/// iced names families with `&'static str`, so each distinct family name is
/// leaked once and reused afterwards.
#[must_use]
pub fn typeface(family: String) -> Font {
    Font::with_name(interned(family))
}

fn interned(family: String) -> &'static str {
    static NAMES: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();
    let mut names = NAMES
        .get_or_init(|| Mutex::new(HashSet::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(name) = names.get(family.as_str()) {
        return name;
    }
    let name: &'static str = Box::leak(family.into_boxed_str());
    names.insert(name);
    name
}

fn system_families() -> Vec<String> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let families = normalize(
        db.faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name.clone())),
    );
    tracing::debug!(count = families.len(), "scanned system font families");
    families
}

fn normalize(families: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut families: Vec<String> = families
        .into_iter()
        .filter(|family| !family.trim().is_empty())
        .collect();
    families.sort();
    families.dedup();
    families
}
