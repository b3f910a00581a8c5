use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Index of an entry within the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntryId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildKind {
    House,
}

/// One selectable building type.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Texture path relative to the assets root.
    pub texture: PathBuf,
    pub kind: BuildKind,
}

#[derive(Deserialize)]
struct GroundSpec {
    texture: PathBuf,
}

#[derive(Deserialize)]
struct CatalogFile {
    ground: GroundSpec,
    entries: Vec<CatalogEntry>,
}

/// The building catalog plus the current selection. At most one entry is
/// selected at a time; selection is by id, never by a per-entry flag.
pub struct Catalog {
    ground_texture: PathBuf,
    entries: Vec<CatalogEntry>,
    selected: Option<EntryId>,
}

impl Catalog {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: CatalogFile = toml::from_str(toml_str)?;
        // Default to the first entry, matching the shipped catalog where
        // "commercial1" starts selected.
        let selected = if cfg.entries.is_empty() {
            None
        } else {
            Some(EntryId(0))
        };
        Ok(Self {
            ground_texture: cfg.ground.texture,
            entries: cfg.entries,
            selected,
        })
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let txt = fs::read_to_string(path)?;
        Self::from_toml_str(&txt)
    }

    #[inline]
    pub fn ground_texture(&self) -> &Path {
        &self.ground_texture
    }

    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[inline]
    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries.get(id.0)
    }

    /// Selects `id` if it names an entry. Out-of-range ids leave the
    /// selection unchanged.
    pub fn select(&mut self, id: EntryId) -> bool {
        if id.0 < self.entries.len() {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[inline]
    pub fn selected_id(&self) -> Option<EntryId> {
        self.selected
    }

    #[inline]
    pub fn selected(&self) -> Option<&CatalogEntry> {
        self.selected.and_then(|id| self.get(id))
    }
}
