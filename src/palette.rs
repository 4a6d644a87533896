//! The data model behind a palette-management page: named swatches grouped into palettes, plus the
//! color currently being edited. Everything here is plain data with serde support, serialized with
//! camelCase keys. Ids and timestamps are supplied by the caller.

use crate::color::RGBColor;
use crate::colors::HSVColor;

/// One saved color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swatch {
    /// A caller-chosen unique id.
    pub id: String,
    /// The color itself.
    pub value: RGBColor,
    /// An optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Creation time, in whatever unit the caller uses (usually milliseconds since the epoch).
    pub created_at: u64,
}

impl Swatch {
    /// Creates a swatch named after its color, e.g. "Dark Muted Blue".
    pub fn new<S: Into<String>>(id: S, value: RGBColor, created_at: u64) -> Swatch {
        Swatch {
            id: id.into(),
            value,
            name: Some(HSVColor::from_rgb(value).to_hsl().name()),
            created_at,
        }
    }

    /// Creates a swatch without a name.
    pub fn unnamed<S: Into<String>>(id: S, value: RGBColor, created_at: u64) -> Swatch {
        Swatch {
            id: id.into(),
            value,
            name: None,
            created_at,
        }
    }
}

/// An ordered, named group of swatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// A caller-chosen unique id.
    pub id: String,
    /// The palette's title.
    pub name: String,
    /// The swatches, in display order.
    pub colors: Vec<Swatch>,
    /// Creation time.
    pub created_at: u64,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new<S: Into<String>, N: Into<String>>(id: S, name: N, created_at: u64) -> Palette {
        Palette {
            id: id.into(),
            name: name.into(),
            colors: Vec::new(),
            created_at,
        }
    }

    /// Appends a swatch. Returns `false`, leaving the palette unchanged, if a swatch with the same id
    /// is already present.
    pub fn add(&mut self, swatch: Swatch) -> bool {
        if self.get(&swatch.id).is_some() {
            return false;
        }
        self.colors.push(swatch);
        true
    }

    /// Removes the swatch with the given id, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Swatch> {
        let index = self.colors.iter().position(|swatch| swatch.id == id)?;
        Some(self.colors.remove(index))
    }

    /// Looks up a swatch by id.
    pub fn get(&self, id: &str) -> Option<&Swatch> {
        self.colors.iter().find(|swatch| swatch.id == id)
    }

    /// The number of swatches.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether there are no swatches.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Everything a palette page keeps track of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorState {
    /// Loose swatches that aren't in any palette.
    pub colors: Vec<Swatch>,
    /// The saved palettes, in display order.
    pub palettes: Vec<Palette>,
    /// The color being edited.
    pub current_color: RGBColor,
}

impl ColorState {
    /// Looks up a palette by id.
    pub fn palette(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|palette| palette.id == id)
    }

    /// Looks up a palette by id for editing.
    pub fn palette_mut(&mut self, id: &str) -> Option<&mut Palette> {
        self.palettes.iter_mut().find(|palette| palette.id == id)
    }
}

/// Starts out empty, editing white.
impl Default for ColorState {
    fn default() -> ColorState {
        ColorState {
            colors: Vec::new(),
            palettes: Vec::new(),
            current_color: RGBColor::WHITE,
        }
    }
}
