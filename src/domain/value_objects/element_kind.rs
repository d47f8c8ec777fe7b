//! Element kinds and the alias table mapping type names to catalog keys.
//!
//! Callers name element types in many ways: the current catalog keyword
//! (`rast`), the on-disk directory name (`cell`, `grid3`), or a descriptive
//! label (`raster files`). All of them resolve to one [`ElementKind`].

use std::fmt;

use serde::{Serialize, Serializer};

/// Canonical element kind understood by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Raster,
    Raster3d,
    Vector,
    OldVector,
    AsciiVector,
    Icon,
    Labels,
    Sites,
    Region,
    Region3d,
    Group,
    View3d,
}

/// Static alias table: (type name, canonical kind).
///
/// Keys are matched exactly, including case (`raster3D`).
const ALIASES: &[(&str, ElementKind)] = &[
    ("cell", ElementKind::Raster),
    ("raster", ElementKind::Raster),
    ("rast", ElementKind::Raster),
    ("raster files", ElementKind::Raster),
    ("grid3", ElementKind::Raster3d),
    ("rast3d", ElementKind::Raster3d),
    ("raster3D", ElementKind::Raster3d),
    ("raster3D files", ElementKind::Raster3d),
    ("vector", ElementKind::Vector),
    ("vect", ElementKind::Vector),
    ("binary vector files", ElementKind::Vector),
    ("dig", ElementKind::OldVector),
    ("oldvect", ElementKind::OldVector),
    ("old vector", ElementKind::OldVector),
    ("dig_ascii", ElementKind::AsciiVector),
    ("asciivect", ElementKind::AsciiVector),
    ("asciivector", ElementKind::AsciiVector),
    ("ascii vector files", ElementKind::AsciiVector),
    ("icons", ElementKind::Icon),
    ("icon", ElementKind::Icon),
    ("paint icon files", ElementKind::Icon),
    ("paint/labels", ElementKind::Labels),
    ("labels", ElementKind::Labels),
    ("label", ElementKind::Labels),
    ("paint label files", ElementKind::Labels),
    ("site_lists", ElementKind::Sites),
    ("sites", ElementKind::Sites),
    ("site list", ElementKind::Sites),
    ("site list files", ElementKind::Sites),
    ("windows", ElementKind::Region),
    ("region", ElementKind::Region),
    ("region definition", ElementKind::Region),
    ("region definition files", ElementKind::Region),
    ("windows3d", ElementKind::Region3d),
    ("region3d", ElementKind::Region3d),
    ("region3D definition", ElementKind::Region3d),
    ("region3D definition files", ElementKind::Region3d),
    ("group", ElementKind::Group),
    ("imagery group", ElementKind::Group),
    ("imagery group files", ElementKind::Group),
    ("3d.view", ElementKind::View3d),
    ("3dview", ElementKind::View3d),
    ("3D viewing parameters", ElementKind::View3d),
    ("3D view parameters", ElementKind::View3d),
];

impl ElementKind {
    /// All kinds, in alias-table order
    pub const ALL: [ElementKind; 12] = [
        ElementKind::Raster,
        ElementKind::Raster3d,
        ElementKind::Vector,
        ElementKind::OldVector,
        ElementKind::AsciiVector,
        ElementKind::Icon,
        ElementKind::Labels,
        ElementKind::Sites,
        ElementKind::Region,
        ElementKind::Region3d,
        ElementKind::Group,
        ElementKind::View3d,
    ];

    /// Resolve a type name through the alias table.
    ///
    /// Returns `None` for names the catalog cannot list; callers treat that
    /// as "not selectable" rather than as an error.
    pub fn from_alias(name: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, kind)| *kind)
    }

    /// The catalog query key (`type=` argument of the list command)
    pub fn query_type(&self) -> &'static str {
        match self {
            ElementKind::Raster => "rast",
            ElementKind::Raster3d => "rast3d",
            ElementKind::Vector => "vect",
            ElementKind::OldVector => "oldvect",
            ElementKind::AsciiVector => "asciivect",
            ElementKind::Icon => "icon",
            ElementKind::Labels => "labels",
            ElementKind::Sites => "sites",
            ElementKind::Region => "region",
            ElementKind::Region3d => "region3d",
            ElementKind::Group => "group",
            ElementKind::View3d => "3dview",
        }
    }

    /// Every alias that resolves to this kind
    pub fn aliases(&self) -> impl Iterator<Item = &'static str> + '_ {
        ALIASES
            .iter()
            .filter(move |(_, kind)| kind == self)
            .map(|(alias, _)| *alias)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_type())
    }
}

/// Serialized as its catalog query type
impl Serialize for ElementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.query_type())
    }
}
