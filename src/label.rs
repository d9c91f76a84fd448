use core::fmt;
use serde::Deserialize;

/// Classification of a single map cell. Only [CellLabel::Road] is walkable; every label that is
/// not recognised is treated as [CellLabel::Field].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellLabel {
    Road,
    #[default]
    #[serde(other)]
    Field,
}

impl CellLabel {
    /// Normalises a raw map label. `"road"` is the only walkable label.
    pub fn parse(label: &str) -> CellLabel {
        match label {
            "road" => CellLabel::Road,
            _ => CellLabel::Field,
        }
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, CellLabel::Road)
    }

    /// Single character used by the ASCII map format and the [Display](fmt::Display) impls.
    pub fn glyph(self) -> char {
        match self {
            CellLabel::Road => '.',
            CellLabel::Field => '#',
        }
    }
}

impl From<&str> for CellLabel {
    fn from(label: &str) -> Self {
        CellLabel::parse(label)
    }
}

impl fmt::Display for CellLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellLabel::Road => write!(f, "road"),
            CellLabel::Field => write!(f, "field"),
        }
    }
}
