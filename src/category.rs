//! User-defined task categories

use csscolorparser::Color;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CategoryId = String;

/// The fixed palette that category colors are picked from.
/// Categories store an index into this list, not the color itself.
pub static PALETTE: Lazy<Vec<Color>> = Lazy::new(|| {
    [
        "#e74c3c", // red
        "#e67e22", // orange
        "#f1c40f", // yellow
        "#2ecc71", // green
        "#1abc9c", // teal
        "#3498db", // blue
        "#9b59b6", // purple
        "#fd79a8", // pink
    ]
    .iter()
    .map(|hex| hex.parse().unwrap(/* these hard-coded colors always parse */))
    .collect()
});

/// A user-defined label with a color
///
/// Categories are created through an explicit "add category" action and are never
/// edited or deleted afterwards; tasks reference them by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    /// Index into [`PALETTE`]
    color: u8,
}

impl Category {
    /// Create a new category with a fresh id.
    /// The name must be non-empty and the color index chosen by the caller; both are
    /// enforced at the edit boundary before this is invoked.
    pub fn new(name: String, color: u8) -> Self {
        let new_id = Uuid::new_v4().to_hyphenated().to_string();
        Self::new_with_parameters(new_id, name, color)
    }

    pub fn new_with_parameters(id: CategoryId, name: String, color: u8) -> Self {
        Self { id, name, color }
    }

    pub fn id(&self) -> &CategoryId { &self.id    }
    pub fn name(&self) -> &str      { &self.name  }
    pub fn color_index(&self) -> u8 { self.color  }

    /// The palette color this category displays with.
    /// An out-of-range index (e.g. from a blob written by a newer version with a
    /// larger palette) falls back to the first palette entry.
    pub fn color(&self) -> &'static Color {
        PALETTE.get(self.color as usize).unwrap_or(&PALETTE[0])
    }
}
