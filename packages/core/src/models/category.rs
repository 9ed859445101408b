//! Note Categories
//!
//! Every note belongs to exactly one of a fixed set of categories. The label
//! of the category takes part in search matching, so `Display` output is the
//! same text the user sees and searches against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Fixed set of note categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    General,
    Work,
    Personal,
    Study,
    Ideas,
}

impl Category {
    /// All categories, in the order a picker should offer them
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Work,
        Category::Personal,
        Category::Study,
        Category::Ideas,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Study => "Study",
            Category::Ideas => "Ideas",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses a label case-insensitively, ignoring surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownCategory(wanted.to_string()))
    }
}
