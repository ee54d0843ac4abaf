//! Changelog entry categories.

use std::fmt;

/// The kind of change a changelog line describes.
///
/// Variants are declared in display order; [`Category::ALL`] and the derived
/// `Ord` both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Addition,
    Removal,
    Change,
    Fix,
    /// Anything without a recognized marker.
    Other,
}

impl Category {
    /// Every category, in the order they are rendered.
    pub const ALL: [Category; 5] = [
        Category::Addition,
        Category::Removal,
        Category::Change,
        Category::Fix,
        Category::Other,
    ];

    /// The leading symbol that marks a line as this category.
    ///
    /// `Other` has no marker.
    pub fn marker(self) -> Option<char> {
        match self {
            Category::Addition => Some('+'),
            Category::Removal => Some('-'),
            Category::Change => Some('%'),
            Category::Fix => Some('$'),
            Category::Other => None,
        }
    }

    /// Section heading used in the sorted changelog.
    pub fn title(self) -> &'static str {
        match self {
            Category::Addition => "Additions",
            Category::Removal => "Removals",
            Category::Change => "Changes",
            Category::Fix => "Fixes",
            Category::Other => "Other",
        }
    }

    /// Look up the category for a line's first character.
    pub fn from_marker(c: char) -> Category {
        match c {
            '+' => Category::Addition,
            '-' => Category::Removal,
            '%' => Category::Change,
            '$' => Category::Fix,
            _ => Category::Other,
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
