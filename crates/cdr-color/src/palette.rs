//! Document spot-color palette.

use cdr_core::CdrColor;
use std::collections::HashMap;

/// Mapping from a 16-bit spot index to the color it stands for.
///
/// Filled while the document is parsed, before any spot reference is
/// converted. Inserting an index twice keeps the later color.
///
/// # Example
///
/// ```rust
/// use cdr_color::Palette;
/// use cdr_core::CdrColor;
///
/// let mut palette = Palette::new();
/// palette.insert(5, CdrColor::new(0x09, 0x40));
/// assert_eq!(palette.resolve(5), Some(CdrColor::new(0x09, 0x40)));
/// assert_eq!(palette.resolve(6), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: HashMap<u16, CdrColor>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `color` under `index`, returning the color it replaced.
    pub fn insert(&mut self, index: u16, color: CdrColor) -> Option<CdrColor> {
        self.entries.insert(index, color)
    }

    /// Looks up the color registered under `index`.
    pub fn resolve(&self, index: u16) -> Option<CdrColor> {
        self.entries.get(&index).copied()
    }

    /// Number of registered indices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(index, color)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, CdrColor)> + '_ {
        self.entries.iter().map(|(&i, &c)| (i, c))
    }
}

impl FromIterator<(u16, CdrColor)> for Palette {
    fn from_iter<T: IntoIterator<Item = (u16, CdrColor)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(u16, CdrColor)> for Palette {
    fn extend<T: IntoIterator<Item = (u16, CdrColor)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}
