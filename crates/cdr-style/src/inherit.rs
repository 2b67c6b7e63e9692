//! Parent-chain resolution.

use std::collections::hash_map::{self, HashMap};
use std::collections::HashSet;
use tracing::{debug, trace};

/// A record that may inherit attributes from a parent record.
///
/// The resolver only needs to know how to find the parent and how to layer
/// one record over another; attribute semantics stay with the implementor.
pub trait Inherit: Clone + Default {
    /// Id of the parent record, or `None` for a root.
    fn parent(&self) -> Option<u32>;

    /// Copies every attribute `other` sets explicitly onto `self`.
    fn apply_override(&mut self, other: &Self);

    /// Detaches the record from its parent.
    fn clear_parent(&mut self);
}

/// Document-scoped mapping from style id to record.
///
/// # Example
///
/// ```rust
/// use cdr_style::{Style, StyleMap};
///
/// let mut styles = StyleMap::new();
/// styles.insert(1, Style { font_size: Some(10.0), ..Style::default() });
/// styles.insert(2, Style { parent_id: 1, left_indent: Some(5.0), ..Style::default() });
///
/// let body = styles.resolve(2);
/// assert_eq!(body.font_size, Some(10.0));
/// assert_eq!(body.left_indent, Some(5.0));
/// assert_eq!(body.parent_id, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleMap<S> {
    styles: HashMap<u32, S>,
}

impl<S> Default for StyleMap<S> {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }
}

impl<S> StyleMap<S> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record, returning the one it replaces.
    pub fn insert(&mut self, id: u32, style: S) -> Option<S> {
        self.styles.insert(id, style)
    }

    /// Looks up the unresolved record for `id`.
    pub fn get(&self, id: u32) -> Option<&S> {
        self.styles.get(&id)
    }

    /// Returns `true` if `id` is present.
    pub fn contains(&self, id: u32) -> bool {
        self.styles.contains_key(&id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns `true` if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterates over `(id, record)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, u32, S> {
        self.styles.iter()
    }
}

impl<S: Inherit> StyleMap<S> {
    /// Flattens the record for `id` with all of its ancestors.
    ///
    /// Attributes are layered root first, so the nearest record that sets an
    /// attribute wins and the requested record always wins over ancestors.
    /// The walk stops at a missing parent or a parent already on the chain.
    /// An unknown `id` resolves to the default record. The result has no
    /// parent.
    pub fn resolve(&self, id: u32) -> S {
        let Some(leaf) = self.styles.get(&id) else {
            trace!(id, "style not found");
            return S::default();
        };

        let mut chain = vec![leaf];
        let mut visited = HashSet::from([id]);
        let mut current = leaf;
        while let Some(parent_id) = current.parent() {
            if !visited.insert(parent_id) {
                debug!(id, parent_id, "style parent cycle, chain truncated");
                break;
            }
            match self.styles.get(&parent_id) {
                Some(parent) => {
                    chain.push(parent);
                    current = parent;
                }
                None => {
                    trace!(id, parent_id, "style parent missing");
                    break;
                }
            }
        }

        let mut resolved = S::default();
        for style in chain.iter().rev() {
            resolved.apply_override(style);
        }
        resolved.clear_parent();
        resolved
    }
}

impl<S> FromIterator<(u32, S)> for StyleMap<S> {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().collect(),
        }
    }
}

impl<S> Extend<(u32, S)> for StyleMap<S> {
    fn extend<I: IntoIterator<Item = (u32, S)>>(&mut self, iter: I) {
        self.styles.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Align, FontSpec, Style};
    use approx::assert_abs_diff_eq;

    fn child_of(parent_id: u32) -> Style {
        Style {
            parent_id,
            ..Style::default()
        }
    }

    #[test]
    fn test_leaf_wins_over_ancestors() {
        let mut styles = StyleMap::new();
        styles.insert(
            1,
            Style {
                font: Some(FontSpec::new(0, "Arial")),
                font_size: Some(10.0),
                align: Some(Align::Left),
                ..Style::default()
            },
        );
        styles.insert(
            2,
            Style {
                font_size: Some(12.0),
                left_indent: Some(3.0),
                ..child_of(1)
            },
        );
        styles.insert(
            3,
            Style {
                font_size: Some(14.0),
                ..child_of(2)
            },
        );

        let resolved = styles.resolve(3);
        assert_eq!(resolved.font_size, Some(14.0));
        assert_eq!(resolved.font, Some(FontSpec::new(0, "Arial")));
        assert_eq!(resolved.align, Some(Align::Left));
        assert_abs_diff_eq!(resolved.left_indent.unwrap(), 3.0);
        assert_eq!(resolved.parent_id, 0);
    }

    #[test]
    fn test_unknown_id_is_default() {
        let styles: StyleMap<Style> = StyleMap::new();
        assert_eq!(styles.resolve(42), Style::default());
    }

    #[test]
    fn test_missing_parent_treated_as_root() {
        let mut styles = StyleMap::new();
        styles.insert(
            5,
            Style {
                font_size: Some(9.0),
                ..child_of(77)
            },
        );
        let resolved = styles.resolve(5);
        assert_eq!(resolved.font_size, Some(9.0));
        assert_eq!(resolved.parent_id, 0);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut styles = StyleMap::new();
        styles.insert(
            1,
            Style {
                font_size: Some(8.0),
                align: Some(Align::Right),
                ..child_of(2)
            },
        );
        styles.insert(
            2,
            Style {
                font_size: Some(11.0),
                ..child_of(1)
            },
        );

        let from_one = styles.resolve(1);
        assert_eq!(from_one.font_size, Some(8.0));
        assert_eq!(from_one.align, Some(Align::Right));

        let from_two = styles.resolve(2);
        assert_eq!(from_two.font_size, Some(11.0));
        assert_eq!(from_two.align, Some(Align::Right));
    }

    #[test]
    fn test_self_parent() {
        let mut styles = StyleMap::new();
        styles.insert(
            4,
            Style {
                right_indent: Some(1.0),
                ..child_of(4)
            },
        );
        assert_eq!(styles.resolve(4).right_indent, Some(1.0));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut styles = StyleMap::new();
        styles.insert(1, Style { font_size: Some(10.0), ..Style::default() });
        styles.insert(2, Style { first_indent: Some(-2.0), ..child_of(1) });
        assert_eq!(styles.resolve(2), styles.resolve(2));
        // resolving does not touch the stored records
        assert_eq!(styles.get(2).map(|s| s.parent_id), Some(1));
    }

    #[test]
    fn test_deep_chain() {
        let styles: StyleMap<Style> = (1..=500)
            .map(|id| (id, Style { font_size: Some(f64::from(id)), ..child_of(id - 1) }))
            .collect();
        assert_eq!(styles.resolve(500).font_size, Some(500.0));
        assert_eq!(styles.len(), 500);
    }
}
