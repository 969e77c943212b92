// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarations and declaration sets.

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::property::StyleProperty;

/// Most boxes set only a handful of properties.
const INLINE_CAPACITY: usize = 8;

/// A single `property: value` pair.
///
/// A `Declaration` always carries a non-empty value; empty values are
/// filtered out before one is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declaration {
    property: StyleProperty,
    value: String,
}

impl Declaration {
    /// Creates a declaration, or `None` if `value` is empty.
    #[must_use]
    pub fn new(property: StyleProperty, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            return None;
        }
        Some(Self { property, value })
    }

    /// Returns the property.
    #[must_use]
    #[inline]
    pub fn property(&self) -> StyleProperty {
        self.property
    }

    /// Returns the value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A set of declarations with at most one value per property.
///
/// Entries are kept sorted by [`StyleProperty`], so iteration order (and
/// therefore the order of generated classes) does not depend on the order
/// values were set in.
///
/// # Example
///
/// ```rust
/// use boxify_atomic::{Declarations, StyleProperty};
///
/// let decls = Declarations::new()
///     .with(StyleProperty::Padding, "20px")
///     .with(StyleProperty::Display, "flex")
///     .with(StyleProperty::Color, "");
///
/// assert_eq!(decls.len(), 2);
/// assert_eq!(decls.get(StyleProperty::Display), Some("flex"));
/// assert_eq!(decls.get(StyleProperty::Color), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: SmallVec<[Declaration; INLINE_CAPACITY]>,
}

impl Declarations {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any previous value.
    ///
    /// An empty value is dropped and leaves the set unchanged.
    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
        let Some(decl) = Declaration::new(property, value) else {
            return;
        };
        match self
            .entries
            .binary_search_by_key(&property, |d| d.property)
        {
            Ok(idx) => self.entries[idx] = decl,
            Err(idx) => self.entries.insert(idx, decl),
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Removes a property, returning its previous value.
    pub fn remove(&mut self, property: StyleProperty) -> Option<String> {
        let idx = self
            .entries
            .binary_search_by_key(&property, |d| d.property)
            .ok()?;
        Some(self.entries.remove(idx).value)
    }

    /// Returns the value set for a property.
    #[must_use]
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.entries
            .binary_search_by_key(&property, |d| d.property)
            .ok()
            .map(|idx| self.entries[idx].value())
    }

    /// Returns the number of declarations.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no declarations are set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over declarations in property order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> + '_ {
        self.entries.iter()
    }

    /// Overlays `other` on top of `self`: properties set in `other` win.
    pub fn extend_from(&mut self, other: &Self) {
        for decl in other.iter() {
            self.set(decl.property, decl.value.clone());
        }
    }
}

impl<V: Into<String>> FromIterator<(StyleProperty, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (property, value) in iter {
            out.set(property, value);
        }
        out
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = &'a Declaration;
    type IntoIter = core::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Declarations> for Vec<Declaration> {
    fn from(decls: Declarations) -> Self {
        decls.entries.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_never_become_declarations() {
        assert!(Declaration::new(StyleProperty::Display, "").is_none());
        let mut decls = Declarations::new();
        decls.set(StyleProperty::Display, "");
        assert!(decls.is_empty());
    }

    #[test]
    fn set_replaces_and_keeps_sorted() {
        let mut decls = Declarations::new();
        decls.set(StyleProperty::Cursor, "pointer");
        decls.set(StyleProperty::Display, "block");
        decls.set(StyleProperty::Display, "flex");

        let props: Vec<_> = decls.iter().map(Declaration::property).collect();
        assert_eq!(props, [StyleProperty::Display, StyleProperty::Cursor]);
        assert_eq!(decls.get(StyleProperty::Display), Some("flex"));
    }

    #[test]
    fn setting_empty_does_not_clear_existing_value() {
        let mut decls = Declarations::new().with(StyleProperty::Gap, "8px");
        decls.set(StyleProperty::Gap, "");
        assert_eq!(decls.get(StyleProperty::Gap), Some("8px"));
    }

    #[test]
    fn remove_returns_previous() {
        let mut decls = Declarations::new().with(StyleProperty::Gap, "8px");
        assert_eq!(decls.remove(StyleProperty::Gap).as_deref(), Some("8px"));
        assert_eq!(decls.remove(StyleProperty::Gap), None);
    }

    #[test]
    fn extend_from_overlays() {
        let mut base = Declarations::new()
            .with(StyleProperty::Display, "block")
            .with(StyleProperty::Color, "red");
        let over = Declarations::new().with(StyleProperty::Display, "grid");
        base.extend_from(&over);
        assert_eq!(base.get(StyleProperty::Display), Some("grid"));
        assert_eq!(base.get(StyleProperty::Color), Some("red"));
    }

    #[test]
    fn collect_from_pairs() {
        let decls: Declarations = [
            (StyleProperty::Width, "42px"),
            (StyleProperty::Height, ""),
        ]
        .into_iter()
        .collect();
        assert_eq!(decls.len(), 1);
    }
}
