// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loosely typed component props.
//!
//! A [`PropertyBag`] is what a caller hands to a box: style properties,
//! breakpoint override bags and arbitrary pass-through attributes, all keyed
//! by name.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A single prop value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// An explicit null.
    Null,
    /// A boolean flag.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Str(String),
    /// A nested bag, such as a breakpoint override set or an inline style.
    Bag(PropertyBag),
}

impl PropValue {
    /// Returns `true` for null, `false` and the empty string.
    ///
    /// Zero is not falsy: `0` is a meaningful CSS value.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null | Self::Bool(false) => true,
            Self::Str(s) => s.is_empty(),
            Self::Bool(true) | Self::Number(_) | Self::Bag(_) => false,
        }
    }

    /// Returns the value as CSS text.
    ///
    /// Strings are returned as is and numbers are formatted. Falsy values,
    /// booleans and bags have no CSS text.
    #[must_use]
    pub fn to_css_value(&self) -> Option<String> {
        match self {
            Self::Str(s) if !s.is_empty() => Some(s.clone()),
            Self::Number(n) => Some(format_number(*n)),
            _ => None,
        }
    }

    /// Returns the nested bag, if this is one.
    #[must_use]
    pub fn as_bag(&self) -> Option<&PropertyBag> {
        match self {
            Self::Bag(bag) => Some(bag),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Formats a number the way it reads in a stylesheet.
///
/// Integral values print without a fractional part (`10`, not `10.0`).
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        String::from("NaN")
    } else if n.is_infinite() {
        String::from(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // Also covers negative zero.
        String::from("0")
    } else {
        format!("{n}")
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Str(s) => f.write_str(s),
            Self::Bag(_) => f.write_str("[bag]"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<PropertyBag> for PropValue {
    fn from(value: PropertyBag) -> Self {
        Self::Bag(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// An insertion-ordered map of prop name to [`PropValue`].
///
/// Setting an existing key replaces its value in place.
///
/// # Example
///
/// ```rust
/// use boxify::{PropValue, PropertyBag};
///
/// let props = PropertyBag::new()
///     .with("display", "flex")
///     .with("zIndex", 10)
///     .with("hasMirror", true);
///
/// assert_eq!(props.len(), 3);
/// assert_eq!(props.get("zIndex"), Some(&PropValue::Number(10.0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyBag {
    entries: Vec<(String, PropValue)>,
}

impl PropertyBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the value of a prop.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Removes a prop, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Returns `true` if the bag has a prop named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of props.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (key, value) in iter {
            bag.set(key, value);
        }
        bag
    }
}

impl IntoIterator for PropertyBag {
    type Item = (String, PropValue);
    type IntoIter = alloc::vec::IntoIter<(String, PropValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_values() {
        assert!(PropValue::Null.is_falsy());
        assert!(PropValue::Bool(false).is_falsy());
        assert!(PropValue::from("").is_falsy());
        assert!(!PropValue::from(0).is_falsy());
        assert!(!PropValue::from("0").is_falsy());
        assert!(!PropValue::Bool(true).is_falsy());
    }

    #[test]
    fn css_values() {
        assert_eq!(PropValue::from("flex").to_css_value().as_deref(), Some("flex"));
        assert_eq!(PropValue::from(10).to_css_value().as_deref(), Some("10"));
        assert_eq!(PropValue::from(0).to_css_value().as_deref(), Some("0"));
        assert_eq!(PropValue::from(1.5).to_css_value().as_deref(), Some("1.5"));
        assert_eq!(PropValue::from("").to_css_value(), None);
        assert_eq!(PropValue::Bool(true).to_css_value(), None);
        assert_eq!(PropValue::from(PropertyBag::new()).to_css_value(), None);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn options_map_to_null() {
        assert_eq!(PropValue::from(None::<&str>), PropValue::Null);
        assert_eq!(PropValue::from(Some("a")), PropValue::from("a"));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut bag = PropertyBag::new().with("a", 1).with("b", 2);
        bag.set("a", 3);
        let keys: Vec<_> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(bag.get("a"), Some(&PropValue::Number(3.0)));
        assert_eq!(bag.remove("b"), Some(PropValue::Number(2.0)));
        assert!(!bag.contains_key("b"));
    }
}
