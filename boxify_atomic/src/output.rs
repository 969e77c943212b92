// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-render output: a class list and a custom-property map.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::class_name::ClassName;

/// An insertion-ordered, de-duplicated list of classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<ClassName>,
    seen: HashSet<ClassName>,
}

impl ClassList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class unless it is already present.
    pub fn push(&mut self, class: ClassName) -> bool {
        if self.seen.contains(&class) {
            return false;
        }
        self.seen.insert(class.clone());
        self.classes.push(class);
        true
    }

    /// Returns `true` if the list contains `class`.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c.as_str() == class)
    }

    /// Returns the number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates over the classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassName> + '_ {
        self.classes.iter()
    }

    /// Returns the classes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ClassName] {
        &self.classes
    }

    /// Joins the classes with single spaces.
    #[must_use]
    pub fn to_class_attr(&self) -> String {
        let mut out = String::new();
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(class.as_str());
        }
        out
    }
}

impl Extend<ClassName> for ClassList {
    fn extend<I: IntoIterator<Item = ClassName>>(&mut self, iter: I) {
        for class in iter {
            self.push(class);
        }
    }
}

impl IntoIterator for ClassList {
    type Item = ClassName;
    type IntoIter = alloc::vec::IntoIter<ClassName>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.into_iter()
    }
}

/// An insertion-ordered map of custom property name -> value.
///
/// Setting an existing name replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssVariables {
    entries: Vec<(String, String)>,
}

impl CssVariables {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value of a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Overlays `other`; its values win.
    pub fn extend_from(&mut self, other: &Self) {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
    }
}

/// Classes and variables produced for one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtomicStyles {
    /// Generated classes.
    pub classes: ClassList,
    /// Inline custom-property assignments for dynamic properties.
    pub variables: CssVariables,
}

impl AtomicStyles {
    /// Appends `other`'s classes and overlays its variables.
    pub fn merge(&mut self, other: Self) {
        self.classes.extend(other.classes);
        self.variables.extend_from(&other.variables);
    }

    /// Returns `true` if neither classes nor variables were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::StyleProperty;

    #[test]
    fn class_list_is_a_set() {
        let mut list = ClassList::new();
        let a = ClassName::for_dynamic(StyleProperty::Width);
        assert!(list.push(a.clone()));
        assert!(!list.push(a));
        list.push(ClassName::for_dynamic(StyleProperty::Height));
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_class_attr(), "bx_width bx_height");
    }

    #[test]
    fn variables_replace_in_place() {
        let mut vars = CssVariables::new();
        vars.set("--bx-width", "1px");
        vars.set("--bx-height", "2px");
        vars.set("--bx-width", "3px");
        let pairs: Vec<_> = vars.iter().collect();
        assert_eq!(pairs, [("--bx-width", "3px"), ("--bx-height", "2px")]);
    }

    #[test]
    fn merge_overlays_variables() {
        let mut a = AtomicStyles::default();
        a.variables.set("--bx-width", "1px");
        let mut b = AtomicStyles::default();
        b.variables.set("--bx-width", "2px");
        b.classes.push(ClassName::for_dynamic(StyleProperty::Width));
        a.merge(b);
        assert_eq!(a.variables.get("--bx-width"), Some("2px"));
        assert!(a.classes.contains("bx_width"));
    }
}
