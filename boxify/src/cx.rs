// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional class joining.

use alloc::string::String;
use alloc::vec::Vec;

use boxify_atomic::{ClassList, ClassName};

use crate::bag::format_number;

/// One argument to [`cx`].
#[derive(Clone, Debug, PartialEq)]
pub enum ClassValue {
    /// Skipped.
    Null,
    /// Skipped; booleans only matter as map conditions.
    Bool(bool),
    /// Emitted as is, even when empty.
    Str(String),
    /// Emitted in its shortest decimal form.
    Number(f64),
    /// Each key whose condition holds is emitted, in order.
    Map(Vec<(String, bool)>),
    /// Joined recursively; the joined result counts as one entry.
    List(Vec<ClassValue>),
}

impl ClassValue {
    fn push_into(&self, out: &mut Vec<String>) {
        match self {
            Self::Null | Self::Bool(_) => {}
            Self::Str(s) => out.push(s.clone()),
            Self::Number(n) => out.push(format_number(*n)),
            Self::Map(entries) => {
                out.extend(entries.iter().filter(|(_, on)| *on).map(|(k, _)| k.clone()));
            }
            Self::List(items) => out.push(cx(items.iter().cloned())),
        }
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for ClassValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ClassValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ClassValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<ClassName> for ClassValue {
    fn from(value: ClassName) -> Self {
        Self::Str(value.into_string())
    }
}

impl From<&ClassList> for ClassValue {
    fn from(value: &ClassList) -> Self {
        Self::List(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ClassValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, bool); N]> for ClassValue {
    fn from(value: [(K, bool); N]) -> Self {
        Self::Map(value.into_iter().map(|(k, on)| (k.into(), on)).collect())
    }
}

/// Joins class values with single spaces.
///
/// Nulls and booleans are skipped. Strings are kept even when empty, so
/// `["a", "", "b"]` joins to `"a  b"`.
///
/// # Example
///
/// ```rust
/// use boxify::{ClassValue, cx};
///
/// let active = true;
/// let joined = cx([
///     ClassValue::from("base"),
///     ClassValue::from([("is-active", active), ("is-disabled", false)]),
///     ClassValue::from(vec![ClassValue::from("state"), ClassValue::from(None::<&str>)]),
/// ]);
/// assert_eq!(joined, "base is-active state");
/// ```
#[must_use]
pub fn cx<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let mut out = Vec::new();
    for value in values {
        value.into().push_into(&mut out);
    }
    out.join(" ")
}

/// Alias of [`cx`].
#[must_use]
pub fn class_names<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    cx(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn s(v: &str) -> ClassValue {
        ClassValue::from(v)
    }

    #[test]
    fn joins_strings() {
        assert_eq!(cx(["foo", "bar", "baz"]), "foo bar baz");
        assert_eq!(cx(["foo"]), "foo");
        assert_eq!(cx(Vec::<ClassValue>::new()), "");
    }

    #[test]
    fn maps_emit_enabled_keys() {
        assert_eq!(cx([ClassValue::from([("foo", true), ("bar", true)])]), "foo bar");
        assert_eq!(cx([ClassValue::from([("foo", true), ("bar", false)])]), "foo");
        assert_eq!(cx([ClassValue::from([("foo", false), ("bar", false)])]), "");
    }

    #[test]
    fn lists_flatten_recursively() {
        let nested = ClassValue::from(vec![s("b"), ClassValue::from(vec![s("c"), s("d")])]);
        assert_eq!(cx([s("a"), nested]), "a b c d");
        let with_map = ClassValue::from(vec![
            s("bar"),
            ClassValue::from([("baz", true), ("qux", false)]),
        ]);
        assert_eq!(cx([s("foo"), with_map]), "foo bar baz");
    }

    #[test]
    fn complex_structure() {
        let joined = cx([
            s("base"),
            ClassValue::from([("is-active", true), ("is-disabled", false)]),
            ClassValue::from(vec![s("state"), ClassValue::from([("has-error", true)])]),
            s("component"),
        ]);
        assert_eq!(joined, "base is-active state has-error component");
    }

    #[test]
    fn skips_null_and_false() {
        assert_eq!(
            cx([ClassValue::Null, ClassValue::Bool(false), s("bar"), ClassValue::Null]),
            "bar"
        );
        let inner = ClassValue::from(vec![ClassValue::Null, ClassValue::Bool(false), s("bar")]);
        assert_eq!(cx([s("foo"), inner]), "foo bar");
    }

    #[test]
    fn numbers_and_empty_strings_are_kept() {
        assert_eq!(cx([ClassValue::from(0)]), "0");
        assert_eq!(cx([s("foo"), ClassValue::from(42), s("bar")]), "foo 42 bar");
        assert_eq!(cx([s("")]), "");
        assert_eq!(cx([s("foo"), s(""), s("bar")]), "foo  bar");
        assert_eq!(cx([ClassValue::from([("", true), ("foo", true)])]), " foo");
    }

    #[test]
    fn alias_matches() {
        assert_eq!(class_names(["foo", "bar"]), cx(["foo", "bar"]));
    }

    #[test]
    fn class_lists_join_in_order() {
        let mut list = ClassList::new();
        list.push(ClassName::for_dynamic(boxify_atomic::StyleProperty::Width));
        list.push(ClassName::for_dynamic(boxify_atomic::StyleProperty::Height));
        assert_eq!(cx([ClassValue::from(&list), s("custom")]), "bx_width bx_height custom");
    }
}
