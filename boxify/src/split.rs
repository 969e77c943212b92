// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Separating style props from everything else.

use boxify_atomic::{Breakpoint, Declarations, ResponsiveOverrides, StyleProperty};

use crate::bag::PropertyBag;

/// The style half of a split bag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssProps {
    /// Unconditioned declarations.
    pub base: Declarations,
    /// Per-breakpoint overrides.
    pub overrides: ResponsiveOverrides,
}

impl CssProps {
    /// Returns `true` if there is nothing to style.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.overrides.is_empty()
    }
}

/// A bag split into style props and pass-through props.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitProps {
    /// Recognized style properties and breakpoint overrides.
    pub css: CssProps,
    /// Everything else, in the original order.
    pub base: PropertyBag,
}

/// Splits `props` into style props and pass-through props.
///
/// Keys naming a [`StyleProperty`] and the three breakpoint keys (`mobile`,
/// `tablet`, `desktop`) go to the style half; every other key, including
/// `hasMirror` and `htmlFor`, is passed through untouched. The two halves
/// never share a key.
///
/// Style values that are falsy or have no CSS text are dropped. Inside a
/// breakpoint bag only style keys are read; anything else there is ignored.
///
/// # Example
///
/// ```rust
/// use boxify::{PropertyBag, split_props};
/// use boxify_atomic::{Breakpoint, StyleProperty};
///
/// let props = PropertyBag::new()
///     .with("display", "flex")
///     .with("tablet", PropertyBag::new().with("display", "grid"))
///     .with("hasMirror", true)
///     .with("data-id", "hero");
///
/// let split = split_props(props);
/// assert_eq!(split.css.base.get(StyleProperty::Display), Some("flex"));
/// assert_eq!(
///     split.css.overrides.get(Breakpoint::Tablet).unwrap().get(StyleProperty::Display),
///     Some("grid"),
/// );
/// assert!(split.base.contains_key("hasMirror"));
/// assert!(split.base.contains_key("data-id"));
/// assert!(!split.base.contains_key("display"));
/// ```
#[must_use]
pub fn split_props(props: PropertyBag) -> SplitProps {
    let mut split = SplitProps::default();
    for (key, value) in props {
        if let Some(bp) = Breakpoint::from_name(&key) {
            if let Some(bag) = value.as_bag() {
                split.css.overrides.set(bp, declarations(bag));
            }
        } else if let Some(property) = StyleProperty::from_name(&key) {
            if let Some(css) = value.to_css_value() {
                split.css.base.set(property, css);
            }
        } else {
            split.base.set(key, value);
        }
    }
    split
}

/// Collects the style declarations of a bag, ignoring every other key.
#[must_use]
pub fn declarations(bag: &PropertyBag) -> Declarations {
    bag.iter()
        .filter_map(|(key, value)| {
            let property = StyleProperty::from_name(key)?;
            Some((property, value.to_css_value()?))
        })
        .collect()
}

/// Returns `true` if `key` is consumed by [`split_props`].
#[must_use]
pub fn is_style_key(key: &str) -> bool {
    Breakpoint::from_name(key).is_some() || StyleProperty::from_name(key).is_some()
}

impl From<PropertyBag> for SplitProps {
    fn from(props: PropertyBag) -> Self {
        split_props(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::PropValue;
    use alloc::vec::Vec;

    #[test]
    fn halves_are_disjoint() {
        let props = PropertyBag::new()
            .with("display", "flex")
            .with("padding", "20px")
            .with("htmlFor", "name")
            .with("mobile", PropertyBag::new().with("width", "100%"))
            .with("onClick", "handler");
        let split = split_props(props.clone());

        for (key, _) in split.base.iter() {
            assert!(!is_style_key(key), "{key} leaked into the pass-through half");
        }
        let passed: Vec<_> = split.base.iter().map(|(k, _)| k).collect();
        assert_eq!(passed, ["htmlFor", "onClick"]);
        assert_eq!(split.css.base.len(), 2);
        assert!(split.css.overrides.get(Breakpoint::Mobile).is_some());
        assert_eq!(
            props.iter().filter(|(k, _)| is_style_key(k)).count(),
            3,
            "three keys are style keys"
        );
    }

    #[test]
    fn falsy_style_values_are_dropped() {
        let split = split_props(
            PropertyBag::new()
                .with("display", "flex")
                .with("flexDirection", "")
                .with("padding", PropValue::Null)
                .with("margin", false)
                .with("zIndex", 0),
        );
        assert_eq!(split.css.base.len(), 2);
        assert_eq!(split.css.base.get(StyleProperty::ZIndex), Some("0"));
        assert!(split.base.is_empty());
    }

    #[test]
    fn numbers_become_strings() {
        let split = split_props(PropertyBag::new().with("zIndex", 10).with("flex", 1.5));
        assert_eq!(split.css.base.get(StyleProperty::ZIndex), Some("10"));
        assert_eq!(split.css.base.get(StyleProperty::Flex), Some("1.5"));
    }

    #[test]
    fn override_bags_keep_only_style_keys() {
        let split = split_props(PropertyBag::new().with(
            "desktop",
            PropertyBag::new()
                .with("alignItems", "center")
                .with("hasMirror", true)
                .with("tablet", PropertyBag::new().with("color", "red")),
        ));
        let desktop = split.css.overrides.get(Breakpoint::Desktop).unwrap();
        assert_eq!(desktop.len(), 1);
        assert_eq!(desktop.get(StyleProperty::AlignItems), Some("center"));
        assert!(split.base.is_empty());
    }

    #[test]
    fn non_bag_breakpoint_values_are_consumed() {
        let split = split_props(PropertyBag::new().with("tablet", PropValue::Null));
        assert!(split.css.is_empty());
        assert!(split.base.is_empty());
    }

    #[test]
    fn empty_bag_splits_to_nothing() {
        let split = split_props(PropertyBag::new());
        assert!(split.css.is_empty());
        assert!(split.base.is_empty());
    }
}
