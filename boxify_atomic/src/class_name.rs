// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic class-name generation.
//!
//! Class names are derived purely from the declaration they style, so the
//! same `(property, value)` always maps to the same name and can be shared by
//! every element that needs it.

use alloc::string::String;
use core::fmt;
use core::fmt::Write as _;

use crate::breakpoint::Breakpoint;
use crate::property::{AtomicKind, StyleProperty};

/// Prefix shared by every generated class and variable.
pub const CLASS_PREFIX: &str = "bx_";

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hashes a `(property, value)` pair.
///
/// The input is `name + ":" + value`, folded over UTF-16 code units with
/// `hash * 31 + unit` in wrapping 32-bit signed arithmetic. The absolute value
/// is returned, so `i32::MIN` maps to `2^31`.
///
/// This is not collision resistant; see [`RuleCache`](crate::RuleCache) for
/// how collisions are detected.
#[must_use]
pub fn declaration_hash(name: &str, value: &str) -> u32 {
    let mut hash: i32 = 0;
    let units = name
        .encode_utf16()
        .chain(":".encode_utf16())
        .chain(value.encode_utf16());
    for unit in units {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Renders `n` in lowercase base 36.
#[must_use]
pub fn to_base36(mut n: u32) -> String {
    if n == 0 {
        return String::from("0");
    }
    // u32::MAX needs 7 digits.
    let mut buf = [0_u8; 7];
    let mut start = buf.len();
    while n > 0 {
        start -= 1;
        buf[start] = BASE36_DIGITS[(n % 36) as usize];
        n /= 36;
    }
    buf[start..].iter().map(|&b| char::from(b)).collect()
}

/// A generated atomic class name.
///
/// # Example
///
/// ```rust
/// use boxify_atomic::{ClassName, StyleProperty};
///
/// let class = ClassName::for_declaration(StyleProperty::Display, "flex");
/// assert_eq!(class.as_str(), "bx_display_q53mwh");
///
/// let dynamic = ClassName::for_declaration(StyleProperty::Width, "42px");
/// assert_eq!(dynamic.as_str(), "bx_width");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassName(String);

impl ClassName {
    /// Derives the canonical class for a declaration.
    ///
    /// Static properties get `bx_<fragment>_<hash>`; dynamic properties get
    /// the value-independent `bx_<fragment>`.
    #[must_use]
    pub fn for_declaration(property: StyleProperty, value: &str) -> Self {
        match property.kind() {
            AtomicKind::Static => Self::for_static(property, value),
            AtomicKind::Dynamic => Self::for_dynamic(property),
        }
    }

    /// `bx_<fragment>_<base36 hash>`.
    #[must_use]
    pub fn for_static(property: StyleProperty, value: &str) -> Self {
        let mut out = Self::for_dynamic(property).0;
        out.push('_');
        out.push_str(&to_base36(declaration_hash(property.name(), value)));
        Self(out)
    }

    /// `bx_<fragment>`.
    #[must_use]
    pub fn for_dynamic(property: StyleProperty) -> Self {
        let mut out = String::from(CLASS_PREFIX);
        out.push_str(&property.class_fragment());
        Self(out)
    }

    /// Returns this class with a `--<breakpoint>` suffix.
    #[must_use]
    pub fn at_breakpoint(&self, breakpoint: Breakpoint) -> Self {
        let mut out = String::with_capacity(self.0.len() + 10);
        let _ = write!(out, "{}--{}", self.0, breakpoint.name());
        Self(out)
    }

    /// Returns this class with a numeric disambiguation suffix.
    pub(crate) fn disambiguated(&self, n: u32) -> Self {
        let mut out = self.0.clone();
        let _ = write!(out, "_{n}");
        Self(out)
    }

    /// Returns the class as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the class name and returns the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassName").field(&self.0).finish()
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ClassName> for String {
    fn from(class: ClassName) -> Self {
        class.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use hashbrown::HashSet;

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(to_base36(declaration_hash("display", "flex")), "q53mwh");
        assert_eq!(to_base36(declaration_hash("padding", "20px")), "besya7");
        assert_eq!(
            to_base36(declaration_hash("backgroundColor", "red")),
            "maqphw"
        );
        assert_eq!(to_base36(declaration_hash("display", "grid")), "q54ef2");
    }

    #[test]
    fn empty_value_hashes_like_any_other() {
        assert_eq!(to_base36(declaration_hash("display", "")), "4pqabc");
        assert_eq!(
            ClassName::for_static(StyleProperty::Display, "").as_str(),
            "bx_display_4pqabc"
        );
    }

    #[test]
    fn hash_is_deterministic() {
        let a = declaration_hash("gridTemplateColumns", "repeat(3, 1fr)");
        let b = declaration_hash("gridTemplateColumns", "repeat(3, 1fr)");
        assert_eq!(a, b);
    }

    #[test]
    fn base36_edges() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u32::MAX), "1z141z3");
        // |i32::MIN|
        assert_eq!(to_base36(1 << 31), "zik0zk");
    }

    #[test]
    fn static_names_carry_hash_and_dynamic_names_do_not() {
        let bg = ClassName::for_declaration(StyleProperty::BackgroundColor, "red");
        assert_eq!(bg.as_str(), "bx_background_color_maqphw");

        let w1 = ClassName::for_declaration(StyleProperty::MaxWidth, "42px");
        let w2 = ClassName::for_declaration(StyleProperty::MaxWidth, "17px");
        assert_eq!(w1, w2);
        assert_eq!(w1.as_str(), "bx_max_width");
    }

    #[test]
    fn breakpoint_suffix() {
        let class = ClassName::for_static(StyleProperty::Display, "grid");
        assert_eq!(
            class.at_breakpoint(Breakpoint::Tablet).as_str(),
            "bx_display_q54ef2--tablet"
        );
    }

    #[test]
    fn distinct_declarations_get_distinct_names() {
        let values = [
            "flex", "grid", "block", "inline", "inline-block", "none", "contents", "table",
        ];
        let props = [
            StyleProperty::Display,
            StyleProperty::Position,
            StyleProperty::Color,
            StyleProperty::Cursor,
        ];
        let names: Vec<_> = props
            .iter()
            .flat_map(|&p| values.iter().map(move |v| ClassName::for_static(p, v)))
            .collect();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "corpus should be collision free");
    }
}
