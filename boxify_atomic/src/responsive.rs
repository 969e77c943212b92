// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-breakpoint overrides.
//!
//! [`ResponsiveOverrides`] holds an optional [`Declarations`] set per
//! [`Breakpoint`]. The expansion into classes and rules lives on
//! [`StyleRegistry::expand_responsive`](crate::StyleRegistry::expand_responsive);
//! this module provides the data type plus the pure helpers that do not need
//! a registry.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::cache::{rule_body, variable_name};
use crate::class_name::ClassName;
use crate::declaration::Declarations;
use crate::output::CssVariables;

/// Declarations to apply from a breakpoint upwards.
///
/// # Example
///
/// ```rust
/// use boxify_atomic::{Breakpoint, Declarations, ResponsiveOverrides, StyleProperty};
///
/// let overrides = ResponsiveOverrides::new()
///     .with(Breakpoint::Tablet, Declarations::new().with(StyleProperty::Display, "grid"))
///     .with(Breakpoint::Desktop, Declarations::new().with(StyleProperty::Display, "flex"));
///
/// assert!(overrides.get(Breakpoint::Mobile).is_none());
/// assert_eq!(overrides.iter().count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponsiveOverrides {
    by_breakpoint: [Option<Declarations>; 3],
}

impl ResponsiveOverrides {
    /// Creates an empty set of overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overrides of a breakpoint. An empty set clears it.
    pub fn set(&mut self, breakpoint: Breakpoint, declarations: Declarations) {
        self.by_breakpoint[breakpoint.index()] =
            (!declarations.is_empty()).then_some(declarations);
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, breakpoint: Breakpoint, declarations: Declarations) -> Self {
        self.set(breakpoint, declarations);
        self
    }

    /// Returns the overrides of a breakpoint.
    #[must_use]
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&Declarations> {
        self.by_breakpoint[breakpoint.index()].as_ref()
    }

    /// Returns `true` if no breakpoint has overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_breakpoint.iter().all(Option::is_none)
    }

    /// Iterates over breakpoints with overrides, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &Declarations)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter_map(|bp| self.get(bp).map(|decls| (bp, decls)))
    }
}

/// Breakpoint-scoped variables (`--bx-<property>-<breakpoint>`) for every
/// dynamic declaration in `overrides`.
#[must_use]
pub fn responsive_variables(overrides: &ResponsiveOverrides) -> CssVariables {
    let mut vars = CssVariables::new();
    for (bp, decls) in overrides.iter() {
        for decl in decls {
            if decl.property().is_dynamic() {
                vars.set(variable_name(decl.property(), Some(bp)), decl.value());
            }
        }
    }
    vars
}

/// Synthesizes one combined `@media (min-width)` block per gated breakpoint.
///
/// Mobile contributes no block. Tablet's block always precedes desktop's so
/// that, when both gates are open, desktop declarations win by source order.
/// This is the stylesheet-at-once counterpart of the per-rule output of
/// [`StyleRegistry::expand_responsive`](crate::StyleRegistry::expand_responsive).
/// Class names come straight from [`ClassName::for_declaration`], so they match
/// the registry's unless its cache renamed a colliding declaration.
#[must_use]
pub fn conditional_blocks(
    overrides: &ResponsiveOverrides,
    breakpoints: &Breakpoints,
) -> Vec<String> {
    let mut blocks = Vec::new();
    for (bp, decls) in overrides.iter().filter(|(bp, _)| bp.is_gated()) {
        let mut css = format!("@media (min-width: {}px) {{", breakpoints.min_width(bp));
        for decl in decls {
            let property = decl.property();
            let class = ClassName::for_declaration(property, decl.value()).at_breakpoint(bp);
            css.push(' ');
            css.push_str(&rule_body(&class, property, decl.value(), Some(bp)));
        }
        css.push_str(" }");
        blocks.push(css);
    }
    blocks
}

/// Computes the declarations in effect at `breakpoint`.
///
/// Overrides cascade upwards like `min-width` queries: at desktop, mobile then
/// tablet then desktop overrides are layered over `base`.
#[must_use]
pub fn merge_responsive(
    base: &Declarations,
    overrides: &ResponsiveOverrides,
    breakpoint: Breakpoint,
) -> Declarations {
    let mut merged = base.clone();
    for (bp, decls) in overrides.iter() {
        if bp <= breakpoint {
            merged.extend_from(decls);
        }
    }
    merged
}
