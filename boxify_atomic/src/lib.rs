// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boxify Atomic: deterministic atomic CSS generation.
//!
//! This crate turns individual style declarations into single-purpose CSS
//! classes and makes sure each class's rule exists exactly once in the
//! document. It models styling as a combination of:
//!
//! - **Properties** ([`StyleProperty`]): the closed set of styleable
//!   properties, each either [`Static`](AtomicKind::Static) (one class per
//!   value) or [`Dynamic`](AtomicKind::Dynamic) (one class per property,
//!   value carried by a CSS custom property).
//! - **Class names** ([`ClassName`]): `bx_<property>_<hash>` for static
//!   declarations, `bx_<property>` for dynamic ones, derived purely from the
//!   declaration so server and client agree.
//! - **Rule cache** ([`RuleCache`]): get-or-create of classes, registering
//!   each rule with a [`RuleSink`] on first use only.
//! - **Sinks** ([`SsrRegistry`], [`LiveSink`]): collection for server-side
//!   rendering, or insertion into a tagged stylesheet of a live
//!   [`StyleDocument`].
//! - **Breakpoints** ([`Breakpoint`], [`Breakpoints`], [`ResponsiveOverrides`]):
//!   mobile-first overrides gated by `min-width` media queries.
//! - **Registry** ([`StyleRegistry`]): cache and sink behind one lock, with the
//!   high-level generation entry points.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxify_atomic::{
//!     Breakpoint, Declarations, ResponsiveOverrides, StyleProperty, StyleRegistry,
//! };
//!
//! let registry = StyleRegistry::ssr();
//! registry.init_ssr();
//!
//! let base = Declarations::new()
//!     .with(StyleProperty::Display, "flex")
//!     .with(StyleProperty::Width, "320px");
//! let overrides = ResponsiveOverrides::new().with(
//!     Breakpoint::Desktop,
//!     Declarations::new().with(StyleProperty::Width, "960px"),
//! );
//!
//! let styles = registry.style(&base, &overrides);
//! assert_eq!(
//!     styles.classes.to_class_attr(),
//!     "bx_display_q53mwh bx_width bx_width--desktop"
//! );
//! assert_eq!(styles.variables.get("--bx-width"), Some("320px"));
//! assert_eq!(styles.variables.get("--bx-width-desktop"), Some("960px"));
//!
//! // Embed the collected rules in the server response.
//! let markup = registry.ssr_stylesheet();
//! assert!(markup.starts_with("<style data-boxify-ssr>"));
//! ```
//!
//! ## Rule Ordering
//!
//! Rules are grouped into [`RuleLayer`]s: unconditioned rules first, then
//! mobile, tablet and desktop overrides. Both sinks keep that grouping no
//! matter which declaration was requested first, so a desktop override
//! always wins over a tablet override when both media queries match.
//!
//! ## Live Documents
//!
//! [`StyleDocument`] and [`CssSheet`] abstract the host document. The crate
//! ships [`MemoryDocument`], a headless implementation used for tests and for
//! hosts that serialize the stylesheet themselves.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.
//!
//! ## Features
//!
//! This crate currently has no optional features. All functionality is always
//! available.

#![no_std]

extern crate alloc;

mod breakpoint;
mod cache;
mod class_name;
mod declaration;
mod memory;
mod output;
mod property;
mod registry;
mod responsive;
mod sink;

pub use breakpoint::{Breakpoint, Breakpoints, BreakpointsError, UnknownBreakpoint};
pub use cache::{CachedRule, RuleCache, variable_name};
pub use class_name::{CLASS_PREFIX, ClassName, declaration_hash, to_base36};
pub use declaration::{Declaration, Declarations};
pub use memory::{MemoryDocument, MemorySheet};
pub use output::{AtomicStyles, ClassList, CssVariables};
pub use property::{AtomicKind, StyleProperty, UnknownProperty};
pub use registry::{StyleRegistry, StyleRegistryBuilder, generate_css_variables};
pub use responsive::{
    ResponsiveOverrides, conditional_blocks, merge_responsive, responsive_variables,
};
pub use sink::{
    CssSheet, DEFAULT_SHEET_TAG, LiveSink, RuleLayer, RuleRejected, RuleSink, SSR_SHEET_TAG,
    SinkMode, SsrRegistry, StyleDocument, stylesheet_markup,
};
