// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boxify: a styling primitive built on atomic CSS.
//!
//! A box takes a loosely typed [`PropertyBag`] and turns it into an element
//! description: a class attribute, an inline style carrying CSS variables,
//! and the pass-through attributes. Styling goes through a
//! [`StyleRegistry`](boxify_atomic::StyleRegistry) from `boxify_atomic`,
//! which owns rule generation and insertion.
//!
//! - **Props** ([`PropertyBag`], [`PropValue`]): style properties by their
//!   camelCase name, `mobile` / `tablet` / `desktop` override bags, and any
//!   other attribute.
//! - **Splitting** ([`split_props`]): style props versus pass-through props.
//! - **Class joining** ([`cx`], [`ClassValue`]): conditional class lists.
//! - **Rendering** ([`BoxRenderer`], [`RenderedBox`]): the full pipeline.
//!
//! ## Server Rendering
//!
//! ```rust
//! use boxify::{PropertyBag, render_box};
//! use boxify_atomic::StyleRegistry;
//!
//! // One registry per request.
//! let registry = StyleRegistry::ssr();
//! registry.init_ssr();
//!
//! let hero = render_box(
//!     &registry,
//!     PropertyBag::new()
//!         .with("display", "flex")
//!         .with("padding", "20px")
//!         .with("desktop", PropertyBag::new().with("padding", "40px")),
//! );
//! assert_eq!(hero.classes.len(), 3);
//!
//! let head = registry.ssr_stylesheet();
//! assert!(head.starts_with("<style data-boxify-ssr>"));
//! assert!(head.contains("@media (min-width: 1024px)"));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod bag;
mod cx;
mod render;
mod split;

pub use bag::{PropValue, PropertyBag, format_number};
pub use cx::{ClassValue, class_names, cx};
pub use render::{
    BoxRenderer, CLASS_NAME_PROP, DEFAULT_ELEMENT, ELEMENT_PROP, RenderedBox, STYLE_PROP,
    render_box,
};
pub use split::{CssProps, SplitProps, declarations, is_style_key, split_props};
