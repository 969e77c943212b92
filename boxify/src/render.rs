// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning a box's props into element attributes.

use alloc::string::String;
use alloc::vec::Vec;

use boxify_atomic::{AtomicStyles, ClassList, CssVariables, StyleRegistry};

use crate::bag::{PropValue, PropertyBag};
use crate::cx::{ClassValue, cx};
use crate::split::split_props;

/// Prop selecting the element to render.
pub const ELEMENT_PROP: &str = "as";
/// Prop carrying caller classes.
pub const CLASS_NAME_PROP: &str = "className";
/// Prop carrying a caller inline style bag.
pub const STYLE_PROP: &str = "style";
/// Element rendered when no `as` prop is given.
pub const DEFAULT_ELEMENT: &str = "div";

/// Everything needed to emit one box element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedBox {
    /// Element name.
    pub element: String,
    /// Value of the `class` attribute: generated classes, then the caller's.
    pub class_name: String,
    /// The generated classes alone.
    pub classes: ClassList,
    /// Inline style: the caller's style overlaid with generated variables.
    pub style: CssVariables,
    /// Pass-through attributes.
    pub attrs: PropertyBag,
}

impl RenderedBox {
    /// Serializes [`style`](Self::style) as a `style` attribute value.
    #[must_use]
    pub fn style_attr(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.style.iter() {
            if !out.is_empty() {
                out.push_str("; ");
            }
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
        }
        out
    }
}

/// Renders boxes against a shared [`StyleRegistry`].
///
/// # Example
///
/// ```rust
/// use boxify::{BoxRenderer, PropertyBag};
/// use boxify_atomic::StyleRegistry;
///
/// let registry = StyleRegistry::ssr();
/// registry.init_ssr();
/// let renderer = BoxRenderer::new(&registry);
///
/// let rendered = renderer.render(
///     PropertyBag::new()
///         .with("as", "section")
///         .with("display", "flex")
///         .with("width", "42px")
///         .with("className", "card")
///         .with("id", "hero"),
/// );
///
/// assert_eq!(rendered.element, "section");
/// assert_eq!(rendered.class_name, "bx_display_q53mwh bx_width card");
/// assert_eq!(rendered.style_attr(), "--bx-width: 42px");
/// assert!(rendered.attrs.contains_key("id"));
/// assert_eq!(registry.ssr_rules().len(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BoxRenderer<'a> {
    registry: &'a StyleRegistry,
}

impl<'a> BoxRenderer<'a> {
    /// Creates a renderer writing rules through `registry`.
    #[must_use]
    pub fn new(registry: &'a StyleRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry this renderer writes through.
    #[must_use]
    pub fn registry(&self) -> &'a StyleRegistry {
        self.registry
    }

    /// Renders a box.
    ///
    /// Style props become atomic classes and variables; `as`, `className`
    /// and `style` are consumed; every other prop lands in
    /// [`attrs`](RenderedBox::attrs).
    #[must_use]
    pub fn render(&self, props: PropertyBag) -> RenderedBox {
        let split = split_props(props);
        let AtomicStyles { classes, variables } =
            self.registry.style(&split.css.base, &split.css.overrides);

        let mut attrs = split.base;
        let element = attrs
            .remove(ELEMENT_PROP)
            .and_then(|v| v.as_str().filter(|s| !s.is_empty()).map(String::from))
            .unwrap_or_else(|| String::from(DEFAULT_ELEMENT));
        let user_class = attrs.remove(CLASS_NAME_PROP).and_then(class_value);
        let user_style = attrs.remove(STYLE_PROP);

        let mut parts = Vec::with_capacity(2);
        if !classes.is_empty() {
            parts.push(ClassValue::from(&classes));
        }
        if let Some(user_class) = user_class {
            parts.push(user_class);
        }
        let class_name = cx(parts);

        let mut style = inline_style(user_style.as_ref());
        style.extend_from(&variables);

        log::trace!(
            "rendered <{element}> with {} classes and {} style entries",
            classes.len(),
            style.len()
        );
        RenderedBox {
            element,
            class_name,
            classes,
            style,
            attrs,
        }
    }
}

/// Renders a box through `registry`; shorthand for [`BoxRenderer::render`].
#[must_use]
pub fn render_box(registry: &StyleRegistry, props: PropertyBag) -> RenderedBox {
    BoxRenderer::new(registry).render(props)
}

fn class_value(value: PropValue) -> Option<ClassValue> {
    match value {
        PropValue::Str(s) => Some(ClassValue::Str(s)),
        PropValue::Number(n) => Some(ClassValue::Number(n)),
        PropValue::Bag(bag) => Some(ClassValue::Map(
            bag.into_iter().map(|(k, v)| (k, !v.is_falsy())).collect(),
        )),
        PropValue::Null | PropValue::Bool(_) => None,
    }
}

fn inline_style(value: Option<&PropValue>) -> CssVariables {
    let mut style = CssVariables::new();
    if let Some(bag) = value.and_then(PropValue::as_bag) {
        for (name, value) in bag.iter() {
            if let Some(css) = value.to_css_value() {
                style.set(name, css);
            }
        }
    }
    style
}
