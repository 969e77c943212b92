// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style registry: one cache plus one sink behind one lock.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use spin::Mutex;

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::cache::{RuleCache, variable_name};
use crate::class_name::ClassName;
use crate::declaration::Declarations;
use crate::output::{AtomicStyles, ClassList, CssVariables};
use crate::property::StyleProperty;
use crate::responsive::{ResponsiveOverrides, responsive_variables};
use crate::sink::{DEFAULT_SHEET_TAG, RuleSink, SinkMode, StyleDocument, stylesheet_markup};

#[derive(Debug)]
struct RegistryState {
    cache: RuleCache,
    sink: RuleSink,
}

impl RegistryState {
    fn class(
        &mut self,
        property: StyleProperty,
        value: &str,
        breakpoint: Option<Breakpoint>,
    ) -> ClassName {
        self.cache.get_or_create(&mut self.sink, property, value, breakpoint)
    }
}

/// Process- or request-scoped atomic style registry.
///
/// A registry owns a [`RuleCache`] and a [`RuleSink`] and serializes access
/// to both, so get-or-create is atomic even when the registry is shared
/// between threads. Construct one with [`StyleRegistry::builder`], or with
/// the [`ssr`](Self::ssr) / [`live`](Self::live) shorthands.
///
/// # Example
///
/// ```rust
/// use boxify_atomic::{Declarations, StyleProperty, StyleRegistry};
///
/// let registry = StyleRegistry::ssr();
/// registry.init_ssr();
///
/// let decls = Declarations::new()
///     .with(StyleProperty::Display, "flex")
///     .with(StyleProperty::Width, "42px");
/// let styles = registry.generate(&decls);
///
/// assert!(styles.classes.contains("bx_display_q53mwh"));
/// assert!(styles.classes.contains("bx_width"));
/// assert_eq!(styles.variables.get("--bx-width"), Some("42px"));
///
/// assert_eq!(registry.flush_ssr().len(), 2);
/// ```
pub struct StyleRegistry {
    breakpoints: Breakpoints,
    state: Mutex<RegistryState>,
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("StyleRegistry")
            .field("breakpoints", &self.breakpoints)
            .field("cached_rules", &state.cache.len())
            .field("sink", &state.sink)
            .finish()
    }
}

impl StyleRegistry {
    /// Returns a builder with default settings (SSR mode, default breakpoints).
    #[must_use]
    pub fn builder() -> StyleRegistryBuilder {
        StyleRegistryBuilder::new()
    }

    /// Creates an SSR-mode registry with default breakpoints.
    ///
    /// Call [`init_ssr`](Self::init_ssr) before rendering; rules generated
    /// earlier are dropped.
    #[must_use]
    pub fn ssr() -> Self {
        Self::builder().build()
    }

    /// Creates a live-mode registry writing to `document`.
    #[must_use]
    pub fn live(document: impl StyleDocument + Send + 'static) -> Self {
        Self::builder().live(document).build()
    }

    /// Returns the breakpoint thresholds.
    #[must_use]
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Returns `true` if this registry collects rules for SSR.
    #[must_use]
    pub fn is_ssr(&self) -> bool {
        self.state.lock().sink.as_ssr().is_some()
    }

    /// Returns the class for a single declaration.
    ///
    /// Returns `None` for an empty value.
    pub fn get_or_create(&self, property: StyleProperty, value: &str) -> Option<ClassName> {
        if value.is_empty() {
            return None;
        }
        Some(self.state.lock().class(property, value, None))
    }

    /// Returns the fixed class of a dynamic property.
    ///
    /// Returns `None`, and creates nothing, if `property` is static.
    pub fn dynamic_class(&self, property: StyleProperty) -> Option<ClassName> {
        if !property.is_dynamic() {
            return None;
        }
        Some(self.state.lock().class(property, "", None))
    }

    /// Returns the classes for every static declaration in `declarations`.
    pub fn generate_static_classes(&self, declarations: &Declarations) -> Vec<ClassName> {
        let mut state = self.state.lock();
        declarations
            .iter()
            .filter(|d| !d.property().is_dynamic())
            .map(|d| state.class(d.property(), d.value(), None))
            .collect()
    }

    /// Returns classes and variables for a base declaration set.
    pub fn generate(&self, declarations: &Declarations) -> AtomicStyles {
        let mut classes = ClassList::new();
        {
            let mut state = self.state.lock();
            for decl in declarations {
                classes.push(state.class(decl.property(), decl.value(), None));
            }
        }
        AtomicStyles {
            classes,
            variables: generate_css_variables(declarations),
        }
    }

    /// Expands per-breakpoint overrides into suffixed classes, scoped
    /// variables and breakpoint rules.
    ///
    /// Breakpoints are processed in ascending order. Gated rules are placed by
    /// the sink after every lower layer, so desktop overrides follow tablet
    /// overrides in the stylesheet no matter which was generated first.
    pub fn expand_responsive(&self, overrides: &ResponsiveOverrides) -> AtomicStyles {
        let mut classes = ClassList::new();
        {
            let mut state = self.state.lock();
            for (bp, decls) in overrides.iter() {
                for decl in decls {
                    classes.push(state.class(decl.property(), decl.value(), Some(bp)));
                }
            }
        }
        AtomicStyles {
            classes,
            variables: responsive_variables(overrides),
        }
    }

    /// Base declarations followed by responsive overrides.
    pub fn style(&self, base: &Declarations, overrides: &ResponsiveOverrides) -> AtomicStyles {
        let mut styles = self.generate(base);
        styles.merge(self.expand_responsive(overrides));
        styles
    }

    /// Returns the cached rule text of a class.
    #[must_use]
    pub fn rule(&self, class: &ClassName) -> Option<String> {
        self.state.lock().cache.rule(class).map(String::from)
    }

    /// Returns every rule this registry has generated, in registration order.
    ///
    /// Unlike [`flush_ssr`](Self::flush_ssr) this reflects the cache, not the
    /// sink, and is never cleared.
    #[must_use]
    pub fn generated_rules(&self) -> Vec<String> {
        self.state
            .lock()
            .cache
            .iter()
            .map(|rule| String::from(rule.text()))
            .collect()
    }

    /// Returns the number of cached rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().cache.len()
    }

    /// Returns `true` if no rules have been generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Initializes SSR collection. No-op for a live registry.
    pub fn init_ssr(&self) {
        if let Some(ssr) = self.state.lock().sink.as_ssr_mut() {
            ssr.init();
        }
    }

    /// Returns the rules collected for SSR without clearing them.
    #[must_use]
    pub fn ssr_rules(&self) -> Vec<String> {
        self.state
            .lock()
            .sink
            .as_ssr()
            .map(|ssr| ssr.get_all())
            .unwrap_or_default()
    }

    /// Returns and clears the rules collected for SSR.
    ///
    /// The cache is not cleared: declarations already cached are not sent to
    /// the sink again. Use one registry per request when every response must
    /// carry its complete stylesheet.
    pub fn flush_ssr(&self) -> Vec<String> {
        self.state
            .lock()
            .sink
            .as_ssr_mut()
            .map(|ssr| ssr.flush())
            .unwrap_or_default()
    }

    /// Renders the collected SSR rules as a `<style data-boxify-ssr>` block.
    ///
    /// Returns an empty string if nothing was collected or the registry is
    /// live.
    #[must_use]
    pub fn ssr_stylesheet(&self) -> String {
        stylesheet_markup(&self.ssr_rules())
    }
}

/// Base variables (`--bx-<property>`) for every dynamic declaration.
#[must_use]
pub fn generate_css_variables(declarations: &Declarations) -> CssVariables {
    let mut vars = CssVariables::new();
    for decl in declarations.iter().filter(|d| d.property().is_dynamic()) {
        vars.set(variable_name(decl.property(), None), decl.value());
    }
    vars
}

/// Builder for [`StyleRegistry`].
///
/// # Example
///
/// ```rust
/// use boxify_atomic::{Breakpoints, MemoryDocument, StyleRegistry};
///
/// let registry = StyleRegistry::builder()
///     .breakpoints(Breakpoints::new(0, 640, 1280).unwrap())
///     .sheet_tag("data-my-app")
///     .live(MemoryDocument::new())
///     .build();
/// assert!(!registry.is_ssr());
/// ```
#[derive(Debug)]
pub struct StyleRegistryBuilder {
    mode: SinkMode,
    breakpoints: Breakpoints,
    sheet_tag: String,
}

impl Default for StyleRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistryBuilder {
    /// Creates a builder for an SSR registry with default breakpoints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: SinkMode::Ssr,
            breakpoints: Breakpoints::default(),
            sheet_tag: String::from(DEFAULT_SHEET_TAG),
        }
    }

    /// Collects rules for SSR.
    #[must_use]
    pub fn ssr(mut self) -> Self {
        self.mode = SinkMode::Ssr;
        self
    }

    /// Inserts rules into `document`.
    #[must_use]
    pub fn live(mut self, document: impl StyleDocument + Send + 'static) -> Self {
        self.mode = SinkMode::Live(Box::new(document));
        self
    }

    /// Sets the sink mode directly.
    #[must_use]
    pub fn mode(mut self, mode: SinkMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the breakpoint thresholds.
    #[must_use]
    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Sets the attribute tagging the live stylesheet.
    #[must_use]
    pub fn sheet_tag(mut self, tag: impl Into<String>) -> Self {
        self.sheet_tag = tag.into();
        self
    }

    /// Builds the registry.
    #[must_use]
    pub fn build(self) -> StyleRegistry {
        log::debug!(
            "creating style registry ({:?}, {:?})",
            self.mode,
            self.breakpoints
        );
        StyleRegistry {
            breakpoints: self.breakpoints,
            state: Mutex::new(RegistryState {
                cache: RuleCache::with_breakpoints(self.breakpoints),
                sink: RuleSink::from_mode(self.mode, self.sheet_tag),
            }),
        }
    }
}
