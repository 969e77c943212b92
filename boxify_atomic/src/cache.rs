// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rule cache.
//!
//! [`RuleCache`] memoizes class name -> rule text. The first request for a
//! declaration synthesizes its rule and sends it to the [`RuleSink`]; later
//! requests are pure lookups. Entries are never mutated or evicted.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::class_name::ClassName;
use crate::property::{AtomicKind, StyleProperty};
use crate::sink::{RuleLayer, RuleSink};

/// Identity of a cached rule.
///
/// Dynamic rules do not depend on the value, so their key carries none.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct RuleKey {
    breakpoint: Option<Breakpoint>,
    property: StyleProperty,
    value: Option<String>,
}

impl RuleKey {
    fn new(property: StyleProperty, value: &str, breakpoint: Option<Breakpoint>) -> Self {
        let value = match property.kind() {
            AtomicKind::Static => Some(value.into()),
            AtomicKind::Dynamic => None,
        };
        Self {
            breakpoint,
            property,
            value,
        }
    }
}

/// A rule stored in the cache.
#[derive(Clone, Debug)]
pub struct CachedRule {
    key: RuleKey,
    class: ClassName,
    text: String,
}

impl CachedRule {
    /// The class the rule targets.
    #[must_use]
    pub fn class(&self) -> &ClassName {
        &self.class
    }

    /// The full rule text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The styled property.
    #[must_use]
    pub fn property(&self) -> StyleProperty {
        self.key.property
    }

    /// The breakpoint the rule is scoped to, if any.
    #[must_use]
    pub fn breakpoint(&self) -> Option<Breakpoint> {
        self.key.breakpoint
    }

    /// The cascade layer of the rule.
    #[must_use]
    pub fn layer(&self) -> RuleLayer {
        self.key.breakpoint.into()
    }
}

/// Name of the variable a dynamic rule reads at a breakpoint.
///
/// `--bx-<property>` for the base layer, `--bx-<property>-<breakpoint>`
/// otherwise.
#[must_use]
pub fn variable_name(property: StyleProperty, breakpoint: Option<Breakpoint>) -> String {
    let mut name = property.variable_name();
    if let Some(bp) = breakpoint {
        name.push('-');
        name.push_str(bp.name());
    }
    name
}

/// Synthesizes the ungated `.class { name: value; }` rule for a class.
///
/// Dynamic properties read the variable for `breakpoint` instead of `value`.
pub(crate) fn rule_body(
    class: &ClassName,
    property: StyleProperty,
    value: &str,
    breakpoint: Option<Breakpoint>,
) -> String {
    match property.kind() {
        AtomicKind::Static => format!(".{class} {{ {}: {value}; }}", property.css_name()),
        AtomicKind::Dynamic => format!(
            ".{class} {{ {}: var({}); }}",
            property.css_name(),
            variable_name(property, breakpoint)
        ),
    }
}

/// Synthesizes the rule text for a class, gated by `@media` when needed.
fn rule_text(
    class: &ClassName,
    property: StyleProperty,
    value: &str,
    breakpoint: Option<Breakpoint>,
    breakpoints: &Breakpoints,
) -> String {
    let body = rule_body(class, property, value, breakpoint);
    match breakpoint {
        Some(bp) if bp.is_gated() => format!(
            "@media (min-width: {}px) {{ {body} }}",
            breakpoints.min_width(bp)
        ),
        _ => body,
    }
}

/// Memoized class-name -> rule-text map.
///
/// # Example
///
/// ```rust
/// use boxify_atomic::{RuleCache, RuleSink, StyleProperty};
///
/// let mut cache = RuleCache::default();
/// let mut sink = RuleSink::Ssr(Default::default());
/// sink.as_ssr_mut().unwrap().init();
///
/// let class = cache.get_or_create(&mut sink, StyleProperty::Display, "flex", None);
/// assert_eq!(class.as_str(), "bx_display_q53mwh");
/// assert_eq!(cache.rule(&class), Some(".bx_display_q53mwh { display: flex; }"));
///
/// // Cache hits never reach the sink again.
/// let again = cache.get_or_create(&mut sink, StyleProperty::Display, "flex", None);
/// assert_eq!(again, class);
/// assert_eq!(sink.as_ssr().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RuleCache {
    breakpoints: Breakpoints,
    by_key: HashMap<RuleKey, ClassName>,
    rules: HashMap<ClassName, CachedRule>,
    order: Vec<ClassName>,
}

impl RuleCache {
    /// Creates an empty cache using the default breakpoint thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache gating breakpoint rules with `breakpoints`.
    #[must_use]
    pub fn with_breakpoints(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            ..Self::default()
        }
    }

    /// Returns the breakpoint thresholds baked into generated rules.
    #[must_use]
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Returns the class for a declaration, creating and registering its rule
    /// on first use.
    ///
    /// With a `breakpoint`, the class carries a `--<breakpoint>` suffix and
    /// the rule is scoped to that breakpoint. For dynamic properties `value`
    /// does not affect the class or the rule.
    pub fn get_or_create(
        &mut self,
        sink: &mut RuleSink,
        property: StyleProperty,
        value: &str,
        breakpoint: Option<Breakpoint>,
    ) -> ClassName {
        let key = RuleKey::new(property, value, breakpoint);
        if let Some(class) = self.by_key.get(&key) {
            return class.clone();
        }

        let base = ClassName::for_declaration(property, value);
        let scoped = |class: &ClassName| match breakpoint {
            Some(bp) => class.at_breakpoint(bp),
            None => class.clone(),
        };
        let mut class = scoped(&base);
        let mut attempt = 0;
        while let Some(owner) = self.rules.get(&class) {
            attempt += 1;
            log::warn!(
                "class `{class}` already styles {}: {:?}; disambiguating {}: {value:?}",
                owner.key.property,
                owner.key.value,
                property,
            );
            class = scoped(&base.disambiguated(attempt));
        }

        let text = rule_text(&class, property, value, breakpoint, &self.breakpoints);
        let layer = RuleLayer::from(breakpoint);
        log::trace!("registering rule `{text}`");
        sink.add(layer, &text);

        self.by_key.insert(key.clone(), class.clone());
        self.order.push(class.clone());
        self.rules.insert(class.clone(), CachedRule {
            key,
            class: class.clone(),
            text,
        });
        class
    }

    /// Returns the rule text cached for a class.
    #[must_use]
    pub fn rule(&self, class: &ClassName) -> Option<&str> {
        self.rules.get(class).map(CachedRule::text)
    }

    /// Returns the cached entry for a class.
    #[must_use]
    pub fn get(&self, class: &ClassName) -> Option<&CachedRule> {
        self.rules.get(class)
    }

    /// Returns the number of cached rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over cached rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CachedRule> + '_ {
        self.order.iter().filter_map(|class| self.rules.get(class))
    }
}
