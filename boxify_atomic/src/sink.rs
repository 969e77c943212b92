// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule sinks: where generated rule text ends up.
//!
//! A [`RuleSink`] is either an [`SsrRegistry`], which collects rule text for
//! later flushing into server-rendered markup, or a [`LiveSink`], which
//! appends rules to a single tagged stylesheet in a live document.
//!
//! Both sinks keep rules grouped by [`RuleLayer`] so that breakpoint
//! overrides always follow the rules they override, regardless of the order
//! in which declarations were first requested.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

use crate::breakpoint::Breakpoint;

/// Attribute tagging the live stylesheet element.
pub const DEFAULT_SHEET_TAG: &str = "data-boxify";

/// Attribute tagging the server-rendered style block.
pub const SSR_SHEET_TAG: &str = "data-boxify-ssr";

/// Cascade layer of a rule.
///
/// Layers are emitted in ascending order: unconditioned base rules, then
/// mobile rules, then the `min-width` gated tablet and desktop rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleLayer {
    /// Rules for declarations set directly on a box.
    Base,
    /// Rules for a breakpoint override.
    Breakpoint(Breakpoint),
}

impl RuleLayer {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            Self::Base => 0,
            Self::Breakpoint(bp) => 1 + bp.index(),
        }
    }

    /// Classifies rule text by the breakpoint suffix of its selector.
    ///
    /// The selector of a plain rule, or of the single rule nested in an
    /// `@media` block, is inspected for a trailing `--<breakpoint>`. Anything
    /// else, including rules this crate did not generate, is [`Base`](Self::Base).
    ///
    /// ```rust
    /// use boxify_atomic::{Breakpoint, RuleLayer};
    ///
    /// assert_eq!(RuleLayer::of_rule(".bx_width { width: var(--bx-width); }"), RuleLayer::Base);
    /// assert_eq!(
    ///     RuleLayer::of_rule("@media (min-width: 768px) { .bx_gap_x--tablet { gap: 1px; } }"),
    ///     RuleLayer::Breakpoint(Breakpoint::Tablet),
    /// );
    /// ```
    #[must_use]
    pub fn of_rule(text: &str) -> Self {
        let rule = match text.trim_start().strip_prefix("@media") {
            Some(rest) => rest.split_once('{').map_or("", |(_, inner)| inner),
            None => text,
        };
        let selector = rule.split_once('{').map_or(rule, |(sel, _)| sel).trim();
        selector
            .rsplit_once("--")
            .and_then(|(_, suffix)| Breakpoint::from_name(suffix))
            .map_or(Self::Base, Self::Breakpoint)
    }
}

impl From<Option<Breakpoint>> for RuleLayer {
    fn from(breakpoint: Option<Breakpoint>) -> Self {
        breakpoint.map_or(Self::Base, Self::Breakpoint)
    }
}

/// Error returned by a stylesheet that refuses a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleRejected {
    /// The rejected rule text.
    pub rule: String,
    /// Why the stylesheet refused it.
    pub reason: String,
}

impl fmt::Display for RuleRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to insert CSS rule `{}`: {}", self.rule, self.reason)
    }
}

impl core::error::Error for RuleRejected {}

/// Rule texts grouped by layer, de-duplicated by exact text.
#[derive(Clone, Debug, Default)]
struct LayeredRules {
    layers: [Vec<String>; RuleLayer::COUNT],
    seen: HashSet<String>,
}

impl LayeredRules {
    fn insert(&mut self, layer: RuleLayer, text: &str) -> bool {
        if self.seen.contains(text) {
            return false;
        }
        self.seen.insert(text.into());
        self.layers[layer.index()].push(text.into());
        true
    }

    fn len(&self) -> usize {
        self.seen.len()
    }

    fn to_vec(&self) -> Vec<String> {
        self.layers.iter().flatten().cloned().collect()
    }

    fn drain(&mut self) -> Vec<String> {
        self.seen.clear();
        let mut out = Vec::with_capacity(self.layers.iter().map(Vec::len).sum());
        for layer in &mut self.layers {
            out.append(layer);
        }
        out
    }
}

/// Collects rule text while rendering without a live document.
///
/// The registry starts uninitialized; rules added before [`init`](Self::init)
/// are dropped. Callers scope it to one request: initialize, render, then
/// [`flush`](Self::flush) into the response.
///
/// # Example
///
/// ```rust
/// use boxify_atomic::{RuleLayer, SsrRegistry};
///
/// let mut ssr = SsrRegistry::new();
/// assert!(!ssr.add_rule(RuleLayer::Base, ".a { color: red; }"));
///
/// ssr.init();
/// assert!(ssr.add_rule(RuleLayer::Base, ".a { color: red; }"));
/// assert!(!ssr.add_rule(RuleLayer::Base, ".a { color: red; }"));
///
/// assert_eq!(ssr.flush(), [".a { color: red; }"]);
/// assert!(ssr.flush().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SsrRegistry {
    rules: Option<LayeredRules>,
}

impl SsrRegistry {
    /// Creates an uninitialized registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the registry. Calling this again keeps collected rules.
    pub fn init(&mut self) {
        if self.rules.is_none() {
            log::debug!("SSR rule registry initialized");
            self.rules = Some(LayeredRules::default());
        }
    }

    /// Returns `true` once [`init`](Self::init) has been called.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.rules.is_some()
    }

    /// Adds a rule unless an identical text is already collected.
    ///
    /// Returns `true` if the rule was added. Before initialization the rule
    /// is dropped and `false` is returned.
    pub fn add_rule(&mut self, layer: RuleLayer, text: &str) -> bool {
        match &mut self.rules {
            Some(rules) => rules.insert(layer, text),
            None => {
                log::debug!("SSR registry not initialized; dropping rule `{text}`");
                false
            }
        }
    }

    /// Returns all collected rules in layer order without clearing them.
    #[must_use]
    pub fn get_all(&self) -> Vec<String> {
        self.rules.as_ref().map(LayeredRules::to_vec).unwrap_or_default()
    }

    /// Returns all collected rules in layer order and clears the registry.
    pub fn flush(&mut self) -> Vec<String> {
        let rules = self
            .rules
            .as_mut()
            .map(LayeredRules::drain)
            .unwrap_or_default();
        log::debug!("flushed {} SSR rules", rules.len());
        rules
    }

    /// Returns the number of collected rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.as_ref().map_or(0, LayeredRules::len)
    }

    /// Returns `true` if no rules are collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the collected rules as a single `<style>` block.
    ///
    /// Returns an empty string when nothing has been collected.
    #[must_use]
    pub fn to_markup(&self) -> String {
        stylesheet_markup(&self.get_all())
    }
}

/// Wraps rule texts in a `<style data-boxify-ssr>` element.
///
/// Every `</` in rule text is written as the CSS escape `<\/`, so a value
/// cannot close the element early. Returns an empty string for an empty slice.
#[must_use]
pub fn stylesheet_markup(rules: &[String]) -> String {
    if rules.is_empty() {
        return String::new();
    }
    let mut out = String::from("<style ");
    out.push_str(SSR_SHEET_TAG);
    out.push('>');
    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&rule.replace("</", "<\\/"));
    }
    out.push_str("</style>");
    out
}

/// A stylesheet that accepts rules at an index, like the CSSOM
/// `CSSStyleSheet.insertRule`.
pub trait CssSheet {
    /// Returns the number of rules in the sheet.
    fn rule_count(&self) -> usize;

    /// Returns the text of the rule at `index`, like `cssRules[index].cssText`.
    fn rule_text(&self, index: usize) -> Option<String>;

    /// Inserts `rule` at `index`.
    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<(), RuleRejected>;
}

/// A live document that can host tagged stylesheets.
pub trait StyleDocument {
    /// Returns the stylesheet tagged with `tag`, creating and attaching one if
    /// none exists.
    ///
    /// Returns `None` if the document cannot provide a sheet right now.
    fn tagged_sheet(&mut self, tag: &str) -> Option<&mut dyn CssSheet>;
}

/// Appends rules to one tagged stylesheet in a live document.
///
/// Each distinct rule text is inserted at most once. A rejected rule is
/// logged and skipped; it is never retried.
///
/// Insertion positions are derived from the sheet's current contents, so
/// several sinks may share one tagged sheet and its rules stay grouped by
/// [`RuleLayer`].
pub struct LiveSink {
    document: Box<dyn StyleDocument + Send>,
    tag: String,
    inserted: HashSet<String>,
}

impl fmt::Debug for LiveSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveSink")
            .field("tag", &self.tag)
            .field("inserted", &self.inserted.len())
            .finish_non_exhaustive()
    }
}

impl LiveSink {
    /// Creates a sink writing to the sheet tagged `tag` in `document`.
    #[must_use]
    pub fn new(document: Box<dyn StyleDocument + Send>, tag: impl Into<String>) -> Self {
        Self {
            document,
            tag: tag.into(),
            inserted: HashSet::new(),
        }
    }

    /// Returns the stylesheet tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns `true` if `text` has been committed to the sheet.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.inserted.contains(text)
    }

    /// Returns the number of rules this sink has committed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inserted.len()
    }

    /// Returns `true` if nothing has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
    }

    /// Inserts `text` after the last rule of the sheet whose layer does not
    /// exceed `layer`, unless this sink already inserted it.
    ///
    /// Returns `true` if the sheet accepted a new rule.
    pub fn insert_rule(&mut self, layer: RuleLayer, text: &str) -> bool {
        if self.inserted.contains(text) {
            return false;
        }
        let Some(sheet) = self.document.tagged_sheet(&self.tag) else {
            log::debug!("no `{}` stylesheet available; dropping rule `{text}`", self.tag);
            return false;
        };
        let mut index = sheet.rule_count();
        while index > 0
            && sheet
                .rule_text(index - 1)
                .is_some_and(|rule| RuleLayer::of_rule(&rule) > layer)
        {
            index -= 1;
        }
        match sheet.insert_rule(text, index) {
            Ok(()) => {
                self.inserted.insert(text.into());
                true
            }
            Err(err) => {
                log::warn!("{err}");
                false
            }
        }
    }
}

/// Selects the destination for generated rules.
pub enum SinkMode {
    /// Collect rules in an [`SsrRegistry`].
    Ssr,
    /// Insert rules into a live document.
    Live(Box<dyn StyleDocument + Send>),
}

impl fmt::Debug for SinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ssr => f.write_str("Ssr"),
            Self::Live(_) => f.debug_tuple("Live").finish_non_exhaustive(),
        }
    }
}

/// The active rule destination of a registry.
#[derive(Debug)]
pub enum RuleSink {
    /// Server-side collection.
    Ssr(SsrRegistry),
    /// Live stylesheet insertion.
    Live(LiveSink),
}

impl RuleSink {
    pub(crate) fn from_mode(mode: SinkMode, tag: String) -> Self {
        match mode {
            SinkMode::Ssr => Self::Ssr(SsrRegistry::new()),
            SinkMode::Live(document) => Self::Live(LiveSink::new(document, tag)),
        }
    }

    /// Sends a rule to the destination. Returns `true` if it was accepted.
    pub fn add(&mut self, layer: RuleLayer, text: &str) -> bool {
        match self {
            Self::Ssr(ssr) => ssr.add_rule(layer, text),
            Self::Live(live) => live.insert_rule(layer, text),
        }
    }

    /// Returns the SSR registry, if this is an SSR sink.
    #[must_use]
    pub fn as_ssr(&self) -> Option<&SsrRegistry> {
        match self {
            Self::Ssr(ssr) => Some(ssr),
            Self::Live(_) => None,
        }
    }

    /// Mutable form of [`as_ssr`](Self::as_ssr).
    pub fn as_ssr_mut(&mut self) -> Option<&mut SsrRegistry> {
        match self {
            Self::Ssr(ssr) => Some(ssr),
            Self::Live(_) => None,
        }
    }

    /// Returns the live sink, if this is a live sink.
    #[must_use]
    pub fn as_live(&self) -> Option<&LiveSink> {
        match self {
            Self::Live(live) => Some(live),
            Self::Ssr(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;

    const BASE: &str = ".b { gap: 0; }";
    const MOBILE: &str = ".m--mobile { gap: 1px; }";
    const TABLET: &str = "@media (min-width: 768px) { .t--tablet { gap: 2px; } }";
    const TABLET_2: &str = "@media (min-width: 768px) { .t2--tablet { gap: 2px; } }";
    const DESKTOP: &str = "@media (min-width: 1024px) { .d--desktop { gap: 3px; } }";

    fn layer(breakpoint: Option<Breakpoint>) -> RuleLayer {
        RuleLayer::from(breakpoint)
    }

    #[test]
    fn ssr_round_trip() {
        let mut ssr = SsrRegistry::new();
        ssr.init();
        let rules = [".a { color: red; }", ".b { color: blue; }", ".c { gap: 1px; }"];
        for rule in rules {
            assert!(ssr.add_rule(RuleLayer::Base, rule));
            assert!(!ssr.add_rule(RuleLayer::Base, rule));
        }
        assert_eq!(ssr.len(), 3);
        assert_eq!(ssr.get_all(), rules);
        assert_eq!(ssr.len(), 3, "get_all must not clear");

        assert_eq!(ssr.flush(), rules);
        assert!(ssr.is_empty());
        assert!(ssr.flush().is_empty());
        assert!(ssr.is_initialized());
    }

    #[test]
    fn ssr_drops_rules_before_init() {
        let mut ssr = SsrRegistry::new();
        assert!(!ssr.add_rule(RuleLayer::Base, ".a { color: red; }"));
        assert!(ssr.get_all().is_empty());
        assert!(ssr.flush().is_empty());
        assert_eq!(ssr.to_markup(), "");
    }

    #[test]
    fn ssr_reinit_keeps_rules() {
        let mut ssr = SsrRegistry::new();
        ssr.init();
        ssr.add_rule(RuleLayer::Base, ".a { color: red; }");
        ssr.init();
        assert_eq!(ssr.len(), 1);
    }

    #[test]
    fn ssr_orders_output_by_layer() {
        let mut ssr = SsrRegistry::new();
        ssr.init();
        ssr.add_rule(RuleLayer::Breakpoint(Breakpoint::Desktop), "desktop");
        ssr.add_rule(RuleLayer::Breakpoint(Breakpoint::Tablet), "tablet");
        ssr.add_rule(RuleLayer::Base, "base");
        ssr.add_rule(RuleLayer::Breakpoint(Breakpoint::Mobile), "mobile");
        assert_eq!(ssr.get_all(), ["base", "mobile", "tablet", "desktop"]);
    }

    #[test]
    fn ssr_markup_wraps_rules() {
        let mut ssr = SsrRegistry::new();
        ssr.init();
        assert_eq!(ssr.to_markup(), "");
        ssr.add_rule(RuleLayer::Base, ".a { color: red; }");
        ssr.add_rule(RuleLayer::Base, ".b { color: blue; }");
        assert_eq!(
            ssr.to_markup(),
            "<style data-boxify-ssr>.a { color: red; }\n.b { color: blue; }</style>"
        );
    }

    #[test]
    fn live_insertion_is_idempotent() {
        let doc = MemoryDocument::new();
        let mut live = LiveSink::new(Box::new(doc.clone()), DEFAULT_SHEET_TAG);
        assert!(live.insert_rule(RuleLayer::Base, ".a { color: red; }"));
        assert!(!live.insert_rule(RuleLayer::Base, ".a { color: red; }"));
        assert_eq!(doc.rules(DEFAULT_SHEET_TAG), [".a { color: red; }"]);
        assert_eq!(doc.sheet_count(), 1);
    }

    #[test]
    fn live_rejection_is_logged_and_not_recorded() {
        let doc = MemoryDocument::new();
        let mut live = LiveSink::new(Box::new(doc.clone()), DEFAULT_SHEET_TAG);
        assert!(!live.insert_rule(RuleLayer::Base, ".broken { color: red;"));
        assert!(!live.contains(".broken { color: red;"));
        assert!(live.insert_rule(RuleLayer::Base, ".ok { color: red; }"));
        assert_eq!(doc.rules(DEFAULT_SHEET_TAG), [".ok { color: red; }"]);
    }

    #[test]
    fn live_keeps_layers_in_cascade_order() {
        let doc = MemoryDocument::new();
        let mut live = LiveSink::new(Box::new(doc.clone()), DEFAULT_SHEET_TAG);
        live.insert_rule(layer(Some(Breakpoint::Desktop)), DESKTOP);
        live.insert_rule(layer(Some(Breakpoint::Tablet)), TABLET);
        live.insert_rule(layer(None), BASE);
        live.insert_rule(layer(Some(Breakpoint::Mobile)), MOBILE);
        live.insert_rule(layer(Some(Breakpoint::Tablet)), TABLET_2);
        assert_eq!(
            doc.rules(DEFAULT_SHEET_TAG),
            [BASE, MOBILE, TABLET, TABLET_2, DESKTOP]
        );
    }

    #[test]
    fn sinks_sharing_a_sheet_keep_layers_in_order() {
        let doc = MemoryDocument::new();
        let mut a = LiveSink::new(Box::new(doc.clone()), DEFAULT_SHEET_TAG);
        let mut b = LiveSink::new(Box::new(doc.clone()), DEFAULT_SHEET_TAG);

        b.insert_rule(layer(Some(Breakpoint::Desktop)), DESKTOP);
        a.insert_rule(layer(None), BASE);
        a.insert_rule(layer(Some(Breakpoint::Tablet)), TABLET);
        b.insert_rule(layer(None), ".b2 { gap: 0; }");
        a.insert_rule(layer(Some(Breakpoint::Desktop)), DESKTOP);

        let rules = doc.rules(DEFAULT_SHEET_TAG);
        let layers: Vec<_> = rules.iter().map(|r| RuleLayer::of_rule(r)).collect();
        assert!(layers.is_sorted(), "layers out of order: {rules:?}");
        let tablet = rules.iter().position(|r| r == TABLET).unwrap();
        let last_desktop = rules.iter().rposition(|r| r == DESKTOP).unwrap();
        assert!(tablet < last_desktop, "tablet rule must precede desktop: {rules:?}");
        assert_eq!(rules.len(), 5);
    }

    #[test]
    fn rule_layers_are_read_from_selectors() {
        assert_eq!(RuleLayer::of_rule(BASE), RuleLayer::Base);
        assert_eq!(RuleLayer::of_rule(MOBILE), layer(Some(Breakpoint::Mobile)));
        assert_eq!(RuleLayer::of_rule(TABLET), layer(Some(Breakpoint::Tablet)));
        assert_eq!(RuleLayer::of_rule(DESKTOP), layer(Some(Breakpoint::Desktop)));
        assert_eq!(RuleLayer::of_rule(".x { width: var(--bx-width-tablet); }"), RuleLayer::Base);
        assert_eq!(RuleLayer::of_rule(".x--wide { gap: 0; }"), RuleLayer::Base);
        assert_eq!(RuleLayer::of_rule("not a rule"), RuleLayer::Base);
    }

    #[test]
    fn markup_escapes_closing_tags() {
        let rules = [String::from(".bx_font_family_1 { font-family: x</style><b>; }")];
        let markup = stylesheet_markup(&rules);
        assert_eq!(
            markup,
            "<style data-boxify-ssr>.bx_font_family_1 { font-family: x<\\/style><b>; }</style>"
        );
        assert_eq!(markup.matches("</").count(), 1);
    }

    #[test]
    fn live_without_sheet_drops_rules() {
        let doc = MemoryDocument::detached();
        let mut live = LiveSink::new(Box::new(doc.clone()), DEFAULT_SHEET_TAG);
        assert!(!live.insert_rule(RuleLayer::Base, ".a { color: red; }"));
        assert!(live.is_empty());
        assert_eq!(doc.sheet_count(), 0);
    }
}
