// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory live document.
//!
//! [`MemoryDocument`] implements [`StyleDocument`] without a browser. Clones
//! share the same underlying sheets, so a caller can hand one clone to a
//! registry and inspect the inserted rules through another. Sheets perform a
//! minimal well-formedness check and reject rules with unbalanced braces or
//! no block, standing in for a CSS engine's parser.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::Mutex;

use crate::sink::{CssSheet, RuleRejected, StyleDocument};

#[derive(Debug, Default)]
struct SheetState {
    tag: String,
    rules: Vec<String>,
}

#[derive(Debug, Default)]
struct DocumentState {
    sheets: Vec<SheetState>,
    detached: bool,
}

/// Handle to one sheet of a [`MemoryDocument`].
#[derive(Clone, Debug)]
pub struct MemorySheet {
    state: Arc<Mutex<DocumentState>>,
    index: usize,
}

impl CssSheet for MemorySheet {
    fn rule_count(&self) -> usize {
        self.state.lock().sheets[self.index].rules.len()
    }

    fn rule_text(&self, index: usize) -> Option<String> {
        self.state.lock().sheets[self.index].rules.get(index).cloned()
    }

    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<(), RuleRejected> {
        check_rule(rule).map_err(|reason| RuleRejected {
            rule: rule.into(),
            reason: reason.into(),
        })?;
        let mut state = self.state.lock();
        let rules = &mut state.sheets[self.index].rules;
        if index > rules.len() {
            return Err(RuleRejected {
                rule: rule.into(),
                reason: "index out of bounds".into(),
            });
        }
        rules.insert(index, rule.into());
        Ok(())
    }
}

fn check_rule(rule: &str) -> Result<(), &'static str> {
    let Some(open) = rule.find('{') else {
        return Err("missing declaration block");
    };
    if rule[..open].trim().is_empty() {
        return Err("missing selector");
    }
    let mut depth: usize = 0;
    for ch in rule.chars() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1).ok_or("unexpected `}`")?;
            }
            _ => {}
        }
    }
    if depth != 0 || !rule.trim_end().ends_with('}') {
        return Err("unterminated block");
    }
    Ok(())
}

/// A headless document holding tagged stylesheets in memory.
///
/// # Example
///
/// ```rust
/// use boxify_atomic::{CssSheet, MemoryDocument, StyleDocument};
///
/// let doc = MemoryDocument::new();
/// let mut handle = doc.clone();
/// let sheet = handle.tagged_sheet("data-boxify").unwrap();
/// sheet.insert_rule(".a { color: red; }", 0).unwrap();
/// assert!(sheet.insert_rule(".b { color: red;", 1).is_err());
///
/// assert_eq!(doc.rules("data-boxify"), [".a { color: red; }"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    state: Arc<Mutex<DocumentState>>,
    handles: Vec<MemorySheet>,
}

impl MemoryDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document that never provides a stylesheet.
    #[must_use]
    pub fn detached() -> Self {
        let doc = Self::default();
        doc.state.lock().detached = true;
        doc
    }

    /// Returns the number of sheets created so far.
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.state.lock().sheets.len()
    }

    /// Returns the rules of the sheet tagged `tag`, in sheet order.
    #[must_use]
    pub fn rules(&self, tag: &str) -> Vec<String> {
        self.state
            .lock()
            .sheets
            .iter()
            .find(|s| s.tag == tag)
            .map(|s| s.rules.clone())
            .unwrap_or_default()
    }

    /// Returns the text of the sheet tagged `tag`, one rule per line.
    #[must_use]
    pub fn css_text(&self, tag: &str) -> String {
        self.rules(tag).join("\n")
    }
}

impl StyleDocument for MemoryDocument {
    fn tagged_sheet(&mut self, tag: &str) -> Option<&mut dyn CssSheet> {
        let index = {
            let mut state = self.state.lock();
            if state.detached {
                return None;
            }
            match state.sheets.iter().position(|s| s.tag == tag) {
                Some(index) => index,
                None => {
                    state.sheets.push(SheetState {
                        tag: tag.into(),
                        rules: Vec::new(),
                    });
                    state.sheets.len() - 1
                }
            }
        };
        let pos = match self.handles.iter().position(|h| h.index == index) {
            Some(pos) => pos,
            None => {
                self.handles.push(MemorySheet {
                    state: Arc::clone(&self.state),
                    index,
                });
                self.handles.len() - 1
            }
        };
        Some(&mut self.handles[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheets_are_created_once_per_tag() {
        let mut doc = MemoryDocument::new();
        doc.tagged_sheet("a").unwrap();
        doc.tagged_sheet("a").unwrap();
        doc.tagged_sheet("b").unwrap();
        assert_eq!(doc.sheet_count(), 2);
    }

    #[test]
    fn clones_share_sheets() {
        let doc = MemoryDocument::new();
        let mut writer = doc.clone();
        let mut other = doc.clone();
        writer
            .tagged_sheet("t")
            .unwrap()
            .insert_rule(".a { gap: 0; }", 0)
            .unwrap();
        let sheet = other.tagged_sheet("t").unwrap();
        assert_eq!(sheet.rule_count(), 1);
        assert_eq!(doc.sheet_count(), 1);
    }

    #[test]
    fn malformed_rules_are_rejected() {
        assert!(check_rule(".a { color: red; }").is_ok());
        assert!(check_rule("@media (min-width: 768px) { .a { color: red; } }").is_ok());
        assert!(check_rule("color: red;").is_err());
        assert!(check_rule("{ color: red; }").is_err());
        assert!(check_rule(".a { color: red; }}").is_err());
        assert!(check_rule("@media (min-width: 1px) { .a { color: red; }").is_err());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut doc = MemoryDocument::new();
        let sheet = doc.tagged_sheet("t").unwrap();
        let err = sheet.insert_rule(".a { gap: 0; }", 3).unwrap_err();
        assert_eq!(err.reason, "index out of bounds");
    }

    #[test]
    fn detached_documents_have_no_sheets() {
        let mut doc = MemoryDocument::detached();
        assert!(doc.tagged_sheet("t").is_none());
        assert!(doc.rules("t").is_empty());
    }
}
