// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of style properties understood by the atomic pipeline.
//!
//! Every [`StyleProperty`] is either [`AtomicKind::Static`] (the value is
//! baked into its cached rule) or [`AtomicKind::Dynamic`] (the rule reads a
//! CSS custom property and the value travels as an inline variable).

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// How a property participates in atomic rule generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AtomicKind {
    /// One rule per `(property, value)`, with the value inlined.
    Static,
    /// One rule per property, reading `var(--bx-<property>)`.
    Dynamic,
}

/// A supported style property.
///
/// Properties are identified on the input side by their camelCase key
/// (`backgroundColor`) and rendered into rules by their CSS name
/// (`background-color`).
///
/// # Example
///
/// ```rust
/// use boxify_atomic::{AtomicKind, StyleProperty};
///
/// let prop: StyleProperty = "backgroundColor".parse().unwrap();
/// assert_eq!(prop, StyleProperty::BackgroundColor);
/// assert_eq!(prop.css_name(), "background-color");
/// assert_eq!(prop.kind(), AtomicKind::Static);
/// assert_eq!(StyleProperty::MinWidth.kind(), AtomicKind::Dynamic);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[expect(missing_docs, reason = "variants mirror their CSS property names")]
pub enum StyleProperty {
    // Display and positioning
    Display,
    Position,
    Top,
    Right,
    Bottom,
    Left,
    ZIndex,

    // Sizing
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,

    // Spacing
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,

    // Border
    Border,
    BorderRadius,
    BorderColor,
    BorderStyle,
    BorderWidth,

    // Background
    BackgroundColor,
    BackgroundImage,

    // Typography
    FontSize,
    FontWeight,
    TextAlign,
    Color,
    LineHeight,
    LetterSpacing,
    TextDecoration,
    TextTransform,
    FontFamily,
    FontStyle,
    WhiteSpace,
    TextOverflow,

    // Flexbox
    FlexDirection,
    JustifyContent,
    AlignItems,
    FlexWrap,
    Flex,

    // Grid
    GridTemplateColumns,
    GridTemplateRows,
    GridTemplateAreas,
    GridArea,
    GridColumn,
    GridRow,
    GridColumnStart,
    GridColumnEnd,
    GridRowStart,
    GridRowEnd,
    GridAutoFlow,
    GridAutoColumns,
    GridAutoRows,
    Gap,

    // Effects
    Transform,
    Transition,
    Overflow,
    OverflowX,
    OverflowY,
    BoxShadow,
    Cursor,
}

impl StyleProperty {
    /// Every supported property, in declaration order.
    pub const ALL: [Self; 68] = [
        Self::Display,
        Self::Position,
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::ZIndex,
        Self::Width,
        Self::Height,
        Self::MinWidth,
        Self::MinHeight,
        Self::MaxWidth,
        Self::MaxHeight,
        Self::Margin,
        Self::MarginTop,
        Self::MarginRight,
        Self::MarginBottom,
        Self::MarginLeft,
        Self::Padding,
        Self::PaddingTop,
        Self::PaddingRight,
        Self::PaddingBottom,
        Self::PaddingLeft,
        Self::Border,
        Self::BorderRadius,
        Self::BorderColor,
        Self::BorderStyle,
        Self::BorderWidth,
        Self::BackgroundColor,
        Self::BackgroundImage,
        Self::FontSize,
        Self::FontWeight,
        Self::TextAlign,
        Self::Color,
        Self::LineHeight,
        Self::LetterSpacing,
        Self::TextDecoration,
        Self::TextTransform,
        Self::FontFamily,
        Self::FontStyle,
        Self::WhiteSpace,
        Self::TextOverflow,
        Self::FlexDirection,
        Self::JustifyContent,
        Self::AlignItems,
        Self::FlexWrap,
        Self::Flex,
        Self::GridTemplateColumns,
        Self::GridTemplateRows,
        Self::GridTemplateAreas,
        Self::GridArea,
        Self::GridColumn,
        Self::GridRow,
        Self::GridColumnStart,
        Self::GridColumnEnd,
        Self::GridRowStart,
        Self::GridRowEnd,
        Self::GridAutoFlow,
        Self::GridAutoColumns,
        Self::GridAutoRows,
        Self::Gap,
        Self::Transform,
        Self::Transition,
        Self::Overflow,
        Self::OverflowX,
        Self::OverflowY,
        Self::BoxShadow,
        Self::Cursor,
    ];

    /// The six properties whose rules read a CSS variable.
    pub const DYNAMIC: [Self; 6] = [
        Self::Width,
        Self::Height,
        Self::MinWidth,
        Self::MinHeight,
        Self::MaxWidth,
        Self::MaxHeight,
    ];

    /// Returns how this property is turned into atomic rules.
    #[must_use]
    pub const fn kind(self) -> AtomicKind {
        match self {
            Self::Width
            | Self::Height
            | Self::MinWidth
            | Self::MinHeight
            | Self::MaxWidth
            | Self::MaxHeight => AtomicKind::Dynamic,
            _ => AtomicKind::Static,
        }
    }

    /// Returns `true` for properties carried through a CSS variable.
    #[must_use]
    #[inline]
    pub const fn is_dynamic(self) -> bool {
        matches!(self.kind(), AtomicKind::Dynamic)
    }

    /// Looks up a property by its camelCase key.
    ///
    /// Returns `None` for anything outside the supported set; callers treat
    /// such keys as pass-through.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// The camelCase key, as used in property bags and hash input.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Position => "position",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::ZIndex => "zIndex",
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "minWidth",
            Self::MinHeight => "minHeight",
            Self::MaxWidth => "maxWidth",
            Self::MaxHeight => "maxHeight",
            Self::Margin => "margin",
            Self::MarginTop => "marginTop",
            Self::MarginRight => "marginRight",
            Self::MarginBottom => "marginBottom",
            Self::MarginLeft => "marginLeft",
            Self::Padding => "padding",
            Self::PaddingTop => "paddingTop",
            Self::PaddingRight => "paddingRight",
            Self::PaddingBottom => "paddingBottom",
            Self::PaddingLeft => "paddingLeft",
            Self::Border => "border",
            Self::BorderRadius => "borderRadius",
            Self::BorderColor => "borderColor",
            Self::BorderStyle => "borderStyle",
            Self::BorderWidth => "borderWidth",
            Self::BackgroundColor => "backgroundColor",
            Self::BackgroundImage => "backgroundImage",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::TextAlign => "textAlign",
            Self::Color => "color",
            Self::LineHeight => "lineHeight",
            Self::LetterSpacing => "letterSpacing",
            Self::TextDecoration => "textDecoration",
            Self::TextTransform => "textTransform",
            Self::FontFamily => "fontFamily",
            Self::FontStyle => "fontStyle",
            Self::WhiteSpace => "whiteSpace",
            Self::TextOverflow => "textOverflow",
            Self::FlexDirection => "flexDirection",
            Self::JustifyContent => "justifyContent",
            Self::AlignItems => "alignItems",
            Self::FlexWrap => "flexWrap",
            Self::Flex => "flex",
            Self::GridTemplateColumns => "gridTemplateColumns",
            Self::GridTemplateRows => "gridTemplateRows",
            Self::GridTemplateAreas => "gridTemplateAreas",
            Self::GridArea => "gridArea",
            Self::GridColumn => "gridColumn",
            Self::GridRow => "gridRow",
            Self::GridColumnStart => "gridColumnStart",
            Self::GridColumnEnd => "gridColumnEnd",
            Self::GridRowStart => "gridRowStart",
            Self::GridRowEnd => "gridRowEnd",
            Self::GridAutoFlow => "gridAutoFlow",
            Self::GridAutoColumns => "gridAutoColumns",
            Self::GridAutoRows => "gridAutoRows",
            Self::Gap => "gap",
            Self::Transform => "transform",
            Self::Transition => "transition",
            Self::Overflow => "overflow",
            Self::OverflowX => "overflowX",
            Self::OverflowY => "overflowY",
            Self::BoxShadow => "boxShadow",
            Self::Cursor => "cursor",
        }
    }

    /// The CSS property name written into rule bodies.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Position => "position",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::ZIndex => "z-index",
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "min-width",
            Self::MinHeight => "min-height",
            Self::MaxWidth => "max-width",
            Self::MaxHeight => "max-height",
            Self::Margin => "margin",
            Self::MarginTop => "margin-top",
            Self::MarginRight => "margin-right",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::Padding => "padding",
            Self::PaddingTop => "padding-top",
            Self::PaddingRight => "padding-right",
            Self::PaddingBottom => "padding-bottom",
            Self::PaddingLeft => "padding-left",
            Self::Border => "border",
            Self::BorderRadius => "border-radius",
            Self::BorderColor => "border-color",
            Self::BorderStyle => "border-style",
            Self::BorderWidth => "border-width",
            Self::BackgroundColor => "background-color",
            Self::BackgroundImage => "background-image",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::TextAlign => "text-align",
            Self::Color => "color",
            Self::LineHeight => "line-height",
            Self::LetterSpacing => "letter-spacing",
            Self::TextDecoration => "text-decoration",
            Self::TextTransform => "text-transform",
            Self::FontFamily => "font-family",
            Self::FontStyle => "font-style",
            Self::WhiteSpace => "white-space",
            Self::TextOverflow => "text-overflow",
            Self::FlexDirection => "flex-direction",
            Self::JustifyContent => "justify-content",
            Self::AlignItems => "align-items",
            Self::FlexWrap => "flex-wrap",
            Self::Flex => "flex",
            Self::GridTemplateColumns => "grid-template-columns",
            Self::GridTemplateRows => "grid-template-rows",
            Self::GridTemplateAreas => "grid-template-areas",
            Self::GridArea => "grid-area",
            Self::GridColumn => "grid-column",
            Self::GridRow => "grid-row",
            Self::GridColumnStart => "grid-column-start",
            Self::GridColumnEnd => "grid-column-end",
            Self::GridRowStart => "grid-row-start",
            Self::GridRowEnd => "grid-row-end",
            Self::GridAutoFlow => "grid-auto-flow",
            Self::GridAutoColumns => "grid-auto-columns",
            Self::GridAutoRows => "grid-auto-rows",
            Self::Gap => "gap",
            Self::Transform => "transform",
            Self::Transition => "transition",
            Self::Overflow => "overflow",
            Self::OverflowX => "overflow-x",
            Self::OverflowY => "overflow-y",
            Self::BoxShadow => "box-shadow",
            Self::Cursor => "cursor",
        }
    }

    /// The class-name fragment: camelCase boundaries become `_` + lowercase.
    ///
    /// `backgroundColor` becomes `background_color`.
    #[must_use]
    pub fn class_fragment(self) -> String {
        let name = self.name();
        let mut out = String::with_capacity(name.len() + 4);
        for ch in name.chars() {
            if ch.is_ascii_uppercase() {
                out.push('_');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// The custom property a dynamic rule reads, e.g. `--bx-min-width`.
    #[must_use]
    pub fn variable_name(self) -> String {
        let mut out = String::from("--bx-");
        out.push_str(self.css_name());
        out
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a name outside the supported property set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownProperty {
    /// The rejected name.
    pub name: String,
}

impl fmt::Display for UnknownProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a supported style property", self.name)
    }
}

impl core::error::Error for UnknownProperty {}

impl FromStr for StyleProperty {
    type Err = UnknownProperty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownProperty { name: s.into() })
    }
}
