// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive breakpoints and their width thresholds.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// A named viewport-width tier.
///
/// Breakpoints are ordered `Mobile < Tablet < Desktop`. Mobile is the
/// unconditioned base; the others are gated behind `min-width` queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// The base tier. Never gated by a media query.
    Mobile,
    /// Medium viewports.
    Tablet,
    /// Wide viewports.
    Desktop,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// The lowercase name used in class suffixes and property bags.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Looks up a breakpoint by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }

    /// Returns `true` if rules for this tier need a `min-width` gate.
    #[must_use]
    #[inline]
    pub const fn is_gated(self) -> bool {
        !matches!(self, Self::Mobile)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown breakpoint name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownBreakpoint {
    /// The rejected name.
    pub name: String,
}

impl fmt::Display for UnknownBreakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a breakpoint", self.name)
    }
}

impl core::error::Error for UnknownBreakpoint {}

impl FromStr for Breakpoint {
    type Err = UnknownBreakpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownBreakpoint { name: s.into() })
    }
}

/// Error returned when breakpoint thresholds are not strictly increasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakpointsError {
    /// The tier whose threshold is out of order.
    pub breakpoint: Breakpoint,
    /// Its threshold in pixels.
    pub min_width: u32,
    /// The threshold of the tier immediately below it.
    pub previous: u32,
}

impl fmt::Display for BreakpointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} threshold {}px must be greater than the previous threshold {}px",
            self.breakpoint, self.min_width, self.previous
        )
    }
}

impl core::error::Error for BreakpointsError {}

/// Minimum-width thresholds (in pixels) per breakpoint.
///
/// The default table is `mobile: 0, tablet: 768, desktop: 1024`.
///
/// # Example
///
/// ```rust
/// use boxify_atomic::{Breakpoint, Breakpoints};
///
/// let table = Breakpoints::default();
/// assert_eq!(table.min_width(Breakpoint::Tablet), 768);
/// assert_eq!(table.resolve(800), Breakpoint::Tablet);
///
/// let custom = Breakpoints::new(0, 600, 1200).unwrap();
/// assert_eq!(custom.resolve(1199), Breakpoint::Tablet);
///
/// assert!(Breakpoints::new(0, 900, 800).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Breakpoints {
    thresholds: [u32; 3],
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            thresholds: [0, 768, 1024],
        }
    }
}

impl Breakpoints {
    /// Creates a threshold table, validating that it is strictly increasing.
    pub fn new(mobile: u32, tablet: u32, desktop: u32) -> Result<Self, BreakpointsError> {
        let thresholds = [mobile, tablet, desktop];
        for bp in [Breakpoint::Tablet, Breakpoint::Desktop] {
            let min_width = thresholds[bp.index()];
            let previous = thresholds[bp.index() - 1];
            if min_width <= previous {
                return Err(BreakpointsError {
                    breakpoint: bp,
                    min_width,
                    previous,
                });
            }
        }
        Ok(Self { thresholds })
    }

    /// Returns the configured minimum width of a breakpoint.
    #[must_use]
    #[inline]
    pub fn min_width(&self, breakpoint: Breakpoint) -> u32 {
        self.thresholds[breakpoint.index()]
    }

    /// Maps an externally observed viewport width to its breakpoint.
    #[must_use]
    pub fn resolve(&self, viewport_width: u32) -> Breakpoint {
        Breakpoint::ALL
            .iter()
            .rev()
            .copied()
            .find(|&bp| viewport_width >= self.min_width(bp))
            .unwrap_or(Breakpoint::Mobile)
    }

    /// Returns every breakpoint whose gate is open at `viewport_width`, in
    /// ascending order.
    pub fn active(&self, viewport_width: u32) -> impl Iterator<Item = Breakpoint> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter(move |&bp| !bp.is_gated() || viewport_width >= self.min_width(bp))
    }
}
