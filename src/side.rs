// Copyright 2026 the Linkpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four sides of a rectangle.

use std::fmt;

/// A side of a rectangle.
///
/// Sides are named in a y-down coordinate space, so [`Side::Top`] is the
/// edge with the smallest y coordinate. The enum is exhaustive on purpose:
/// anchor and sector lookups match on it, so an unsupported direction is
/// unrepresentable rather than silently mapped to "no anchor". Callers
/// holding a direction as a string go through [`Side::from_name`], which
/// is where an unrecognized name becomes an absent value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The top edge (minimum y).
    Top,
    /// The right edge (maximum x).
    Right,
    /// The bottom edge (maximum y).
    Bottom,
    /// The left edge (minimum x).
    Left,
}

impl Side {
    /// All four sides, in clockwise order starting from the top.
    ///
    /// This matches the corner traversal order used by
    /// [`SectorBoundaries`](crate::SectorBoundaries).
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Get the side opposite to this one.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Look up a side by its lowercase name.
    ///
    /// Returns `None` for anything other than `"top"`, `"right"`,
    /// `"bottom"` or `"left"`; callers must treat that as "no anchor
    /// available".
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpath::Side;
    /// assert_eq!(Side::from_name("left"), Some(Side::Left));
    /// assert_eq!(Side::from_name("diagonal"), None);
    /// ```
    #[inline]
    pub fn from_name(name: &str) -> Option<Side> {
        match name {
            "top" => Some(Side::Top),
            "right" => Some(Side::Right),
            "bottom" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            _ => None,
        }
    }

    /// The lowercase name of this side.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
