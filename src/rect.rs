// Copyright 2026 the Linkpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use std::fmt;
use std::ops::{Add, Sub};

use crate::{Point, Side, Size, Vec2};

/// A rectangle given by minimum and maximum coordinates.
///
/// This is the one rectangle representation in the crate; callers with
/// origin/size geometry convert through [`Rect::from_origin_size`], and
/// all anchor and sector computations read it through the accessor
/// methods.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (bottom edge in y-down spaces).
    pub y1: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect::new(0., 0., 0., 0.);

    /// A new rectangle from minimum and maximum coordinates.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect {
            x0: p0.x,
            y0: p0.y,
            x1: p1.x,
            y1: p1.y,
        }
        .abs()
    }

    /// A new rectangle from origin and size.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Size>) -> Rect {
        let origin = origin.into();
        Rect::from_points(origin, origin + size.into().to_vec2())
    }

    /// The width of the rectangle.
    ///
    /// Note: nothing forbids negative width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    ///
    /// Note: nothing forbids negative height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The origin of the rectangle.
    ///
    /// This is the top left corner in a y-down space and with
    /// non-negative width and height.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// The size of the rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The center point of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpath::Rect;
    /// let rect = Rect::from_origin_size((0.0, 0.0), (10.0, 20.0));
    /// assert_eq!(rect.center(), (5.0, 10.0).into());
    /// ```
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }

    /// Take absolute value of width and height.
    ///
    /// The resulting rect has the same extents as the original, but is
    /// guaranteed to have non-negative width and height.
    #[inline]
    pub fn abs(&self) -> Rect {
        let Rect { x0, y0, x1, y1 } = *self;
        Rect {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// The corner where the given sides meet, with sides taken in
    /// clockwise order.
    ///
    /// Corners are returned clockwise from the top left:
    /// `corner(Side::Top)` is the top-left corner, `corner(Side::Right)`
    /// the top-right, and so on. This is the corner at which the given
    /// side's sector begins.
    #[inline]
    pub fn corner(&self, side: Side) -> Point {
        match side {
            Side::Top => Point::new(self.x0, self.y0),
            Side::Right => Point::new(self.x1, self.y0),
            Side::Bottom => Point::new(self.x1, self.y1),
            Side::Left => Point::new(self.x0, self.y1),
        }
    }

    /// The anchor point on the given edge: the edge midpoint, shifted by
    /// `offset` against the edge's tangent axis.
    ///
    /// For the left and right edges the offset is subtracted from the y
    /// coordinate; for the top and bottom edges it is subtracted from the
    /// x coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpath::{Rect, Side};
    /// let rect = Rect::from_origin_size((0.0, 0.0), (10.0, 20.0));
    /// assert_eq!(rect.anchor(Side::Right, 0.0), (10.0, 10.0).into());
    /// assert_eq!(rect.anchor(Side::Left, 5.0), (0.0, 5.0).into());
    /// ```
    #[inline]
    pub fn anchor(&self, side: Side, offset: f64) -> Point {
        match side {
            Side::Left => Point::new(self.x0, self.y0 + 0.5 * self.height() - offset),
            Side::Right => Point::new(self.x1, self.y0 + 0.5 * self.height() - offset),
            Side::Top => Point::new(self.x0 + 0.5 * self.width() - offset, self.y0),
            Side::Bottom => Point::new(self.x0 + 0.5 * self.width() - offset, self.y1),
        }
    }

    /// The point at a normalized position along the given edge, with the
    /// edge traversed clockwise.
    ///
    /// A ratio of 0 is the corner where the side's sector begins and a
    /// ratio of 1 the corner where it ends, so the top and right edges
    /// apply the ratio directly while the bottom and left edges run
    /// backwards (`1 - ratio`). This is the inverse of the sector ratio
    /// computed by [`SectorBoundaries::ratio`](crate::SectorBoundaries::ratio).
    #[inline]
    pub fn edge_point(&self, side: Side, ratio: f64) -> Point {
        match side {
            Side::Top => Point::new(self.x0 + self.width() * ratio, self.y0),
            Side::Right => Point::new(self.x1, self.y0 + self.height() * ratio),
            Side::Bottom => Point::new(self.x0 + self.width() * (1.0 - ratio), self.y1),
            Side::Left => Point::new(self.x0, self.y0 + self.height() * (1.0 - ratio)),
        }
    }

    /// Is this rectangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }

    /// Is this rectangle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x0.is_nan() || self.y0.is_nan() || self.x1.is_nan() || self.y1.is_nan()
    }
}

impl From<((f64, f64), (f64, f64))> for Rect {
    fn from(coords: ((f64, f64), (f64, f64))) -> Rect {
        let ((x0, y0), (x1, y1)) = coords;
        Rect { x0, y0, x1, y1 }
    }
}

impl From<Rect> for ((f64, f64), (f64, f64)) {
    fn from(r: Rect) -> ((f64, f64), (f64, f64)) {
        ((r.x0, r.y0), (r.x1, r.y1))
    }
}

impl From<(Point, Point)> for Rect {
    fn from(points: (Point, Point)) -> Rect {
        Rect::from_points(points.0, points.1)
    }
}

impl From<(Point, Size)> for Rect {
    fn from(params: (Point, Size)) -> Rect {
        Rect::from_origin_size(params.0, params.1)
    }
}

impl Add<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, v: Vec2) -> Rect {
        Rect {
            x0: self.x0 + v.x,
            y0: self.y0 + v.y,
            x1: self.x1 + v.x,
            y1: self.y1 + v.y,
        }
    }
}

impl Sub<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, v: Vec2) -> Rect {
        Rect {
            x0: self.x0 - v.x,
            y0: self.y0 - v.y,
            x1: self.x1 - v.x,
            y1: self.y1 - v.y,
        }
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect {{ x0: {:?}, y0: {:?}, x1: {:?}, y1: {:?} }}",
            self.x0, self.y0, self.x1, self.y1
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}→{}", self.origin(), Point::new(self.x1, self.y1))
    }
}
