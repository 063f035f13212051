// Copyright 2026 the Linkpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular sectors around a rectangle's center.
//!
//! Seen from the center of a rectangle, the four corners split the full
//! circle into four sectors, one per side. [`SectorBoundaries`] captures
//! the corner angles and classifies arbitrary angles into sides, which is
//! how a diagramming UI decides which edge of a shape a connector should
//! attach to.

use crate::{Rect, Side};

/// The four corner angles of a rectangle, in degrees, as seen from its
/// center.
///
/// The angles are ordered clockwise starting from the top-left corner
/// (top-left, top-right, bottom-right, bottom-left) and lie in
/// [-180, 180], the range of `atan2`. Consecutive entries bound one
/// side's sector: `[b0, b1)` is the top sector, `[b1, b2)` the right,
/// `[b2, b3)` the bottom, and everything else the left sector, which
/// wraps around the ±180° seam.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorBoundaries([f64; 4]);

impl SectorBoundaries {
    /// Compute the corner angles of a rectangle.
    ///
    /// # Examples
    ///
    /// For a square centered at the origin the corners are 90° apart:
    /// ```
    /// use linkpath::{Rect, SectorBoundaries};
    /// let square = Rect::new(-1.0, -1.0, 1.0, 1.0);
    /// let sectors = SectorBoundaries::of(&square);
    /// assert_eq!(sectors.as_degrees(), [-135.0, -45.0, 45.0, 135.0]);
    /// ```
    pub fn of(rect: &Rect) -> SectorBoundaries {
        let center = rect.center();
        let degrees =
            Side::ALL.map(|side| (rect.corner(side) - center).atan2().to_degrees());
        SectorBoundaries(degrees)
    }

    /// Create boundaries directly from four corner angles in degrees,
    /// ordered clockwise from the top-left corner.
    #[inline]
    pub const fn from_degrees(degrees: [f64; 4]) -> SectorBoundaries {
        SectorBoundaries(degrees)
    }

    /// The corner angles in degrees, clockwise from the top-left corner.
    #[inline]
    pub const fn as_degrees(&self) -> [f64; 4] {
        self.0
    }

    /// Classify an angle (in degrees) into the side whose sector
    /// contains it.
    ///
    /// Each sector is half-open at its clockwise end; angles outside the
    /// top/right/bottom sectors, including both ends of the ±180° seam,
    /// fall into the left sector.
    pub fn side_of(&self, deg: f64) -> Side {
        let [b0, b1, b2, b3] = self.0;
        if deg >= b0 && deg < b1 {
            Side::Top
        } else if deg >= b1 && deg < b2 {
            Side::Right
        } else if deg >= b2 && deg < b3 {
            Side::Bottom
        } else {
            Side::Left
        }
    }

    /// The normalized position of an angle within the given side's
    /// sector, 0 at the sector's opening corner and approaching 1 at its
    /// closing corner.
    ///
    /// The caller supplies a side already classified by
    /// [`side_of`](Self::side_of). The top, right and bottom sectors are
    /// a plain linear interpolation between their boundary angles. The
    /// left sector straddles the ±180° discontinuity, so its span is
    /// `(180 - b3) + (180 + b0)` and the offset is unwrapped on the
    /// negative half before normalizing.
    ///
    /// A rectangle with zero width or height produces a zero-span sector;
    /// the division is not guarded, so the result propagates NaN or
    /// infinity in that case.
    pub fn ratio(&self, deg: f64, side: Side) -> f64 {
        let [b0, b1, b2, b3] = self.0;
        match side {
            Side::Top => (deg - b0) / (b1 - b0),
            Side::Right => (deg - b1) / (b2 - b1),
            Side::Bottom => (deg - b2) / (b3 - b2),
            Side::Left => {
                let span = 180.0 - b3 + (180.0 + b0);
                let offset = if deg > 0.0 {
                    deg - b3
                } else {
                    180.0 + deg + 180.0 - b3
                };
                offset / span
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use rand::Rng;

    /// The angle, in degrees, from the rectangle's center to a point.
    fn deg_to(rect: &Rect, pt: Point) -> f64 {
        (pt - rect.center()).atan2().to_degrees()
    }

    #[test]
    fn square_boundaries_are_uniform() {
        let sectors = SectorBoundaries::of(&Rect::new(-1., -1., 1., 1.));
        let [b0, b1, b2, b3] = sectors.as_degrees();
        assert_eq!(b0, -135.);
        assert_eq!(b1 - b0, 90.);
        assert_eq!(b2 - b1, 90.);
        assert_eq!(b3 - b2, 90.);
    }

    #[test]
    fn boundaries_follow_translation() {
        let at_origin = SectorBoundaries::of(&Rect::new(-2., -1., 2., 1.));
        let translated = SectorBoundaries::of(&Rect::new(98., 199., 102., 201.));
        let a = at_origin.as_degrees();
        let b = translated.as_degrees();
        for i in 0..4 {
            assert!((a[i] - b[i]).abs() < 1e-9, "boundary {i} moved");
        }
    }

    #[test]
    fn side_classification() {
        let sectors = SectorBoundaries::from_degrees([-135., -45., 45., 135.]);
        assert_eq!(sectors.side_of(-90.), Side::Top);
        assert_eq!(sectors.side_of(-135.), Side::Top);
        assert_eq!(sectors.side_of(0.), Side::Right);
        assert_eq!(sectors.side_of(-45.), Side::Right);
        assert_eq!(sectors.side_of(90.), Side::Bottom);
        assert_eq!(sectors.side_of(180.), Side::Left);
        assert_eq!(sectors.side_of(-180.), Side::Left);
        assert_eq!(sectors.side_of(150.), Side::Left);
        assert_eq!(sectors.side_of(-150.), Side::Left);
    }

    #[test]
    fn ratio_interpolates_sectors() {
        let sectors = SectorBoundaries::from_degrees([-135., -45., 45., 135.]);
        assert_eq!(sectors.ratio(-135., Side::Top), 0.);
        assert_eq!(sectors.ratio(-90., Side::Top), 0.5);
        assert_eq!(sectors.ratio(0., Side::Right), 0.5);
        assert_eq!(sectors.ratio(90., Side::Bottom), 0.5);
    }

    #[test]
    fn left_ratio_crosses_seam() {
        let sectors = SectorBoundaries::from_degrees([-135., -45., 45., 135.]);
        // Both representations of the seam angle sit mid-sector.
        assert_eq!(sectors.ratio(180., Side::Left), 0.5);
        assert_eq!(sectors.ratio(-180., Side::Left), 0.5);
        assert_eq!(sectors.ratio(135., Side::Left), 0.);
        assert!((sectors.ratio(150., Side::Left) - 1. / 6.).abs() < 1e-12);
        assert!((sectors.ratio(-150., Side::Left) - 5. / 6.).abs() < 1e-12);
    }

    #[test]
    fn edge_point_round_trips_through_side_of() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let x0 = rng.random_range(-100.0..100.0);
            let y0 = rng.random_range(-100.0..100.0);
            let width = rng.random_range(1.0..200.0);
            let height = rng.random_range(1.0..200.0);
            let rect = Rect::from_origin_size((x0, y0), (width, height));
            let sectors = SectorBoundaries::of(&rect);
            for side in Side::ALL {
                // Stay off the corners, where sectors touch.
                let ratio = rng.random_range(0.05..0.95);
                let pt = rect.edge_point(side, ratio);
                let deg = deg_to(&rect, pt);
                assert_eq!(
                    sectors.side_of(deg),
                    side,
                    "rect {rect:?} side {side} ratio {ratio}"
                );
                let r = sectors.ratio(deg, side);
                assert!((0.0..=1.0).contains(&r), "ratio {r} out of range");
            }
        }
    }

    #[test]
    fn zero_size_rect_propagates_nan() {
        let sectors = SectorBoundaries::of(&Rect::new(3., 3., 3., 3.));
        assert!(sectors.ratio(0., Side::Top).is_nan());
    }
}
