// Copyright 2026 the Linkpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bezier connectors between anchor points.

use std::fmt::Write;

use crate::Point;

/// Distance, in coordinate units, under which two endpoints count as
/// aligned on an axis.
///
/// When the endpoints of a connector are within this distance of each
/// other horizontally or vertically, the default S-shaped control points
/// would collapse toward a straight line; [`connector_control_points`]
/// switches to bowed placements instead.
pub const ALIGNMENT_THRESHOLD: f64 = 5.0;

/// Derive the two control points of a smooth connector between two
/// endpoints.
///
/// By default the first control point sits horizontally halfway between
/// the endpoints at the first endpoint's height, and the second shares
/// its x at the second endpoint's height, giving a horizontal-then-
/// vertical S shape.
///
/// Two near-alignment adjustments apply, in order, and can compound:
///
/// - endpoints within [`ALIGNMENT_THRESHOLD`] horizontally: both control
///   points move to `x0 + (y3 - y0) / 2`, bowing the curve sideways
///   instead of degenerating into a vertical line;
/// - endpoints within [`ALIGNMENT_THRESHOLD`] vertically: the control
///   points move to the endpoints' x coordinates, both lifted to
///   `y0 - (x3 - x0) / 2`, bowing the curve upward.
///
/// The computation is total: coincident endpoints yield a degenerate but
/// well-defined zero-length curve.
pub fn connector_control_points(p0: Point, p3: Point) -> (Point, Point) {
    let mut cx1 = p0.x + 0.5 * (p3.x - p0.x);
    let mut cy1 = p0.y;
    let mut cx2 = cx1;
    let mut cy2 = p3.y;
    if (p0.x - p3.x).abs() <= ALIGNMENT_THRESHOLD {
        cx1 = p0.x + 0.5 * (p3.y - p0.y);
        cx2 = cx1;
    }
    if (p0.y - p3.y).abs() <= ALIGNMENT_THRESHOLD {
        cx1 = p0.x;
        cy1 = p0.y - 0.5 * (p3.x - p0.x);
        cx2 = p3.x;
        cy2 = cy1;
    }
    (Point::new(cx1, cy1), Point::new(cx2, cy2))
}

/// A cubic Bezier connector.
///
/// `p0` and `p3` are the endpoints, `p1` and `p2` the control points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connector {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl Connector {
    /// Create a new connector from its endpoints and control points.
    #[inline]
    pub fn new(
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
    ) -> Connector {
        Connector {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Create a connector between two endpoints, deriving the control
    /// points with [`connector_control_points`].
    #[inline]
    pub fn between(p0: impl Into<Point>, p3: impl Into<Point>) -> Connector {
        let p0 = p0.into();
        let p3 = p3.into();
        let (p1, p2) = connector_control_points(p0, p3);
        Connector { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter `t`, with 0 at the start point
    /// and 1 at the end point.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    /// Convert the connector to an SVG path string.
    ///
    /// The format is exactly `M x,y C x,y x,y x,y`: a move-to followed by
    /// one cubic curve-to, coordinates comma-joined within a point and
    /// space-separated between points, in the default floating point
    /// formatting. No effort is made to shorten the output.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpath::Connector;
    /// let c = Connector::new((0.0, 0.0), (50.0, 0.0), (50.0, 50.0), (100.0, 50.0));
    /// assert_eq!(c.to_svg(), "M 0,0 C 50,0 50,50 100,50");
    /// ```
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        write!(result, "M {},{}", self.p0.x, self.p0.y).unwrap();
        write!(
            result,
            " C {},{} {},{} {},{}",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y
        )
        .unwrap();
        result
    }
}

/// Compute the SVG path string of a connector between two endpoints.
///
/// This is the one-call entry point for curve rendering, composing
/// [`connector_control_points`] and [`Connector::to_svg`].
///
/// # Examples
///
/// ```
/// use linkpath::connector_svg;
/// assert_eq!(connector_svg(0.0, 0.0, 100.0, 50.0), "M 0,0 C 50,0 50,50 100,50");
/// ```
pub fn connector_svg(x0: f64, y0: f64, x3: f64, y3: f64) -> String {
    Connector::between((x0, y0), (x3, y3)).to_svg()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_control_points() {
        let (c1, c2) = connector_control_points(Point::new(0., 0.), Point::new(100., 50.));
        assert_eq!(c1, Point::new(50., 0.));
        assert_eq!(c2, Point::new(50., 50.));
        // The midpoint x is shared whatever the endpoint order.
        let (c1, c2) = connector_control_points(Point::new(100., 50.), Point::new(0., 0.));
        assert_eq!(c1, Point::new(50., 50.));
        assert_eq!(c2, Point::new(50., 0.));
    }

    #[test]
    fn near_vertical_bows_sideways() {
        let (c1, c2) = connector_control_points(Point::new(0., 0.), Point::new(2., 100.));
        assert_eq!(c1, Point::new(50., 0.));
        assert_eq!(c2, Point::new(50., 100.));
    }

    #[test]
    fn near_horizontal_bows_upward() {
        let (c1, c2) = connector_control_points(Point::new(0., 0.), Point::new(10., 0.));
        assert_eq!(c1, Point::new(0., -5.));
        assert_eq!(c2, Point::new(10., -5.));
    }

    #[test]
    fn alignment_adjustments_compound() {
        // Both spans within the threshold: the vertical adjustment is
        // applied first, then overridden by the horizontal one.
        let (c1, c2) = connector_control_points(Point::new(0., 0.), Point::new(2., 3.));
        assert_eq!(c1, Point::new(0., -1.));
        assert_eq!(c2, Point::new(2., -1.));
    }

    #[test]
    fn coincident_endpoints_are_degenerate() {
        let c = Connector::between((7., 7.), (7., 7.));
        assert_eq!(c.eval(0.5), Point::new(7., 7.));
        assert_eq!(c.to_svg(), "M 7,7 C 7,7 7,7 7,7");
    }

    #[test]
    fn svg_format() {
        assert_eq!(connector_svg(0., 0., 100., 50.), "M 0,0 C 50,0 50,50 100,50");
        // Near-horizontal endpoints take the bowed branch.
        assert_eq!(connector_svg(0., 0., 10., 0.), "M 0,0 C 0,-5 10,-5 10,0");
        // Full floating point precision is preserved.
        assert_eq!(
            connector_svg(0.5, 0.25, 100.5, 50.25),
            "M 0.5,0.25 C 50.5,0.25 50.5,50.25 100.5,50.25"
        );
    }

    #[test]
    fn eval_endpoints_and_symmetry() {
        let c = Connector::between((0., 0.), (100., 50.));
        assert_eq!(c.eval(0.), Point::new(0., 0.));
        assert_eq!(c.eval(1.), Point::new(100., 50.));
        let mid = c.eval(0.5);
        assert!((mid.x - 50.).abs() < 1e-12);
        assert!((mid.y - 25.).abs() < 1e-12);
    }
}
