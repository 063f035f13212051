// Copyright 2026 the Linkpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector geometry for diagram editors.
//!
//! The linkpath library contains the small set of pure geometric helpers a
//! diagramming UI needs to route connection paths between rectangular
//! shapes: deriving cubic Bezier control points and emitting path strings,
//! locating anchor points on rectangle edges, and mapping angles around a
//! rectangle's center to directional sectors. Every function is a
//! stateless computation over value types; there is no rendering, no
//! shape graph, and no I/O.
//!
//! # Examples
//!
//! Connect the right edge of one box to the left edge of another:
//! ```
//! use linkpath::{connector_svg, Rect, Side};
//!
//! let source = Rect::from_origin_size((0.0, 0.0), (40.0, 20.0));
//! let target = Rect::from_origin_size((100.0, 50.0), (40.0, 20.0));
//!
//! let start = source.anchor(Side::Right, 0.0);
//! let end = target.anchor(Side::Left, 0.0);
//! let path = connector_svg(start.x, start.y, end.x, end.y);
//! assert_eq!(path, "M 40,10 C 70,10 70,60 100,60");
//! ```
//!
//! Classify which side of a rectangle an angle points at, and map a
//! normalized position back onto that edge:
//! ```
//! use linkpath::{Rect, SectorBoundaries, Side};
//!
//! let rect = Rect::new(-1.0, -1.0, 1.0, 1.0);
//! let sectors = SectorBoundaries::of(&rect);
//! assert_eq!(sectors.side_of(0.0), Side::Right);
//! assert_eq!(rect.edge_point(Side::Right, 0.5), (1.0, 0.0).into());
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the
//!   vocabulary types.
//!
//! Coordinates follow the usual UI convention of y growing downward;
//! angles are measured by `atan2` in that frame, so "top" corresponds to
//! negative angles.

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![allow(clippy::unreadable_literal, clippy::many_single_char_names)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
// Feel free to send a PR that solves one or more of these.
#![allow(
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::missing_panics_doc,
    clippy::exhaustive_enums
)]

mod connector;
mod point;
mod rect;
mod sector;
mod side;
mod size;
mod vec2;

pub use crate::connector::{
    connector_control_points, connector_svg, Connector, ALIGNMENT_THRESHOLD,
};
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::sector::SectorBoundaries;
pub use crate::side::Side;
pub use crate::size::Size;
pub use crate::vec2::Vec2;
