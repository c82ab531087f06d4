//! Liang-Barsky line clipping against an axis-aligned window.
//!
//! The segment is treated parametrically, `P(t) = p1 + t (p2 - p1)` for
//! `t in [0, 1]`. Each window edge contributes one `(p, q)` constraint; edges
//! the segment enters through raise `t0`, edges it leaves through lower `t1`.
//! The visible part is `[t0, t1]`, empty when `t0 > t1`.
//!
//! # References
//!
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line
//!   clipping." *ACM Transactions on Graphics*, 3(1), 1-22.

use crate::config::KernelConfig;
use crate::geometry::{ClipWindow, PointF, Segment};

/// The visible part of a clipped segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedSegment {
    /// Visible sub-segment, `P(t0) -> P(t1)`.
    pub segment: Segment,
    /// Parameter where the visible part begins.
    pub t0: f64,
    /// Parameter where the visible part ends.
    pub t1: f64,
}

/// Outcome of clipping a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipResult {
    /// No part of the segment lies inside the window.
    Rejected,
    /// Some part, possibly all, is inside.
    Visible(ClippedSegment),
}

impl ClipResult {
    /// True if nothing is visible.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// The visible part, if any.
    #[must_use]
    pub const fn visible(&self) -> Option<&ClippedSegment> {
        match self {
            Self::Rejected => None,
            Self::Visible(clipped) => Some(clipped),
        }
    }

    /// Entry and exit points of the visible part, if any.
    #[must_use]
    pub fn endpoints(&self) -> Option<(PointF, PointF)> {
        self.visible().map(|c| (c.segment.p1, c.segment.p2))
    }
}

/// Clip `segment` against `window` with the default parallel tolerance.
#[must_use]
pub fn clip(segment: Segment, window: &ClipWindow) -> ClipResult {
    clip_with(segment, window, &KernelConfig::default())
}

/// Clip `segment` against `window`.
///
/// A constraint with `p == 0` or `|p| < config.clip_epsilon` means the
/// segment runs parallel to that edge: it is rejected outright if it lies on
/// the outside (`q < 0`) and the edge is otherwise ignored. Exact zero is
/// always parallel, so `-0.0` never reaches the division.
#[must_use]
pub fn clip_with(segment: Segment, window: &ClipWindow, config: &KernelConfig) -> ClipResult {
    let (dx, dy) = segment.delta();
    let PointF { x: x1, y: y1 } = segment.p1;

    let constraints = [
        (-dx, x1 - window.xmin()), // left
        (dx, window.xmax() - x1),  // right
        (-dy, y1 - window.ymin()), // bottom
        (dy, window.ymax() - y1),  // top
    ];

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in constraints {
        if p == 0.0 || p.abs() < config.clip_epsilon {
            if q < 0.0 {
                log::trace!("clip: {segment:?} parallel and outside an edge");
                return ClipResult::Rejected;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
        }
    }

    if t0 > t1 {
        log::trace!("clip: {segment:?} empty interval [{t0}, {t1}]");
        return ClipResult::Rejected;
    }

    ClipResult::Visible(ClippedSegment {
        segment: Segment::new(segment.point_at(t0), segment.point_at(t1)),
        t0,
        t1,
    })
}
