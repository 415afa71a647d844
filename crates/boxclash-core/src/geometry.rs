//! Axis-aligned collision helpers.
//!
//! Overlap is tested on AABBs; separation happens along the axis of least
//! penetration. Multiple overlaps are resolved one at a time by the caller.

use serde::{Deserialize, Serialize};

use crate::types::{Position, Rect};

/// Collision axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Overlap depth along the axis that needs the least displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub axis: Axis,
    pub depth: f64,
}

/// Compute the minimum-penetration axis of two overlapping rectangles.
///
/// Returns `None` when the rectangles do not overlap. Ties go to the Y axis.
pub fn penetration(a: &Rect, b: &Rect) -> Option<Penetration> {
    if !a.overlaps(b) {
        return None;
    }

    let ca = a.center();
    let cb = b.center();
    let pen_x = (a.width / 2.0 + b.width / 2.0) - (ca.x - cb.x).abs();
    let pen_y = (a.height / 2.0 + b.height / 2.0) - (ca.y - cb.y).abs();

    Some(if pen_x < pen_y {
        Penetration {
            axis: Axis::X,
            depth: pen_x,
        }
    } else {
        Penetration {
            axis: Axis::Y,
            depth: pen_y,
        }
    })
}

/// Top-left position that places `mover` flush against the near edge of the
/// static rectangle `fixed` along `axis`.
pub fn push_out(mover: &Rect, fixed: &Rect, axis: Axis) -> Position {
    let cm = mover.center();
    let cf = fixed.center();
    match axis {
        Axis::X => {
            let x = if cm.x < cf.x {
                fixed.x - mover.width
            } else {
                fixed.right()
            };
            Position::new(x, mover.y)
        }
        Axis::Y => {
            let y = if cm.y < cf.y {
                fixed.y - mover.height
            } else {
                fixed.bottom()
            };
            Position::new(mover.x, y)
        }
    }
}

/// Offsets that separate two movable rectangles by half the penetration each.
///
/// Returns `(offset_a, offset_b)` to add to the top-left corners.
pub fn split_apart(a: &Rect, b: &Rect, pen: Penetration) -> (Position, Position) {
    let half = pen.depth / 2.0;
    let ca = a.center();
    let cb = b.center();
    match pen.axis {
        Axis::X => {
            let sign = if ca.x < cb.x { -1.0 } else { 1.0 };
            (Position::new(sign * half, 0.0), Position::new(-sign * half, 0.0))
        }
        Axis::Y => {
            let sign = if ca.y < cb.y { -1.0 } else { 1.0 };
            (Position::new(0.0, sign * half), Position::new(0.0, -sign * half))
        }
    }
}

/// True if `rect` overlaps any of `obstacles`.
pub fn overlaps_any(rect: &Rect, obstacles: &[Rect]) -> bool {
    obstacles.iter().any(|o| rect.overlaps(o))
}
