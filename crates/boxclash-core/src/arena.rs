//! Arena catalog: fixed named obstacle layouts.
//!
//! Layouts are laid out for an `ARENA_WIDTH` × `ARENA_HEIGHT` field and are
//! immutable for the lifetime of a match.

use serde::{Deserialize, Serialize};

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::enums::ArenaId;
use crate::types::Rect;

/// The playing field: bounds plus static obstacles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub id: ArenaId,
    pub width: f64,
    pub height: f64,
    pub obstacles: Vec<Rect>,
}

impl Arena {
    /// Build the arena for a catalog entry.
    pub fn from_catalog(id: ArenaId) -> Self {
        Self {
            id,
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            obstacles: layout(id),
        }
    }

    /// The whole field as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::from_catalog(ArenaId::Empty)
    }
}

/// Obstacle rectangles for a catalog entry.
pub fn layout(id: ArenaId) -> Vec<Rect> {
    let w = ARENA_WIDTH;
    let h = ARENA_HEIGHT;
    match id {
        ArenaId::Empty => Vec::new(),
        ArenaId::CenterPillar => vec![Rect::new(w / 2.0 - 50.0, h / 2.0 - 50.0, 100.0, 100.0)],
        ArenaId::SimpleMaze => vec![
            Rect::new(150.0, 0.0, 30.0, 400.0),
            Rect::new(w - 180.0, h - 400.0, 30.0, 400.0),
        ],
        // Two open gates on each flank.
        ArenaId::Fortress => vec![
            Rect::new(150.0, 150.0, 30.0, 100.0),
            Rect::new(150.0, 350.0, 30.0, 100.0),
            Rect::new(w - 180.0, 150.0, 30.0, 100.0),
            Rect::new(w - 180.0, 350.0, 30.0, 100.0),
        ],
        ArenaId::TwoPillars => vec![
            Rect::new(w / 3.0, 100.0, 30.0, 400.0),
            Rect::new(w / 3.0 * 2.0 - 30.0, 100.0, 30.0, 400.0),
        ],
        ArenaId::AsteroidField => [
            (200.0, 100.0),
            (560.0, 460.0),
            (380.0, 300.0),
            (150.0, 450.0),
            (600.0, 120.0),
            (300.0, 500.0),
            (500.0, 250.0),
            (250.0, 250.0),
            (550.0, 350.0),
        ]
        .into_iter()
        .map(|(x, y)| Rect::new(x, y, 40.0, 40.0))
        .collect(),
    }
}
