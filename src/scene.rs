//! Scene: The fixed set of wall segments drawn by every panel.
//!
//! The scene is built once per panel and shared read-only afterwards.

use crate::geometry::{Line, Position, Vector};
use std::ops::Deref;
use std::sync::Arc;

/// Number of walls in the built-in scene.
pub const WALL_COUNT: usize = 10;

/// An ordered, immutable list of wall segments.
///
/// Cloning is O(1); clones share the same walls.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    walls: Arc<[Line]>,
}

impl Scene {
    /// Create a scene from an ordered list of walls.
    pub fn new(walls: impl Into<Arc<[Line]>>) -> Self {
        Self {
            walls: walls.into(),
        }
    }

    /// The walls, in draw order.
    #[inline]
    pub fn walls(&self) -> &[Line] {
        &self.walls
    }
}

impl Deref for Scene {
    type Target = [Line];

    fn deref(&self) -> &[Line] {
        &self.walls
    }
}

/// Build the built-in room: four outer walls enclosing (50,50)-(750,750)
/// followed by six interior obstacles.
pub fn build_scene() -> Scene {
    let wall = |x: f64, y: f64, degrees: f64, length: f64| {
        Line::new(Position::new(x, y), Vector::from_degrees(degrees, length))
    };

    Scene::new([
        // Room
        wall(50.0, 50.0, 0.0, 700.0),
        wall(750.0, 50.0, 90.0, 700.0),
        wall(750.0, 750.0, 180.0, 700.0),
        wall(50.0, 750.0, 270.0, 700.0),
        // Obstacles
        wall(200.0, 200.0, 0.0, 150.0),
        wall(200.0, 200.0, 90.0, 150.0),
        wall(500.0, 150.0, 60.0, 160.0),
        wall(600.0, 450.0, 135.0, 200.0),
        wall(150.0, 550.0, -30.0, 180.0),
        wall(400.0, 600.0, 90.0, 100.0),
    ])
}
