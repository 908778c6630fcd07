//! Wall collision on the ground plane.
//!
//! Walls are axis-aligned rectangles of unbounded height. Gate zones mark
//! openings where collision is waived even if a wall rectangle overlaps.

use glam::Vec2;

/// Axis-aligned rectangle on the ground plane (`y` carries world Z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub const fn new(x_min: f32, x_max: f32, z_min: f32, z_max: f32) -> Self {
        Self {
            min: Vec2::new(x_min, z_min),
            max: Vec2::new(x_max, z_max),
        }
    }

    /// Containment with strict inequality on all four bounds.
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

/// A region in which collision is disabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateZone {
    Rect(Aabb),
    Radial { center: Vec2, radius: f32 },
}

impl GateZone {
    /// Strict containment.
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            GateZone::Rect(rect) => rect.contains_strict(p),
            GateZone::Radial { center, radius } => p.distance_squared(*center) < radius * radius,
        }
    }
}

/// Temple walls and solid structure bases. Z- is west (sanctuary), Z+ is east (entrance).
const TEMPLE_WALLS: [Aabb; 12] = [
    // Women's court
    Aabb::new(-37.0, 37.0, 118.0, 122.0), // east wall (entrance)
    Aabb::new(-37.0, 37.0, 48.0, 52.0),   // west wall (toward azara)
    Aabb::new(33.0, 37.0, 50.0, 120.0),   // south wall
    Aabb::new(-37.0, -33.0, 50.0, 120.0), // north wall
    // Azara
    Aabb::new(33.0, 37.0, -48.0, 48.0),   // south wall
    Aabb::new(-37.0, -33.0, -48.0, 48.0), // north wall
    Aabb::new(-37.0, 37.0, -48.0, -45.0), // west wall behind the sanctuary
    Aabb::new(-37.0, 37.0, 45.0, 48.0),   // east wall
    // Sanctuary
    Aabb::new(-16.0, -9.0, -35.0, -5.0),
    Aabb::new(9.0, 16.0, -35.0, -5.0),
    Aabb::new(-16.0, 16.0, -38.0, -34.0),
    // Altar base
    Aabb::new(-9.0, 9.0, 11.0, 29.0),
];

/// Z positions of the gates in the azara's north and south walls.
const SIDE_GATE_Z: [f32; 3] = [-22.0, 0.0, 28.0];
/// Half-width of a side gate along Z.
const SIDE_GATE_HALF_WIDTH: f32 = 6.0;

fn temple_gates() -> Vec<GateZone> {
    let mut gates = vec![
        // Nicanor gate between the courts
        GateZone::Rect(Aabb::new(-8.0, 8.0, 42.0, 55.0)),
        // Women's court east entrance
        GateZone::Rect(Aabb::new(-10.0, 10.0, 115.0, 125.0)),
    ];
    for gz in SIDE_GATE_Z {
        let (z_min, z_max) = (gz - SIDE_GATE_HALF_WIDTH, gz + SIDE_GATE_HALF_WIDTH);
        gates.push(GateZone::Rect(Aabb::new(30.0, 40.0, z_min, z_max)));
        gates.push(GateZone::Rect(Aabb::new(-40.0, -30.0, z_min, z_max)));
    }
    gates
}

/// Static obstacle set with gate exceptions.
#[derive(Debug, Clone)]
pub struct CollisionModel {
    walls: Vec<Aabb>,
    gates: Vec<GateZone>,
}

impl Default for CollisionModel {
    fn default() -> Self {
        Self::temple()
    }
}

impl CollisionModel {
    pub fn new(walls: Vec<Aabb>, gates: Vec<GateZone>) -> Self {
        Self { walls, gates }
    }

    /// The temple layout.
    pub fn temple() -> Self {
        Self::new(TEMPLE_WALLS.to_vec(), temple_gates())
    }

    pub fn walls(&self) -> &[Aabb] {
        &self.walls
    }

    pub fn gates(&self) -> &[GateZone] {
        &self.gates
    }

    /// Whether the position lies inside any gate zone.
    pub fn is_in_gate(&self, p: Vec2) -> bool {
        self.gates.iter().any(|g| g.contains(p))
    }

    /// Whether a body at `p` would be inside a wall. Gates take precedence.
    pub fn is_blocked(&self, p: Vec2) -> bool {
        if self.is_in_gate(p) {
            return false;
        }
        self.walls.iter().any(|w| w.contains_strict(p))
    }
}
