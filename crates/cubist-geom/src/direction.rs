use crate::{IVec3, Vec3};

/// One of the six axis directions of a cube, in emission order.
///
/// The grid is left-handed with Y up: `Forward` is +Z and `Right` is +X.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Forward = 0,
    Backward = 1,
    Left = 2,
    Right = 3,
    Up = 4,
    Down = 5,
}

impl Direction {
    pub const COUNT: usize = 6;

    /// All directions in face emission order.
    pub const ALL: [Direction; 6] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the `[0..6)` index of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index `[0..6)` back into a `Direction`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Direction> {
        Self::ALL.get(i).copied()
    }

    /// Returns the integer grid delta when stepping out of this face.
    #[inline]
    pub fn offset(self) -> IVec3 {
        match self {
            Direction::Forward => IVec3::new(0, 0, 1),
            Direction::Backward => IVec3::new(0, 0, -1),
            Direction::Left => IVec3::new(-1, 0, 0),
            Direction::Right => IVec3::new(1, 0, 0),
            Direction::Up => IVec3::new(0, 1, 0),
            Direction::Down => IVec3::new(0, -1, 0),
        }
    }

    /// Returns the unit normal of the face pointing this way.
    #[inline]
    pub fn normal(self) -> Vec3 {
        self.offset().as_vec3()
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}
