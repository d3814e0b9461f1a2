use core::ops::{BitOr, BitOrAssign};

use cubist_geom::Direction;

/// Set of cube faces to emit, one bit per [`Direction`] (bit = `Direction::index`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IncludeFaces(u8);

impl IncludeFaces {
    pub const NONE: IncludeFaces = IncludeFaces(0);
    pub const ALL: IncludeFaces = IncludeFaces(0b11_1111);

    pub const FORWARD: IncludeFaces = IncludeFaces::only(Direction::Forward);
    pub const BACKWARD: IncludeFaces = IncludeFaces::only(Direction::Backward);
    pub const LEFT: IncludeFaces = IncludeFaces::only(Direction::Left);
    pub const RIGHT: IncludeFaces = IncludeFaces::only(Direction::Right);
    pub const UP: IncludeFaces = IncludeFaces::only(Direction::Up);
    pub const DOWN: IncludeFaces = IncludeFaces::only(Direction::Down);

    /// Builds a mask from raw bits; bits above the sixth are dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn only(dir: Direction) -> Self {
        Self(1 << dir as u8)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & (1 << dir.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= 1 << dir.index();
    }

    #[inline]
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !(1 << dir.index());
    }

    #[inline]
    pub fn with(mut self, dir: Direction) -> Self {
        self.insert(dir);
        self
    }

    #[inline]
    pub fn without(mut self, dir: Direction) -> Self {
        self.remove(dir);
        self
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Included directions in emission order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    #[inline]
    pub fn forward(self) -> bool {
        self.contains(Direction::Forward)
    }

    #[inline]
    pub fn backward(self) -> bool {
        self.contains(Direction::Backward)
    }

    #[inline]
    pub fn left(self) -> bool {
        self.contains(Direction::Left)
    }

    #[inline]
    pub fn right(self) -> bool {
        self.contains(Direction::Right)
    }

    #[inline]
    pub fn up(self) -> bool {
        self.contains(Direction::Up)
    }

    #[inline]
    pub fn down(self) -> bool {
        self.contains(Direction::Down)
    }
}

impl BitOr for IncludeFaces {
    type Output = IncludeFaces;
    #[inline]
    fn bitor(self, rhs: IncludeFaces) -> IncludeFaces {
        IncludeFaces(self.0 | rhs.0)
    }
}

impl BitOrAssign for IncludeFaces {
    #[inline]
    fn bitor_assign(&mut self, rhs: IncludeFaces) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Direction> for IncludeFaces {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(IncludeFaces::NONE, |acc, d| acc.with(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_none() {
        assert_eq!(IncludeFaces::ALL.len(), 6);
        assert!(IncludeFaces::NONE.is_empty());
        assert_eq!(IncludeFaces::ALL.iter().collect::<Vec<_>>(), Direction::ALL.to_vec());
        assert_eq!(IncludeFaces::from_bits(0xFF), IncludeFaces::ALL);
    }

    #[test]
    fn bits_are_independent() {
        let mut f = IncludeFaces::UP | IncludeFaces::LEFT;
        assert!(f.up() && f.left());
        assert!(!f.down() && !f.right() && !f.forward() && !f.backward());
        f.remove(Direction::Up);
        assert_eq!(f, IncludeFaces::LEFT);
        f.remove(Direction::Up);
        assert_eq!(f, IncludeFaces::LEFT);
        assert_eq!(IncludeFaces::ALL.without(Direction::Down).len(), 5);
    }

    #[test]
    fn collect_from_directions() {
        let f: IncludeFaces = [Direction::Forward, Direction::Down].into_iter().collect();
        assert_eq!(f, IncludeFaces::FORWARD | IncludeFaces::DOWN);
        assert_eq!(f.bits(), 0b10_0001);
    }
}
