use core::fmt;
use std::ops::Add;

/// Integer cell coordinate on a [Grid](crate::grid::Grid).
///
/// Coordinates may be negative so that neighbourhoods of border cells can be
/// expressed without filtering; bounds are checked by the grid. The derived
/// ordering compares `x` first and `y` second, which is the ordering used to
/// break ties between equally promising frontier entries during search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub fn manhattan_distance(&self, other: &Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The four axis-aligned unit steps in canonical order: +x, -x, +y, -y.
    pub fn neumann_neighborhood(&self) -> [Point; 4] {
        UNIT_STEPS.map(|step| *self + step)
    }

    /// Scales both components, used to turn unit steps into lattice steps.
    pub fn scale(self, factor: i32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Unit steps in the canonical neighbour order.
pub const UNIT_STEPS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Point {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_has_canonical_order() {
        let p = Point::new(0, 0);
        assert_eq!(
            p.neumann_neighborhood(),
            [
                Point::new(1, 0),
                Point::new(-1, 0),
                Point::new(0, 1),
                Point::new(0, -1)
            ]
        );
    }

    #[test]
    fn converts_from_tuple() {
        let p: Point = (3, -2).into();
        assert_eq!(p, Point::new(3, -2));
        assert_eq!(Point::from((1, 1)) + UNIT_STEPS[0], Point::new(2, 1));
    }

    #[test]
    fn ordering_is_x_then_y() {
        assert!(Point::new(1, 9) < Point::new(2, 0));
        assert!(Point::new(2, 0) < Point::new(2, 1));
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 1);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
    }
}
