use crate::quadtree::point::Point;

/// The four quadrants of a node, in child order:
///
/// ```notrust
/// 2 | 3
/// --+--
/// 0 | 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    BottomLeft = 0,
    BottomRight = 1,
    TopLeft = 2,
    TopRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
        Quadrant::TopLeft,
        Quadrant::TopRight,
    ];

    /// Unit direction from a node's center toward this quadrant's corner.
    pub fn direction(self) -> Point {
        match self {
            Quadrant::BottomLeft => Point::new(-1.0, -1.0),
            Quadrant::BottomRight => Point::new(1.0, -1.0),
            Quadrant::TopLeft => Point::new(-1.0, 1.0),
            Quadrant::TopRight => Point::new(1.0, 1.0),
        }
    }

    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Quadrant::BottomLeft),
            '1' => Some(Quadrant::BottomRight),
            '2' => Some(Quadrant::TopLeft),
            '3' => Some(Quadrant::TopRight),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::quadtree::quadrant::Quadrant;

    #[test]
    fn all_is_in_child_order() {
        for (i, quadrant) in Quadrant::ALL.into_iter().enumerate() {
            assert_eq!(quadrant as usize, i);
        }
    }

    #[test]
    fn directions_point_at_the_right_corners() {
        let signs: Vec<(f32, f32)> = Quadrant::ALL
            .into_iter()
            .map(|q| (q.direction().x, q.direction().y))
            .collect();

        assert_eq!(
            signs,
            vec![(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn digits_map_to_quadrants() {
        assert_eq!(Quadrant::from_digit('0'), Some(Quadrant::BottomLeft));
        assert_eq!(Quadrant::from_digit('1'), Some(Quadrant::BottomRight));
        assert_eq!(Quadrant::from_digit('2'), Some(Quadrant::TopLeft));
        assert_eq!(Quadrant::from_digit('3'), Some(Quadrant::TopRight));
        assert_eq!(Quadrant::from_digit('4'), None);
        assert_eq!(Quadrant::from_digit('x'), None);
    }
}
