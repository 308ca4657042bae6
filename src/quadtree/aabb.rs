use crate::quadtree::point::Point;

#[derive(Debug, Clone)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

impl Aabb {
    /// The square reaching `half` out from `center` on both axes.
    pub fn from_center(center: Point, half: f32) -> Self {
        Aabb {
            min: Point::new(center.x - half, center.y - half),
            max: Point::new(center.x + half, center.y + half),
        }
    }

    /// Whether `p` lies in the box. Every edge counts as inside.
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }
}
