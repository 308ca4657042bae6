use crate::quadtree::aabb::Aabb;
use crate::quadtree::point::Point;
use crate::quadtree::quadrant::Quadrant;

pub type NodeID = usize;

#[derive(Debug)]
pub struct Node {
    /// Number of splits between the root and this node
    pub depth: u32,

    /// Center of the node's tile, in world coordinates
    pub center: Point,

    /// Side of the node's tile, `2^-depth`. Doubles as the half-extent of
    /// the node's lookup bounds.
    pub size: f32,

    // indices into the tree's node vector. The root is the only node
    // without a parent; a leaf is a node without children.
    pub parent: Option<NodeID>,
    pub children: Option<[NodeID; 4]>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Node {
            depth: 0,
            center: Point::new(0.0, 0.0),
            size: 1.0,
            parent: None,
            children: None,
        }
    }

    pub(crate) fn child(parent: &Node, parent_id: NodeID, quadrant: Quadrant) -> Self {
        let depth = parent.depth + 1;
        let size = node_size(depth);
        let dir = quadrant.direction();

        Node {
            depth,
            center: Point::new(
                parent.center.x + dir.x * size * 0.5,
                parent.center.y + dir.y * size * 0.5,
            ),
            size,
            parent: Some(parent_id),
            children: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The box point lookup tests against: side `2 * size`, centered on the
    /// node. Twice as wide as the tile, so sibling bounds overlap.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center, self.size)
    }

    /// The square this node covers on screen: side `size`, centered on the
    /// node. Sibling tiles partition their parent's tile exactly.
    pub fn tile(&self) -> Aabb {
        Aabb::from_center(self.center, self.size * 0.5)
    }
}

/// Node size at `depth`. Powers of two, so every center and size a tree
/// can produce is exact in `f32`.
pub(crate) fn node_size(depth: u32) -> f32 {
    2f32.powi(-(depth as i32))
}
