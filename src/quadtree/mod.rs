use std::fmt::Write;

use tracing::debug;

pub use crate::quadtree::aabb::Aabb;
pub use crate::quadtree::node::Node;
pub use crate::quadtree::node::NodeID;
pub use crate::quadtree::point::Point;
pub use crate::quadtree::quadrant::Quadrant;

mod aabb;
mod node;
mod point;
mod quadrant;

/// A region quadtree over a fixed square of the plane.
///
/// The root tile is the side-1 square centered on the origin. Splitting a
/// node carves its tile into four half-size quadrant tiles, eagerly, one
/// child per [`Quadrant`]. Nodes live in an arena and are addressed by
/// [`NodeID`]; an id stays valid for the life of the tree.
#[derive(Debug)]
pub struct QuadTree {
    /// The index of the root of the tree in `nodes`
    pub root: NodeID,

    height: u32,
    nodes: Vec<Node>,
}

impl QuadTree {
    /// A fresh tree holding only the root leaf.
    pub fn new() -> Self {
        QuadTree {
            root: 0,
            height: 1,
            nodes: vec![Node::root()],
        }
    }

    /// The node behind `id`. Panics if `id` was never allocated by this tree.
    pub fn get(&self, id: NodeID) -> &Node {
        &self.nodes[id]
    }

    /// Deepest level any split has reached. Starts at 1 on a fresh tree and
    /// only ever grows, so splitting the root alone leaves it at 1.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of nodes allocated over the tree's lifetime, children orphaned
    /// by a re-split included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Split `id` into four leaf children, one per quadrant.
    ///
    /// Splitting is permissive: depth is not capped here (that is the
    /// caller's policy), and splitting an internal node hands it four fresh
    /// children while the old ones stay in the arena, unreachable.
    pub fn split(&mut self, id: NodeID) {
        let mut children = [0; 4];
        for quadrant in Quadrant::ALL {
            children[quadrant as usize] = self.nodes.len();
            let child = Node::child(&self.nodes[id], id, quadrant);
            self.nodes.push(child);
        }
        self.nodes[id].children = Some(children);

        let child_depth = self.nodes[id].depth + 1;
        if child_depth > self.height {
            self.height = child_depth;
            debug!("tree height is now {}", self.height);
        }
    }

    /// The leaf whose bounds contain `point`, or `None` when no leaf claims
    /// it.
    ///
    /// The walk descends from the root, trying children in quadrant order
    /// and keeping the first branch that produces a leaf. Sibling bounds
    /// overlap, so that order is also the tie-break.
    pub fn leaf_at(&self, point: Point) -> Option<NodeID> {
        self.leaf_below(self.root, point)
    }

    fn leaf_below(&self, id: NodeID, point: Point) -> Option<NodeID> {
        let node = &self.nodes[id];

        if !node.bounds().contains(point) {
            return None;
        }

        let Some(children) = node.children else {
            return Some(id);
        };

        for child in children {
            if let Some(leaf) = self.leaf_below(child, point) {
                return Some(leaf);
            }
        }

        None
    }

    /// Indented listing of every reachable node, children in quadrant order.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, "root", &mut out);
        out
    }

    fn dump_node(&self, id: NodeID, label: &str, out: &mut String) {
        const LABELS: [&str; 4] = ["q0", "q1", "q2", "q3"];

        let node = &self.nodes[id];
        let state = if node.is_leaf() { "leaf" } else { "internal" };

        for _ in 0..node.depth {
            out.push_str("  ");
        }
        let _ = writeln!(
            out,
            "{} {} depth={} size={} center={:?}",
            label, state, node.depth, node.size, node.center
        );

        if let Some(children) = node.children {
            for quadrant in Quadrant::ALL {
                self.dump_node(children[quadrant as usize], LABELS[quadrant as usize], out);
            }
        }
    }
}
