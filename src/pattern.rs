use std::str::FromStr;

use thiserror::Error;

use crate::quadtree::QuadTree;
use crate::quadtree::Quadrant;

#[derive(Error, Debug, PartialEq)]
pub enum PatternError {
    #[error("Expected a quadrant digit (one of '0123'), but got '{got}'")]
    InvalidQuadrant { got: char },
}

/// The address of a node: the quadrants to step through, root down.
///
/// # Format
///
/// A string of quadrant digits, e.g. `"02"` for the top-left child of the
/// bottom-left child of the root. The root itself is spelled `"."`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadPath(Vec<Quadrant>);

impl FromStr for QuadPath {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "." {
            return Ok(QuadPath(vec![]));
        }

        let mut path = Vec::with_capacity(s.len());
        for c in s.chars() {
            let Some(quadrant) = Quadrant::from_digit(c) else {
                return Err(PatternError::InvalidQuadrant { got: c });
            };

            path.push(quadrant);
        }

        Ok(QuadPath(path))
    }
}

/// A scripted sequence of splits, one [`QuadPath`] per node to split.
///
/// # Format
///
/// Whitespace-separated paths, applied left to right:
///
/// ```notrust
/// . 0 02
/// ```
///
/// splits the root, then its quadrant-0 child, then that child's quadrant-2
/// child. The empty string is a valid pattern that splits nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    paths: Vec<QuadPath>,
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let paths = s
            .split_whitespace()
            .map(QuadPath::from_str)
            .collect::<Result<_, _>>()?;

        Ok(Pattern { paths })
    }
}

impl Pattern {
    /// Split every addressed node, in order.
    ///
    /// Walking a path splits any leaf it passes through, so a path deeper
    /// than the tree grows the tree on the way down.
    pub fn apply(&self, tree: &mut QuadTree) {
        for path in &self.paths {
            let mut id = tree.root;

            for &quadrant in &path.0 {
                if tree.get(id).is_leaf() {
                    tree.split(id);
                }

                let Some(children) = tree.get(id).children else {
                    unreachable!("a split node always has children")
                };

                id = children[quadrant as usize];
            }

            tree.split(id);
        }
    }
}
