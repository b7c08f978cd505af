// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tidy tree layout.
//!
//! Leaves are spaced evenly across the width in left-to-right traversal order, every internal
//! node sits at the mean x of its children, and y grows linearly with depth. Unbalanced trees
//! keep the even leaf spacing; there is no Reingold-Tilford compaction.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};

/// A node of a hierarchy. Parents own their children.
///
/// `x`, `y` and `depth` are outputs of [`layout`]; they are zero on freshly built nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    /// Display label.
    pub label: String,
    /// Child nodes, in display order.
    pub children: Vec<TreeNode>,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Distance from the root (the root has depth 0).
    pub depth: usize,
}

/// A parent-to-child edge.
#[derive(Clone, Copy, Debug)]
pub struct TreeLink<'a> {
    /// The parent node.
    pub source: &'a TreeNode,
    /// The child node.
    pub target: &'a TreeNode,
}

impl TreeLink<'_> {
    /// Returns the edge endpoints as `(source, target)` points.
    pub fn endpoints(&self) -> (Point, Point) {
        (self.source.position(), self.target.position())
    }
}

impl TreeNode {
    /// Creates a leaf.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            x: 0.0,
            y: 0.0,
            depth: 0,
        }
    }

    /// Replaces the children of this node.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the node position.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves this node and all of its descendants by `offset`.
    pub fn translate(&mut self, offset: Vec2) {
        self.x += offset.x;
        self.y += offset.y;
        for child in &mut self.children {
            child.translate(offset);
        }
    }

    /// Returns this node and all of its descendants in pre-order.
    pub fn descendants(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Returns every parent-to-child edge, in pre-order of the child.
    pub fn links(&self) -> Vec<TreeLink<'_>> {
        self.descendants()
            .into_iter()
            .flat_map(|source| {
                source
                    .children
                    .iter()
                    .map(move |target| TreeLink { source, target })
            })
            .collect()
    }

    /// Returns the number of leaves under (and including) this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Self::leaf_count).sum()
        }
    }

    /// Returns the length of the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Positions every node of `root` inside a `width` x `height` box anchored at the origin.
///
/// - `y = depth / max_depth * height` (all nodes at `0` when the tree is a single level).
/// - Leaf `i` of `n` (left-to-right) gets `x = (i + 1) / (n + 1) * width`, so a lone root lands
///   at the horizontal center and two leaves land on the thirds.
/// - Internal nodes get the mean x of their children.
pub fn layout(mut root: TreeNode, width: f64, height: f64) -> TreeNode {
    let max_depth = root.height();
    let leaves = root.leaf_count();
    let mut pass = LayoutPass {
        leaf_step: width / (leaves + 1) as f64,
        depth_step: if max_depth == 0 {
            0.0
        } else {
            height / max_depth as f64
        },
        next_leaf: 0,
    };
    pass.place(&mut root, 0);
    tracing::debug!(leaves, max_depth, width, height, "laid out tree");
    root
}

struct LayoutPass {
    leaf_step: f64,
    depth_step: f64,
    next_leaf: usize,
}

impl LayoutPass {
    fn place(&mut self, node: &mut TreeNode, depth: usize) {
        node.depth = depth;
        node.y = depth as f64 * self.depth_step;
        if node.children.is_empty() {
            self.next_leaf += 1;
            node.x = self.next_leaf as f64 * self.leaf_step;
            return;
        }
        let mut sum = 0.0;
        for child in &mut node.children {
            self.place(child, depth + 1);
            sum += child.x;
        }
        node.x = sum / node.children.len() as f64;
    }
}
