// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree chart: a hierarchy laid out inside the plot rectangle.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Line, Vec2};

use crate::config::ChartConfig;
use crate::tree::{TreeNode, layout};

/// A tree chart builder over a fixed hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeChartSpec {
    /// The hierarchy to draw.
    pub root: TreeNode,
}

/// Output of [`TreeChartSpec::render`].
#[derive(Clone, Debug)]
pub struct TreeGeometry {
    /// The hierarchy with every node positioned in scene coordinates.
    pub root: TreeNode,
    /// One segment per parent-to-child edge.
    pub edges: Vec<Line>,
}

impl TreeChartSpec {
    /// Creates a tree chart of `root`.
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    /// Positions the hierarchy inside [`ChartConfig::plot_rect`].
    ///
    /// The root sits on the top edge of the plot and the deepest nodes on its bottom edge.
    pub fn render(&self, config: &ChartConfig) -> TreeGeometry {
        let plot = config.plot_rect();
        let mut root = layout(self.root.clone(), plot.width(), plot.height());
        root.translate(Vec2::new(plot.x0, plot.y0));
        let edges = root
            .links()
            .iter()
            .map(|link| {
                let (source, target) = link.endpoints();
                Line::new(source, target)
            })
            .collect();
        TreeGeometry { root, edges }
    }
}
