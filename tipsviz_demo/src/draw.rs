// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns chart geometry into SVG documents.

use kurbo::{Line, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use tipsviz_charts::{
    AreaGeometry, BarGeometry, CartesianAxes, ChartConfig, LineGeometry, PieGeometry,
    ScatterGeometry, StackedAreaGeometry, TreeGeometry,
};

use crate::svg::{SvgScene, TextAnchor};

const TICK_LENGTH: f64 = 6.0;
const LABEL_SIZE: f64 = 11.0;
const TITLE_SIZE: f64 = 15.0;
const TREE_NODE_RADIUS: f64 = 20.0;
const TREE_NODE_FILL: Color = css::LIME;

fn scene(config: &ChartConfig, title: &str) -> SvgScene {
    let mut scene = SvgScene::new(config.output_width, config.output_height);
    scene.rect(
        Rect::new(0.0, 0.0, config.output_width, config.output_height),
        css::WHITE,
    );
    scene.text(
        Point::new(config.output_width / 2.0, config.margin.top / 2.0),
        title,
        TITLE_SIZE,
        TextAnchor::Middle,
    );
    scene
}

fn axes(scene: &mut SvgScene, axes: &CartesianAxes) {
    let plot = axes.plot;
    scene.line(Line::new((plot.x0, plot.y1), (plot.x1, plot.y1)), css::BLACK);
    scene.line(Line::new((plot.x0, plot.y0), (plot.x0, plot.y1)), css::BLACK);
    for tick in &axes.x {
        let x = tick.position;
        scene.line(Line::new((x, plot.y1), (x, plot.y1 + TICK_LENGTH)), css::BLACK);
        scene.text(
            Point::new(x, plot.y1 + TICK_LENGTH + LABEL_SIZE),
            &tick.label,
            LABEL_SIZE,
            TextAnchor::Middle,
        );
    }
    for tick in &axes.y {
        let y = tick.position;
        scene.line(Line::new((plot.x0 - TICK_LENGTH, y), (plot.x0, y)), css::BLACK);
        scene.text(
            Point::new(plot.x0 - TICK_LENGTH - 2.0, y),
            &tick.label,
            LABEL_SIZE,
            TextAnchor::End,
        );
    }
}

pub(crate) fn scatter(geom: &ScatterGeometry, config: &ChartConfig) -> String {
    let mut out = scene(config, "Scatter Plot: Total Bill vs Tips");
    for point in &geom.points {
        out.circle(point.center, point.radius, css::RED);
    }
    axes(&mut out, &geom.axes);
    out.to_svg_string()
}

pub(crate) fn line(geom: &LineGeometry, config: &ChartConfig) -> String {
    let mut out = scene(config, "Line Chart: Total Bill vs Tips");
    out.path(&geom.path, None, Some((css::STEEL_BLUE, 1.5)));
    axes(&mut out, &geom.axes);
    out.to_svg_string()
}

pub(crate) fn area(geom: &AreaGeometry, config: &ChartConfig) -> String {
    let mut out = scene(config, "Area Chart: Total Bill vs Tips");
    out.path(&geom.area, Some(css::YELLOW), None);
    out.path(&geom.top, None, Some((css::ORANGE, 1.0)));
    axes(&mut out, &geom.axes);
    out.to_svg_string()
}

pub(crate) fn stacked_area(geom: &StackedAreaGeometry, config: &ChartConfig) -> String {
    let mut out = scene(config, "Stacked Area Chart: Average Total Bill and Tip per Day");
    for layer in &geom.layers {
        out.path(&layer.path, Some(layer.fill), None);
    }
    // Legend in the top right corner of the plot.
    let plot = geom.axes.plot;
    for (i, layer) in geom.layers.iter().enumerate() {
        let y = plot.y0 + 10.0 + 18.0 * i as f64;
        out.rect(Rect::new(plot.x1 - 110.0, y - 6.0, plot.x1 - 98.0, y + 6.0), layer.fill);
        out.text(Point::new(plot.x1 - 92.0, y), &layer.key, LABEL_SIZE, TextAnchor::Start);
    }
    axes(&mut out, &geom.axes);
    out.to_svg_string()
}

pub(crate) fn bar(geom: &BarGeometry, config: &ChartConfig, title: &str) -> String {
    let mut out = scene(config, title);
    for bar in &geom.bars {
        out.rect(bar.rect, css::PINK);
    }
    axes(&mut out, &geom.axes);
    out.to_svg_string()
}

pub(crate) fn pie(geom: &PieGeometry, config: &ChartConfig) -> String {
    let mut out = scene(config, "Pie Chart: Average Total Bill per Day");
    for slice in &geom.slices {
        out.path(&slice.path, Some(slice.fill), Some((css::WHITE, 1.0)));
    }
    for slice in &geom.slices {
        out.text(slice.centroid, &slice.arc.entry.key, LABEL_SIZE, TextAnchor::Middle);
    }
    out.to_svg_string()
}

pub(crate) fn tree(geom: &TreeGeometry, config: &ChartConfig) -> String {
    let mut out = scene(config, "Tree Chart");
    for edge in &geom.edges {
        out.line(*edge, css::BLACK);
    }
    for node in geom.root.descendants() {
        out.circle(node.position(), TREE_NODE_RADIUS, TREE_NODE_FILL);
        out.text(node.position(), &node.label, LABEL_SIZE, TextAnchor::Middle);
    }
    out.to_svg_string()
}
