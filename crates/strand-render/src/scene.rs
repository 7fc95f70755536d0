//! Retained draw commands for one render pass.
//!
//! Layers, back to front: background clear, primary path, lag-3 repeat connectors, per-node
//! polygons, label. Only the polygon layer consumes random draws: one per non-origin node, in
//! ascending node order.

use crate::palette::{Color, Palette};
use crate::polygon::{POLYGON_RADIUS, polygon_sides, regular_polygon};
use crate::random::SeededRandom;
use serde::Serialize;
use strand_core::geom::{Point, Size, point};
use strand_core::{Chain, Sequence};

pub const PATH_STROKE_WIDTH: f64 = 2.0;
pub const CONNECTOR_STROKE_WIDTH: f64 = 0.8;
pub const POLYGON_STROKE_WIDTH: f64 = 2.0;
/// Chance that a node gets a polygon.
pub const POLYGON_PROBABILITY: f64 = 0.6;
/// Distance between two equal letters that get linked.
pub const REPEAT_LAG: usize = 3;

pub const LABEL_X: f64 = 20.0;
pub const LABEL_Y: f64 = 30.0;
pub const LABEL_FONT_SIZE: f64 = 15.0;
pub const LABEL_FONT_WEIGHT: u16 = 100;
pub const LABEL_FONT_FAMILY: &str = "sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub fill: Color,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fills the whole surface.
    Clear { color: Color },
    /// Open path, no fill.
    Polyline { points: Vec<Point>, stroke: Stroke },
    Line { from: Point, to: Point, stroke: Stroke },
    /// Closed path with fill and outline.
    Polygon {
        vertices: Vec<Point>,
        fill: Color,
        stroke: Stroke,
    },
    /// Text drawn with its baseline-left corner at `anchor`.
    Text {
        text: String,
        anchor: Point,
        style: TextStyle,
    },
}

/// A rendering backend.
///
/// [`Scene::replay`] calls these in command order; later calls paint over earlier ones.
pub trait DrawTarget {
    fn clear(&mut self, color: Color, size: Size);
    fn polyline(&mut self, points: &[Point], stroke: &Stroke);
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn polygon(&mut self, vertices: &[Point], fill: Color, stroke: &Stroke);
    fn text(&mut self, text: &str, anchor: Point, style: &TextStyle);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn replay<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear { color } => target.clear(*color, self.size),
                DrawCommand::Polyline { points, stroke } => target.polyline(points, stroke),
                DrawCommand::Line { from, to, stroke } => target.line(*from, *to, stroke),
                DrawCommand::Polygon {
                    vertices,
                    fill,
                    stroke,
                } => target.polygon(vertices, *fill, stroke),
                DrawCommand::Text {
                    text,
                    anchor,
                    style,
                } => target.text(text, *anchor, style),
            }
        }
    }
}

/// A link between the nodes of two equal letters `REPEAT_LAG` positions apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Connector {
    pub from: usize,
    pub to: usize,
}

/// Lag-3 self-similarity: for every `i` with `sequence[i] == sequence[i + 3]`, link node `i + 1`
/// to node `i + 4` (node 0 is the origin).
pub fn repeat_connectors(sequence: &Sequence) -> Vec<Connector> {
    sequence
        .as_str()
        .as_bytes()
        .windows(REPEAT_LAG + 1)
        .enumerate()
        .filter(|(_, w)| w[0] == w[REPEAT_LAG])
        .map(|(i, _)| Connector {
            from: i + 1,
            to: i + 1 + REPEAT_LAG,
        })
        .collect()
}

/// Nodes that receive a polygon: one draw per node `1..chain.len()`, kept when below
/// [`POLYGON_PROBABILITY`].
pub fn pick_polygon_nodes(chain: &Chain, random: &mut SeededRandom) -> Vec<usize> {
    (1..chain.len())
        .filter(|_| random.next_f64() < POLYGON_PROBABILITY)
        .collect()
}

/// Renders `chain` with a random source seeded from `sequence`.
///
/// The stream is re-derived on every call, so rendering the same generation twice produces the
/// same scene.
pub fn render(chain: &Chain, sequence: &Sequence, palette: &Palette) -> Scene {
    let mut random = SeededRandom::new(sequence.seed());
    render_with_random(chain, sequence, palette, &mut random)
}

pub fn render_with_random(
    chain: &Chain,
    sequence: &Sequence,
    palette: &Palette,
    random: &mut SeededRandom,
) -> Scene {
    let mut commands = Vec::with_capacity(chain.len() + 3);
    commands.push(DrawCommand::Clear {
        color: palette.background,
    });

    commands.push(DrawCommand::Polyline {
        points: chain.positions().collect(),
        stroke: Stroke::new(palette.foreground, PATH_STROKE_WIDTH),
    });

    let connectors = repeat_connectors(sequence);
    for c in &connectors {
        let (Some(a), Some(b)) = (chain.get(c.from), chain.get(c.to)) else {
            tracing::warn!(
                from = c.from,
                to = c.to,
                chain_len = chain.len(),
                "skipping connector outside the chain"
            );
            continue;
        };
        commands.push(DrawCommand::Line {
            from: a.position,
            to: b.position,
            stroke: Stroke::new(palette.foreground, CONNECTOR_STROKE_WIDTH),
        });
    }

    let picked = pick_polygon_nodes(chain, random);
    for &index in &picked {
        let node = &chain.nodes()[index];
        commands.push(DrawCommand::Polygon {
            vertices: regular_polygon(
                node.position,
                POLYGON_RADIUS,
                polygon_sides(node.value),
                node.angle,
            ),
            fill: palette.polygon_fill,
            stroke: Stroke::new(palette.foreground, POLYGON_STROKE_WIDTH),
        });
    }

    commands.push(DrawCommand::Text {
        text: sequence.label(),
        anchor: point(LABEL_X, LABEL_Y),
        style: TextStyle {
            fill: palette.foreground,
            font_family: LABEL_FONT_FAMILY.to_string(),
            font_size: LABEL_FONT_SIZE,
            font_weight: LABEL_FONT_WEIGHT,
        },
    });

    tracing::debug!(
        nodes = chain.len(),
        connectors = connectors.len(),
        polygons = picked.len(),
        "rendered scene"
    );

    Scene {
        size: chain.surface(),
        commands,
    }
}
