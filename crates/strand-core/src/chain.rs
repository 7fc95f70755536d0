use crate::error::Result;
use crate::geom::{Box2D, Point, Size, bounds_of, point, size};
use crate::sequence::Sequence;
use crate::walk::Walk;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub position: Point,
    /// Cumulative heading in radians at this node.
    pub angle: f64,
    /// `None` for the synthetic origin (node 0).
    pub source: Option<char>,
    /// Alphabet index of `source`; 0 for the origin.
    pub value: u8,
}

impl Node {
    fn origin(position: Point) -> Self {
        Self {
            position,
            angle: 0.0,
            source: None,
            value: 0,
        }
    }
}

/// The generated structure: node 0 is the origin, node `i` belongs to input character `i - 1`.
///
/// A chain is immutable once built; a new generation produces a new chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chain {
    surface: Size,
    nodes: Vec<Node>,
}

impl Chain {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the origin node is present even before any step.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.position)
    }

    /// Size of the drawing surface the chain was centred on.
    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn surface_center(&self) -> Point {
        point(self.surface.width / 2.0, self.surface.height / 2.0)
    }

    /// Axis-aligned bounds of every node position, origin included.
    pub fn bounds(&self) -> Box2D {
        let center = self.surface_center();
        bounds_of(self.positions()).unwrap_or_else(|| Box2D::new(center, center))
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Validates `sequence` and builds its chain for a `surface_width` x `surface_height` surface.
pub fn generate(sequence: &str, surface_width: u32, surface_height: u32) -> Result<Chain> {
    let sequence = Sequence::parse(sequence)?;
    Ok(build_chain(&sequence, surface_width, surface_height))
}

/// Builds the chain for an already validated sequence.
///
/// Pure: the result depends only on the letters and the surface size, never on random state.
pub fn build_chain(sequence: &Sequence, surface_width: u32, surface_height: u32) -> Chain {
    let surface = size(f64::from(surface_width), f64::from(surface_height));
    let center = point(surface.width / 2.0, surface.height / 2.0);

    let mut nodes = Vec::with_capacity(sequence.len() + 1);
    nodes.push(Node::origin(center));
    sequence
        .values()
        .fold(Walk::start(center), |walk, (ch, value)| {
            let next = walk.step(value);
            nodes.push(Node {
                position: next.position,
                angle: next.angle,
                source: Some(ch),
                value,
            });
            next
        });

    let mut chain = Chain { surface, nodes };
    recenter(&mut chain.nodes, center);

    let bounds = chain.bounds();
    tracing::debug!(
        len = sequence.len(),
        seed = sequence.seed(),
        width = bounds.width(),
        height = bounds.height(),
        "built chain"
    );
    chain
}

/// Translates `nodes` so the centre of their bounding box lands on `target`.
fn recenter(nodes: &mut [Node], target: Point) {
    let Some(bounds) = bounds_of(nodes.iter().map(|n| n.position)) else {
        return;
    };
    let offset = target - bounds.center();
    for node in nodes {
        node.position += offset;
    }
}
