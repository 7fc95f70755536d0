#![forbid(unsafe_code)]

//! Turns a generated [`Chain`](strand_core::Chain) into a retained list of draw commands.
//!
//! The [`Scene`] is backend-agnostic: any type implementing [`DrawTarget`] can replay it. An SVG
//! backend ships in [`svg`].

pub mod palette;
pub mod polygon;
pub mod random;
pub mod scene;
pub mod svg;

pub use palette::{Color, ColorParseError, Palette};
pub use random::SeededRandom;
pub use scene::{
    Connector, DrawCommand, DrawTarget, Scene, Stroke, TextStyle, pick_polygon_nodes,
    render, render_with_random, repeat_connectors,
};
