#![forbid(unsafe_code)]

//! `strand` turns a letter sequence into a deterministic chain and draws it.
//!
//! # Features
//!
//! - `render`: enable scene building + SVG output (`strand::render`)
//! - `raster`: enable PNG/JPG/PDF output via pure-Rust SVG rasterization/conversion

pub use strand_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use strand_render::svg::{SvgRenderOptions, render_svg, sanitize_svg_id};
    pub use strand_render::{
        Color, ColorParseError, Connector, DrawCommand, DrawTarget, Palette, Scene, SeededRandom,
        Stroke, TextStyle, pick_polygon_nodes, render, render_with_random, repeat_connectors,
    };

    #[cfg(feature = "raster")]
    pub mod raster;

    mod studio;
    pub use studio::Studio;

    use strand_core::{Result, Sequence, build_chain};

    /// Validates `input`, builds its chain and renders it in one step.
    pub fn render_scene_sync(
        input: &str,
        width: u32,
        height: u32,
        palette: &Palette,
    ) -> Result<Scene> {
        let sequence = Sequence::parse(input)?;
        let chain = build_chain(&sequence, width, height);
        Ok(render(&chain, &sequence, palette))
    }

    /// Synchronous SVG render helper.
    pub fn render_svg_sync(
        input: &str,
        width: u32,
        height: u32,
        palette: &Palette,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let scene = render_scene_sync(input, width, height, palette)?;
        Ok(render_svg(&scene, svg_options))
    }
}
