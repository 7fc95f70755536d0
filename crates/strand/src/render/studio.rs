use super::{Palette, Scene, SvgRenderOptions, render, render_svg};
use strand_core::{Chain, Result, Sequence, build_chain};

#[derive(Debug, Clone)]
struct Generation {
    sequence: Sequence,
    chain: Chain,
}

/// Session state for an interactive front end: surface size, palette and the current chain.
///
/// A generation request either replaces the current sequence and chain together, or (on a
/// validation error) leaves them exactly as they were. Rendering never regenerates and always
/// yields the same scene for the same generation and palette.
#[derive(Debug, Clone)]
pub struct Studio {
    width: u32,
    height: u32,
    palette: Palette,
    current: Option<Generation>,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl Studio {
    /// Sequence shown before the user types anything.
    pub const DEFAULT_SEQUENCE: &'static str = "aiwertunoaapmoa";

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            palette: Palette::default(),
            current: None,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Takes effect on the next [`Studio::generate`]; the current chain keeps its surface.
    pub fn set_surface(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn surface(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn generate(&mut self, input: &str) -> Result<&Chain> {
        let sequence = Sequence::parse(input).inspect_err(|err| {
            tracing::debug!(%err, "rejected sequence; keeping previous chain");
        })?;
        let chain = build_chain(&sequence, self.width, self.height);
        let generation = self.current.insert(Generation { sequence, chain });
        Ok(&generation.chain)
    }

    pub fn chain(&self) -> Option<&Chain> {
        self.current.as_ref().map(|g| &g.chain)
    }

    pub fn sequence(&self) -> Option<&Sequence> {
        self.current.as_ref().map(|g| &g.sequence)
    }

    pub fn render(&self) -> Option<Scene> {
        let g = self.current.as_ref()?;
        Some(render(&g.chain, &g.sequence, &self.palette))
    }

    pub fn render_svg(&self, options: &SvgRenderOptions) -> Option<String> {
        self.render().map(|scene| render_svg(&scene, options))
    }
}
