//! Record renderers.
//!
//! Renderers are pure projections of the decoded record stream: they never
//! look at raw bytes. Effect parameter references are resolved through the
//! `ParameterStore` handed in by the caller, which reflects the decoder
//! state at the time the record was produced.

pub mod scale;
mod sdl;
mod text;

pub use sdl::SdlRenderer;
pub use text::TextRenderer;

use crate::{ParameterStore, Record};

/// Turns one record into zero or more output lines.
pub trait Renderer {
    fn render(&self, record: &Record, params: &ParameterStore) -> Vec<String>;
}

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Sdl,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Text => Box::new(TextRenderer::new()),
            Self::Sdl => Box::new(SdlRenderer::new()),
        }
    }
}

/// Timestamp as printed in every output header (two decimals).
pub(crate) fn format_timestamp(timestamp: f64) -> String {
    format!("{timestamp:.2}")
}
