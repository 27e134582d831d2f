//! dmg-backdrop procedurally renders the static PNG used as the background
//! artwork of a macOS disk-image installer window: a vertical gradient, a
//! centered title and instruction line, a directional arrow, a cat
//! silhouette, and a version label.
//!
//! The pipeline is linear and one-shot:
//!
//! - Resolve a [`FontStack`] once into immutable handles
//! - Build a [`BackgroundComposer`] for a [`Canvas`]
//! - [`compose`](BackgroundComposer::compose) the layered frame
//! - Persist it with [`encode::write_png`]
#![forbid(unsafe_code)]

pub mod compose;
pub mod core;
pub mod encode;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod text;
pub mod theme;

pub use compose::BackgroundComposer;
pub use core::{Canvas, FrameRgb8, Rgb8};
pub use error::{BackdropError, BackdropResult};
pub use fonts::{FontHandle, FontSource, FontStack, ResolvedFonts};
pub use layout::LayoutSpec;
