//! Font candidate resolution.
//!
//! The composer never probes the filesystem on its own: it receives a
//! [`FontStack`] — an ordered list of candidate sources — and resolves it
//! once into an immutable [`ResolvedFonts`] value that every text pass
//! shares. A candidate that is missing or fails to parse is skipped without
//! escalating; one resolved face serves both point sizes.

use std::{path::PathBuf, sync::Arc};

/// Embedded fallback face: DejaVu Sans, redistributed under the Bitstream
/// Vera license (see `assets/fonts/LICENSE-DejaVu.txt`). Terminal candidate
/// of the default stack, so text renders even on a machine with no font
/// catalog at all.
static BUILTIN_SANS: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// One place a usable font might come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// A font file at a fixed path (TTF or TTC).
    File(PathBuf),
    /// Whatever sans-serif face the system font catalog offers.
    SystemSansSerif,
    /// The face compiled into the binary. Never fails to resolve.
    Builtin,
}

/// Ordered candidate list, first usable source wins.
#[derive(Clone, Debug, Default)]
pub struct FontStack {
    candidates: Vec<FontSource>,
}

/// Raw bytes of a resolved face plus its index within a collection file.
#[derive(Clone, Debug)]
pub struct FontHandle {
    pub bytes: Arc<Vec<u8>>,
    pub index: u32,
}

/// Outcome of resolving a [`FontStack`]. `face` is `None` only for custom
/// stacks whose every candidate failed (the default stack ends in
/// [`FontSource::Builtin`] and cannot exhaust); text passes are then skipped
/// entirely.
#[derive(Clone, Debug, Default)]
pub struct ResolvedFonts {
    face: Option<FontHandle>,
}

impl ResolvedFonts {
    pub fn face(&self) -> Option<&FontHandle> {
        self.face.as_ref()
    }
}

impl FontStack {
    pub fn new(candidates: Vec<FontSource>) -> Self {
        Self { candidates }
    }

    /// The fixed probe order used for DMG backgrounds: the well-known macOS
    /// font locations, then the system sans-serif catalog, then the embedded
    /// face as the built-in default.
    pub fn default_macos() -> Self {
        Self::new(vec![
            FontSource::File(PathBuf::from("/System/Library/Fonts/Helvetica.ttc")),
            FontSource::File(PathBuf::from("/System/Library/Fonts/Arial.ttf")),
            FontSource::File(PathBuf::from("/Library/Fonts/Arial.ttf")),
            FontSource::SystemSansSerif,
            FontSource::Builtin,
        ])
    }

    /// Resolve the stack. Deterministic for a fixed filesystem state; never
    /// fails — exhaustion is reported by an empty [`ResolvedFonts`].
    pub fn resolve(&self) -> ResolvedFonts {
        for candidate in &self.candidates {
            match candidate {
                FontSource::File(path) => {
                    let bytes = match std::fs::read(path) {
                        Ok(bytes) => bytes,
                        Err(err) => {
                            tracing::debug!(path = %path.display(), %err, "skipping font candidate");
                            continue;
                        }
                    };
                    if !parses_as_font(&bytes) {
                        tracing::debug!(path = %path.display(), "candidate is not a parsable font");
                        continue;
                    }
                    tracing::debug!(path = %path.display(), "resolved font candidate");
                    return ResolvedFonts {
                        face: Some(FontHandle {
                            bytes: Arc::new(bytes),
                            index: 0,
                        }),
                    };
                }
                FontSource::SystemSansSerif => {
                    if let Some(handle) = system_sans_serif() {
                        tracing::debug!("resolved system sans-serif fallback");
                        return ResolvedFonts { face: Some(handle) };
                    }
                    tracing::debug!("system font catalog has no sans-serif face");
                }
                FontSource::Builtin => {
                    tracing::debug!("resolved embedded fallback face");
                    return ResolvedFonts {
                        face: Some(FontHandle {
                            bytes: Arc::new(BUILTIN_SANS.to_vec()),
                            index: 0,
                        }),
                    };
                }
            }
        }

        tracing::warn!("no font candidate resolved; text layers will be skipped");
        ResolvedFonts::default()
    }
}

fn parses_as_font(bytes: &[u8]) -> bool {
    let mut db = fontdb::Database::new();
    db.load_font_data(bytes.to_vec());
    db.faces().next().is_some()
}

fn system_sans_serif() -> Option<FontHandle> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let id = db.query(&fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    })?;
    db.with_face_data(id, |data, index| FontHandle {
        bytes: Arc::new(data.to_vec()),
        index,
    })
}
