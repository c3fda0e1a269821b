//! Font resource used for the score text
//!
//! The crate never rasterizes glyphs itself; it only checks that the file is a
//! font container and passes the font's name and size to whatever canvas
//! draws text. A font that fails to load is fatal at startup.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Magic numbers of the font containers we accept
const FONT_SIGNATURES: [&[u8; 4]; 5] = [
    b"\x00\x01\x00\x00", // TrueType
    b"true",             // Apple TrueType
    b"OTTO",             // OpenType/CFF
    b"ttcf",             // Collection
    b"wOFF",             // WOFF
];

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Failed to read font {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a TrueType/OpenType/WOFF font: {path:?}")]
    Unrecognized { path: PathBuf },

    #[error("Invalid font size {0}")]
    InvalidSize(f64),
}

/// A loaded font at a fixed point size
#[derive(Debug, Clone)]
pub struct Font {
    /// File stem, used to label text draws
    pub name: String,
    pub size: f64,
}

impl Font {
    /// Load a font file from disk
    pub fn load(path: impl AsRef<Path>, size: f64) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Self::from_bytes(path, &data, size)?;
        log::info!(
            "Loaded font '{}' ({} bytes) at {}pt",
            font.name,
            data.len(),
            font.size
        );
        Ok(font)
    }

    /// Check font bytes that are already in memory
    pub fn from_bytes(path: impl AsRef<Path>, data: &[u8], size: f64) -> Result<Self, FontError> {
        let path = path.as_ref();
        if !(size.is_finite() && size > 0.0) {
            return Err(FontError::InvalidSize(size));
        }
        let recognized = data.len() >= 4 && FONT_SIGNATURES.iter().any(|sig| data[..4] == sig[..]);
        if !recognized {
            return Err(FontError::Unrecognized {
                path: path.to_path_buf(),
            });
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "font".to_string());
        Ok(Self { name, size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn otf_bytes() -> Vec<u8> {
        let mut data = b"OTTO".to_vec();
        data.extend_from_slice(&[0; 12]);
        data
    }

    #[test]
    fn test_from_bytes_accepts_known_signatures() {
        let font = Font::from_bytes("data/fonts/default.otf", &otf_bytes(), 16.0).unwrap();
        assert_eq!(font.name, "default");
        assert_eq!(font.size, 16.0);

        let ttf = Font::from_bytes("mono.ttf", &[0, 1, 0, 0, 9, 9], 12.0).unwrap();
        assert_eq!(ttf.name, "mono");
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = Font::from_bytes("notes.txt", b"hello world", 16.0).unwrap_err();
        assert!(matches!(err, FontError::Unrecognized { .. }));

        let err = Font::from_bytes("tiny.otf", b"OT", 16.0).unwrap_err();
        assert!(matches!(err, FontError::Unrecognized { .. }));
    }

    #[test]
    fn test_from_bytes_rejects_bad_size() {
        let err = Font::from_bytes("default.otf", &otf_bytes(), 0.0).unwrap_err();
        assert!(matches!(err, FontError::InvalidSize(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Font::load("/definitely/not/here/default.otf", 16.0).unwrap_err();
        assert!(matches!(err, FontError::Io { .. }));
        assert!(err.to_string().contains("default.otf"));

        // The io error is the source, not part of the message
        let source = std::error::Error::source(&err).unwrap();
        assert!(!err.to_string().contains(&source.to_string()));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("brick_pong_font_{}.otf", std::process::id()));
        std::fs::write(&path, otf_bytes()).unwrap();
        let font = Font::load(&path, 16.0).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(font.name, format!("brick_pong_font_{}", std::process::id()));
        assert_eq!(font.size, 16.0);
    }
}
