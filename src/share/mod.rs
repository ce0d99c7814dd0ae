//! Sharing a color: build a payload (text, link, rendered image) and hand it
//! to a share target.

mod render;

pub use render::{encode_png, render_share_image};

use crate::color::Color;
use crate::config::ShareConfig;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
    /// PNG bytes, when rendering succeeded.
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Written to disk at this path.
    Saved(PathBuf),
}

pub trait ShareSheet: Send + Sync {
    fn share(&self, payload: &SharePayload) -> anyhow::Result<ShareOutcome>;
}

/// Desktop share target: drops the rendered image into a directory.
pub struct FileShareSheet {
    dir: PathBuf,
}

impl FileShareSheet {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ShareSheet for FileShareSheet {
    fn share(&self, payload: &SharePayload) -> anyhow::Result<ShareOutcome> {
        let png = payload
            .image
            .as_deref()
            .context("no image to share")?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create dir {}", self.dir.display()))?;

        let stamp = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
        let path = self.dir.join(format!("color-{stamp}.png"));
        std::fs::write(&path, png).with_context(|| format!("write {}", path.display()))?;

        // Keep the text and link next to the image so the share is complete.
        let note = path.with_extension("txt");
        std::fs::write(&note, format!("{}\n{}\n{}\n", payload.title, payload.text, payload.url))
            .with_context(|| format!("write {}", note.display()))?;

        info!(path = %path.display(), "share image saved");
        Ok(ShareOutcome::Saved(path))
    }
}

pub fn share_url(base_url: &str, color: &str) -> String {
    format!("{base_url}?color={}", urlencoding::encode(color))
}

/// Build the payload for `color`. An unparseable color or a failed encode
/// only drops the image; text and link are always present.
pub fn build_payload(color: &str, title: &str, cfg: &ShareConfig) -> SharePayload {
    let image = match Color::parse(color) {
        Ok(c) => match encode_png(&render_share_image(&c, color, cfg.image_size)) {
            Ok(png) => Some(png),
            Err(e) => {
                warn!("share image skipped: {e:#}");
                None
            }
        },
        Err(e) => {
            warn!(color, "share image skipped: {e}");
            None
        }
    };

    SharePayload {
        title: title.to_string(),
        text: format!("Check out this color: {color}"),
        url: share_url(&cfg.base_url, color),
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ShareConfig {
        ShareConfig {
            base_url: "https://swatchbox.dev/".to_string(),
            image_size: 64,
        }
    }

    #[test]
    fn test_payload_fields() {
        let p = build_payload("#3B82F6", "Share Color", &cfg());
        assert_eq!(p.title, "Share Color");
        assert_eq!(p.text, "Check out this color: #3B82F6");
        assert_eq!(p.url, "https://swatchbox.dev/?color=%233B82F6");
        assert!(p.image.is_some());
    }

    #[test]
    fn test_invalid_color_has_no_image() {
        let p = build_payload("nope", "Share Color", &cfg());
        assert!(p.image.is_none());
        assert_eq!(p.text, "Check out this color: nope");
    }

    #[test]
    fn test_file_share_sheet_writes_png_and_note() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = FileShareSheet::new(dir.path().join("shares"));
        let p = build_payload("#FF0000", "Share Color", &cfg());

        let ShareOutcome::Saved(path) = sheet.share(&p).unwrap();
        assert!(path.starts_with(sheet.dir()));
        assert_eq!(&std::fs::read(&path).unwrap()[..4], b"\x89PNG");
        let note = std::fs::read_to_string(path.with_extension("txt")).unwrap();
        assert!(note.contains("Check out this color: #FF0000"));
    }

    #[test]
    fn test_file_share_sheet_without_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = FileShareSheet::new(dir.path());
        let p = build_payload("nope", "Share Color", &cfg());
        assert!(sheet.share(&p).is_err());
    }
}
