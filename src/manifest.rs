//! Web app manifest `icons` fragment
//!
//! Describes the generated PNG files in the shape a PWA `manifest.json`
//! expects, so the block can be pasted into an existing manifest.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// File name the fragment is written to inside the output directory
pub const MANIFEST_FILE_NAME: &str = "manifest-icons.json";

/// Root of the fragment: just the `icons` array of a web app manifest
#[derive(Serialize, Debug, Clone, Default)]
pub struct ManifestIcons {
    pub icons: Vec<ManifestIcon>,
}

/// One entry of the manifest `icons` array
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ManifestIcon {
    /// Path of the image relative to the manifest
    pub src: String,

    /// Space separated pixel sizes (e.g. "192x192")
    pub sizes: String,

    /// MIME type of the image
    #[serde(rename = "type")]
    pub mime_type: String,

    /// How the platform may use the icon (e.g. "any", "maskable")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl ManifestIcons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_icon(&mut self, icon: ManifestIcon) {
        self.icons.push(icon);
    }

    /// Serialize the fragment as pretty JSON into `dir`
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize manifest icons")?;

        std::fs::write(dir.join(MANIFEST_FILE_NAME), json)
            .with_context(|| format!("Failed to write {MANIFEST_FILE_NAME}"))?;

        Ok(())
    }
}

impl ManifestIcon {
    /// Entry for a square PNG of `size` pixels
    pub fn png(src: String, size: u32) -> Self {
        Self {
            src,
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
            purpose: Some("any".to_string()),
        }
    }

    pub fn with_purpose(mut self, purpose: String) -> Self {
        self.purpose = Some(purpose);
        self
    }
}
