use crate::manifest::{ManifestIcon, ManifestIcons, MANIFEST_FILE_NAME};
use crate::render::{render_icon, validate_size, Palette};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Sizes a PWA needs: the home screen icon and the splash/store icon
pub const DEFAULT_SIZES: [u32; 2] = [192, 512];

/// Everything a generation run needs, passed explicitly instead of globals
#[derive(Debug, Clone)]
pub struct IconConfig {
    pub sizes: Vec<u32>,
    pub output: PathBuf,
    pub palette: Palette,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            output: PathBuf::from("."),
            palette: Palette::default(),
        }
    }
}

/// File name used for the icon of the given size
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Render and write one PNG per configured size plus the manifest fragment.
///
/// Sizes are validated up front so an invalid size aborts the run before any
/// file is written.
pub fn generate_icons(config: &IconConfig) -> Result<()> {
    if config.sizes.is_empty() {
        anyhow::bail!("No icon sizes configured");
    }
    for &size in &config.sizes {
        validate_size(size)?;
    }

    create_dir_all(&config.output).context("Can't create output directory")?;

    let mut manifest = ManifestIcons::new();

    for &size in &config.sizes {
        println!("Generating {size}x{size} icon...");
        let icon = render_icon(size, &config.palette)?;

        let filename = icon_file_name(size);
        save_png(&icon, &config.output.join(&filename))?;
        println!("✓ Generated {filename}");

        manifest.add_icon(ManifestIcon::png(filename, size));
    }

    manifest.write_to(&config.output)?;
    println!("✓ Generated {MANIFEST_FILE_NAME}");

    println!("\nIcons generated successfully!");
    Ok(())
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    write_png(image.as_raw(), &mut out_file, image.width())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;

    Ok(())
}

// Encode square RGBA image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
