use anyhow::{Context, Result};
use droplet_icon::render::{corner_radius, droplet_outline};
use image::io::Reader as ImageReader;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icon-512.png".to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open image {path}"))?
        .decode()
        .context("Failed to decode image")?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    println!("Checking droplet icon in: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    if width != height {
        anyhow::bail!("Icon must be square, got {}x{}", width, height);
    }

    let size = width;
    let radius = corner_radius(size);
    println!("Corner radius: {}", radius);

    // The outermost corner pixels are cut away whenever the radius is non-zero
    let last = size - 1;
    let corners = [(0, 0), (last, 0), (0, last), (last, last)];
    let transparent_corners = corners
        .iter()
        .filter(|&&(x, y)| rgba_img.get_pixel(x, y)[3] == 0)
        .count();

    println!("\nBackground analysis:");
    println!("  {} of 4 corner pixels are transparent", transparent_corners);

    let top_center = rgba_img.get_pixel(size / 2, 0);
    println!(
        "  Top edge center RGBA: [{}, {}, {}, {}]",
        top_center[0], top_center[1], top_center[2], top_center[3]
    );

    // Sample the middle of the droplet, halfway between apex and lobe bottom
    let droplet_pixel = droplet_outline(size)
        .bounds()
        .map(|(min, max)| rgba_img.get_pixel(size / 2, ((min.y + max.y) / 2.0) as u32));

    println!("\nDroplet analysis:");
    match droplet_pixel {
        Some(pixel) => println!(
            "  Center pixel RGBA: [{}, {}, {}, {}]",
            pixel[0], pixel[1], pixel[2], pixel[3]
        ),
        None => println!("  Droplet outline is empty"),
    }

    let corners_ok = radius == 0 || transparent_corners == 4;
    let background_ok = top_center[3] == 255;
    let droplet_ok = droplet_pixel.is_some_and(|p| p[3] > 0 && p[3] < 255 && p[0] == 255);

    if corners_ok && background_ok && droplet_ok {
        println!("✓ Icon layers look correct!");
    } else {
        println!("⚠ Icon may not be rendered correctly");
    }

    Ok(())
}
