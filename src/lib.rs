//! Procedural renderer for the droplet PWA icon.
//!
//! [`render::render_icon`] paints a single icon in memory; [`icon_gen::generate_icons`]
//! drives a full run that writes one PNG per configured size.

pub mod icon_gen;
pub mod manifest;
pub mod render;
pub mod shapes;
