//! Draws the basics scene in a desktop window.
//!
//! Usage: `easel-demo [FONT_FILE...]`. Each font is registered under its
//! file stem; the first one is the default. Without fonts no text is drawn.

use std::path::Path;

use anyhow::Context;
use desktop_demo::{basics_scene, init_logging, HEIGHT, WIDTH};
use easel::AppLauncher;

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut launcher = AppLauncher::new()
        .with_title("Easel basics")
        .with_size(WIDTH, HEIGHT)
        .with_background("white");
    let fonts: Vec<String> = std::env::args().skip(1).collect();
    for path in &fonts {
        let bytes = std::fs::read(path).with_context(|| format!("reading font {path}"))?;
        let family = Path::new(path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(path)
            .to_lowercase();
        launcher = launcher.with_font(family, bytes);
    }
    if fonts.is_empty() {
        log::info!("no font files given, text is disabled");
    }

    let stats = launcher.run(basics_scene(!fonts.is_empty())?)?;
    log::info!("window closed after {} frames", stats.frames);
    Ok(())
}
