//! Replays an event script through an editor session and writes the final frame as SVG.
//!
//! ```text
//! cargo run --example plotters_editor --features plotters -- events.txt frame.svg [config.toml]
//! ```
//!
//! The script holds one event per line: `click X Y`, `undo` or `reset`.
//! Empty lines and lines starting with `#` are skipped.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use bezier_sketch::adapters::plotters::PlottersSurface;
use bezier_sketch::{CurveRenderer, EditorConfig, EditorSession, InputEvent};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let script = args.next().ok_or("usage: plotters_editor <events> [output.svg] [config.toml]")?;
    let output = args.next().unwrap_or_else(|| "bezier_sketch.svg".to_string());
    let config = match args.next() {
        Some(path) => EditorConfig::load_or_default(Path::new(&path)),
        None => EditorConfig::default(),
    };

    let mut session = EditorSession::new(config);
    for (number, line) in std::fs::read_to_string(&script)?.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<InputEvent>() {
            Ok(event) => {
                session.apply(event);
            }
            Err(e) => log::warn!("{}:{}: {}", script, number + 1, e),
        }
    }

    let (width, height) = (session.config().width, session.config().height);
    let root = SVGBackend::new(&output, (width, height)).into_drawing_area();
    let mut surface = PlottersSurface::new(&root, session.config().curve_steps);
    session.render(&CurveRenderer::default(), &mut surface)?;
    root.present()?;

    println!(
        "{} points, {} segments -> {}",
        session.store().len(),
        session.store().segment_count(),
        output
    );
    Ok(())
}
