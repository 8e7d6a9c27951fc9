#![allow(clippy::print_stdout)]

//! Headless replay: build a scene, feed it key codes, print the result.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use glam::{DMat3, DMat4};
use orbitcam::input::InputEvent;
use orbitcam::options::Options;
use orbitcam::Scene;

#[derive(Parser)]
#[command(
    name = "orbitcam",
    about = "Replay camera key presses and print the resulting matrices"
)]
struct Cli {
    /// TOML options file (defaults are used when omitted).
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Write the default options to this path and exit.
    #[arg(long, value_name = "PATH")]
    write_defaults: Option<PathBuf>,

    /// Print the JSON schema of the UI-exposed options and exit.
    #[arg(long)]
    schema: bool,

    /// Viewport size as WIDTHxHEIGHT, applied before the keys.
    #[arg(long, value_parser = parse_viewport)]
    viewport: Option<(u32, u32)>,

    /// Key codes to replay in order, e.g. `KeyW KeyD KeyQ`.
    keys: Vec<String>,
}

fn parse_viewport(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let w = w.parse().map_err(|e| format!("bad width: {e}"))?;
    let h = h.parse().map_err(|e| format!("bad height: {e}"))?;
    Ok((w, h))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())?;
        println!("{schema}");
        return Ok(());
    }

    if let Some(path) = &cli.write_defaults {
        Options::default()
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        return Ok(());
    }

    let options = match &cli.options {
        Some(path) => {
            Options::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Options::default(),
    };

    let (mut scene, mut input) = Scene::builder()
        .options(options)
        .input_from_options()
        .build()
        .context("building scene")?;

    let mut events = Vec::with_capacity(cli.keys.len() + 1);
    if let Some((width, height)) = cli.viewport {
        events.push(InputEvent::Resized { width, height });
    }
    events.extend(cli.keys.into_iter().map(|code| InputEvent::Key { code }));

    for event in events {
        let Some(command) = input.handle_event(event.clone()) else {
            log::warn!("no command for {event:?}");
            continue;
        };
        match scene.execute(command) {
            Ok(changed) => log::info!("{command:?} -> changed={changed}"),
            // Degenerate steps leave the scene as it was; keep replaying.
            Err(e) if e.is_degenerate() => log::warn!("{command:?}: {e}"),
            Err(e) => return Err(e.into()),
        }
    }

    report(&scene);
    Ok(())
}

fn report(scene: &Scene) {
    let camera = scene.camera();
    let t = scene.transforms();
    println!(
        "radius={} theta={} phi={} target={}",
        camera.radius(),
        camera.theta(),
        camera.phi(),
        camera.target()
    );
    println!("eye={}", camera.eye());
    print_mat4("view", &t.view);
    print_mat4("model_view", &t.model_view);
    print_mat4("mvp", &t.mvp);
    print_mat3("normal", &t.normal);
}

/// Rows of a column-major matrix, as it reads on paper.
fn print_mat4(name: &str, m: &DMat4) {
    println!("{name}:");
    for r in 0..4 {
        let row = m.row(r);
        println!("  [{:>10.5} {:>10.5} {:>10.5} {:>10.5}]", row.x, row.y, row.z, row.w);
    }
}

fn print_mat3(name: &str, m: &DMat3) {
    println!("{name}:");
    for r in 0..3 {
        let row = m.row(r);
        println!("  [{:>10.5} {:>10.5} {:>10.5}]", row.x, row.y, row.z);
    }
}
