//! galaxy-runner: headless driver for the Multiverse viewer.
//!
//! Usage:
//!   galaxy-runner render  --x 450 --y -450 [--pointer-x 24 --pointer-y 24]
//!   galaxy-runner inspect --seed-x 3 --seed-y -7
//!   galaxy-runner survey  --seed-x 0 --seed-y 0 --width 400 --height 250
//!   galaxy-runner fly     --script "RRRRDDDD" [--json]
//!
//! Every subcommand accepts --config <file.json> or --preset <name>.

mod ascii;

use anyhow::{bail, Result};
use ascii::AsciiCanvas;
use multiverse_core::{
    input::{InputSnapshot, ScriptedInput},
    render::RecordingTarget,
    types::GridCoordinate,
    CameraState, GalaxyConfig, ViewerState,
};
use std::env;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("render");
    let config = load_config(&args)?;

    match command {
        "render" => cmd_render(&args, config),
        "inspect" => cmd_inspect(&args, config),
        "survey" => cmd_survey(&args, config),
        "fly" => cmd_fly(&args, config),
        other => bail!("unknown command '{other}' (expected render | inspect | survey | fly)"),
    }
}

fn load_config(args: &[String]) -> Result<GalaxyConfig> {
    if let Some(path) = string_arg(args, "--config") {
        return Ok(GalaxyConfig::load(path)?);
    }
    let preset = string_arg(args, "--preset").unwrap_or("classic");
    Ok(GalaxyConfig::preset(preset)?)
}

/// Draw a single frame at the requested camera position.
fn cmd_render(args: &[String], config: GalaxyConfig) -> Result<()> {
    let camera = CameraState::new(parse_arg(args, "--x", 0.0), parse_arg(args, "--y", 0.0));
    let pointer = (parse_arg(args, "--pointer-x", -1e9), parse_arg(args, "--pointer-y", -1e9));

    let mut state = ViewerState::new(config)?;
    state.viewport.camera = camera;

    let v = &state.config.viewport;
    let mut canvas = AsciiCanvas::new(io::stdout(), v.window_width, v.window_height, v.grid_size);
    let input = InputSnapshot::idle().with_pointer(pointer.0, pointer.1);
    let summary = multiverse_core::render_once(&mut state, &input, &mut canvas)?;

    if let Some(name) = &summary.hovered {
        println!("hovering: {name}");
    }
    println!(
        "bodies: {}  life-bearing: {}  cells: {}",
        summary.bodies_drawn, summary.life_bearing, summary.cells_scanned
    );
    Ok(())
}

/// Print one cell's body as JSON.
fn cmd_inspect(args: &[String], config: GalaxyConfig) -> Result<()> {
    let state = ViewerState::new(config)?;
    let record = state
        .generator
        .generate(parse_arg(args, "--seed-x", 0i64), parse_arg(args, "--seed-y", 0i64));
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Count bodies over a block and compare with the configured density.
fn cmd_survey(args: &[String], config: GalaxyConfig) -> Result<()> {
    let state = ViewerState::new(config)?;
    let origin = GridCoordinate::new(parse_arg(args, "--seed-x", 0i64), parse_arg(args, "--seed-y", 0i64));
    let width = parse_arg(args, "--width", 400u32);
    let height = parse_arg(args, "--height", 250u32);

    let survey = state.generator.survey(origin, width, height);
    let expected = state.generator.config().density;

    println!("=== SURVEY ===");
    println!("  origin:       ({}, {})", origin.seed_x, origin.seed_y);
    println!("  block:        {width} x {height}");
    println!("  cells:        {}", survey.cells);
    println!("  bodies:       {}", survey.bodies);
    println!("  life-bearing: {}", survey.life_bearing);
    println!("  density:      {:.4} (configured {expected:.4})", survey.density());
    Ok(())
}

/// Replay a flight script, printing one summary per frame.
fn cmd_fly(args: &[String], config: GalaxyConfig) -> Result<()> {
    let script = string_arg(args, "--script").unwrap_or("RRRRRRRRDDDDDDDD");
    let json = args.iter().any(|a| a == "--json");
    let pointer = (parse_arg(args, "--pointer-x", -1e9), parse_arg(args, "--pointer-y", -1e9));

    let mut state = ViewerState::new(config)?;
    let mut input = ScriptedInput::parse(script, pointer);
    let mut target = RecordingTarget::new();

    let mut lines = Vec::new();
    let run = multiverse_core::run(&mut state, &mut input, &mut target, |frame| {
        lines.push(if json {
            serde_json::to_string(frame).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
        } else {
            format!(
                "frame {:>4}  camera ({:>7.1},{:>7.1})  sector ({},{})  bodies {:>3}  life {}  {}",
                frame.frame,
                frame.camera.x,
                frame.camera.y,
                frame.sector.0,
                frame.sector.1,
                frame.bodies_drawn,
                frame.life_bearing,
                frame.hovered.as_deref().unwrap_or("-"),
            )
        });
    })?;

    for line in &lines {
        println!("{line}");
    }
    if !json {
        println!();
        println!("=== FLIGHT SUMMARY ===");
        println!("  frames:       {}", run.frames);
        println!("  final camera: ({:.1}, {:.1})", run.final_camera.x, run.final_camera.y);
        println!("  bodies drawn: {}", run.bodies_drawn);
        println!("  location:     {}", state.sector_label().replace('\n', "  "));
    }
    Ok(())
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
