//! rayline CLI - trace 2D ray-casting scenes from the terminal.
//!
//! Loads declarative scene documents, traces them against the kernel,
//! and exports SVG renderings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use rayline::{Scene, Segment, Vec2};
use rayline_ir::{BoundaryDoc, SceneDoc, SourceDoc};

mod svg;

#[derive(Parser)]
#[command(name = "rayline")]
#[command(about = "2D ray-casting scene tracer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace a scene and render it to SVG
    Render {
        /// Input scene document (.json)
        input: PathBuf,
        /// Output SVG file
        output: PathBuf,
        /// Override the first ray source position, as `x,y`
        #[arg(long)]
        pos: Option<String>,
        /// Draw a marker circle at every resolved hit point
        #[arg(long)]
        hit_points: bool,
    },
    /// Display information about a scene document
    Info {
        /// Path to the scene document
        file: PathBuf,
    },
    /// Write a sample scene document
    Sample {
        /// Output scene document (.json)
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            pos,
            hit_points,
        } => render(&input, &output, pos.as_deref(), hit_points),
        Commands::Info { file } => show_info(&file),
        Commands::Sample { output } => write_sample(&output),
    }
}

fn load_doc(path: &PathBuf) -> Result<SceneDoc> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading scene document {}", path.display()))?;
    SceneDoc::from_json(&json).with_context(|| format!("parsing {}", path.display()))
}

/// Build a live scene from a document: frame rectangle from the
/// dimensions, then obstacles and ray sources in document order.
fn build_scene(doc: &SceneDoc) -> Scene {
    let mut scene = Scene::new(doc.width, doc.height);
    for b in &doc.boundaries {
        scene.add_boundary(Segment::from_coords(b.x1, b.y1, b.x2, b.y2));
    }
    for s in &doc.sources {
        scene.add_ray_source(Vec2::new(s.x, s.y), s.rays as usize);
    }
    scene
}

fn parse_pos(s: &str) -> Result<Vec2> {
    let (x, y) = s
        .split_once(',')
        .context("expected position as `x,y`")?;
    Ok(Vec2::new(
        x.trim().parse().context("invalid x coordinate")?,
        y.trim().parse().context("invalid y coordinate")?,
    ))
}

fn render(input: &PathBuf, output: &PathBuf, pos: Option<&str>, hit_points: bool) -> Result<()> {
    let doc = load_doc(input)?;
    let mut scene = build_scene(&doc);

    // The pointer analogue: reposition the first source before tracing.
    if let Some(pos) = pos {
        let pos = parse_pos(pos)?;
        scene.move_ray_source(0, pos)?;
    }

    let traces = scene.trace();
    let svg = svg::render_svg(&doc, &scene, &traces, hit_points);
    fs::write(output, svg).with_context(|| format!("writing {}", output.display()))?;

    let resolved: usize = traces
        .iter()
        .flatten()
        .filter(|r| r.hit.is_some())
        .count();
    println!(
        "Rendered {} of {} rays to {}",
        resolved,
        traces.iter().map(Vec::len).sum::<usize>(),
        output.display()
    );
    Ok(())
}

fn show_info(file: &PathBuf) -> Result<()> {
    let doc = load_doc(file)?;
    println!("Frame: {} x {}", doc.width, doc.height);
    println!("Obstacles: {} (+4 frame segments)", doc.boundaries.len());
    println!("Sources: {}", doc.sources.len());
    for (i, s) in doc.sources.iter().enumerate() {
        println!("  [{}] ({}, {}) with {} rays", i, s.x, s.y, s.rays);
    }
    let total: u32 = doc.sources.iter().map(|s| s.rays).sum();
    println!("Total rays per frame: {}", total);
    Ok(())
}

fn write_sample(output: &PathBuf) -> Result<()> {
    let mut doc = SceneDoc::new(640.0, 480.0);
    doc.boundaries.push(BoundaryDoc::new(10.0, 100.0, 350.0, 200.0));
    doc.boundaries.push(BoundaryDoc {
        stroke: Some("#4db8ff".to_string()),
        ..BoundaryDoc::new(420.0, 60.0, 560.0, 300.0)
    });
    doc.boundaries.push(BoundaryDoc::new(120.0, 380.0, 480.0, 420.0));
    doc.sources.push(SourceDoc {
        x: 320.0,
        y: 240.0,
        rays: 360,
    });

    let json = doc.to_json()?;
    fs::write(output, json).with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote sample scene to {}", output.display());
    Ok(())
}
