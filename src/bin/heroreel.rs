use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "heroreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a hero config.
    Validate(ValidateArgs),
    /// Drive a hero at a fixed frame rate and print views and events as JSON lines.
    Simulate(SimulateArgs),
    /// Print the frame clip-path and border-radius at evenly spaced scroll progress.
    Morph(MorphArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Hero config JSON.
    #[arg(long)]
    config: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Hero config JSON (stock config when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame rate, `60` or `30000/1001`.
    #[arg(long, default_value = "60")]
    fps: heroreel::Fps,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Viewport size as `WIDTHxHEIGHT`.
    #[arg(long, default_value = "1280x720", value_parser = parse_viewport)]
    viewport: heroreel::Size,

    /// Frame at which the pointer enters the preview.
    #[arg(long)]
    hover: Option<u64>,

    /// Frames at which the preview is clicked.
    #[arg(long = "click")]
    clicks: Vec<u64>,

    /// Frames at which the current main clip reports its initial load.
    #[arg(long = "loaded")]
    loaded: Vec<u64>,

    /// Print a view every N frames.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,
}

#[derive(Parser, Debug)]
struct MorphArgs {
    /// Hero config JSON (stock config when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of progress intervals.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    steps: u32,

    /// Apply the configured ease to progress.
    #[arg(long)]
    eased: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Morph(args) => cmd_morph(args),
    }
}

fn parse_viewport(s: &str) -> Result<heroreel::Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(heroreel::Size::new(w, h))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<heroreel::HeroConfig> {
    let cfg = match path {
        Some(p) => heroreel::HeroConfig::from_path(p)
            .with_context(|| format!("load hero config '{}'", p.display()))?,
        None => heroreel::HeroConfig::default(),
    };
    cfg.validate().with_context(|| "validate hero config")?;
    Ok(cfg)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let cfg = load_config(Some(&args.config))?;
    println!(
        "ok: {} clips, transition {}s ({:?}), morph {} -> {}",
        cfg.playlist.len(),
        cfg.transition.duration_secs,
        cfg.transition.ease,
        cfg.morph.region.start,
        cfg.morph.region.end,
    );
    for clip in cfg.playlist.iter() {
        println!("  {} {} (poster {})", clip.id, clip.source, clip.poster);
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let mut hero = heroreel::Hero::new(cfg, args.viewport)?;
    let dt = args.fps.frame_duration();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for f in 0..args.frames {
        if args.hover == Some(f) {
            hero.pointer_entered_preview();
        }
        if args.loaded.contains(&f) {
            hero.main_media_loaded();
        }
        if args.clicks.contains(&f) && !hero.preview_clicked() {
            tracing::info!(frame = f, "click ignored");
        }
        hero.tick(dt);

        let frame = heroreel::FrameIndex(f);
        for event in hero.drain_events() {
            let line = serde_json::json!({ "frame": frame, "event": event });
            writeln!(out, "{line}").with_context(|| "write event")?;
        }
        if f % args.every == 0 {
            let line = serde_json::json!({ "frame": frame, "view": hero.view() });
            writeln!(out, "{line}").with_context(|| "write view")?;
        }
    }
    Ok(())
}

fn cmd_morph(args: MorphArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let morph = heroreel::ScrollMorph::new(cfg.morph)?;
    for i in 0..=args.steps {
        let p = f64::from(i) / f64::from(args.steps);
        let shape = if args.eased {
            morph.sample(p)
        } else {
            morph.update(p)
        };
        println!(
            "{p:.3}\tclip-path: {};\tborder-radius: {};",
            shape.clip_path_css(),
            shape.border_radius_css()
        );
    }
    Ok(())
}
