use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use scrollmotion::{
    ExpandFrame, ExpandStyles, GeometryConfig, ScrollProgressAnimator, StartSize, Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "scrollmotion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the frame for a single progress value as JSON.
    Frame(FrameArgs),
    /// Print evenly spaced frames across the whole scroll range as a JSON array.
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
struct GeometryArgs {
    /// Geometry config JSON.
    #[arg(long, conflicts_with = "viewport")]
    config: Option<PathBuf>,

    /// Viewport as WIDTHxHEIGHT; the start size is derived from it.
    #[arg(long)]
    viewport: Option<Viewport>,

    /// Start width override (with --viewport).
    #[arg(long, requires = "viewport")]
    start_width: Option<f64>,

    /// Start height override (with --viewport).
    #[arg(long, requires = "viewport")]
    start_height: Option<f64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    geometry: GeometryArgs,

    /// Scroll progress; values outside [0, 1] are clamped.
    #[arg(long, allow_hyphen_values = true)]
    progress: f64,

    /// Print the CSS projection instead of raw geometry.
    #[arg(long)]
    css: bool,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    geometry: GeometryArgs,

    /// Number of intervals; steps + 1 frames are printed.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_config_json(path: &Path) -> anyhow::Result<GeometryConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg: GeometryConfig =
        serde_json::from_reader(r).with_context(|| "parse geometry config JSON")?;
    Ok(cfg)
}

fn build_animator(args: &GeometryArgs) -> anyhow::Result<ScrollProgressAnimator> {
    let cfg = match (&args.config, args.viewport) {
        (Some(path), _) => read_config_json(path)?,
        (None, Some(viewport)) => {
            let overrides = StartSize {
                width: args.start_width,
                height: args.start_height,
            };
            GeometryConfig::for_viewport(viewport, overrides)?
        }
        (None, None) => anyhow::bail!("either --config or --viewport is required"),
    };
    Ok(ScrollProgressAnimator::new(cfg)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let animator = build_animator(&args.geometry)?;
    let frame = animator.frame(args.progress);

    let mut out = std::io::stdout().lock();
    let written = if args.css {
        serde_json::to_writer_pretty(&mut out, &ExpandStyles::from_frame(&frame))
    } else {
        serde_json::to_writer_pretty(&mut out, &frame)
    };
    written.with_context(|| "write frame JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("--steps must be > 0");
    }
    let animator = build_animator(&args.geometry)?;
    let frames: Vec<ExpandFrame> = (0..=args.steps)
        .map(|i| animator.frame(f64::from(i) / f64::from(args.steps)))
        .collect();

    tracing::debug!(count = frames.len(), "sampled frames");

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &frames).with_context(|| "write frames JSON")?;
    writeln!(out)?;
    Ok(())
}
