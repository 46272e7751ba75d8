use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "photobooth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose captured photos into a themed collage PNG.
    Compose(ComposeArgs),
    /// Print the layout plan for a grid selection as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Number of photos (1-6).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    grid: u8,

    /// Frame style code (plain, genz, aesthetic, memphis, neon, sunburst, checker, wavy).
    #[arg(long, default_value = "plain")]
    style: String,

    /// Photo files in capture order; repeat once per photo.
    #[arg(long = "photo", required = true)]
    photos: Vec<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Compositor options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Memphis scatter seed; overrides config and environment.
    #[arg(long)]
    seed: Option<u64>,

    /// Also write transmission metadata JSON here.
    #[arg(long)]
    meta: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Number of photos (1-6).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    grid: u8,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photobooth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn load_opts(path: Option<&Path>, seed: Option<u64>) -> anyhow::Result<photobooth::CompositorOpts> {
    let mut opts = match path {
        Some(p) => photobooth::CompositorOpts::from_path(p)?,
        None => photobooth::CompositorOpts::default(),
    }
    .with_env_overrides();
    if seed.is_some() {
        opts.seed = seed;
    }
    Ok(opts)
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let grid = photobooth::GridSelection::new(args.grid)?;
    let style = photobooth::FrameStyle::from_code(&args.style);
    if style.code() != args.style {
        tracing::warn!(requested = %args.style, "unknown style, using plain");
    }

    let photos = args
        .photos
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let bytes =
                std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
            Ok(photobooth::PhotoCapture::encoded(i as u64, bytes))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let opts = load_opts(args.config.as_deref(), args.seed)?;
    let compositor = photobooth::Compositor::new(opts);
    let image = compositor
        .compose(&photos, grid, style)
        .with_context(|| format!("compose grid {grid} with style '{style}'"))?;

    std::fs::write(&args.out, image.png_bytes())
        .with_context(|| format!("write composite '{}'", args.out.display()))?;
    if let Some(meta_path) = &args.meta {
        let json = serde_json::to_vec_pretty(&image.meta())?;
        std::fs::write(meta_path, json)
            .with_context(|| format!("write metadata '{}'", meta_path.display()))?;
    }

    let (w, h) = image.dimensions();
    println!(
        "wrote {} ({w}x{h}, {} bytes, fingerprint {:016x})",
        args.out.display(),
        image.png_bytes().len(),
        image.fingerprint()
    );
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let plan = photobooth::resolve(photobooth::GridSelection::new(args.grid)?);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
