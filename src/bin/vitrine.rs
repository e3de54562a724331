use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "vitrine", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the background animation headlessly and write the last frame as a PNG.
    Frame(FrameArgs),
    /// Print the landing carousel layouts as JSON.
    Layout(LayoutArgs),
    /// Print the resolved asset configuration as JSON.
    Assets(AssetsArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Background variant.
    #[arg(long, value_enum, default_value_t = Variant::Landing)]
    variant: Variant,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Seed for spot placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Pointer position as `X,Y` (glow variant only).
    #[arg(long, value_parser = parse_point)]
    pointer: Option<vitrine::Point>,

    /// Frames to run after mounting.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Site configuration JSON; defaults plus environment otherwise.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for shuffles and slot sizes; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct AssetsArgs {
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Variant {
    /// Static grid, redrawn after debounced resizes.
    Landing,
    /// Grid plus cursor glow, redrawn every frame.
    Main,
}

#[derive(serde::Serialize)]
struct ResolvedAssets {
    base_url: String,
    gaming: Vec<String>,
    posters: Vec<String>,
    videos: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Assets(args) => cmd_assets(args),
    }
}

fn parse_point(s: &str) -> Result<vitrine::Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(vitrine::Point::new(x, y))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<vitrine::AssetConfig> {
    match path {
        Some(p) => vitrine::AssetConfig::load(p)
            .with_context(|| format!("load site config '{}'", p.display())),
        None => Ok(vitrine::AssetConfig::from_env()),
    }
}

/// Use the given seed, or draw one and report it on stderr so the run can be
/// repeated.
fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = vitrine::Rng64::entropy_seed();
            tracing::info!(seed, "no seed given; drew one from entropy");
            eprintln!("seed {seed}");
            seed
        }
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let viewport = vitrine::Viewport::new(args.width, args.height);
    let config = match args.variant {
        Variant::Landing => vitrine::BackgroundConfig::landing(),
        Variant::Main => vitrine::BackgroundConfig::main_view(),
    };

    let settings = vitrine::RenderSettings {
        clear_rgba: Some(vitrine::Theme::default().palette.background.to_rgba8()),
    };
    let backend = vitrine::create_backend(vitrine::BackendKind::Cpu, &settings)?;

    let mut host = vitrine::VirtualHost::new(viewport);
    let rng = vitrine::Rng64::new(resolve_seed(args.seed));
    let mut anim = vitrine::BackgroundAnimation::new(config, rng);
    if !anim.mount(&mut host, Some(backend)) {
        anyhow::bail!("background did not start");
    }

    if let Some(p) = args.pointer {
        for signal in host.pointer_move(p) {
            anim.dispatch(&mut host, &signal);
        }
    }
    for _ in 0..args.frames {
        for signal in host.next_frame() {
            anim.dispatch(&mut host, &signal);
        }
    }

    let frame = anim
        .last_frame()
        .cloned()
        .context("no frame was rendered")?;
    anim.unmount(&mut host);

    frame.write_png(&args.out)?;
    eprintln!(
        "wrote {} ({} spots, {} frames)",
        args.out.display(),
        anim.spots().len(),
        anim.frames_drawn()
    );
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut host = vitrine::VirtualHost::new(vitrine::Viewport::new(1280, 720));
    let seed = resolve_seed(args.seed);
    let mut app = vitrine::App::new(config, vitrine::Theme::default(), seed);
    app.mount(&mut host, None);

    let carousels = app
        .landing_carousels()
        .context("landing carousels were not laid out")?;
    println!("{}", serde_json::to_string_pretty(carousels)?);
    app.unmount(&mut host);
    Ok(())
}

fn cmd_assets(args: AssetsArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let resolved = ResolvedAssets {
        base_url: config.base_url.clone(),
        gaming: config.gaming_paths(),
        posters: config.poster_paths(),
        videos: config.videos(),
    };
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
