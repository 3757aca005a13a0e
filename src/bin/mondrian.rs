use std::{
    fs::File,
    io::BufReader,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rand::Rng as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mondrian", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the composition as a standalone SVG document.
    Svg(SvgArgs),
    /// Write the composition as a PNG or WebP bitmap.
    Raster(RasterArgs),
    /// Print a link (or query string) that reproduces the composition.
    Url(UrlArgs),
    /// Suggest one new palette color distinct from the current palette.
    AddColor(StateArgs),
    /// Serve `GET /{format}?{query}` over HTTP.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct StateArgs {
    /// Composition state as JSON (camelCase keys); missing fields take their defaults.
    #[arg(long)]
    state: Option<PathBuf>,

    /// Composition state in shared-URL form, e.g. `c=5&seed=7`.
    #[arg(long)]
    query: Option<String>,

    /// Seed; drawn at random when neither this, --query nor --state provides one.
    #[arg(long)]
    seed: Option<u32>,

    /// Recursion depth cap.
    #[arg(long)]
    complexity: Option<u32>,

    /// Palette, comma-separated.
    #[arg(long, value_delimiter = ',')]
    colors: Option<Vec<String>>,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    state: StateArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also draw the external border and corner radius.
    #[arg(long)]
    framed: bool,
}

#[derive(Args, Debug)]
struct RasterArgs {
    #[command(flatten)]
    state: StateArgs,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = mondrian::RasterFormat::Png)]
    format: mondrian::RasterFormat,

    /// Multiplier over the 1000px document size.
    #[arg(long, default_value_t = mondrian::DEFAULT_RASTER_SCALE)]
    scale: f32,

    /// Also draw the external border and corner radius.
    #[arg(long)]
    framed: bool,
}

#[derive(Args, Debug)]
struct UrlArgs {
    #[command(flatten)]
    state: StateArgs,

    /// Origin the link points at.
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    origin: String,

    /// Link straight to an export instead of the interactive page.
    #[arg(long, value_enum)]
    format: Option<mondrian::ExportFormat>,

    /// Print only the compact query string (defaults omitted).
    #[arg(long)]
    compact: bool,
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Raster(args) => cmd_raster(args),
        Command::Url(args) => cmd_url(args),
        Command::AddColor(args) => cmd_add_color(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_state_json(path: &Path) -> anyhow::Result<mondrian::CompositionState> {
    let f = File::open(path).with_context(|| format!("open state '{}'", path.display()))?;
    let r = BufReader::new(f);
    let state = serde_json::from_reader(r).with_context(|| "parse state JSON")?;
    Ok(state)
}

fn resolve_state(args: StateArgs) -> anyhow::Result<mondrian::CompositionState> {
    let mut state = match &args.state {
        Some(path) => read_state_json(path)?,
        None => mondrian::CompositionState::default(),
    };
    let mut seeded = args.state.is_some();

    if let Some(query) = &args.query {
        let partial = mondrian::decode_query(query)?;
        seeded |= partial.seed.is_some();
        state = state.merge(partial);
    }

    state = state.merge(mondrian::PartialState {
        seed: args.seed,
        complexity: args.complexity,
        colors: args.colors,
        ..mondrian::PartialState::default()
    });
    seeded |= args.seed.is_some();

    if !seeded {
        state.seed = rand::rng().random_range(0..1_000_000);
        eprintln!("seed {}", state.seed);
    }
    Ok(state)
}

fn render_document(state: &mondrian::CompositionState, framed: bool) -> String {
    let cells = mondrian::generate_grid(&state.generation_params());
    let style = if framed {
        mondrian::SvgStyle::framed(state)
    } else {
        mondrian::SvgStyle::from_state(state)
    };
    mondrian::render_svg(&cells, &style)
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let state = resolve_state(args.state)?;
    let svg = render_document(&state, args.framed);
    write_output(&args.out, svg.as_bytes())
}

fn cmd_raster(args: RasterArgs) -> anyhow::Result<()> {
    let state = resolve_state(args.state)?;
    let svg = render_document(&state, args.framed);
    let bytes = mondrian::rasterize(&svg, args.format, args.scale)?;
    write_output(&args.out, &bytes)
}

fn cmd_url(args: UrlArgs) -> anyhow::Result<()> {
    let state = resolve_state(args.state)?;
    let line = if args.compact {
        mondrian::encode_query(&state, mondrian::EncodeMode::Compact)?
    } else {
        mondrian::share_url(&args.origin, &state, args.format)?
    };
    println!("{line}");
    Ok(())
}

fn cmd_add_color(args: StateArgs) -> anyhow::Result<()> {
    let state = resolve_state(args)?;
    println!("{}", mondrian::generate_random_color(&state.colors));
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    runtime.block_on(mondrian::serve(args.addr))
}
