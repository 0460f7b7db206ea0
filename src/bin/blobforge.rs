use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use blobforge::{Blob, DEFAULT_FILL, ShapeParams, SvgOptions, seed_from_string, thread_ambient};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blobforge", version)]
struct Cli {
    /// Log pipeline stages to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the blob's SVG path data.
    Path(ShapeArgs),
    /// Print the blob's outline points as JSON.
    Points(ShapeArgs),
    /// Write the blob as a standalone SVG document.
    Svg(SvgArgs),
    /// Print the resolved params as query state.
    State(ShapeArgs),
    /// Draw a fresh seed and print the new state and path data.
    Random(RandomArgs),
}

#[derive(Args, Debug)]
struct ShapeArgs {
    /// Seed: a 32-bit integer, or any text to hash into one.
    #[arg(long)]
    seed: Option<String>,

    /// Number of outline points (>= 3).
    #[arg(long)]
    points: Option<usize>,

    /// Nominal radius.
    #[arg(long)]
    radius: Option<f64>,

    /// Radial perturbation as a fraction of the radius.
    #[arg(long, allow_negative_numbers = true)]
    variance: Option<f64>,

    /// Angular perturbation in radians.
    #[arg(long)]
    jitter: Option<f64>,

    /// Curve tension.
    #[arg(long, visible_alias = "tension", allow_negative_numbers = true)]
    smooth: Option<f64>,

    /// Start from query state, e.g. `seed=1&points=6&variance=0.4&smooth=1&jitter=0`.
    #[arg(long)]
    state: Option<String>,

    /// Start from a JSON params file.
    #[arg(long, conflicts_with = "state")]
    params: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    shape: ShapeArgs,

    /// Output path (`-` for stdout). Defaults to `blob-<seed>.svg`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Fill colour of the path.
    #[arg(long, default_value = DEFAULT_FILL)]
    fill: String,

    /// Padding around the path's bounding box.
    #[arg(long, default_value_t = 2.0)]
    padding: f64,
}

#[derive(Args, Debug)]
struct RandomArgs {
    #[command(flatten)]
    shape: ShapeArgs,

    /// Reset to the basic preset instead of keeping the other settings.
    #[arg(long)]
    basic: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Points(args) => cmd_points(args),
        Command::Svg(args) => cmd_svg(args),
        Command::State(args) => cmd_state(args),
        Command::Random(args) => cmd_random(args),
    }
}

impl ShapeArgs {
    fn resolve(&self) -> anyhow::Result<ShapeParams> {
        let mut params = if let Some(path) = &self.params {
            ShapeParams::from_path(path)
                .with_context(|| format!("load params '{}'", path.display()))?
        } else if let Some(state) = &self.state {
            ShapeParams::from_query(state).with_context(|| "parse --state")?
        } else {
            ShapeParams::default()
        };

        if let Some(seed) = &self.seed {
            params.seed = seed_from_string(seed);
        }
        if let Some(points) = self.points {
            params.point_count = points;
        }
        if let Some(radius) = self.radius {
            params.radius = radius;
        }
        if let Some(variance) = self.variance {
            params.variance = variance;
        }
        if let Some(jitter) = self.jitter {
            params.jitter = jitter;
        }
        if let Some(smooth) = self.smooth {
            params.tension = smooth;
        }

        params.validate()?;
        Ok(params)
    }
}

fn cmd_path(args: ShapeArgs) -> anyhow::Result<()> {
    let blob = Blob::generate(&args.resolve()?)?;
    println!("{}", blob.path);
    Ok(())
}

fn cmd_points(args: ShapeArgs) -> anyhow::Result<()> {
    let blob = Blob::generate(&args.resolve()?)?;
    let json = serde_json::to_string_pretty(&blob.points).with_context(|| "encode points JSON")?;
    println!("{json}");
    Ok(())
}

fn cmd_state(args: ShapeArgs) -> anyhow::Result<()> {
    println!("{}", args.resolve()?.to_query());
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let blob = Blob::generate(&args.shape.resolve()?)?;
    let opts = SvgOptions {
        fill: args.fill,
        padding: args.padding,
    };
    let svg = blob.to_svg(&opts)?;

    let out = args.out.unwrap_or_else(|| PathBuf::from(blob.file_name()));
    if out.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{svg}").with_context(|| "write svg to stdout")?;
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&out, svg).with_context(|| format!("write svg '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_random(args: RandomArgs) -> anyhow::Result<()> {
    let mut ambient = thread_ambient();
    let params = if args.basic {
        ShapeParams::random_basic(&mut ambient)
    } else {
        args.shape.resolve()?.randomize_seed(&mut ambient)
    };

    let blob = Blob::generate(&params)?;
    println!("{}", params.to_query());
    println!("{}", blob.path);
    Ok(())
}
