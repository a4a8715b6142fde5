use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use nalgebra::{Matrix3, Matrix4, Vector3};
use symmetry_explorer::shapes::{shape_params_by_name, Selection, SymmetricShape, SHAPE_NAMES};
use symmetry_explorer::symmetries::explain_matrix;

#[derive(Parser)]
#[command(name = "symmetry-explorer")]
#[command(about = "Symmetry groups of convex polygons and polyhedra")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum number of group elements before closure gives up
    #[arg(long, global = true)]
    cap: Option<usize>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in shapes with their group orders
    List,
    /// Show the symmetries of a built-in shape
    Describe {
        /// Shape key, e.g. cube
        shape: String,
    },
    /// Classify a transform given as 9 (3x3) or 16 (4x4) row-major numbers
    Explain {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Rotation amounts available about an axis of a built-in shape
    Options {
        /// Shape key
        shape: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting symmetry-explorer v{}", symmetry_explorer::VERSION);

    match &cli.command {
        Commands::List => list_shapes(&cli),
        Commands::Describe { shape } => describe_shape(&cli, shape),
        Commands::Explain { values } => explain(&cli, values),
        Commands::Options { shape, x, y, z } => {
            rotation_options(&cli, shape, Vector3::new(*x, *y, *z))
        }
    }
}

fn build_shape(cli: &Cli, key: &str) -> anyhow::Result<SymmetricShape> {
    let mut params = shape_params_by_name(key)
        .with_context(|| format!("available shapes: {}", SHAPE_NAMES.join(", ")))?;
    if let Some(cap) = cli.cap {
        params = params.with_group_size_cap(cap);
    }
    SymmetricShape::new(params).with_context(|| format!("failed to build {}", key))
}

fn list_shapes(cli: &Cli) -> anyhow::Result<()> {
    let mut summaries = Vec::with_capacity(SHAPE_NAMES.len());
    for key in SHAPE_NAMES {
        summaries.push((key, build_shape(cli, key)?.summary()));
    }

    if cli.json {
        let mut map = serde_json::Map::new();
        for (key, summary) in summaries {
            map.insert(key.to_string(), serde_json::to_value(summary)?);
        }
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    println!(
        "{:<18} {:<30} {:>4} {:>6} {:>5} {:>8}",
        "key", "name", "dim", "order", "axes", "mirrors"
    );
    for (key, summary) in summaries {
        println!(
            "{:<18} {:<30} {:>4} {:>6} {:>5} {:>8}",
            key,
            summary.name,
            format!("{}D", summary.dimension.as_usize()),
            summary.group_order,
            summary.axes.len(),
            summary.reflective_normals.len()
        );
    }
    Ok(())
}

fn describe_shape(cli: &Cli, key: &str) -> anyhow::Result<()> {
    let shape = build_shape(cli, key)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&shape.summary())?);
        return Ok(());
    }

    println!("{} ({} vertices)", shape.name(), shape.vertices().len());
    println!("group order: {}", shape.group().order());

    println!("rotation axes ({}):", shape.axes().len());
    for axis in shape.axes() {
        let selection = Selection::RotationIndicator { axis: *axis };
        let options = selection.options(&shape)?;
        let degrees: Vec<String> = options.iter().map(|d| format!("{}°", d)).collect();
        println!(
            "  ({:>7.4}, {:>7.4}, {:>7.4})  {}",
            axis.x,
            axis.y,
            axis.z,
            degrees.join(" ")
        );
    }

    println!("mirror planes ({}):", shape.reflective_normals().len());
    for normal in shape.reflective_normals() {
        println!("  ({:>7.4}, {:>7.4}, {:>7.4})", normal.x, normal.y, normal.z);
    }

    println!("elements:");
    for element in shape.group().classify_elements()? {
        let labels: Vec<&str> = element
            .motion
            .permutation()
            .iter()
            .map(|&i| shape.vertex_names()[i].as_str())
            .collect();
        println!("  [{}] {}", labels.join(" "), element.classification);
    }
    Ok(())
}

fn explain(cli: &Cli, values: &[f64]) -> anyhow::Result<()> {
    let matrix = match values.len() {
        9 => Matrix3::from_row_slice(values).to_homogeneous(),
        16 => Matrix4::from_row_slice(values),
        n => bail!("expected 9 or 16 matrix entries, got {}", n),
    };

    let classification = explain_matrix(&matrix)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        println!("{}", classification);
    }
    Ok(())
}

fn rotation_options(cli: &Cli, key: &str, axis: Vector3<f64>) -> anyhow::Result<()> {
    let shape = build_shape(cli, key)?;
    let options = Selection::RotationIndicator { axis }.options(&shape)?;

    if cli.json {
        println!("{}", serde_json::to_string(&options)?);
    } else if options.is_empty() {
        println!("no rotations of {} about that axis", shape.name());
    } else {
        let degrees: Vec<String> = options.iter().map(|d| format!("{}°", d)).collect();
        println!("{}", degrees.join(" "));
    }
    Ok(())
}
