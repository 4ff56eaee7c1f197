//! Meshring CLI - mesh adjacency and n-ring selection tool.
//!
//! Usage: meshring <COMMAND> [OPTIONS] <INPUT> ...
//!
//! Run `meshring --help` for available commands. Set `RUST_LOG=debug` for
//! build and selection details.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use meshring::io;
use meshring::mesh::{MeshStore, Primitive, PrimitiveKind};
use meshring::selection::{FaceAdjacency, PickMode, SelectionConfig, MAX_RING_RADIUS};
use meshring::session::MeshSession;

#[derive(Parser)]
#[command(name = "meshring")]
#[command(author, version, about = "Mesh adjacency and n-ring selection CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh and topology information
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Select primitives and print their ring distances
    Select {
        /// Input mesh file
        input: PathBuf,

        /// Seed ids of the picked category
        #[arg(required = true)]
        ids: Vec<usize>,

        /// Primitive category to pick
        #[arg(short, long, value_enum, default_value = "face")]
        mode: Mode,

        /// Ring radius (clamped to the palette size)
        #[arg(short, long, default_value_t = 1)]
        ring: usize,

        /// Face-to-face adjacency for face picks
        #[arg(short, long, value_enum, default_value = "vertex")]
        adjacency: Adjacency,

        /// Extra seed ids added to the selection afterwards
        #[arg(long, value_delimiter = ',')]
        accumulate: Vec<usize>,

        /// Print the raw label array (-1 for unlabeled) instead of rings
        #[arg(long)]
        raw: bool,
    },

    /// Write the shrunken-face mesh used to display face selections
    Shrink {
        /// Input mesh file
        input: PathBuf,

        /// Output mesh file
        output: PathBuf,

        /// Fraction of the way each corner moves toward its face centroid
        #[arg(short, long, default_value = "0.1")]
        gap: f64,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Pick vertices
    Vertex,
    /// Pick edges
    Edge,
    /// Pick faces
    Face,
}

impl From<Mode> for PrimitiveKind {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Vertex => PrimitiveKind::Vertex,
            Mode::Edge => PrimitiveKind::Edge,
            Mode::Face => PrimitiveKind::Face,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Adjacency {
    /// Faces sharing an edge
    Edge,
    /// Faces sharing a vertex
    Vertex,
}

impl From<Adjacency> for FaceAdjacency {
    fn from(adjacency: Adjacency) -> Self {
        match adjacency {
            Adjacency::Edge => FaceAdjacency::EdgeAdjacent,
            Adjacency::Vertex => FaceAdjacency::VertexAdjacent,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }

        Commands::Select {
            input,
            ids,
            mode,
            ring,
            adjacency,
            accumulate,
            raw,
        } => {
            cmd_select(&input, &ids, mode, ring, adjacency, &accumulate, raw)?;
        }

        Commands::Shrink { input, output, gap } => {
            cmd_shrink(&input, &output, gap)?;
        }
    }

    Ok(())
}

fn cmd_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let session: MeshSession = MeshSession::load(input)?;
    let elapsed = start.elapsed();

    let store = session.store();
    let index = session.index();

    println!("File: {}", input.display());
    println!("Vertices: {}", index.num_vertices());
    println!("Edges: {}", index.num_edges());
    println!("Faces: {}", index.num_faces());
    println!("Euler characteristic: {}", index.euler_characteristic());

    if let Some((min, max)) = store.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
        let diag = max - min;
        println!("Dimensions: {:.3} x {:.3} x {:.3}", diag.x, diag.y, diag.z);
    }

    if index.is_closed() {
        println!("Topology: Closed (no boundary)");
    } else {
        println!("Topology: Open ({} boundary edges)", index.num_boundary_edges());
    }

    let overwrites = index.non_manifold_overwrites();
    if overwrites.is_empty() {
        println!("Orientation: Consistent");
    } else {
        println!("Orientation: {} directed edges shared by several faces", overwrites.len());
        for o in overwrites.iter().take(5) {
            println!("  {:?} -> {:?}: {:?} replaced by {:?}", o.from, o.to, o.previous, o.replacement);
        }
    }

    let max_valence = index.vertex_ids().map(|v| index.valence(v)).max().unwrap_or(0);
    println!("Max valence: {}", max_valence);
    println!("Index built in {:.2?}", elapsed);

    Ok(())
}

fn checked_picks(
    session: &MeshSession,
    kind: PrimitiveKind,
    ids: &[usize],
) -> meshring::error::Result<Vec<Primitive>> {
    ids.iter().map(|&i| session.index().primitive(kind, i)).collect()
}

fn cmd_select(
    input: &PathBuf,
    ids: &[usize],
    mode: Mode,
    ring: usize,
    adjacency: Adjacency,
    accumulate: &[usize],
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if ring > MAX_RING_RADIUS {
        eprintln!("Warning: ring radius {} clamped to {}", ring, MAX_RING_RADIUS);
    }

    let kind = PrimitiveKind::from(mode);
    let config = SelectionConfig::new()
        .with_pick_mode(PickMode::from(kind))
        .with_ring_radius(ring)
        .with_face_adjacency(adjacency.into());

    let store = io::load(input)?;
    let mut session: MeshSession = MeshSession::with_config(store, config)?;

    let picks = checked_picks(&session, kind, ids)?;
    session.select(&picks)?;

    if !accumulate.is_empty() {
        let extra = checked_picks(&session, kind, accumulate)?;
        session.accumulate(&extra)?;
    }

    let labels = session.labels();
    if raw {
        let values = match kind {
            PrimitiveKind::Vertex => labels.raw_vertices(),
            PrimitiveKind::Edge => labels.raw_edges(),
            PrimitiveKind::Face => labels.raw_faces(),
        };
        let text: Vec<String> = values.iter().map(|d| d.to_string()).collect();
        println!("{}", text.join(" "));
        return Ok(());
    }

    let radius = session.controller().config().ring_radius;
    println!(
        "Selected {} {} seeds, ring radius {}",
        session.controller().selected().len(),
        kind,
        radius
    );
    for d in 0..=radius {
        let ring_ids: Vec<String> = labels
            .labels(kind)
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == Some(d))
            .map(|(i, _)| i.to_string())
            .collect();
        if !ring_ids.is_empty() {
            println!("Ring {}: {}", d, ring_ids.join(" "));
        }
    }
    println!("Labeled: {}", labels.labeled_count());

    Ok(())
}

fn cmd_shrink(input: &PathBuf, output: &PathBuf, gap: f64) -> Result<(), Box<dyn std::error::Error>> {
    let store = io::load(input)?;

    let positions = store.shrunken_faces(gap);
    let faces: Vec<[usize; 3]> = (0..store.num_faces())
        .map(|f| [3 * f, 3 * f + 1, 3 * f + 2])
        .collect();
    let shrunk = MeshStore::new(positions, faces);

    io::save(&shrunk, output)?;
    println!(
        "Saved: {} ({} vertices, {} faces)",
        output.display(),
        shrunk.num_vertices(),
        shrunk.num_faces()
    );

    Ok(())
}
