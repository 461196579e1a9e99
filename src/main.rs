
mod config;
mod script;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use layout::editor::{Editor, EditorError};
use layout::grid::{self, PlotSize, PlotSizeError};
use layout::input::{TransformFallback, UiState};
use layout::placement;
use layout::render;
use layout::room::{Room, RoomError};
use layout::style::DesignConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::RenderConfig;
use crate::script::ScriptError;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("{path}: invalid JSON: {source}")]
    Json { path: String, source: serde_json::Error },
    #[error("encoding output failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Room(#[from] RoomError),
    #[error(transparent)]
    PlotSize(#[from] PlotSizeError),
    #[error("rendering failed: {0}")]
    Render(#[from] std::fmt::Error),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

#[derive(Parser, Debug)]
#[command(name = "floorplan", about = "Furniture layout for floor plans")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place furniture in every room and print the item list.
    Place(PlaceArgs),
    /// Lay rooms out on a plain grid and print the room list.
    Grid(GridArgs),
    /// Draw rooms and furniture as SVG.
    Render(RenderArgs),
    /// Replay a pointer script and print each furniture list a drag produces.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct DesignArg {
    #[arg(long, help = "Design configuration JSON; defaults when omitted")]
    design: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PlaceArgs {
    #[arg(long, help = "Room list JSON")]
    rooms: PathBuf,

    #[command(flatten)]
    design: DesignArg,
}

#[derive(Args, Debug)]
struct GridArgs {
    #[arg(long, help = "Plot size, e.g. 12x10 (meters)")]
    plot: PlotSize,

    #[arg(long = "room", required = true, help = "Room name; repeat once per room")]
    rooms: Vec<String>,

    #[command(flatten)]
    design: DesignArg,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[arg(long, help = "Room list JSON")]
    rooms: PathBuf,

    #[arg(long, help = "Furniture list JSON; placed from the rooms when omitted")]
    furniture: Option<PathBuf>,

    #[command(flatten)]
    design: DesignArg,

    #[arg(long, help = "Write SVG here instead of stdout")]
    out: Option<PathBuf>,

    #[arg(long, env = "FLOORPLAN_SEED", help = "Seed for floor shading; random when unset")]
    seed: Option<u64>,

    #[arg(long, help = "Item id to draw as selected")]
    selected: Option<String>,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(long, help = "Room list JSON")]
    rooms: PathBuf,

    #[arg(long, default_value = "-", help = "Event script path, or - for stdin")]
    events: String,

    #[command(flatten)]
    design: DesignArg,

    #[arg(long, default_value_t = false, help = "Fail on events sent before the surface is sized")]
    strict: bool,
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Place(args) => run_place(&args),
        Command::Grid(args) => run_grid(&args),
        Command::Render(args) => run_render(&args),
        Command::Replay(args) => run_replay(&args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_place(args: &PlaceArgs) -> Result<(), CliError> {
    let rooms = load_rooms(&args.rooms)?;
    let design = load_design(&args.design)?;
    let items = placement::place_all(&rooms, &design);
    info!(rooms = rooms.len(), items = items.len(), "placed furniture");
    print_json(&items)
}

fn run_grid(args: &GridArgs) -> Result<(), CliError> {
    let design = load_design(&args.design)?;
    let rooms = grid::grid_layout(args.plot, &args.rooms, &design);
    print_json(&rooms)
}

fn run_render(args: &RenderArgs) -> Result<(), CliError> {
    let rooms = load_rooms(&args.rooms)?;
    let design = load_design(&args.design)?;
    let items = match &args.furniture {
        Some(path) => load_json(path)?,
        None => placement::place_all(&rooms, &design),
    };

    let config = RenderConfig::from_env();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let ui = UiState { selected_id: args.selected.clone(), drag_hint_shown: false };
    info!(seed, rooms = rooms.len(), items = items.len(), "rendering plan");

    let svg = render::render_svg(&rooms, &items, &design, &ui, &config.options(), &mut rng)?;
    match &args.out {
        Some(path) => fs::write(path, svg).map_err(|source| io_error(path, source)),
        None => {
            print!("{svg}");
            Ok(())
        }
    }
}

fn run_replay(args: &ReplayArgs) -> Result<(), CliError> {
    let rooms = load_rooms(&args.rooms)?;
    let design = load_design(&args.design)?;

    let reader: Box<dyn BufRead> = if args.events == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.events).map_err(|source| io_error(Path::new(&args.events), source))?;
        Box::new(BufReader::new(file))
    };
    let events = script::parse_script(reader)?;

    let mut editor = Editor::new(rooms, design);
    if args.strict {
        editor.set_transform_fallback(TransformFallback::Reject);
    }

    for items in script::replay(&mut editor, &events)? {
        println!("{}", serde_json::to_string(&items)?);
    }
    Ok(())
}

fn load_rooms(path: &Path) -> Result<Vec<Room>, CliError> {
    let rooms: Vec<Room> = load_json(path)?;
    for room in &rooms {
        room.validate()?;
    }
    if rooms.is_empty() {
        warn!(path = %path.display(), "room list is empty");
    }
    Ok(rooms)
}

fn load_design(arg: &DesignArg) -> Result<DesignConfig, CliError> {
    match &arg.design {
        Some(path) => load_json(path),
        None => Ok(DesignConfig::default()),
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    serde_json::from_str(&text).map_err(|source| CliError::Json { path: path.display().to_string(), source })
}

fn io_error(path: &Path, source: io::Error) -> CliError {
    CliError::Io { path: path.display().to_string(), source }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
