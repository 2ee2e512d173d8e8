use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use glam::Vec2;
use sandfall_common::{GridConfig, MaterialKind};
use sandfall_input::PaintInput;
use sandfall_kernel::World;
use sandfall_render::{DebugTextRenderer, Renderer, grid_lines};
use sandfall_tools::WorldInspector;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sandfall-cli", about = "Headless driver for the sandfall automaton")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    grid: GridArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GridArgs {
    /// JSON file with world_width, world_height and cell_size
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// World width in world units (ignored with --config)
    #[arg(long, global = true, default_value = "800")]
    width: u32,
    /// World height in world units (ignored with --config)
    #[arg(long, global = true, default_value = "600")]
    height: u32,
    /// Cell edge length in world units (ignored with --config)
    #[arg(long, global = true, default_value = "4")]
    cell_size: u32,
}

impl GridArgs {
    fn load(&self) -> anyhow::Result<GridConfig> {
        let config = match &self.config {
            Some(path) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("opening {}", path.display()))?;
                let config: GridConfig = serde_json::from_reader(file)
                    .with_context(|| format!("parsing {}", path.display()))?;
                config.validate()?;
                config
            }
            None => GridConfig::new(self.width, self.height, self.cell_size)?,
        };
        Ok(config)
    }
}

#[derive(Args, Clone)]
struct Scenario {
    /// Number of frames to run
    #[arg(short, long, default_value = "600")]
    frames: u64,
    /// Elapsed seconds per frame
    #[arg(long, default_value = "0.0166667")]
    dt: f32,
    /// World x of the pour point (default: horizontal center)
    #[arg(long)]
    pour_x: Option<f32>,
    /// World y of the pour point
    #[arg(long, default_value = "0")]
    pour_y: f32,
    /// Frames during which the paint control is held
    #[arg(long, default_value = "300")]
    pour_frames: u64,
    /// Fill the left half of this row with solid cells
    #[arg(long)]
    shelf: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print grid dimensions and crate info
    Info {
        /// Also print the number of debug grid lines
        #[arg(long)]
        lines: bool,
    },
    /// Run the frame loop headless and report the final state
    Simulate {
        #[command(flatten)]
        scenario: Scenario,
        /// RNG seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the final grid as text
        #[arg(long)]
        ascii: bool,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the same scenario twice with one seed and compare the results
    Replay {
        #[command(flatten)]
        scenario: Scenario,
        /// RNG seed for deterministic replay
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

/// Drive the world through the scenario: paint, then advance, once per frame.
fn run(world: &mut World, scenario: &Scenario) {
    let pour = Vec2::new(
        scenario
            .pour_x
            .unwrap_or(world.config().world_width as f32 / 2.0),
        scenario.pour_y,
    );
    if let Some(row) = scenario.shelf {
        let placed = (0..world.columns() / 2)
            .filter(|&col| world.set_cell(row, col, MaterialKind::Solid))
            .count();
        if placed == 0 {
            tracing::warn!(row, "shelf row is outside the grid");
        }
    }

    let mut passes = 0u64;
    for frame in 0..scenario.frames {
        let input = if frame < scenario.pour_frames {
            PaintInput::held_at(pour)
        } else {
            PaintInput::released()
        };
        if input.drive(world, scenario.dt) {
            passes += 1;
        }
    }
    tracing::info!(
        frames = scenario.frames,
        passes,
        liquid = world.count(MaterialKind::Liquid),
        "simulation finished"
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = cli.grid.load()?;

    match cli.command {
        Commands::Info { lines } => {
            println!("sandfall-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "grid: {} columns x {} rows, cell edge {}, world {}x{}",
                config.columns(),
                config.rows(),
                config.cell_size,
                config.world_width,
                config.world_height
            );
            if lines {
                println!("debug grid lines: {}", grid_lines(&config).len());
            }
            println!("render: {}", sandfall_render::crate_info());
            println!("input: {}", sandfall_input::crate_info());
            println!("tools: {}", sandfall_tools::crate_info());
        }
        Commands::Simulate {
            scenario,
            seed,
            ascii,
            json,
        } => {
            let mut world = match seed {
                Some(seed) => World::with_seed(config, seed)?,
                None => World::new(config)?,
            };
            run(&mut world, &scenario);

            let summary = WorldInspector::summary(&world);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
            if ascii {
                print!("{}", DebugTextRenderer::new().render(&world));
            }
        }
        Commands::Replay { scenario, seed } => {
            println!(
                "Deterministic replay: seed={seed}, frames={}",
                scenario.frames
            );

            let mut w1 = World::with_seed(config, seed)?;
            run(&mut w1, &scenario);
            let mut w2 = World::with_seed(config, seed)?;
            run(&mut w2, &scenario);

            println!("Run 1:  {}", WorldInspector::summary(&w1));
            println!("Run 2:  {}", WorldInspector::summary(&w2));
            println!(
                "Match: {}",
                if w1.state_hash() == w2.state_hash() {
                    "OK"
                } else {
                    "MISMATCH"
                }
            );
        }
    }

    Ok(())
}
