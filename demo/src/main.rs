//! Maze-chase demo: generate a maze, drop pursuers and a player on it and
//! print every pursuer's planned route.
//!
//! Run: cargo run -- --width 41 --height 21 --agents 4
//!
//! Set `RUST_LOG=debug` to see generation and search statistics.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::{info, warn};
use mazechase_core::{GridError, GridMap, Point};
use mazechase_gen::{MazeConfig, MazeStats, generate_with, random_floor};
use mazechase_paths::{
    DIAGONAL_COST, ORTHOGONAL_COST, Path, PathError, PathRequest, SearchLimits, SearchMode, octile,
    plan_all,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generate a maze and plan pursuer routes toward the player
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells (rounded up to odd)
    #[arg(long, default_value_t = 41)]
    width: i32,

    /// Maze height in cells (rounded up to odd)
    #[arg(long, default_value_t = 21)]
    height: i32,

    /// Random seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of opening a loop next to each dead end
    #[arg(long, default_value_t = mazechase_gen::config::DEFAULT_BRAID_PROBABILITY)]
    braid: f64,

    /// Number of collectibles to scatter
    #[arg(long, default_value_t = 20)]
    collectibles: usize,

    /// Number of pursuing agents
    #[arg(long, default_value_t = 4)]
    agents: usize,

    /// Re-open expanded cells when a cheaper route turns up
    #[arg(long)]
    strict: bool,

    /// Give up on a route after this many expansions
    #[arg(long)]
    max_expansions: Option<usize>,
}

const PLAYER: char = '@';
const ROUTE: char = '*';
const AGENT_GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GridError> {
    let seed = args.seed.unwrap_or_else(clock_seed);
    let config = MazeConfig::default()
        .with_braid_probability(args.braid)
        .with_collectibles(args.collectibles);
    let grid = generate_with(args.width, args.height, seed, &config)?;
    let stats = MazeStats::of(&grid);
    info!(
        "seed {seed}: {}x{} maze, {} floor cells, {} dead ends, {} collectibles",
        grid.width(),
        grid.height(),
        stats.floor_cells,
        stats.dead_ends,
        stats.collectibles
    );

    // Spawns use their own stream so the maze stays a function of the seed.
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let Some(player) = random_floor(&grid, &mut rng) else {
        println!("{grid}");
        return Ok(());
    };
    let requests: Vec<PathRequest> = (0..args.agents)
        .filter_map(|_| random_floor(&grid, &mut rng))
        .map(|spawn| PathRequest::new(spawn, player))
        .collect();

    let mode = if args.strict {
        SearchMode::Strict
    } else {
        SearchMode::Relaxed
    };
    let limits = args
        .max_expansions
        .map_or_else(SearchLimits::unbounded, SearchLimits::with_max_expansions);
    let plans = plan_all(&grid, &requests, mode, limits);

    println!("{}", render(&grid, player, &requests, &plans));
    println!("seed {seed}, player at {player}");
    for (i, (req, plan)) in requests.iter().zip(&plans).enumerate() {
        let glyph = agent_glyph(i);
        match plan {
            Ok(path) => println!(
                "{glyph} at {}: {} steps, cost {} ({} open-grid), next move {}",
                req.start,
                path.steps(),
                path.cost(),
                open_grid_cost(req),
                path.next_step().unwrap_or(req.start)
            ),
            Err(e) => report_failure(glyph, req, e),
        }
    }
    Ok(())
}

fn report_failure(glyph: char, req: &PathRequest, err: &PathError) {
    if err.is_recoverable() {
        warn!("agent {glyph} at {} cannot reach the player: {err}", req.start);
    }
    println!("{glyph} at {}: {err}", req.start);
}

/// The maze with every planned route, the agents and the player drawn on top.
fn render(
    grid: &GridMap,
    player: Point,
    requests: &[PathRequest],
    plans: &[Result<Path, PathError>],
) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .to_ascii()
        .lines()
        .map(|l| l.chars().collect())
        .collect();
    let mut put = |p: Point, c: char| {
        if let Some(cell) = rows
            .get_mut(p.y as usize)
            .and_then(|r| r.get_mut(p.x as usize))
        {
            *cell = c;
        }
    };

    for path in plans.iter().flatten() {
        for &p in path {
            put(p, ROUTE);
        }
    }
    for (i, req) in requests.iter().enumerate() {
        put(req.start, agent_glyph(i));
    }
    put(player, PLAYER);

    rows.iter()
        .map(|r| r.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cost of the request's route if the maze had no walls.
fn open_grid_cost(req: &PathRequest) -> i32 {
    octile(req.start, req.goal, ORTHOGONAL_COST, DIAGONAL_COST)
}

fn agent_glyph(i: usize) -> char {
    AGENT_GLYPHS[i % AGENT_GLYPHS.len()] as char
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
