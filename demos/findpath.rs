//! Find a shortest path on an ASCII map.
//!
//! Run: cargo run --bin findpath -- maze.txt --start 0,0 --goal 9,4

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use log::{LevelFilter, info};
use pathgrid_core::{Passability, Point, PosId};
use pathgrid_demos::{AsciiMap, check_length, parse_point};
use pathgrid_paths::{bfs_distances, try_find_path};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "findpath")]
#[command(about = "Shortest 4-directional path on an ASCII map", long_about = None)]
struct Args {
    /// Map file. `#` is blocked, anything else is open; `S`/`G` mark endpoints.
    map: PathBuf,

    /// Start cell as x,y (defaults to the `S` marker).
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Goal cell as x,y (defaults to the `G` marker).
    #[arg(long, value_parser = parse_point)]
    goal: Option<Point>,

    /// Output slots available for the path (defaults to the map size).
    #[arg(short, long)]
    capacity: Option<i32>,

    /// Print a JSON report instead of the drawn map.
    #[arg(long)]
    json: bool,

    /// Cross-check the length against a breadth-first search.
    #[arg(long)]
    check: bool,

    /// Log level; falls back to RUST_LOG, then `warn`.
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

#[derive(Serialize)]
struct Report {
    start: Point,
    goal: Point,
    capacity: i32,
    length: Option<usize>,
    error: Option<String>,
    path: Vec<Point>,
}

fn setup_logging(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut b = env_logger::Builder::new();
            b.filter_level(level);
            b
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
    };
    builder.format_timestamp(None).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.log_level);

    let text = std::fs::read_to_string(&args.map)
        .with_context(|| format!("reading {}", args.map.display()))?;
    let map: AsciiMap = text
        .parse()
        .with_context(|| format!("parsing {}", args.map.display()))?;

    let Some(start) = args.start.or(map.start()) else {
        bail!("no start given and the map has no `S` marker");
    };
    let Some(goal) = args.goal.or(map.goal()) else {
        bail!("no goal given and the map has no `G` marker");
    };
    let capacity = args.capacity.unwrap_or(map.width() * map.height());
    info!(
        "searching {}x{} map from {start} to {goal} with {capacity} slots",
        map.width(),
        map.height()
    );

    let mut out = vec![-1; usize::try_from(capacity).unwrap_or(0)];
    let result = try_find_path(
        start.x,
        start.y,
        goal.x,
        goal.y,
        map.cells(),
        map.width(),
        map.height(),
        &mut out,
        capacity,
    );
    let steps = match &result {
        Ok(n) => &out[..(*n).max(1)],
        Err(_) => &out[..0],
    };

    if args.check {
        let view = map.view()?;
        let distances = bfs_distances(&view, start);
        info!(
            "{} of {} cells reachable from {start}",
            distances.reachable(),
            view.width() * view.height()
        );
        let verdict = check_length(&result, distances.at(goal), capacity)?;
        info!("check passed: {verdict}");
    }

    if args.json {
        let report = Report {
            start,
            goal,
            capacity,
            length: result.as_ref().ok().copied(),
            error: result.as_ref().err().map(ToString::to_string),
            path: match &result {
                Ok(0) | Err(_) => Vec::new(),
                Ok(_) => steps.iter().map(|&id| PosId(id).point(map.width())).collect(),
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &result {
            Ok(n) => println!("{n} steps"),
            Err(e) => println!("no path: {e}"),
        }
        print!("{}", map.render(start, goal, steps));
    }

    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
