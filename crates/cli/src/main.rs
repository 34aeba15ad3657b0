use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde_json::json;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use astar::adjacency::{AdjacencyGraph, Edge, Kind};
use astar::grid::{render, Board, Palette, ReplayToken};
use astar::{find_with, Label, Search, SearchCfg};

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "A* route finder over demo boards and edge-list graphs")]
struct Cmd {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Randomise a shaded board and route from the top-left to the bottom-right cell
    Grid {
        #[arg(long, default_value_t = 30)]
        side: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Never re-open an expanded cell
        #[arg(long)]
        closed_set: bool,
        /// Write the search result as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<String>,
    },
    /// Route over a JSON edge list `[{"from":0,"to":1,"cost":1.0}, ...]`
    Graph {
        #[arg(long)]
        input: String,
        #[arg(long)]
        start: Label,
        #[arg(long)]
        goal: Label,
        /// Edges are one-way
        #[arg(long)]
        directed: bool,
        /// Never re-open an expanded node
        #[arg(long)]
        closed_set: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(log_level(cmd.verbose))
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Grid {
            side,
            seed,
            index,
            closed_set,
            out,
        } => grid(side, ReplayToken { seed, index }, SearchCfg { closed_set }, out),
        Action::Graph {
            input,
            start,
            goal,
            directed,
            closed_set,
        } => graph(&input, start, goal, directed, SearchCfg { closed_set }),
        Action::Report => report(),
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn grid(side: usize, tok: ReplayToken, cfg: SearchCfg, out: Option<String>) -> Result<()> {
    tracing::info!(side, seed = tok.seed, index = tok.index, closed_set = cfg.closed_set, "grid");
    let (board, res) = route_board(side, tok, cfg)?;
    print!("{}", render(&board, &Palette::default()));
    println!("{}", summary(&res));

    if let Some(out) = out {
        write_json(&out, &res)?;
        let params = json!({
            "side": side,
            "seed": tok.seed,
            "index": tok.index,
            "closed_set": cfg.closed_set,
        });
        provenance::write_sidecar(&out, provenance::Payload::new("grid", params))?;
    }
    Ok(())
}

/// Paint a board from `tok`, route corner to corner and mark the route.
fn route_board(side: usize, tok: ReplayToken, cfg: SearchCfg) -> Result<(Board, Search)> {
    if side == 0 {
        bail!("--side must be at least 1");
    }
    let palette = Palette::default();
    let mut board = Board::new(side);
    board.randomise(&palette, tok);
    let goal = Label::try_from(board.count() - 1).context("board too large for labels")?;
    let res = find_with(&board.search_with(&palette), 0, goal, cfg);
    if res.found() {
        board.mark_route(&res.route, &palette);
    } else {
        tracing::warn!(goal, "no route");
    }
    Ok((board, res))
}

fn graph(input: &str, start: Label, goal: Label, directed: bool, cfg: SearchCfg) -> Result<()> {
    tracing::info!(input, start, goal, directed, "graph");
    let edges = load_edges(Path::new(input))?;
    let kind = if directed {
        Kind::Directed
    } else {
        Kind::Undirected
    };
    let g = AdjacencyGraph::from_edges(kind, edges);
    tracing::info!(vertices = g.len(), "graph loaded");
    if !g.contains(start) {
        tracing::warn!(start, "start is not a vertex of the graph");
    }
    let res = find_with(&g, start, goal, cfg);
    tracing::info!("{}", summary(&res));
    println!("{}", serde_json::to_string_pretty(&res)?);
    Ok(())
}

fn load_edges(path: &Path) -> Result<Vec<Edge>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let edges: Vec<Edge> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing edge list {}", path.display()))?;
    if let Some(e) = edges.iter().find(|e| e.cost.is_nan() || e.cost < 0.0) {
        bail!("edge {} -> {} has invalid cost {}", e.from, e.to, e.cost);
    }
    Ok(edges)
}

fn write_json(out: &str, res: &Search) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(res)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}

fn summary(res: &Search) -> String {
    let s = &res.stats;
    match res.cost {
        Some(cost) => format!(
            "route: {} cells, cost {cost}, {} expansions, {} re-opened",
            res.route.len(),
            s.expansions,
            s.reopened
        ),
        None => format!(
            "no route: {} expansions, {} failed lookups",
            s.expansions, s.lookup_failures
        ),
    }
}

fn report() -> Result<()> {
    let obj = provenance::block("report", json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
