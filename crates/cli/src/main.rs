use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use thrackle::api::{
    check_thrackle, enumerate_thrackles, schedule_edges, Classification, MulticodeReader,
    Registry, RotationSystem, SearchCfg, ThrackleCodeReader, ThrackleCodeWriter,
};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "thrackle")]
#[command(about = "Enumerate thrackle embeddings and filter isomorphic copies")]
struct Cmd {
    /// Debug-level logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read one multicode graph and write every thrackle embedding as thrackle_code
    Embed {
        /// Read the graph from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// Stop after this many embeddings
        #[arg(long)]
        limit: Option<u64>,
        /// Only count embeddings; write nothing to stdout
        #[arg(long)]
        count: bool,
        /// Write a JSON summary (and provenance sidecar) to this path
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Read thrackle_code from stdin and report isomorphic copies
    NonIso {
        /// Re-emit the first copy of every embedding on stdout
        #[arg(long)]
        new: bool,
        /// Report every record as new or as a copy
        #[arg(long)]
        verbose: bool,
        /// Reject records that are not thrackle drawings
        #[arg(long)]
        check: bool,
    },
}

#[derive(Serialize)]
struct EmbedSummary {
    vertices: usize,
    edges: usize,
    crossings: usize,
    embeddings: u64,
    dead_ends: u64,
    limit: Option<u64>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(if cmd.debug { Level::DEBUG } else { Level::INFO })
        .init();
    match cmd.action {
        Action::Embed {
            input,
            limit,
            count,
            summary,
        } => embed(input, limit, count, summary),
        Action::NonIso {
            new,
            verbose,
            check,
        } => non_iso(new, verbose, check),
    }
}

fn embed(
    input: Option<PathBuf>,
    limit: Option<u64>,
    count: bool,
    summary: Option<PathBuf>,
) -> Result<()> {
    let source: Box<dyn Read> = match &input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };
    let Some(graph) = MulticodeReader::new(source)
        .next_graph()
        .context("reading multicode graph")?
    else {
        bail!("no graph on input");
    };
    eprintln!("{}", graph_line(graph.vertex_count(), graph.edge_count()));
    let schedule = schedule_edges(&graph)?;
    eprintln!("{}", intersections_line(schedule.crossing_count));

    let cfg = SearchCfg {
        limit,
        ..SearchCfg::default()
    };
    let mut writer = ThrackleCodeWriter::new(BufWriter::new(io::stdout().lock()));
    let mut sink = |rs: &RotationSystem| -> thrackle::Result<()> {
        if count {
            Ok(())
        } else {
            writer.write(rs)
        }
    };
    let stats = enumerate_thrackles(&graph, cfg, &mut sink)?;
    writer.flush().context("flushing stdout")?;
    eprintln!("Found {}.", count_noun(stats.embeddings, "thrackle", "thrackles"));
    tracing::info!(
        embeddings = stats.embeddings,
        dead_ends = stats.dead_ends,
        "embed"
    );

    if let Some(path) = summary {
        let doc = EmbedSummary {
            vertices: stats.vertices,
            edges: stats.edges,
            crossings: stats.crossings,
            embeddings: stats.embeddings,
            dead_ends: stats.dead_ends,
            limit,
        };
        let params = serde_json::json!({
            "input": input.map(|p| p.to_string_lossy().into_owned()),
            "limit": limit,
            "count": count,
        });
        let sidecar = provenance::write_summary(&path, &doc, params)?;
        tracing::info!(summary = %path.display(), sidecar = %sidecar.display(), "summary written");
    }
    Ok(())
}

fn non_iso(new: bool, verbose: bool, check: bool) -> Result<()> {
    let reader = ThrackleCodeReader::new(BufReader::new(io::stdin().lock()));
    let mut writer = ThrackleCodeWriter::new(BufWriter::new(io::stdout().lock()));
    let mut registry = Registry::new();
    for record in reader {
        let rs = record.with_context(|| format!("reading thrackle {}", registry.read() + 1))?;
        if check {
            check_thrackle(&rs)
                .with_context(|| format!("thrackle {} is not a thrackle", registry.read() + 1))?;
        }
        match registry.classify(&rs)? {
            Classification::New { index } => {
                if verbose {
                    eprintln!("Thrackle {index} is new.");
                }
                if new {
                    writer.write(&rs)?;
                }
            }
            Classification::Duplicate { index, original } => {
                if verbose {
                    eprintln!("Thrackle {index} is not new. Thrackle {original} is a copy.");
                }
            }
        }
    }
    writer.flush().context("flushing stdout")?;
    eprintln!("{}", read_line(registry.read(), registry.unique()));
    io::stderr().flush()?;
    Ok(())
}

fn count_noun(n: u64, one: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { one } else { many })
}

fn graph_line(vertices: usize, edges: usize) -> String {
    format!(
        "Input graph has {} and {}.",
        count_noun(vertices as u64, "vertex", "vertices"),
        count_noun(edges as u64, "edge", "edges")
    )
}

fn intersections_line(crossings: usize) -> String {
    format!(
        "A thrackle embedding for this graph will have {}.",
        count_noun(crossings as u64, "intersection", "intersections")
    )
}

fn read_line(read: usize, unique: usize) -> String {
    format!(
        "Read {}. Read {}.",
        count_noun(read as u64, "thrackle", "thrackles"),
        count_noun(unique as u64, "unique thrackle", "unique thrackles")
    )
}
