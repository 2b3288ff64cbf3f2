#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use csv::Writer;
use itertools::Itertools;
use log::LevelFilter;
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use unitflow::{edge_disjoint_paths, Error as FlowError, Link};

/// Route the cheapest set of link-disjoint paths through an undirected network.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// CSV file with a `from,to,cost` header and one row per undirected link
    #[arg(short, long)]
    input: PathBuf,

    /// Number of vertices, ids run from 0 to vertices - 1
    #[arg(short = 'n', long)]
    vertices: usize,

    /// Number of paths to route
    #[arg(short = 'k', long)]
    paths: usize,

    #[arg(long, default_value_t = 0)]
    source: usize,

    /// Defaults to the last vertex
    #[arg(long)]
    sink: Option<usize>,

    /// Write the paths here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct PathRecord {
    path: usize,
    length: usize,
    links: String,
}

// Function to read the links from CSV file
fn read_links_csv(filepath: &Path) -> Result<Vec<Link<i64>>, csv::Error> {
    let mut rdr = csv::Reader::from_path(filepath)?;
    rdr.deserialize().collect()
}

// Function to write the routed paths
fn write_csv<W: Write>(out: W, paths: &[Vec<usize>]) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_writer(out);
    for (path, links) in paths.iter().enumerate() {
        wtr.serialize(PathRecord {
            path,
            length: links.len(),
            links: links.iter().join(" "),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let links = read_links_csv(&args.input)?;
    log::info!("read {} links from {}", links.len(), args.input.display());

    let sink = args.sink.unwrap_or(args.vertices.saturating_sub(1));
    let solution = match edge_disjoint_paths(args.vertices, &links, args.source, sink, args.paths) {
        Ok(solution) => solution,
        Err(FlowError::Infeasible {
            requested,
            delivered,
        }) => {
            log::warn!("only {delivered} of {requested} disjoint paths exist");
            println!("-1");
            return Ok(());
        }
        Err(e) => return Err(e.to_string().into()),
    };

    println!("{:.16}", solution.average_cost().unwrap_or_default());
    match &args.output {
        Some(path) => write_csv(File::create(path)?, &solution.paths)?,
        None => write_csv(io::stdout().lock(), &solution.paths)?,
    }

    Ok(())
}
