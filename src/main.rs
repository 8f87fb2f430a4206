use arboretum_vc::generator::{prefix, random_tree};
use arboretum_vc::graph::{BaseGraph, HashMapGraph};
use arboretum_vc::io::{AdjacencyListReader, PaceReader, PaceWriter};
use arboretum_vc::solver::{Solver, SolverType};
use fxhash::FxHashSet;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::TryFrom;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{stdin, stdout, BufReader};
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
use jemallocator::Jemalloc;

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "arboretum-vc",
    about = "Computes minimum vertex covers of trees and small graphs."
)]
struct Opt {
    /// Input file, using the graph format of the PACE challenge.
    /// `stdin` if not specified.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Output file. `stdout` if not specified.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Read the input as adjacency lists, line `i` listing the neighbors of vertex `i`.
    #[structopt(short, long)]
    adjacency: bool,

    /// Ignore the input and solve a random tree with this many vertices.
    #[structopt(short, long)]
    generate: Option<usize>,

    /// Seed for `--generate`.
    #[structopt(long, default_value = "0")]
    seed: u64,

    /// auto, dp or bnb.
    #[structopt(short, long, default_value = "auto")]
    solver: SolverType,

    /// Time limit in seconds for branch and bound.
    #[structopt(short, long)]
    time_limit: Option<f64>,

    /// With `--solver bnb`, only solve the subgraph induced by the vertices `1..=k`.
    #[structopt(long)]
    bnb_limit: Option<usize>,

    /// Increases the log level, can be repeated.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn bnb_limit(opt: &Opt) -> Option<usize> {
    match opt.solver {
        SolverType::BranchAndBound => opt.bnb_limit,
        _ => None,
    }
}

fn read_graph(opt: &Opt) -> Result<HashMapGraph, Box<dyn Error>> {
    if let Some(n) = opt.generate {
        let mut rng = StdRng::seed_from_u64(opt.seed);
        let tree = random_tree(n, &mut rng);
        let tree = match bnb_limit(opt) {
            Some(k) => prefix(&tree, k),
            None => tree,
        };
        return Ok(HashMapGraph::from_adjacency(&tree));
    }
    let mut graph = match (&opt.input, opt.adjacency) {
        (Some(path), true) => {
            HashMapGraph::try_from(AdjacencyListReader(BufReader::new(File::open(path)?)))?
        }
        (Some(path), false) => HashMapGraph::try_from(PaceReader(BufReader::new(File::open(path)?)))?,
        (None, true) => HashMapGraph::try_from(AdjacencyListReader(stdin().lock()))?,
        (None, false) => HashMapGraph::try_from(PaceReader(stdin().lock()))?,
    };
    if let Some(k) = bnb_limit(opt) {
        let kept: FxHashSet<usize> = graph.vertices().filter(|v| *v <= k).collect();
        graph = graph.vertex_induced(&kept);
    }
    Ok(graph)
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    arboretum_vc::log::build_pace_logger_for_verbosity(LevelFilter::Warn, opt.verbose);
    #[cfg(feature = "handle-ctrlc")]
    arboretum_vc::signals::initialize()?;

    let time_budget = match opt.time_limit {
        Some(secs) if secs.is_finite() && secs >= 0.0 => Some(Duration::from_secs_f64(secs)),
        Some(secs) => return Err(format!("invalid time limit: {}", secs).into()),
        None => None,
    };

    let graph = read_graph(&opt)?;

    println!(
        "c solving {} vertices and {} edges with {:?}",
        graph.order(),
        graph.size(),
        opt.solver
    );
    let solution = Solver::default()
        .solver_type(opt.solver)
        .time_budget(time_budget)
        .solve(&graph)?;
    println!("c size {}", solution.cover.len());
    println!("c optimal {}", solution.optimal);
    println!("c elapsed {} ms", solution.elapsed.as_millis());

    match &opt.output {
        Some(path) => {
            let writer = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            PaceWriter::new(&solution.cover, &graph, writer).output()?;
        }
        None => {
            let writer = stdout();
            PaceWriter::new(&solution.cover, &graph, writer).output()?;
        }
    }
    Ok(())
}
