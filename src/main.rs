/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dsi_progress_logger::prelude::*;
use graph_algo::prelude::*;
use graph_algo::utils::is_symmetric;

#[derive(Parser, Debug)]
#[command(name = "graph-algo")]
/// Runs visits and connectivity analyses on a small labeled graph given on
/// the command line.
struct Cli {
    #[arg(long)]
    /// The vertex labels, separated by whitespace.
    vertices: String,

    #[arg(short, long, default_value = "")]
    /// The edges, as whitespace-separated SRC-DST tokens.
    edges: String,

    #[arg(short, long, default_value_t = false)]
    /// Build an undirected graph.
    undirected: bool,

    #[arg(short, long, default_value_t = false)]
    /// Use the adjacency-matrix representation.
    matrix: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    /// Increase the logging verbosity.
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the successors of each vertex.
    Dump,
    /// Print the vertices in depth-first order.
    Dfs {
        #[arg(short, long)]
        /// Visit only the vertices reachable from this one.
        root: Option<String>,
    },
    /// Print the vertices in breadth-first order.
    Bfs {
        #[arg(short, long)]
        /// Visit only the vertices reachable from this one.
        root: Option<String>,
    },
    /// Print the strongly connected components.
    Sccs,
    /// Print the connected components of an undirected graph.
    Cc,
    /// Tell whether an undirected graph contains a cycle.
    Cycle,
    /// Tell whether a directed graph is acyclic.
    Acyclic,
}

fn parse_edges(edges: &str) -> Result<Vec<(String, String)>> {
    edges
        .split_whitespace()
        .map(|token| {
            let (src, dst) = token
                .split_once('-')
                .with_context(|| format!("Edge {token:?} is not of the form SRC-DST"))?;
            Ok((src.to_owned(), dst.to_owned()))
        })
        .collect()
}

fn resolve_root(graph: &impl LabeledGraph<Label = String>, root: String) -> Result<usize> {
    graph
        .position(&root)
        .with_context(|| format!("Unknown vertex {root:?}"))
}

fn print_order(graph: &impl LabeledGraph<Label = String>, order: &[usize]) -> Result<()> {
    let labels = graph.vertices_of(order.iter().copied())?;
    println!(
        "{}",
        labels
            .iter()
            .map(|label| label.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(())
}

fn print_components(graph: &impl LabeledGraph<Label = String>, sccs: &sccs::Sccs) {
    let mut members = vec![Vec::new(); sccs.num_components()];
    for (node, &component) in sccs.components().iter().enumerate() {
        members[component].push(graph.vertices()[node].as_str());
    }
    println!("{} components", sccs.num_components());
    for (component, labels) in members.iter().enumerate() {
        println!("{component}: {}", labels.join(" "));
    }
}

fn run<G>(graph: G, command: Command, undirected: bool, pl: &mut impl ProgressLog) -> Result<()>
where
    G: LabeledGraph<Label = String> + Transpose,
{
    log::info!(
        "Graph with {} nodes and {} arcs",
        graph.num_nodes(),
        graph.num_arcs()
    );

    match command {
        Command::Dump => {
            for node in 0..graph.num_nodes() {
                let mut line = format!("{node}({})", graph.vertices()[node]);
                line.push(':');
                for succ in graph.successors(node) {
                    line.push_str(&format!(" {succ}({})", graph.vertices()[succ]));
                }
                println!("{line}");
            }
        }
        Command::Dfs { root } => {
            let order = match root {
                Some(root) => dfs_order_from(&graph, resolve_root(&graph, root)?)?,
                None => dfs_order(&graph),
            };
            print_order(&graph, &order)?;
        }
        Command::Bfs { root } => {
            let order = match root {
                Some(root) => bfs_order_from(&graph, resolve_root(&graph, root)?)?,
                None => bfs_order(&graph),
            };
            print_order(&graph, &order)?;
        }
        Command::Sccs => {
            let sccs = sccs::kosaraju(&graph, pl);
            print_components(&graph, &sccs);
        }
        Command::Cc => {
            if !undirected && !is_symmetric(&graph) {
                bail!("Connected components require an undirected graph (use --undirected)");
            }
            let sccs = sccs::symm_seq(&graph, pl);
            print_components(&graph, &sccs);
            println!("single component: {}", sccs.is_single_component());
        }
        Command::Cycle => {
            if !undirected && !is_symmetric(&graph) {
                bail!("Cycle detection requires an undirected graph (use --undirected)");
            }
            println!("{}", has_cycle(&graph, pl));
        }
        Command::Acyclic => {
            println!("{}", is_acyclic(&graph, pl));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    stderrlog::new()
        .verbosity(2 + cli.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let vertices = cli.vertices.split_whitespace().map(str::to_owned);
    let edges = parse_edges(&cli.edges)?;
    let mut pl = ProgressLogger::default();

    let command = cli.command;
    match (cli.matrix, cli.undirected) {
        (false, false) => run(VecGraph::directed(vertices, edges), command, false, &mut pl),
        (false, true) => run(VecGraph::undirected(vertices, edges), command, true, &mut pl),
        (true, false) => run(MatrixGraph::directed(vertices, edges), command, false, &mut pl),
        (true, true) => run(MatrixGraph::undirected(vertices, edges), command, true, &mut pl),
    }
}
