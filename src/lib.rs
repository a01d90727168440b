// src/lib.rs

pub mod cli;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod parse;
pub mod render;
pub mod triggers;

use std::collections::BTreeSet;
use std::fs;
use std::io::Read;

use anyhow::Context;
use tracing::info;

use crate::cli::CliArgs;
use crate::graph::{CombineMode, ancestors_of, combine, descendants_of, fold_trigger_groups};
use crate::parse::parse_graph;
use crate::render::{annotate, emit};
use crate::triggers::{FILE_GROUP, MEM_GROUP, NET_GROUP, PROC_GROUP, TriggerGroup};

/// Everything the core needs to know about one filtering run.
///
/// The CLI layer builds this from flags; tests build it directly.
/// Targets and ignores are *labels*; resolution against the graph (and
/// the silent dropping of labels the graph does not contain) happens
/// inside [`filter_graph`].
#[derive(Debug, Clone, Default)]
pub struct FilterRequest {
    pub ancestors_of: Vec<String>,
    pub descendents_of: Vec<String>,
    pub mode: CombineMode,
    pub ignore_labels: Vec<String>,
    pub groups: Vec<&'static TriggerGroup>,
}

/// Counters reported after a run.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub nodes_read: usize,
    pub ancestors_kept: usize,
    pub descendants_kept: usize,
}

/// Result of one filtering run: the re-serialized graph plus counters.
#[derive(Debug)]
pub struct FilterOutcome {
    pub text: String,
    pub stats: FilterStats,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - input reading (file or stdin)
/// - the filter pipeline
/// - output writing (file or stdout)
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let input = read_input(&args.input)?;
    let request = request_from_args(&args);

    let outcome = filter_graph(&input, &request)?;
    info!(
        nodes_read = outcome.stats.nodes_read,
        ancestors_kept = outcome.stats.ancestors_kept,
        descendants_kept = outcome.stats.descendants_kept,
        "graph filtered"
    );

    match args.output {
        Some(path) => fs::write(&path, outcome.text)
            .with_context(|| format!("writing filtered graph to {path}"))?,
        None => print!("{}", outcome.text),
    }

    Ok(())
}

/// The whole pipeline on in-memory text: parse, close, combine,
/// annotate, emit.
///
/// Fails only on a fatal parse error; unresolved labels and an empty
/// keep set are ordinary outcomes.
pub fn filter_graph(input: &str, request: &FilterRequest) -> errors::Result<FilterOutcome> {
    let parsed = parse_graph(input)?;
    let mut graph = parsed.graph;
    let nodes_read = graph.len();

    let ignore: BTreeSet<String> = graph
        .resolve_all(request.ignore_labels.iter().map(String::as_str))
        .into_iter()
        .collect();

    let anc_targets = graph.resolve_all(request.ancestors_of.iter().map(String::as_str));
    let desc_targets = graph.resolve_all(request.descendents_of.iter().map(String::as_str));

    // Trigger-group closures fold into the ancestor side.
    let mut ancestors = ancestors_of(&graph, &anc_targets, &ignore);
    let (additions, groups) = fold_trigger_groups(&graph, &request.groups, &ignore);
    ancestors.extend(additions);

    let descendants = descendants_of(&graph, &desc_targets, &ignore);

    let keep = combine(&ancestors, &descendants, request.mode);

    let mut targets = anc_targets;
    targets.extend(desc_targets);
    annotate(&mut graph, &keep, &targets, &groups);

    let text = emit(&graph, &keep, &parsed.preamble, &parsed.postamble);

    Ok(FilterOutcome {
        text,
        stats: FilterStats {
            nodes_read,
            ancestors_kept: ancestors.len(),
            descendants_kept: descendants.len(),
        },
    })
}

/// Map parsed CLI flags to a core request.
pub fn request_from_args(args: &CliArgs) -> FilterRequest {
    let mut groups: Vec<&'static TriggerGroup> = Vec::new();
    if args.file {
        groups.push(&FILE_GROUP);
    }
    if args.net {
        groups.push(&NET_GROUP);
    }
    if args.process {
        groups.push(&PROC_GROUP);
    }
    if args.mem {
        groups.push(&MEM_GROUP);
    }

    FilterRequest {
        ancestors_of: args.ancestors_of.clone(),
        descendents_of: args.descendents_of.clone(),
        mode: if args.intersect {
            CombineMode::Intersect
        } else {
            CombineMode::Union
        },
        ignore_labels: args.ignore.clone(),
        groups,
    }
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading graph from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("reading graph file at {input:?}"))
    }
}
