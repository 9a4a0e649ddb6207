//! Longest duration-weighted chain through the dependency relation.
//!
//! [`ExhaustivePathSearch`] enumerates every root-to-sink path and is
//! exponential in the branching factor. It is meant for the tens of tasks one
//! estimate produces; give it a `max_paths` budget or use [`DagLongestPath`]
//! for anything larger.

use crate::graph::DependencyGraph;
use crate::options::CriticalPathStrategy;
use crate::task::ProcessTask;
use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use tracing::{debug, warn};

pub trait CriticalPathFinder {
    /// Task ids from a root (no dependencies) to a sink (no dependents).
    fn find(&self, tasks: &[ProcessTask]) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustivePathSearch {
    pub max_paths: Option<usize>,
}

impl ExhaustivePathSearch {
    pub fn with_budget(max_paths: usize) -> Self {
        Self {
            max_paths: Some(max_paths),
        }
    }
}

struct PathSearch<'a> {
    tasks: &'a [ProcessTask],
    dependents: Vec<Vec<usize>>,
    visited: Vec<bool>,
    path: Vec<usize>,
    best: Option<(i64, Vec<usize>)>,
    examined: usize,
    max_paths: Option<usize>,
    /// Set when the budget cut off a branch or root still waiting to be explored.
    truncated: bool,
}

impl PathSearch<'_> {
    fn exhausted(&self) -> bool {
        self.max_paths.is_some_and(|max| self.examined >= max)
    }

    fn visit(&mut self, idx: usize, accumulated: i64) {
        if self.visited[idx] {
            return;
        }
        self.visited[idx] = true;
        self.path.push(idx);
        let total = accumulated + self.tasks[idx].duration_days;

        if self.dependents[idx].is_empty() {
            self.examined += 1;
            let improves = self.best.as_ref().is_none_or(|(best, _)| total > *best);
            if improves {
                self.best = Some((total, self.path.clone()));
            }
        } else {
            for next in self.dependents[idx].clone() {
                if self.exhausted() {
                    self.truncated = true;
                    break;
                }
                self.visit(next, total);
            }
        }

        self.path.pop();
        self.visited[idx] = false;
    }
}

impl CriticalPathFinder for ExhaustivePathSearch {
    fn find(&self, tasks: &[ProcessTask]) -> Vec<String> {
        // O(n^2) scan; fine at estimate sizes.
        let dependents: Vec<Vec<usize>> = tasks
            .iter()
            .map(|task| {
                tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| other.depends_on(&task.id))
                    .map(|(idx, _)| idx)
                    .collect()
            })
            .collect();

        let mut search = PathSearch {
            tasks,
            dependents,
            visited: vec![false; tasks.len()],
            path: Vec::new(),
            best: None,
            examined: 0,
            max_paths: self.max_paths,
            truncated: false,
        };

        for root in (0..tasks.len()).filter(|&idx| tasks[idx].dependencies.is_empty()) {
            if search.exhausted() {
                search.truncated = true;
                break;
            }
            search.visit(root, 0);
        }

        if search.truncated {
            warn!(
                examined = search.examined,
                "critical path search budget exhausted, returning best path so far"
            );
        }

        debug!(paths = search.examined, "exhaustive critical path search finished");
        search
            .best
            .map(|(_, path)| path.into_iter().map(|idx| tasks[idx].id.clone()).collect())
            .unwrap_or_default()
    }
}

/// Polynomial longest path: topological order plus a duration-weighted DP.
///
/// Same total duration as the exhaustive search on acyclic input; among equal
/// totals it may pick a different chain. Falls back to the exhaustive search
/// when the dependency relation has a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DagLongestPath;

impl CriticalPathFinder for DagLongestPath {
    fn find(&self, tasks: &[ProcessTask]) -> Vec<String> {
        let dag = DependencyGraph::build(tasks);
        let order = match toposort(&dag.graph, None) {
            Ok(order) => order,
            Err(_) => {
                warn!("dependency cycle detected, falling back to exhaustive critical path search");
                return ExhaustivePathSearch::default().find(tasks);
            }
        };

        // Longest total ending at each node, and the predecessor that achieved it.
        let mut best: HashMap<NodeIndex, (i64, Option<NodeIndex>)> = HashMap::new();
        for node_ix in order {
            let position = dag.graph[node_ix];
            let task = &tasks[position];

            let mut preds: Vec<NodeIndex> = dag
                .graph
                .neighbors_directed(node_ix, Direction::Incoming)
                .collect();
            preds.sort_by_key(|ix| dag.graph[*ix]);

            if preds.is_empty() {
                // Only real roots start a chain; dangling dependencies do not.
                if task.dependencies.is_empty() {
                    best.insert(node_ix, (task.duration_days, None));
                }
                continue;
            }

            let mut chosen: Option<(i64, NodeIndex)> = None;
            for pred_ix in preds {
                if let Some(&(total, _)) = best.get(&pred_ix) {
                    if chosen.is_none_or(|(current, _)| total > current) {
                        chosen = Some((total, pred_ix));
                    }
                }
            }
            if let Some((total, pred_ix)) = chosen {
                best.insert(node_ix, (total + task.duration_days, Some(pred_ix)));
            }
        }

        let mut sinks: Vec<NodeIndex> = dag
            .graph
            .node_indices()
            .filter(|ix| {
                dag.graph
                    .neighbors_directed(*ix, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .collect();
        sinks.sort_by_key(|ix| dag.graph[*ix]);

        let mut end: Option<(i64, NodeIndex)> = None;
        for sink in sinks {
            if let Some(&(total, _)) = best.get(&sink) {
                if end.is_none_or(|(current, _)| total > current) {
                    end = Some((total, sink));
                }
            }
        }

        let mut path = Vec::new();
        let mut cursor = end.map(|(_, ix)| ix);
        while let Some(node_ix) = cursor {
            path.push(tasks[dag.graph[node_ix]].id.clone());
            cursor = best.get(&node_ix).and_then(|(_, pred)| *pred);
        }
        path.reverse();
        path
    }
}

pub fn finder_for(strategy: CriticalPathStrategy) -> Box<dyn CriticalPathFinder + Send + Sync> {
    match strategy {
        CriticalPathStrategy::Exhaustive { max_paths } => {
            Box::new(ExhaustivePathSearch { max_paths })
        }
        CriticalPathStrategy::Dag => Box::new(DagLongestPath),
    }
}

/// Exhaustive, unbounded search.
pub fn find_critical_path(tasks: &[ProcessTask]) -> Vec<String> {
    ExhaustivePathSearch::default().find(tasks)
}

/// Sum of durations of the tasks named in `path`; unknown ids count as zero.
pub fn critical_path_duration(tasks: &[ProcessTask], path: &[String]) -> i64 {
    path.iter()
        .filter_map(|id| tasks.iter().find(|task| &task.id == id))
        .map(|task| task.duration_days)
        .sum()
}
