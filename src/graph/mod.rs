use crate::task::ProcessTask;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

pub mod builder;

/// Dependency relation as a petgraph DAG: edges run dependency -> dependent.
///
/// Dependencies naming tasks outside the list are dropped.
pub struct DependencyGraph {
    pub graph: DiGraph<usize, ()>,
    pub id_to_index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Node weights are positions in `tasks`.
    pub fn build(tasks: &[ProcessTask]) -> Self {
        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let mut id_to_index: HashMap<String, NodeIndex> = HashMap::new();

        for (position, task) in tasks.iter().enumerate() {
            let node_ix = graph.add_node(position);
            id_to_index.insert(task.id.clone(), node_ix);
        }

        for task in tasks {
            for dep in &task.dependencies {
                if let (Some(&u), Some(&v)) = (id_to_index.get(dep), id_to_index.get(&task.id)) {
                    graph.add_edge(u, v, ());
                }
            }
        }

        Self { graph, id_to_index }
    }

    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }
}
