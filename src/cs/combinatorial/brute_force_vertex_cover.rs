use std::collections::BTreeSet;

use crate::cs::combinatorial::backtracking::SubsetIndices;
use crate::cs::graph::{Edge, Graph, Vertex};
use crate::cs::vertex_cover::{
    format_vertices, Step, StepResult, VertexCoverResult, VertexCoverStepper,
};

pub const ALGORITHM_NAME: &str = "Brute Force";

/// Exact minimum vertex cover by exhaustive subset search.
///
/// Subset sizes are tried in increasing order and, within a size, subsets
/// are enumerated lexicographically over the vertices sorted by id. The
/// first valid cover found is therefore minimum, and the lexicographically
/// smallest among the minimum covers.
///
/// Steps emitted (graph with at least one edge):
/// * one announcing each subset size `k = 0, 1, ...`
/// * one per subset tested, with the subset in `added_vertices`
/// * a final step carrying the cover
///
/// A graph without edges produces a single step and an empty cover.
///
/// # Complexity
/// * Time: O(2^V * E) in the worst case
/// * Space: O(V + E)
///
/// # Examples
/// ```
/// use vc_algos::combinatorial::brute_force_vertex_cover::BruteForceStepper;
/// use vc_algos::graph::Graph;
/// use vc_algos::vertex_cover::{Step, VertexCoverStepper};
///
/// let graph = Graph::from_parts(1..=3, [(1, 2), (2, 3), (1, 3)]).unwrap();
/// let mut stepper = BruteForceStepper::new(&graph);
/// let result = loop {
///     if let Step::Finished(result) = stepper.advance() {
///         break result;
///     }
/// };
/// assert_eq!(result.vertex_cover.len(), 2);
/// assert!(result.is_optimal);
/// ```
#[derive(Debug, Clone)]
pub struct BruteForceStepper {
    vertices: Vec<Vertex>,
    edges: BTreeSet<Edge>,
    phase: Phase,
    steps: usize,
}

#[derive(Debug, Clone)]
enum Phase {
    Start,
    AnnounceSize(usize),
    Testing(usize, SubsetIndices),
    Found(BTreeSet<Vertex>),
    Done(VertexCoverResult),
}

impl BruteForceStepper {
    pub fn new(graph: &Graph) -> Self {
        log::info!("{ALGORITHM_NAME} starting on {graph}");
        Self {
            vertices: graph.vertices().into_iter().collect(),
            edges: graph.edges(),
            phase: Phase::Start,
            steps: 0,
        }
    }

    fn emit(&mut self, step: StepResult) -> Step {
        self.steps += 1;
        log::debug!("step {}: {}", self.steps, step.message);
        Step::Progress(step)
    }

    fn finish(&mut self, cover: BTreeSet<Vertex>, step: StepResult) -> Step {
        let step = self.emit(step);
        log::info!(
            "{ALGORITHM_NAME} finished: cover of size {} after {} steps",
            cover.len(),
            self.steps
        );
        self.phase = Phase::Done(VertexCoverResult {
            vertex_cover: cover,
            total_steps: self.steps,
            algorithm_name: ALGORITHM_NAME,
            is_optimal: true,
            approximation_ratio: None,
        });
        step
    }
}

fn covers(edges: &BTreeSet<Edge>, subset: &BTreeSet<Vertex>) -> bool {
    edges
        .iter()
        .all(|edge| subset.contains(&edge.u()) || subset.contains(&edge.v()))
}

impl VertexCoverStepper for BruteForceStepper {
    fn advance(&mut self) -> Step {
        loop {
            match &mut self.phase {
                Phase::Start => {
                    if self.edges.is_empty() {
                        let step = StepResult::new(
                            BTreeSet::new(),
                            BTreeSet::new(),
                            "No edges to cover. The empty set is an optimal vertex cover.",
                        );
                        return self.finish(BTreeSet::new(), step);
                    }
                    self.phase = Phase::AnnounceSize(0);
                }
                Phase::AnnounceSize(k) => {
                    let k = *k;
                    // Every vertex but one always covers a validated edge set
                    debug_assert!(k < self.vertices.len(), "no vertex cover below size {k}");
                    self.phase = Phase::Testing(k, SubsetIndices::new(self.vertices.len(), k));
                    let step = StepResult::new(
                        BTreeSet::new(),
                        self.edges.clone(),
                        format!("Step {}: Checking all subsets of size {k}...", self.steps + 1),
                    );
                    return self.emit(step);
                }
                Phase::Testing(k, positions) => {
                    let k = *k;
                    let Some(indices) = positions.next() else {
                        self.phase = Phase::AnnounceSize(k + 1);
                        continue;
                    };
                    let subset: BTreeSet<Vertex> =
                        indices.into_iter().map(|i| self.vertices[i]).collect();
                    log::trace!("testing subset {}", format_vertices(&subset));
                    if covers(&self.edges, &subset) {
                        self.phase = Phase::Found(subset.clone());
                    }
                    let step = StepResult::new(
                        BTreeSet::new(),
                        self.edges.clone(),
                        format!(
                            "Step {}: Testing subset: {}",
                            self.steps + 1,
                            format_vertices(&subset)
                        ),
                    )
                    .with_added_vertices(subset);
                    return self.emit(step);
                }
                Phase::Found(cover) => {
                    let cover = std::mem::take(cover);
                    let step = StepResult::new(
                        cover.clone(),
                        BTreeSet::new(),
                        format!("Found optimal vertex cover of size {}.", cover.len()),
                    )
                    .with_added_vertices(cover.clone())
                    .with_removed_edges(self.edges.clone());
                    return self.finish(cover, step);
                }
                Phase::Done(result) => return Step::Finished(result.clone()),
            }
        }
    }

    fn result(&self) -> Option<&VertexCoverResult> {
        match &self.phase {
            Phase::Done(result) => Some(result),
            _ => None,
        }
    }
}
