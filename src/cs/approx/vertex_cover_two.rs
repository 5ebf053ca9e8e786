use std::collections::BTreeSet;

use crate::cs::graph::{Edge, Graph};
use crate::cs::vertex_cover::{
    EdgeRemoval, Selection, SelectionRule, Step, VertexCoverResult, VertexCoverStepper,
};

pub const ALGORITHM_NAME: &str = "2-Approximation";

/// Worst-case ratio between the cover found and a minimum cover.
pub const APPROXIMATION_RATIO: f64 = 2.0;

/// Implements the 2-approximation algorithm for the Vertex Cover problem.
///
/// This algorithm provides a vertex cover that is at most twice the size of
/// the optimal solution. It works by repeatedly selecting both endpoints of
/// an uncovered edge until all edges are covered. The chosen edges form a
/// matching, and any cover needs one vertex per matched edge.
///
/// The edge taken each round is the smallest remaining one, ordered by
/// (smaller endpoint, larger endpoint).
///
/// Steps emitted (graph with at least one edge): an initial step, one per
/// selected edge, and a final summary step. A graph without edges produces
/// a single step.
///
/// # Complexity
/// * Time: O(E^2) with the per-round scan of remaining edges
/// * Space: O(V + E)
#[derive(Debug, Clone)]
pub struct TwoApproximationStepper {
    run: EdgeRemoval<SmallestEdge>,
}

#[derive(Debug, Clone)]
struct SmallestEdge;

impl SelectionRule for SmallestEdge {
    const NAME: &'static str = ALGORITHM_NAME;
    const APPROXIMATION_RATIO: Option<f64> = Some(APPROXIMATION_RATIO);

    fn select(&self, remaining: &BTreeSet<Edge>) -> Option<Selection> {
        let &edge = remaining.first()?;
        let (u, v) = edge.endpoints();
        Some(Selection {
            vertices: BTreeSet::from([u, v]),
            edge: Some(edge),
            summary: format!("Selected edge {edge}. Added vertices {u} and {v} to cover."),
        })
    }
}

impl TwoApproximationStepper {
    pub fn new(graph: &Graph) -> Self {
        Self {
            run: EdgeRemoval::new(graph, SmallestEdge),
        }
    }
}

impl VertexCoverStepper for TwoApproximationStepper {
    fn advance(&mut self) -> Step {
        self.run.advance()
    }

    fn result(&self) -> Option<&VertexCoverResult> {
        self.run.result()
    }
}
