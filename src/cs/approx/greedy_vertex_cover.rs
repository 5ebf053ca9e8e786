use std::collections::{BTreeMap, BTreeSet};

use crate::cs::graph::{Edge, Graph, Vertex};
use crate::cs::vertex_cover::{
    EdgeRemoval, Selection, SelectionRule, Step, VertexCoverResult, VertexCoverStepper,
};

pub const ALGORITHM_NAME: &str = "Greedy";

/// Greedy highest-degree heuristic for Vertex Cover.
///
/// Repeatedly picks the vertex touching the most uncovered edges, adds it to
/// the cover and drops its edges. Ties go to the smallest vertex id. There is
/// no constant approximation guarantee: on some bipartite families the cover
/// grows like `O(log V)` times the optimum.
///
/// Steps emitted (graph with at least one edge): an initial step, one per
/// selected vertex, and a final summary step. A graph without edges produces
/// a single step.
///
/// # Complexity
/// * Time: O(V * E)
/// * Space: O(V + E)
///
/// # Examples
/// ```
/// use vc_algos::approx::greedy_vertex_cover::GreedyStepper;
/// use vc_algos::graph::{Graph, Vertex};
/// use vc_algos::vertex_cover::{Step, VertexCoverStepper};
///
/// let graph = Graph::from_parts(1..=5, [(1, 2), (1, 3), (1, 4), (1, 5)]).unwrap();
/// let mut stepper = GreedyStepper::new(&graph);
/// while let Step::Progress(_) = stepper.advance() {}
///
/// let cover = &stepper.result().unwrap().vertex_cover;
/// assert_eq!(cover.iter().copied().collect::<Vec<_>>(), vec![Vertex::new(1)]);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyStepper {
    run: EdgeRemoval<HighestDegree>,
}

/// Residual degree of every vertex touched by `edges`.
pub fn residual_degrees(edges: &BTreeSet<Edge>) -> BTreeMap<Vertex, usize> {
    let mut degrees = BTreeMap::new();
    for edge in edges {
        *degrees.entry(edge.u()).or_insert(0) += 1;
        *degrees.entry(edge.v()).or_insert(0) += 1;
    }
    degrees
}

/// Vertex with the highest residual degree, smallest id on ties.
fn select_vertex(edges: &BTreeSet<Edge>) -> Option<(Vertex, usize)> {
    let mut best: Option<(Vertex, usize)> = None;
    // Ascending id order, so only a strictly larger degree replaces the pick
    for (vertex, degree) in residual_degrees(edges) {
        if best.map_or(true, |(_, best_degree)| degree > best_degree) {
            best = Some((vertex, degree));
        }
    }
    best
}

#[derive(Debug, Clone)]
struct HighestDegree;

impl SelectionRule for HighestDegree {
    const NAME: &'static str = ALGORITHM_NAME;
    const APPROXIMATION_RATIO: Option<f64> = None;

    fn select(&self, remaining: &BTreeSet<Edge>) -> Option<Selection> {
        let (vertex, degree) = select_vertex(remaining)?;
        Some(Selection {
            vertices: BTreeSet::from([vertex]),
            edge: None,
            summary: format!("Selected vertex {vertex} with degree {degree}."),
        })
    }
}

impl GreedyStepper {
    pub fn new(graph: &Graph) -> Self {
        Self {
            run: EdgeRemoval::new(graph, HighestDegree),
        }
    }
}

impl VertexCoverStepper for GreedyStepper {
    fn advance(&mut self) -> Step {
        self.run.advance()
    }

    fn result(&self) -> Option<&VertexCoverResult> {
        self.run.result()
    }
}
