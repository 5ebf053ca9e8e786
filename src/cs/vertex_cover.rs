//! Step protocol shared by the vertex cover algorithms.
//!
//! Each algorithm is an explicit state machine. Calling
//! [`VertexCoverStepper::advance`] yields either the next [`StepResult`]
//! snapshot or, once the run is over, the terminal [`VertexCoverResult`].
//! Runs own a private copy of the edge set and never touch the caller's
//! graph, so abandoning a run early is just dropping it.
//!
//! # Examples
//! ```
//! use vc_algos::graph::Graph;
//! use vc_algos::vertex_cover::registry::run_algorithm;
//!
//! let graph = Graph::from_parts(1..=4, [(1, 2), (2, 3), (3, 4)]).unwrap();
//! let outcome = run_algorithm("Greedy", &graph).unwrap().run_to_completion();
//!
//! assert_eq!(outcome.result.vertex_cover.len(), 2);
//! assert_eq!(outcome.result.total_steps, outcome.steps.len());
//! ```

pub mod registry;


use std::collections::BTreeSet;
use std::fmt;

use crate::cs::graph::{Edge, Graph, Vertex};

pub use registry::{
    algorithm_info, available_algorithms, compare_algorithms, run_algorithm, Algorithm,
    AlgorithmComparison, AlgorithmInfo, AlgorithmRun, RunOutcome,
};

/// A point-in-time snapshot emitted while an algorithm runs.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Vertices chosen up to and including this step. Never shrinks during a run.
    pub vertex_cover_so_far: BTreeSet<Vertex>,
    /// Edges not yet covered as of this step. Never grows during a run.
    pub remaining_edges: BTreeSet<Edge>,
    pub message: String,
    /// The edge examined this step, if any.
    pub selected_edge: Option<Edge>,
    /// Vertices newly added this step. Brute force uses it to highlight the
    /// subset under test.
    pub added_vertices: BTreeSet<Vertex>,
    /// Edges newly covered this step.
    pub removed_edges: BTreeSet<Edge>,
}

impl StepResult {
    pub fn new(
        vertex_cover_so_far: BTreeSet<Vertex>,
        remaining_edges: BTreeSet<Edge>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            vertex_cover_so_far,
            remaining_edges,
            message: message.into(),
            selected_edge: None,
            added_vertices: BTreeSet::new(),
            removed_edges: BTreeSet::new(),
        }
    }

    pub fn with_selected_edge(mut self, edge: Edge) -> Self {
        self.selected_edge = Some(edge);
        self
    }

    pub fn with_added_vertices(mut self, vertices: BTreeSet<Vertex>) -> Self {
        self.added_vertices = vertices;
        self
    }

    pub fn with_removed_edges(mut self, edges: BTreeSet<Edge>) -> Self {
        self.removed_edges = edges;
        self
    }
}

/// Terminal value of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexCoverResult {
    pub vertex_cover: BTreeSet<Vertex>,
    /// Number of `StepResult` values emitted by the run.
    pub total_steps: usize,
    pub algorithm_name: &'static str,
    pub is_optimal: bool,
    /// Known worst-case bound on `|cover| / |optimum|`, if any.
    pub approximation_ratio: Option<f64>,
}

impl fmt::Display for VertexCoverResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm_name)?;
        writeln!(f, "Vertex Cover Size: {}", self.vertex_cover.len())?;
        writeln!(f, "Total Steps: {}", self.total_steps)?;
        if let Some(ratio) = self.approximation_ratio {
            writeln!(f, "Approximation Ratio: {ratio}")?;
        }
        write!(f, "Vertices: {}", format_vertices(&self.vertex_cover))
    }
}

/// One unit of progress from a stepper.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Progress(StepResult),
    Finished(VertexCoverResult),
}

/// A suspendable vertex cover computation.
pub trait VertexCoverStepper {
    /// Produces the next step. Once the run has emitted its last snapshot,
    /// every further call returns `Step::Finished` with the same result.
    fn advance(&mut self) -> Step;

    /// The terminal result, available as soon as the final snapshot has
    /// been emitted.
    fn result(&self) -> Option<&VertexCoverResult>;

    fn is_finished(&self) -> bool {
        self.result().is_some()
    }
}

/// Formats vertices as `[1, 2, 3]`.
pub fn format_vertices(vertices: &BTreeSet<Vertex>) -> String {
    let ids: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
    format!("[{}]", ids.join(", "))
}

/// Working state of an edge-removal run: the partial cover, a private copy
/// of the uncovered edges and the number of steps emitted so far.
#[derive(Debug, Clone)]
pub(crate) struct CoverState {
    pub cover: BTreeSet<Vertex>,
    pub remaining: BTreeSet<Edge>,
    pub steps: usize,
}

impl CoverState {
    pub fn new(graph: &Graph) -> Self {
        Self {
            cover: BTreeSet::new(),
            remaining: graph.edges(),
            steps: 0,
        }
    }

    /// Adds `vertices` to the cover and drops every remaining edge touching
    /// one of them. Returns the dropped edges.
    pub fn take(&mut self, vertices: &BTreeSet<Vertex>) -> BTreeSet<Edge> {
        self.cover.extend(vertices.iter().copied());
        let removed: BTreeSet<Edge> = self
            .remaining
            .iter()
            .filter(|edge| vertices.iter().any(|&v| edge.touches(v)))
            .copied()
            .collect();
        for edge in &removed {
            self.remaining.remove(edge);
        }
        removed
    }

    /// Snapshot of the current state, counted as one emitted step.
    pub fn snapshot(&mut self, message: impl Into<String>) -> StepResult {
        self.steps += 1;
        let step = StepResult::new(self.cover.clone(), self.remaining.clone(), message);
        log::debug!("step {}: {}", self.steps, step.message);
        step
    }

    pub fn finish(
        &self,
        algorithm_name: &'static str,
        approximation_ratio: Option<f64>,
    ) -> VertexCoverResult {
        log::info!(
            "{algorithm_name} finished: cover of size {} after {} steps",
            self.cover.len(),
            self.steps
        );
        VertexCoverResult {
            vertex_cover: self.cover.clone(),
            total_steps: self.steps,
            algorithm_name,
            is_optimal: false,
            approximation_ratio,
        }
    }
}

/// Vertices picked in one round of an edge-removal heuristic.
#[derive(Debug, Clone)]
pub(crate) struct Selection {
    pub vertices: BTreeSet<Vertex>,
    pub edge: Option<Edge>,
    /// Sentence describing the pick, e.g. `Selected vertex 2 with degree 2.`
    pub summary: String,
}

/// The only part that differs between the edge-removal heuristics.
pub(crate) trait SelectionRule {
    const NAME: &'static str;
    const APPROXIMATION_RATIO: Option<f64>;

    /// Next vertices to add, or `None` once `remaining` is empty.
    fn select(&self, remaining: &BTreeSet<Edge>) -> Option<Selection>;
}

/// Stepper for heuristics that add vertices until no edge is left.
///
/// Emits an initial step, one step per selection and a final summary step.
/// A graph without edges gets a single step.
#[derive(Debug, Clone)]
pub(crate) struct EdgeRemoval<R> {
    rule: R,
    state: CoverState,
    phase: Phase,
}

#[derive(Debug, Clone)]
enum Phase {
    Start,
    Selecting,
    Done(VertexCoverResult),
}

impl<R: SelectionRule> EdgeRemoval<R> {
    pub fn new(graph: &Graph, rule: R) -> Self {
        log::info!("{} starting on {graph}", R::NAME);
        Self {
            rule,
            state: CoverState::new(graph),
            phase: Phase::Start,
        }
    }

    fn finish(&mut self, message: String) -> Step {
        let step = self.state.snapshot(message);
        self.phase = Phase::Done(self.state.finish(R::NAME, R::APPROXIMATION_RATIO));
        Step::Progress(step)
    }

    fn select(&mut self, selection: Selection) -> Step {
        let removed = self.state.take(&selection.vertices);
        let message = format!(
            "Step {}: {} Removed {} incident edges.",
            self.state.steps + 1,
            selection.summary,
            removed.len()
        );
        let mut step = self
            .state
            .snapshot(message)
            .with_added_vertices(selection.vertices)
            .with_removed_edges(removed);
        if let Some(edge) = selection.edge {
            step = step.with_selected_edge(edge);
        }
        Step::Progress(step)
    }
}

impl<R: SelectionRule> VertexCoverStepper for EdgeRemoval<R> {
    fn advance(&mut self) -> Step {
        match &self.phase {
            Phase::Done(result) => Step::Finished(result.clone()),
            Phase::Start if self.state.remaining.is_empty() => {
                self.finish("No edges to cover. Vertex cover is empty.".to_string())
            }
            Phase::Start => {
                self.phase = Phase::Selecting;
                let message =
                    format!("Starting {} Algorithm. Initialize empty vertex cover.", R::NAME);
                Step::Progress(self.state.snapshot(message))
            }
            Phase::Selecting => match self.rule.select(&self.state.remaining) {
                Some(selection) => self.select(selection),
                None => {
                    let message = format!(
                        "Algorithm completed! Found vertex cover of size {}.",
                        self.state.cover.len()
                    );
                    self.finish(message)
                }
            },
        }
    }

    fn result(&self) -> Option<&VertexCoverResult> {
        match &self.phase {
            Phase::Done(result) => Some(result),
            _ => None,
        }
    }
}
