use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::cs::approx::greedy_vertex_cover::{self, GreedyStepper};
use crate::cs::approx::vertex_cover_two::{self, TwoApproximationStepper};
use crate::cs::combinatorial::brute_force_vertex_cover::{self, BruteForceStepper};
use crate::cs::error::{Error, Result};
use crate::cs::graph::Graph;
use crate::cs::vertex_cover::{Step, StepResult, VertexCoverResult, VertexCoverStepper};

/// Vertex count above which exhaustive search is considered impractical.
pub const BRUTE_FORCE_VERTEX_LIMIT: usize = 20;

/// The registered vertex cover algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BruteForce,
    Greedy,
    TwoApproximation,
}

/// Static description of an algorithm, for display by a driver.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub approximation_ratio: Option<f64>,
    pub optimal: bool,
    /// Largest graph the algorithm is comfortable with, if bounded.
    pub max_recommended_vertices: Option<usize>,
}

impl Algorithm {
    /// Every registered algorithm, in display order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BruteForce,
        Algorithm::Greedy,
        Algorithm::TwoApproximation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => brute_force_vertex_cover::ALGORITHM_NAME,
            Algorithm::Greedy => greedy_vertex_cover::ALGORITHM_NAME,
            Algorithm::TwoApproximation => vertex_cover_two::ALGORITHM_NAME,
        }
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Algorithm::BruteForce => AlgorithmInfo {
                name: self.name(),
                description: "An exhaustive search that checks every vertex subset, smallest \
                              first, to find a minimum vertex cover. Very slow for graphs with \
                              more than ~20 vertices.",
                time_complexity: "O(2^V * E)",
                approximation_ratio: None,
                optimal: true,
                max_recommended_vertices: Some(BRUTE_FORCE_VERTEX_LIMIT),
            },
            Algorithm::Greedy => AlgorithmInfo {
                name: self.name(),
                description: "Repeatedly selects the vertex with the highest degree among the \
                              uncovered edges.",
                time_complexity: "O(V * E)",
                approximation_ratio: None,
                optimal: false,
                max_recommended_vertices: None,
            },
            Algorithm::TwoApproximation => AlgorithmInfo {
                name: self.name(),
                description: "Repeatedly selects an uncovered edge and adds both endpoints to \
                              the cover. Never more than twice the optimum.",
                time_complexity: "O(E^2)",
                approximation_ratio: Some(vertex_cover_two::APPROXIMATION_RATIO),
                optimal: false,
                max_recommended_vertices: None,
            },
        }
    }

    /// Looks up an algorithm by its display name.
    ///
    /// # Errors
    /// * `Error::AlgorithmNotFound` if no algorithm is registered under `name`
    pub fn from_name(name: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| Error::AlgorithmNotFound {
                name: name.to_string(),
                available: available_algorithms().join(", "),
            })
    }

    /// Starts a run on `graph`. The graph is copied; the run never mutates it.
    pub fn run(self, graph: &Graph) -> AlgorithmRun {
        match self {
            Algorithm::BruteForce => AlgorithmRun::BruteForce(BruteForceStepper::new(graph)),
            Algorithm::Greedy => AlgorithmRun::Greedy(GreedyStepper::new(graph)),
            Algorithm::TwoApproximation => {
                AlgorithmRun::TwoApproximation(TwoApproximationStepper::new(graph))
            }
        }
    }

    /// Opt-in guard for drivers that want to refuse runs the algorithm
    /// cannot finish in reasonable time. Runs themselves are never refused.
    ///
    /// # Errors
    /// * `Error::InputTooLarge` if `graph` exceeds `max_recommended_vertices`
    pub fn ensure_tractable(self, graph: &Graph) -> Result<()> {
        match self.info().max_recommended_vertices {
            Some(limit) if graph.vertex_count() > limit => Err(Error::InputTooLarge(format!(
                "{} supports at most {limit} vertices, graph has {}",
                self.name(),
                graph.vertex_count()
            ))),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::from_name(s)
    }
}

/// A run in progress, dispatching to the selected algorithm's stepper.
///
/// Pull steps with [`VertexCoverStepper::advance`] or iterate; both observe
/// the same sequence. Iteration ends when the run finishes, after which
/// [`VertexCoverStepper::result`] holds the terminal value.
#[derive(Debug, Clone)]
pub enum AlgorithmRun {
    BruteForce(BruteForceStepper),
    Greedy(GreedyStepper),
    TwoApproximation(TwoApproximationStepper),
}

/// Everything a fully drained run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub steps: Vec<StepResult>,
    pub result: VertexCoverResult,
    pub elapsed: Duration,
}

impl AlgorithmRun {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AlgorithmRun::BruteForce(_) => Algorithm::BruteForce,
            AlgorithmRun::Greedy(_) => Algorithm::Greedy,
            AlgorithmRun::TwoApproximation(_) => Algorithm::TwoApproximation,
        }
    }

    /// Drains the remaining steps and returns them with the final result.
    pub fn run_to_completion(mut self) -> RunOutcome {
        let start = Instant::now();
        let mut steps = Vec::new();
        loop {
            match self.advance() {
                Step::Progress(step) => steps.push(step),
                Step::Finished(result) => {
                    return RunOutcome {
                        steps,
                        result,
                        elapsed: start.elapsed(),
                    }
                }
            }
        }
    }
}

impl VertexCoverStepper for AlgorithmRun {
    fn advance(&mut self) -> Step {
        match self {
            AlgorithmRun::BruteForce(stepper) => stepper.advance(),
            AlgorithmRun::Greedy(stepper) => stepper.advance(),
            AlgorithmRun::TwoApproximation(stepper) => stepper.advance(),
        }
    }

    fn result(&self) -> Option<&VertexCoverResult> {
        match self {
            AlgorithmRun::BruteForce(stepper) => stepper.result(),
            AlgorithmRun::Greedy(stepper) => stepper.result(),
            AlgorithmRun::TwoApproximation(stepper) => stepper.result(),
        }
    }
}

impl Iterator for AlgorithmRun {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        match self.advance() {
            Step::Progress(step) => Some(step),
            Step::Finished(_) => None,
        }
    }
}

/// Names of all registered algorithms.
pub fn available_algorithms() -> Vec<&'static str> {
    Algorithm::ALL.iter().map(|algorithm| algorithm.name()).collect()
}

/// Metadata for the algorithm registered under `name`.
pub fn algorithm_info(name: &str) -> Result<AlgorithmInfo> {
    Algorithm::from_name(name).map(Algorithm::info)
}

/// Starts the algorithm registered under `name` on `graph`.
///
/// # Errors
/// * `Error::AlgorithmNotFound` if `name` is not registered
pub fn run_algorithm(name: &str, graph: &Graph) -> Result<AlgorithmRun> {
    Ok(Algorithm::from_name(name)?.run(graph))
}

/// One row of [`compare_algorithms`].
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmComparison {
    pub algorithm: Algorithm,
    pub cover_size: usize,
    pub total_steps: usize,
    /// `cover_size / optimum`, when the optimum was computed.
    pub ratio_to_optimal: Option<f64>,
}

/// Runs every registered algorithm on `graph` and reports cover sizes.
///
/// Brute force is skipped when the graph exceeds its recommended size; the
/// ratios are then unknown.
pub fn compare_algorithms(graph: &Graph) -> Vec<AlgorithmComparison> {
    let mut results: Vec<(Algorithm, VertexCoverResult)> = Vec::new();
    for algorithm in Algorithm::ALL {
        if let Err(err) = algorithm.ensure_tractable(graph) {
            log::warn!("skipping {algorithm}: {err}");
            continue;
        }
        let outcome = algorithm.run(graph).run_to_completion();
        results.push((algorithm, outcome.result));
    }

    let optimum = results
        .iter()
        .find(|(_, result)| result.is_optimal)
        .map(|(_, result)| result.vertex_cover.len());

    results
        .into_iter()
        .map(|(algorithm, result)| {
            let cover_size = result.vertex_cover.len();
            let ratio_to_optimal = optimum.map(|optimum| {
                if optimum == 0 {
                    1.0
                } else {
                    cover_size as f64 / optimum as f64
                }
            });
            AlgorithmComparison {
                algorithm,
                cover_size,
                total_steps: result.total_steps,
                ratio_to_optimal,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::graph::generators;
    use approx::assert_relative_eq;

    #[test]
    fn test_available_algorithms() {
        assert_eq!(
            available_algorithms(),
            vec!["Brute Force", "Greedy", "2-Approximation"]
        );
    }

    #[test]
    fn test_lookup_by_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), Ok(algorithm));
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = Algorithm::from_name("Simulated Annealing").unwrap_err();
        assert_eq!(
            err,
            Error::AlgorithmNotFound {
                name: "Simulated Annealing".to_string(),
                available: "Brute Force, Greedy, 2-Approximation".to_string(),
            }
        );
        assert!(run_algorithm("greedy", &Graph::new()).is_err());
        assert!(algorithm_info("").is_err());
    }

    #[test]
    fn test_metadata() {
        let info = algorithm_info("2-Approximation").unwrap();
        assert_eq!(info.approximation_ratio, Some(2.0));
        assert!(!info.optimal);

        let info = algorithm_info("Brute Force").unwrap();
        assert!(info.optimal);
        assert_eq!(info.approximation_ratio, None);
        assert_eq!(info.time_complexity, "O(2^V * E)");

        let info = algorithm_info("Greedy").unwrap();
        assert_eq!(info.name, "Greedy");
        assert_eq!(info.approximation_ratio, None);
        assert_eq!(info.max_recommended_vertices, None);
    }

    #[test]
    fn test_result_matches_metadata() {
        let graph = generators::cycle(5).unwrap();
        for algorithm in Algorithm::ALL {
            let info = algorithm.info();
            let result = algorithm.run(&graph).run_to_completion().result;
            assert_eq!(result.algorithm_name, info.name);
            assert_eq!(result.is_optimal, info.optimal);
            assert_eq!(result.approximation_ratio, info.approximation_ratio);
        }
    }

    #[test]
    fn test_run_reports_algorithm() {
        let graph = Graph::new();
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.run(&graph).algorithm(), algorithm);
        }
    }

    #[test]
    fn test_iteration_matches_manual_stepping() {
        let graph = generators::path(5).unwrap();
        let mut run = run_algorithm("Greedy", &graph).unwrap();
        let iterated: Vec<StepResult> = run.by_ref().collect();
        let result = run.result().cloned().unwrap();

        let outcome = run_algorithm("Greedy", &graph).unwrap().run_to_completion();
        assert_eq!(iterated, outcome.steps);
        assert_eq!(result, outcome.result);
    }

    #[test]
    fn test_ensure_tractable() {
        let small = generators::path(BRUTE_FORCE_VERTEX_LIMIT).unwrap();
        let large = generators::path(BRUTE_FORCE_VERTEX_LIMIT + 1).unwrap();

        assert!(Algorithm::BruteForce.ensure_tractable(&small).is_ok());
        assert!(matches!(
            Algorithm::BruteForce.ensure_tractable(&large),
            Err(Error::InputTooLarge(_))
        ));
        assert!(Algorithm::Greedy.ensure_tractable(&large).is_ok());
    }

    #[test]
    fn test_compare_algorithms() {
        // Path 1-2-3-4: optimum 2, greedy 2, 2-approximation 4
        let graph = generators::path(4).unwrap();
        let rows = compare_algorithms(&graph);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].algorithm, Algorithm::BruteForce);
        assert_eq!(rows[0].cover_size, 2);
        assert_relative_eq!(rows[1].ratio_to_optimal.unwrap(), 1.0);
        assert_relative_eq!(rows[2].ratio_to_optimal.unwrap(), 2.0);
    }

    #[test]
    fn test_compare_skips_brute_force_on_large_graphs() {
        let graph = generators::star(BRUTE_FORCE_VERTEX_LIMIT).unwrap();
        let rows = compare_algorithms(&graph);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.ratio_to_optimal.is_none()));
        assert!(rows.iter().all(|row| row.algorithm != Algorithm::BruteForce));
    }

    #[test]
    fn test_compare_empty_graph() {
        let rows = compare_algorithms(&Graph::new());
        assert!(rows.iter().all(|row| row.cover_size == 0));
        assert!(rows.iter().all(|row| row.total_steps == 1));
        assert!(rows.iter().all(|row| row.ratio_to_optimal == Some(1.0)));
    }
}
