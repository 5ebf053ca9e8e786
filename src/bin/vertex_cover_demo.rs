use vc_algos::graph::{generators, Graph};
use vc_algos::vertex_cover::{
    algorithm_info, available_algorithms, compare_algorithms, format_vertices, run_algorithm,
};
use vc_algos::Result;

fn sample_graph() -> Result<Graph> {
    // Triangle 1-2-3 with vertex 4 hanging off 2 and 3
    Graph::from_parts(1..=4, [(1, 2), (2, 3), (3, 1), (2, 4), (3, 4)])
}

fn run_demo(name: &str, graph: &Graph) -> Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("Running {name} on {graph}");
    println!("{}", "=".repeat(60));

    let info = algorithm_info(name)?;
    println!("Description: {}", info.description);
    println!("Time Complexity: {}", info.time_complexity);
    if let Some(ratio) = info.approximation_ratio {
        println!("Approximation Ratio: {ratio}");
    }
    println!("Optimal: {}", if info.optimal { "Yes" } else { "No" });
    println!();

    let outcome = run_algorithm(name, graph)?.run_to_completion();
    for (i, step) in outcome.steps.iter().enumerate() {
        println!("Step {}: {}", i + 1, step.message);
        if !step.vertex_cover_so_far.is_empty() {
            println!("  Current vertex cover: {}", format_vertices(&step.vertex_cover_so_far));
        }
        if let Some(edge) = step.selected_edge {
            println!("  Selected edge: {edge}");
        }
        if !step.added_vertices.is_empty() {
            println!("  Added vertices: {}", format_vertices(&step.added_vertices));
        }
        if !step.removed_edges.is_empty() {
            println!("  Removed {} edges", step.removed_edges.len());
        }
        println!("  Remaining edges: {}", step.remaining_edges.len());
    }

    println!("\nFinal Result:\n{}", outcome.result);
    println!("Elapsed: {:?}", outcome.elapsed);
    Ok(())
}

fn compare(graph: &Graph) {
    println!("\n{}", "=".repeat(60));
    println!("Algorithm Comparison on {graph}");
    println!("{}", "=".repeat(60));
    for row in compare_algorithms(graph) {
        let ratio = row
            .ratio_to_optimal
            .map_or_else(|| "n/a".to_string(), |r| format!("{r:.2}"));
        println!(
            "{:<16} size {:>3}  steps {:>5}  ratio {ratio}",
            row.algorithm.name(),
            row.cover_size,
            row.total_steps
        );
    }
}

fn main() -> Result<()> {
    let graph = sample_graph()?;
    for name in available_algorithms() {
        run_demo(name, &graph)?;
    }

    compare(&graph);
    compare(&generators::star(5)?);
    compare(&generators::cycle(7)?);
    Ok(())
}
