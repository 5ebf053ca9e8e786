use rand::Rng;

use crate::cs::error::{Error, Result};
use crate::cs::graph::{Graph, Vertex};

fn with_vertices(n: usize) -> Result<Graph> {
    let mut graph = Graph::new();
    for _ in 0..n {
        graph.add_vertex()?;
    }
    Ok(graph)
}

fn connect(graph: &mut Graph, u: usize, v: usize) -> Result<()> {
    graph.add_edge(Vertex::new(u), Vertex::new(v))?;
    Ok(())
}

/// Path `1 - 2 - ... - n`.
pub fn path(n: usize) -> Result<Graph> {
    let mut graph = with_vertices(n)?;
    for i in 1..n {
        connect(&mut graph, i, i + 1)?;
    }
    Ok(graph)
}

/// Cycle `1 - 2 - ... - n - 1`. Requires at least three vertices.
pub fn cycle(n: usize) -> Result<Graph> {
    if n < 3 {
        return Err(Error::invalid_input("a cycle needs at least 3 vertices"));
    }
    let mut graph = path(n)?;
    connect(&mut graph, n, 1)?;
    Ok(graph)
}

/// Star with center `1` and leaves `2..=arms + 1`.
pub fn star(arms: usize) -> Result<Graph> {
    let mut graph = with_vertices(arms + 1)?;
    for leaf in 2..=arms + 1 {
        connect(&mut graph, 1, leaf)?;
    }
    Ok(graph)
}

/// Complete graph on `n` vertices.
pub fn complete(n: usize) -> Result<Graph> {
    let mut graph = with_vertices(n)?;
    for u in 1..=n {
        for v in u + 1..=n {
            connect(&mut graph, u, v)?;
        }
    }
    Ok(graph)
}

/// Erdős–Rényi `G(n, p)`: every pair is joined independently with
/// probability `p`.
///
/// # Errors
/// * `Error::InvalidInput` if `p` is outside `[0, 1]`
pub fn random<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<Graph> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_input(format!(
            "edge probability must be in [0, 1], got {p}"
        )));
    }
    let mut graph = with_vertices(n)?;
    for u in 1..=n {
        for v in u + 1..=n {
            if rng.gen_bool(p) {
                connect(&mut graph, u, v)?;
            }
        }
    }
    Ok(graph)
}
