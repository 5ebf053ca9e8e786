use std::collections::BTreeSet;
use std::fmt;

use crate::cs::error::{Error, Result};

/// A graph vertex, identified by an integer id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(usize);

impl Vertex {
    pub fn new(id: usize) -> Self {
        Vertex(id)
    }

    pub fn id(self) -> usize {
        self.0
    }
}

impl From<usize> for Vertex {
    fn from(id: usize) -> Self {
        Vertex(id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected edge.
///
/// Endpoints are stored smaller id first, so `(u, v)` and `(v, u)` compare,
/// hash and order identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    u: Vertex,
    v: Vertex,
}

impl Edge {
    /// Creates an edge between two distinct vertices.
    ///
    /// # Errors
    /// * `Error::InvalidEdge` if `u == v`
    pub fn new(u: Vertex, v: Vertex) -> Result<Self> {
        if u == v {
            return Err(Error::InvalidEdge(u.id()));
        }
        Ok(if u < v { Edge { u, v } } else { Edge { u: v, v: u } })
    }

    /// Creates an edge from raw vertex ids.
    pub fn from_ids(u: usize, v: usize) -> Result<Self> {
        Edge::new(Vertex(u), Vertex(v))
    }

    /// The endpoint with the smaller id.
    pub fn u(&self) -> Vertex {
        self.u
    }

    /// The endpoint with the larger id.
    pub fn v(&self) -> Vertex {
        self.v
    }

    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.u, self.v)
    }

    /// Returns true if `vertex` is one of the two endpoints.
    pub fn touches(&self, vertex: Vertex) -> bool {
        self.u == vertex || self.v == vertex
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if the edge
    /// does not touch it.
    pub fn other(&self, vertex: Vertex) -> Option<Vertex> {
        if self.u == vertex {
            Some(self.v)
        } else if self.v == vertex {
            Some(self.u)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}

/// A simple undirected graph: no self-loops, no parallel edges.
///
/// Every edge endpoint is a member of the vertex set. This is checked when
/// edges are added, so algorithms never re-validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: BTreeSet<Vertex>,
    edges: BTreeSet<Edge>,
    /// `None` once ids above the largest vertex are used up.
    next_vertex_id: Option<usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: BTreeSet::new(),
            next_vertex_id: Some(1),
        }
    }

    /// Builds a graph from explicit vertex ids and edge pairs.
    ///
    /// # Errors
    /// * `Error::VertexNotFound` if an edge references a vertex not in `vertices`
    /// * `Error::InvalidEdge` if an edge is a self-loop
    ///
    /// # Examples
    /// ```
    /// use vc_algos::graph::Graph;
    ///
    /// let graph = Graph::from_parts([1, 2, 3], [(1, 2), (3, 2)]).unwrap();
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    ///
    /// assert!(Graph::from_parts([1, 2], [(1, 5)]).is_err());
    /// ```
    pub fn from_parts<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = usize>,
        E: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Graph::new();
        for id in vertices {
            graph.insert_vertex(Vertex(id));
        }
        for (u, v) in edges {
            graph.add_edge(Vertex(u), Vertex(v))?;
        }
        Ok(graph)
    }

    /// Adds a vertex with the next free id and returns it.
    ///
    /// # Errors
    /// * `Error::InputTooLarge` if the graph already holds `usize::MAX`
    pub fn add_vertex(&mut self) -> Result<Vertex> {
        while let Some(id) = self.next_vertex_id {
            self.next_vertex_id = id.checked_add(1);
            let vertex = Vertex(id);
            if self.vertices.insert(vertex) {
                return Ok(vertex);
            }
        }
        Err(Error::InputTooLarge(
            "no vertex id left above the largest one in use".to_string(),
        ))
    }

    /// Inserts a vertex with a caller-chosen id. Returns false if it was
    /// already present.
    pub fn insert_vertex(&mut self, vertex: Vertex) -> bool {
        if self.next_vertex_id.is_some_and(|next| vertex.id() >= next) {
            self.next_vertex_id = vertex.id().checked_add(1);
        }
        self.vertices.insert(vertex)
    }

    /// Adds the edge `(u, v)`. Returns `Ok(false)` if the edge already exists.
    ///
    /// # Errors
    /// * `Error::VertexNotFound` if either endpoint is missing
    /// * `Error::InvalidEdge` for a self-loop
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<bool> {
        for endpoint in [u, v] {
            if !self.vertices.contains(&endpoint) {
                return Err(Error::VertexNotFound(endpoint.id()));
            }
        }
        let edge = Edge::new(u, v)?;
        Ok(self.edges.insert(edge))
    }

    /// Removes a vertex together with all of its incident edges.
    pub fn remove_vertex(&mut self, vertex: Vertex) -> bool {
        if !self.vertices.remove(&vertex) {
            return false;
        }
        self.edges.retain(|edge| !edge.touches(vertex));
        true
    }

    pub fn remove_edge(&mut self, edge: &Edge) -> bool {
        self.edges.remove(edge)
    }

    /// Returns a copy of the vertex set.
    pub fn vertices(&self) -> BTreeSet<Vertex> {
        self.vertices.clone()
    }

    /// Returns a copy of the edge set.
    pub fn edges(&self) -> BTreeSet<Edge> {
        self.edges.clone()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn incident_edges(&self, vertex: Vertex) -> BTreeSet<Edge> {
        self.edges
            .iter()
            .filter(|edge| edge.touches(vertex))
            .copied()
            .collect()
    }

    pub fn neighbors(&self, vertex: Vertex) -> BTreeSet<Vertex> {
        self.edges
            .iter()
            .filter_map(|edge| edge.other(vertex))
            .collect()
    }

    pub fn degree(&self, vertex: Vertex) -> usize {
        self.edges.iter().filter(|edge| edge.touches(vertex)).count()
    }

    /// Returns true if every edge has at least one endpoint in `cover`.
    pub fn is_vertex_cover(&self, cover: &BTreeSet<Vertex>) -> bool {
        self.edges
            .iter()
            .all(|edge| cover.contains(&edge.u()) || cover.contains(&edge.v()))
    }

    /// Removes all vertices and edges and resets id assignment.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.next_vertex_id = Some(1);
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph(vertices={}, edges={})",
            self.vertices.len(),
            self.edges.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: usize) -> Vertex {
        Vertex::new(id)
    }

    #[test]
    fn test_edge_is_order_independent() {
        let a = Edge::from_ids(1, 2).unwrap();
        let b = Edge::from_ids(2, 1).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.u(), v(1));
        assert_eq!(b.v(), v(2));
        assert_eq!(b.to_string(), "(1, 2)");
    }

    #[test]
    fn test_edge_rejects_self_loop() {
        assert_eq!(Edge::from_ids(3, 3), Err(Error::InvalidEdge(3)));
    }

    #[test]
    fn test_edge_incidence() {
        let edge = Edge::from_ids(4, 9).unwrap();
        assert!(edge.touches(v(4)));
        assert!(edge.touches(v(9)));
        assert!(!edge.touches(v(5)));
        assert_eq!(edge.other(v(4)), Some(v(9)));
        assert_eq!(edge.other(v(9)), Some(v(4)));
        assert_eq!(edge.other(v(1)), None);
    }

    #[test]
    fn test_add_vertex_assigns_sequential_ids() {
        let mut graph = Graph::new();
        let a = graph.add_vertex().unwrap();
        let b = graph.add_vertex().unwrap();
        assert_eq!(a, v(1));
        assert_eq!(b, v(2));

        graph.insert_vertex(v(10));
        assert_eq!(graph.add_vertex(), Ok(v(11)));
    }

    #[test]
    fn test_largest_vertex_id() {
        let mut graph = Graph::from_parts([1, usize::MAX], [(1, usize::MAX)]).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.degree(v(usize::MAX)), 1);
        assert!(matches!(graph.add_vertex(), Err(Error::InputTooLarge(_))));

        // Smaller ids can still be inserted by hand
        assert!(graph.insert_vertex(v(2)));
        assert!(matches!(graph.add_vertex(), Err(Error::InputTooLarge(_))));

        graph.clear();
        assert_eq!(graph.add_vertex(), Ok(v(1)));
    }

    #[test]
    fn test_add_edge() {
        let mut graph = Graph::new();
        let a = graph.add_vertex().unwrap();
        let b = graph.add_vertex().unwrap();

        assert_eq!(graph.add_edge(a, b), Ok(true));
        assert_eq!(graph.add_edge(b, a), Ok(false));
        assert_eq!(graph.add_edge(a, a), Err(Error::InvalidEdge(1)));
        assert_eq!(graph.add_edge(a, v(42)), Err(Error::VertexNotFound(42)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_from_parts_validates_endpoints() {
        let err = Graph::from_parts([1, 2, 3], [(1, 2), (2, 4)]).unwrap_err();
        assert_eq!(err, Error::VertexNotFound(4));
    }

    #[test]
    fn test_accessors_return_copies() {
        let graph = Graph::from_parts([1, 2, 3], [(1, 2), (2, 3)]).unwrap();
        let mut edges = graph.edges();
        edges.clear();
        let mut vertices = graph.vertices();
        vertices.clear();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_incidence_queries() {
        let graph = Graph::from_parts(1..=4, [(1, 2), (1, 3), (1, 4), (2, 3)]).unwrap();
        assert_eq!(graph.degree(v(1)), 3);
        assert_eq!(graph.degree(v(4)), 1);
        assert_eq!(graph.neighbors(v(1)), BTreeSet::from([v(2), v(3), v(4)]));
        assert_eq!(graph.incident_edges(v(3)).len(), 2);
    }

    #[test]
    fn test_remove_vertex_drops_incident_edges() {
        let mut graph = Graph::from_parts(1..=3, [(1, 2), (2, 3), (1, 3)]).unwrap();
        assert!(graph.remove_vertex(v(2)));
        assert!(!graph.remove_vertex(v(2)));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edges(), BTreeSet::from([Edge::from_ids(1, 3).unwrap()]));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = Graph::from_parts(1..=2, [(1, 2)]).unwrap();
        let edge = Edge::from_ids(2, 1).unwrap();
        assert!(graph.contains_edge(&edge));
        assert!(graph.remove_edge(&edge));
        assert!(!graph.remove_edge(&edge));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_is_vertex_cover() {
        let graph = Graph::from_parts(1..=4, [(1, 2), (2, 3), (3, 4)]).unwrap();
        assert!(graph.is_vertex_cover(&[v(2), v(3)].into_iter().collect()));
        assert!(!graph.is_vertex_cover(&[v(1), v(4)].into_iter().collect()));
        assert!(Graph::new().is_vertex_cover(&BTreeSet::new()));
    }

    #[test]
    fn test_clear_and_display() {
        let mut graph = Graph::from_parts(1..=3, [(1, 2)]).unwrap();
        assert_eq!(graph.to_string(), "Graph(vertices=3, edges=1)");
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.add_vertex(), Ok(v(1)));
    }
}
