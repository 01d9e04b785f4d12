//! A directed graph on vertices `0..n` stored as a dense boolean adjacency matrix.
//! Undirected graphs are represented by a symmetric matrix.
//!
//! # Example
//! ```
//! use hamiltonian::cs::graph::adjacency::AdjacencyMatrix;
//!
//! let g = AdjacencyMatrix::from_rows(&[
//!     vec![0, 1, 0],
//!     vec![1, 0, 1],
//!     vec![0, 1, 0],
//! ])
//! .unwrap();
//! assert_eq!(g.len(), 3);
//! assert!(g.has_edge(1, 2));
//! assert!(!g.has_edge(0, 2));
//! assert!(g.is_symmetric());
//! ```
use ndarray::Array2;
use num_traits::Zero;

use crate::error::{GraphError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    matrix: Array2<bool>,
}

impl AdjacencyMatrix {
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(GraphError::invalid_graph("graph must have at least one vertex"));
        }
        Ok(AdjacencyMatrix {
            matrix: Array2::from_elem((n, n), false),
        })
    }

    /// Build a graph from row-major matrix entries. Any nonzero entry is an edge,
    /// so both 0/1 matrices and weighted matrices are accepted.
    pub fn from_rows<T>(rows: &[Vec<T>]) -> Result<Self>
    where
        T: Zero + Copy,
    {
        let n = rows.len();
        let mut graph = Self::new(n)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::invalid_graph(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, w) in row.iter().enumerate() {
                graph.matrix[[i, j]] = !w.is_zero();
            }
        }
        Ok(graph)
    }

    /// Build a graph with `n` vertices from a list of directed arcs `(u, v)`.
    pub fn from_edges(n: usize, arcs: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(n)?;
        for &(u, v) in arcs {
            graph.add_arc(u, v)?;
        }
        Ok(graph)
    }

    /// Wrap an existing boolean matrix. The matrix must be square and non-empty.
    pub fn from_array(matrix: Array2<bool>) -> Result<Self> {
        if matrix.is_empty() {
            return Err(GraphError::invalid_graph("graph must have at least one vertex"));
        }
        if !matrix.is_square() {
            return Err(GraphError::invalid_graph(format!(
                "adjacency matrix is {}x{}, expected a square matrix",
                matrix.nrows(),
                matrix.ncols()
            )));
        }
        Ok(AdjacencyMatrix { matrix })
    }

    /// Add a directed arc `u -> v`.
    pub fn add_arc(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.matrix[[u, v]] = true;
        Ok(())
    }

    /// Add an undirected edge between `u` and `v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_arc(u, v)?;
        self.add_arc(v, u)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    /// Always false: a graph has at least one vertex.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Whether the arc `u -> v` exists. Out-of-range vertices have no arcs.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.matrix.get((u, v)).copied().unwrap_or(false)
    }

    /// Successors of `u` in ascending order.
    ///
    /// # Panics
    /// Panics if `u` is not a vertex of the graph.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.matrix
            .row(u)
            .into_iter()
            .enumerate()
            .filter_map(|(v, &edge)| edge.then_some(v))
    }

    /// Number of arcs leaving `u`, self loops included.
    pub fn out_degree(&self, u: usize) -> usize {
        self.neighbors(u).count()
    }

    /// True when every arc has a reverse arc, i.e. the graph is undirected.
    pub fn is_symmetric(&self) -> bool {
        self.matrix == self.matrix.t()
    }

    /// Read-only view of the underlying matrix.
    pub fn as_array(&self) -> &Array2<bool> {
        &self.matrix
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.len() {
            return Err(GraphError::invalid_graph(format!(
                "vertex {} is out of range for a graph with {} vertices",
                v,
                self.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_edges() {
        let g = AdjacencyMatrix::new(3).unwrap();
        assert_eq!(g.len(), 3);
        for u in 0..3 {
            assert_eq!(g.out_degree(u), 0);
        }
    }

    #[test]
    fn test_empty_graph_rejected() {
        assert!(matches!(
            AdjacencyMatrix::new(0),
            Err(GraphError::InvalidGraph(_))
        ));
        let rows: Vec<Vec<u8>> = vec![];
        assert!(matches!(
            AdjacencyMatrix::from_rows(&rows),
            Err(GraphError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![0, 1], vec![1]];
        assert!(matches!(
            AdjacencyMatrix::from_rows(&rows),
            Err(GraphError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_non_square_array_rejected() {
        let m = Array2::from_elem((2, 3), false);
        assert!(matches!(
            AdjacencyMatrix::from_array(m),
            Err(GraphError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_weighted_rows_treated_as_boolean() {
        let g = AdjacencyMatrix::from_rows(&[vec![0.0, 2.5], vec![0.0, 0.0]]).unwrap();
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert!(!g.is_symmetric());
    }

    #[test]
    fn test_from_edges_out_of_range() {
        assert!(matches!(
            AdjacencyMatrix::from_edges(3, &[(0, 1), (2, 3)]),
            Err(GraphError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_add_edge_is_undirected() {
        let mut g = AdjacencyMatrix::new(4).unwrap();
        g.add_edge(0, 3).unwrap();
        g.add_arc(1, 2).unwrap();
        assert!(g.has_edge(0, 3) && g.has_edge(3, 0));
        assert!(g.has_edge(1, 2) && !g.has_edge(2, 1));
        assert!(!g.has_edge(0, 9));
    }

    #[test]
    fn test_neighbors_ascending() {
        let g = AdjacencyMatrix::from_edges(4, &[(2, 3), (2, 0), (2, 1)]).unwrap();
        assert_eq!(g.neighbors(2).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(g.out_degree(2), 3);
        assert_eq!(g.neighbors(0).count(), 0);
    }
}
