use thiserror::Error;

/// Errors raised by the graph algorithms in this crate.
///
/// A search that runs to completion without finding a path is not an error;
/// it is reported through [`crate::graph::hamiltonian::SearchResult::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The adjacency data does not describe a non-empty square matrix, or an
    /// edge refers to a vertex outside the graph.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// The requested start vertex is not in `0..len`.
    #[error("start vertex {start} is out of range for a graph with {len} vertices")]
    InvalidStart { start: usize, len: usize },

    /// The node budget ran out before the search reached a decision.
    #[error("search budget exhausted after expanding {expanded} nodes")]
    BudgetExhausted { expanded: usize },
}

impl GraphError {
    pub fn invalid_graph(msg: impl Into<String>) -> Self {
        GraphError::InvalidGraph(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GraphError::invalid_graph("matrix is empty").to_string(),
            "invalid graph: matrix is empty"
        );
        assert_eq!(
            GraphError::InvalidStart { start: 7, len: 4 }.to_string(),
            "start vertex 7 is out of range for a graph with 4 vertices"
        );
        assert_eq!(
            GraphError::BudgetExhausted { expanded: 10 }.to_string(),
            "search budget exhausted after expanding 10 nodes"
        );
    }
}
