use std::fmt;

use bitvec::prelude::*;
use log::{debug, trace};

use crate::cs::graph::adjacency::AdjacencyMatrix;
use crate::error::{GraphError, Result};

/// A backtracking search for a Hamiltonian path: a sequence visiting every vertex
/// exactly once, starting from a fixed vertex, with an arc between each pair of
/// consecutive vertices. No return arc to the start is required.
///
/// Candidates are tried in ascending vertex order and the first complete path wins,
/// so the result is the lexicographically smallest Hamiltonian path from `start`.
///
/// # Example
/// ```
/// use hamiltonian::cs::graph::adjacency::AdjacencyMatrix;
/// use hamiltonian::cs::graph::hamiltonian::{hamiltonian_path, SearchResult};
///
/// let g = AdjacencyMatrix::from_rows(&[
///     vec![0, 1, 1, 1],
///     vec![1, 0, 1, 0],
///     vec![1, 1, 0, 1],
///     vec![1, 0, 1, 0],
/// ])
/// .unwrap();
///
/// let result = hamiltonian_path(&g).unwrap();
/// assert_eq!(result, SearchResult::Found(vec![0, 1, 2, 3]));
/// ```

/// Outcome of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// A Hamiltonian path, beginning at the start vertex.
    Found(Vec<usize>),
    /// The search space was exhausted without completing a path.
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn path(&self) -> Option<&[usize]> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<usize>> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Found(path) => write!(f, "found path {:?}", path),
            SearchResult::NotFound => write!(f, "no Hamiltonian path"),
        }
    }
}

/// How the search walks the tree of partial paths. Both strategies visit
/// candidates in the same order and return the same path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// One stack frame per path position.
    #[default]
    Recursive,
    /// Explicit cursor per position; stack depth does not grow with the graph.
    Iterative,
}

/// Configurable Hamiltonian path search.
///
/// # Example
/// ```
/// use hamiltonian::cs::graph::adjacency::AdjacencyMatrix;
/// use hamiltonian::cs::graph::hamiltonian::{PathFinder, SearchResult, Strategy};
///
/// let mut g = AdjacencyMatrix::new(3).unwrap();
/// g.add_edge(0, 1).unwrap();
/// g.add_edge(1, 2).unwrap();
///
/// let finder = PathFinder::new()
///     .with_strategy(Strategy::Iterative)
///     .with_node_budget(1_000);
/// assert_eq!(finder.search(&g, 2).unwrap(), SearchResult::Found(vec![2, 1, 0]));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathFinder {
    strategy: Strategy,
    node_budget: Option<usize>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Cap the number of tentative assignments the search may make. When the cap
    /// is reached before a decision, the search fails with `BudgetExhausted`.
    pub fn with_node_budget(mut self, limit: usize) -> Self {
        self.node_budget = Some(limit);
        self
    }

    /// Search for a Hamiltonian path starting at `start`.
    ///
    /// # Errors
    /// * `InvalidStart` if `start` is not a vertex of `graph`
    /// * `BudgetExhausted` if a node budget is set and runs out
    pub fn search(&self, graph: &AdjacencyMatrix, start: usize) -> Result<SearchResult> {
        let n = graph.len();
        if start >= n {
            return Err(GraphError::InvalidStart { start, len: n });
        }
        debug!(
            "hamiltonian search: {} vertices, start {}, {:?}",
            n, start, self.strategy
        );

        let mut search = Search {
            graph,
            path: PartialPath::new(n, start),
            expanded: 0,
            budget: self.node_budget,
        };
        let complete = match self.strategy {
            Strategy::Recursive => search.extend(1)?,
            Strategy::Iterative => search.extend_iterative()?,
        };
        debug!(
            "hamiltonian search finished after {} expansions: complete = {}",
            search.expanded, complete
        );

        if !complete {
            return Ok(SearchResult::NotFound);
        }
        match search.path.into_vertices() {
            Some(path) => Ok(SearchResult::Found(path)),
            None => Ok(SearchResult::NotFound),
        }
    }
}

/// Search for a Hamiltonian path from vertex 0.
pub fn hamiltonian_path(graph: &AdjacencyMatrix) -> Result<SearchResult> {
    hamiltonian_path_from(graph, 0)
}

/// Search for a Hamiltonian path from `start` with the default recursive strategy
/// and no budget.
pub fn hamiltonian_path_from(graph: &AdjacencyMatrix, start: usize) -> Result<SearchResult> {
    PathFinder::new().search(graph, start)
}

/// Returns true if `path` visits every vertex of `graph` exactly once, begins at
/// `start`, and follows an arc between each consecutive pair.
pub fn is_hamiltonian_path(graph: &AdjacencyMatrix, path: &[usize], start: usize) -> bool {
    let n = graph.len();
    if path.len() != n || path.first() != Some(&start) {
        return false;
    }
    let mut seen = bitvec![0; n];
    for &v in path {
        if v >= n || seen[v] {
            return false;
        }
        seen.set(v, true);
    }
    path.windows(2).all(|pair| graph.has_edge(pair[0], pair[1]))
}

/// Path slots under construction. Slot 0 holds the start; `None` marks a slot
/// not yet assigned. `visited` mirrors the assigned slots.
struct PartialPath {
    slots: Vec<Option<usize>>,
    visited: BitVec,
}

impl PartialPath {
    fn new(n: usize, start: usize) -> Self {
        let mut slots = vec![None; n];
        slots[0] = Some(start);
        let mut visited = bitvec![0; n];
        visited.set(start, true);
        PartialPath { slots, visited }
    }

    fn assign(&mut self, position: usize, v: usize) {
        self.slots[position] = Some(v);
        self.visited.set(v, true);
    }

    fn unassign(&mut self, position: usize) {
        if let Some(v) = self.slots[position].take() {
            self.visited.set(v, false);
        }
    }

    fn into_vertices(self) -> Option<Vec<usize>> {
        self.slots.into_iter().collect()
    }
}

/// Whether `candidate` may fill `position`: there is an arc from the vertex in
/// the previous slot, and `candidate` is not already on the path.
fn is_safe(
    candidate: usize,
    position: usize,
    path: &PartialPath,
    graph: &AdjacencyMatrix,
) -> bool {
    match path.slots[position - 1] {
        Some(prev) => graph.has_edge(prev, candidate) && !path.visited[candidate],
        None => false,
    }
}

struct Search<'g> {
    graph: &'g AdjacencyMatrix,
    path: PartialPath,
    expanded: usize,
    budget: Option<usize>,
}

impl Search<'_> {
    fn charge(&mut self) -> Result<()> {
        if self.budget == Some(self.expanded) {
            return Err(GraphError::BudgetExhausted {
                expanded: self.expanded,
            });
        }
        self.expanded += 1;
        Ok(())
    }

    /// Fill slots `position..n`. Returns true once every slot is assigned;
    /// on false, slots from `position` on are left unassigned.
    fn extend(&mut self, position: usize) -> Result<bool> {
        let n = self.graph.len();
        if position == n {
            return Ok(true);
        }

        for v in 0..n {
            if !is_safe(v, position, &self.path, self.graph) {
                continue;
            }
            self.charge()?;
            self.path.assign(position, v);
            if self.extend(position + 1)? {
                return Ok(true);
            }
            trace!("backtrack: vertex {} at position {}", v, position);
            self.path.unassign(position);
        }
        Ok(false)
    }

    /// Same traversal as `extend(1)`, driven by a per-position cursor instead of
    /// the call stack.
    fn extend_iterative(&mut self) -> Result<bool> {
        let n = self.graph.len();
        // next[p] is the first candidate not yet tried at position p.
        let mut next = vec![0usize; n];
        let mut position = 1;

        while position < n {
            if let Some(v) = self.path.slots[position] {
                trace!("backtrack: vertex {} at position {}", v, position);
                self.path.unassign(position);
            }

            let mut placed = false;
            while next[position] < n {
                let v = next[position];
                next[position] += 1;
                if is_safe(v, position, &self.path, self.graph) {
                    self.charge()?;
                    self.path.assign(position, v);
                    placed = true;
                    break;
                }
            }

            if placed {
                position += 1;
                if position < n {
                    next[position] = 0;
                }
            } else {
                next[position] = 0;
                position -= 1;
                if position == 0 {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}
