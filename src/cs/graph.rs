pub mod adjacency;
pub mod hamiltonian;

pub use adjacency::AdjacencyMatrix;
pub use hamiltonian::{
    hamiltonian_path, hamiltonian_path_from, is_hamiltonian_path, PathFinder, SearchResult,
    Strategy,
};
