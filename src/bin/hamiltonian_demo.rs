use hamiltonian::graph::{hamiltonian_path, AdjacencyMatrix};

fn report(name: &str, rows: &[Vec<u8>]) -> hamiltonian::Result<()> {
    println!("{}:", name);
    let graph = AdjacencyMatrix::from_rows(rows)?;
    match hamiltonian_path(&graph)?.into_path() {
        Some(path) => println!("Hamiltonian path found: {:?}", path),
        None => println!("No Hamiltonian path exists."),
    }
    Ok(())
}

fn main() -> hamiltonian::Result<()> {
    report(
        "Hamiltonian graph",
        &[
            vec![0, 1, 1, 1],
            vec![1, 0, 1, 0],
            vec![1, 1, 0, 1],
            vec![1, 0, 1, 0],
        ],
    )?;
    println!();
    report(
        "Non-Hamiltonian graph",
        &[
            vec![0, 1, 0, 0],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 0],
            vec![0, 0, 0, 0],
        ],
    )
}
