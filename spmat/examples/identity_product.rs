//! Multiply a small matrix by the identity and write all three results

use spmat::{read_matrix, write_matrix, Operation, Result, SparseMatrix, SubtractMode};

fn main() -> Result<()> {
    let a = SparseMatrix::from_triples(2, 2, [(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)]);
    let identity = SparseMatrix::from_triples(2, 2, [(0, 0, 1), (1, 1, 1)]);

    write_matrix("demo_a.txt", &a)?;
    write_matrix("demo_identity.txt", &identity)?;

    let a = read_matrix("demo_a.txt")?;
    let identity = read_matrix("demo_identity.txt")?;

    for operation in Operation::ALL {
        let result = operation.apply(&a, &identity, SubtractMode::KeyDriven)?;
        let path = format!("demo_{}_output.txt", operation.name());
        write_matrix(&path, &result)?;
        println!("{operation}:\n{result}\n-> {path}\n");
    }

    Ok(())
}
