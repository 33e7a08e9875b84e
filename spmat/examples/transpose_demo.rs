//! Walkthrough of the container API: population, dense rendering,
//! transpose, multiplication, and scalar division.

use spmat::{MapMatrix, SparseMatrix};

fn main() -> spmat::Result<()> {
    let mut m = MapMatrix::<f64>::new(2, 3);
    m.put(1, 0, 1.0)?;
    m.put(1, 2, 2.0)?;
    println!("{m}");

    m.transpose();
    println!("After transpose:\n{m}");
    assert_eq!(m.dimensions(), (3, 2));

    // Scale every column by two through a diagonal matrix
    let mut scale = MapMatrix::<f64>::new(2, 2);
    scale.put(0, 0, 2.0)?;
    scale.put(1, 1, 2.0)?;
    let product = m.checked_mul(&scale)?;
    println!("Scaled by 2:\n{product}");

    let halved = &product / 2.0;
    println!("Halved again:\n{halved}");

    let doubled_back = halved.checked_add(&halved)?;
    println!(
        "Doubling restores {} stored entries",
        doubled_back.nnz()
    );
    Ok(())
}
