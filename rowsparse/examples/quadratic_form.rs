//! Parse a matrix literal, build a sparse Laplacian and evaluate a few operators

use rowsparse::{MatrixOperations, Result, SparseMatrixd};

fn main() -> Result<()> {
    let a: SparseMatrixd = "{{4,-1,0},{-1,4,-1},{0,-1,4}}".parse()?;
    println!(
        "Parsed {}x{} matrix with {} stored entries",
        a.rows(),
        a.cols(),
        a.nnz()
    );
    println!("Diagonal: {:?}", a.diagonal()?);

    let v = vec![1.0, 2.0, 3.0];
    println!("A v = {:?}", (&a * &v)?);
    println!("vᵗ A v = {}", SparseMatrixd::quadratic(&a, &v)?);

    // 1D Laplacian with a million rows but only three entries per row
    let n = 1_000_000;
    let laplacian = build_laplacian(n)?;
    println!(
        "Laplacian: {n}x{n}, {} stored entries, max magnitude {}",
        laplacian.nnz(),
        laplacian.max_magnitude()
    );

    let ones = vec![1.0; n];
    println!("1ᵗ L 1 = {}", SparseMatrixd::quadratic(&laplacian, &ones)?);

    let squared = (&laplacian * &laplacian)?;
    println!(
        "L² has {} stored entries, row 1 head = {:?}",
        squared.nnz(),
        &squared.dense_row(1)?[..5]
    );
    Ok(())
}

/// Tridiagonal second-difference matrix
fn build_laplacian(n: usize) -> Result<SparseMatrixd> {
    let mut m = SparseMatrixd::new_square(n);
    for i in 0..n {
        m.set(i, i, 2.0)?;
        if i > 0 {
            m.set(i, i - 1, -1.0)?;
        }
        if i + 1 < n {
            m.set(i, i + 1, -1.0)?;
        }
    }
    Ok(m)
}
