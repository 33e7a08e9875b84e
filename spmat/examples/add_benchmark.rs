//! Benchmark driver comparing dense two-dimensional addition against
//! sparse map-backed addition over identical random data.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmat::{MapMatrix, SparseMatrix};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version)]
#[command(about = "Compare dense Vec<Vec<f64>> addition against sparse map-backed addition")]
struct Cli {
    /// Number of matrix rows
    #[arg(long, default_value_t = 500)]
    rows: usize,

    /// Number of matrix columns
    #[arg(long, default_value_t = 1000)]
    cols: usize,

    /// Random entries to populate per matrix
    #[arg(long, default_value_t = 40)]
    entries: usize,

    /// RNG seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn dense_add(lhs: &[Vec<f64>], rhs: &mut [Vec<f64>]) {
    for (dst_row, src_row) in rhs.iter_mut().zip(lhs) {
        for (dst, src) in dst_row.iter_mut().zip(src_row) {
            *dst += *src;
        }
    }
}

fn main() -> spmat::Result<()> {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let mut dense1 = vec![vec![0.0f64; cli.cols]; cli.rows];
    let mut dense2 = vec![vec![0.0f64; cli.cols]; cli.rows];
    let mut sparse1 = MapMatrix::<f64>::new(cli.rows, cli.cols);
    let mut sparse2 = MapMatrix::<f64>::new(cli.rows, cli.cols);

    for _ in 0..cli.entries {
        let row = rng.gen_range(0..cli.rows);
        let col = rng.gen_range(0..cli.cols);
        let value = rng.gen_range(-200.0..200.0);
        dense1[row][col] = value;
        sparse1.put(row, col, value)?;

        let row = rng.gen_range(0..cli.rows);
        let col = rng.gen_range(0..cli.cols);
        let value = rng.gen_range(-200.0..200.0);
        dense2[row][col] = value;
        sparse2.put(row, col, value)?;
    }

    println!(
        "Matrix: {}x{} with {} random entries each",
        cli.rows, cli.cols, cli.entries
    );

    let start = Instant::now();
    dense_add(&dense1, &mut dense2);
    println!("Add time on dense vectors:    {:.6}s", start.elapsed().as_secs_f64());

    let start = Instant::now();
    let sum = sparse1.checked_add(&sparse2)?;
    println!("Add time on sparse structure: {:.6}s", start.elapsed().as_secs_f64());

    println!(
        "Sparse result stores {} of {} logical cells",
        sum.nnz(),
        cli.rows * cli.cols
    );
    Ok(())
}
