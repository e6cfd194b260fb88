//! Assemble the rows of a sparse system as fixed-length vectors, then
//! combine and compact them

use spvec::{GrowthPolicy, Result, SparseVector, VectorConfig};
use std::time::Instant;

fn main() -> Result<()> {
    let n = 1_000_000;
    let nrows = 64;

    println!("Assembling {nrows} rows of length {n}");

    // Each row touches a handful of neighbours, so grow in small chunks
    let config = VectorConfig::default().with_growth(GrowthPolicy::Chunked(8));

    let start = Instant::now();
    let mut rows = Vec::with_capacity(nrows);
    for r in 0..nrows {
        let mut row: SparseVector<f64> = SparseVector::with_config(config.clone());
        row.fix_length(n)?;

        let center = r * (n / nrows);
        row[center] = 2.0;
        if center > 0 {
            row[center - 1] = -1.0;
        }
        if center + 1 < n {
            row[center + 1] = -1.0;
        }
        rows.push(row);
    }
    println!("Assembled in {:?}", start.elapsed());

    // A fixed-length row refuses to be resized
    if let Err(err) = rows[0].set_length(n + 1) {
        println!("Resize rejected: {err}");
    }

    // Accumulate every row into one vector; cancelling entries stay stored
    let mut total: SparseVector<f64> = SparseVector::with_length(n);
    for row in &rows {
        total.try_add_assign(row)?;
    }
    let mut difference = total.try_sub(&total)?;
    println!(
        "Sum holds {} entries, difference holds {} before compaction",
        total.nvalues(),
        difference.nvalues()
    );

    let removed = difference.compact();
    println!(
        "Compaction removed {removed} entries, {} allocated",
        difference.allocated()
    );

    let first = &rows[0];
    println!("Row 0 self inner product: {}", first * first);
    println!("Row 0 in sparse form: {first}");
    Ok(())
}
