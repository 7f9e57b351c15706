//! Work sharding with balanced partitioning.
//!
//! A batch of jobs is split across a fixed pool of workers. Bucket sizes
//! never differ by more than one, whatever the batch length, and leftover
//! jobs are redistributed deterministically.
//!
//! Run: cargo run --example work_sharding

use remold::{index_by, partition, try_partition, Key, Value};

fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(65));
    println!("  {}", title);
    println!("{}", "=".repeat(65));
}

fn main() -> remold::Result<()> {
    print_header("WORK SHARDING\n  Balanced Partitioning Across Workers");

    // =========================================================================
    // The canonical uneven split
    // =========================================================================
    let jobs: Vec<i64> = (1..=6).collect();
    let shards = partition(jobs, 4);

    println!("\n6 jobs across 4 workers:");
    for (worker, shard) in shards.iter().enumerate() {
        println!("  worker {} <- {:?}", worker, shard);
    }
    println!("  (leftovers were prepended round-robin, rotating the shard order)");

    // =========================================================================
    // Sizes stay within one of each other at every batch length
    // =========================================================================
    println!("\nShard sizes for batches of 1..=12 across 4 workers:");
    for n in 1..=12_i64 {
        let shards = partition((1..=n).collect::<Vec<i64>>(), 4);
        let sizes: Vec<usize> = shards.iter().map(Vec::len).collect();
        println!("  {:>2} jobs -> {:?}", n, sizes);
    }

    // =========================================================================
    // Sharding structured jobs
    // =========================================================================
    let batch: Vec<Value> = (0..7)
        .map(|i| {
            Value::from(serde_json::json!({
                "job": format!("encode-{}", i),
                "priority": i % 3
            }))
        })
        .collect();

    let by_name = index_by(&batch, |job| {
        let name = job.as_map()?.get(&Key::str("job"))?.as_scalar()?;
        Some(Key::str(name.to_string()))
    });
    println!("\nIndexed {} jobs by name before sharding", by_name.len());

    let shards = try_partition(batch, 3)?;
    for (worker, shard) in shards.iter().enumerate() {
        let names: Vec<String> = shard
            .iter()
            .filter_map(|job| {
                let name = job.as_map()?.get(&Key::str("job"))?.as_scalar()?;
                Some(name.to_string())
            })
            .collect();
        println!("  worker {} <- {} jobs: {}", worker, shard.len(), names.join(", "));
    }

    println!();
    Ok(())
}
