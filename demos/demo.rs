//! Walks a `DynamicArray` through push, positional insert, removal and lookup,
//! printing each state. Set `RUST_LOG=trace` to watch the buffer resize.

use dynarray::{DynamicArray, Result};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    // Default to WARN if RUST_LOG is not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let mut list = DynamicArray::new();
    for i in 1..=4 {
        list.push(i);
    }
    println!("list: {list}");

    list.insert(0, 0)?;
    println!("list: {list}");

    list.remove(4)?;
    println!("list: {list}");

    println!("element at index 1: {}", list.get(1)?);
    println!("number of elements: {}", list.len());
    Ok(())
}
