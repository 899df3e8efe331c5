//! Basic usage example for flagphone-rs
//!
//! This example demonstrates how to:
//! - Load the bundled country dataset
//! - Group countries into alphabetic sections
//! - Filter by name, region code and dial code
//! - Look countries up by code and dial code prefix

use flagphone_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== flagphone-rs Basic Usage Example ===\n");

    // Load the repository
    let repository = CountryRepository::load()?;
    println!("✓ {} countries loaded\n", repository.len());

    // Example 1: Sections
    println!("--- Example 1: Section index ---");
    let model = group(repository.countries());
    println!("{}\n", model.keys().join(" "));

    // Example 2: First rows of the first section
    println!("--- Example 2: First section ---");
    if let Some(bucket) = model.buckets().first() {
        println!("{} ({} countries)", bucket.key, bucket.len());
        for country in bucket.countries.iter().take(5) {
            println!("  {} {} {}", country.flag().emoji(), country.name(), country.phone_code());
        }
    }
    println!();

    // Example 3: Filter
    println!("--- Example 3: Filter by \"land\" ---");
    let hits = filter(repository.countries(), "land");
    for bucket in group(hits).buckets() {
        let names: Vec<_> = bucket.countries.iter().map(|c| c.name()).collect();
        println!("{}: {}", bucket.key, names.join(", "));
    }
    println!();

    // Example 4: Lookups
    println!("--- Example 4: Lookups ---");
    if let Some(country) = repository.find_by_code("jp") {
        println!("jp -> {} {}", country.name(), country.phone_code());
    }
    let nanp = repository.find_by_phone_code("+1");
    println!("+1 is shared by {} countries", nanp.len());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
