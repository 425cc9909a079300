//! Advanced usage example for locale-address.
//!
//! This example demonstrates advanced features:
//! - Custom configuration
//! - Parallel batch parsing
//! - Address form metadata
//! - Graceful handling of odd input
//!
//! Run with: cargo run --example advanced_usage --features parallel

use std::time::Instant;

use locale_address::{AddressEngine, Constraint, EngineConfig, Error, Style};

fn main() -> Result<(), Error> {
    println!("locale-address Advanced Usage Example");
    println!("=====================================\n");

    // Example 1: Custom configuration
    println!("1. Custom Configuration");
    println!("----------------------");

    let config = EngineConfig::builder()
        .locale("en-CA")
        .style(Style::NoCountry)
        .verify_rules(true)
        .build();

    let engine = AddressEngine::with_config(config)?;
    println!("✓ Engine initialized for {}\n", engine.parser().locale());

    // Example 2: Performance measurement
    println!("2. Performance Measurement");
    println!("-------------------------");

    let test_addresses: Vec<&str> = [
        "5150 Spectrum Way\nMississauga, ON\nL4W 5G1\nCanada",
        "340 Hagey Blvd\n2nd Floor\nWaterloo, Ontario, N2L 6R6",
        "20 Montée Lavalle\nÉparnay, Nouveau-Brunswick Y7Y 7Y7",
        "P.O. Box 350\nToronto ON Y5T 5T5",
    ]
    .into_iter()
    .cycle()
    .take(10_000)
    .collect();

    let start = Instant::now();
    let sequential = engine.parse_batch(&test_addresses);
    let sequential_duration = start.elapsed();
    println!("Sequential: {} addresses in {:?}", sequential.len(), sequential_duration);

    let start = Instant::now();
    let parallel = engine.parser().parse_batch_parallel(&test_addresses);
    let parallel_duration = start.elapsed();
    println!("Parallel: {} addresses in {:?}", parallel.len(), parallel_duration);
    println!("Results identical: {}\n", sequential == parallel);

    // Example 3: Comprehensive address analysis
    println!("3. Comprehensive Address Analysis");
    println!("---------------------------------");

    let complex_address = "Tsinghua Science Park Bldg 6\nNo. 1 Zhongguancun East Road\nHaidian District\nBeijing 100084\nPRC";
    println!("Analyzing: {:?}", complex_address);

    let parsed = engine.parse(complex_address);
    println!("\nParsing results:");
    println!("  Components found: {}", parsed.components().len());
    println!("  Is empty: {}", parsed.is_empty());
    for (label, value) in parsed.components() {
        println!("  {}: {}", label, value);
    }
    println!("\nFormatted ({}):\n{}\n", engine.formatter().style(), engine.format(&parsed));

    // Example 4: Address form metadata
    println!("4. Address Form Metadata");
    println!("-----------------------");

    for label_locale in [None, Some("fr")] {
        println!("Labels in {}:", label_locale.unwrap_or("the engine locale"));
        for row in engine.format_info(label_locale) {
            let line: Vec<String> = row
                .iter()
                .map(|component| match &component.constraint {
                    Some(Constraint::Pattern(pattern)) => format!("{} /{}/", component.label, pattern),
                    Some(Constraint::Choices(choices)) => format!("{} ({} choices)", component.label, choices.len()),
                    None => component.label.clone(),
                })
                .collect();
            println!("  {}", line.join(" | "));
        }
    }
    println!();

    // Example 5: Odd inputs degrade instead of failing
    println!("5. Graceful Degradation");
    println!("----------------------");

    let long_string = "x".repeat(10000);
    let problematic_inputs = vec![
        "",           // Empty string
        "   ",        // Whitespace only
        "123",        // Too short
        &long_string, // Very long string
    ];

    for input in problematic_inputs {
        let display_input = if input.len() > 50 {
            format!("{}... ({} chars)", &input[..50], input.len())
        } else {
            input.to_string()
        };

        let parsed = engine.parse(input);
        if parsed.is_empty() {
            println!("  '{}' -> No components found", display_input);
        } else {
            println!("  '{}' -> {} components", display_input, parsed.components().len());
        }
    }
    println!();

    println!("✓ All advanced examples completed successfully!");

    Ok(())
}
