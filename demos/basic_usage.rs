//! Basic usage example for locale-address.
//!
//! This example demonstrates the core functionality of the library:
//! - Creating an engine
//! - Parsing addresses into structured components
//! - Formatting addresses back in their territory's layout
//!
//! Run with: cargo run --example basic_usage

use locale_address::{Address, AddressEngine, AddressFormatter, AddressParser, Error, Style};

fn print_address(parsed: &Address) {
    println!("Parsed components:");
    if let Some(street) = parsed.street_address() {
        println!("  Street Address: {}", street);
    }
    if let Some(locality) = parsed.locality() {
        println!("  Locality: {}", locality);
    }
    if let Some(region) = parsed.region() {
        println!("  Region: {}", region);
    }
    if let Some(postal_code) = parsed.postal_code() {
        println!("  Postal Code: {}", postal_code);
    }
    if let Some(country) = parsed.country() {
        println!("  Country: {}", country);
    }
    if let Some(code) = parsed.country_code() {
        println!("  Country Code: {}", code);
    }
}

fn main() -> Result<(), Error> {
    println!("locale-address Basic Usage Example");
    println!("==================================\n");

    let engine = AddressEngine::new()?;
    println!("Engine ready for {}\n", engine.config().locale);

    // Example 1: Basic address parsing
    println!("1. Basic Address Parsing");
    println!("-----------------------");

    let address = "950 W Maude Ave.\nSunnyvale, CA 94085\nUSA";
    println!("Input: {:?}", address);
    let parsed = engine.parse(address);
    print_address(&parsed);
    println!();

    // Example 2: Parsing with a locale
    println!("2. Address Parsing with a Locale");
    println!("--------------------------------");

    let mexican_address = "Vicente Guerrero S/N, Centro\nC.P 23450 Cabo San Lucas, BCS\nMéxico";
    println!("Input: {:?}", mexican_address);
    let parsed_mx = AddressParser::for_locale("es-MX").parse(mexican_address);
    print_address(&parsed_mx);
    println!();

    // Example 3: Formatting
    println!("3. Address Formatting");
    println!("--------------------");

    let formatter = AddressFormatter::for_locale("es-MX");
    println!("Default style:\n{}\n", formatter.format(&parsed_mx));
    let domestic = formatter.with_style(Style::NoCountry);
    println!("Without country:\n{}\n", domestic.format(&parsed_mx));

    // Example 4: Building an address by hand
    println!("4. Building an Address");
    println!("---------------------");

    let built = Address::builder()
        .street_address("5150 Spectrum Way")
        .locality("Mississauga")
        .region("Ontario")
        .postal_code("L4W 5G1")
        .country("Canada")
        .country_code("CA")
        .build();
    println!("{}\n", built);

    // Example 5: Batch processing
    println!("5. Batch Processing");
    println!("------------------");

    let addresses = vec![
        "20 Main St.\nMyTown, NY\nUSA",
        "P.O. Box 350\nMinneapolis MN 45678-2234",
        "Dienerstrasse 12\n80331 Munich\nGermany",
    ];

    println!("Processing {} addresses in batch:", addresses.len());
    let batch_results = engine.parse_batch(&addresses);

    for (i, result) in batch_results.iter().enumerate() {
        println!(
            "  Address {}: {:?} -> Locality: {}",
            i + 1,
            addresses[i],
            result.locality().unwrap_or("Unknown")
        );
    }
    println!();

    println!("All examples completed successfully!");

    Ok(())
}
