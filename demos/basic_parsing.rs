//! Basic address parsing example
//!
//! This example demonstrates how to parse addresses from several
//! territories into their component parts.

use locale_address::AddressParser;

fn main() {
    println!("locale-address Basic Parsing Example");
    println!("====================================");

    let addresses = vec![
        ("en-US", "1600 Pennsylvania Avenue NW\nWashington, DC 20500"),
        ("en-GB", "221B Baker Street\nLondon\nNW1 6XE\nUnited Kingdom"),
        ("fr-FR", "5 Avenue Anatole France\n75007\nParis\nFrance"),
        ("ja-JP", "〒108-8282\n東京都港区港南2-16-1\n品川イーストワンタワー"),
        ("zh-CN", "中国北京市朝阳区建国路112号 中国惠普大厦100022"),
    ];

    println!("\nParsing addresses:");
    println!("-----------------");

    for (locale, address) in addresses {
        println!("\nOriginal ({}): {:?}", locale, address);

        let parsed = AddressParser::for_locale(locale).parse(address);
        println!("  Street: {}", parsed.street_address().unwrap_or_default());
        println!("  Locality: {}", parsed.locality().unwrap_or_default());
        println!("  Region: {}", parsed.region().unwrap_or_default());
        println!("  Postal code: {}", parsed.postal_code().unwrap_or_default());
        println!("  Country: {}", parsed.country().unwrap_or_default());
        println!("  Country code: {}", parsed.country_code().unwrap_or_default());
        if let Some(format) = parsed.format() {
            println!("  Layout: {}", format);
        }
    }

    println!("\nExample complete!");
}
