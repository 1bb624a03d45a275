//! # Seed Data Generator
//!
//! Populates the database with demo products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default)
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p catalog-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! Each product gets a category, a name with a size suffix, a price between
//! 9.99 and 499.99, a stock level of 0-100 and a placeholder image URL.

use std::env;

use catalog_core::{Money, Product};
use catalog_db::{Database, DbConfig, ProductRepository};

const DEFAULT_COUNT: usize = 200;
const DEFAULT_DB_PATH: &str = "catalog.db";

/// Demo categories with product base names.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "electronics",
        &["Wireless Mouse", "Mechanical Keyboard", "USB-C Hub", "Headphones", "Webcam"],
    ),
    (
        "home",
        &["Desk Lamp", "Coffee Mug", "Throw Pillow", "Wall Clock", "Plant Pot"],
    ),
    (
        "tools",
        &["Screwdriver Set", "Tape Measure", "Hammer", "Utility Knife", "Level"],
    ),
    (
        "toys",
        &["Building Blocks", "Puzzle", "Plush Bear", "Toy Car", "Kite"],
    ),
];

const SIZES: &[&str] = &["Mini", "Standard", "Pro", "XL"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let count = flag_value(&args, "--count")
        .map(|v| v.parse::<usize>())
        .transpose()?
        .unwrap_or(DEFAULT_COUNT);
    let db_path = flag_value(&args, "--db").unwrap_or(DEFAULT_DB_PATH);

    println!("Catalog Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(db_path)).await?;
    let products = db.products();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = products.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in demo_products().take(count) {
        if let Err(e) = products.save(&seed).await {
            eprintln!("Failed to insert {}: {}", seed.name, e);
            continue;
        }
        generated += 1;
    }

    let elapsed = start.elapsed();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    println!();
    println!("Verifying search...");
    let results = products.find_by_name_containing("lamp").await?;
    println!("  Search 'lamp': {} results", results.len());
    let results = products.find_by_category("tools").await?;
    println!("  Category 'tools': {} results", results.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Returns the argument following `flag`, if any.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Endless stream of demo products cycling through categories and sizes.
fn demo_products() -> impl Iterator<Item = Product> {
    (0usize..).map(|seed| {
        let (category, names) = CATEGORIES[seed % CATEGORIES.len()];
        let name = names[(seed / CATEGORIES.len()) % names.len()];
        let size = SIZES[(seed / (CATEGORIES.len() * names.len())) % SIZES.len()];
        let round = seed / (CATEGORIES.len() * names.len() * SIZES.len());

        let full_name = if round == 0 {
            format!("{} {}", name, size)
        } else {
            format!("{} {} #{}", name, size, round + 1)
        };

        // 9.99 - 499.99
        let price = Money::from_major_minor(9 + ((seed * 37) % 491) as i64, 99);

        Product::new(full_name.clone(), price)
            .with_description(format!("Demo {} item", category))
            .with_stock((seed % 101) as u32)
            .with_category(category)
            .with_image_url(format!(
                "https://via.placeholder.com/300x200?text={}",
                full_name.replace(' ', "+")
            ))
    })
}
