//! # Catalog Dev Tool
//!
//! Runs a single service operation against the configured database and
//! prints the result as JSON. Meant for poking at a local database, not as
//! a stable interface.
//!
//! ## Usage
//! ```bash
//! CATALOG_DB_PATH=./catalog.db cargo run -p catalog-service --bin catalog -- list
//! cargo run -p catalog-service --bin catalog -- get 1
//! cargo run -p catalog-service --bin catalog -- category tools
//! cargo run -p catalog-service --bin catalog -- search widget
//! cargo run -p catalog-service --bin catalog -- delete 3
//! ```

use std::env;

use serde::Serialize;
use tracing::info;

use catalog_core::ProductId;
use catalog_db::Database;
use catalog_service::telemetry::init_tracing;
use catalog_service::{CatalogConfig, ProductService};

const USAGE: &str = "usage: catalog <list | get <id> | category <name> | search <keyword> | delete <id>>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::load()?;
    init_tracing(&config.log_filter);

    info!(path = %config.database_path.display(), "Configuration loaded");

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).ok_or(USAGE)?;
    let argument = args.get(1).map(String::as_str);

    let db = Database::new(config.db_config()).await?;
    let service = ProductService::new(db.products());

    match (command, argument) {
        ("list", _) => print_json(&service.get_all_products().await?)?,
        ("get", Some(id)) => print_json(&service.get_product_by_id(parse_id(id)?).await?)?,
        ("category", Some(category)) => {
            print_json(&service.get_products_by_category(category).await?)?
        }
        ("search", Some(keyword)) => print_json(&service.search_products(keyword).await?)?,
        ("delete", Some(id)) => {
            service.delete_product(parse_id(id)?).await?;
            println!("deleted");
        }
        _ => return Err(USAGE.into()),
    }

    db.close().await;
    Ok(())
}

fn parse_id(raw: &str) -> Result<ProductId, Box<dyn std::error::Error>> {
    raw.parse::<ProductId>()
        .map_err(|_| format!("invalid product id: {raw}").into())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
