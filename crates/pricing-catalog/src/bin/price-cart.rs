//! # price-cart
//!
//! Prices a cart from the command line.
//!
//! ## Usage
//! ```bash
//! # One pair of headphones for user1 (built-in sample data)
//! cargo run -p pricing-catalog --bin price-cart -- --user user1 ABC12345
//!
//! # Quantities and override prices: SKU[:QTY[:PRICE]]
//! cargo run -p pricing-catalog --bin price-cart -- ABC12345:2 DEF67890:1:39.99
//!
//! # Custom data file, JSON output
//! cargo run -p pricing-catalog --bin price-cart -- --data ./catalog.toml --json MNO33333:3
//!
//! # List active products
//! cargo run -p pricing-catalog --bin price-cart -- --list
//! ```

use std::env;
use std::path::PathBuf;

use pricing_catalog::{engine_from_config, logging, PricingConfig};
use pricing_core::{CartLine, CartQuote, CatalogLookup, Money, Product};
use tracing::info;

/// One `SKU[:QTY[:PRICE]]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineArg {
    sku: String,
    quantity: i64,
    unit_price: Option<Money>,
}

impl std::str::FromStr for LineArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let sku = parts.next().unwrap_or_default().trim().to_string();
        if sku.is_empty() {
            return Err(format!("missing SKU in '{}'", s));
        }

        let quantity = match parts.next() {
            Some(q) => q
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("bad quantity in '{}': {}", s, e))?,
            None => 1,
        };

        let unit_price = match parts.next() {
            Some(p) => Some(
                p.parse::<Money>()
                    .map_err(|e| format!("bad price in '{}': {}", s, e))?,
            ),
            None => None,
        };

        if parts.next().is_some() {
            return Err(format!("too many ':' in '{}'", s));
        }

        Ok(LineArg {
            sku,
            quantity,
            unit_price,
        })
    }
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    data: Option<PathBuf>,
    user: Option<String>,
    list: bool,
    json: bool,
    help: bool,
    lines: Vec<LineArg>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let value = args.get(i).ok_or("--config needs a path")?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--data" | "-d" => {
                i += 1;
                let value = args.get(i).ok_or("--data needs a path")?;
                parsed.data = Some(PathBuf::from(value));
            }
            "--user" | "-u" => {
                i += 1;
                let value = args.get(i).ok_or("--user needs an id")?;
                parsed.user = Some(value.clone());
            }
            "--list" | "-l" => parsed.list = true,
            "--json" => parsed.json = true,
            "--help" | "-h" => parsed.help = true,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{}'", flag)),
            line => parsed.lines.push(line.parse()?),
        }
        i += 1;
    }

    Ok(parsed)
}

fn print_help() {
    println!("Cart Pricing Tool");
    println!();
    println!("Usage: price-cart [OPTIONS] SKU[:QTY[:PRICE]]...");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>  Config file (default: platform config dir)");
    println!("  -d, --data <PATH>    Catalog data file (default: built-in sample data)");
    println!("  -u, --user <ID>      Price for this user");
    println!("  -l, --list           List active products");
    println!("      --json           Print JSON instead of a table");
    println!("  -h, --help           Show this help message");
}

fn print_products(products: &[Product]) {
    println!("{:<10} {:<24} {:>10}  {}", "SKU", "Name", "Price", "Category");
    for p in products {
        println!(
            "{:<10} {:<24} {:>10}  {}",
            p.sku,
            p.name,
            p.price.to_string(),
            p.category
        );
    }
}

fn print_quote(quote: &CartQuote, user: Option<&str>) {
    println!("Customer: {}", user.unwrap_or("(none)"));
    println!();
    println!(
        "{:<10} {:>4} {:>10} {:>12} {:>12} {:>12}",
        "SKU", "Qty", "Unit", "Subtotal", "Discount", "Total"
    );
    for line in &quote.lines {
        println!(
            "{:<10} {:>4} {:>10} {:>12} {:>12} {:>12}",
            line.sku.as_deref().unwrap_or("-"),
            line.quantity,
            line.unit_price.to_string(),
            line.base_total.to_string(),
            line.discount.to_string(),
            line.total.to_string()
        );
    }
    println!();
    println!("Discount: {}", quote.total_discount());
    println!("Total:    {}", quote.total);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&raw)?;

    if args.help {
        print_help();
        return Ok(());
    }

    let log = logging::init("info");

    let mut config = PricingConfig::load(args.config.clone())?;
    if args.data.is_some() {
        config.data.path = args.data.clone();
    }
    if let Some(ref log) = log {
        log.set_fallback(&config.logging.filter);
    }

    let engine = engine_from_config(&config)?;

    if args.list {
        let products = engine.catalog().list_active_products();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&products)?);
        } else {
            print_products(&products);
        }
        return Ok(());
    }

    if args.lines.is_empty() {
        print_help();
        return Err("no cart lines given".into());
    }

    let mut cart = Vec::with_capacity(args.lines.len());
    for arg in &args.lines {
        let product = engine.require_product(&arg.sku)?;
        let mut line = CartLine::new(product, arg.quantity);
        if let Some(price) = arg.unit_price {
            line = line.with_unit_price(price);
        }
        cart.push(line);
    }

    let user = config.effective_user(args.user.as_deref());
    let quote = engine.try_price_cart(&cart, user)?;
    info!(lines = quote.lines.len(), total = %quote.total, "Priced cart");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print_quote(&quote, user);
    }

    Ok(())
}
