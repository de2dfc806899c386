//! Cart mutation and inspection commands.
//!
//! Every mutation goes through `CartStore`, so the persisted blob is
//! rewritten exactly as a storefront page would rewrite it.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use prime_beef_core::{Price, Product, ProductId};
use prime_beef_storefront::{CartStore, KeyValueStore};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

use super::{CommandError, catalog};

/// Arguments for `pb-cli add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Product id
    pub id: String,

    /// Display name (required without --catalog)
    #[arg(long, conflicts_with = "catalog")]
    pub name: Option<String>,

    /// Unit price (required without --catalog)
    #[arg(long, conflicts_with = "catalog")]
    pub price: Option<Decimal>,

    /// YAML catalog to look the product up in
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Units to add (default 1)
    #[arg(short, long, allow_negative_numbers = true)]
    pub quantity: Option<i64>,

    /// Extra product attribute as key=value (value parsed as JSON when possible)
    #[arg(long = "attr", value_parser = parse_attribute)]
    pub attributes: Vec<(String, Value)>,
}

/// Parse a `key=value` attribute.
fn parse_attribute(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty attribute key in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((key.to_owned(), value))
}

/// Resolve the product described by `args`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, does not contain the id,
/// or if name/price are missing or invalid.
pub fn product_from_args(args: &AddArgs) -> Result<Product, CommandError> {
    let mut product = match &args.catalog {
        Some(path) => {
            let products = catalog::load(path)?;
            catalog::find(&products, &ProductId::from(args.id.as_str()))
                .cloned()
                .ok_or_else(|| CommandError::UnknownProduct(args.id.clone()))?
        }
        None => {
            let name = args
                .name
                .clone()
                .ok_or_else(|| CommandError::InvalidArgs("--name is required".to_string()))?;
            let amount = args
                .price
                .ok_or_else(|| CommandError::InvalidArgs("--price is required".to_string()))?;
            let price = Price::new(amount).map_err(|e| CommandError::InvalidArgs(e.to_string()))?;
            Product::new(args.id.as_str(), name, price)
        }
    };

    for (key, value) in &args.attributes {
        product.attributes.insert(key.clone(), value.clone());
    }
    Ok(product)
}

/// `pb-cli add`.
///
/// # Errors
///
/// Returns an error if the product cannot be resolved or the cart cannot be saved.
pub fn add<S: KeyValueStore>(
    store: &mut CartStore<S>,
    args: &AddArgs,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let product = product_from_args(args)?;
    store.add_item(&product, args.quantity)?;
    info!(id = %product.id, "Added to cart");
    summary(store, out)
}

/// `pb-cli remove`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn remove<S: KeyValueStore>(
    store: &mut CartStore<S>,
    id: &ProductId,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    store.remove_item(id)?;
    summary(store, out)
}

/// `pb-cli increase`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn increase<S: KeyValueStore>(
    store: &mut CartStore<S>,
    id: &ProductId,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    store.increase_quantity(id)?;
    summary(store, out)
}

/// `pb-cli decrease`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn decrease<S: KeyValueStore>(
    store: &mut CartStore<S>,
    id: &ProductId,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    store.decrease_quantity(id)?;
    summary(store, out)
}

/// `pb-cli clear`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn clear<S: KeyValueStore>(
    store: &mut CartStore<S>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    store.clear_cart()?;
    summary(store, out)
}

/// `pb-cli show`.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn show<S: KeyValueStore>(
    store: &CartStore<S>,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(store.items())?)?;
        return Ok(());
    }

    if store.is_empty() {
        writeln!(out, "Cart is empty")?;
    }
    for line in store.items() {
        writeln!(
            out,
            "{:<12} {:<24} {:>4} × {:>8} = {}",
            line.id.as_str(),
            line.name,
            line.quantity,
            line.price.display(),
            prime_beef_core::format_amount(line.line_total()),
        )?;
    }
    summary(store, out)
}

fn summary<S: KeyValueStore>(store: &CartStore<S>, out: &mut impl Write) -> Result<(), CommandError> {
    writeln!(
        out,
        "Items: {}  Total: ${}",
        store.total_items(),
        store.total_price()
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use prime_beef_storefront::MemoryStorage;

    use super::*;

    fn args(id: &str) -> AddArgs {
        AddArgs {
            id: id.to_string(),
            name: Some("Ribeye".to_string()),
            price: Some(Decimal::new(999, 2)),
            catalog: None,
            quantity: None,
            attributes: Vec::new(),
        }
    }

    #[test]
    fn test_parse_attribute() {
        assert_eq!(
            parse_attribute("weight_oz=12").unwrap(),
            ("weight_oz".to_string(), Value::from(12))
        );
        assert_eq!(
            parse_attribute("cut=bone in").unwrap(),
            ("cut".to_string(), Value::from("bone in"))
        );
        assert!(parse_attribute("novalue").is_err());
        assert!(parse_attribute("=x").is_err());
    }

    #[test]
    fn test_product_requires_name_and_price() {
        let mut missing = args("A");
        missing.price = None;
        assert!(matches!(
            product_from_args(&missing),
            Err(CommandError::InvalidArgs(_))
        ));

        let mut negative = args("A");
        negative.price = Some(Decimal::new(-1, 0));
        assert!(matches!(
            product_from_args(&negative),
            Err(CommandError::InvalidArgs(_))
        ));
    }

    #[test]
    fn test_add_then_show() {
        let mut store = CartStore::new(MemoryStorage::new());
        let mut sink = Vec::new();

        let mut add_args = args("A");
        add_args.quantity = Some(3);
        add_args.attributes.push(("grade".to_string(), Value::from("prime")));
        add(&mut store, &add_args, &mut sink).unwrap();

        let line = store.get(&"A".into()).unwrap();
        assert_eq!(line.attributes.get("grade"), Some(&Value::from("prime")));

        let mut out = Vec::new();
        show(&store, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Ribeye"));
        assert!(text.ends_with("Items: 3  Total: $29.97\n"));
    }

    #[test]
    fn test_show_empty_and_json() {
        let store = CartStore::new(MemoryStorage::new());

        let mut out = Vec::new();
        show(&store, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Cart is empty\nItems: 0  Total: $0.00\n"
        );

        let mut out = Vec::new();
        show(&store, true, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_decrease_removes_last_unit() {
        let mut store = CartStore::new(MemoryStorage::new());
        let mut sink = Vec::new();
        add(&mut store, &args("A"), &mut sink).unwrap();

        decrease(&mut store, &"A".into(), &mut sink).unwrap();
        assert!(store.is_empty());
    }
}
