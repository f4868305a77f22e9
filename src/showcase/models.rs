//! Derived-boilerplate showcase.
//!
//! Everything printed here comes from derive macros: `Debug` for the dump
//! lines, serde for the JSON round trip, `PartialEq` for the equality check.

use crate::error::Result;
use crate::models::Customer;
use crate::showcase::collections::{sample_customers, sample_products};
use crate::ui::ScoutTheme;

/// Run the data model showcase.
pub fn run(theme: &ScoutTheme) -> Result<()> {
    println!("{}", theme.separator());
    println!("{}", theme.format_header("Model Boilerplate Showcase"));
    println!("{}", theme.separator());
    println!();

    let customer = &sample_customers()[0];
    println!("{}", theme.highlight.apply_to("Derived Debug output"));
    println!("  {}", theme.dim.apply_to(format!("{:?}", customer)));
    println!("{}", theme.label_value("  premium", &customer.is_premium().to_string()));
    println!("{}", theme.label_value("  young", &customer.is_young().to_string()));
    println!();

    let product = &sample_products()[0];
    println!("{}", theme.label_value("Product", &product.name));
    println!(
        "{}",
        theme.label_value("  total value", &format!("${:.2}", product.total_value()))
    );
    println!(
        "{}",
        theme.label_value("  expensive", &product.is_expensive().to_string())
    );
    println!();

    println!("{}", theme.highlight.apply_to("Derived JSON round trip"));
    let json = serde_json::to_string_pretty(customer)?;
    for line in json.lines() {
        println!("  {}", theme.info.apply_to(line));
    }
    let parsed: Customer = serde_json::from_str(&json)?;
    if parsed == *customer {
        println!("{}", theme.format_success("Round trip preserved every field"));
    } else {
        println!("{}", theme.format_warning("Round trip diverged"));
    }

    println!();
    Ok(())
}
