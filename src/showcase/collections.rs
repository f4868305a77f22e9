//! Functional collection operations showcase.
//!
//! Walks the sample data through the iterator combinators the standard
//! library ships for free: partition, grouping, folds, and min/max
//! selection. Grouping uses a `BTreeMap` so the printed order is stable.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::error::Result;
use crate::models::{Customer, Product};
use crate::ui::ScoutTheme;

/// Sample customers shared by the showcases.
pub fn sample_customers() -> Vec<Customer> {
    let raw = [
        ("Alice Johnson", "alice@example.com", "Berlin", 34, 2150.0),
        ("Bruno Costa", "bruno@example.com", "Lisbon", 27, 340.5),
        ("Chen Wei", "chen@example.com", "Berlin", 41, 1875.25),
        ("Dalia Khan", "dalia@example.com", "Lisbon", 22, 1212.75),
        ("Erik Larsen", "erik@example.com", "Oslo", 55, 89.9),
    ];

    raw.into_iter()
        .map(|(name, email, city, age, total_spent)| Customer {
            name: name.into(),
            email: email.into(),
            city: city.into(),
            age,
            total_spent,
        })
        .collect()
}

/// Sample products shared by the showcases.
pub fn sample_products() -> Vec<Product> {
    let raw = [
        ("Laptop", "electronics", 1299.99, 12),
        ("Mechanical Keyboard", "electronics", 149.5, 8),
        ("Coffee Mug", "kitchen", 14.25, 140),
        ("Standing Desk", "furniture", 499.0, 3),
        ("Notebook", "stationery", 4.9, 220),
    ];

    raw.into_iter()
        .map(|(name, category, price, quantity)| Product {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            created_at: Utc::now(),
        })
        .collect()
}

/// Run the collections showcase.
pub fn run(theme: &ScoutTheme) -> Result<()> {
    println!("{}", theme.separator());
    println!("{}", theme.format_header("Functional Collections Showcase"));
    println!("{}", theme.separator());
    println!();

    let customers = sample_customers();
    let products = sample_products();

    let (premium, standard): (Vec<&Customer>, Vec<&Customer>) =
        customers.iter().partition(|c| c.is_premium());
    println!("{}", theme.label_value("Premium customers", &names(&premium)));
    println!("{}", theme.label_value("Standard customers", &names(&standard)));

    let young: Vec<&Customer> = customers.iter().filter(|c| c.is_young()).collect();
    println!("{}", theme.label_value("Young customers", &names(&young)));
    println!();

    let mut by_city: BTreeMap<&str, usize> = BTreeMap::new();
    for customer in &customers {
        *by_city.entry(customer.city.as_str()).or_default() += 1;
    }
    println!("{}", theme.highlight.apply_to("Customers by city"));
    for (city, count) in &by_city {
        println!("  {}", theme.label_value(city, &count.to_string()));
    }
    println!();

    let total_spent: f64 = customers.iter().map(|c| c.total_spent).sum();
    println!(
        "{}",
        theme.label_value("Total spent across customers", &format!("${:.2}", total_spent))
    );
    println!();

    if let Some(priciest) = products
        .iter()
        .max_by(|a, b| a.price.total_cmp(&b.price))
    {
        println!(
            "{}",
            theme.label_value(
                "Most expensive product",
                &format!("{} (${:.2})", priciest.name, priciest.price)
            )
        );
    }

    let low_stock: Vec<&str> = products
        .iter()
        .filter(|p| p.is_low_stock())
        .map(|p| p.name.as_str())
        .collect();
    println!("{}", theme.label_value("Low stock products", &low_stock.join(", ")));

    let inventory_value: f64 = products.iter().map(Product::total_value).sum();
    println!(
        "{}",
        theme.label_value("Total inventory value", &format!("${:.2}", inventory_value))
    );

    println!();
    println!("{}", theme.format_success("Collections showcase completed"));
    println!();
    Ok(())
}

/// Comma-joined customer names.
fn names(customers: &[&Customer]) -> String {
    customers
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
