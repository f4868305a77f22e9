//! Plain data models used by the showcases.
//!
//! Both models lean on derived boilerplate (`Debug`, `Clone`, `PartialEq`,
//! serde) and add only trivial computed predicates on top.

pub mod customer;
pub mod product;

pub use customer::Customer;
pub use product::Product;
