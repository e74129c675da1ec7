pub mod args;
pub mod catalog;
pub mod comparison;
pub mod web;

pub use args::{ExportArgs, ServerArgs};
pub use catalog::{BillingCycle, CatalogError, Plan, Price};
pub use comparison::{ComparisonMatrix, ComparisonRow, FeatureUniverse};
