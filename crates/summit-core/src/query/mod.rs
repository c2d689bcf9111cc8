//! Query filter validation and plan composition.

mod filter;
mod plan;

pub use filter::{FilterOperator, FilterSpec, RawFilter};
pub use plan::QueryPlan;
