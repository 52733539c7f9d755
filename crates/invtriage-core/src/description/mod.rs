//! Description extraction by boilerplate line removal.

mod filter;
pub mod patterns;

pub use filter::{filter_description, DescriptionFilter};
