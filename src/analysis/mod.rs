// src/analysis/mod.rs
pub mod filter;
pub mod view;

// Re-export commonly used types
pub use filter::{filter_by_payload, filter_by_site, FilterState, SiteSelection};
pub use view::{build_proportion_view, build_scatter_view, ProportionView, ScatterPoint, ScatterView, Slice};
