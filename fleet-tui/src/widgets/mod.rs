//! Reusable widget components.

pub mod badge;
pub mod filter;
pub mod kpi;

pub use badge::StatusBadge;
pub use filter::{FilterBar, FilterOption};
pub use kpi::KpiCard;
