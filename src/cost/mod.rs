//! Reload-cost metric between consecutive arrangements.

mod reload;

pub use reload::reload_cost;
