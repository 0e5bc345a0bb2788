//! Dashboard rendering
//!
//! - [`payload`] - serializable data document and precomputed headline figures
//! - [`template`] - static HTML template with a single embedded data block

pub mod payload;
pub mod template;

pub use payload::DashboardPayload;
pub use template::{render_dashboard, render_with_template};
