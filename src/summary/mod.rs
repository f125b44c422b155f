//! Board summary shown on the landing page.

mod greeting;
mod metrics;

pub use greeting::Greeting;
pub use metrics::BoardSummary;
