mod dispatch;
mod fetch;
mod metrics;
mod wrap;

pub use dispatch::*;
pub use fetch::*;
pub use metrics::*;
pub use wrap::*;
