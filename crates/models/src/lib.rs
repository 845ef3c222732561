pub mod client;
pub mod metrics;
pub mod session;

pub use client::{Client, ClientStatus, Plan, ServiceName};
pub use metrics::Metrics;
pub use session::{Role, Session};
