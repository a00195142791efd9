pub mod application;
pub mod invocation;
pub mod routes;

pub use userfn_shared::{error_chain_fmt, settings, telemetry};
