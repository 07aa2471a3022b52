//! Shared frontend utilities for API access, configuration, errors, fetch
//! lifecycle, logging, and build metadata.
//!
//! ## Data flow
//!
//! 1. **Fetch:** a view starts a request through [`fetch::run_guarded`], which
//!    reports `Pending` and then the settled [`FetchState`].
//! 2. **Guard:** each request carries a [`fetch::RequestTicket`]; once the view is
//!    torn down (or a newer request starts) late responses are dropped.
//! 3. **Errors:** transport, HTTP, and decode failures surface as [`AppError`] and
//!    are turned into display strings at the call site.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod telemetry;

pub use config::AppConfig;
pub use errors::AppError;
pub use fetch::{FetchState, RequestGuard, RequestTicket, run_guarded};
