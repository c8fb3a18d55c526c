pub mod client;

pub use client::{OsrmError, OsrmRouteClient, OsrmRouteClientParams};
