//! Requesty router provider plugin.
//!
//! Discovers the models the Requesty router exposes, registers them as chat
//! models through a host-supplied callback, and translates per-request
//! options into the router's request fields. The catalog is served from a
//! disk cache with a freshness window and a stale-on-error fallback, and a
//! small command surface (`refresh`, `models`) operates on it directly.

pub mod app;
pub mod cli;
pub mod keys;
pub mod models;
pub mod options;
pub mod paths;
pub mod pricing;
pub mod registry;
pub mod run;
pub mod util;
