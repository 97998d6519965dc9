//! Word Review Service Library
//!
//! Proxies a Notion vocabulary database and serves fast local search over a
//! periodically rebuilt JSON snapshot of it. The binaries (`main.rs` for the
//! HTTP server, `bin/reindex.rs` for the snapshot rebuild) are thin wrappers
//! around these modules.
//!
//! ## Modules
//! - **`config`**: the `Config` struct, built once from the environment.
//! - **`auth`**: `AuthPolicy` and the `x-api-key` middleware.
//! - **`error`**: `ApiError`, the JSON error taxonomy for every endpoint.
//! - **`notion`**: the remote source adapter (HTTP client + normalization).
//! - **`snapshot`**: the on-disk document array, its store and its builder.
//! - **`search`**: substring/tag filtering over the snapshot.
//! - **`words`**: live `get-words` / `update-word` proxy endpoints.
//! - **`server`**: router assembly.

pub mod auth;
pub mod config;
pub mod error;
pub mod notion;
pub mod search;
pub mod server;
pub mod snapshot;
pub mod words;
