//! Word Proxy Module
//!
//! Endpoints that bypass the snapshot and go to Notion directly:
//! - `GET /get-words`: least-reviewed words, live.
//! - `POST /update-word`: bump or set the review count and review date.

pub mod handlers;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
