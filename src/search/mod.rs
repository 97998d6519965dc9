//! Search Service Module
//!
//! Substring and tag filtering over the local snapshot.
//!
//! ## Overview
//! No ranking and no tokenization: a document is a hit when its lowercased
//! text fields contain the query term and, if tags were requested, it carries
//! at least one of them. Hits keep snapshot order and are capped by `limit`,
//! while `nbHits` counts every match.
//!
//! ## Submodules
//! - **`engine`**: query validation and the filtering pass.
//! - **`handlers`**: `/search` and `/total-count` endpoints.
//! - **`types`**: request/response DTOs.

pub mod engine;
pub mod handlers;
pub mod types;
