//! Exploratory summaries layered next to the correlation pipeline: headline
//! descriptives, keyword frequencies, technical indicators, and
//! direction-agreement counts. Each consumes pipeline outputs read-only.

pub mod descriptive;
pub mod direction;
pub mod indicators;
pub mod keywords;
