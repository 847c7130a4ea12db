// Pageflow - Selenium Test Suite Analyzer Library
//!
//! Pageflow reads Java UI-test projects with tree-sitter and recovers what the
//! tests do: page objects and their element selectors, each test's ordered
//! steps, and the base URL each test most likely runs against.

pub mod cli;
pub mod config;
pub mod error;
pub mod extractors;
pub mod semantic;
pub mod utils;


// Re-export common types
pub use error::{ExtractError, Result};
pub use extractors::{ActionKind, OrderedMap, PageObject, TestCase, TestStep};
