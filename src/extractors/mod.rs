// Pageflow's Extractors Module
//
// Tree-sitter based extraction for Java test projects. The Java collaborator
// lowers each file into the owned syntax model; page objects and test cases
// are then built from that model.

pub mod base;
pub mod java;
pub mod page_objects;
pub mod syntax;
pub mod test_cases;

// Re-export the base extractor types
pub use base::{ActionKind, BaseExtractor, OrderedMap, PageObject, TestCase, TestStep};
pub use java::{JavaExtractor, parse_java_source};
pub use page_objects::{PageObjectExtractor, PageRegistry, register_page_object};
pub use syntax::{Annotated, CallSite, SourceUnit};
pub use test_cases::ExtractionPipeline;
