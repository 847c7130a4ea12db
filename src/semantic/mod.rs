// Semantic resolution engine
//
// Recovers intent from call names: what kind of action a call is, which
// page-object element it touches, what an assertion expects, and how to say
// all of that in one sentence. Everything here works on owned values from
// `extractors::syntax` and never sees a syntax tree.

pub mod actions;
pub mod assertions;
pub mod describe;
pub mod matcher;
pub mod resolver;
pub mod synonyms;

pub use actions::ActionClassifier;
pub use assertions::{AssertionAnalyzer, AssertionInfo};
pub use describe::describe;
pub use matcher::{SemanticMatcher, strip_action_prefix};
pub use resolver::{ElementResolver, STRATEGY_ORDER};
pub use synonyms::{Concept, SynonymTables};
