// Semantic Engine Tests
//
// Classification, element resolution and assertion analysis on hand-built
// call sites, independent of any parsing.

pub mod resolver_tests;
