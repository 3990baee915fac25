//! Property-based tests for manifest default merging

mod merge_defaults;
