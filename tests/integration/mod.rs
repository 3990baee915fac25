//! Integration tests for boilerplate

mod cli_binary;
mod scaffold_pipeline;
