//! Integration tests for multi-root directory convergence

mod cli;
mod directories;
mod filtering;
mod metadata;
mod support;
