#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Shared utilities for rewire.
//!
//! This crate provides pure helper functions with no logging/tracing
//! dependencies: a file-existence probe for extensionless import specifiers
//! and a parser for `path?query` asset specifiers.

pub mod probe;
pub mod query;
