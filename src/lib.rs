//! Versioned rate table
//!
//! This crate provides a named set of billing rates, each with a month-sliced
//! history of values, and answers "what was rate X in month D" with strict
//! guarantees: no month has an ambiguous answer, and the type a caller asks
//! for must match the type the table declares.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod table;
