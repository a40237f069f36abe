//! Driving adapters.
//!
//! - **cli**: clap command tree standing in for the browser pages

pub mod cli;
