// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod backfill;
pub mod block;
pub mod file;
pub mod pages;
pub mod progress;
pub mod runner;
pub mod stars;
pub mod store;
pub mod translate;

pub use error::{Error, Result};
