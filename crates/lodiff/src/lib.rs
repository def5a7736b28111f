//! `lodiff` command-line front end.
//!
//! The binary is a thin argument parser over [`commands`]; batch runs over
//! whole directories of dumps live in [`batch`].

pub mod batch;
pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
