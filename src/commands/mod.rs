//! Command handlers for the agrc CLI.
//!
//! Each submodule handles one subcommand. The dispatch itself stays in main.rs.

pub mod color;
pub mod expand;
pub mod show;
