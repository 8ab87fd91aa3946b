//! Core library for the lotadj-tools command line application.
//!
//! The library converts tray-build worksheets describing inventory lot
//! adjustments into per-category upload tables. The modules are structured to
//! keep responsibilities narrow and composable: the spreadsheet adapters live
//! under [`io`], the record model in [`model`], the adjustment-cell grammar in
//! [`parse`], the classification rule in [`classify`], record accumulation in
//! [`process`], table extraction in [`partition`], and the end-to-end
//! orchestration under [`generate`].

pub mod classify;
pub mod error;
pub mod generate;
pub mod io;
pub mod model;
pub mod parse;
pub mod partition;
pub mod process;

pub use error::{Result, ToolError};
