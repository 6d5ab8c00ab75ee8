//! Gradian - a terminal-based interactive slope calculator.
//!
//! Gradian computes the linear relationship between two points, or from
//! one point plus a slope/angle and a distance, narrates the derivation
//! step by step, and draws the line on a fixed coordinate plane in the
//! terminal.
//!
//! # Features
//!
//! - Two input modes: two points, or point + slope/angle + distance
//! - Step-by-step "working out" with Unicode math typesetting
//! - Braille-canvas plot with dashed grid, axes and hover tooltips
//! - Clipboard attribution strings (HTML and Markdown)
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use gradian::engine::solve_two_points;
//!
//! let solution = solve_two_points(0.0, 0.0, 2.0, 4.0).unwrap();
//! assert_eq!(solution.relation.slope.value(), Some(2.0));
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod attribution;
pub mod clipboard;
pub mod engine;
pub mod error;
pub mod forms;
pub mod plane;
pub mod ui;

pub use error::{GradianError, Result};
