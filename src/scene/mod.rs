//! Scene content
//!
//! This module provides the scene the application shows when no script is configured.

mod demo;

pub use demo::{cube_row, demo_script, DEMO_ROW_LEN};
