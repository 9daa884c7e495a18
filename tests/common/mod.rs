//! Shared test utilities for tracker integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sheet header with every known column
pub const FULL_HEADER: &str = "Mira Level,Title,Resonite Crystal,Diamond,Energy Crystal,Shiny Bubbles,Thread of Purity,Bling,Crafting Material,Eureka";

/// A well-formed sheet with `rows` levels; every fifth level grants diamonds
pub fn sheet_with_rows(rows: usize) -> String {
    let mut text = format!("{}\n", FULL_HEADER);
    for n in 1..=rows {
        let diamonds = if n % 5 == 0 { "30" } else { "-" };
        text.push_str(&format!("Mira Level {},-,,{},,,,,,\n", n, diamonds));
    }
    text
}

/// Creates a temporary directory holding a sheet file
pub fn create_sheet_dir(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("mira_levels.csv");
    fs::write(&path, content).expect("Failed to write sheet");
    (temp_dir, path)
}

/// Replace the sheet content in place
pub fn rewrite_sheet(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to rewrite sheet");
}
