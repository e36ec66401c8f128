//! JSON writers/readers.
//!
//! - solution files (`--export`), schema defined by `domain::SolutionFile`
//! - generated evidence documents (`qc generate`)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::domain::SolutionFile;
use crate::error::AppError;

/// Write a solution JSON file.
pub fn write_solution_json(path: &Path, solution: &SolutionFile) -> Result<(), AppError> {
    write_json_pretty(path, solution)
}

/// Read a solution JSON file.
pub fn read_solution_json(path: &Path) -> Result<SolutionFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open solution JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid solution JSON: {e}")))
}

/// Pretty-print any serializable value to `path`, with a trailing newline.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| AppError::new(2, format!("Failed to write '{}': {e}", path.display())))?;
    writeln!(writer)
        .and_then(|_| writer.flush())
        .map_err(|e| AppError::new(2, format!("Failed to write '{}': {e}", path.display())))?;

    Ok(())
}
