//! Sample persistence
//!
//! Sample streams are written as plain text, one decimal integer per
//! line in trial order. A run produces one file per engine, named
//! `<tag>_<operation>.csv` inside the configured output directory. The
//! directory must already exist; a missing destination surfaces as an
//! error to the caller rather than silently losing a completed run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{HarnessError, HarnessResult};
use crate::ops::Operation;
use crate::sampler::Engine;

/// Destination path for one (engine, operation) sample file
pub fn sample_path(dir: &Path, engine: Engine, operation: Operation) -> PathBuf {
    dir.join(format!("{}_{}.csv", engine.tag(), operation.name()))
}

/// Write a sample stream, overwriting any previous file at the path
///
/// Returns the path written on success.
pub fn write_samples(
    dir: &Path,
    engine: Engine,
    operation: Operation,
    samples: &[i64],
) -> HarnessResult<PathBuf> {
    let path = sample_path(dir, engine, operation);
    let io_err = |source| HarnessError::Io { path: path.clone(), source };

    let file = File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for sample in samples {
        writeln!(writer, "{sample}").map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    Ok(path)
}
