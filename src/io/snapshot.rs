//! Plain-text snapshot output.
//!
//! The record format is consumed by an external movie maker: one line per
//! grid cell, two whitespace-separated reals, the height first and the
//! cell's x-coordinate second. Successive snapshots are appended as
//! successive blocks in one stream, ordered by simulated time.
//!
//! A benchmark mode writes only a final snapshot in the same format to a
//! well-known filename for cross-implementation comparison.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::equations::ShallowWater1D;
use crate::grid::Grid;
use crate::simulation::{run_simulation, ConfigError, RunSummary, SimulationConfig};
use crate::state::Snapshot;

/// Well-known filename of the benchmark end-state output.
pub const END_STATE_FILENAME: &str = "h_default_end.txt";

/// Error type for snapshot output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error during file operations.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for a driver run coupled to file output.
#[derive(Debug, Error)]
pub enum RunError {
    /// The configuration was rejected before stepping began.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing a snapshot failed.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Buffered writer appending snapshot blocks to one stream.
pub struct SnapshotWriter<W: Write> {
    writer: BufWriter<W>,
}

impl SnapshotWriter<File> {
    /// Create (or truncate) a snapshot file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, OutputError> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> SnapshotWriter<W> {
    /// Wrap an output stream.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Append one snapshot block: a `"{h} {x}"` line per cell.
    pub fn write_snapshot(&mut self, snapshot: &Snapshot, grid: &Grid) -> Result<(), OutputError> {
        for (&h, &x) in snapshot.state.h.iter().zip(&grid.centers) {
            writeln!(self.writer, "{} {}", h, x)?;
        }
        Ok(())
    }

    /// Flush and release the underlying stream.
    pub fn finish(mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write a single (final) snapshot in the two-column format.
///
/// This is the benchmark/reference mode: point `path` at
/// [`END_STATE_FILENAME`] in the comparison directory to produce the file
/// diffed against other implementations' end states.
pub fn write_end_state<P: AsRef<Path>>(
    path: P,
    snapshot: &Snapshot,
    grid: &Grid,
) -> Result<(), OutputError> {
    let mut writer = SnapshotWriter::create(path)?;
    writer.write_snapshot(snapshot, grid)?;
    writer.finish()
}

/// Run a simulation and stream every snapshot to a file at `path`.
///
/// The first I/O failure stops further writing; the run itself completes
/// and the failure is reported afterwards.
pub fn run_simulation_to_path<P: AsRef<Path>>(
    grid: &Grid,
    eq: &ShallowWater1D,
    config: &SimulationConfig,
    path: P,
) -> Result<RunSummary, RunError> {
    let mut writer = SnapshotWriter::create(path)?;
    let mut io_failure: Option<OutputError> = None;

    let summary = run_simulation(grid, eq, config, |snapshot| {
        if io_failure.is_none() {
            if let Err(e) = writer.write_snapshot(&snapshot, grid) {
                io_failure = Some(e);
            }
        }
    })?;

    if let Some(e) = io_failure {
        return Err(e.into());
    }
    writer.finish()?;

    Ok(summary)
}
