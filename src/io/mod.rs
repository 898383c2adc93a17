//! Snapshot output.

mod snapshot;

pub use snapshot::{
    run_simulation_to_path, write_end_state, OutputError, RunError, SnapshotWriter,
    END_STATE_FILENAME,
};
