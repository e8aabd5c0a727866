//! Result sinks: where `(policy, faults)` records end up.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use parking_lot::Mutex;

use crate::common::Result;
use crate::policy::PolicyKind;
use crate::simulation::SimulationResult;

/// Receives one `(policy, faults)` record per simulated policy.
///
/// The simulation core never opens files; callers hand results to a sink.
/// Sinks are shared by reference, so implementations use interior locking.
pub trait ResultSink: Send + Sync {
    /// Append one record.
    fn record(&self, policy: PolicyKind, faults: usize) -> Result<()>;

    /// Push buffered records to their destination.
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// Append every result to `sink`, in the order given, then flush.
pub fn record_all(sink: &dyn ResultSink, results: &[SimulationResult]) -> Result<()> {
    for result in results {
        sink.record(result.policy(), result.faults())?;
    }
    sink.flush()
}

/// Writes `NAME FAULTS` lines to a file.
///
/// # Example
/// ```no_run
/// use pagesim::report::{FileSink, ResultSink};
/// use pagesim::PolicyKind;
///
/// let sink = FileSink::create("results.txt").unwrap();
/// sink.record(PolicyKind::Fifo, 9).unwrap();
/// // results.txt now holds "FIFO 9\n"
/// ```
pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileSink {
    /// Open `path` for a new run, discarding any previous results.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        debug!("Cleared results file {}", path.display());
        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    /// Open `path` keeping existing records; new ones are appended.
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for FileSink {
    fn record(&self, policy: PolicyKind, faults: usize) -> Result<()> {
        let line = format!("{} {}\n", policy.name(), faults);
        self.file.lock().write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.file.lock().sync_data()?;
        Ok(())
    }
}

/// Keeps records in memory. Useful for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(PolicyKind, usize)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn records(&self) -> Vec<(PolicyKind, usize)> {
        self.records.lock().clone()
    }

    /// Forget all records.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl ResultSink for MemorySink {
    fn record(&self, policy: PolicyKind, faults: usize) -> Result<()> {
        self.records.lock().push((policy, faults));
        Ok(())
    }
}
