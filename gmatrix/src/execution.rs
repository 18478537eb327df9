//! Execution strategy for matrix addition and multiplication
//!
//! Both operations can run sequentially or split by result row across the
//! rayon thread pool. The strategy is an explicit [`ExecutionConfig`] value;
//! each element type also has a process-wide default mode, changed with
//! [`set_default_mode`], which the plain `+` and `*` operators use.
//!
//! In parallel mode the result buffer is cut into disjoint row slices with
//! `par_chunks_mut`, so each task writes only its own rows and reads the
//! operands immutably. The number of concurrent workers is bounded by the
//! pool size rather than the number of rows.

use std::any::TypeId;
use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock};

use hashbrown::HashMap;
use rayon::prelude::*;

/// How addition and multiplication schedule their work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionMode {
    /// Compute every row on the calling thread
    #[default]
    Sequential,
    /// Compute rows concurrently on the rayon pool
    Parallel,
}

impl ExecutionMode {
    /// Mode for a parallel flag
    pub const fn from_parallel(enabled: bool) -> Self {
        if enabled {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }

    pub const fn is_parallel(self) -> bool {
        matches!(self, ExecutionMode::Parallel)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionMode::Sequential => "non-Parallel",
            ExecutionMode::Parallel => "Parallel",
        };
        f.write_str(name)
    }
}

/// Configuration for the row-partitioned operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Sequential or parallel execution
    pub mode: ExecutionMode,
    /// Minimum number of result rows handled by one parallel task
    pub min_rows_per_task: usize,
}

impl ExecutionConfig {
    /// Sequential execution
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Parallel execution with one row per task at minimum
    pub fn parallel() -> Self {
        Self::default().with_mode(ExecutionMode::Parallel)
    }

    /// Configuration matching the current default mode of element type `T`
    pub fn for_element<T: 'static>() -> Self {
        Self::default().with_mode(default_mode::<T>())
    }

    /// Set the execution mode
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the minimum rows per parallel task (at least one)
    pub fn with_min_rows_per_task(mut self, rows: usize) -> Self {
        self.min_rows_per_task = rows.max(1);
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.mode.is_parallel()
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            min_rows_per_task: 1,
        }
    }
}

type ModeRegistry = RwLock<HashMap<TypeId, ExecutionMode>>;

fn registry() -> &'static ModeRegistry {
    static MODES: OnceLock<ModeRegistry> = OnceLock::new();
    MODES.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Current default execution mode for matrices of element type `T`
pub fn default_mode<T: 'static>() -> ExecutionMode {
    let modes = registry().read().unwrap_or_else(PoisonError::into_inner);
    modes.get(&TypeId::of::<T>()).copied().unwrap_or_default()
}

/// Change the default execution mode for matrices of element type `T`
///
/// Returns `true` and logs one `info` record naming the new mode if the
/// mode changed. Requesting the current mode does nothing and returns
/// `false`.
pub fn set_default_mode<T: 'static>(mode: ExecutionMode) -> bool {
    {
        let mut modes = registry().write().unwrap_or_else(PoisonError::into_inner);
        let current = modes.entry(TypeId::of::<T>()).or_default();
        if *current == mode {
            return false;
        }
        *current = mode;
    }

    log::info!("Generic Matrix mode changed to {mode} mode.");
    true
}

/// Run `row_worker(row_index, row_cells)` over every row of a row-major buffer
///
/// `cells.len()` must be a multiple of `cols`. A zero `cols` means the
/// empty matrix and nothing runs.
pub(crate) fn for_each_row<T, F>(cells: &mut [T], cols: usize, config: &ExecutionConfig, row_worker: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if cols == 0 {
        return;
    }
    debug_assert_eq!(cells.len() % cols, 0);

    match config.mode {
        ExecutionMode::Sequential => {
            for (row, out) in cells.chunks_mut(cols).enumerate() {
                row_worker(row, out);
            }
        }
        ExecutionMode::Parallel => {
            log::debug!(
                "dispatching {} rows on {} threads (min {} rows per task)",
                cells.len() / cols,
                rayon::current_num_threads(),
                config.min_rows_per_task
            );
            cells
                .par_chunks_mut(cols)
                .enumerate()
                .with_min_len(config.min_rows_per_task.max(1))
                .for_each(|(row, out)| row_worker(row, out));
        }
    }
}
