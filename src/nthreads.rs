//! The default worker-thread count, decided once per process.
//!
//! The decision combines three inputs, in order:
//!
//! 1. `rayon::current_num_threads()` — the runtime's configured maximum,
//!    kept as the fallback. It already reflects external constraints
//!    (affinity masks, container quotas) the raw topology files know
//!    nothing about.
//! 2. The `RAYON_NUM_THREADS` environment variable — if present at all,
//!    the user chose explicitly and the fallback is kept as-is.
//! 3. The topology scan — adopted only when it found at least one physical
//!    core and strictly fewer than the fallback. The clamp only ever
//!    lowers the count.
//!
//! The result is published through a [`OnceLock`]: written once, read for
//! the remainder of the process, with no mutable accessor. Call
//! [`init_num_threads`] from the startup path that owns the parallel
//! runtime so the file I/O happens before any worker pool is sized;
//! [`num_threads`] performs the same decision lazily if init was skipped,
//! so a reader never observes an unset value.

use std::env;
use std::sync::OnceLock;

use crate::config::ENV_NUM_THREADS;
use crate::display::display_level;
use crate::topology;

static NUM_THREADS: OnceLock<usize> = OnceLock::new();

/// Decides the thread count now instead of on first read.
///
/// Returns the decided value. Safe to call more than once; only the first
/// call (or the first [`num_threads`] read, whichever comes first) performs
/// the decision.
pub fn init_num_threads() -> usize {
    *NUM_THREADS.get_or_init(decide_num_threads)
}

/// The process-wide default worker-thread count.
///
/// Always ≥ 1 and never greater than `rayon::current_num_threads()` was at
/// decision time. The first call fixes the value for the remainder of the
/// process; every later call returns the same value.
pub fn num_threads() -> usize {
    *NUM_THREADS.get_or_init(decide_num_threads)
}

/// Pure decision core, separated from environment and file I/O so the
/// clamp policy is testable in isolation.
///
/// `override_present` means the user set the runtime's thread-count
/// variable; the fallback is respected unconditionally. `physical_cores`
/// is the topology scan result, `None` when no answer could be produced.
/// A scan result of zero, or one at or above `fallback`, keeps `fallback`.
pub fn decide_num_threads_from(
    override_present: bool,
    fallback: usize,
    physical_cores: Option<usize>,
) -> usize {
    if override_present {
        return fallback;
    }
    match physical_cores {
        Some(cores) if cores > 0 && cores < fallback => cores,
        _ => fallback,
    }
}

/// One-shot decision: runtime fallback, override check, topology scan.
fn decide_num_threads() -> usize {
    let fallback = rayon::current_num_threads();
    // Presence alone disables clamping; rayon parses the value itself.
    let override_present = env::var_os(ENV_NUM_THREADS).is_some();
    let physical_cores = if override_present {
        None
    } else {
        topology::count_physical_cores()
    };
    let decided = decide_num_threads_from(override_present, fallback, physical_cores);
    if decided < fallback {
        display_level(
            4,
            &format!(
                "coreclamp: clamping default thread count {} -> {} (online physical cores)\n",
                fallback, decided
            ),
        );
    }
    decided
}
