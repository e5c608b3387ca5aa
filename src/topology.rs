//! Physical-core discovery from sysfs CPU topology.
//!
//! Walks the kernel's `online` range list and, for each CPU not yet seen,
//! counts one physical core and marks every logical CPU in that CPU's
//! `thread_siblings_list` as already attributed. SMT sibling threads
//! therefore never inflate the count.
//!
//! The scan is best-effort throughout: every unreadable file degrades to a
//! partial answer or to `None`, never to an error. The decision policy in
//! [`crate::nthreads`] treats `None` as "keep the runtime's own count".

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::{ONLINE_FILE, SYSFS_CPU_DIR, THREAD_SIBLINGS_FILE};
use crate::cpulist::CpuList;

fn online_path(cpu_dir: &Path) -> PathBuf {
    cpu_dir.join(ONLINE_FILE)
}

fn siblings_path(cpu_dir: &Path, cpu: u32) -> PathBuf {
    cpu_dir.join(format!("cpu{}", cpu)).join(THREAD_SIBLINGS_FILE)
}

/// Counts the distinct online physical cores under `/sys/devices/system/cpu`.
///
/// Returns `None` when the online list is unavailable (missing file,
/// permission denied, non-Linux platform) or when the scan aborted; callers
/// fall back to the runtime's own thread count in that case.
pub fn count_physical_cores() -> Option<usize> {
    count_physical_cores_in(Path::new(SYSFS_CPU_DIR))
}

/// Counts the distinct online physical cores under an arbitrary cpu
/// directory laid out like sysfs: an `online` range-list file plus
/// `cpu<N>/topology/thread_siblings_list` files per CPU.
///
/// A CPU whose sibling list cannot be opened still counts as one physical
/// core; any siblings it has will each count as their own core when they
/// appear in the online list. A set insertion that cannot reserve memory
/// aborts the whole scan — a partial sibling map must not be trusted for a
/// final answer.
///
/// An empty or unparseable online list yields `Some(0)`; the decision
/// policy guards against adopting a zero count.
pub fn count_physical_cores_in(cpu_dir: &Path) -> Option<usize> {
    let online = File::open(online_path(cpu_dir)).ok()?;

    let mut seen: HashSet<u32> = HashSet::new();
    let mut physical_cores = 0usize;

    for cpu in CpuList::new(BufReader::new(online)) {
        // Already attributed to an earlier core's sibling group.
        if seen.contains(&cpu) {
            continue;
        }
        physical_cores += 1;

        let siblings = match File::open(siblings_path(cpu_dir, cpu)) {
            Ok(file) => file,
            Err(_) => continue,
        };
        for sibling in CpuList::new(BufReader::new(siblings)) {
            // The kernel lists a CPU among its own siblings, so `cpu`
            // itself lands in the set here too.
            if seen.try_reserve(1).is_err() {
                return None;
            }
            seen.insert(sibling);
        }
    }

    Some(physical_cores)
}
