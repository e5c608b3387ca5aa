//! Physical-core-aware default worker-thread count.
//!
//! On machines with simultaneous multithreading the parallel runtime's
//! configured maximum counts every hardware thread, but sibling threads
//! sharing a physical core rarely add throughput for CPU-bound work and can
//! even reduce it. This crate reads the kernel's CPU topology once at
//! startup, counts the distinct physical cores currently online, and clamps
//! the default thread count to that number. Setting `RAYON_NUM_THREADS`
//! disables the clamp entirely — an explicit choice always wins.
//!
//! Discovery is best-effort: on platforms without sysfs topology files, or
//! when they are unreadable, the runtime's own count is kept unchanged.
//!
//! ```
//! coreclamp::init_num_threads();
//! let n = coreclamp::num_threads();
//! assert!(n >= 1);
//! ```

pub mod config;
pub mod cpulist;
pub mod display;
pub mod nthreads;
pub mod topology;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use cpulist::CpuList;
pub use display::set_notification_level;
pub use nthreads::{decide_num_threads_from, init_num_threads, num_threads};
pub use topology::{count_physical_cores, count_physical_cores_in};
