// config.rs — Compile-time configuration constants.
//
// All inputs the crate consults live here: the override environment
// variable and the sysfs locations the topology scan reads. The scan entry
// point takes the cpu directory as a parameter, so tests never need to
// patch these constants.

/// Environment variable whose presence disables topology clamping.
///
/// rayon parses the value itself when sizing its global pool; this crate
/// only checks that the variable is set (any value, including empty) and
/// never reads the content.
pub const ENV_NUM_THREADS: &str = "RAYON_NUM_THREADS";

/// sysfs directory holding per-CPU topology information.
pub const SYSFS_CPU_DIR: &str = "/sys/devices/system/cpu";

/// File under [`SYSFS_CPU_DIR`] listing the online logical CPUs in kernel
/// range-list format (e.g. `0-3,8,10-11`).
pub const ONLINE_FILE: &str = "online";

/// Path below each `cpu<N>` directory listing the logical CPUs that share
/// that CPU's physical core, itself included.
pub const THREAD_SIBLINGS_FILE: &str = "topology/thread_siblings_list";
