// display.rs — Notification-level global and gated stderr diagnostics.
//
// 0 = silent, 1 = errors only, 2 = results + warnings, 3 = progress,
// 4+ = verbose. The default is 0: topology discovery is best-effort and
// stays quiet unless a caller explicitly asks for traces.

use std::sync::atomic::{AtomicI32, Ordering};

/// Global notification level.
pub static DISPLAY_LEVEL: AtomicI32 = AtomicI32::new(0);

/// Sets the global notification level. Returns the value stored.
pub fn set_notification_level(level: i32) -> i32 {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
    level
}

/// Returns the current notification level.
#[inline]
pub fn notification_level() -> i32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Write `msg` to stderr if the current notification level is ≥ `level`.
/// Flushes stderr when the level is ≥ 4.
#[inline]
pub fn display_level(level: i32, msg: &str) {
    if DISPLAY_LEVEL.load(Ordering::Relaxed) >= level {
        eprint!("{}", msg);
        if DISPLAY_LEVEL.load(Ordering::Relaxed) >= 4 {
            use std::io::Write;
            let _ = std::io::stderr().flush();
        }
    }
}
