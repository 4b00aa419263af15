//! Best-effort scheduling hints applied before a benchmark.
//!
//! Every function reports failure instead of aborting; callers log and move on.
use crate::error::SystemError;

/// Priority used when lowering the process niceness.
pub const NICE_VALUE: i32 = 10;

#[cfg(target_os = "linux")]
const DROP_CACHES_PATH: &str = "/proc/sys/vm/drop_caches";

/// Restricts the process to a single CPU core.
///
/// # Errors
///
/// Returns an error when the affinity call fails or the platform lacks it.
#[cfg(target_os = "linux")]
pub fn pin_to_core(core: usize) -> Result<(), SystemError> {
    if core >= usize::try_from(libc::CPU_SETSIZE).unwrap_or(0) {
        return Err(SystemError::PinCore {
            core,
            source: std::io::Error::from(std::io::ErrorKind::InvalidInput),
        });
    }
    // SAFETY: `cpu_set_t` is a plain bitmask; all-zero is the empty set.
    let mut set: libc::cpu_set_t = unsafe { std::mem::zeroed() };
    // SAFETY: `set` is a valid `cpu_set_t` and `core` is below CPU_SETSIZE.
    unsafe { libc::CPU_SET(core, &mut set) };
    // SAFETY: pid 0 targets the calling thread and `set` outlives the call.
    let rc = unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) };
    if rc != 0 {
        return Err(SystemError::PinCore {
            core,
            source: std::io::Error::last_os_error(),
        });
    }
    Ok(())
}

/// # Errors
///
/// Always fails: CPU affinity is only wired up on Linux.
#[cfg(not(target_os = "linux"))]
pub fn pin_to_core(_core: usize) -> Result<(), SystemError> {
    Err(SystemError::Unsupported {
        operation: "CPU pinning",
    })
}

/// Lowers the scheduling priority of this process to `value`.
///
/// # Errors
///
/// Returns an error when `setpriority` fails.
#[cfg(unix)]
pub fn set_nice(value: i32) -> Result<(), SystemError> {
    // SAFETY: `setpriority` only reads its integer arguments; who 0 is this process.
    let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, value) };
    if rc != 0 {
        return Err(SystemError::Nice {
            source: std::io::Error::last_os_error(),
        });
    }
    Ok(())
}

/// # Errors
///
/// Always fails: priorities are only adjusted on Unix.
#[cfg(not(unix))]
pub fn set_nice(_value: i32) -> Result<(), SystemError> {
    Err(SystemError::Unsupported {
        operation: "Process niceness",
    })
}

/// Asks the kernel to drop page, dentry and inode caches. Needs root.
///
/// # Errors
///
/// Returns an error when the control file cannot be written.
#[cfg(target_os = "linux")]
pub fn drop_caches() -> Result<(), SystemError> {
    std::fs::write(DROP_CACHES_PATH, "3\n").map_err(|err| SystemError::DropCaches { source: err })
}

/// # Errors
///
/// Always fails: cache dropping is Linux-only.
#[cfg(not(target_os = "linux"))]
pub fn drop_caches() -> Result<(), SystemError> {
    Err(SystemError::Unsupported {
        operation: "Dropping caches",
    })
}
