//! Host description for snapshots and the `[SYS]` report.
#[cfg(unix)]
use std::ffi::CStr;

use std::io::ErrorKind;
use std::path::Path;

use chrono::Local;
use tracing::{debug, warn};

use crate::snapshot::Environment;

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const CPUINFO_PATH: &str = "/proc/cpuinfo";
const MEMINFO_PATH: &str = "/proc/meminfo";
const KB_PER_MB: f64 = 1024.0;
const KB_PER_GB: f64 = 1_048_576.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Uname {
    host: String,
    arch: String,
    kernel: String,
}

/// Gathers date, version, uname, CPU and memory details.
///
/// Sources that cannot be read leave their fields empty.
#[must_use]
pub fn collect_sysinfo(mask_sensitive: bool) -> Environment {
    let uname = read_uname().unwrap_or_default();
    let cpuinfo = read_proc_text(Path::new(CPUINFO_PATH));
    let meminfo = read_proc_text(Path::new(MEMINFO_PATH));
    let (cpu_model, cpu_cores) = parse_cpuinfo(&cpuinfo);
    Environment {
        sysinfo_date: Local::now().format(DATE_FORMAT).to_string(),
        host: if mask_sensitive {
            mask_str(&uname.host)
        } else {
            uname.host
        },
        arch: uname.arch,
        kernel: uname.kernel,
        cpu_model,
        mem_total: parse_mem_total(&meminfo).unwrap_or_default(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        cpu_cores,
    }
}

/// `[SYS]` lines describing the host.
#[must_use]
pub fn sysinfo_lines(env: &Environment) -> Vec<String> {
    let mut lines = vec![
        format!("[SYS] Date: {}", env.sysinfo_date),
        format!("[SYS] Version: {}", env.version),
    ];
    if !env.host.is_empty() || !env.arch.is_empty() {
        lines.push(format!("[SYS] Host: {}", env.host));
        lines.push(format!("[SYS] Arch: {}", env.arch));
        lines.push(format!("[SYS] Kernel: {}", env.kernel));
    }
    if !env.cpu_model.is_empty() {
        lines.push(format!("[SYS] CPU: {} ({} cores)", env.cpu_model, env.cpu_cores));
    }
    if let Some(memory) = format_memory(&env.mem_total) {
        lines.push(format!("[SYS] Mem: {}", memory));
    }
    lines
}

pub fn print_sysinfo(mask_sensitive: bool) {
    for line in sysinfo_lines(&collect_sysinfo(mask_sensitive)) {
        println!("{}", line);
    }
}

/// Hides the tail of an address or hostname.
///
/// The last `.` segment becomes `***`, else the last `:` segment becomes
/// `****`, else strings longer than three characters get their second half
/// replaced by `*`.
#[must_use]
pub fn mask_str(input: &str) -> String {
    if let Some(pos) = input.rfind('.') {
        return format!("{}***", input.get(..=pos).unwrap_or_default());
    }
    if let Some(pos) = input.rfind(':') {
        return format!("{}****", input.get(..=pos).unwrap_or_default());
    }
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= 3 {
        return input.to_owned();
    }
    let keep = chars.len() / 2;
    let mut masked: String = chars.iter().take(keep).collect();
    masked.push_str(&"*".repeat(chars.len().saturating_sub(keep)));
    masked
}

/// First `model name` and the number of `model name` lines.
fn parse_cpuinfo(cpuinfo: &str) -> (String, u32) {
    let mut model = String::new();
    let mut cores: u32 = 0;
    for line in cpuinfo.lines().filter(|line| line.contains("model name")) {
        if model.is_empty() {
            if let Some((_, value)) = line.split_once(':') {
                model = value.trim().to_owned();
            }
        }
        cores = cores.saturating_add(1);
    }
    (model, cores)
}

/// `MemTotal` value as written by the kernel, e.g. `16318300 kB`.
fn parse_mem_total(meminfo: &str) -> Option<String> {
    meminfo
        .lines()
        .find_map(|line| line.strip_prefix("MemTotal:"))
        .map(|value| value.trim().to_owned())
}

/// Human memory size: GB with one decimal, or whole MB below 1 GB.
fn format_memory(mem_total: &str) -> Option<String> {
    let kb: u64 = mem_total.split_whitespace().next()?.parse().ok()?;
    let kb = kb as f64;
    let gb = kb / KB_PER_GB;
    if gb >= 1.0 {
        Some(format!("{:.1} GB", gb))
    } else {
        Some(format!("{:.0} MB", kb / KB_PER_MB))
    }
}

#[cfg(unix)]
fn read_uname() -> Option<Uname> {
    // SAFETY: `utsname` is plain old data, so the all-zero pattern is valid.
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    // SAFETY: `uts` is a valid, writable `utsname` for the duration of the call.
    if unsafe { libc::uname(&mut uts) } != 0 {
        return None;
    }
    Some(Uname {
        host: c_field("nodename", &uts.nodename),
        arch: c_field("machine", &uts.machine),
        kernel: format!(
            "{} {}",
            c_field("sysname", &uts.sysname),
            c_field("release", &uts.release)
        ),
    })
}

/// Text of a `/proc` file; unreadable or non-UTF-8 files yield an empty string.
fn read_proc_text(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::InvalidData => {
            warn!("{} is not valid UTF-8; leaving its fields empty", path.display());
            String::new()
        }
        Err(err) => {
            debug!("Could not read {}: {}", path.display(), err);
            String::new()
        }
    }
}

/// NUL-terminated `utsname` field; invalid UTF-8 is reported and replaced.
#[cfg(unix)]
fn c_field(name: &str, raw: &[libc::c_char]) -> String {
    if !raw.contains(&0) {
        return String::new();
    }
    // SAFETY: the buffer holds a NUL terminator, checked above.
    let value = unsafe { CStr::from_ptr(raw.as_ptr()) };
    match value.to_str() {
        Ok(text) => text.to_owned(),
        Err(err) => {
            warn!(
                "uname {} is not valid UTF-8 (valid up to byte {})",
                name,
                err.valid_up_to()
            );
            value.to_string_lossy().into_owned()
        }
    }
}

#[cfg(not(unix))]
fn read_uname() -> Option<Uname> {
    None
}
