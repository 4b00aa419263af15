use std::path::Path;

use tracing::{debug, warn};

const PREVIEW_LEN: usize = 64;
const PRINTABLE: std::ops::RangeInclusive<u8> = 0x20..=0x7E;

/// Logs size, head/tail previews and suspicious bytes of a summary input.
pub(super) fn dump_file(path: &Path, bytes: &[u8]) {
    debug!("[DIAG] File: {}", path.display());
    debug!("[DIAG]   Size: {} bytes", bytes.len());
    let head = bytes.get(..PREVIEW_LEN.min(bytes.len())).unwrap_or_default();
    debug!("[DIAG]   First {} bytes (hex): {}", head.len(), hex_preview(head));
    debug!("[DIAG]   First {} bytes (text): {}", head.len(), text_preview(head));
    if bytes.len() > PREVIEW_LEN {
        let tail = bytes
            .get(bytes.len().saturating_sub(PREVIEW_LEN)..)
            .unwrap_or_default();
        debug!("[DIAG]   Last {} bytes (hex): {}", tail.len(), hex_preview(tail));
        debug!("[DIAG]   Last {} bytes (text): {}", tail.len(), text_preview(tail));
    }
    let scan = ByteScan::of(bytes);
    if scan.has_nul {
        warn!("[DIAG] {} contains NUL bytes", path.display());
    }
    if scan.has_non_printable {
        warn!("[DIAG] {} contains non-printable control bytes", path.display());
    }
}

pub(super) fn hex_preview(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{:02X}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Printable ASCII kept as-is, everything else shown as `.`.
pub(super) fn text_preview(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| {
            if PRINTABLE.contains(byte) {
                char::from(*byte)
            } else {
                '.'
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct ByteScan {
    pub(super) has_nul: bool,
    pub(super) has_non_printable: bool,
}

impl ByteScan {
    pub(super) fn of(bytes: &[u8]) -> Self {
        let mut scan = Self::default();
        for byte in bytes {
            match *byte {
                0 => {
                    scan.has_nul = true;
                    scan.has_non_printable = true;
                }
                b'\n' | b'\r' | b'\t' => {}
                0x01..=0x1F | 0x7F => scan.has_non_printable = true,
                _ => {}
            }
        }
        scan
    }
}
