use crate::stats;

use super::loader::SummaryRow;

pub const NO_RESULTS: &str = "No results to display.";

const FILE_WIDTH: usize = 20;
const CITY_WIDTH: usize = 15;
const IP_WIDTH: usize = 15;
const LATENCY_WIDTH: usize = 10;
const JITTER_WIDTH: usize = 10;
const DOWNLOAD_WIDTH: usize = 12;
const UPLOAD_WIDTH: usize = 12;
const DIVIDER_EXTRA: usize = 6;
const DIVIDER_LEN: usize = FILE_WIDTH
    + CITY_WIDTH
    + IP_WIDTH
    + LATENCY_WIDTH
    + JITTER_WIDTH
    + DOWNLOAD_WIDTH
    + UPLOAD_WIDTH
    + DIVIDER_EXTRA;

/// Fixed-width comparison table with a trailing `AVERAGE` row.
#[must_use]
pub fn render_table(rows: &[SummaryRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }
    let mut lines = Vec::with_capacity(rows.len().saturating_add(4));
    lines.push(line(
        "File",
        "Server City",
        "IP",
        ["Latency", "Jitter", "Download", "Upload"].map(str::to_owned),
    ));
    lines.push("-".repeat(DIVIDER_LEN));
    for row in rows {
        lines.push(line(
            &row.label,
            &row.server_city,
            &row.ip,
            [row.latency, row.jitter, row.download, row.upload].map(fmt_number),
        ));
    }
    lines.push("=".repeat(DIVIDER_LEN));
    let column = |pick: fn(&SummaryRow) -> f64| {
        let values: Vec<f64> = rows.iter().map(pick).collect();
        stats::average(&values)
    };
    let averages = [
        column(|row| row.latency),
        column(|row| row.jitter),
        column(|row| row.download),
        column(|row| row.upload),
    ];
    lines.push(line("AVERAGE", "-", "-", averages.map(fmt_number)));

    let mut table = lines.join("\n");
    table.push('\n');
    table
}

fn line(file: &str, city: &str, ip: &str, numbers: [String; 4]) -> String {
    let [latency, jitter, download, upload] = numbers;
    format!(
        "{:<fw$}{:<cw$}{:<iw$}{:<lw$}{:<jw$}{:<dw$}{:<uw$}",
        file,
        city,
        ip,
        latency,
        jitter,
        download,
        upload,
        fw = FILE_WIDTH,
        cw = CITY_WIDTH,
        iw = IP_WIDTH,
        lw = LATENCY_WIDTH,
        jw = JITTER_WIDTH,
        dw = DOWNLOAD_WIDTH,
        uw = UPLOAD_WIDTH,
    )
}

fn fmt_number(value: f64) -> String {
    format!("{:.2}", value)
}
