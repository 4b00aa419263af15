
use std::fs;
use std::path::Path;

use tempfile::tempdir;

use support_cli::run_cfspeed;

fn write_result(dir: &Path, name: &str, city: &str, latency: f64) -> Result<String, String> {
    let doc = serde_json::json!({
        "server_city": city,
        "ip": "198.51.100.***",
        "latency_avg": latency,
        "jitter": 1.5,
        "download_90pct": 250.0,
        "upload_90pct": 40.0,
    });
    let path = dir.join(name);
    fs::write(&path, doc.to_string()).map_err(|err| format!("write {} failed: {}", name, err))?;
    Ok(path.to_string_lossy().into_owned())
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn e2e_summary_table_renders_and_persists_rows() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let first = write_result(dir.path(), "run-a.json", "Amsterdam", 10.0)?;
    let second = write_result(dir.path(), "run-b.json", "Frankfurt", 20.0)?;
    let third = write_result(dir.path(), "run-c.json", "Paris", 30.0)?;
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").map_err(|err| format!("write broken failed: {}", err))?;
    let out = dir.path().join("out").join("summary.json");

    let output = run_cfspeed([
        "--summary-table".to_owned(),
        first,
        second,
        third,
        broken.to_string_lossy().into_owned(),
        "--summary-out".to_owned(),
        out.to_string_lossy().into_owned(),
    ])?;
    let stdout = stdout_of(&output);
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            stdout,
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    for needle in ["File", "run-a", "run-b", "run-c", "AVERAGE", "20.00"] {
        if !stdout.contains(needle) {
            return Err(format!("Missing '{}' in table:\n{}", needle, stdout));
        }
    }
    if stdout.contains("broken") {
        return Err(format!("Malformed file should be skipped:\n{}", stdout));
    }

    let written = fs::read_to_string(&out).map_err(|err| format!("read summary failed: {}", err))?;
    let doc: serde_json::Value =
        serde_json::from_str(&written).map_err(|err| format!("parse summary failed: {}", err))?;
    let results = doc
        .get("results")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| "summary document lacks a results array".to_owned())?;
    if results.len() != 3 {
        return Err(format!("Expected 3 rows, got {}", results.len()));
    }
    Ok(())
}

#[test]
fn e2e_summary_table_without_files_fails() -> Result<(), String> {
    let output = run_cfspeed(["--summary-table"])?;
    if output.status.code() != Some(1) {
        return Err(format!(
            "Expected exit code 1, got {:?}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(())
}

#[test]
fn e2e_summary_table_reports_empty_input() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let missing = dir.path().join("missing.json");
    let out = dir.path().join("summary.json");
    let output = run_cfspeed([
        "--summary-table".to_owned(),
        missing.to_string_lossy().into_owned(),
        "--summary-out".to_owned(),
        out.to_string_lossy().into_owned(),
    ])?;
    if !output.status.success() {
        return Err(format!(
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    if !stdout_of(&output).contains("No results to display.") {
        return Err("Expected the empty-table message".to_owned());
    }
    let written = fs::read_to_string(&out).map_err(|err| format!("read summary failed: {}", err))?;
    if written.trim() != r#"{"results":[]}"# {
        return Err(format!("Unexpected empty summary: {}", written));
    }
    Ok(())
}
