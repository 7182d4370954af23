use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const FIXTURE: &str = r#"<!DOCTYPE html>
<html><body>
<table class="stats_table" id="totals_stats">
<thead>
<tr><th>Rk</th><th>Player</th><th>G</th><th>FG%</th><th>2P%</th><th>3P%</th><th>3P</th><th>3PA</th><th>2P</th><th>2PA</th><th>PTS</th></tr>
</thead>
<tbody>
<tr><th>1</th><td>DeMar DeRozan</td><td>76</td><td>.504</td><td>.521</td><td>.352</td><td>64</td><td>182</td><td>697</td><td>1337</td><td>2118</td></tr>
<tr><th>2</th><td>Joel Embiid</td><td>68</td><td>.499</td><td>.541</td><td>.371</td><td>93</td><td>251</td><td>627</td><td>1159</td><td>2079</td></tr>
<tr><th>3</th><td>Kevin Durant</td><td>55</td><td>.518</td><td>.553</td><td>.383</td><td>143</td><td>373</td><td>435</td><td>788</td><td>1643</td></tr>
<tr><th>4</th><td>Zach LaVine</td><td>67</td><td>.476</td><td>.547</td><td>.389</td><td>163</td><td>419</td><td>402</td><td>768</td><td>1771</td></tr>
<tr><th>5</th><td>Rudy Gobert</td><td>66</td><td>.713</td><td>.718</td><td></td><td></td><td></td><td>407</td><td>567</td><td>1026</td></tr>
</tbody>
</table>
</body></html>"#;

struct TestContext {
    _dir: TempDir,
    input_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_path = dir.path().join("totals_2022.html");
        fs::write(&input_path, FIXTURE).unwrap();
        Self {
            _dir: dir,
            input_path,
        }
    }
}

#[test]
fn test_scan_json_reports_the_fixture_pairs() {
    let ctx = TestContext::new();

    let output = Command::new(env!("CARGO_BIN_EXE_hooplens"))
        .args([
            "scan",
            "--input",
            ctx.input_path.to_str().unwrap(),
            "--min-games",
            "58",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let pairs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pairs = pairs.as_array().unwrap();

    // Durant (55 games) misses the threshold; DeRozan/Embiid/LaVine form a
    // transitive chain and Gobert matches no one.
    let names: Vec<(String, String)> = pairs
        .iter()
        .map(|p| {
            (
                p["overall_leader"]["name"].as_str().unwrap().to_string(),
                p["split_leader"]["name"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        names,
        vec![
            ("DeMar DeRozan".to_string(), "Joel Embiid".to_string()),
            ("DeMar DeRozan".to_string(), "Zach LaVine".to_string()),
            ("Joel Embiid".to_string(), "Zach LaVine".to_string()),
        ]
    );
}

#[test]
fn test_scan_csv_has_a_row_per_pair() {
    let ctx = TestContext::new();

    let output = Command::new(env!("CARGO_BIN_EXE_hooplens"))
        .args([
            "scan",
            "--input",
            ctx.input_path.to_str().unwrap(),
            "--min-games",
            "58",
            "--format",
            "csv",
        ])
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4); // header + 3 pairs
    assert!(lines[0].starts_with("overall_leader,"));
    assert!(lines[1].starts_with("DeMar DeRozan,"));
}

#[test]
fn test_scan_table_output_lists_qualified_players() {
    let ctx = TestContext::new();

    let output = Command::new(env!("CARGO_BIN_EXE_hooplens"))
        .args(["scan", "--input", ctx.input_path.to_str().unwrap()])
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DeMar DeRozan"));
    assert!(stdout.contains("Rudy Gobert"));
    assert!(!stdout.contains("Kevin Durant")); // under the games threshold
}

#[test]
fn test_chart_writes_svg() {
    let ctx = TestContext::new();
    let out_path = ctx._dir.path().join("chart.svg");

    let output = Command::new(env!("CARGO_BIN_EXE_hooplens"))
        .args([
            "chart",
            "--input",
            ctx.input_path.to_str().unwrap(),
            "--out",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let svg = fs::read_to_string(&out_path).unwrap();
    assert!(svg.starts_with("<svg"));
    // One marker per qualified player, one segment per pair.
    assert_eq!(svg.matches("<circle").count(), 4);
    assert!(svg.matches("stroke=\"gray\"").count() >= 3);
    assert!(svg.contains("DeMar DeRozan"));
}

#[test]
fn test_missing_input_file_fails_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_hooplens"))
        .args(["scan", "--input", "/nonexistent/totals.html"])
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
}
