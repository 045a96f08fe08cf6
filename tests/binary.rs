use std::path::PathBuf;
use std::process::Command;

const PEOPLE: &str = "\
Male,73.847017017515,241.893563180437
Male,68.7819040458903,162.310472521300
Female,58.9107320370127,102.088326367840
Female,65.2300125077128,141.305822601420
";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("trio-nn-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn trio_nn() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_trio-nn"));
    cmd.env_remove("TRIO_NN_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn is_four_decimals(s: &str) -> bool {
    s == "NaN" || s.split_once('.').map_or(false, |(_, frac)| frac.len() == 4)
}

#[test]
fn default_run_prints_reports_then_probes() {
    let dir = scratch_dir("default-run");
    std::fs::write(dir.join("inputs.csv"), PEOPLE).unwrap();

    let output = trio_nn().current_dir(&dir).output().unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6, "unexpected output:\n{stdout}");

    for (line, epoch) in lines[..4].iter().zip([1000, 2000, 3000, 4000]) {
        let prefix = format!("Epoch {epoch} loss ");
        let loss = line.strip_prefix(&prefix).unwrap();
        assert!(is_four_decimals(loss), "bad loss in {line:?}");
    }
    let fabi = lines[4].strip_prefix("Fabi expected is ").unwrap();
    let guilherme = lines[5].strip_prefix("Guilherme expected is ").unwrap();
    assert!(is_four_decimals(fabi) && is_four_decimals(guilherme));
}

#[test]
fn config_file_changes_epochs_and_probes() {
    let dir = scratch_dir("configured-run");
    std::fs::write(dir.join("people.csv"), PEOPLE).unwrap();
    let config = dir.join("run.json");
    std::fs::write(
        &config,
        r#"{
            "input_path": "people.csv",
            "train": { "epochs": 20, "report_interval": 10, "seed": 42 },
            "probes": [ { "name": "Probe", "one": 0.0, "two": 0.0 } ]
        }"#,
    )
    .unwrap();

    let first = trio_nn().current_dir(&dir).env("TRIO_NN_CONFIG", &config).output().unwrap();
    let second = trio_nn().current_dir(&dir).env("TRIO_NN_CONFIG", &config).output().unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert!(first.status.success());
    let stdout = String::from_utf8(first.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "unexpected output:\n{stdout}");
    assert!(lines[0].starts_with("Epoch 10 loss "));
    assert!(lines[1].starts_with("Epoch 20 loss "));
    assert!(lines[2].starts_with("Probe expected is "));

    // Seeded runs are reproducible.
    assert_eq!(stdout, String::from_utf8(second.stdout).unwrap());
}

#[test]
fn unreadable_input_exits_with_failure() {
    let dir = scratch_dir("missing-input");
    let output = trio_nn().current_dir(&dir).output().unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read input"), "stderr was:\n{stderr}");
}
