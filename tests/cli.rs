//! End-to-end tests for the camels-toolbox binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn add_leaf(group: &mut netcdf::GroupMut<'_>, dim: &str, name: &str, values: &[f64]) {
    let mut var = group.add_variable::<f64>(name, &[dim]).unwrap();
    var.put_values(values, ..).unwrap();
}

/// One entry whose default dataset holds `time`, `value` and one fit.
fn simple_file(dir: &Path) -> PathBuf {
    let path = dir.join("simple.nc");
    let mut file = netcdf::create(&path).unwrap();
    {
        let mut entry = file.add_group("entry_1").unwrap();
        let mut data = entry.add_group("data").unwrap();
        data.add_dimension("n", 3).unwrap();
        data.add_attribute("axes", "time").unwrap();
        data.add_attribute("signal", "value").unwrap();
        add_leaf(&mut data, "n", "time", &[0.0, 1.0, 2.0]);
        add_leaf(&mut data, "n", "value", &[10.0, 20.0, 30.0]);
        let mut fits = data.add_group("fits").unwrap();
        let mut fit = fits.add_group("gauss_fit").unwrap();
        fit.add_dimension("p", 1).unwrap();
        add_leaf(&mut fit, "p", "center", &[1.5]);
        add_leaf(&mut fit, "p", "width", &[0.25]);
    }
    drop(file);
    path
}

/// A schema entry next to one measurement entry.
fn schema_file(dir: &Path) -> PathBuf {
    let path = dir.join("schema.nc");
    let mut file = netcdf::create(&path).unwrap();
    {
        let mut schema = file.add_group("NeXus_schema").unwrap();
        schema.add_dimension("k", 1).unwrap();
        add_leaf(&mut schema, "k", "version", &[1.0]);
    }
    {
        let mut entry = file.add_group("entry_1").unwrap();
        let mut data = entry.add_group("data").unwrap();
        data.add_dimension("n", 2).unwrap();
        add_leaf(&mut data, "n", "time", &[0.0, 1.0]);
    }
    drop(file);
    path
}

/// Two measurement entries, the first with region sub-groups and a
/// variable-signal group. Groups are created in name order.
fn multi_file(dir: &Path) -> PathBuf {
    let path = dir.join("multi.nc");
    let mut file = netcdf::create(&path).unwrap();
    {
        let mut entry = file.add_group("entry_1").unwrap();
        let mut data = entry.add_group("data").unwrap();
        data.add_dimension("n", 2).unwrap();
        add_leaf(&mut data, "n", "time", &[0.0, 1.0]);
        add_leaf(&mut data, "n", "temperature", &[1.0, 2.0]);
        {
            let mut roi = data.add_group("roi1").unwrap();
            roi.add_dimension("m", 1).unwrap();
            add_leaf(&mut roi, "m", "counts", &[42.0]);
        }
        {
            let mut roi = data.add_group("roi2").unwrap();
            roi.add_dimension("m", 1).unwrap();
            add_leaf(&mut roi, "m", "other", &[43.0]);
        }
        {
            let mut signal = data.add_group("scan_variable_signal").unwrap();
            signal.add_dimension("n", 2).unwrap();
            add_leaf(&mut signal, "n", "temperature", &[5.0, 6.0]);
            add_leaf(&mut signal, "n", "voltage", &[7.0, 8.0]);
        }
    }
    {
        let mut entry = file.add_group("entry_2").unwrap();
        let mut data = entry.add_group("data").unwrap();
        data.add_dimension("n", 1).unwrap();
        add_leaf(&mut data, "n", "pressure", &[1.5]);
    }
    drop(file);
    path
}

fn cmd() -> Command {
    Command::cargo_bin("camels-toolbox").unwrap()
}

#[test]
fn reads_single_entry_default_dataset() {
    let dir = TempDir::new().unwrap();
    let path = simple_file(dir.path());

    cmd()
        .arg(&path)
        .arg("--non-interactive")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry: entry_1"))
        .stdout(predicate::str::contains("Dataset: main dataset"))
        .stdout(predicate::str::contains("time"))
        .stdout(predicate::str::contains("value"));
}

#[test]
fn prints_plot_hints() {
    let dir = TempDir::new().unwrap();
    let path = simple_file(dir.path());

    cmd()
        .arg(&path)
        .arg("--hints")
        .assert()
        .success()
        .stdout(predicate::str::contains("Axes: time"))
        .stdout(predicate::str::contains("Signals: value"));
}

#[test]
fn prints_fits_on_request() {
    let dir = TempDir::new().unwrap();
    let path = simple_file(dir.path());

    cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fit:").not())
        .stdout(predicate::str::contains("center").not());

    cmd()
        .arg(&path)
        .arg("--fits")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fit: gauss_fit"))
        .stdout(predicate::str::contains("center"))
        .stdout(predicate::str::contains("width"));
}

#[test]
fn skips_schema_entry_without_prompting() {
    let dir = TempDir::new().unwrap();
    let path = schema_file(dir.path());

    cmd()
        .arg(&path)
        .arg("--non-interactive")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry: entry_1"));
}

#[test]
fn missing_entry_fails() {
    let dir = TempDir::new().unwrap();
    let path = multi_file(dir.path());

    cmd()
        .arg(&path)
        .args(["--entry", "entry_9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"entry_9\" you specified was not found"));
}

#[test]
fn ambiguous_entry_fails_without_operator() {
    let dir = TempDir::new().unwrap();
    let path = multi_file(dir.path());

    cmd()
        .arg(&path)
        .arg("--non-interactive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry_1, entry_2"));
}

#[test]
fn pick_answers_prompts_without_input() {
    let dir = TempDir::new().unwrap();
    let path = multi_file(dir.path());

    cmd()
        .arg(&path)
        .args(["--pick", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please select").not())
        .stdout(predicate::str::contains("Entry: entry_2"))
        .stdout(predicate::str::contains("pressure"));
}

#[test]
fn prompt_retries_until_valid() {
    let dir = TempDir::new().unwrap();
    let path = multi_file(dir.path());

    cmd()
        .arg(&path)
        .write_stdin("abc\n5\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input \"abc\""))
        .stdout(predicate::str::contains("Invalid input \"5\""))
        .stdout(predicate::str::contains("Entry: entry_2"))
        .stdout(predicate::str::contains("pressure"));
}

#[test]
fn variable_signals_are_hoisted() {
    let dir = TempDir::new().unwrap();
    let path = multi_file(dir.path());
    let csv = dir.path().join("out.csv");

    cmd()
        .arg(&path)
        .args(["--entry", "entry_1", "--csv"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("voltage"));

    let text = std::fs::read_to_string(&csv).unwrap();
    assert_eq!(text, "time,temperature,voltage\n0,5,7\n1,6,8\n");
}

#[test]
fn variable_signals_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    let path = multi_file(dir.path());
    let csv = dir.path().join("out.csv");

    cmd()
        .arg(&path)
        .args(["--entry", "entry_1", "--no-variable-signals", "--csv"])
        .arg(&csv)
        .assert()
        .success();

    let text = std::fs::read_to_string(&csv).unwrap();
    assert_eq!(text, "time,temperature\n0,1\n1,2\n");
}

#[test]
fn missing_group_offers_sub_groups() {
    let dir = TempDir::new().unwrap();
    let path = multi_file(dir.path());

    cmd()
        .arg(&path)
        .args(["--entry", "entry_1", "--group", "missing_group"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0: main dataset"))
        .stdout(predicate::str::contains("1: roi1"))
        .stdout(predicate::str::contains("2: roi2"))
        .stdout(predicate::str::contains("Dataset: roi1"))
        .stdout(predicate::str::contains("counts"))
        .stderr(predicate::str::contains("\"missing_group\" was not found"));
}

#[test]
fn overlong_group_name_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = multi_file(dir.path());
    let long_name = "g".repeat(300);

    cmd()
        .arg(&path)
        .args(["--entry", "entry_1", "--pick", "0", "--group"])
        .arg(&long_name)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset: main dataset"))
        .stderr(predicate::str::contains("was not found"));
}

#[test]
fn existing_group_is_read_directly() {
    let dir = TempDir::new().unwrap();
    let path = multi_file(dir.path());

    cmd()
        .arg(&path)
        .args(["--entry", "entry_1", "--group", "roi2", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset: roi2"))
        .stdout(predicate::str::contains("other"));
}

#[test]
fn missing_file_fails() {
    cmd()
        .arg("/nonexistent/measurement.nxs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
