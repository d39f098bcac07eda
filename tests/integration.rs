use std::{env, fs, path::PathBuf, process::Command};

fn run_bin(args: &[&str]) -> (bool, String, String) {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_seriesmean"));

    let output = Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command");

    let stdout_str =
        String::from_utf8(output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        String::from_utf8(output.stderr).expect("failed to convert stderr to string");

    (output.status.success(), stdout_str, stderr_str)
}

fn write_problem(test_name: &str, contents: &str) -> PathBuf {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(test_name);

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let problem_path = test_dir.join("problem.toml");
    fs::write(&problem_path, contents).expect("failed to write problem file");
    problem_path
}

fn assert_success(args: &[&str]) -> String {
    let (success, stdout_str, stderr_str) = run_bin(args);
    assert!(
        success,
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );
    stdout_str
}

#[test]
fn continuous_workflow() {
    let problem_path = write_problem(
        "continuous_workflow",
        concat!(
            "kind = \"continuous\"\n",
            "method = \"direct\"\n",
            "rows = [[0, 10, 2], [10, 20, 3], [20, 30, 5]]\n",
        ),
    );
    let input = problem_path.to_str().expect("failed to convert path to string");

    let stdout_str = assert_success(&["--input", input, "solve"]);
    assert!(stdout_str.contains(r"solution: \overline{x} = \frac{180}{10}"));
    assert!(stdout_str.contains("mean = 18"));

    let stdout_str = assert_success(&[
        "--input",
        input,
        "solve",
        "--method",
        "step-deviation",
    ]);
    assert!(stdout_str.contains("h = 10"));
    assert!(stdout_str.contains("mean = 18"));

    let stdout_str = assert_success(&["--input", input, "compare"]);
    assert!(stdout_str.contains("step-deviation  18"));
}

#[test]
fn individual_json_output() {
    let problem_path = write_problem(
        "individual_json_output",
        "kind = \"individual\"\nmethod = \"shortcut\"\nrows = [[10], [20], [30], [40], [50]]\n",
    );
    let input = problem_path.to_str().expect("failed to convert path to string");

    // Shortcut on individual series needs an assumed mean.
    let (success, _, stderr_str) = run_bin(&["--input", input, "solve"]);
    assert!(!success);
    assert!(stderr_str.contains("assumed mean"));

    let stdout_str = assert_success(&[
        "--input",
        input,
        "solve",
        "--assumed-mean",
        "-5",
        "--format",
        "json",
    ]);
    let json: serde_json::Value =
        serde_json::from_str(&stdout_str).expect("failed to parse json output");
    assert_eq!(json["mean"], 30.0);
    assert_eq!(json["totals"]["divisor"], 5.0);
    assert_eq!(json["working_table"][0]["d"], 15.0);
}

#[test]
fn invalid_requests_fail() {
    let problem_path = write_problem(
        "invalid_requests_fail",
        "kind = \"discrete\"\nmethod = \"step-deviation\"\nrows = [[5, 1], [10, 2]]\n",
    );
    let input = problem_path.to_str().expect("failed to convert path to string");

    let (success, _, stderr_str) = run_bin(&["--input", input, "solve"]);
    assert!(!success);
    assert!(stderr_str.contains("UnsupportedCombination"));

    let problem_path = write_problem(
        "invalid_requests_fail_zero",
        "kind = \"discrete\"\nmethod = \"direct\"\nrows = [[5, 0], [10, 0]]\n",
    );
    let input = problem_path.to_str().expect("failed to convert path to string");

    let (success, _, stderr_str) = run_bin(&["--input", input, "solve"]);
    assert!(!success);
    assert!(stderr_str.contains("ZeroDivisor"));
}
