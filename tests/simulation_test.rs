use std::process::Command;

fn run_headless(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_lane_racer"))
        .args(args)
        .env("RUST_LOG", "warn,lane_racer=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that the simulation runs in headless mode without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = run_headless(&["--ticks", "90", "--seed", "42"]);

    // Check that the simulation exited successfully
    assert!(
        output.status.success(),
        "Simulation failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("=== Final State ==="),
        "Simulation did not complete properly. stdout: {}",
        stdout
    );
}

/// Test that the summary reports the key statistics
#[test]
fn test_simulation_summary_printed() {
    let output = run_headless(&["--ticks", "30", "--seed", "1", "--hold", "left"]);

    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Score:"), "Missing score");
    assert!(stdout.contains("Lives:"), "Missing lives");
    assert!(stdout.contains("Outcome:"), "Missing outcome");
    assert!(stdout.contains("Vehicle 5:"), "Missing traffic listing");
    assert!(stdout.contains("Trees:"), "Missing tree count");
}

/// A game that starts below zero lives ends on the first tick
#[test]
fn test_headless_game_over_is_reported() {
    let output = run_headless(&["--ticks", "100", "--seed", "3", "--lives=-1"]);

    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stdout.contains("Outcome: Game Over"),
        "Expected a lost game. stdout: {}",
        stdout
    );
    assert!(
        stdout.contains("Frame: 1 "),
        "Simulation kept running after game over. stdout: {}",
        stdout
    );
    assert!(stderr.contains("Game over"), "Missing game over log. stderr: {}", stderr);
}

/// Unknown directions are rejected before the simulation starts
#[test]
fn test_invalid_hold_is_rejected() {
    let output = run_headless(&["--hold", "sideways"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("sideways"));
}
