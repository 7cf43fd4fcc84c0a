use std::fs::File;
use std::io::{BufReader, Cursor};
use std::process::{Command, Output};

use alien_invasion::simulation::read_city_map;

fn alien_invasion(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_alien_invasion"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute alien_invasion")
}

/// Test that an invasion on a generated map runs to completion
#[test]
fn test_invasion_runs_on_generated_map() {
    let output = alien_invasion(&[
        "run", "--aliens", "4", "--moves", "50", "--width", "4", "--height", "4", "--seed", "7",
    ]);

    assert!(
        output.status.success(),
        "Invasion failed to run. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("INVASION COMPLETE"),
        "Invasion did not complete properly. stderr: {}",
        stderr
    );
    for statistic in [
        "Turns played:",
        "Cities remaining:",
        "Cities destroyed:",
        "Aliens remaining:",
        "Aliens destroyed:",
    ] {
        assert!(stderr.contains(statistic), "Missing '{}' statistic", statistic);
    }
}

/// Test that a generated map file can be loaded back for an invasion
#[test]
fn test_generate_then_run_from_file() {
    let path = std::env::temp_dir().join(format!("alien_invasion_{}.map", std::process::id()));
    let path_arg = path.to_string_lossy().into_owned();

    let output = alien_invasion(&[
        "generate", "--width", "3", "--height", "5", "--output", &path_arg, "--seed", "3",
    ]);
    assert!(output.status.success(), "Map generation failed");

    let map = read_city_map(BufReader::new(File::open(&path).unwrap()), None).unwrap();
    assert!(map.len() <= 15);
    let map_text = std::fs::read_to_string(&path).unwrap();

    let output = alien_invasion(&["run", "--aliens", "2", "--map-file", &path_arg]);
    let _ = std::fs::remove_file(&path);
    assert!(
        output.status.success(),
        "Invasion from file failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // The initial map is printed to stdout, followed by the final map
    let stdout = String::from_utf8(output.stdout).unwrap();
    let printed: Vec<&str> = stdout.lines().collect();
    for line in map_text.lines() {
        assert!(printed.contains(&line), "Initial map line '{}' not printed", line);
    }
    assert!(read_city_map(Cursor::new(stdout.as_bytes()), None).is_ok());
}

/// Test that --width counts cities per row and --height counts rows
#[test]
fn test_width_and_height_orientation() {
    let path = std::env::temp_dir().join(format!("alien_invasion_column_{}.map", std::process::id()));
    let path_arg = path.to_string_lossy().into_owned();

    for seed in ["1", "2", "3"] {
        let output = alien_invasion(&[
            "generate", "--width", "1", "--height", "6", "--output", &path_arg, "--seed", seed,
        ]);
        assert!(output.status.success(), "Map generation failed");

        let map_text = std::fs::read_to_string(&path).unwrap();
        assert!(
            !map_text.contains("east=") && !map_text.contains("west="),
            "A single column map has only north/south roads: {}",
            map_text
        );
    }
    let _ = std::fs::remove_file(&path);
}

/// Test that the extinction message is logged even on the last allowed turn
#[test]
fn test_extinction_logged_on_final_turn() {
    // Every placement of two aliens on this map ends in a collision at B after one turn
    let path = std::env::temp_dir().join(format!("alien_invasion_oneway_{}.map", std::process::id()));
    std::fs::write(&path, "A east=B\n").unwrap();
    let path_arg = path.to_string_lossy().into_owned();

    let output = alien_invasion(&["run", "--aliens", "2", "--moves", "1", "--map-file", &path_arg]);
    let _ = std::fs::remove_file(&path);
    assert!(output.status.success(), "Invasion failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Every alien has been destroyed after 1 turns"),
        "Missing extinction message. stderr: {}",
        stderr
    );
}

/// Test that out-of-range settings are rejected
#[test]
fn test_invalid_settings_are_rejected() {
    assert!(!alien_invasion(&["run", "--moves", "0", "--width", "2", "--height", "2"])
        .status
        .success());
    assert!(!alien_invasion(&["run", "--moves", "10001", "--width", "2", "--height", "2"])
        .status
        .success());
    assert!(!alien_invasion(&["run", "--aliens", "0", "--width", "2", "--height", "2"])
        .status
        .success());
    assert!(!alien_invasion(&["run", "--aliens", "26", "--width", "2", "--height", "2"])
        .status
        .success());
    assert!(!alien_invasion(&["run", "--width", "20", "--height", "20"]).status.success());
    assert!(!alien_invasion(&["run"]).status.success());
}
