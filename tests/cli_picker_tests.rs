//! End-to-end tests for `emojidb picker`, `emojidb reactions` and `emojidb recent`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn run_in(args: &[&str], config_dir: &TempDir) -> std::process::Output {
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

// ============================================================================
// Picker Command Tests
// ============================================================================

#[test]
fn test_picker_sections_json() {
    let output = run(&["picker", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    assert_eq!(result["max_version"], "15.1");
    let sections = result["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 9);
    assert_eq!(sections[0]["id"], "smileysAndEmotion");
    assert_eq!(sections[0]["emojis"][0], "😀");
    assert!(result["recent"].as_array().unwrap().is_empty());
}

#[test]
fn test_picker_respects_max_version() {
    let output = run(&["picker", "--max-version", "14.0", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    let smileys = result["sections"][0]["emojis"].as_array().unwrap();
    assert!(!smileys.iter().any(|g| g == "🫨"), "shaking face is 15.0");
    assert!(smileys.iter().any(|g| g == "🫠"), "melting face is 14.0");
}

#[test]
fn test_picker_rejects_future_max_version() {
    let output = run(&["picker", "--max-version", "99.0", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("newer than the emoji table"));
}

#[test]
fn test_picker_uses_configured_preferences() {
    let config_dir = TempDir::new().unwrap();

    let output = run_in(
        &["config", "set", "--skin-tone", "thumbsUpSign=dark", "--max-version", "13.0"],
        &config_dir,
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = run_in(&["picker", "--json"], &config_dir);
    let result = stdout_json(&output);
    assert_eq!(result["max_version"], "13.0");
    let people = result["sections"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == "peopleAndBody")
        .unwrap();
    let glyphs = people["emojis"].as_array().unwrap();
    assert!(glyphs.iter().any(|g| g == "👍🏿"));
    assert!(!glyphs.iter().any(|g| g == "👍"));
}

// ============================================================================
// Reactions Command Tests
// ============================================================================

#[test]
fn test_reactions_default() {
    let output = run(&["reactions", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    let base: Vec<&str> = result["base"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["glyph"].as_str())
        .collect();
    assert_eq!(base, vec!["👍", "👎"]);
    assert_eq!(result["base"][0]["legacy"], "acknowledge");
    assert_eq!(result["base"][1]["legacy"], "decline");

    let default: Vec<&str> = result["default"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["name"].as_str())
        .collect();
    assert_eq!(
        default,
        vec![
            "heavyBlackHeart",
            "faceWithTearsOfJoy",
            "cryingFace",
            "personWithFoldedHands"
        ]
    );
}

#[test]
fn test_reactions_follow_preferred_tone() {
    let config_dir = TempDir::new().unwrap();
    let output = run_in(
        &[
            "config",
            "set",
            "--skin-tone",
            "thumbsDownSign=light",
            "--skin-tone",
            "personWithFoldedHands=medium",
        ],
        &config_dir,
    );
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&run_in(&["reactions", "--json"], &config_dir));
    assert_eq!(result["base"][1]["glyph"], "👎🏻");
    assert_eq!(result["base"][1]["legacy"], "decline");
    assert_eq!(result["default"][3]["glyph"], "🙏🏽");
}

// ============================================================================
// Recent Command Tests
// ============================================================================

#[test]
fn test_recent_add_and_list() {
    let config_dir = TempDir::new().unwrap();

    for emoji in ["cryingFace", "👍🏾", "heavyBlackHeart", "cryingFace"] {
        let output = run_in(&["recent", "add", emoji], &config_dir);
        assert_eq!(
            output.status.code(),
            Some(0),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let result = stdout_json(&run_in(&["recent", "list", "--json"], &config_dir));
    let glyphs: Vec<&str> = result
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["glyph"].as_str())
        .collect();
    assert_eq!(glyphs, vec!["😢", "❤️", "👍🏾"]);

    // Picker shows the same list
    let picker = stdout_json(&run_in(&["picker", "--json"], &config_dir));
    assert_eq!(picker["recent"][0], "😢");
}

#[test]
fn test_recent_clear() {
    let config_dir = TempDir::new().unwrap();
    run_in(&["recent", "add", "👍"], &config_dir);

    let output = run_in(&["recent", "clear"], &config_dir);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&run_in(&["recent", "list", "--json"], &config_dir));
    assert!(result.as_array().unwrap().is_empty());
}

#[test]
fn test_recent_add_unknown() {
    let output = run(&["recent", "add", "xyz"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_recent_skips_unknown_glyphs_in_config() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[picker]\nmax_emoji_version = \"15.1\"\n\n[picker.recent]\n\"👍\" = 1\n\"not-an-emoji\" = 0\n",
    )
    .unwrap();

    let result = stdout_json(&run_in(&["recent", "list", "--json"], &config_dir));
    let glyphs: Vec<&str> = result
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["glyph"].as_str())
        .collect();
    assert_eq!(glyphs, vec!["👍"]);
}
