//! End-to-end tests for `emojidb export` and `emojidb import`.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Export Command Tests
// ============================================================================

#[test]
fn test_export_stdout_matches_file() {
    let stdout_output = run(&["export"]);
    assert_eq!(stdout_output.status.code(), Some(0));

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("emoji.json");
    let file_output = run(&["export", "--output", path.to_str().unwrap()]);
    assert_eq!(
        file_output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&file_output.stderr)
    );
    assert!(String::from_utf8_lossy(&file_output.stdout).contains("Exported 1907 emoji"));

    let written = fs::read(&path).unwrap();
    assert_eq!(written, stdout_output.stdout);
}

#[test]
fn test_exported_document_validates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("emoji.json");
    run(&["export", "-o", path.to_str().unwrap()]);

    let output = run(&["validate", "--file", path.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["emojis"], 1907);
}

// ============================================================================
// Import Command Tests
// ============================================================================

#[test]
fn test_import_summary_json() {
    let (input, dir) = temp_file("emoji-test.txt", EMOJI_TEST_EXCERPT);
    let out = dir.path().join("emoji.json");

    let output = run(&[
        "import",
        input.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--json",
    ]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    assert_eq!(result["version"], "15.1");
    assert_eq!(result["emojis"], 12);
    assert_eq!(result["skin_tone_variants"], 9);
    assert_eq!(result["skipped"], 1);
    assert_eq!(result["orphaned"], 0);
    assert_eq!(result["kept_names"], 12);
    assert_eq!(result["new_names"], 0);

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let emojis = document["emojis"].as_array().unwrap();
    let names: Vec<&str> = emojis.iter().filter_map(|e| e["name"].as_str()).collect();
    assert_eq!(
        names,
        vec![
            "grinningFace",
            "faceWithTearsOfJoy",
            "cryingFace",
            "heavyBlackHeart",
            "thumbsUpSign",
            "handshake",
            "personWithFoldedHands",
            "peopleHoldingHands",
            "emojiModifierFitzpatrickType12",
            "pinata",
            "confettiBall",
            "flagGermany",
        ]
    );

    let handshake = &emojis[5];
    assert_eq!(
        handshake["skin_tones"],
        serde_json::json!([
            {"tones": ["light"], "glyph": "🤝🏻"},
            {"tones": ["light", "mediumLight"], "glyph": "🫱🏻‍🫲🏼"}
        ])
    );
    assert!(emojis[8]["category"].is_null());
}

#[test]
fn test_import_generates_names_without_existing_document() {
    let (input, dir) = temp_file("emoji-test.txt", EMOJI_TEST_EXCERPT);
    let empty = dir.path().join("empty.json");
    fs::write(
        &empty,
        r#"{"version":"1.0","categories":[],"emojis":[]}"#,
    )
    .unwrap();

    let output = run(&[
        "import",
        input.to_str().unwrap(),
        "--names-from",
        empty.to_str().unwrap(),
    ]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let document = stdout_json(&output);
    let names: Vec<&str> = document["emojis"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();
    assert!(names.contains(&"redHeart"));
    assert!(names.contains(&"thumbsUp"));
    assert!(names.contains(&"flagGermany"));
    assert!(names.contains(&"lightSkinTone"));
}

#[test]
fn test_imported_document_validates() {
    let (input, dir) = temp_file("emoji-test.txt", EMOJI_TEST_EXCERPT);
    let out = dir.path().join("emoji.json");
    run(&["import", input.to_str().unwrap(), "-o", out.to_str().unwrap()]);

    let output = run(&["validate", "--file", out.to_str().unwrap()]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn test_import_unknown_group() {
    let (input, _dir) = temp_file(
        "emoji-test.txt",
        "# group: Nonsense\n1F600 ; fully-qualified # 😀 E1.0 grinning face\n",
    );

    let output = run(&["import", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_import_missing_input() {
    let output = run(&["import", "/nonexistent/emoji-test.txt"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_import_json_requires_output() {
    let (input, _dir) = temp_file("emoji-test.txt", EMOJI_TEST_EXCERPT);
    let output = run(&["import", input.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(2), "clap usage errors exit 2");
}
