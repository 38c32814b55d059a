//! End-to-end tests for `emojidb show`, `emojidb search` and `emojidb tone`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_by_name() {
    let output = run(&["show", "thumbsUpSign", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    assert_eq!(result["name"], "thumbsUpSign");
    assert_eq!(result["glyph"], "👍");
    assert_eq!(result["category"], "peopleAndBody");
    assert_eq!(result["version"], "0.6");
    assert_eq!(result["legacy_reaction"], "acknowledge");

    let tones = result["skin_tones"].as_array().unwrap();
    assert_eq!(tones.len(), 5);
    assert_eq!(tones[2]["tones"], serde_json::json!(["medium"]));
    assert_eq!(tones[2]["glyph"], "👍🏽");
}

#[test]
fn test_show_by_toned_glyph() {
    let output = run(&["show", "👍🏿", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["name"], "thumbsUpSign");
    assert_eq!(result["selected_tones"], serde_json::json!(["dark"]));
}

#[test]
fn test_show_two_person_symbol() {
    let output = run(&["show", "peopleHoldingHands", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    let tones = result["skin_tones"].as_array().unwrap();
    assert_eq!(tones.len(), 25);
    assert!(tones
        .iter()
        .all(|t| t["tones"].as_array().map(Vec::len) == Some(2)));
}

#[test]
fn test_show_component_has_no_category() {
    let output = run(&["show", "🏻", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert!(result.get("category").is_none());
    assert_eq!(result["subgroup"], "skin-tone");
}

#[test]
fn test_show_unknown() {
    let output = run(&["show", "notAnEmoji"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown emoji"));
}

// ============================================================================
// Search Command Tests
// ============================================================================

#[test]
fn test_search_ranks_exact_match_first() {
    let output = run(&["search", "handshake", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    let results = result["results"].as_array().unwrap();
    assert_eq!(results[0]["name"], "handshake");
}

#[test]
fn test_search_within_category() {
    let output = run(&["search", "heart", "--category", "animalsAndNature", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    let results = result["results"].as_array().unwrap();
    assert!(results.iter().all(|e| e["category"] == "animalsAndNature"));
}

#[test]
fn test_search_no_results() {
    let output = run(&["search", "zzzzqqq"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No emoji match"));
}

#[test]
fn test_search_limit() {
    let output = run(&["search", "face", "--limit", "3", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["count"], 3);
}

// ============================================================================
// Tone Command Tests
// ============================================================================

#[test]
fn test_tone_single() {
    let output = run(&["tone", "thumbsUpSign", "medium"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "👍🏽");
}

#[test]
fn test_tone_pair() {
    let output = run(&["tone", "handshake", "light", "dark", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["tones"], serde_json::json!(["light", "dark"]));
    assert_eq!(result["glyph"], "🫱🏻‍🫲🏿");
}

#[test]
fn test_tone_same_pair_not_synthesized() {
    // The handshake tabulates same-tone combinations only as single keys
    let output = run(&["tone", "handshake", "dark", "dark"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no variant"));

    let output = run(&["tone", "handshake", "dark"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "🤝🏿");
}

#[test]
fn test_tone_on_untoned_symbol() {
    let output = run(&["tone", "faceWithTearsOfJoy", "light"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no skin tone variants"));
}

#[test]
fn test_tone_kebab_case() {
    let output = run(&["tone", "peopleHoldingHands", "medium-light", "medium-dark"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "🧑🏼‍🤝‍🧑🏾"
    );
}
