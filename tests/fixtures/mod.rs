//! Shared test fixtures for pipeline and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Builds one emoji-data record.
pub fn emoji(short_name: &str, unified: &str, sort_order: i64, category: &str) -> Value {
    json!({
        "name": short_name.to_uppercase().replace('-', " "),
        "unified": unified,
        "non_qualified": null,
        "short_name": short_name,
        "short_names": [short_name],
        "sort_order": sort_order,
        "category": category,
        "subcategory": "test",
        "has_img_apple": true
    })
}

/// Builds a record with an unqualified sequence.
pub fn emoji_with_non_qualified(
    short_name: &str,
    unified: &str,
    non_qualified: &str,
    sort_order: i64,
    category: &str,
) -> Value {
    let mut record = emoji(short_name, unified, sort_order, category);
    record["non_qualified"] = json!(non_qualified);
    record
}

/// Adds skin variations keyed by modifier token to a record.
pub fn with_skin_variations(mut record: Value, tokens: &[&str]) -> Value {
    let base = record["unified"].as_str().unwrap_or_default().to_string();
    let variations: serde_json::Map<String, Value> = tokens
        .iter()
        .map(|token| {
            (
                (*token).to_string(),
                json!({ "unified": format!("{base}-{token}"), "has_img_apple": true }),
            )
        })
        .collect();
    record["skin_variations"] = Value::Object(variations);
    record
}

/// A small but realistic emoji table.
///
/// File order deliberately differs from `sort_order`, people & body records
/// come before smileys, and `wave`/`thumbsup` share a sort order.
pub fn sample_emoji_records() -> Vec<Value> {
    vec![
        with_skin_variations(
            emoji("wave", "1F44B", 160, "People & Body"),
            &["1F3FF", "1F3FB", "1F3FD"],
        ),
        emoji("grinning", "1F600", 1, "Smileys & Emotion"),
        emoji("flag-fr", "1F1EB-1F1F7", 1500, "Flags"),
        emoji_with_non_qualified("relaxed", "263A-FE0F", "263A", 20, "Smileys & Emotion"),
        emoji("skin-tone-2", "1F3FB", 1800, "Component"),
        emoji_with_non_qualified("heart", "2764-FE0F", "2764", 1300, "Symbols"),
        with_skin_variations(emoji("thumbsup", "1F44D", 160, "People & Body"), &["1F3FC"]),
        emoji("crab", "1F980", 600, "Animals & Nature"),
        emoji("pizza", "1F355", 700, "Food & Drink"),
    ]
}

/// CLDR-style annotations covering part of the sample table.
pub fn sample_annotations_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
    <identity>
        <version number="$Revision$"/>
        <language type="en"/>
    </identity>
    <annotations>
        <annotation cp="&#x1F600;">face | grin | grinning face</annotation>
        <annotation cp="&#x1F600;" type="tts">grinning face</annotation>
        <annotation cp="&#x1F44B;">hand | wave | waving</annotation>
        <annotation cp="&#x1F44B;" type="tts">waving hand</annotation>
        <annotation cp="&#x263A;&#xFE0F;">face | outlined | relaxed | smile | smiling face</annotation>
        <annotation cp="&#x1F1EB;&#x1F1F7;" type="tts">flag: France</annotation>
        <annotation cp="&#x1F980;">crab | Cancer | zodiac</annotation>
    </annotations>
</ldml>
"#
    .to_string()
}

/// Serializes records as an emoji-data JSON array.
pub fn emoji_json(records: &[Value]) -> String {
    serde_json::to_string_pretty(records).expect("Failed to serialize fixture records")
}

/// Writes both inputs under their fixed names into `dir`.
pub fn write_inputs(dir: &Path, records: &[Value], annotations: &str) {
    fs::write(dir.join("emoji.json"), emoji_json(records)).expect("Failed to write emoji.json");
    fs::write(dir.join("cldr-annotations-en.xml"), annotations)
        .expect("Failed to write annotations");
}

/// Creates a working directory holding both inputs.
pub fn create_workdir(records: &[Value], annotations: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_inputs(temp_dir.path(), records, annotations);
    temp_dir
}

/// Creates a working directory holding the sample inputs.
pub fn create_sample_workdir() -> TempDir {
    create_workdir(&sample_emoji_records(), &sample_annotations_xml())
}
