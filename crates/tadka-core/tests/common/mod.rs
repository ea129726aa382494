use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const JEERA_ALOO: &str = r#"{
    "name": "Jeera aloo",
    "description": "Potatoes tempered with cumin and turmeric.",
    "steps": [
        {"id": 1, "action": "place", "item": "pan", "state": "pan_ready",
         "hints": ["Drag the pan onto the stove"]},
        {"id": 2, "action": "chop", "item": "potato", "hints": ["Cut into cubes"]},
        {"id": 3, "action": "add", "item": "zeera", "requires": [1],
         "options": ["pinch", "1tsp"], "state": "tempering"},
        {"id": 4, "action": "add", "item": "turmeric", "requires": [3],
         "options": ["1tsp", "2tsp"]},
        {"id": 5, "action": "fry", "item": "potato", "requires": [2, 4], "state": "cooked"}
    ]
}"#;

/// Helper function to create a recipe directory holding `files`
pub fn create_recipe_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for (name, contents) in files {
        write_recipe(temp_dir.path(), name, contents);
    }
    temp_dir
}

pub fn write_recipe(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, contents).expect("Failed to write recipe");
    path
}
