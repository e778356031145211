mod common;

use common::TestEnv;
use serde_json::json;

#[test]
fn empty_project_falls_back_to_dir_name_and_mit() {
    let env = TestEnv::new();
    let v = env.run_json(&["detect"]);
    assert_eq!(v["ok"], true);
    assert_eq!(
        v["data"],
        json!({
            "title": "my-project",
            "description": "",
            "license": "MIT",
            "installation": "",
            "tests": "",
            "github": "",
            "email": "",
            "author": ""
        })
    );
}

#[test]
fn manifest_and_git_config_are_combined() {
    let env = TestEnv::new();
    env.write_manifest(json!({
        "name": "widget",
        "description": "Makes widgets",
        "license": "BSD-3-Clause",
        "author": {"name": "Ann"},
        "devDependencies": {"vitest": "^1.0.0"},
        "scripts": {"test": "vitest run"}
    }));
    env.write_git_config("[remote \"origin\"]\n\turl = git@github.com:ann-dev/widget.git\n");
    env.write_global_git_config("[user]\n\tname = Global Ann\n\temail = ann@example.com\n");

    let v = env.run_json(&["detect"]);
    let d = &v["data"];
    assert_eq!(d["title"], "widget");
    assert_eq!(d["license"], "BSD-3-Clause");
    assert_eq!(d["installation"], "npm install");
    assert_eq!(d["tests"], "vitest run");
    assert_eq!(d["github"], "ann-dev");
    assert_eq!(d["author"], "Ann");
    assert_eq!(d["email"], "ann@example.com");
}

#[test]
fn local_git_config_wins_over_global() {
    let env = TestEnv::new();
    env.write_git_config("[user]\n\temail = work@corp.example\n");
    env.write_global_git_config("[user]\n\temail = me@home.example\n\tname = Me\n");
    let v = env.run_json(&["detect"]);
    assert_eq!(v["data"]["email"], "work@corp.example");
    assert_eq!(v["data"]["author"], "Me");
}

#[test]
fn quoted_global_name_is_unquoted() {
    let env = TestEnv::new();
    env.write_global_git_config("[User]\n\tName = \"Jane Doe\"\n");
    let v = env.run_json(&["detect"]);
    assert_eq!(v["data"]["author"], "Jane Doe");
}

#[test]
fn malformed_manifest_is_ignored() {
    let env = TestEnv::new();
    std::fs::write(env.project.join("package.json"), "{ not json").expect("write");
    let v = env.run_json(&["detect"]);
    assert_eq!(v["data"]["title"], "my-project");
}

#[test]
fn questions_skip_detected_fields() {
    let env = TestEnv::new();
    env.write_manifest(json!({"name": "widget", "author": "Ann <ann@x.io>"}));
    let v = env.run_json(&["questions"]);
    let names: Vec<&str> = v["data"]
        .as_array()
        .expect("question list")
        .iter()
        .filter_map(|q| q["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec!["description", "github", "license", "usage", "contributing", "outputFile"]
    );
}
