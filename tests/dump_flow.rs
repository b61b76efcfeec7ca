mod common;

use common::TestEnv;
use predicates::str::contains;
use std::fs;

const OUTPUT: &str = "project_content.txt";

#[test]
fn dump_lists_tree_and_contents() {
    let env = TestEnv::new();
    env.cmd()
        .arg("dump")
        .assert()
        .success()
        .stdout(contains("Starting directory: "))
        .stdout(contains("Output file: project_content.txt"))
        .stdout(contains("Successfully generated project content file."));

    let text = env.read(OUTPUT);
    assert!(text.contains(
        "\n.\n\
         ├── constants.js\n\
         ├── index.html\n\
         ├── project_content.txt\n\
         ├── renderer.js\n\
         ├── script.js\n\
         ├── session.json\n\
         ├── utils.js\n\
         ├── assets/\n\
         │   ├── icons/\n\
         │   │   ├── README.md\n\
         \n\n=== File Contents ===\n\n"
    ));
    assert!(text.contains("=== assets/icons/README.md ===\n# Icons\n\n\n"));
    assert!(text.contains("=== utils.js ===\nexport function snap() {"));
    assert!(text.trim_end().ends_with("Keep explanations short; lead with the code."));
}

#[test]
fn excluded_and_hidden_entries_never_appear() {
    let env = TestEnv::new();
    env.cmd().arg("dump").assert().success();

    let text = env.read(OUTPUT);
    for absent in [
        "node_modules",
        "inner.js",
        "module.exports",
        "HEAD.txt",
        "renderer.test.js",
        "package-lock.json",
        "logo.png",
        ".hidden.js",
    ] {
        assert!(!text.contains(absent), "{} leaked into dump", absent);
    }
}

#[test]
fn suppressed_file_is_listed_without_its_body() {
    let env = TestEnv::new();
    env.cmd().arg("dump").assert().success();

    let text = env.read(OUTPUT);
    assert!(text.contains("├── session.json\n"));
    assert!(text.contains(
        "=== session.json ===\n--- CONTENT EXCLUDED (listed in exclude_files) ---\n\n\n"
    ));
    assert!(!text.contains("do-not-share"));
}

#[test]
fn rerun_without_changes_is_byte_identical() {
    let env = TestEnv::new();
    env.cmd().arg("dump").assert().success();
    let first = fs::read(env.path(OUTPUT)).expect("first dump");
    env.cmd().arg("dump").assert().success();
    let second = fs::read(env.path(OUTPUT)).expect("second dump");
    assert_eq!(first, second);

    let a = env.run_json(&["dump"]);
    let b = env.run_json(&["dump"]);
    assert_eq!(a["data"]["sha256"], b["data"]["sha256"]);
    assert_eq!(a["data"]["bytes"].as_u64(), Some(first.len() as u64));
}

#[test]
fn config_file_and_flags_shape_the_dump() {
    let env = TestEnv::new();
    env.write(
        "dump.toml",
        "extensions = [\".js\"]\nexclude_substrings = [\"util\"]\nsuppress_content = [\"script.js\"]\n",
    );

    let v = env.run_json(&["dump", "--config", "dump.toml", "--output", "llm.txt"]);
    assert_eq!(v["ok"], true);
    assert_eq!(v["data"]["suppressed"], 1);

    let text = env.read("llm.txt");
    assert!(text.contains("=== renderer.js ==="));
    assert!(text.contains("=== script.js ===\n--- CONTENT EXCLUDED"));
    assert!(!text.contains("=== utils.js ==="));
    assert!(!text.contains("index.html"));
    assert!(!env.path(OUTPUT).exists());
}

#[test]
fn missing_root_is_reported_not_fatal() {
    let env = TestEnv::new();
    env.cmd()
        .args(["dump", "--root", "no-such-dir"])
        .assert()
        .success()
        .stdout(contains("An error occurred:"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_gets_placeholder_and_dump_continues() {
    let env = TestEnv::new();
    std::os::unix::fs::symlink(env.path("no-such-target.js"), env.path("dangling.js"))
        .expect("create dangling symlink");

    let v = env.run_json(&["dump"]);
    assert_eq!(v["ok"], true);
    assert_eq!(v["data"]["read_errors"], 1);

    let text = env.read(OUTPUT);
    let header = "=== dangling.js ===\n--- Error reading file: ";
    let at = text.find(header).expect("placeholder for dangling.js");
    let after = &text[at..];
    let line_end = after.find(" ---\n\n\n").expect("placeholder line closes");
    assert!(after[line_end..].starts_with(" ---\n\n\n=== index.html ===\n<canvas id=\"c\"></canvas>\n"));
}

#[test]
fn nested_output_path_is_suppressed() {
    let env = TestEnv::new();
    env.write("out/keep.txt", "kept\n");

    env.cmd()
        .args(["dump", "--output", "out/dump.txt"])
        .assert()
        .success();

    let text = env.read("out/dump.txt");
    assert!(text.contains(
        "=== out/dump.txt ===\n--- CONTENT EXCLUDED (listed in exclude_files) ---\n\n\n=== out/keep.txt ===\nkept\n"
    ));
    assert!(!env.path(OUTPUT).exists());
}
