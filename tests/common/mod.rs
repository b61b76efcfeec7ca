#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const RENDERER_JS: &str = r"import * as C from './constants.js';

export function drawPoint(ctx, point, state, dataToScreen) {
    drawCenterSymbol(ctx, point, dataToScreen);
}

function drawCenterSymbol(ctx, point, dataToScreen) {
    ctx.globalAlpha = 0.25;
    const angleText = `${parseFloat(angleDeg.toFixed(4)).toString()}^{\circ}`;
}
";

pub const UTILS_JS: &str = "export function snap() {
    const armSelectThreshold = 5;
    const fractions = [0, 0.25, 1/3, 0.5, 2/3, 0.75, 1];
}
";

pub const SCRIPT_JS: &str = "if (bestSnap.priority < 0.1) {\n}\n";

pub struct TestEnv {
    _tmp: TempDir,
    pub project: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let project = make_fixture_project(tmp.path());
        Self { _tmp: tmp, project }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("refit");
        cmd.current_dir(&self.project).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.project.join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read project file")
    }

    pub fn write(&self, rel: &str, content: &str) {
        let p = self.path(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(p, content).expect("write project file");
    }
}

fn make_fixture_project(base: &Path) -> PathBuf {
    let project = base.join("project");
    let put = |rel: &str, content: &[u8]| {
        let p = project.join(rel);
        fs::create_dir_all(p.parent().expect("parent")).expect("create dir");
        fs::write(p, content).expect("write fixture");
    };

    put("renderer.js", RENDERER_JS.as_bytes());
    put("utils.js", UTILS_JS.as_bytes());
    put("script.js", SCRIPT_JS.as_bytes());
    put("constants.js", b"export const FACE_GLOW_ALPHA = 0.25;\n");
    put("index.html", b"<canvas id=\"c\"></canvas>\n");
    put("session.json", b"{\"secret\": \"do-not-share\"}\n");
    put("package-lock.json", b"{}\n");
    put("assets/logo.png", b"\x89PNG");
    put("assets/icons/README.md", b"# Icons\n");
    put("node_modules/lib/index.js", b"module.exports = 1;\n");
    put("node_modules/lib/deep/inner.js", b"module.exports = 2;\n");
    put(".git/HEAD.txt", b"ref: refs/heads/main\n");
    put("tests/renderer.test.js", b"test('x', () => {});\n");
    put(".hidden.js", b"hidden\n");

    project
}
