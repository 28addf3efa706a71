#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use scrapesync::{CategoryEntry, InterpreterSource, RunConfig};
use tempfile::TempDir;

/// Stub scraper: writes a header on overwrite, then three rows per call, and
/// logs `keyword mode end_page rows` to the file passed with `--calls`.
/// Exits 1 without writing when `--keyword` equals `--fail-on`.
const STUB: &str = r#"#!/bin/sh
keyword=""; mode=""; end_page="all"; calls=""; fail_on=""
while [ $# -gt 0 ]; do
  case "$1" in
    --keyword) keyword="$2"; shift 2 ;;
    --mode) mode="$2"; shift 2 ;;
    --end-page) end_page="$2"; shift 2 ;;
    --calls) calls="$2"; shift 2 ;;
    --fail-on) fail_on="$2"; shift 2 ;;
    *) shift ;;
  esac
done
if [ -n "$fail_on" ] && [ "$keyword" = "$fail_on" ]; then
  echo "$keyword $mode $end_page failed" >> "$calls"
  echo "blocked by target site" >&2
  exit 1
fi
if [ "$mode" = "overwrite" ]; then
  echo "name,price,stock" > card_data.csv
fi
for i in 1 2 3; do
  echo "$keyword-$i,1000,$i" >> card_data.csv
done
rows=$(($(wc -l < card_data.csv) - 1))
echo "$keyword $mode $end_page $rows" >> "$calls"
"#;

pub struct Workspace {
    pub dir: TempDir,
    pub stub: PathBuf,
    pub calls: PathBuf,
    pub root: PathBuf,
}

impl Workspace {
    /// Plain project directory, no git.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let stub = bin.join("scraper.sh");
        fs::write(&stub, STUB).unwrap();
        let root = dir.path().join("work");
        fs::create_dir_all(&root).unwrap();
        let calls = dir.path().join("calls.log");
        Self {
            dir,
            stub,
            calls,
            root,
        }
    }

    /// Project directory cloned from a bare remote with one initial commit pushed.
    pub fn with_remote() -> Self {
        let ws = Self::new();
        fs::remove_dir_all(&ws.root).unwrap();
        git(ws.dir.path(), &["init", "--bare", "-q", "remote.git"]);
        git(ws.dir.path(), &["clone", "-q", "remote.git", "work"]);
        configure_identity(&ws.root);
        git(&ws.root, &["commit", "--allow-empty", "-q", "-m", "init"]);
        git(&ws.root, &["push", "-q", "-u", "origin", "HEAD"]);
        ws
    }

    pub fn remote(&self) -> PathBuf {
        self.dir.path().join("remote.git")
    }

    pub fn config(&self, keywords: &[&str], end_page: Option<u32>) -> RunConfig {
        let mut config = RunConfig::default();
        config.project_root = self.root.clone();
        config.interpreter = InterpreterSource::Fixed {
            path: PathBuf::from("/bin/sh"),
        };
        config.sales.script = self.stub.clone();
        config.sales.extra_args = vec![
            "--calls".to_string(),
            self.calls.display().to_string(),
        ];
        config.sales.end_page = end_page;
        config.sales.categories = keywords.iter().map(|k| CategoryEntry::from(*k)).collect();
        config
    }

    pub fn fail_on(config: &mut RunConfig, keyword: &str) {
        config.sales.extra_args.push("--fail-on".to_string());
        config.sales.extra_args.push(keyword.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.calls)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn data_lines(&self) -> Vec<String> {
        fs::read_to_string(self.root.join("card_data.csv"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

pub fn git_available() -> bool {
    which::which("git").is_ok()
}

pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn configure_identity(repo: &Path) {
    git(repo, &["config", "user.name", "Price Bot"]);
    git(repo, &["config", "user.email", "bot@example.com"]);
    git(repo, &["config", "commit.gpgsign", "false"]);
}

/// Commit subjects on the remote's default branch, newest first.
pub fn remote_subjects(remote: &Path) -> Vec<String> {
    git(remote, &["log", "--format=%s", "HEAD"])
        .lines()
        .map(str::to_string)
        .collect()
}
