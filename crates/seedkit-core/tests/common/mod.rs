//! Shared fakes for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use seedkit_core::{CommandOutput, CommandRunner, CommandSpec, Error, Prompter, Result};
use std::collections::VecDeque;
use std::sync::Mutex;
use tempfile::TempDir;

/// Simulates `git`, `npm` and `npx` without touching the network
///
/// `git clone` creates the destination with a `.git` directory and, when
/// `manifest` is set, a `package.json`. Every other command returns the next
/// queued exit code, defaulting to 0.
pub struct FakeRunner {
    pub calls: Mutex<Vec<CommandSpec>>,
    pub manifest: Option<String>,
    pub clone_code: i32,
    pub exit_codes: Mutex<VecDeque<i32>>,
    pub stderr: String,
    pub git_dir_as_file: bool,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            manifest: None,
            clone_code: 0,
            exit_codes: Mutex::new(VecDeque::new()),
            stderr: String::new(),
            git_dir_as_file: false,
        }
    }

    pub fn with_manifest(mut self, manifest: &str) -> Self {
        self.manifest = Some(manifest.to_string());
        self
    }

    pub fn with_clone_code(mut self, code: i32) -> Self {
        self.clone_code = code;
        self
    }

    pub fn with_exit_codes(self, codes: &[i32]) -> Self {
        self.exit_codes.lock().unwrap().extend(codes.iter().copied());
        self
    }

    pub fn with_stderr(mut self, stderr: &str) -> Self {
        self.stderr = stderr.to_string();
        self
    }

    /// Clone leaves `.git` as a plain file so history removal fails
    pub fn with_git_dir_as_file(mut self) -> Self {
        self.git_dir_as_file = true;
        self
    }

    pub fn rendered_calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push(spec.clone());

        if spec.program == "git" && spec.args.first().map(String::as_str) == Some("clone") {
            let dest = Utf8PathBuf::from(spec.args.last().unwrap());
            if self.git_dir_as_file {
                std::fs::create_dir_all(&dest).unwrap();
                std::fs::write(dest.join(".git"), "gitdir: elsewhere\n").unwrap();
                return Ok(CommandOutput::exited(0));
            }
            // Real git leaves a partial checkout behind on some failures
            std::fs::create_dir_all(dest.join(".git")).unwrap();
            if self.clone_code != 0 {
                return Ok(CommandOutput::exited(self.clone_code).with_stderr(&self.stderr));
            }
            std::fs::write(dest.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
            std::fs::write(dest.join("README.md"), "# seed\n").unwrap();
            if let Some(manifest) = &self.manifest {
                std::fs::write(dest.join("package.json"), manifest).unwrap();
            }
            return Ok(CommandOutput::exited(0));
        }

        let code = self.exit_codes.lock().unwrap().pop_front().unwrap_or(0);
        Ok(CommandOutput::exited(code).with_stderr(&self.stderr))
    }
}

/// Replays fixed answers; an empty answer falls back to the default
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    selection: usize,
    pub asked: Mutex<Vec<(String, String)>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            selection: 0,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn selecting(mut self, index: usize) -> Self {
        self.selection = index;
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, _prompt: &str, _items: &[String]) -> Result<usize> {
        Ok(self.selection)
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        self.asked
            .lock()
            .unwrap()
            .push((prompt.to_string(), default.to_string()));
        let answer = self.answers.lock().unwrap().pop_front().unwrap_or_default();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}

/// Fails every question, like a user pressing Ctrl-C
pub struct AbortingPrompter;

impl Prompter for AbortingPrompter {
    fn select(&self, _prompt: &str, _items: &[String]) -> Result<usize> {
        Err(Error::prompt("aborted"))
    }

    fn input(&self, _prompt: &str, _default: &str) -> Result<String> {
        Err(Error::prompt("aborted"))
    }
}

pub fn temp_dir() -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid UTF-8 path");
    (temp, root)
}

pub fn read(path: &Utf8Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
