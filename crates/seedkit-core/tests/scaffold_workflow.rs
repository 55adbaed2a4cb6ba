//! Integration tests for the scaffold workflow
//!
//! External tools are replaced by `FakeRunner`; the filesystem is real.

mod common;

use common::{read, temp_dir, AbortingPrompter, FakeRunner, ScriptedPrompter};
use seedkit_core::{
    Error, Installer, ManifestUpdate, ScaffoldState, Scaffolder, TemplateDescriptor,
    TemplateRegistry, TemplateResolver,
};

fn starter() -> TemplateDescriptor {
    TemplateDescriptor::new("starter", "Starter", "https://example.com/seed.git")
}

#[tokio::test]
async fn test_scaffold_rewrites_manifest() {
    let (_temp, root) = temp_dir();
    let target = root.join("my-app");
    let runner = FakeRunner::new()
        .with_manifest(r#"{"name":"old","version":"0.1.0","extra":"keep-me"}"#);
    let prompter = ScriptedPrompter::new(&["new", "2.0.0", "d", "a"]);

    let report = Scaffolder::new(&runner, &prompter)
        .run(&target, &starter())
        .await
        .expect("scaffold should succeed");

    assert_eq!(report.state, ScaffoldState::Done);
    assert_eq!(report.manifest, ManifestUpdate::Updated);
    assert_eq!(report.project_dir, target);
    assert!(!target.join(".git").exists());
    assert!(target.join("README.md").exists());
    assert_eq!(
        read(&target.join("package.json")),
        "{\n  \"name\": \"new\",\n  \"version\": \"2.0.0\",\n  \"extra\": \"keep-me\",\n  \"description\": \"d\",\n  \"author\": \"a\"\n}\n"
    );

    let calls = runner.rendered_calls();
    assert_eq!(
        calls,
        vec![
            format!("git clone https://example.com/seed.git {}", target),
            "npm install".to_string(),
        ]
    );
    let calls = runner.calls.lock().unwrap();
    assert_eq!(calls[1].cwd.as_deref(), Some(target.as_path()));
}

#[tokio::test]
async fn test_default_metadata_answers() {
    let (_temp, root) = temp_dir();
    let target = root.join("dashboard");
    let runner = FakeRunner::new().with_manifest(r#"{"name":"seed"}"#);
    let prompter = ScriptedPrompter::new(&[]);

    let report = Scaffolder::new(&runner, &prompter)
        .run(&target, &starter())
        .await
        .unwrap();

    assert_eq!(report.metadata.name, "dashboard");
    assert_eq!(report.metadata.version, "1.0.0");

    let asked = prompter.asked.lock().unwrap();
    let prompts: Vec<&str> = asked.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(prompts, ["Project name?", "Version?", "Description?", "Author?"]);
    assert_eq!(asked[0].1, "dashboard");
}

#[tokio::test]
async fn test_template_without_manifest() {
    let (_temp, root) = temp_dir();
    let target = root.join("bare");
    let runner = FakeRunner::new();
    let prompter = ScriptedPrompter::new(&[]);

    let report = Scaffolder::new(&runner, &prompter)
        .run(&target, &starter())
        .await
        .unwrap();

    assert_eq!(report.manifest, ManifestUpdate::Missing);
    assert!(!target.join("package.json").exists());
    assert_eq!(report.state, ScaffoldState::Done);
}

#[tokio::test]
async fn test_install_failure_removes_project() {
    let (_temp, root) = temp_dir();
    let target = root.join("broken");
    let runner = FakeRunner::new()
        .with_manifest("{}")
        .with_exit_codes(&[1])
        .with_stderr("npm ERR! code E404");
    let prompter = ScriptedPrompter::new(&[]);

    let err = Scaffolder::new(&runner, &prompter)
        .run(&target, &starter())
        .await
        .unwrap_err();

    assert!(!target.exists(), "project directory must be removed");
    assert!(matches!(
        err,
        Error::ScaffoldFailed {
            cleaned_up: true,
            ..
        }
    ));
    assert!(matches!(err.root(), Error::InstallFailed { detail } if detail == "npm ERR! code E404"));
}

#[tokio::test]
async fn test_clone_failure_removes_partial_checkout() {
    let (_temp, root) = temp_dir();
    let target = root.join("partial");
    let runner = FakeRunner::new()
        .with_clone_code(128)
        .with_stderr("fatal: repository not found");
    let prompter = ScriptedPrompter::new(&[]);

    let err = Scaffolder::new(&runner, &prompter)
        .run(&target, &starter())
        .await
        .unwrap_err();

    assert!(!target.exists());
    assert_eq!(
        err.to_string(),
        "Cloning template failed: Failed to clone template: fatal: repository not found"
    );
    assert!(prompter.asked.lock().unwrap().is_empty());
    assert_eq!(runner.calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_prompt_abort_removes_project() {
    let (_temp, root) = temp_dir();
    let target = root.join("aborted");
    let runner = FakeRunner::new().with_manifest("{}");

    let err = Scaffolder::new(&runner, &AbortingPrompter)
        .run(&target, &starter())
        .await
        .unwrap_err();

    match &err {
        Error::ScaffoldFailed {
            step, cleaned_up, ..
        } => {
            assert_eq!(step, "Collecting project metadata");
            assert!(*cleaned_up);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(err.root(), Error::Prompt(_)));
    assert!(!target.exists());
    // Only the clone ran
    assert_eq!(runner.rendered_calls().len(), 1);
}

#[cfg(unix)]
#[tokio::test]
async fn test_history_removal_failure_removes_project() {
    let (_temp, root) = temp_dir();
    let target = root.join("odd-history");
    let runner = FakeRunner::new().with_git_dir_as_file();
    let prompter = ScriptedPrompter::new(&[]);

    let err = Scaffolder::new(&runner, &prompter)
        .run(&target, &starter())
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        Error::ScaffoldFailed { step, cleaned_up: true, .. } if step == "Removing git history"
    ));
    assert!(matches!(err.root(), Error::Io(_)));
    assert!(!target.exists());
    assert!(prompter.asked.lock().unwrap().is_empty());
    assert_eq!(runner.rendered_calls().len(), 1);
}

#[tokio::test]
async fn test_invalid_manifest_removes_project() {
    let (_temp, root) = temp_dir();
    let target = root.join("bad-manifest");
    let runner = FakeRunner::new().with_manifest("[1, 2, 3]");
    let prompter = ScriptedPrompter::new(&[]);

    let err = Scaffolder::new(&runner, &prompter)
        .run(&target, &starter())
        .await
        .unwrap_err();

    assert!(matches!(err.root(), Error::InvalidManifest { .. }));
    assert!(!target.exists());
    // Install never ran
    assert_eq!(runner.calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_existing_directory_is_left_alone() {
    let (_temp, root) = temp_dir();
    let target = root.join("existing");
    std::fs::create_dir_all(&target).unwrap();
    std::fs::write(target.join("notes.txt"), "keep").unwrap();

    let runner = FakeRunner::new();
    let prompter = ScriptedPrompter::new(&[]);

    let err = Scaffolder::new(&runner, &prompter)
        .run(&target, &starter())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ProjectExists { .. }));
    assert_eq!(read(&target.join("notes.txt")), "keep");
    assert!(runner.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_clone_options_and_custom_installer() {
    let (_temp, root) = temp_dir();
    let target = root.join("compass");
    let registry = TemplateRegistry::from_embedded().unwrap();
    let prompter = ScriptedPrompter::new(&[]);
    let template = TemplateResolver::new(&registry)
        .resolve(Some("compass-starter"), &prompter)
        .unwrap();

    let runner = FakeRunner::new();
    Scaffolder::new(&runner, &prompter)
        .with_installer(Installer::new("yarn", vec![]))
        .run(&target, template)
        .await
        .unwrap();

    assert_eq!(
        runner.rendered_calls(),
        vec![
            format!(
                "git clone --single-branch --branch compass_theme https://github.com/patternfly/patternfly-react-seed.git {}",
                target
            ),
            "yarn".to_string(),
        ]
    );
}
