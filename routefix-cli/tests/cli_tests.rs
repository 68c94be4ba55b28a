use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn site(config: &str, files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child(".vitepress/config.mjs")
        .write_str(config)
        .unwrap();
    for file in files {
        temp_dir.child(file).write_str("# article\n").unwrap();
    }
    temp_dir
}

fn routefix(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("routefix").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ROUTEFIX_YES")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("routefix").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rename numbered markdown files to match the routes",
        ));
}

#[test]
fn test_version_subcommand() {
    let mut cmd = Command::cargo_bin("routefix").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("routefix 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    let mut cmd = Command::cargo_bin("routefix").unwrap();
    cmd.args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"\{"name":"routefix","version":"0\.1\.0"\}"#).unwrap());
}

#[test]
fn test_sync_confirmed_renames_file() {
    let temp_dir = site("link: '/guide/02-setup'", &["guide/2-setup.md"]);

    routefix(&temp_dir)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Rename guide/2-setup.md -> guide/02-setup.md",
        ))
        .stdout(predicate::str::contains(
            "Renamed: guide/2-setup.md -> guide/02-setup.md",
        ));

    temp_dir.child("guide/02-setup.md").assert(predicate::path::exists());
    temp_dir.child("guide/2-setup.md").assert(predicate::path::missing());
}

#[test]
fn test_sync_refused_changes_nothing() {
    let temp_dir = site("link: '/guide/02-setup'", &["guide/2-setup.md"]);

    routefix(&temp_dir)
        .arg("sync")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    temp_dir.child("guide/2-setup.md").assert(predicate::path::exists());
    temp_dir.child("guide/02-setup.md").assert(predicate::path::missing());
}

#[test]
fn test_sync_nothing_to_rename() {
    let temp_dir = site("link: '/guide/02-setup'", &["guide/02-setup.md"]);

    routefix(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No files need renaming."))
        .stdout(predicate::str::contains("Apply these changes?").not());
}

#[test]
fn test_sync_yes_flag_skips_prompt() {
    let temp_dir = site("link: '/guide/02-about'", &["guide/1-about.md"]);

    routefix(&temp_dir)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Apply these changes?").not());

    temp_dir.child("guide/02-about.md").assert(predicate::path::exists());
}

#[test]
fn test_root_level_file_is_left_alone() {
    let temp_dir = site("link: '/02-about'", &["1-about.md"]);

    routefix(&temp_dir)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("No files need renaming."));

    temp_dir.child("1-about.md").assert(predicate::path::exists());
    temp_dir.child("02-about.md").assert(predicate::path::missing());
}

#[test]
fn test_unknown_config_key_fails() {
    let temp_dir = site("link: '/guide/02-setup'", &["guide/2-setup.md"]);
    temp_dir
        .child(".routefix/config.toml")
        .write_str("[walk]\nmarkdown_extension = \".markdown\"\n")
        .unwrap();

    routefix(&temp_dir)
        .arg("plan")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("markdown_extension"));
}

#[test]
fn test_sync_dry_run() {
    let temp_dir = site("link: '/guide/02-setup'", &["guide/2-setup.md"]);

    routefix(&temp_dir)
        .args(["sync", "--dry-run", "--preview", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("guide/02-setup.md"))
        .stdout(predicate::str::contains("Dry run: 1 renames not applied"));

    temp_dir.child("guide/2-setup.md").assert(predicate::path::exists());
}

#[test]
fn test_missing_site_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("guide/2-setup.md").write_str("").unwrap();

    routefix(&temp_dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read site config"));
}

#[test]
fn test_config_flag_overrides_site_config() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child("site.mjs")
        .write_str("link: '/guide/02-setup'")
        .unwrap();
    temp_dir.child("guide/2-setup.md").write_str("").unwrap();

    routefix(&temp_dir)
        .args(["plan", "--config", "site.mjs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renames: 1"));
}

#[test]
fn test_directory_flag() {
    let temp_dir = site("link: '/guide/02-setup'", &["guide/2-setup.md"]);

    let mut cmd = Command::cargo_bin("routefix").unwrap();
    cmd.arg("-C")
        .arg(temp_dir.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Rename guide/2-setup.md -> guide/02-setup.md",
        ));
}

#[test]
fn test_plan_json_output() {
    let temp_dir = site(
        "link: '/guide/02-setup' link: '/guide/'",
        &["guide/2-setup.md"],
    );

    let output = routefix(&temp_dir)
        .args(["plan", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "plan");
    assert_eq!(json["summary"]["routes"], 1);
    assert_eq!(json["changes"][0]["destination"], "guide/02-setup.md");
}

#[test]
fn test_routes_command() {
    let temp_dir = site(
        "link: '/guide/02-setup' link: '#' link: '/guide/' link: '/about'",
        &[],
    );

    routefix(&temp_dir)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 routes in"))
        .stdout(predicate::str::contains("  about.md"))
        .stdout(predicate::str::contains("  guide/02-setup.md"));
}

#[test]
fn test_project_config_file_is_used() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child(".routefix/config.toml")
        .write_str("site_config = \"docs/site.mjs\"\n\n[walk]\nexclude = [\"drafts\"]\n")
        .unwrap();
    temp_dir
        .child("docs/site.mjs")
        .write_str("link: '/drafts/02-a' link: '/guide/02-b'")
        .unwrap();
    temp_dir.child("drafts/1-a.md").write_str("").unwrap();
    temp_dir.child("guide/1-b.md").write_str("").unwrap();

    routefix(&temp_dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Renames: 1"))
        .stdout(predicate::str::contains("guide/1-b.md -> guide/02-b.md"));
}
