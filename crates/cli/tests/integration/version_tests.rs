use predicates::prelude::*;

use super::common::TestProject;

#[test]
fn show_prints_current_version() {
  let project = TestProject::with_version("1.4.2-hotfix.3\n");

  project
    .toybuild_cmd(&["version", "show"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Current version: 1.4.2-hotfix.3"));
}

#[test]
fn show_json_includes_parts() {
  let project = TestProject::with_version("2.0.1");

  project
    .toybuild_cmd(&["version", "show", "--json"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"version\": \"2.0.1\""))
    .stdout(predicate::str::contains("\"patch\": 1"));
}

#[test]
fn bump_minor_rewrites_version_file() {
  let project = TestProject::with_version("1.4.2-hotfix.3\n");

  project
    .toybuild_cmd(&["version", "bump", "minor"])
    .assert()
    .success()
    .stdout(predicate::str::contains("1.5.0"));

  assert_eq!(project.version_file(), "1.5.0\n");
}

#[test]
fn bump_hotfix_then_clear() {
  let project = TestProject::with_version("0.3.0");

  project.toybuild_cmd(&["version", "bump", "hotfix"]).assert().success();
  assert_eq!(project.version_file(), "0.3.0-hotfix.1\n");

  project.toybuild_cmd(&["version", "clear-hotfix"]).assert().success();
  assert_eq!(project.version_file(), "0.3.0\n");
}

#[test]
fn invalid_version_is_reported_and_kept() {
  let project = TestProject::with_version("release-candidate");

  project
    .toybuild_cmd(&["version", "bump", "patch"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid versioning format"));

  assert_eq!(project.version_file(), "release-candidate");
}

#[test]
fn build_flags_are_not_required_for_subcommands() {
  let project = TestProject::with_version("1.0.0");

  project.toybuild_cmd(&["version", "show"]).assert().success();
}

#[test]
fn build_flags_conflict_with_subcommands() {
  let project = TestProject::with_version("1.0.0\n");

  project
    .toybuild_cmd(&[
      "--target",
      "Win64",
      "--scripting-backend",
      "mono",
      "--build-number",
      "9",
      "version",
      "bump",
      "major",
    ])
    .assert()
    .code(2);

  assert_eq!(project.version_file(), "1.0.0\n");
}

#[test]
fn dry_run_conflicts_with_subcommands() {
  let project = TestProject::with_version("1.0.0");

  project.toybuild_cmd(&["--dry-run", "version", "show"]).assert().code(2);
}

#[test]
fn global_options_follow_subcommand() {
  let project = TestProject::with_version("4.5.6");

  project
    .toybuild_cmd(&["version", "show", "-v", "--unity-path", "/opt/Unity"])
    .assert()
    .success()
    .stdout(predicate::str::contains("4.5.6"));
}
