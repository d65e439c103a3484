//! Builds driven through a stand-in editor script.

#![cfg(unix)]

use predicates::prelude::*;
use serial_test::serial;

use super::common::TestProject;

/// Records its arguments one per line next to itself, then prints progress.
const RECORDING_EDITOR: &str = r#"
for a in "$@"; do printf '%s\n' "$a"; done > "$(dirname "$0")/args.txt"
echo "Compiling scripts"
echo "Build succeeded"
"#;

#[test]
#[serial]
fn successful_build_reports_output_path() {
  let project = TestProject::with_version("1.2.3\n");
  let editor = project.stub_editor(RECORDING_EDITOR);

  project
    .toybuild_cmd(&["--target", "Linux64", "--scripting-backend", "mono", "--build-number", "7"])
    .arg("--unity-path")
    .arg(&editor)
    .assert()
    .code(0)
    .stdout(predicate::str::contains("Compiling scripts"))
    .stdout(predicate::str::contains("Build completed successfully"))
    .stdout(predicate::str::contains("Builds/linux/ToySoldiers.x86_64"));
}

#[test]
#[serial]
fn editor_receives_arguments_in_order() {
  let project = TestProject::with_version("1.2.3\n");
  let editor = project.stub_editor(RECORDING_EDITOR);
  let output = project.path().join("dist").join("game.x86_64");

  project
    .toybuild_cmd(&["--target", "Linux64", "--scripting-backend", "mono", "--build-number", "7"])
    .arg("--unity-path")
    .arg(&editor)
    .arg("--output")
    .arg(&output)
    .assert()
    .success();

  let recorded = std::fs::read_to_string(project.path().join("args.txt")).unwrap();
  let root = project.root();
  let expected = vec![
    "-quit",
    "-batchmode",
    "-nographics",
    "-disableassemblyupdater",
    "-accept-apiupdate",
    "-disableburst-compilation",
    "-projectPath",
    root.to_str().unwrap(),
    "-executeMethod",
    "RIGPR.Editor.BuildManager.BuildProject",
    "-buildVersion",
    "1.2.3.build-7",
    "-buildTarget",
    "Linux64",
    "-outputPath",
    output.to_str().unwrap(),
    "-scriptingBackend",
    "mono",
  ];
  assert_eq!(recorded.lines().collect::<Vec<_>>(), expected);
}

#[test]
#[serial]
fn failed_build_propagates_exit_code() {
  let project = TestProject::with_version("1.0.0");
  let editor = project.stub_editor("echo 'Error building Player' >&2\nexit 137");

  project
    .toybuild_cmd(&["--target", "Win64", "--scripting-backend", "il2cpp"])
    .arg("--unity-path")
    .arg(&editor)
    .assert()
    .code(137)
    .stdout(predicate::str::contains("Error building Player"))
    .stderr(predicate::str::contains("Build failed with exit code 137"));
}

#[test]
#[serial]
fn unlaunchable_editor_fails() {
  let project = TestProject::with_version("1.0.0");

  project
    .toybuild_cmd(&["--target", "Win64", "--scripting-backend", "il2cpp"])
    .arg("--unity-path")
    .arg(project.path().join("missing-editor"))
    .assert()
    .code(1)
    .stderr(predicate::str::contains("failed to launch"));
}

#[test]
#[serial]
fn interrupted_build_exits_130() {
  let project = TestProject::with_version("1.0.0");
  let editor = project.stub_editor("echo 'Importing assets'\nsleep 1\nkill -INT $PPID\nexec sleep 30");

  project
    .toybuild_cmd(&["--target", "Linux64", "--scripting-backend", "mono"])
    .arg("--unity-path")
    .arg(&editor)
    .timeout(std::time::Duration::from_secs(20))
    .assert()
    .code(130)
    .stdout(predicate::str::contains("Importing assets"))
    .stderr(predicate::str::contains("Build interrupted"));
}
