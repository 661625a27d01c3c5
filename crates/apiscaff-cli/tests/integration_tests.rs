//! Integration tests for the apiscaff binary.

mod common;

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use common::{apiscaff, initialised_workspace, read_json};

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    apiscaff(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("postbuild"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    apiscaff(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_init_seeds_workspace() {
    let temp = TempDir::new().unwrap();
    apiscaff(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("apiscaff.toml"));

    for file in ["config.json", "main", "tspconfig-json", "tspconfig-yaml"] {
        assert!(temp.path().join("tools/api-archetype").join(file).is_file(), "{file}");
    }
    assert!(temp.path().join("apiscaff.toml").is_file());
    assert!(temp.path().join("package.json").is_file());
}

#[test]
fn test_init_keeps_edited_archetype() {
    let temp = initialised_workspace();
    let main = temp.path().join("tools/api-archetype/main");
    fs::write(&main, "custom").unwrap();

    apiscaff(temp.path()).arg("init").assert().success();
    assert_eq!(fs::read_to_string(&main).unwrap(), "custom");

    apiscaff(temp.path()).args(["init", "--force"]).assert().success();
    assert_ne!(fs::read_to_string(&main).unwrap(), "custom");
}

#[test]
fn test_new_project_success() {
    let temp = initialised_workspace();

    apiscaff(temp.path())
        .args(["new", "hello-world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating new API project hello-world..."))
        .stdout(predicate::str::contains(
            "Successfully created new API project hello-world",
        ));

    let project = temp.path().join("projects/hello-world");
    let main = fs::read_to_string(project.join("main.tsp")).unwrap();
    assert!(main.contains("Hello World"));
    assert!(main.contains("namespace HelloWorld;"));

    let manifest = read_json(&project.join("config.json"));
    assert_eq!(manifest["filename"], "api-hello-world");

    assert!(project.join("tspconfig-json.yaml").is_file());
    assert!(project.join("tspconfig-yaml.yaml").is_file());

    let package = read_json(&temp.path().join("package.json"));
    assert_eq!(package["scripts"]["build:all"], "compile:hello-world");
    assert_eq!(
        package["scripts"]["postcompile:hello-world"],
        "apiscaff postbuild hello-world"
    );
}

#[test]
fn test_no_color_env_accepts_common_values() {
    let temp = initialised_workspace();
    for (project, value) in [("orders", "1"), ("pets", "true"), ("users", "")] {
        apiscaff(temp.path())
            .env("NO_COLOR", value)
            .args(["new", project])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "Successfully created new API project {project}"
            )));
    }
}

#[test]
fn test_no_color_flag() {
    let temp = initialised_workspace();
    apiscaff(temp.path())
        .env_remove("NO_COLOR")
        .args(["--no-color", "new", "orders"])
        .assert()
        .success();
}

#[test]
fn test_new_with_root_flag() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("apis");
    apiscaff(temp.path())
        .args(["init", "--root"])
        .arg(&root)
        .assert()
        .success();

    apiscaff(temp.path())
        .args(["new", "orders", "--root"])
        .arg(&root)
        .assert()
        .success();

    assert!(root.join("projects/orders/main.tsp").is_file());
    assert!(!temp.path().join("projects").exists());
}

#[test]
fn test_two_projects_chain_build_all() {
    let temp = initialised_workspace();
    apiscaff(temp.path()).args(["new", "orders"]).assert().success();
    apiscaff(temp.path()).args(["new", "pets"]).assert().success();

    let package = read_json(&temp.path().join("package.json"));
    assert_eq!(package["scripts"]["build:all"], "compile:orders compile:pets");
}

#[test]
fn test_postbuild_publishes_versioned_files() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("projects/orders");
    let doc = temp.path().join("doc/api-orders");
    fs::create_dir_all(&project).unwrap();
    fs::create_dir_all(&doc).unwrap();
    fs::write(
        project.join("config.json"),
        r#"{"filename":"api-orders","version":"2.0.0"}"#,
    )
    .unwrap();
    fs::write(doc.join("api-orders-x.y.z.json"), "content").unwrap();
    fs::write(doc.join("api-orders-x.y.z.yaml"), "openapi: 3.0.0").unwrap();

    apiscaff(temp.path())
        .args(["postbuild", "orders"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generating API documentation 2.0.0 for project orders...",
        ))
        .stdout(predicate::str::contains(
            "API documentation for orders generated successfully",
        ));

    let dist = temp.path().join("dist/api-orders");
    assert_eq!(
        fs::read_to_string(dist.join("api-orders-2.0.0.json")).unwrap(),
        "content"
    );
    assert!(dist.join("api-orders-2.0.0.yaml").is_file());
}

#[test]
fn test_config_get_reads_local_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("apiscaff.toml"),
        "[converter]\nprogram = \"my-converter\"\n",
    )
    .unwrap();

    apiscaff(temp.path())
        .args(["config", "get", "converter.program"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-converter"));

    apiscaff(temp.path())
        .args(["config", "get", "workspace.projects_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("projects"));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    apiscaff(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apiscaff"));
}

#[cfg(unix)]
mod import {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Fake converter: copies the input document to `<output-dir>/main.tsp`.
    fn fake_converter(dir: &Path) -> PathBuf {
        let script = dir.join("fake-tsp-openapi3");
        fs::write(
            &script,
            "#!/bin/sh\n[ \"$2\" = \"--output-dir\" ] || exit 3\ncp \"$1\" \"$3/main.tsp\"\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    fn write_converter_config(dir: &Path, program: &Path) -> PathBuf {
        let config = dir.join("test-config.toml");
        fs::write(
            &config,
            format!("[converter]\nprogram = \"{}\"\n", program.display()),
        )
        .unwrap();
        config
    }

    #[test]
    fn test_import_promotes_converted_main() {
        let temp = initialised_workspace();
        let converter = fake_converter(temp.path());
        let config = write_converter_config(temp.path(), &converter);
        fs::write(temp.path().join("pets.yaml"), "namespace Pets;\n").unwrap();

        apiscaff(temp.path())
            .arg("--config")
            .arg(&config)
            .args(["import", "pets", "pets.yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Importing API from pets.yaml to pets..."))
            .stdout(predicate::str::contains(
                "Successfully created new API project pets from pets.yaml",
            ));

        let project = temp.path().join("projects/pets");
        assert_eq!(
            fs::read_to_string(project.join("main.tsp")).unwrap(),
            "namespace Pets;\n"
        );
        assert!(project.join("config.json").is_file());
        assert!(!temp.path().join("tmp/pets").exists());
    }

    #[test]
    fn test_import_through_launcher_args() {
        let temp = initialised_workspace();
        let converter = fake_converter(temp.path());
        let config = temp.path().join("launcher-config.toml");
        fs::write(
            &config,
            format!(
                "[converter]\nprogram = \"sh\"\nargs = [\"{}\"]\n",
                converter.display()
            ),
        )
        .unwrap();
        fs::write(temp.path().join("pets.yaml"), "namespace Pets;\n").unwrap();

        apiscaff(temp.path())
            .arg("--config")
            .arg(&config)
            .args(["import", "pets", "pets.yaml"])
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(temp.path().join("projects/pets/main.tsp")).unwrap(),
            "namespace Pets;\n"
        );
    }

    #[test]
    fn test_failed_conversion_cleans_staging() {
        let temp = initialised_workspace();
        let config = write_converter_config(temp.path(), Path::new("false"));
        fs::write(temp.path().join("pets.yaml"), "openapi: 3.0.0\n").unwrap();

        apiscaff(temp.path())
            .arg("--config")
            .arg(&config)
            .args(["import", "pets", "pets.yaml"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to create API project pets"))
            .stderr(predicate::str::contains("External command 'false' failed"));

        assert!(!temp.path().join("tmp/pets").exists());
        assert!(!temp.path().join("projects/pets").exists());
    }
}
