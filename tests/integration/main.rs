//! Integration tests for Chrysanthium

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const QUOTES: &str = r#"{
        "quotes": [
            {"quote": "Fall seven times, stand up eight.", "author": "Proverb", "from": "Japan"},
            {"quote": "Know thyself.", "author": "Socrates", "from": "Delphi"},
            {"quote": "The obstacle is the way.", "author": "Marcus Aurelius", "from": "Meditations"}
        ]
    }"#;

    /// Command isolated to a temp config and state directory
    fn chrysanthium(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("chrysanthium");
        cmd.arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("--state-dir")
            .arg(temp.path().join("state"))
            .env_remove("CI");
        cmd
    }

    fn write_quotes(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("quotes.json");
        fs::write(&path, QUOTES).unwrap();
        path
    }

    fn write_post(dir: &Path, name: &str, content: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        chrysanthium(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("daily quotes"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        chrysanthium(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("chrysanthium"));
    }

    #[test]
    fn quote_is_stable_within_a_day() {
        let temp = TempDir::new().unwrap();
        let source = write_quotes(&temp);

        let first = chrysanthium(&temp)
            .args(["quote", "--json", "--source"])
            .arg(&source)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        // Source gone: the stored record still serves today's quote
        fs::remove_file(&source).unwrap();

        let second = chrysanthium(&temp)
            .args(["quote", "--json", "--source"])
            .arg(&source)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let first: serde_json::Value = serde_json::from_slice(&first).unwrap();
        let second: serde_json::Value = serde_json::from_slice(&second).unwrap();
        assert_eq!(first["quote"], second["quote"]);
        assert_ne!(first["quote"], "");
        assert!(temp.path().join("state").join("senshi.json").exists());
    }

    #[test]
    fn quote_plain_output() {
        let temp = TempDir::new().unwrap();
        let source = write_quotes(&temp);

        chrysanthium(&temp)
            .args(["quote", "--source"])
            .arg(&source)
            .assert()
            .success()
            .stdout(predicate::str::contains("◯").and(predicate::str::contains(" - ")));
    }

    #[test]
    fn quote_without_source_shows_placeholder() {
        let temp = TempDir::new().unwrap();

        let output = chrysanthium(&temp)
            .args(["quote", "--json", "--source"])
            .arg(temp.path().join("missing.json"))
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let page: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(page["quote"], "");
        assert_eq!(page["author"], "");
        assert_eq!(page["from"], "");
        assert!(!temp.path().join("state").join("senshi.json").exists());
    }

    #[test]
    fn cache_show_and_clear() {
        let temp = TempDir::new().unwrap();

        chrysanthium(&temp)
            .args(["cache", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No quote record stored"));

        let source = write_quotes(&temp);
        chrysanthium(&temp)
            .args(["quote", "--source"])
            .arg(&source)
            .assert()
            .success();

        chrysanthium(&temp)
            .args(["cache", "show", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("randomQuote"));

        chrysanthium(&temp)
            .args(["cache", "clear", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Quote record cleared"));

        assert!(!temp.path().join("state").join("senshi.json").exists());
    }

    #[test]
    fn authored_uses_front_matter_date_without_history() {
        let temp = TempDir::new().unwrap();
        let post = write_post(
            &temp.path().join("posts"),
            "hello.md",
            "---\ntitle: Hello\ndate: 2021-03-05\n---\nbody\n",
        );

        chrysanthium(&temp)
            .args(["authored", "--format", "plain"])
            .arg(&post)
            .assert()
            .success()
            .stdout(predicate::str::contains("05/03/2021"));
    }

    #[test]
    fn authored_fallback_flag() {
        let temp = TempDir::new().unwrap();
        let post = write_post(&temp.path().join("posts"), "bare.md", "no front matter\n");

        chrysanthium(&temp)
            .args(["authored", "--fallback", "2019-12-01", "--format", "json"])
            .arg(&post)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"authorDate\": \"01/12/2019\""));
    }

    #[test]
    fn authored_rejects_bad_fallback() {
        let temp = TempDir::new().unwrap();
        let post = write_post(&temp.path().join("posts"), "bare.md", "text\n");

        chrysanthium(&temp)
            .args(["authored", "--fallback", "someday"])
            .arg(&post)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"));
    }

    #[test]
    fn build_emits_render_contexts() {
        let temp = TempDir::new().unwrap();
        let posts = temp.path().join("posts");
        write_post(
            &posts,
            "lifetimes.md",
            "---\ntitle: Lifetimes\npath: /rust/lifetimes\ndate: 2021-03-05\n---\n",
        );
        write_post(
            &posts,
            "traits.md",
            "---\ntitle: Traits\ndate: 2022-11-30\n---\n",
        );

        chrysanthium(&temp)
            .args(["build", "--format", "json", "--content"])
            .arg(&posts)
            .assert()
            .success()
            .stdout(
                predicate::str::contains("/rust/lifetimes")
                    .and(predicate::str::contains("05/03/2021"))
                    .and(predicate::str::contains("/traits"))
                    .and(predicate::str::contains("30/11/2022")),
            );
    }

    #[test]
    fn build_missing_content_dir() {
        let temp = TempDir::new().unwrap();

        chrysanthium(&temp)
            .args(["build", "--content"])
            .arg(temp.path().join("nope"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Content directory not found"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        chrysanthium(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        chrysanthium(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[quotes]"));
    }

    #[test]
    fn config_set_then_show() {
        let temp = TempDir::new().unwrap();
        chrysanthium(&temp)
            .args(["config", "set", "quotes.slot", "daily"])
            .assert()
            .success();

        chrysanthium(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("slot = \"daily\""));
    }

    #[test]
    fn config_set_rejects_slot_path() {
        let temp = TempDir::new().unwrap();
        chrysanthium(&temp)
            .args(["config", "set", "quotes.slot", "../escape"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid slot name"));

        assert!(!temp.path().join("config.toml").exists());
    }
}
