//! Integration tests for the genfilt CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENGLISH: &str = "She is a doctor.\nHe is a doctor.\nThe doctor arrived.\n";

const GERMAN_DICTIONARY: &str = "\
Ärztin NN,fem,nom,sg
Arzt NN,masc,nom,sg
";

fn genfilt() -> Command {
    let mut cmd = Command::cargo_bin("genfilt").unwrap();
    cmd.env_remove("GENFILT_DE_DICT");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

fn german_corpus(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let source = write(dir, "train.en", "The doctor came.\nThe doctor came.\n");
    let target = write(dir, "train.de", "Die Ärztin kam.\nDer Arzt kam.\n");
    let dictionary = write(dir, "DE_morph_dict.txt", GERMAN_DICTIONARY);
    (source, target, dictionary)
}

#[test]
fn test_source_default_outputs() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "news.en", ENGLISH);

    genfilt()
        .arg("source")
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Read 3 lines from"))
        .stderr(predicate::str::contains("Wrote 1 feminine lines"));

    assert_eq!(read(&dir.path().join("news.en.fem")), "She is a doctor.\n");
    assert_eq!(read(&dir.path().join("news.en.msc")), "He is a doctor.\n");
}

#[test]
fn test_source_explicit_outputs() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "news.en", ENGLISH);
    let fem = dir.path().join("her.txt");
    let msc = dir.path().join("him.txt");

    genfilt()
        .args(["source", "-q", "-i"])
        .arg(&input)
        .arg("-f")
        .arg(&fem)
        .arg("-m")
        .arg(&msc)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(read(&fem), "She is a doctor.\n");
    assert_eq!(read(&msc), "He is a doctor.\n");
}

#[test]
fn test_source_glob_pattern() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.en", "She smiled.\n");
    write(&dir, "b.en", "He smiled.\n");

    genfilt()
        .args(["source", "-i"])
        .arg(dir.path().join("*.en"))
        .assert()
        .success();

    assert_eq!(read(&dir.path().join("a.en.fem")), "She smiled.\n");
    assert_eq!(read(&dir.path().join("b.en.msc")), "He smiled.\n");
    assert_eq!(read(&dir.path().join("b.en.fem")), "");
}

#[test]
fn test_source_explicit_outputs_need_single_input() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.en", "She smiled.\n");
    write(&dir, "b.en", "He smiled.\n");

    genfilt()
        .args(["source", "-i"])
        .arg(dir.path().join("*.en"))
        .arg("-f")
        .arg(dir.path().join("out.fem"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("single input file"));
}

#[test]
fn test_source_missing_input() {
    let dir = TempDir::new().unwrap();
    genfilt()
        .args(["source", "-i"])
        .arg(dir.path().join("missing.en"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_source_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "news.en", "She left.\r\n  he stayed  \nMrs. Smith and her son.\n");
    let fem = dir.path().join("news.en.fem");

    genfilt().args(["source", "-i"]).arg(&input).assert().success();
    let first = fs::read(&fem).unwrap();
    genfilt().args(["source", "-i"]).arg(&input).assert().success();

    assert_eq!(fs::read(&fem).unwrap(), first);
    assert_eq!(first, b"She left.\r\n");
}

#[test]
fn test_target_german() {
    let dir = TempDir::new().unwrap();
    let (source, target, dictionary) = german_corpus(&dir);

    genfilt()
        .args(["target", "-l", "de", "-g", "fem", "-s"])
        .arg(&source)
        .arg("-t")
        .arg(&target)
        .arg("--dictionary")
        .arg(&dictionary)
        .assert()
        .success()
        .stderr(predicate::str::contains("Read 2 lines"))
        .stderr(predicate::str::contains("Wrote 1 fem lines"));

    assert_eq!(
        read(&dir.path().join("train.en.target_filtered")),
        "The doctor came.\n"
    );
    assert_eq!(
        read(&dir.path().join("train.de.target_filtered")),
        "Die Ärztin kam.\n"
    );
}

#[test]
fn test_target_dictionary_from_env() {
    let dir = TempDir::new().unwrap();
    let (source, target, dictionary) = german_corpus(&dir);
    let trg_out = dir.path().join("out.de");

    genfilt()
        .env("GENFILT_DE_DICT", &dictionary)
        .args(["target", "-l", "de", "-g", "msc", "-s"])
        .arg(&source)
        .arg("-t")
        .arg(&target)
        .arg("--target-output")
        .arg(&trg_out)
        .assert()
        .success();

    assert_eq!(read(&trg_out), "Der Arzt kam.\n");
}

#[test]
fn test_target_dictionary_from_config() {
    let dir = TempDir::new().unwrap();
    let (source, target, dictionary) = german_corpus(&dir);
    let config = write(
        &dir,
        "genfilt.toml",
        &format!(
            "[target]\ngerman_dictionary = {:?}\n",
            dictionary.to_str().unwrap()
        ),
    );

    genfilt()
        .arg("target")
        .arg("-c")
        .arg(&config)
        .args(["-l", "de", "-g", "fem", "-s"])
        .arg(&source)
        .arg("-t")
        .arg(&target)
        .assert()
        .success();

    assert_eq!(
        read(&dir.path().join("train.de.target_filtered")),
        "Die Ärztin kam.\n"
    );
}

#[test]
fn test_target_missing_dictionary() {
    let dir = TempDir::new().unwrap();
    let (source, target, _) = german_corpus(&dir);

    genfilt()
        .args(["target", "-l", "de", "-g", "fem", "-s"])
        .arg(&source)
        .arg("-t")
        .arg(&target)
        .arg("--dictionary")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("dictionary not found"));

    assert!(!dir.path().join("train.de.target_filtered").exists());
}

#[test]
fn test_target_unsupported_language() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "train.en", "Hello.\n");
    let target = write(&dir, "train.es", "Hola.\n");

    genfilt()
        .args(["target", "-l", "es", "-g", "fem", "-s"])
        .arg(&source)
        .arg("-t")
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported target language"));

    assert!(!dir.path().join("train.es.target_filtered").exists());
}

#[test]
fn test_target_unsupported_gender() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "train.en", "Hello.\n");
    let target = write(&dir, "train.fr", "Bonjour.\n");

    genfilt()
        .args(["target", "-l", "fr", "-g", "neutral", "-s"])
        .arg(&source)
        .arg("-t")
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported gender"));
}

#[test]
fn test_target_missing_input() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "train.en", "Hello.\n");

    genfilt()
        .args(["target", "-l", "fr", "-g", "fem", "-s"])
        .arg(&source)
        .arg("-t")
        .arg(dir.path().join("train.fr"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_target_misaligned_corpus() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "train.en", "She came.\nShe left.\n");
    let target = write(&dir, "train.fr", "Elle est venue.\n");

    genfilt()
        .args(["target", "-l", "fr", "-g", "fem", "-s"])
        .arg(&source)
        .arg("-t")
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("misaligned"));
}

#[test]
fn test_target_report_json() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "train.en", "She is here.\nHe is here.\n");
    let target = write(&dir, "train.fr", "Elle est là.\nIl est là.\n");
    let report = dir.path().join("report.json");

    genfilt()
        .args(["target", "-q", "-l", "fr", "-g", "msc", "-s"])
        .arg(&source)
        .arg("-t")
        .arg(&target)
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&read(&report)).unwrap();
    assert_eq!(json["command"], "target");
    assert_eq!(json["language"], "fr");
    assert_eq!(json["gender"], "msc");
    assert_eq!(json["stats"]["total"], 2);
    assert_eq!(json["stats"]["kept"], 1);
    assert_eq!(json["stats"]["contradicted"], 1);
}

#[test]
fn test_target_output_cannot_overwrite_input() {
    let dir = TempDir::new().unwrap();
    write(&dir, "train.en", "She is here.\n");
    write(&dir, "train.fr", "Elle est là.\n");

    genfilt()
        .current_dir(dir.path())
        .args(["target", "-l", "fr", "-g", "fem", "-s", "train.en", "-t", "train.fr"])
        .args(["--target-output", "./train.fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output path is also an input"));

    assert_eq!(read(&dir.path().join("train.fr")), "Elle est là.\n");
}

#[test]
fn test_list_languages() {
    genfilt()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("de"))
        .stdout(predicate::str::contains("Hebrew"))
        .stdout(predicate::str::contains("Russian"));
}

#[test]
fn test_validate_profile() {
    let dir = TempDir::new().unwrap();
    let profile = write(
        &dir,
        "ru.toml",
        "[metadata]\ncode = \"ru\"\nname = \"Russian\"\n\n[[rules.suffixes]]\ngender = \"fem\"\nendings = [\"ла\"]\n",
    );

    genfilt()
        .arg("validate")
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile is valid"));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "news.en", ENGLISH);
    let config = write(&dir, "bad.toml", "[source]\nmax_sentence_chars = 0\n");

    genfilt()
        .args(["source", "-c"])
        .arg(&config)
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
