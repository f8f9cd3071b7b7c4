// End-to-end tests for the hardening pipeline
use ffhrd::{
    harden, list_profiles, render_user_js, Error, HardenConfig, WriteOutcome, HARDENING_PREFS,
    USER_JS, USER_TEMP_JS,
};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    _temp: TempDir,
    config: HardenConfig,
}

impl Fixture {
    /// Profiles directory containing `profiles`, each with a prefs.js
    fn new(profiles: &[&str]) -> Self {
        let temp = TempDir::new().unwrap();
        let profiles_dir = temp.path().join("firefox");
        fs::create_dir_all(profiles_dir.join("Crash Reports")).unwrap();
        fs::write(profiles_dir.join("profiles.ini"), "[General]\nVersion=2\n").unwrap();
        for name in profiles {
            let dir = profiles_dir.join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("prefs.js"), format!("// {name}\n")).unwrap();
        }

        let config = HardenConfig {
            profiles_dir,
            backup_root: temp.path().join("backups"),
        };
        Self {
            _temp: temp,
            config,
        }
    }

    fn profile(&self, name: &str) -> PathBuf {
        self.config.profiles_dir.join(name)
    }

    fn run(&self, input: &str) -> (ffhrd::Result<ffhrd::HardenReport>, String) {
        let mut output: Vec<u8> = Vec::new();
        let result = harden(&self.config, &mut Cursor::new(input.to_string()), &mut output);
        (result, String::from_utf8(output).unwrap())
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_single_profile_is_hardened_without_prompt() {
    let fixture = Fixture::new(&["abcd1234.default"]);

    let (result, printed) = fixture.run("");
    let report = result.expect("hardening should succeed");

    let profile = fixture.profile("abcd1234.default");
    assert_eq!(report.profile.path, profile);
    assert_eq!(read(&profile.join(USER_JS)), render_user_js(HARDENING_PREFS));
    match report.outcome {
        WriteOutcome::Written(path) => assert!(path.is_absolute() && path.ends_with(USER_JS)),
        other => panic!("expected Written, got {:?}", other),
    }

    assert_eq!(
        report.backup,
        fixture.config.backup_root.join("abcd1234.default-backup")
    );
    assert_eq!(
        read(&report.backup.join("prefs.js")),
        "// abcd1234.default\n"
    );
    // the backup is taken before user.js is written
    assert!(!report.backup.join(USER_JS).exists());

    assert!(printed.contains("[+] Backup created at"));
    assert!(printed.contains("user.js' created"));
    assert!(!printed.contains("Multiple FireFox profiles found"));
}

#[test]
fn test_multiple_profiles_choose_by_index() {
    let fixture = Fixture::new(&["a.default", "b-profile", "c.default"]);

    let (result, printed) = fixture.run("1\n");
    let report = result.unwrap();

    assert_eq!(report.profile.path, fixture.profile("b-profile"));
    assert!(fixture.profile("b-profile").join(USER_JS).exists());
    assert!(!fixture.profile("a.default").join(USER_JS).exists());
    assert!(!fixture.profile("c.default").join(USER_JS).exists());
    assert!(printed.contains("Choose a profile to harden: (0..2)"));
}

#[test]
fn test_invalid_selection_changes_nothing() {
    let fixture = Fixture::new(&["a.default", "b.default"]);

    for input in ["abc\n", "2\n"] {
        let (result, _) = fixture.run(input);
        assert!(matches!(result, Err(Error::InvalidSelection { .. })));
    }

    assert!(!fixture.config.backup_root.exists());
    assert!(!fixture.profile("a.default").join(USER_JS).exists());
    assert!(!fixture.profile("b.default").join(USER_JS).exists());
}

#[test]
fn test_existing_user_js_temp_choice() {
    let fixture = Fixture::new(&["x.default"]);
    let profile = fixture.profile("x.default");
    fs::write(profile.join(USER_JS), "user_pref(\"mine\", 1);\n").unwrap();

    let (result, printed) = fixture.run("temp\n");
    let report = result.unwrap();

    assert_eq!(read(&profile.join(USER_JS)), "user_pref(\"mine\", 1);\n");
    assert_eq!(
        read(&profile.join(USER_TEMP_JS)),
        render_user_js(HARDENING_PREFS)
    );
    assert!(matches!(report.outcome, WriteOutcome::Written(ref p) if p.ends_with(USER_TEMP_JS)));
    // the pre-existing user.js is part of the backup
    assert_eq!(
        read(&report.backup.join(USER_JS)),
        "user_pref(\"mine\", 1);\n"
    );
    assert!(printed.contains("Found an already existing 'user.js'"));
}

#[test]
fn test_existing_user_js_cancel_is_not_an_error() {
    let fixture = Fixture::new(&["x.default"]);
    let profile = fixture.profile("x.default");
    fs::write(profile.join(USER_JS), "keep").unwrap();

    let (result, printed) = fixture.run("nope\n");
    let report = result.expect("cancelling is not a failure");

    assert_eq!(report.outcome, WriteOutcome::Cancelled);
    assert_eq!(read(&profile.join(USER_JS)), "keep");
    assert!(!profile.join(USER_TEMP_JS).exists());
    assert!(printed.contains("Wrong choice."));
}

#[test]
fn test_selection_then_overwrite_reads_both_answers() {
    let fixture = Fixture::new(&["a.default", "b.default"]);
    fs::write(fixture.profile("b.default").join(USER_JS), "old").unwrap();

    let (result, _) = fixture.run("1\noverwrite\n");
    result.unwrap();

    assert_eq!(
        read(&fixture.profile("b.default").join(USER_JS)),
        render_user_js(HARDENING_PREFS)
    );
}

#[test]
fn test_rerun_merges_backup() {
    let fixture = Fixture::new(&["x.default"]);

    let (first, _) = fixture.run("");
    first.unwrap();
    let (second, _) = fixture.run("overwrite\n");
    let report = second.unwrap();

    // the second backup now holds the user.js written by the first run
    assert_eq!(
        read(&report.backup.join(USER_JS)),
        render_user_js(HARDENING_PREFS)
    );
}

#[test]
fn test_no_profiles_found() {
    let fixture = Fixture::new(&[]);

    let (result, _) = fixture.run("");
    match result {
        Err(Error::NoProfilesFound(dir)) => assert_eq!(dir, fixture.config.profiles_dir),
        other => panic!("expected NoProfilesFound, got {:?}", other),
    }
}

#[test]
fn test_list_profiles_json() {
    let fixture = Fixture::new(&["b.default", "a-profile"]);
    let mut output: Vec<u8> = Vec::new();

    list_profiles(&fixture.config, &mut output).unwrap();

    let listed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let paths: Vec<PathBuf> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| PathBuf::from(p["path"].as_str().unwrap()))
        .collect();
    assert_eq!(
        paths,
        vec![fixture.profile("a-profile"), fixture.profile("b.default")]
    );
}
