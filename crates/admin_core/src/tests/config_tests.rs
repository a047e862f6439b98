use super::*;

use std::{
    collections::HashMap,
    env,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

fn temp_config(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("admin_panel_config_test_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("admin_panel.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_point_at_the_members_feed() {
    let settings = Settings::default();
    assert_eq!(settings.members_url, DEFAULT_MEMBERS_URL);
    assert_eq!(settings.request_timeout_secs, 30);
    let url = settings.members_url().expect("default url");
    assert_eq!(url.scheme(), "https");
}

#[test]
fn file_values_override_defaults() {
    let path = temp_config(
        r#"
members_url = "http://127.0.0.1:9000/members.json"
request_timeout_secs = 5
"#,
    );

    let mut settings = Settings::default();
    let raw = fs::read_to_string(&path).expect("read");
    apply_file_overrides(&mut settings, &raw).expect("apply");
    assert_eq!(settings.members_url, "http://127.0.0.1:9000/members.json");
    assert_eq!(settings.request_timeout_secs, 5);
    assert_eq!(settings.log_filter, "info");

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn unknown_file_keys_are_rejected() {
    let mut settings = Settings::default();
    let err = apply_file_overrides(&mut settings, "rows_per_page = 25").expect_err("unknown key");
    assert!(err.to_string().contains("rows_per_page"), "{err}");
}

#[test]
fn environment_overrides_file_and_prefixed_names_win() {
    let env_vars: HashMap<&str, &str> = HashMap::from([
        ("MEMBERS_URL", "http://plain.example/members.json"),
        ("APP__MEMBERS_URL", "http://prefixed.example/members.json"),
        ("APP__REQUEST_TIMEOUT_SECS", "not-a-number"),
        ("APP__LOG_FILTER", "admin_core=debug"),
    ]);

    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "request_timeout_secs = 7").expect("apply");
    apply_env_overrides(&mut settings, |name| {
        env_vars.get(name).map(|v| v.to_string())
    });

    assert_eq!(settings.members_url, "http://prefixed.example/members.json");
    assert_eq!(settings.request_timeout_secs, 7);
    assert_eq!(settings.log_filter, "admin_core=debug");
}

#[test]
fn explicit_missing_config_file_is_an_error() {
    let missing = env::temp_dir().join("admin_panel_config_test_missing/none.toml");
    let err = load_settings(Some(&missing)).expect_err("missing explicit file");
    assert!(err.to_string().contains("failed to read config file"), "{err}");
}

#[test]
fn explicit_config_file_is_loaded() {
    let path = temp_config("log_filter = \"warn\"\n");
    let settings = load_settings(Some(&path)).expect("load");
    if env::var("APP__LOG_FILTER").is_err() {
        assert_eq!(settings.log_filter, "warn");
    }
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn members_url_must_be_http() {
    let mut settings = Settings::default();
    settings.members_url = "ftp://example.com/members.json".into();
    assert!(settings.members_url().is_err());

    settings.members_url = "not a url".into();
    assert!(settings.members_url().is_err());

    settings.members_url = " http://localhost:8080/members.json ".into();
    assert_eq!(
        settings.members_url().expect("trimmed").as_str(),
        "http://localhost:8080/members.json"
    );
}

#[test]
fn cli_flag_beats_environment_and_file() {
    let env_vars: HashMap<&str, &str> =
        HashMap::from([("APP__MEMBERS_URL", "http://env.example/members.json")]);

    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "members_url = \"http://file.example/members.json\"")
        .expect("apply");
    apply_env_overrides(&mut settings, |name| {
        env_vars.get(name).map(|v| v.to_string())
    });
    assert_eq!(settings.members_url, "http://env.example/members.json");

    settings.apply_cli_overrides(Some("http://cli.example/members.json".into()));
    assert_eq!(settings.members_url, "http://cli.example/members.json");

    settings.apply_cli_overrides(None);
    assert_eq!(settings.members_url, "http://cli.example/members.json");
}

#[test]
fn zero_request_timeout_is_rejected() {
    let mut settings = Settings::default();
    let err = apply_file_overrides(&mut settings, "request_timeout_secs = 0").expect_err("zero");
    assert!(err.to_string().contains("request_timeout_secs"), "{err}");
    assert_eq!(settings.request_timeout_secs, 30);

    apply_env_overrides(&mut settings, |name| {
        (name == "APP__REQUEST_TIMEOUT_SECS").then(|| "0".to_string())
    });
    assert_eq!(settings.request_timeout_secs, 30);

    settings.request_timeout_secs = 0;
    assert!(settings.request_timeout().is_err());
    settings.request_timeout_secs = 4;
    assert_eq!(
        settings.request_timeout().expect("timeout"),
        Duration::from_secs(4)
    );
}
