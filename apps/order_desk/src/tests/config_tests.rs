use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_path(name: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let root = env::temp_dir().join(format!("order_desk_config_test_{name}_{suffix}"));
    fs::create_dir_all(&root).expect("temp root");
    root.join(SETTINGS_FILE)
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_file_yields_defaults() {
    let path = temp_settings_path("missing");

    let settings = load_settings_with_env(&path, no_env).expect("settings");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.api_base_url, "http://localhost:8000/api/v1");
    assert_eq!(settings.success_display(), Duration::from_millis(3000));
    assert_eq!(settings.request_timeout(), Some(Duration::from_secs(10)));

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn file_values_fill_in_over_defaults() {
    let path = temp_settings_path("file");
    fs::write(
        &path,
        "api_base_url = \"http://wms.internal:9000/api/v1\"\nrequest_timeout_secs = 0\n",
    )
    .expect("write settings");

    let settings = load_settings_with_env(&path, no_env).expect("settings");

    assert_eq!(settings.api_base_url, "http://wms.internal:9000/api/v1");
    assert_eq!(settings.request_timeout(), None);
    assert_eq!(settings.log_filter, "info");

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn environment_overrides_the_file() {
    let path = temp_settings_path("env");
    fs::write(&path, "api_base_url = \"http://from-file/api/v1\"\n").expect("write settings");
    let vars: HashMap<&str, &str> = HashMap::from([
        ("ORDER_DESK_API_BASE_URL", "http://legacy/api/v1"),
        ("APP__API_BASE_URL", "http://from-env/api/v1"),
        ("APP__SUCCESS_DISPLAY_MS", " 1500 "),
        ("APP__LOG_FILTER", "client_core=debug"),
    ]);

    let settings = load_settings_with_env(&path, |key| vars.get(key).map(|v| v.to_string()))
        .expect("settings");

    assert_eq!(settings.api_base_url, "http://from-env/api/v1");
    assert_eq!(settings.success_display_ms, 1500);
    assert_eq!(settings.log_filter, "client_core=debug");

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn malformed_values_are_reported() {
    let path = temp_settings_path("bad");
    fs::write(&path, "request_timeout_secs = \"soon\"\n").expect("write settings");
    let err = load_settings_with_env(&path, no_env).expect_err("must fail");
    assert!(err.to_string().contains("failed to parse settings file"));

    fs::remove_file(&path).expect("remove file");
    let err = load_settings_with_env(&path, |key| {
        (key == "APP__REQUEST_TIMEOUT_SECS").then(|| "soon".to_string())
    })
    .expect_err("must fail");
    assert!(err.to_string().contains("APP__REQUEST_TIMEOUT_SECS"));

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}
