use super::*;

#[test]
fn test_messages_config_default() {
    let cfg = MessagesConfig::default();
    assert_eq!(cfg.default_locale, "en");
    assert_eq!(cfg.locales, vec!["en", "de"]);
    assert!(cfg.catalog_dir.is_none());
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
        [immogram]
        log_level = "debug"

        [messages]
        default_locale = "de"
        locales = ["de"]
        catalog_dir = "/srv/immogram/locales"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.immogram.name, "immogram");
    assert_eq!(cfg.immogram.log_level, "debug");
    assert_eq!(cfg.messages.default_locale, "de");
    assert_eq!(cfg.messages.locales, vec!["de"]);
    assert_eq!(
        cfg.messages.catalog_dir().as_deref(),
        Some("/srv/immogram/locales")
    );
}

#[test]
fn test_empty_toml_uses_defaults() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.immogram.log_level, "info");
    assert_eq!(cfg.messages.default_locale, "en");
}

#[test]
fn test_default_locale_must_be_loaded() {
    let cfg = MessagesConfig {
        default_locale: "fr".into(),
        ..Default::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("'fr'"), "got: {err}");
}

#[test]
fn test_empty_locale_list_rejected() {
    let cfg = MessagesConfig {
        locales: Vec::new(),
        ..Default::default()
    };
    assert!(matches!(cfg.validate(), Err(ImmogramError::Config(_))));
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let cfg = load("/nonexistent/__immogram_test__/config.toml").unwrap();
    assert_eq!(cfg.messages.locales, vec!["en", "de"]);
}

/// Writer that keeps everything the fmt layer emits.
#[derive(Clone, Default)]
struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_missing_file_fallback_is_logged_at_info() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let cfg = tracing::subscriber::with_default(subscriber, || {
        load("/nonexistent/immogram/config.toml")
    })
    .unwrap();
    assert_eq!(cfg.messages.default_locale, "en");

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("INFO"), "{output}");
    assert!(
        output.contains("Config file not found at /nonexistent/immogram/config.toml"),
        "{output}"
    );
}

#[test]
fn test_load_rejects_invalid_toml() {
    let tmp = std::env::temp_dir().join("__immogram_test_bad_config__.toml");
    std::fs::write(&tmp, "[messages\nlocales = ").unwrap();
    let result = load(tmp.to_str().unwrap());
    assert!(matches!(result, Err(ImmogramError::Config(_))));
    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_shellexpand_home() {
    if let Some(home) = std::env::var_os("HOME") {
        let expanded = shellexpand("~/locales");
        assert_eq!(expanded, format!("{}/locales", home.to_string_lossy()));
    }
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
}
