pub(super) fn default_name() -> String {
    "immogram".into()
}

pub(super) fn default_log_level() -> String {
    "info".into()
}

pub(super) fn default_locale() -> String {
    "en".into()
}

pub(super) fn default_locales() -> Vec<String> {
    vec!["en".into(), "de".into()]
}
