use super::*;

fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<&'a str> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = AppConfig::from_lookup(|_| None);
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert!(cfg.asset_host.is_none());
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn from_lookup_trims_trailing_slash_from_base_url() {
    let pairs = [(API_BASE_URL_VAR, "https://news.example.test/")];
    let cfg = AppConfig::from_lookup(lookup_from(&pairs));
    assert_eq!(cfg.api_base_url, "https://news.example.test");
}

#[test]
fn from_lookup_blank_base_url_falls_back_to_default() {
    let pairs = [(API_BASE_URL_VAR, "   ")];
    let cfg = AppConfig::from_lookup(lookup_from(&pairs));
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_lookup_requires_both_asset_credentials() {
    let only_name = [(ASSET_CLOUD_NAME_VAR, "demo-cloud")];
    assert!(AppConfig::from_lookup(lookup_from(&only_name)).asset_host.is_none());

    let both = [(ASSET_CLOUD_NAME_VAR, "demo-cloud"), (ASSET_UPLOAD_PRESET_VAR, "news-app")];
    let cfg = AppConfig::from_lookup(lookup_from(&both));
    assert_eq!(
        cfg.asset_host,
        Some(AssetHostConfig { cloud_name: "demo-cloud".to_owned(), upload_preset: "news-app".to_owned() })
    );
}

#[test]
fn from_lookup_parses_log_level_case_insensitively() {
    let pairs = [(LOG_LEVEL_VAR, "DEBUG")];
    assert_eq!(AppConfig::from_lookup(lookup_from(&pairs)).log_level, log::Level::Debug);
}

#[test]
fn from_lookup_unknown_log_level_uses_default() {
    let pairs = [(LOG_LEVEL_VAR, "chatty")];
    assert_eq!(AppConfig::from_lookup(lookup_from(&pairs)).log_level, DEFAULT_LOG_LEVEL);
}
