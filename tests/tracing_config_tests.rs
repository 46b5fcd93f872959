use super::tracing_config::*;

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::parse(" Tree "), LogFormat::Tree);
    assert_eq!(LogFormat::parse("text"), LogFormat::Text);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
}

#[test]
fn test_default_format_is_text() {
    assert_eq!(LogFormat::default(), LogFormat::Text);
}

#[test]
fn test_env_names() {
    assert_eq!(LOG_ENV, "TYPEIS_LOG");
    assert_eq!(LOG_FORMAT_ENV, "TYPEIS_LOG_FORMAT");
}

#[test]
fn test_init_tracing_without_filter_env_installs_nothing() {
    if std::env::var_os(LOG_ENV).is_some() || std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    assert!(!init_tracing());
    // Still nothing to install on a second call.
    assert!(!init_tracing());
}
