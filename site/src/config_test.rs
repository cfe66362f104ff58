use super::*;

// =============================================================
// BackgroundKind
// =============================================================

#[test]
fn background_defaults_to_particles() {
    assert_eq!(BackgroundKind::default(), BackgroundKind::Particles);
}

#[test]
fn background_parses_case_insensitively() {
    assert_eq!("Illustration".parse::<BackgroundKind>(), Ok(BackgroundKind::Illustration));
    assert_eq!(" particles ".parse::<BackgroundKind>(), Ok(BackgroundKind::Particles));
}

#[test]
fn background_round_trips_through_as_str() {
    for kind in [BackgroundKind::Particles, BackgroundKind::Illustration] {
        assert_eq!(kind.as_str().parse::<BackgroundKind>(), Ok(kind));
    }
}

#[test]
fn background_rejects_unknown_value() {
    assert_eq!(
        "video".parse::<BackgroundKind>(),
        Err(ConfigError::UnknownBackground("video".to_owned()))
    );
}

// =============================================================
// from_query
// =============================================================

#[test]
fn empty_query_yields_defaults() {
    assert_eq!(SiteConfig::from_query(""), Ok(SiteConfig::default()));
    assert_eq!(SiteConfig::from_query("?"), Ok(SiteConfig::default()));
}

#[test]
fn defaults_are_particles_unseeded_info() {
    let config = SiteConfig::default();
    assert_eq!(config.background, BackgroundKind::Particles);
    assert_eq!(config.seed, None);
    assert_eq!(config.log_level, LevelFilter::Info);
}

#[test]
fn parses_all_parameters() {
    let config = SiteConfig::from_query("?background=illustration&seed=42&log=debug").unwrap();
    assert_eq!(config.background, BackgroundKind::Illustration);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.log_level, LevelFilter::Debug);
}

#[test]
fn leading_question_mark_is_optional() {
    assert_eq!(
        SiteConfig::from_query("seed=7"),
        SiteConfig::from_query("?seed=7")
    );
}

#[test]
fn unknown_parameters_are_ignored() {
    let config = SiteConfig::from_query("utm_source=newsletter&ref&seed=3").unwrap();
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.background, BackgroundKind::Particles);
}

#[test]
fn later_parameter_wins() {
    let config = SiteConfig::from_query("background=illustration&background=particles").unwrap();
    assert_eq!(config.background, BackgroundKind::Particles);
}

#[test]
fn log_off_disables_logging() {
    let config = SiteConfig::from_query("log=off").unwrap();
    assert_eq!(config.log_level, LevelFilter::Off);
    assert!(config.log_level.to_level().is_none());
}

#[test]
fn bad_seed_is_an_error() {
    assert_eq!(
        SiteConfig::from_query("seed=-1"),
        Err(ConfigError::InvalidSeed("-1".to_owned()))
    );
    assert_eq!(SiteConfig::from_query("seed"), Err(ConfigError::InvalidSeed(String::new())));
}

#[test]
fn bad_log_level_is_an_error() {
    assert_eq!(
        SiteConfig::from_query("log=loud"),
        Err(ConfigError::InvalidLogLevel("loud".to_owned()))
    );
}

// =============================================================
// from_query_lossy
// =============================================================

#[test]
fn lossy_keeps_valid_values_and_reports_bad_ones() {
    let (config, errors) = SiteConfig::from_query_lossy("background=neon&seed=9&log=loud");
    assert_eq!(config.background, BackgroundKind::Particles);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    assert_eq!(
        errors,
        vec![
            ConfigError::UnknownBackground("neon".to_owned()),
            ConfigError::InvalidLogLevel("loud".to_owned()),
        ]
    );
}

#[test]
fn lossy_clean_query_has_no_errors() {
    let (config, errors) = SiteConfig::from_query_lossy("?background=illustration");
    assert_eq!(config.background, BackgroundKind::Illustration);
    assert!(errors.is_empty());
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        ConfigError::UnknownBackground("neon".into()).to_string(),
        "unknown background 'neon' (expected 'particles' or 'illustration')"
    );
    assert_eq!(
        ConfigError::InvalidSeed("x".into()).to_string(),
        "invalid seed 'x' (expected an unsigned integer)"
    );
}
