use figment::Jail;
use herald_config::{ConfigError, HeraldConfig, load_dotenv};

#[test]
fn dotenv_values_reach_the_config() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "HERALD_GENERATIVE__WORD_LIMIT=42\n")?;

        let loaded = load_dotenv().expect(".env loads");
        assert!(loaded.is_some());

        let config = HeraldConfig::load(None).expect("config loads");
        assert_eq!(config.generative.word_limit, 42);
        Ok(())
    });
}

#[test]
fn unreadable_dotenv_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "HERALD_SERVER__HOST='unterminated\n")?;

        let err = load_dotenv().unwrap_err();
        assert!(matches!(err, ConfigError::Dotenv(_)));
        Ok(())
    });
}
