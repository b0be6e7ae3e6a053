use figment::Jail;
use herald_config::HeraldConfig;
use herald_core::MatchPolicy;

#[test]
fn prefixed_env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("herald.toml", "[generative]\nmodel = \"from-toml\"\n")?;
        jail.set_env("HERALD_GENERATIVE__MODEL", "from-env");
        jail.set_env("HERALD_MATCHING__POLICY", "exact");

        let config = HeraldConfig::load(None).expect("config loads");
        assert_eq!(config.generative.model, "from-env");
        assert_eq!(config.matching.policy, MatchPolicy::Exact);
        Ok(())
    });
}

#[test]
fn deployment_aliases_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("FIREBASE_SERVICE_ACCOUNT_BASE64", "eyJmb28iOiJiYXIifQ==");
        jail.set_env("GEMINI_API_KEY", "gm-key");
        jail.set_env("PORT", "8081");

        let config = HeraldConfig::load(None).expect("config loads");
        assert_eq!(config.store.credentials_base64, "eyJmb28iOiJiYXIifQ==");
        assert_eq!(config.generative.api_key, "gm-key");
        assert_eq!(config.server.port, 8081);
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_deployment_alias() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "alias-key");
        jail.set_env("HERALD_GENERATIVE__API_KEY", "prefixed-key");

        let config = HeraldConfig::load(None).expect("config loads");
        assert_eq!(config.generative.api_key, "prefixed-key");
        Ok(())
    });
}
