use figment::Jail;
use paddy_config::PaddyConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("PADDY_GENERAL__DEFAULT_LIMIT", "7");
        let config = PaddyConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".paddy")?;
        jail.create_file(
            ".paddy/config.toml",
            r#"
[knowledge]
path = "from-file.toml"
"#,
        )?;
        jail.set_env("PADDY_KNOWLEDGE__PATH", "from-env.toml");

        let config = PaddyConfig::load().expect("config loads");
        assert_eq!(config.knowledge.path, "from-env.toml");
        Ok(())
    });
}

#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("PADDY_SCORING__RULE_WIEGHT", "0.1");
        let config = PaddyConfig::load().expect("config loads");
        assert!((config.scoring.rule_weight - 0.7).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_env_layer() {
    // dotenvy writes the process env directly and Jail does not restore it,
    // so this key is not asserted anywhere else in this binary.
    Jail::expect_with(|jail| {
        jail.create_file(".env", "PADDY_SCORING__SIMILARITY_BOOST=1.4\n")?;
        let config = PaddyConfig::load_with_dotenv().expect("config loads");
        assert!((config.scoring.similarity_boost - 1.4).abs() < f64::EPSILON);
        Ok(())
    });
}
