#[cfg(test)]
mod tests {
    use tarea::libs::config::{Config, Theme};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert_eq!(config.theme, Theme::Light);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert_eq!(config.theme, Theme::Light);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config { theme: Theme::Dark };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_theme_toggle(_ctx: &mut ConfigTestContext) {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_resets_to_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config { theme: Theme::Dark };
        config.save().unwrap();

        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap().theme, Theme::Light);

        // Deleting again is not an error.
        Config::delete().unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_theme_serialized_form(_ctx: &mut ConfigTestContext) {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), r#""light""#);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
