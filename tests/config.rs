#[cfg(test)]
mod tests {
    use obra::api::PortalConfig;
    use obra::libs::config::Config;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context giving the run an isolated home/appdata directory so
    /// config files never touch the real user profile.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        api_url: String,
        auth_token: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                api_url: "https://portal.example.com/api".to_string(),
                auth_token: "token123".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config_has_no_portal() {
        let config = Config::default();
        assert!(config.portal.is_none());
    }

    // Read-before-save, save and read-back run in one test so the HOME
    // override cannot race with another thread's context setup.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_defaults_then_save_and_read_back(ctx: &mut ConfigTestContext) {
        // With no file on disk, read() falls back to the default config.
        let config = Config::read().unwrap();
        assert!(config.portal.is_none());

        let config = Config {
            portal: Some(PortalConfig {
                api_url: ctx.api_url.clone(),
                auth_token: ctx.auth_token.clone(),
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        let portal = read_config.portal.unwrap();
        assert_eq!(portal.api_url, ctx.api_url);
        assert_eq!(portal.auth_token, ctx.auth_token);
    }
}
