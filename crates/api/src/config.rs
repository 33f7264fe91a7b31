use campus_core::masking::MaskStyle;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long shutdown waits for borrowed connections to return (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// How email addresses are masked in responses (default: symmetric).
    pub email_mask: MaskStyle,
    /// Apply bundled migrations at startup (default: `true`).
    pub run_migrations: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:8081`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `EMAIL_MASK_STYLE`     | `symmetric`                |
    /// | `RUN_MIGRATIONS`       | `true`                     |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; [`Self::from_env`]
    /// passes the process environment.
    ///
    /// Panics on a value that is present but does not parse, so a bad
    /// setting stops the server at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = var("SHUTDOWN_TIMEOUT_SECS", "30")
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let email_mask: MaskStyle = var("EMAIL_MASK_STYLE", "symmetric")
            .parse()
            .expect("EMAIL_MASK_STYLE must be symmetric or local_part");

        let run_migrations: bool = var("RUN_MIGRATIONS", "true")
            .parse()
            .expect("RUN_MIGRATIONS must be true or false");

        Self {
            host: var("HOST", "0.0.0.0"),
            port,
            cors_origins: parse_cors_origins(&var("CORS_ORIGINS", "http://localhost:8081")),
            request_timeout_secs,
            shutdown_timeout_secs,
            email_mask,
            run_migrations,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::views::Views;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:8081"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.shutdown_timeout_secs, 30);
        assert_eq!(config.email_mask, MaskStyle::Symmetric);
        assert!(config.run_migrations);
    }

    #[test]
    fn every_setting_can_be_overridden() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test,http://b.test"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("SHUTDOWN_TIMEOUT_SECS", "7"),
            ("EMAIL_MASK_STYLE", "local_part"),
            ("RUN_MIGRATIONS", "false"),
        ]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.shutdown_timeout_secs, 7);
        assert_eq!(config.email_mask, MaskStyle::LocalPart);
        assert!(!config.run_migrations);
    }

    #[test]
    fn local_part_style_reaches_the_views() {
        let config = config_from(&[("EMAIL_MASK_STYLE", "local_part")]);
        let views = Views::new(config.email_mask.policy());

        let student = views
            .student
            .render(&json!({"id": 1, "email": "ana@x.com"}))
            .unwrap();
        assert_eq!(student["email"], "****x.com");
    }

    #[test]
    #[should_panic(expected = "RUN_MIGRATIONS must be true or false")]
    fn unparseable_flag_fails_fast() {
        config_from(&[("RUN_MIGRATIONS", "yes")]);
    }

    #[test]
    #[should_panic(expected = "EMAIL_MASK_STYLE")]
    fn unknown_mask_style_fails_fast() {
        config_from(&[("EMAIL_MASK_STYLE", "stars")]);
    }

    #[test]
    fn parses_comma_separated_origins() {
        assert_eq!(
            parse_cors_origins("http://localhost:8081, http://10.0.2.2:8081,,"),
            vec!["http://localhost:8081", "http://10.0.2.2:8081"]
        );
    }

    #[test]
    fn empty_origin_list() {
        assert!(parse_cors_origins(" , ").is_empty());
    }
}
