//! Tests for queue-name filtering.

use std::collections::HashMap;

use super::*;
use crate::config::env::var;

fn filter_from_env(pairs: &[(&str, &str)]) -> Result<QueueFilter, ConfigError> {
    let env: HashMap<&str, &str> = pairs.iter().copied().collect();
    QueueFilter::from_config(&ExporterConfig::from_env(&env))
}

mod defaults {
    use super::*;

    #[test]
    fn default_patterns_accept_named_queues() {
        let filter = QueueFilter::from_config(&ExporterConfig::builtin()).unwrap();

        assert!(filter.matches("orders"));
        assert!(filter.matches("amq.gen-JzTY20BRgKO-HjmUJj0wLg"));
    }

    #[test]
    fn default_skip_matches_only_empty_name() {
        let filter = QueueFilter::from_config(&ExporterConfig::builtin()).unwrap();

        assert!(!filter.matches(""));
    }

    #[test]
    fn patterns_are_kept_as_written() {
        let filter = QueueFilter::from_config(&ExporterConfig::builtin()).unwrap();

        assert_eq!(filter.skip_pattern(), "^$");
        assert_eq!(filter.include_pattern(), ".*");
    }
}

mod configured {
    use super::*;

    #[test]
    fn skip_pattern_excludes() {
        let filter = filter_from_env(&[(var::SKIP_QUEUES, r"^amq\.")]).unwrap();

        assert!(!filter.matches("amq.gen-abc"));
        assert!(filter.matches("orders"));
    }

    #[test]
    fn include_pattern_restricts() {
        let filter = filter_from_env(&[(var::INCLUDE_QUEUES, "^orders-")]).unwrap();

        assert!(filter.matches("orders-eu"));
        assert!(!filter.matches("payments"));
    }

    #[test]
    fn skip_wins_over_include() {
        let filter = filter_from_env(&[
            (var::INCLUDE_QUEUES, "^orders-"),
            (var::SKIP_QUEUES, "-dlq$"),
        ])
        .unwrap();

        assert!(filter.matches("orders-eu"));
        assert!(!filter.matches("orders-eu-dlq"));
    }
}

mod invalid {
    use super::*;

    #[test]
    fn invalid_skip_pattern_names_field() {
        let err = filter_from_env(&[(var::SKIP_QUEUES, "(unclosed")]).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidRegex {
                field: "SKIP_QUEUES",
                ..
            }
        ));
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn invalid_include_pattern_names_field() {
        let result = QueueFilter::new("^$", "[z-a]");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidRegex {
                field: "INCLUDE_QUEUES",
                ..
            })
        ));
    }
}
