//! Tests for CLI argument parsing.

use super::cli::{Cli, Command, normalize_single_dash};
use super::defaults;

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from_iter(["rabbit-exporter"]);

        assert!(cli.command.is_none());
        assert!(cli.rabbit_url.is_none());
        assert!(cli.rabbit_user.is_none());
        assert!(cli.rabbit_password.is_none());
        assert!(cli.collector_skip.is_none());
        assert!(cli.collector_include.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn listen_address_has_flag_default() {
        let cli = Cli::parse_from_iter(["rabbit-exporter"]);

        assert_eq!(cli.listen_address, defaults::LISTEN_ADDRESS_FLAG);
    }

    #[test]
    fn parse_dotted_flags() {
        let cli = Cli::parse_from_iter([
            "rabbit-exporter",
            "--rabbit.url",
            "https://broker:15672",
            "--rabbit.user",
            "admin",
            "--rabbit.password",
            "s3cret",
            "--web.listen-address",
            "0.0.0.0:9419",
        ]);

        assert_eq!(cli.rabbit_url.as_deref(), Some("https://broker:15672"));
        assert_eq!(cli.rabbit_user.as_deref(), Some("admin"));
        assert_eq!(cli.rabbit_password.as_deref(), Some("s3cret"));
        assert_eq!(cli.listen_address, "0.0.0.0:9419");
    }

    #[test]
    fn parse_equals_syntax() {
        let cli = Cli::parse_from_iter(["rabbit-exporter", "--rabbit.user=monitor"]);

        assert_eq!(cli.rabbit_user.as_deref(), Some("monitor"));
    }

    #[test]
    fn empty_listen_address_is_accepted() {
        let cli = Cli::parse_from_iter(["rabbit-exporter", "--web.listen-address", ""]);

        assert_eq!(cli.listen_address, "");
    }

    #[test]
    fn parse_collector_flags() {
        let cli = Cli::parse_from_iter([
            "rabbit-exporter",
            "--collector.skip",
            "^amq\\.",
            "--collector.include",
            "^orders",
        ]);

        assert_eq!(cli.collector_skip.as_deref(), Some("^amq\\."));
        assert_eq!(cli.collector_include.as_deref(), Some("^orders"));
    }

    #[test]
    fn parse_verbose() {
        let long = Cli::parse_from_iter(["rabbit-exporter", "--verbose"]);
        let short = Cli::parse_from_iter(["rabbit-exporter", "-v"]);

        assert!(long.verbose);
        assert!(short.verbose);
    }
}

mod show_command {
    use super::*;

    #[test]
    fn parse_show() {
        let cli = Cli::parse_from_iter(["rabbit-exporter", "show"]);

        assert_eq!(cli.command, Some(Command::Show));
        assert!(cli.is_show());
    }

    #[test]
    fn verbose_after_subcommand() {
        let cli = Cli::parse_from_iter(["rabbit-exporter", "show", "-v"]);

        assert!(cli.is_show());
        assert!(cli.verbose);
    }

    #[test]
    fn no_subcommand_is_not_show() {
        let cli = Cli::parse_from_iter(["rabbit-exporter"]);

        assert!(!cli.is_show());
    }
}

mod errors {
    use super::*;
    use clap::Parser;

    #[test]
    fn unknown_flag_is_rejected() {
        let result = Cli::try_parse_from(["rabbit-exporter", "--rabbit.vhost", "/"]);

        assert!(result.is_err());
    }

    #[test]
    fn missing_flag_value_is_rejected() {
        let result = Cli::try_parse_from(["rabbit-exporter", "--rabbit.url"]);

        assert!(result.is_err());
    }
}

mod single_dash {
    use super::*;
    use std::ffi::OsString;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn single_dash_dotted_flags_parse() {
        let cli = Cli::parse_from_iter([
            "rabbit-exporter",
            "-rabbit.url",
            "https://broker:15672",
            "-rabbit.user=monitor",
            "-web.listen-address",
            ":9419",
            "-collector.skip=^amq",
        ]);

        assert_eq!(cli.rabbit_url.as_deref(), Some("https://broker:15672"));
        assert_eq!(cli.rabbit_user.as_deref(), Some("monitor"));
        assert_eq!(cli.listen_address, ":9419");
        assert_eq!(cli.collector_skip.as_deref(), Some("^amq"));
    }

    #[test]
    fn short_flags_are_untouched() {
        let args = normalize_single_dash(["rabbit-exporter", "-v", "--rabbit.url", "x"]);

        assert_eq!(args, os(&["rabbit-exporter", "-v", "--rabbit.url", "x"]));
    }

    #[test]
    fn unknown_single_dash_names_are_untouched() {
        let args = normalize_single_dash(["rabbit-exporter", "-rabbit.vhost=/"]);

        assert_eq!(args, os(&["rabbit-exporter", "-rabbit.vhost=/"]));
    }

    #[test]
    fn arguments_after_terminator_are_untouched() {
        let args = normalize_single_dash(["rabbit-exporter", "--", "-rabbit.url"]);

        assert_eq!(args, os(&["rabbit-exporter", "--", "-rabbit.url"]));
    }

    #[test]
    fn rewrites_to_double_dash() {
        let args = normalize_single_dash(["rabbit-exporter", "-rabbit.password=-secret"]);

        assert_eq!(args, os(&["rabbit-exporter", "--rabbit.password=-secret"]));
    }
}
