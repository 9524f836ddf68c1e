use crate::error::Result;
use crate::session::SessionConfig;
use argh::FromArgs;
use std::io::IsTerminal;

#[derive(FromArgs, Debug)]
/// Replace every occurrence of one character in a line with another.
/// Lines are read until the stop word is entered.
pub struct Config {
    #[argh(option, default = "String::from(\"stop\")")]
    /// word that ends the session; defaults to "stop".
    pub stop_word: String,

    #[argh(switch)]
    /// read standard input as a plain stream even when it is a terminal.
    pub plain: bool,
}

impl Config {
    /// Validate the options into settings for a [`Session`](crate::Session).
    pub fn session_config(&self) -> Result<SessionConfig> {
        SessionConfig::new(self.stop_word.as_str())
    }

    /// Whether the interactive line editor should be used.
    pub fn use_terminal(&self) -> bool {
        !self.plain && std::io::stdin().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReplaceError;

    fn parse(args: &[&str]) -> Config {
        Config::from_args(&["charswap"], args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.stop_word, "stop");
        assert!(!config.plain);
        assert_eq!(config.session_config().unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_custom_stop_word_and_plain() {
        let config = parse(&["--stop-word", "quit", "--plain"]);
        assert_eq!(config.session_config().unwrap().stop_word(), "quit");
        assert!(config.plain);
        assert!(!config.use_terminal());
    }

    #[test]
    fn test_empty_stop_word_is_rejected() {
        let config = parse(&["--stop-word", ""]);
        assert!(matches!(
            config.session_config(),
            Err(ReplaceError::EmptyStopWord)
        ));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = Config::from_args(&["charswap"], &["--nope"]).unwrap_err();
        assert!(err.status.is_err());
    }

    #[test]
    fn test_help_exits_successfully() {
        let early = Config::from_args(&["charswap"], &["--help"]).unwrap_err();
        assert!(early.status.is_ok());
        assert!(early.output.contains("--stop-word"));
    }
}
