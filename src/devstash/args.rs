use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "devstash", version, long_version = LONG_VERSION)]
#[command(about = "Save code snippets and notes from your terminal to a webhook")]
#[command(long_about = "Save text from your terminal to your DevStash vault.

Pipe content into it to save it:
  cat my_script.js | devstash --tags \"javascript,api\"
  history | grep docker | devstash --note \"Useful docker commands\"")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Webhook URL to send data to
    #[arg(long, global = true, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Authentication token for the webhook
    #[arg(long, global = true, value_name = "TOKEN")]
    pub auth_token: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "DEVSTASH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Comma-separated tags to add to the snippet
    #[arg(short, long)]
    pub tags: Option<String>,

    /// A note or description for the snippet
    #[arg(short, long)]
    pub note: Option<String>,

    /// Read the snippet from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new snippet using your default text editor
    #[command(alias = "compose")]
    #[command(long_about = "Opens your default editor (or the one specified by $EDITOR) to create a new snippet.

The snippet is saved to DevStash when you save and close the editor.")]
    New {
        /// Comma-separated tags for the snippet
        #[arg(short, long)]
        tags: Option<String>,

        /// A note or description for the snippet
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set a configuration value. Valid keys are 'webhookUrl' and 'authToken'
    Set { key: String, value: String },

    /// Get a configuration value. Valid keys are 'webhookUrl' and 'authToken'
    Get { key: String },

    /// Print the path of the config file
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_command_flags() {
        let cli = Cli::try_parse_from([
            "devstash",
            "-t",
            "py, demo",
            "--note",
            "hello",
            "--file",
            "snippet.py",
        ])
        .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.tags.as_deref(), Some("py, demo"));
        assert_eq!(cli.note.as_deref(), Some("hello"));
        assert_eq!(cli.file, Some(PathBuf::from("snippet.py")));
    }

    #[test]
    fn test_new_alias_and_global_overrides() {
        let cli = Cli::try_parse_from([
            "devstash",
            "compose",
            "-t",
            "rust",
            "--webhook-url",
            "http://hook",
        ])
        .unwrap();
        assert_eq!(cli.webhook_url.as_deref(), Some("http://hook"));
        match cli.command {
            Some(Commands::New { tags, note }) => {
                assert_eq!(tags.as_deref(), Some("rust"));
                assert_eq!(note, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_set_requires_two_args() {
        assert!(Cli::try_parse_from(["devstash", "config", "set", "webhookUrl"]).is_err());
        let cli =
            Cli::try_parse_from(["devstash", "config", "set", "webhookUrl", "http://x"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigCommands::Set { .. }
            })
        ));
    }

    #[test]
    fn test_config_get_takes_one_arg() {
        assert!(Cli::try_parse_from(["devstash", "config", "get"]).is_err());
        assert!(Cli::try_parse_from(["devstash", "config", "get", "a", "b"]).is_err());
    }
}
