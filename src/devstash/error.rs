use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevstashError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid configuration key '{0}'. Valid keys are 'webhookUrl', 'authToken'.")]
    InvalidConfigKey(String),

    #[error("Could not read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Input content is empty.")]
    EmptyInput,

    #[error("No editor configured. Set $EDITOR.")]
    NoEditor,

    #[error("Failed to launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor '{editor}' exited with {status}")]
    EditorExit { editor: String, status: ExitStatus },

    #[error("Could not read snippet back from {}: {source}", .path.display())]
    EditorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Webhook URL is not configured. Use 'devstash config set webhookUrl <url>' or the --webhook-url flag.")]
    WebhookNotConfigured,

    #[error("Request to webhook failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Received status code {status} from webhook: {body}")]
    Delivery { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DevstashError>;
