use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KubeshellError {
    #[error("cannot render manifest template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("cannot run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write manifest to `{program}` stdin: {source}")]
    Stdin {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Non-zero exit. Carries the full command line and everything the
    /// process wrote to stderr so one message tells the whole story.
    #[error("`{command}` failed ({status}): {stderr}")]
    Command {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("invalid parameter (expected KEY=VALUE): {0}")]
    Param(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KubeshellError>;
