use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kubeshell")]
#[command(about = "Render templated manifests and drive kubectl", long_about = None)]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " ", env!("GIT_HASH")))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// kubectl binary to invoke (overrides KUBESHELL_KUBECTL and config)
    #[arg(long, global = true, value_name = "PATH")]
    pub kubectl: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a manifest template and apply it
    Apply {
        /// Template file ("-" reads from stdin)
        #[arg(short, long, value_name = "FILE")]
        file: String,

        /// Template parameter, repeatable
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Render a manifest template and delete what it describes
    Delete {
        /// Template file ("-" reads from stdin)
        #[arg(short, long, value_name = "FILE")]
        file: String,

        /// Template parameter, repeatable
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Patch a named resource
    Patch {
        /// Resource kind (e.g. deployment)
        resource: String,

        /// Resource name
        name: String,

        /// Patch body (JSON or strategic merge)
        #[arg(long, value_name = "BODY")]
        patch: String,

        /// Namespace (defaults to the configured namespace)
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Run a command inside a workload and print its output
    Exec {
        /// Workload name
        name: String,

        /// Namespace (defaults to the configured namespace)
        #[arg(short, long)]
        namespace: Option<String>,

        /// Command to run, after `--` (each token is one argument)
        #[arg(required = true, num_args = 1.., last = true)]
        command: Vec<String>,
    },

    /// Fetch resources as JSON, by name or by label selector
    Get {
        /// Resource kind (e.g. pod)
        resource: String,

        /// Resource name
        #[arg(required_unless_present = "selector", conflicts_with = "selector")]
        name: Option<String>,

        /// Label selector (e.g. app=web)
        #[arg(short = 'l', long)]
        selector: Option<String>,

        /// Namespace (defaults to the configured namespace)
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Delete all resources of the given kinds matching a label selector
    DeleteByLabel {
        /// Resource kinds (e.g. replicaset pod)
        #[arg(required = true, num_args = 1..)]
        resources: Vec<String>,

        /// Label selector (e.g. app=web)
        #[arg(short = 'l', long, required = true)]
        selector: String,

        /// Namespace (defaults to the configured namespace)
        #[arg(short, long)]
        namespace: Option<String>,
    },
}
