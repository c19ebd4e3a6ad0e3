use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use kubeshell::api::Kubectl;
use kubeshell::config::KubeshellConfig;
use kubeshell::error::{KubeshellError, Result};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;
    let kubectl = Kubectl::with_program(resolve_program(&cli, &config));

    match cli.command {
        Commands::Apply { file, params } => {
            let template = read_template(&file)?;
            kubectl.apply(&template, &parse_params(&params)?)?;
            println!("{}", "applied".green());
            Ok(())
        }
        Commands::Delete { file, params } => {
            let template = read_template(&file)?;
            kubectl.delete(&template, &parse_params(&params)?)?;
            println!("{}", "deleted".green());
            Ok(())
        }
        Commands::Patch {
            resource,
            name,
            patch,
            namespace,
        } => {
            let ns = namespace_or_default(namespace, &config);
            kubectl.patch(&resource, &name, &ns, &patch)?;
            println!("{}", "patched".green());
            Ok(())
        }
        Commands::Exec {
            name,
            namespace,
            command,
        } => {
            let ns = namespace_or_default(namespace, &config);
            let out = kubectl.exec(&name, &ns, &command)?;
            std::io::stdout().write_all(&out)?;
            Ok(())
        }
        Commands::Get {
            resource,
            name,
            selector,
            namespace,
        } => {
            let ns = namespace_or_default(namespace, &config);
            let out = if let Some(name) = name {
                kubectl.get_by_name(&resource, &name, &ns)?
            } else if let Some(selector) = selector {
                kubectl.get_by_label(&resource, &selector, &ns)?
            } else {
                unreachable!("clap requires a name or a selector")
            };
            std::io::stdout().write_all(&out)?;
            Ok(())
        }
        Commands::DeleteByLabel {
            resources,
            selector,
            namespace,
        } => {
            let ns = namespace_or_default(namespace, &config);
            kubectl.delete_by_label(&resources, &selector, &ns)?;
            println!("{}", "deleted".green());
            Ok(())
        }
    }
}

/// Program precedence: --kubectl flag, then KUBESHELL_KUBECTL, then config.
fn resolve_program(cli: &Cli, config: &KubeshellConfig) -> String {
    if let Some(program) = &cli.kubectl {
        return program.clone();
    }
    if let Ok(program) = std::env::var("KUBESHELL_KUBECTL") {
        if !program.is_empty() {
            return program;
        }
    }
    config.program.clone()
}

fn namespace_or_default(flag: Option<String>, config: &KubeshellConfig) -> String {
    flag.unwrap_or_else(|| config.namespace.clone())
}

fn load_config() -> Result<KubeshellConfig> {
    // KUBESHELL_HOME overrides the user config dir; integration tests rely
    // on it to stay hermetic.
    if let Ok(home) = std::env::var("KUBESHELL_HOME") {
        return KubeshellConfig::load(PathBuf::from(home));
    }
    match ProjectDirs::from("", "", "kubeshell") {
        Some(dirs) => KubeshellConfig::load(dirs.config_dir()),
        None => Ok(KubeshellConfig::default()),
    }
}

fn read_template(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

fn parse_params(pairs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| KubeshellError::Param(pair.clone()))?;
        params.insert(key.to_string(), value.to_string());
    }
    Ok(params)
}
