//! # Client Facade
//!
//! [`Kubectl`] composes the [`template`](crate::template) and
//! [`invoke`](crate::invoke) leaves into the public operations. Each
//! operation is a fixed command-line recipe:
//!
//! | Operation | Arguments | Stdin |
//! |---|---|---|
//! | [`apply`](Kubectl::apply) | `apply -f -` | rendered manifest |
//! | [`delete`](Kubectl::delete) | `delete -f -` | rendered manifest |
//! | [`patch`](Kubectl::patch) | `patch <resource> <name> -n <ns> --patch <body>` | — |
//! | [`exec`](Kubectl::exec) | `exec <name> -n <ns> <command...>` | — |
//! | [`get_by_name`](Kubectl::get_by_name) | `get <resource> <name> -n=<ns> -o json` | — |
//! | [`get_by_label`](Kubectl::get_by_label) | `get <resource> -l <selector> -n=<ns> -o json` | — |
//! | [`delete_by_label`](Kubectl::delete_by_label) | `delete <kind,kind,...> -l <selector> -n=<ns>` | — |
//!
//! Every call is stateless request/response: a fresh template render (where
//! applicable) and a fresh child process. Nothing is cached, retried, or
//! logged. Returned bytes are opaque to this layer — `get_*` callers
//! typically feed them to `serde_json` and inspect fields such as
//! `.status.phase`, e.g. to poll until a pod is running.

use crate::error::Result;
use crate::{invoke, template};
use serde::Serialize;

const DEFAULT_PROGRAM: &str = "kubectl";

/// Stateless handle on the kubectl binary.
///
/// [`Kubectl::new`] resolves `kubectl` on `PATH`; the program is the one
/// injectable dependency, so tests can point the client at a fake
/// executable with [`Kubectl::with_program`].
#[derive(Debug, Clone)]
pub struct Kubectl {
    program: String,
}

impl Default for Kubectl {
    fn default() -> Self {
        Self::new()
    }
}

impl Kubectl {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Renders `manifest` against `params` and pipes it to `kubectl apply`.
    ///
    /// Safely re-invocable; kubectl's own apply semantics decide what an
    /// update means. Fails before any process is spawned if the template is
    /// malformed or references a missing parameter.
    pub fn apply<T: Serialize>(&self, manifest: &str, params: &T) -> Result<()> {
        let rendered = template::render(manifest, params)?;
        invoke::invoke(&self.program, &["apply", "-f", "-"], Some(&rendered))?;
        Ok(())
    }

    /// Renders `manifest` against `params` and pipes it to `kubectl delete`.
    ///
    /// Deleting an already-absent resource fails with kubectl's own error,
    /// unmasked.
    pub fn delete<T: Serialize>(&self, manifest: &str, params: &T) -> Result<()> {
        let rendered = template::render(manifest, params)?;
        invoke::invoke(&self.program, &["delete", "-f", "-"], Some(&rendered))?;
        Ok(())
    }

    /// Patches a named resource with `patch` (a JSON or strategic-merge
    /// patch body, passed through untouched).
    pub fn patch(&self, resource: &str, name: &str, namespace: &str, patch: &str) -> Result<()> {
        invoke::invoke(
            &self.program,
            &["patch", resource, name, "-n", namespace, "--patch", patch],
            None,
        )?;
        Ok(())
    }

    /// Runs `command` inside the named workload and returns its stdout.
    ///
    /// Each element of `command` crosses the process boundary as one
    /// discrete argument — no shell, no joining, no re-splitting.
    pub fn exec<I: AsRef<str>>(&self, name: &str, namespace: &str, command: &[I]) -> Result<Vec<u8>> {
        let mut args = vec![
            "exec".to_string(),
            name.to_string(),
            "-n".to_string(),
            namespace.to_string(),
        ];
        args.extend(command.iter().map(|c| c.as_ref().to_string()));
        invoke::invoke(&self.program, &args, None)
    }

    /// Fetches a single resource as JSON bytes.
    pub fn get_by_name(&self, resource: &str, name: &str, namespace: &str) -> Result<Vec<u8>> {
        let ns = namespace_flag(namespace);
        invoke::invoke(
            &self.program,
            &["get", resource, name, ns.as_str(), "-o", "json"],
            None,
        )
    }

    /// Fetches all resources matching a label selector as JSON bytes.
    ///
    /// An empty match is not an error: kubectl returns a list object with no
    /// items, and that is what the caller gets.
    pub fn get_by_label(&self, resource: &str, label: &str, namespace: &str) -> Result<Vec<u8>> {
        let ns = namespace_flag(namespace);
        invoke::invoke(
            &self.program,
            &["get", resource, "-l", label, ns.as_str(), "-o", "json"],
            None,
        )
    }

    /// Deletes every resource of the given kinds matching a label selector.
    ///
    /// The kinds collapse into kubectl's comma-separated multi-kind token:
    /// `["replicaset", "pod"]` targets `replicaset,pod`.
    pub fn delete_by_label<I: AsRef<str>>(
        &self,
        resources: &[I],
        label: &str,
        namespace: &str,
    ) -> Result<()> {
        let kinds = resources
            .iter()
            .map(|r| r.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        let ns = namespace_flag(namespace);
        invoke::invoke(
            &self.program,
            &["delete", kinds.as_str(), "-l", label, ns.as_str()],
            None,
        )?;
        Ok(())
    }
}

fn namespace_flag(namespace: &str) -> String {
    format!("-n={}", namespace)
}
