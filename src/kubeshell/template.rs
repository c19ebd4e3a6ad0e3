//! # Manifest Templating
//!
//! Renders a manifest template against a parameter set, producing the bytes
//! that get piped to kubectl's stdin. Templates use minijinja (Jinja2)
//! syntax:
//!
//! ```yaml
//! apiVersion: v1
//! kind: Pod
//! metadata:
//!   name: {{ Name }}
//! ```
//!
//! Parameters are any serializable value whose shape is a string-keyed
//! mapping — a `BTreeMap<String, String>`, a struct with named fields, or a
//! `serde_json::Value` object. Nested values resolve with field access
//! (`{{ pod.name }}`).
//!
//! Rendering is strict: a placeholder that references a missing parameter is
//! an error, not an empty substitution. An under-specified manifest never
//! reaches kubectl.

use crate::error::Result;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

const TEMPLATE_NAME: &str = "manifest";

/// Renders `template` against `params` into manifest bytes.
///
/// Fails on malformed template syntax (no partial render is attempted) and
/// on placeholders that reference keys absent from `params`.
pub fn render<T: Serialize>(template: &str, params: &T) -> Result<Vec<u8>> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template_owned(TEMPLATE_NAME.to_string(), template.to_string())?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;
    let rendered = tmpl.render(params)?;
    Ok(rendered.into_bytes())
}
