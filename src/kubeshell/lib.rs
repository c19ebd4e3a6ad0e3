//! # Kubeshell Architecture
//!
//! Kubeshell is a **kubectl client library**. This is not a CLI application
//! that happens to have some library code—it's a library that happens to
//! ship a CLI client.
//!
//! There is no in-process Kubernetes API client here: every operation shells
//! out to the `kubectl` binary. The value of the crate is in doing that
//! boundary precisely — deterministic argument vectors, correct
//! template-to-stdin piping, and one coherent error value per failure.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, reads template files, prints output    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade Layer (api.rs)                                      │
//! │  - One fixed command-line recipe per operation              │
//! │  - apply / delete / patch / exec / get / delete-by-label    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                 ┌────────────┴────────────┐
//!                 ▼                         ▼
//! ┌───────────────────────────┐ ┌───────────────────────────────┐
//! │  Renderer (template.rs)   │ │  Invoker (invoke.rs)          │
//! │  - minijinja, strict      │ │  - argv + stdin pipe + wait   │
//! │  - params → manifest      │ │  - stdout bytes or one error  │
//! └───────────────────────────┘ └───────────────────────────────┘
//! ```
//!
//! ## Key Principle: Stateless, Propagating, Synchronous
//!
//! From `api.rs` inward, code:
//! - Holds no mutable state; every call owns its own process and buffers,
//!   so concurrent callers need no locking
//! - Returns every error to the caller via `Result`; nothing is logged,
//!   swallowed, or retried inside the library
//! - Blocks until the child exits; callers wanting a deadline wrap the call
//!
//! Returned payloads are opaque bytes. `get_*` asks kubectl for `-o json`,
//! and the caller deserializes and inspects fields (a typical loop polls
//! `.status.phase` until a pod reports `Running`).
//!
//! ## Module Overview
//!
//! - [`api`]: The [`Kubectl`](api::Kubectl) facade—entry point for all
//!   operations
//! - [`template`]: Manifest rendering with strict parameter binding
//! - [`invoke`]: Child-process execution and result classification
//! - [`config`]: Configuration for the binary (program path, namespace)
//! - [`error`]: Error types
//! - `args`: Argument parsing for the binary (not part of the lib API)

pub mod api;
pub mod config;
pub mod error;
pub mod invoke;
pub mod template;
