//! # Devstash Architecture
//!
//! Devstash captures a piece of text (a file, piped stdin, or an editor
//! session) and posts it as a small JSON envelope to a user-configured
//! webhook. It is a library with a thin CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints messages, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, generic over the webhook Transport          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - save: input → envelope → delivery                        │
//! │  - config: get / set / path                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Components                                                 │
//! │  input, editor, tags, envelope, webhook, config             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flow of a Save
//!
//! Strictly sequential, one of each at most: read the input, build one
//! [`envelope::SnippetEnvelope`], make one POST. Nothing is retried or queued;
//! the first error ends the invocation.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Settings are resolved once into a
//! [`config::Settings`] value and passed down explicitly.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: The save and config flows
//! - [`config`]: Settings file and flag/env/file resolution
//! - [`input`]: Picking and reading the input source
//! - [`editor`]: External editor integration
//! - [`tags`]: `--tags` parsing
//! - [`envelope`]: The wire payload
//! - [`webhook`]: HTTP delivery
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod envelope;
pub mod error;
pub mod input;
pub mod tags;
pub mod webhook;
