//! Core library for the `webvitals` CLI.
//!
//! This crate provides the internal building blocks used by the binary:
//! CLI argument types, configuration parsing, the browser target
//! session, the five metric probes, and threshold evaluation. The
//! primary user-facing interface is the `webvitals` command-line
//! application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod error;
pub mod probe;
pub mod session;
pub mod vitals;
