//! Data models for the triage pipeline.

pub mod config;
pub mod record;
