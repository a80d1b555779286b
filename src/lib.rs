//! HCP Assistant - Rule-based logging of healthcare-professional interactions
//!
//! This crate turns a field representative's free-text description of a
//! meeting or call into a structured interaction record, with suggested
//! follow-ups and an acknowledgement, and serves it over a small JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
