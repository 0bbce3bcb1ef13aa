//! # paddy-core
//!
//! Core types shared by every Paddy crate.
//!
//! This crate provides:
//! - Entity structs for the knowledge base (symptoms, diseases, symptom links, expert rules)
//! - Diagnosis output types (`DiagnosisMatch`, `DiagnosisReport`)
//! - The inference method tag
//! - The scoring policy and confidence helpers
//! - Cross-cutting error types

pub mod confidence;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod policy;
