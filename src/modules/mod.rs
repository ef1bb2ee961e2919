//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the relational store backing the trivia features.

pub mod store;
