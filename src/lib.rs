//! Case Intake - Dynamic Intake Questionnaire Engine
//!
//! This crate implements a conditional-visibility questionnaire renderer:
//! the visible question set, nesting levels, progress, pagination, and
//! section grouping are recomputed from the current answers on every change.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
