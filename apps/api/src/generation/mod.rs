//! Template-fill generators for the four content panels.
//!
//! Every generator is a pure function of its request and an injected RNG;
//! `handlers` adds validation, the per-panel lock, simulated latency and
//! optional persistence.

pub mod blog;
pub mod catalog;
pub mod docs;
pub mod handlers;
pub mod marketing;
pub mod options;
pub mod social;
