// Readability / SEO scoring engine plus the string utilities built on it.
// Everything below `handlers` is pure: no I/O, no shared state.

pub mod handlers;
pub mod hashtags;
pub mod readability;
pub mod seo;
pub mod truncate;
