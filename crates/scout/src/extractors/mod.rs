// ABOUTME: Field extraction strategies for movie source pages.
// ABOUTME: Includes the rule table, selector evaluation, selector cache, and post-processors.

//! Field extraction module.
//!
//! Submodules:
//! - `rules`: data model of the per-field selector table.
//! - `loader`: builtin and user-supplied table loading.
//! - `select`: ordered selector evaluation against a document.
//! - `transform`: post-processors applied to raw matches.
//! - `compiled`: process-wide cache of compiled selectors.

pub mod compiled;
pub mod loader;
pub mod rules;
pub mod select;
pub mod transform;
