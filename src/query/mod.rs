//! Natural-language query interpretation.
//!
//! `QueryInterpreter` is the entry point; the other modules are its stages.

pub mod intent;
pub mod interpreter;
pub mod player_resolver;
pub mod scanner;
pub mod teams;

pub use intent::{classify, Intent};
pub use interpreter::QueryInterpreter;
pub use player_resolver::PlayerResolver;
pub use scanner::{EntityScanner, TokenMatcher};
pub use teams::{canonical_team, resolve_team};
