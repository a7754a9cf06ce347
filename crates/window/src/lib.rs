//! Strip window shell.
//!
//! Wires together the catalog, the cached system status, the layout
//! builder, and the renderer behind one explicit context ([`Shell`]).
//! State-changing events run synchronously to completion and discard the
//! cached layout; the next paint lazily rebuilds it.  A single active
//! window is the only supported configuration.

pub mod shell;
pub mod window;

pub use shell::{Services, Shell, Subscriptions};
pub use window::{StripWindow, WindowHooks};
