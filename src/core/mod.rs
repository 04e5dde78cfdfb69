//! Platform-free page logic: anchors, copy, header and visibility state machines

mod anchor;
#[cfg(feature = "ssr")]
pub mod config;
mod content;
mod header;
mod reveal;
mod visibility;

pub use anchor::*;
pub use content::*;
pub use header::*;
pub use reveal::*;
pub use visibility::*;
