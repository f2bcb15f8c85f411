//! Terminal rendering and input handling.
//!
//! The UI is a thin collaborator over the core: it consumes the display
//! records from [`crate::view`] and feeds "refresh" and "load more"
//! triggers back into [`crate::app::App`].

mod cards;
mod events;
mod input;
mod loop_runner;
mod render;
mod status;

pub use loop_runner::run;
