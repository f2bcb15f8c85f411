//! newsdesk — a terminal news page fed by the Google News RSS search feed.
//!
//! The core is three framework-free pieces: [`feed`] (fetch + parse),
//! [`pagination`] (the "load more" cursor), and [`view`] (display records
//! for the renderer). [`app`] wires them to a session, and [`ui`] is the
//! ratatui front end that consumes the display records.

pub mod app;
pub mod config;
pub mod feed;
pub mod pagination;
pub mod ui;
pub mod util;
pub mod view;
