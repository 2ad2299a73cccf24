//! Terminal front-end for tic-tac-toe with move history.
//!
//! The binary wires [`Cli`] and [`TuiConfig`] together, installs file-based
//! tracing and hands the terminal to [`App::run`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod ui;

pub use app::{App, Focus, Screen, ScreenTransition};
pub use cli::Cli;
pub use config::{ConfigError, MoveOrderSetting, Theme, ThemeConfig, TuiConfig};
pub use input::move_cursor;
pub use logging::init_tracing;
pub use ui::draw;
