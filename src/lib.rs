//! Two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`tictactoe_engine`]; this crate adds the
//! front-ends that render the board and feed key presses or typed
//! commands into the engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Session**: one controller plus configured names and demo seed moves
//! - **Console**: line-based front-end over any reader/writer
//! - **TUI**: full-screen ratatui front-end with keyboard cursor
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameSession, Settings, console};
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = Settings::default().with_overrides(
//!     Some("Alice".to_string()),
//!     Some("Bob".to_string()),
//!     None,
//! )?;
//! let mut session = GameSession::new(settings);
//! let mut out = Vec::new();
//! console::run(&mut session, "1\n2\n5\n3\n9\nquit\n".as_bytes(), &mut out)?;
//! assert!(String::from_utf8(out)?.contains("Alice wins!"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
mod session;
mod status;
pub mod tui;

pub use config::{ConfigError, Settings, parse_seed};
pub use session::GameSession;
pub use status::{status_line, status_with_hint};
