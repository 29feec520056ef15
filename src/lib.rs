//! In-memory to-do list for a single terminal session.
//!
//! [`todo::TodoStore`] holds the tasks and their operations; [`app::App`]
//! keeps the screen state around it and [`tui`] draws it and maps keys.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod todo;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use error::{SetupError, ValidationError};
pub use todo::{Counts, FilterMode, IdPolicy, Task, TodoStore};
