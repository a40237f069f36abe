//! Command-line front end.
//!
//! Each subcommand maps onto one use case. Commands run as cancellable
//! [`FetchTask`](crate::domain::FetchTask)s and render plain text to an
//! injected writer, so tests capture output in memory.

mod app;
mod args;
mod render;
mod startup;

pub use app::{CliApp, CliError, run};
pub use startup::{StartupError, build_app};
pub use args::{
    BookArgs, BookingsCommand, Cli, Command, CreateVenueArgs, LoginArgs, ProfileCommand,
    RegisterArgs, StayArgs, UpdateVenueArgs, VenuesCommand,
};
