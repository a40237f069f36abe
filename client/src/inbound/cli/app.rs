//! Dispatch of parsed commands onto the domain services.

use std::io::{self, Write};
use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

use super::args::{BookingsCommand, Command, ProfileCommand, VenuesCommand};
use super::render;
use crate::domain::ports::{AuthGateway, BookingGateway, ProfileGateway, VenueGateway};
use crate::domain::{
    AuthService, BookingId, BookingService, DomainError, ErrorCode, FetchTask, ProfileService,
    SessionStore, VenueId, VenueService,
};

/// Failure of one command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A use case failed; the message is meant for the user.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    /// The command was interrupted before it finished.
    #[error("Request cancelled.")]
    Cancelled,
}

impl CliError {
    /// Process exit status for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Domain(error) => match error.code() {
                ErrorCode::InvalidRequest => 2,
                ErrorCode::Unauthorized => 3,
                ErrorCode::NotFound => 4,
                _ => 1,
            },
            Self::Output(_) => 1,
            Self::Cancelled => 130,
        }
    }
}

/// Every service the command line drives, over one gateway implementation.
pub struct CliApp<G> {
    session: Arc<SessionStore>,
    auth: AuthService<G>,
    venues: VenueService<G>,
    bookings: BookingService<G>,
    profiles: ProfileService<G, G>,
}

impl<G> CliApp<G>
where
    G: AuthGateway + VenueGateway + BookingGateway + ProfileGateway + 'static,
{
    /// Wire the services around `gateway` and the shared `session` store.
    #[must_use]
    pub fn new(gateway: Arc<G>, session: Arc<SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            auth: AuthService::new(Arc::clone(&gateway), Arc::clone(&session)),
            venues: VenueService::new(Arc::clone(&gateway), Arc::clone(&session)),
            bookings: BookingService::new(Arc::clone(&gateway), Arc::clone(&session), clock),
            profiles: ProfileService::new(Arc::clone(&gateway), gateway, Arc::clone(&session)),
            session,
        }
    }

    /// Run `command`, rendering its result to `out`.
    ///
    /// # Errors
    ///
    /// Returns the use-case failure, or an I/O error from `out`.
    pub async fn execute<W: Write + Send>(
        &self,
        command: Command,
        out: &mut W,
    ) -> Result<(), CliError> {
        match command {
            Command::Register(args) => {
                let profile = self.auth.register(args.into()).await?;
                writeln!(
                    out,
                    "Registered {}. Log in with `holidaze login` to continue.",
                    profile.name
                )?;
            }
            Command::Login(args) => {
                let session = self.auth.login(&args.email, &args.password).await?;
                writeln!(out, "Logged in as {}.", session.name)?;
            }
            Command::Logout => {
                self.auth.logout()?;
                writeln!(out, "Logged out.")?;
            }
            Command::Whoami => render::session(out, self.session.current().as_ref())?,
            Command::Venues(action) => self.venues(action, out).await?,
            Command::Book(args) => {
                let booking = self
                    .bookings
                    .book(VenueId::new(args.venue), args.stay.into())
                    .await?;
                write!(out, "Booked: ")?;
                render::booking_line(out, &booking)?;
            }
            Command::Bookings(action) => self.bookings(action, out).await?,
            Command::Profile(action) => self.profile(action, out).await?,
        }
        Ok(())
    }

    async fn venues<W: Write + Send>(
        &self,
        command: VenuesCommand,
        out: &mut W,
    ) -> Result<(), CliError> {
        match command {
            VenuesCommand::List { search } => {
                render::venue_list(out, &self.venues.list(&search).await?)?;
            }
            VenuesCommand::Show { id } => {
                render::venue_details(out, &self.venues.details(&VenueId::new(id)).await?)?;
            }
            VenuesCommand::Create(args) => {
                let venue = self.venues.create(args.into()).await?;
                write!(out, "Created: ")?;
                render::venue_line(out, &venue)?;
            }
            VenuesCommand::Update(args) => {
                let id = VenueId::new(args.id.clone());
                let venue = self.venues.update(&id, args.into()).await?;
                write!(out, "Updated: ")?;
                render::venue_line(out, &venue)?;
            }
            VenuesCommand::Delete { id: raw } => {
                let id = VenueId::new(raw);
                self.venues.delete(&id).await?;
                writeln!(out, "Deleted venue {id}.")?;
            }
            VenuesCommand::Mine => {
                render::venue_list(out, &self.venues.owned_venues().await?)?;
            }
            VenuesCommand::ByUser { user } => {
                render::venue_list(out, &self.venues.user_venues(&user).await?)?;
            }
        }
        Ok(())
    }

    async fn bookings<W: Write + Send>(
        &self,
        command: BookingsCommand,
        out: &mut W,
    ) -> Result<(), CliError> {
        let mut mine = self.bookings.my_bookings();
        mine.load().await?;
        match command {
            BookingsCommand::List => {}
            BookingsCommand::Update { id, stay } => {
                let booking = mine.update(&BookingId::new(id), stay.into()).await?;
                write!(out, "Updated: ")?;
                render::booking_line(out, booking)?;
                writeln!(out)?;
            }
            BookingsCommand::Delete { id: raw } => {
                let id = BookingId::new(raw);
                mine.delete(&id).await?;
                writeln!(out, "Deleted booking {id}.")?;
                writeln!(out)?;
            }
        }
        render::booking_list(out, mine.bookings())?;
        Ok(())
    }

    async fn profile<W: Write + Send>(
        &self,
        command: ProfileCommand,
        out: &mut W,
    ) -> Result<(), CliError> {
        match command {
            ProfileCommand::Show => render::overview(out, &self.profiles.overview().await?)?,
            ProfileCommand::Avatar { url } => {
                let profile = self.profiles.update_avatar(&url).await?;
                writeln!(out, "Avatar updated.")?;
                render::profile(out, &profile)?;
            }
        }
        Ok(())
    }
}

/// Run `command` as a [`FetchTask`] that Ctrl-C cancels, then copy its output
/// to `out`.
///
/// # Errors
///
/// [`CliError::Cancelled`] when interrupted; otherwise the command's failure.
/// Output produced before a failure is still written.
pub async fn run<G, W>(app: Arc<CliApp<G>>, command: Command, out: &mut W) -> Result<(), CliError>
where
    G: AuthGateway + VenueGateway + BookingGateway + ProfileGateway + 'static,
    W: Write,
{
    let task = FetchTask::spawn(async move {
        let mut buffer = Vec::new();
        let result = app.execute(command, &mut buffer).await;
        (buffer, result)
    });

    let token = task.cancellation_token();
    let interrupt = tokio::spawn(async move {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => {
                    warn!("interrupted; cancelling the request");
                    token.cancel();
                }
                Err(error) => debug!(error = %error, "Ctrl-C handler unavailable"),
            },
            () = token.cancelled() => {}
        }
    });

    let outcome = task.outcome().await;
    interrupt.abort();

    let (buffer, result) = outcome.ok_or(CliError::Cancelled)?;
    out.write_all(&buffer)?;
    out.flush()?;
    result
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
