//! Command-line grammar.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::{BookingForm, Location, RegistrationForm, VenueForm, VenueUpdateForm};

/// `holidaze` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "holidaze",
    about = "Browse, book and manage Holidaze venues from the terminal",
    version
)]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level operations.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create an account. Does not log in.
    Register(RegisterArgs),
    /// Log in and remember the session.
    Login(LoginArgs),
    /// Forget the stored session.
    Logout,
    /// Show the logged-in profile.
    Whoami,
    /// Browse and manage venues.
    #[command(subcommand)]
    Venues(VenuesCommand),
    /// Book a venue.
    Book(BookArgs),
    /// Review and change your bookings.
    #[command(subcommand)]
    Bookings(BookingsCommand),
    /// Show your profile or change your avatar.
    #[command(subcommand)]
    Profile(ProfileCommand),
}

/// `register` arguments.
#[derive(Debug, Clone, Args)]
pub struct RegisterArgs {
    /// Profile name (letters, numbers and underscores).
    #[arg(long)]
    pub name: String,
    /// A stud.noroff.no or noroff.no address.
    #[arg(long)]
    pub email: String,
    /// Password, at least eight characters.
    #[arg(long, env = "HOLIDAZE_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Password again.
    #[arg(long = "confirm-password", env = "HOLIDAZE_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm_password: String,
    /// Avatar image URL.
    #[arg(long)]
    pub avatar: Option<String>,
    /// Register as a venue manager.
    #[arg(long)]
    pub venue_manager: bool,
}

impl From<RegisterArgs> for RegistrationForm {
    fn from(args: RegisterArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            password: args.password,
            confirm_password: args.confirm_password,
            avatar: args.avatar,
            venue_manager: args.venue_manager,
        }
    }
}

/// `login` arguments.
#[derive(Debug, Clone, Args)]
pub struct LoginArgs {
    /// A stud.noroff.no address.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long, env = "HOLIDAZE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// `venues` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum VenuesCommand {
    /// List venues, optionally filtered by name.
    List {
        /// Case-insensitive name filter.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show one venue with its bookings.
    Show {
        /// Venue identifier.
        id: String,
    },
    /// Create a venue.
    Create(CreateVenueArgs),
    /// Update a venue.
    Update(UpdateVenueArgs),
    /// Delete a venue.
    Delete {
        /// Venue identifier.
        id: String,
    },
    /// List the venues you own.
    Mine,
    /// List the venues of another profile.
    ByUser {
        /// Profile name.
        user: String,
    },
}

/// `venues create` arguments.
#[derive(Debug, Clone, Args)]
pub struct CreateVenueArgs {
    /// Venue name (letters, numbers and underscores).
    #[arg(long)]
    pub name: String,
    /// Description.
    #[arg(long)]
    pub description: String,
    /// Nightly price, at least 1.
    #[arg(long)]
    pub price: f64,
    /// Guest capacity.
    #[arg(long)]
    pub max_guests: i64,
    /// Rating from 0 to 5.
    #[arg(long)]
    pub rating: Option<f64>,
    /// Image URL.
    #[arg(long)]
    pub media: Option<String>,
    /// Street address.
    #[arg(long)]
    pub address: Option<String>,
    /// City.
    #[arg(long)]
    pub city: Option<String>,
    /// Postal code.
    #[arg(long)]
    pub zip: Option<String>,
    /// Country.
    #[arg(long)]
    pub country: Option<String>,
    /// Continent.
    #[arg(long)]
    pub continent: Option<String>,
}

impl From<CreateVenueArgs> for VenueForm {
    fn from(args: CreateVenueArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            media: args.media,
            price: args.price,
            max_guests: args.max_guests,
            rating: args.rating,
            location: Location {
                address: args.address,
                city: args.city,
                zip: args.zip,
                country: args.country,
                continent: args.continent,
            },
        }
    }
}

/// `venues update` arguments. Omitted options keep the venue's current
/// values.
#[derive(Debug, Clone, Args)]
pub struct UpdateVenueArgs {
    /// Venue identifier.
    pub id: String,
    /// Venue name.
    #[arg(long)]
    pub name: Option<String>,
    /// Description; pass an empty string to clear it.
    #[arg(long)]
    pub description: Option<String>,
    /// Nightly price.
    #[arg(long)]
    pub price: Option<f64>,
    /// Guest capacity.
    #[arg(long)]
    pub max_guests: Option<i64>,
    /// Replacement image URL.
    #[arg(long)]
    pub media: Option<String>,
}

impl From<UpdateVenueArgs> for VenueUpdateForm {
    fn from(args: UpdateVenueArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            price: args.price,
            max_guests: args.max_guests,
            media: args.media,
        }
    }
}

/// Dates and guest count shared by `book` and `bookings update`.
#[derive(Debug, Clone, Copy, Args)]
pub struct StayArgs {
    /// Check-in date (YYYY-MM-DD).
    #[arg(long = "from")]
    pub date_from: NaiveDate,
    /// Check-out date (YYYY-MM-DD).
    #[arg(long = "to")]
    pub date_to: NaiveDate,
    /// Number of guests.
    #[arg(long)]
    pub guests: i64,
}

impl From<StayArgs> for BookingForm {
    fn from(args: StayArgs) -> Self {
        Self {
            date_from: args.date_from,
            date_to: args.date_to,
            guests: args.guests,
        }
    }
}

/// `book` arguments.
#[derive(Debug, Clone, Args)]
pub struct BookArgs {
    /// Venue identifier.
    pub venue: String,
    /// Stay details.
    #[command(flatten)]
    pub stay: StayArgs,
}

/// `bookings` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum BookingsCommand {
    /// List your bookings.
    List,
    /// Change the dates or guests of a booking.
    Update {
        /// Booking identifier.
        id: String,
        /// New stay details.
        #[command(flatten)]
        stay: StayArgs,
    },
    /// Cancel a booking.
    Delete {
        /// Booking identifier.
        id: String,
    },
}

/// `profile` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ProfileCommand {
    /// Show your profile and the venues you manage.
    Show,
    /// Change your avatar.
    Avatar {
        /// Absolute image URL.
        url: String,
    },
}
