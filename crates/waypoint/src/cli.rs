//! Command definitions and their execution.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so the core crate stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Forms / Core Params → TripPlanner
//! ```
//!
//! Trip and activity creation go through the same form helpers a graphical
//! client uses ([`TripWizard`], [`ActivityDraft`], [`LinkDraft`]), so the CLI
//! enforces the same completeness rules.

use std::net::IpAddr;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use jiff::civil::Date;
use waypoint_core::{
    display::{Agenda, InZone, OperationStatus, TripHeadline},
    forms::{ActivityDraft, LinkDraft, TripWizard},
    params::{CreateInvite, Id, UpdateTrip},
    schedule, Trip, TripError, TripPlanner,
};

use crate::renderer::TerminalRenderer;

/// Create a trip
///
/// Runs the trip creation form: destination and dates first, then the guest
/// list. The owner receives an email with a confirmation link; guests are
/// invited once the trip is confirmed.
#[derive(Args)]
pub struct CreateTripArgs {
    /// Where the trip goes
    pub destination: String,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub from: Date,
    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub to: Date,
    /// Guest email to invite; repeat or separate with commas
    #[arg(short, long = "guest", value_delimiter = ',')]
    pub guests: Vec<String>,
    /// Your full name
    #[arg(long, env = "WAYPOINT_OWNER_NAME")]
    pub owner_name: String,
    /// Your email, where the confirmation link is sent
    #[arg(long, env = "WAYPOINT_OWNER_EMAIL")]
    pub owner_email: String,
}

/// Show everything about a trip: guests, activities by day and links
#[derive(Args)]
pub struct ShowTripArgs {
    #[arg(help = "Unique identifier of the trip to show")]
    pub id: u64,
}

impl From<ShowTripArgs> for Id {
    fn from(val: ShowTripArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change a trip's destination and dates
#[derive(Args)]
pub struct UpdateTripArgs {
    #[arg(help = "Unique identifier of the trip to update")]
    pub id: u64,
    /// New destination
    pub destination: String,
    /// New first day (YYYY-MM-DD)
    #[arg(long)]
    pub from: Date,
    /// New last day (YYYY-MM-DD)
    #[arg(long)]
    pub to: Date,
}

/// Confirm a trip, as the owner's emailed link does
///
/// Guests are emailed their own confirmation links on the first
/// confirmation.
#[derive(Args)]
pub struct ConfirmTripArgs {
    #[arg(help = "Unique identifier of the trip to confirm")]
    pub id: u64,
}

impl From<ConfirmTripArgs> for Id {
    fn from(val: ConfirmTripArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a trip
    #[command(alias = "c")]
    Create(CreateTripArgs),
    /// List all trips
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a trip with its guests, activities and links
    #[command(alias = "s")]
    Show(ShowTripArgs),
    /// Change a trip's destination and dates
    #[command(alias = "u")]
    Update(UpdateTripArgs),
    /// Confirm a trip and invite its guests
    Confirm(ConfirmTripArgs),
}

/// Trip whose guests to list
#[derive(Args)]
pub struct ListGuestsArgs {
    #[arg(help = "Unique identifier of the trip")]
    pub trip_id: u64,
}

impl From<ListGuestsArgs> for Id {
    fn from(val: ListGuestsArgs) -> Self {
        Id { id: val.trip_id }
    }
}

/// Invite a guest by email
#[derive(Args)]
pub struct InviteGuestArgs {
    #[arg(help = "Unique identifier of the trip to invite the guest to")]
    pub trip_id: u64,
    /// Guest email address
    pub email: String,
}

impl From<InviteGuestArgs> for CreateInvite {
    fn from(val: InviteGuestArgs) -> Self {
        CreateInvite {
            trip_id: val.trip_id,
            email: val.email,
        }
    }
}

/// A single guest
#[derive(Args)]
pub struct GuestArgs {
    #[arg(help = "Unique identifier of the guest")]
    pub id: u64,
}

impl From<GuestArgs> for Id {
    fn from(val: GuestArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum GuestCommands {
    /// List the owner and guests of a trip
    #[command(aliases = ["l", "ls"])]
    List(ListGuestsArgs),
    /// Invite a guest; they are emailed a confirmation link
    #[command(alias = "i")]
    Invite(InviteGuestArgs),
    /// Show a single guest
    #[command(alias = "s")]
    Show(GuestArgs),
    /// Confirm a guest's attendance, as their emailed link does
    Confirm(GuestArgs),
}

/// Schedule an activity
#[derive(Args)]
pub struct AddActivityArgs {
    #[arg(help = "Unique identifier of the trip")]
    pub trip_id: u64,
    /// What happens
    pub title: String,
    /// Day of the activity (YYYY-MM-DD), between today and the trip's end
    #[arg(long)]
    pub date: Date,
    /// Hour of the activity, 0 to 23
    #[arg(long)]
    pub hour: String,
}

/// Trip whose activities to list
#[derive(Args)]
pub struct ListActivitiesArgs {
    #[arg(help = "Unique identifier of the trip")]
    pub trip_id: u64,
}

impl From<ListActivitiesArgs> for Id {
    fn from(val: ListActivitiesArgs) -> Self {
        Id { id: val.trip_id }
    }
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Schedule an activity
    #[command(alias = "a")]
    Add(AddActivityArgs),
    /// List a trip's activities day by day
    #[command(aliases = ["l", "ls"])]
    List(ListActivitiesArgs),
}

/// Share an important link
#[derive(Args)]
pub struct AddLinkArgs {
    #[arg(help = "Unique identifier of the trip")]
    pub trip_id: u64,
    /// Short label, e.g. "Airbnb booking"
    pub title: String,
    /// Absolute http(s) URL
    pub url: String,
}

impl From<AddLinkArgs> for LinkDraft {
    fn from(val: AddLinkArgs) -> Self {
        LinkDraft {
            title: val.title,
            url: val.url,
        }
    }
}

/// Trip whose links to list
#[derive(Args)]
pub struct ListLinksArgs {
    #[arg(help = "Unique identifier of the trip")]
    pub trip_id: u64,
}

impl From<ListLinksArgs> for Id {
    fn from(val: ListLinksArgs) -> Self {
        Id { id: val.trip_id }
    }
}

#[derive(Subcommand)]
pub enum LinkCommands {
    /// Share an important link
    #[command(alias = "a")]
    Add(AddLinkArgs),
    /// List a trip's links
    #[command(aliases = ["l", "ls"])]
    List(ListLinksArgs),
}

/// Start the REST API server
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3333)]
    pub port: u16,
}

/// Executes CLI commands against a planner and renders the output.
pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: TripPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Create(args) => self.create_trip(args).await,
            TripCommands::List => self.list_trips().await,
            TripCommands::Show(args) => self.show_trip(&args.into()).await,
            TripCommands::Update(args) => self.update_trip(args).await,
            TripCommands::Confirm(args) => self.confirm_trip(&args.into()).await,
        }
    }

    pub async fn handle_guest_command(&self, command: GuestCommands) -> Result<()> {
        match command {
            GuestCommands::List(args) => {
                let participants = self
                    .planner
                    .show_participants(&args.into())
                    .await
                    .context("Failed to list guests")?;
                self.renderer.render(&participants.to_string())
            }
            GuestCommands::Invite(args) => {
                let result = self
                    .planner
                    .create_invite_result(&args.into())
                    .await
                    .context("Failed to invite guest")?;
                self.renderer.render(&result.to_string())
            }
            GuestCommands::Show(args) => {
                let id = Id::from(args);
                let Some(participant) = self
                    .planner
                    .get_participant(&id)
                    .await
                    .context("Failed to get guest")?
                else {
                    bail!("Guest {} not found", id.id);
                };
                self.renderer.render(&participant.to_string())
            }
            GuestCommands::Confirm(args) => {
                let id = Id::from(args);
                self.planner
                    .confirm_participant(&id)
                    .await
                    .context("Failed to confirm guest")?;
                self.renderer.render(
                    &OperationStatus::success(format!("Guest {} confirmed", id.id)).to_string(),
                )
            }
        }
    }

    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::Add(args) => self.add_activity(args).await,
            ActivityCommands::List(args) => {
                let days = self
                    .planner
                    .get_activities(&args.into())
                    .await
                    .context("Failed to list activities")?;
                let agenda = Agenda::new(&days, self.planner.time_zone());
                self.renderer.render(&agenda.to_string())
            }
        }
    }

    pub async fn handle_link_command(&self, command: LinkCommands) -> Result<()> {
        match command {
            LinkCommands::Add(args) => {
                let trip_id = args.trip_id;
                let params = LinkDraft::from(args).into_params(trip_id)?;
                let result = self
                    .planner
                    .create_link_result(&params)
                    .await
                    .context("Failed to add link")?;
                self.renderer.render(&result.to_string())
            }
            LinkCommands::List(args) => {
                let links = self
                    .planner
                    .show_links(&args.into())
                    .await
                    .context("Failed to list links")?;
                self.renderer.render(&links.to_string())
            }
        }
    }

    /// Lists every trip; also the default command.
    pub async fn list_trips(&self) -> Result<()> {
        let trips = self
            .planner
            .list_trips_summary()
            .await
            .context("Failed to list trips")?;
        self.renderer.render(&trips.to_string())
    }

    async fn create_trip(&self, args: CreateTripArgs) -> Result<()> {
        if args.to < args.from {
            return Err(TripError::invalid_input("ends_at")
                .with_reason("Invalid trip end date.")
                .into());
        }

        let tz = self.planner.time_zone().clone();
        let mut wizard = TripWizard::new(schedule::today(&tz), tz);

        wizard.set_destination(args.destination)?;
        wizard.select_day(args.from)?;
        wizard.select_day(args.to)?;
        wizard.next()?;
        for email in &args.guests {
            wizard.add_email(email)?;
        }
        let params = wizard.finish(&args.owner_name, &args.owner_email)?;

        let result = self
            .planner
            .create_trip_result(&params)
            .await
            .context("Failed to create trip")?;

        self.renderer.render(&result.to_string())?;
        self.renderer.render(
            &OperationStatus::success(format!(
                "A confirmation link was sent to {}",
                params.owner_email
            ))
            .to_string(),
        )
    }

    async fn show_trip(&self, id: &Id) -> Result<()> {
        let trip = self.require_trip(id).await?;
        let participants = self.planner.show_participants(id).await?;
        let days = self.planner.get_activities(id).await?;
        let links = self.planner.show_links(id).await?;
        let tz = self.planner.time_zone();

        let mut output = format!(
            "{}\n{}\n\n",
            InZone(&trip, tz),
            TripHeadline::new(&trip, tz)
        );
        output.push_str(&Agenda::new(&days, tz).to_string());
        output.push('\n');
        output.push_str(&links.to_string());
        output.push('\n');
        output.push_str(&participants.to_string());

        self.renderer.render(&output)
    }

    async fn update_trip(&self, args: UpdateTripArgs) -> Result<()> {
        let (starts_at, ends_at) =
            schedule::whole_days(args.from, args.to, self.planner.time_zone())?;
        let params = UpdateTrip {
            trip_id: args.id,
            destination: args.destination,
            starts_at,
            ends_at,
        };

        let result = self
            .planner
            .update_trip_result(&params)
            .await
            .context("Failed to update trip")?;
        self.renderer.render(&result.to_string())
    }

    async fn confirm_trip(&self, id: &Id) -> Result<()> {
        let confirmation = self
            .planner
            .confirm_trip(id)
            .await
            .context("Failed to confirm trip")?;
        let message = match confirmation.invited {
            Some(1) => format!("Trip {} confirmed; 1 guest was invited", id.id),
            Some(n) => format!("Trip {} confirmed; {n} guests were invited", id.id),
            None => format!("Trip {} was already confirmed; no invitations sent", id.id),
        };
        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }

    async fn add_activity(&self, args: AddActivityArgs) -> Result<()> {
        let trip = self.require_trip(&Id { id: args.trip_id }).await?;
        let tz = self.planner.time_zone();

        ActivityDraft::bounds(&trip, schedule::today(tz), tz).check("date", args.date)?;

        let draft = ActivityDraft {
            title: args.title,
            date: Some(args.date),
            hour: args.hour,
        };
        let params = draft.into_params(trip.id, tz)?;

        let result = self
            .planner
            .create_activity_result(&params)
            .await
            .context("Failed to add activity")?;
        self.renderer.render(&result.to_string())
    }

    async fn require_trip(&self, id: &Id) -> Result<Trip> {
        match self.planner.get_trip(id).await.context("Failed to get trip")? {
            Some(trip) => Ok(trip),
            None => bail!("Trip {} not found", id.id),
        }
    }
}
