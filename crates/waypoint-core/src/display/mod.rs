//! Markdown formatting for domain models and operation results.
//!
//! Domain models implement [`Display`](std::fmt::Display) directly, or through
//! [`InZone`] when they carry timestamps; groups of them and the outcome of an
//! operation go through the wrapper types here so the CLI renders everything
//! the same way.
//!
//! - [`collections`]: trip listings, guest lists, links and the day agenda
//! - [`headline`]: the one-line trip summary
//! - [`results`]: create and update outcomes
//! - [`status`]: plain success messages
//! - [`datetime`]: timestamp formatting
//!
//! ```rust
//! use waypoint_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Trip confirmed");
//! assert_eq!(status.to_string(), "Success: Trip confirmed\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod headline;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Agenda, Links, Participants, TripSummaries};
pub use datetime::LocalDateTime;
pub use headline::TripHeadline;
pub use models::{InZone, ZonedDisplay};
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
