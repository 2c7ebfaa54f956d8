//! Waypoint application library: the REST API over [`waypoint_core`].

pub mod http;
