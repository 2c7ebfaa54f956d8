//! Waypoint command-line application.
//!
//! Runs trip planning commands against the local database, or serves the
//! REST API with `waypoint serve`.

mod args;
mod cli;
mod renderer;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint::http;
use waypoint_core::{LinkConfig, TripPlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        api_base_url,
        web_base_url,
        command,
    } = Args::parse();

    let planner = TripPlannerBuilder::new()
        .with_database_path(database_file)
        .with_links(LinkConfig::new(api_base_url, web_base_url))
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started");

    match command {
        Some(Trip { command }) => {
            Cli::new(planner, renderer)
                .handle_trip_command(command)
                .await
        }
        Some(Guest { command }) => {
            Cli::new(planner, renderer)
                .handle_guest_command(command)
                .await
        }
        Some(Activity { command }) => {
            Cli::new(planner, renderer)
                .handle_activity_command(command)
                .await
        }
        Some(Link { command }) => {
            Cli::new(planner, renderer)
                .handle_link_command(command)
                .await
        }
        Some(Serve(args)) => {
            http::serve(planner, SocketAddr::new(args.host, args.port))
                .await
                .context("HTTP server failed")
        }
        None => Cli::new(planner, renderer).list_trips().await,
    }
}
