use std::io::{self, IsTerminal};

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};

use fleet_cli::cli::Cli;
use fleet_cli::{logging, output};
use fleet_core::services::fleet::FleetProber;
use fleet_core::services::{credentials, roster_loader};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _guard = logging::init(cli.debug);

    // Everything up to the fan-out is fatal; after it, failures are per server.
    let credentials =
        credentials::load(cli.env_file.as_deref()).wrap_err("could not load hub credentials")?;
    let roster = roster_loader::load(&cli.roster)
        .wrap_err_with(|| format!("could not load roster from {}", cli.roster.display()))?;
    let roster = cli.roster_filter().apply(roster);
    tracing::debug!(servers = roster.len(), roster = %cli.roster.display(), "roster_loaded");

    let prober = FleetProber::new(&cli.probe_config(), credentials)?;

    let snapshot = tokio::select! {
        snapshot = prober.run(roster) => snapshot,
        _ = tokio::signal::ctrl_c() => {
            return Err(eyre!("interrupted while probing the fleet"));
        }
    };

    let report = snapshot.report();
    let mut stdout = io::stdout().lock();
    let color = !cli.no_color && io::stdout().is_terminal();
    output::print_report(&report, cli.format, color, &mut stdout)?;

    Ok(())
}
