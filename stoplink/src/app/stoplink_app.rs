use clap::Subcommand;
use std::path::Path;
use stoplink_core::model::network::Network;

use super::CandidateWriter;
use crate::{
    algorithm::create_link_candidates,
    config::LinkCandidateConfiguration,
    model::{cost::ModeCostOracles, schedule::TransitSchedule, StoplinkCliError},
};

#[derive(Subcommand)]
pub enum App {
    /// finds the link candidates of every stop facility in a transit schedule
    Candidates {
        #[arg(long, help = "path to transit schedule JSON file")]
        schedule_file: String,
        #[arg(long, help = "path to network JSON file")]
        network_file: String,
        #[arg(long, help = "path to TOML or JSON file with link candidate parameters")]
        configuration_file: String,
        #[arg(long, help = "output path for link candidate dataset")]
        output_directory: String,
        #[arg(long, default_value_t = false, help = "overwrite existing output files")]
        overwrite: bool,
    },
}

pub fn run(app: &App) -> Result<(), StoplinkCliError> {
    match app {
        App::Candidates {
            schedule_file,
            network_file,
            configuration_file,
            output_directory,
            overwrite,
        } => {
            log::info!("reading link candidate configuration from {configuration_file}");
            let conf = LinkCandidateConfiguration::try_from(configuration_file)?;
            log::info!("reading transit schedule from {schedule_file}");
            let schedule = TransitSchedule::try_from(Path::new(schedule_file))?;
            log::info!("reading network from {network_file}");
            let mut network = Network::try_from(Path::new(network_file))?;
            log::info!(
                "loaded {} stop facilities, {} nodes and {} links",
                schedule.n_facilities(),
                network.n_nodes(),
                network.n_links()
            );

            let oracles = ModeCostOracles::new(&conf);
            let output = create_link_candidates(&schedule, &mut network, &conf, &oracles)?;
            for diagnostic in output.diagnostics.iter() {
                log::warn!("{diagnostic}");
            }

            let out_path = Path::new(output_directory);
            match output.write_candidates(&network, out_path, *overwrite) {
                Ok(_) => {
                    eprintln!("finished.");
                    Ok(())
                }
                Err(e) => {
                    log::error!("stoplink failed: {e}");
                    Err(e)
                }
            }
        }
    }
}
