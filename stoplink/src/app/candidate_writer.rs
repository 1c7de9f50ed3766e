use std::{fs::File, path::Path};

use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use kdam::tqdm;
use serde::Serialize;
use stoplink_core::model::network::Network;
use wkt::ToWkt;

use crate::{algorithm::LinkCandidateOutput, model::StoplinkCliError};

pub trait CandidateWriter {
    /// writes the link candidates and the artificial links as gzipped CSV
    /// files to a shared directory.
    fn write_candidates(
        &self,
        network: &Network,
        output_directory: &Path,
        overwrite: bool,
    ) -> Result<(), StoplinkCliError>;
}

mod filenames {
    pub const LINK_CANDIDATES: &str = "link-candidates.csv.gz";
    pub const ARTIFICIAL_LINKS: &str = "artificial-links.csv.gz";
}

/// one candidate of a (schedule mode, stop facility) pair. rank 0 is the cheapest.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LinkCandidateRow {
    pub schedule_mode: String,
    pub stop_facility_id: String,
    pub rank: usize,
    pub link_id: String,
    pub cost: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ArtificialLinkRow {
    pub link_id: String,
    pub from_node_id: String,
    pub to_node_id: String,
    pub length: f64,
    pub geometry: String,
}

impl CandidateWriter for LinkCandidateOutput {
    fn write_candidates(
        &self,
        network: &Network,
        output_directory: &Path,
        overwrite: bool,
    ) -> Result<(), StoplinkCliError> {
        if !output_directory.is_dir() {
            std::fs::create_dir_all(output_directory)?;
        }

        if let Some(mut writer) = create_writer(
            output_directory,
            filenames::LINK_CANDIDATES,
            true,
            QuoteStyle::Necessary,
            overwrite,
        )? {
            let entries = tqdm!(
                self.store.iter(),
                total = self.store.n_entries(),
                desc = "write link candidates"
            );
            for (schedule_mode, stop_facility_id, candidates) in entries {
                for (rank, candidate) in candidates.iter().enumerate() {
                    let row = LinkCandidateRow {
                        schedule_mode: schedule_mode.clone(),
                        stop_facility_id: stop_facility_id.to_string(),
                        rank,
                        link_id: candidate.link_id().to_string(),
                        cost: candidate.cost(),
                    };
                    writer.serialize(row).map_err(|e| {
                        StoplinkCliError::CsvWriteError(String::from(filenames::LINK_CANDIDATES), e)
                    })?;
                }
            }
            eprintln!();
            finish_writer(writer)?;
        } else {
            log::warn!(
                "{} exists and overwrite is disabled, skipping",
                filenames::LINK_CANDIDATES
            );
        }

        if let Some(mut writer) = create_writer(
            output_directory,
            filenames::ARTIFICIAL_LINKS,
            true,
            QuoteStyle::Necessary,
            overwrite,
        )? {
            for link_id in self.artificial_links.iter() {
                let link = network.get_link(link_id).ok_or_else(|| {
                    StoplinkCliError::ConfigurationError(format!(
                        "artificial link {link_id} missing from network"
                    ))
                })?;
                let line = network.link_line(link)?;
                let row = ArtificialLinkRow {
                    link_id: link.id.to_string(),
                    from_node_id: link.from_node_id.to_string(),
                    to_node_id: link.to_node_id.to_string(),
                    length: link.length,
                    geometry: line.wkt_string(),
                };
                writer.serialize(row).map_err(|e| {
                    StoplinkCliError::CsvWriteError(String::from(filenames::ARTIFICIAL_LINKS), e)
                })?;
            }
            finish_writer(writer)?;
        } else {
            log::warn!(
                "{} exists and overwrite is disabled, skipping",
                filenames::ARTIFICIAL_LINKS
            );
        }
        Ok(())
    }
}

/// opens a gzipped CSV writer, or `None` when the file exists and may not be overwritten.
fn create_writer(
    directory: &Path,
    filename: &str,
    has_headers: bool,
    quote_style: QuoteStyle,
    overwrite: bool,
) -> Result<Option<csv::Writer<GzEncoder<File>>>, StoplinkCliError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        return Ok(None);
    }
    let file = File::create(filepath)?;
    let buffer = GzEncoder::new(file, Compression::default());
    let writer = csv::WriterBuilder::new()
        .has_headers(has_headers)
        .quote_style(quote_style)
        .from_writer(buffer);
    Ok(Some(writer))
}

/// flushes the CSV buffer and writes the gzip trailer.
fn finish_writer(writer: csv::Writer<GzEncoder<File>>) -> Result<(), StoplinkCliError> {
    let encoder = writer.into_inner().map_err(|e| e.into_error())?;
    encoder.finish()?;
    Ok(())
}
