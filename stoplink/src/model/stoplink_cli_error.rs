use super::{schedule::ScheduleError, LinkCandidateError};
use stoplink_core::model::network::NetworkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoplinkCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure building link candidates: {source}")]
    LinkCandidateError {
        #[from]
        source: LinkCandidateError,
    },
    #[error("failure reading network: {source}")]
    NetworkError {
        #[from]
        source: NetworkError,
    },
    #[error("failure reading schedule: {source}")]
    ScheduleError {
        #[from]
        source: ScheduleError,
    },
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure writing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
