use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{LinkCandidateParams, ManualLinkCandidates};
use crate::model::LinkCandidateError;

/// defines behaviors for link candidate creation
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct LinkCandidateConfiguration {
    /// prefix for ids of artificial nodes and links added to the network
    #[serde(default = "LinkCandidateConfiguration::default_prefix_artificial")]
    pub prefix_artificial: String,
    /// search parameters by schedule transport mode
    #[serde(default)]
    pub modes: BTreeMap<String, LinkCandidateParams>,
    /// applied in declaration order after the automatic search
    #[serde(default)]
    pub manual_link_candidates: Vec<ManualLinkCandidates>,
    /// search for link candidates of (mode, stop facility) pairs in parallel
    #[serde(default = "LinkCandidateConfiguration::default_parallelize")]
    pub parallelize: bool,
}

impl Default for LinkCandidateConfiguration {
    fn default() -> Self {
        Self {
            prefix_artificial: Self::default_prefix_artificial(),
            modes: BTreeMap::new(),
            manual_link_candidates: vec![],
            parallelize: Self::default_parallelize(),
        }
    }
}

impl LinkCandidateConfiguration {
    /// parameters for a schedule mode. a schedule mode without parameters cannot
    /// be matched, which fails the whole run.
    pub fn get_params(&self, schedule_mode: &str) -> Result<&LinkCandidateParams, LinkCandidateError> {
        self.modes
            .get(schedule_mode)
            .ok_or_else(|| LinkCandidateError::MissingConfiguration(String::from(schedule_mode)))
    }

    pub fn validate(&self) -> Result<(), LinkCandidateError> {
        if self.prefix_artificial.is_empty() {
            return Err(LinkCandidateError::ConfigurationError(String::from(
                "prefix_artificial must not be empty",
            )));
        }
        for (schedule_mode, params) in self.modes.iter() {
            params.validate(schedule_mode)?;
        }
        Ok(())
    }

    fn default_prefix_artificial() -> String {
        String::from("pt_")
    }

    fn default_parallelize() -> bool {
        true
    }
}

impl TryFrom<&String> for LinkCandidateConfiguration {
    type Error = LinkCandidateError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                LinkCandidateError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                LinkCandidateError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                LinkCandidateError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                LinkCandidateError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(LinkCandidateError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
