use thiserror::Error;

use super::ProviderChain;
use crate::{
    entities::{Coordinates, ProviderKind},
    gateways::geocode::ProviderError,
};

/// Each provider is asked for its best match only.
pub const RESULT_LIMIT: usize = 1;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("None of the geocoding providers was able to locate the address")]
pub struct NotFound;

#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Found(Coordinates),
    NoResult,
    /// The provider failed for another reason than "no result".
    /// This is treated like "no result" but kept for diagnostics.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub provider: ProviderKind,
    pub outcome: AttemptOutcome,
}

/// What happened while walking down the provider chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallbackReport {
    pub attempts: Vec<Attempt>,
}

impl FallbackReport {
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.attempts.iter().find_map(|attempt| match attempt.outcome {
            AttemptOutcome::Found(pos) => Some(pos),
            _ => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (ProviderKind, &str)> {
        self.attempts
            .iter()
            .filter_map(|attempt| match &attempt.outcome {
                AttemptOutcome::Failed(reason) => Some((attempt.provider, reason.as_str())),
                _ => None,
            })
    }
}

pub fn geocode_with_fallback(chain: &ProviderChain, text: &str) -> Result<Coordinates, NotFound> {
    geocode_with_report(chain, text).coordinates().ok_or(NotFound)
}

/// Ask one provider after the other until the first one finds the address.
pub fn geocode_with_report(chain: &ProviderChain, text: &str) -> FallbackReport {
    let mut report = FallbackReport::default();
    for instance in chain.iter() {
        let provider = instance.kind();
        let outcome = match instance.provider().geocode(text, RESULT_LIMIT) {
            Ok(results) => match results.into_iter().next() {
                Some(pos) => AttemptOutcome::Found(pos),
                None => AttemptOutcome::NoResult,
            },
            Err(ProviderError::NoResult) => AttemptOutcome::NoResult,
            Err(err) => {
                log::warn!("Geocoding provider '{provider}' failed: {err}");
                AttemptOutcome::Failed(err.to_string())
            }
        };
        log::debug!("Geocoding provider '{provider}' answered {outcome:?}");
        let found = matches!(outcome, AttemptOutcome::Found(_));
        report.attempts.push(Attempt { provider, outcome });
        if found {
            break;
        }
    }
    report
}
