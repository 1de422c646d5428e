//! Outbound reporting seam.
//!
//! After a survey is saved the app forwards the beekeeper's profile together
//! with their most recent survey to the remote platform. Shaping the payload
//! is local and testable; the transport lives behind the [`Platform`] trait
//! and is supplied by the hosting application.

use crate::db::models::{ProfileRow, SurveyRow};
use crate::error::BuzzError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Payload combining the latest profile and survey, stamped at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundReport {
    pub reported_on: DateTime<Utc>,
    pub profile: ProfileRow,
    pub survey: SurveyRow,
}

impl OutboundReport {
    pub fn new(profile: &ProfileRow, survey: &SurveyRow) -> Self {
        Self {
            reported_on: Utc::now(),
            profile: profile.clone(),
            survey: survey.clone(),
        }
    }

    pub fn payload(&self) -> Result<serde_json::Value, BuzzError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// The remote platform collaborator. Implementations own formatting beyond
/// the report payload, authentication, and delivery.
pub trait Platform {
    fn submit(
        &self,
        report: &OutboundReport,
    ) -> impl Future<Output = Result<(), BuzzError>> + Send;
}
