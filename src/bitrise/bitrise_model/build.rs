use crate::bitrise::bitrise_model::build_status::BuildStatus;
use crate::bitrise::bitrise_model::original_build_params::OriginalBuildParams;
use crate::bitrise::bitrise_model::scalar_value::ScalarValue;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One build as listed by `apps/{app}/builds`.
///
/// Only `slug` drives the export, the rest mirrors the api for console output.
#[allow(dead_code)]
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Build {
    pub triggered_at: Option<DateTime<Utc>>,
    pub started_on_worker_at: Option<DateTime<Utc>>,
    pub environment_prepare_finished_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub slug: String,
    pub status: BuildStatus,
    pub status_text: String,
    pub abort_reason: Option<String>,
    pub is_on_hold: bool,
    pub branch: Option<String>,
    pub build_number: u64,
    pub commit_hash: Option<String>,
    pub commit_message: Option<String>,
    pub tag: Option<String>,
    pub triggered_workflow: String,
    pub triggered_by: Option<String>,
    pub stack_config_type: Option<String>,
    pub stack_identifier: Option<String>,
    pub original_build_params: OriginalBuildParams,
    pub pull_request_id: Option<ScalarValue>,
    pub pull_request_target_branch: Option<String>,
    pub pull_request_view_url: Option<String>,
    pub commit_view_url: Option<String>,
}
