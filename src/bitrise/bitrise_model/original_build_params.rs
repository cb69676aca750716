use serde::Deserialize;

/// Parameters the build was triggered with.
#[allow(dead_code)]
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct OriginalBuildParams {
    pub branch: Option<String>,
    pub tag: Option<String>,
    pub commit_hash: Option<String>,
    pub commit_message: Option<String>,
    pub workflow_id: Option<String>,
    pub branch_dest: Option<String>,
    pub pull_request_id: Option<String>,
    pub pull_request_repository_url: Option<String>,
    pub pull_request_merge_branch: Option<String>,
    pub pull_request_head_branch: Option<String>,
    pub environments: Vec<EnvironmentBinding>,
}

/// One environment variable passed to the build.
#[allow(dead_code)]
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct EnvironmentBinding {
    pub mapped_to: String,
    pub value: String,
    pub is_expand: bool,
}
