use crate::bitrise::bitrise_endpoint::Endpoint;

/// Endpoint for the latest successful build of a workflow on a branch.
///
/// Running builds sort first and only one build is requested.
pub struct LatestBuild {
    /// Slug of the Bitrise app.
    pub app_slug: String,

    /// Branch name, empty for any branch.
    pub branch_name: String,

    /// Workflow name.
    pub workflow_name: String,
}

impl Endpoint for LatestBuild {
    fn endpoint(&self) -> String {
        format!("apps/{}/builds", self.app_slug)
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sort_by", "running_first".to_string()),
            ("branch", self.branch_name.clone()),
            ("workflow", self.workflow_name.clone()),
            ("status", "1".to_string()),
            ("limit", "1".to_string()),
        ]
    }

    fn target(&self) -> &'static str {
        "builds"
    }

    fn context(&self) -> String {
        format!(
            "[workflow: {}, branch: {}]",
            self.workflow_name, self.branch_name
        )
    }
}
