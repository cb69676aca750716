use crate::bitrise::bitrise_model::build::Build;
use serde::Deserialize;

/// Response of `apps/{app}/builds`.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct BuildList {
    pub data: Vec<Build>,

    #[allow(dead_code)]
    pub paging: Paging,
}

/// Paging metadata. The next page is never followed.
#[allow(dead_code)]
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Paging {
    pub total_item_count: u64,
    pub page_item_limit: u64,
    pub next: Option<String>,
}

impl BuildList {
    /// The build to read the log from: the first one listed.
    pub fn latest(&self) -> Option<&Build> {
        self.data.first()
    }
}
