use crate::bitrise::bitrise_model::scalar_value::ScalarValue;
use serde::Deserialize;

/// Response of `apps/{app}/builds/{build}/log`.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct BuildLog {
    pub expiring_raw_log_url: Option<String>,
    #[allow(dead_code)]
    pub generated_log_chunks_num: u64,
    pub is_archived: bool,
    pub log_chunks: Vec<LogChunk>,
    #[allow(dead_code)]
    pub timestamp: Option<ScalarValue>,
}

/// One fragment of the build output.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct LogChunk {
    pub chunk: String,
    pub position: i64,
}

impl BuildLog {
    /// Chunks in log order, by `position`. Equal positions keep response order.
    pub fn ordered_chunks(&self) -> Vec<&LogChunk> {
        let mut chunks: Vec<&LogChunk> = self.log_chunks.iter().collect();
        chunks.sort_by_key(|c| c.position);
        chunks
    }
}
