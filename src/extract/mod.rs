use crate::bitrise::bitrise_model::build_log::BuildLog;
use regex::Regex;

/// Version number after the artifact name: `1.2`, `1.2.3`, ...
const VERSION_PATTERN: &str = r"(\d+\.\d+(?:\.\d+)*)";

/// A value found in the build log.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedValue {
    pub value: String,

    /// `position` of the chunk the value was found in.
    pub position: i64,
}

/// # Artifact Value Extractor
///
/// Finds `<artifact name> <version>` in build log output.
///
/// The artifact name is always matched literally, `v[1]` matches the text `v[1]`.
#[derive(Debug)]
pub struct ArtifactValueExtractor {
    pattern: Regex,
}

impl ArtifactValueExtractor {
    pub fn new(artifact_name: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            "{} {}",
            regex::escape(artifact_name),
            VERSION_PATTERN
        ))?;

        Ok(Self { pattern })
    }

    pub fn extract_from_text(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// # find first
    ///
    /// Scan the log chunks in log order and stop at the first one holding a value.
    ///
    /// A value split across two chunks is not found.
    pub fn find_first(&self, log: &BuildLog) -> Option<ExtractedValue> {
        log.ordered_chunks().into_iter().find_map(|chunk| {
            self.extract_from_text(&chunk.chunk)
                .map(|value| ExtractedValue {
                    value,
                    position: chunk.position,
                })
        })
    }
}
