use crate::bitrise::query::BitriseError;
use crate::constant::log::*;
use crate::pretty_log::{colored_println, ThemeColor};
use crate::publish::PublishError;
use formatx::formatx;
use std::fmt::Display;
use std::io::Stdout;

#[derive(Debug)]
pub enum ExportError {
    MissingParam(String),
    ClientInvalid(reqwest::Error),
    InvalidArtifactPattern {
        artifact_name: String,
        e: regex::Error,
    },
    Bitrise(BitriseError),
    NoBuildFound {
        workflow_name: String,
        branch_name: String,
    },
    NoMatch {
        artifact_name: String,
        build_slug: String,
    },
    Publish(PublishError),
}

impl From<BitriseError> for ExportError {
    fn from(value: BitriseError) -> Self {
        ExportError::Bitrise(value)
    }
}

impl From<PublishError> for ExportError {
    fn from(value: PublishError) -> Self {
        ExportError::Publish(value)
    }
}

impl Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            ExportError::MissingParam(key) => formatx!(ERR_NEED_PARAM, key).unwrap_or_default(),
            ExportError::ClientInvalid(e) => {
                formatx!(ERR_CLIENT_INVALID, e.to_string()).unwrap_or_default()
            }
            ExportError::InvalidArtifactPattern { artifact_name, e } => {
                formatx!(ERR_INVALID_ARTIFACT_PATTERN, artifact_name, e.to_string())
                    .unwrap_or_default()
            }
            ExportError::Bitrise(e) => e.to_string(),
            ExportError::NoBuildFound {
                workflow_name,
                branch_name,
            } => formatx!(ERR_NO_BUILD_FOUND, workflow_name, branch_name).unwrap_or_default(),
            ExportError::NoMatch {
                artifact_name,
                build_slug,
            } => formatx!(ERR_NO_MATCH_STRICT, artifact_name, build_slug).unwrap_or_default(),
            ExportError::Publish(e) => {
                formatx!(ERR_PUBLISH_FAILED, e.to_string()).unwrap_or_default()
            }
        };
        write!(f, "Error: {}", str)
    }
}

impl ExportError {
    pub fn colored_println(&self, stdout: &mut Stdout) {
        colored_println(stdout, ThemeColor::Error, self.to_string().as_str());
    }
}
