use serde::Deserialize;
use std::fmt::Display;

/// Status code of a Bitrise build.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(from = "i64")]
pub enum BuildStatus {
    #[default]
    NotFinished,
    Success,
    Failed,
    AbortedWithFailure,
    AbortedWithSuccess,
    Unknown(i64),
}

impl Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildStatus::NotFinished => write!(f, "not finished"),
            BuildStatus::Success => write!(f, "success"),
            BuildStatus::Failed => write!(f, "failed"),
            BuildStatus::AbortedWithFailure => write!(f, "aborted with failure"),
            BuildStatus::AbortedWithSuccess => write!(f, "aborted with success"),
            BuildStatus::Unknown(code) => write!(f, "unknown status {}", code),
        }
    }
}

impl From<i64> for BuildStatus {
    fn from(value: i64) -> Self {
        match value {
            0 => BuildStatus::NotFinished,
            1 => BuildStatus::Success,
            2 => BuildStatus::Failed,
            3 => BuildStatus::AbortedWithFailure,
            4 => BuildStatus::AbortedWithSuccess,
            other => BuildStatus::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_code() {
        let statuses: Vec<BuildStatus> = serde_json::from_str("[0, 1, 2, 3, 4, 9]").unwrap();

        assert_eq!(
            statuses,
            vec![
                BuildStatus::NotFinished,
                BuildStatus::Success,
                BuildStatus::Failed,
                BuildStatus::AbortedWithFailure,
                BuildStatus::AbortedWithSuccess,
                BuildStatus::Unknown(9),
            ]
        );
        assert_eq!(BuildStatus::Unknown(9).to_string(), "unknown status 9");
        assert_eq!(BuildStatus::Success.to_string(), "success");
    }
}
