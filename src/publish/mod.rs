use std::process::Command;
use thiserror::Error;

pub const DEFAULT_PUBLISHER: &str = "bitrise";

/// # Envman Publisher
///
/// Registers a key/value pair for later pipeline steps by running
/// `<program> envman add --key <key> --value <value>`.
///
/// No timeout is applied to the command.
#[derive(Debug, Clone)]
pub struct EnvmanPublisher {
    program: String,
}

impl EnvmanPublisher {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run the publisher, returns its stdout followed by its stderr.
    ///
    /// The two streams are captured separately, so lines are not interleaved
    /// in the order the publisher wrote them.
    pub fn publish(&self, key: &str, value: &str) -> Result<String, PublishError> {
        let output = Command::new(&self.program)
            .args(["envman", "add", "--key", key, "--value", value])
            .output()
            .map_err(|source| PublishError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(combined)
        } else {
            Err(PublishError::Failed {
                key: key.into(),
                status: output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
                output: combined.trim_end().to_string(),
            })
        }
    }
}

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("cannot run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("envman add --key {key} exited with {status} | output: {output}")]
    Failed {
        key: String,
        status: String,
        output: String,
    },
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_publish_passes_key_and_value() {
        let publisher = EnvmanPublisher::new("echo");

        let output = publisher.publish("APP_VERSION", "4.12.0").unwrap();

        assert_eq!(output, "envman add --key APP_VERSION --value 4.12.0\n");
    }

    #[test]
    fn test_publish_failed() {
        let publisher = EnvmanPublisher::new("false");

        let err = publisher.publish("APP_VERSION", "4.12.0").unwrap_err();

        assert!(matches!(err, PublishError::Failed { .. }));
        assert!(err.to_string().contains("exited with 1"));
    }

    #[test]
    fn test_publish_missing_program() {
        let publisher = EnvmanPublisher::new("./no-such-envman-publisher");

        let err = publisher.publish("APP_VERSION", "4.12.0").unwrap_err();

        assert!(matches!(err, PublishError::Spawn { .. }));
    }

    #[test]
    fn test_publish_failed_keeps_both_streams() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-bitrise");
        fs::write(
            &script,
            "#!/bin/sh\necho \"out-$4-$6\"\necho err-line >&2\nexit 3\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        let publisher = EnvmanPublisher::new(script.to_str().unwrap());

        let err = publisher.publish("APP_VERSION", "4.12.0").unwrap_err();

        match &err {
            PublishError::Failed { key, status, output } => {
                assert_eq!(key, "APP_VERSION");
                assert_eq!(status, "3");
                assert_eq!(output, "out-APP_VERSION-4.12.0\nerr-line");
            }
            other => panic!("expected failed publish, got {:?}", other),
        }
        assert!(err.to_string().contains("exited with 3"));
    }
}
