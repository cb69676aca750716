pub const ERR_NEED_PARAM: &str = "Environment variable ({}) is not set.";
pub const ERR_CLIENT_INVALID: &str = "Cannot create the Bitrise api client. {}";
pub const ERR_INVALID_ARTIFACT_PATTERN: &str = "Cannot build a log pattern for artifact {}. {}";
pub const ERR_NO_BUILD_FOUND: &str =
    "No successful build found for [workflow: {}, branch: {}]. Nothing to read the log from.";
pub const ERR_NO_MATCH_STRICT: &str = "No \"{} <version>\" line found in the log of build {}.";
pub const ERR_PUBLISH_FAILED: &str = "Failed to expose output with envman. {}";

pub const HINT_USED_CONFIG: &str = "Used config:";
pub const HINT_CONFIG_LINE: &str = "  {}: {}";
pub const HINT_BRANCH_ANY: &str = "(any)";

pub const QUERYING_LATEST_BUILD: &str = "Querying latest build of workflow {} on branch {}...";
pub const FOUND_BUILD: &str = "Found build {} (#{}, {}).";
pub const FOUND_BUILD_TRIGGERED_AT: &str = "Found build {} (#{}, {}), triggered at {}.";
pub const QUERYING_BUILD_LOG: &str = "Querying log of build {}...";
pub const SCANNING_LOG_CHUNKS: &str = "Scanning {} log chunks for {}...";
pub const WARN_LOG_ARCHIVED: &str =
    "The log of build {} is archived. Chunks may be empty, see {} for the raw log.";
pub const FOUND_VALUE_IN_CHUNK: &str = "Found {} in log chunk {}.";
pub const WARN_NO_MATCH: &str =
    "No \"{} <version>\" line found in the log of build {}. Nothing exported.";
pub const EXPORTED_ENV_HEADER: &str = "Exported environment variable:";
pub const EXPORTED_ENV_LINE: &str = "- {}: {}";
pub const DRY_RUN_ENV_HEADER: &str = "Dry run, environment variable not exported:";
pub const PUBLISHER_OUTPUT: &str = "envman output: {}";
