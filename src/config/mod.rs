use crate::bitrise::BITRISE_API_DOMAIN;
use crate::constant::log::{HINT_BRANCH_ANY, HINT_CONFIG_LINE, HINT_USED_CONFIG};
use crate::constant::util::{hide_sensitive_string, or_placeholder};
use crate::export_error::ExportError;
use crate::pretty_log::{colored_println, ThemeColor};
use crate::publish::DEFAULT_PUBLISHER;
use clap::Args;
use formatx::formatx;
use std::io::Stdout;

pub const ENV_API_AUTH_TOKEN: &str = "API_AUTH_TOKEN";
pub const ENV_APP_SLUG: &str = "APP_SLUG";
pub const ENV_WORKFLOW_NAME: &str = "WORKFLOW_NAME";
pub const ENV_BRANCH_NAME: &str = "BITRISE_GIT_BRANCH";
pub const ENV_ARTIFACT_NAME: &str = "ARTIFACT_NAME";
pub const ENV_FAIL_ON_NO_MATCH: &str = "BLE_FAIL_ON_NO_MATCH";
pub const ENV_DRY_RUN: &str = "BLE_DRY_RUN";

/// Chars of the token kept in clear when printed.
const TOKEN_SHOWN_LEN: usize = 4;

/// Raw inputs. Each flag falls back to its environment variable.
#[derive(Args, Debug, Default)]
pub struct ExportParams {
    /// Bitrise personal access token.
    #[arg(long, env = ENV_API_AUTH_TOKEN, hide_env_values = true)]
    pub api_auth_token: Option<String>,

    /// app slug.
    #[arg(long, env = ENV_APP_SLUG)]
    pub app_slug: Option<String>,

    /// workflow whose latest successful build is read.
    #[arg(long, env = ENV_WORKFLOW_NAME)]
    pub workflow_name: Option<String>,

    /// branch of the build. empty for any branch.
    #[arg(long = "branch", env = ENV_BRANCH_NAME)]
    pub branch_name: Option<String>,

    /// name printed before the version in the log, also the exported key.
    #[arg(long, env = ENV_ARTIFACT_NAME)]
    pub artifact_name: Option<String>,

    /// Bitrise api root.
    #[arg(long, env = "BITRISE_API_BASE_URL", default_value = BITRISE_API_DOMAIN)]
    pub api_base_url: String,

    /// executable providing `envman`.
    #[arg(long, env = "ENVMAN_PUBLISHER", default_value = DEFAULT_PUBLISHER)]
    pub publisher: String,

    /// fail when the log holds no value for the artifact.
    #[arg(long, env = ENV_FAIL_ON_NO_MATCH)]
    pub fail_on_no_match: bool,

    /// print the value without exporting it.
    #[arg(long, env = ENV_DRY_RUN)]
    pub dry_run: bool,
}

/// Resolved configuration, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub api_auth_token: String,
    pub app_slug: String,
    pub workflow_name: String,
    pub branch_name: String,
    pub artifact_name: String,
    pub api_base_url: String,
    pub publisher: String,
    pub fail_on_no_match: bool,
    pub dry_run: bool,
}

fn require(value: Option<String>, key: &str) -> Result<String, ExportError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ExportError::MissingParam(key.to_string()))
}

impl TryFrom<ExportParams> for ExportConfig {
    type Error = ExportError;

    fn try_from(params: ExportParams) -> Result<Self, Self::Error> {
        let api_auth_token = require(params.api_auth_token, ENV_API_AUTH_TOKEN)?;
        let app_slug = require(params.app_slug, ENV_APP_SLUG)?;
        let workflow_name = require(params.workflow_name, ENV_WORKFLOW_NAME)?;
        let branch_name = params.branch_name.unwrap_or_default();
        let artifact_name = require(params.artifact_name, ENV_ARTIFACT_NAME)?;

        Ok(ExportConfig {
            api_auth_token,
            app_slug,
            workflow_name,
            branch_name,
            artifact_name,
            api_base_url: params.api_base_url,
            publisher: params.publisher,
            fail_on_no_match: params.fail_on_no_match,
            dry_run: params.dry_run,
        })
    }
}

impl ExportConfig {
    pub fn colored_println(&self, stdout: &mut Stdout) {
        colored_println(stdout, ThemeColor::Second, HINT_USED_CONFIG);

        let token = hide_sensitive_string(&self.api_auth_token, TOKEN_SHOWN_LEN);
        let lines = [
            (ENV_API_AUTH_TOKEN, token.as_str()),
            (ENV_APP_SLUG, self.app_slug.as_str()),
            (ENV_WORKFLOW_NAME, self.workflow_name.as_str()),
            (
                ENV_BRANCH_NAME,
                or_placeholder(&self.branch_name, HINT_BRANCH_ANY),
            ),
            (ENV_ARTIFACT_NAME, self.artifact_name.as_str()),
        ];
        for (k, v) in lines {
            colored_println(
                stdout,
                ThemeColor::Second,
                &formatx!(HINT_CONFIG_LINE, k, v).unwrap_or_default(),
            );
        }
    }
}
