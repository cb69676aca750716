use crate::bitrise::query::{query_build_log, query_latest_build};
use crate::bitrise::token_bitrise_async_client::AsyncClient;
use crate::config::ExportConfig;
use crate::constant::log::*;
use crate::constant::util::or_placeholder;
use crate::export_error::ExportError;
use crate::extract::ArtifactValueExtractor;
use crate::pretty_log::{colored_println, ThemeColor};
use crate::publish::EnvmanPublisher;
use formatx::formatx;
use std::io::Stdout;

#[derive(Debug, PartialEq)]
pub enum ExportOutcome {
    Published { key: String, value: String },
    DryRun { key: String, value: String },
    NoMatch,
}

/// # cli do export
///
/// Latest build of the workflow -> its log -> first `<artifact> <version>` -> envman.
///
/// Every step failing stops the run. No value in the log is only a warning,
/// unless `fail_on_no_match` is set.
pub async fn cli_do_export<C: AsyncClient + Sync>(
    stdout: &mut Stdout,
    config: &ExportConfig,
    client: &C,
    publisher: &EnvmanPublisher,
) -> Result<ExportOutcome, ExportError> {
    let extractor = ArtifactValueExtractor::new(&config.artifact_name).map_err(|e| {
        ExportError::InvalidArtifactPattern {
            artifact_name: config.artifact_name.clone(),
            e,
        }
    })?;

    colored_println(
        stdout,
        ThemeColor::Main,
        &formatx!(
            QUERYING_LATEST_BUILD,
            &config.workflow_name,
            or_placeholder(&config.branch_name, HINT_BRANCH_ANY)
        )
        .unwrap_or_default(),
    );
    let builds = query_latest_build(
        client,
        &config.app_slug,
        &config.branch_name,
        &config.workflow_name,
    )
    .await?;

    let build = builds.latest().ok_or_else(|| ExportError::NoBuildFound {
        workflow_name: config.workflow_name.clone(),
        branch_name: config.branch_name.clone(),
    })?;
    let found_line = match build.triggered_at {
        Some(at) => formatx!(
            FOUND_BUILD_TRIGGERED_AT,
            &build.slug,
            build.build_number,
            build.status,
            at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
        ),
        None => formatx!(FOUND_BUILD, &build.slug, build.build_number, build.status),
    };
    colored_println(stdout, ThemeColor::Second, &found_line.unwrap_or_default());

    colored_println(
        stdout,
        ThemeColor::Main,
        &formatx!(QUERYING_BUILD_LOG, &build.slug).unwrap_or_default(),
    );
    let log = query_build_log(client, &config.app_slug, &build.slug).await?;

    if log.is_archived && log.log_chunks.is_empty() {
        colored_println(
            stdout,
            ThemeColor::Warn,
            &formatx!(
                WARN_LOG_ARCHIVED,
                &build.slug,
                log.expiring_raw_log_url.as_deref().unwrap_or_default()
            )
            .unwrap_or_default(),
        );
    }

    colored_println(
        stdout,
        ThemeColor::Second,
        &formatx!(SCANNING_LOG_CHUNKS, log.log_chunks.len(), &config.artifact_name)
            .unwrap_or_default(),
    );
    let Some(found) = extractor.find_first(&log) else {
        if config.fail_on_no_match {
            return Err(ExportError::NoMatch {
                artifact_name: config.artifact_name.clone(),
                build_slug: build.slug.clone(),
            });
        }

        colored_println(
            stdout,
            ThemeColor::Warn,
            &formatx!(WARN_NO_MATCH, &config.artifact_name, &build.slug).unwrap_or_default(),
        );
        return Ok(ExportOutcome::NoMatch);
    };

    colored_println(
        stdout,
        ThemeColor::Second,
        &formatx!(FOUND_VALUE_IN_CHUNK, &found.value, found.position).unwrap_or_default(),
    );

    let key = config.artifact_name.clone();
    let value = found.value;
    let env_line = formatx!(EXPORTED_ENV_LINE, &key, &value).unwrap_or_default();

    if config.dry_run {
        colored_println(stdout, ThemeColor::Warn, DRY_RUN_ENV_HEADER);
        colored_println(stdout, ThemeColor::Success, &env_line);
        return Ok(ExportOutcome::DryRun { key, value });
    }

    let output = publisher.publish(&key, &value)?;
    if !output.trim().is_empty() {
        colored_println(
            stdout,
            ThemeColor::Second,
            &formatx!(PUBLISHER_OUTPUT, output.trim()).unwrap_or_default(),
        );
    }

    colored_println(stdout, ThemeColor::Main, EXPORTED_ENV_HEADER);
    colored_println(stdout, ThemeColor::Success, &env_line);

    Ok(ExportOutcome::Published { key, value })
}
