use crate::bitrise::bitrise_endpoint::build_log::LogOfBuild;
use crate::bitrise::bitrise_endpoint::builds::LatestBuild;
use crate::bitrise::bitrise_endpoint::Endpoint;
use crate::bitrise::bitrise_model::build_list::BuildList;
use crate::bitrise::bitrise_model::build_log::BuildLog;
use crate::bitrise::token_bitrise_async_client::AsyncClient;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// # query
///
/// Send the endpoint request and decode the json body.
///
/// The response is consumed or dropped on every path, so the connection goes back to the pool.
pub async fn query<T, E, C>(endpoint: &E, client: &C) -> Result<T, BitriseError>
where
    T: DeserializeOwned,
    E: Endpoint,
    C: AsyncClient + Sync,
{
    let resp = client
        .request(endpoint.method(), &endpoint.endpoint(), &endpoint.params())
        .await
        .map_err(|source| BitriseError::Transport {
            target: endpoint.target(),
            context: endpoint.context(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(BitriseError::UnexpectedStatus {
            target: endpoint.target(),
            status: status.as_u16(),
            context: endpoint.context(),
        });
    }

    let body = resp.bytes().await.map_err(|source| BitriseError::Transport {
        target: endpoint.target(),
        context: endpoint.context(),
        source,
    })?;

    Ok(serde_json::from_slice(&body)?)
}

pub async fn query_latest_build<C: AsyncClient + Sync>(
    client: &C,
    app_slug: &str,
    branch_name: &str,
    workflow_name: &str,
) -> Result<BuildList, BitriseError> {
    query(
        &LatestBuild {
            app_slug: app_slug.into(),
            branch_name: branch_name.into(),
            workflow_name: workflow_name.into(),
        },
        client,
    )
    .await
}

pub async fn query_build_log<C: AsyncClient + Sync>(
    client: &C,
    app_slug: &str,
    build_slug: &str,
) -> Result<BuildLog, BitriseError> {
    query(
        &LogOfBuild {
            app_slug: app_slug.into(),
            build_slug: build_slug.into(),
        },
        client,
    )
    .await
}

#[derive(Error, Debug)]
pub enum BitriseError {
    #[error("failed to request {target} for {context}: {source}")]
    Transport {
        target: &'static str,
        context: String,
        source: reqwest::Error,
    },

    #[error("failed to get {target} with status code ({status}) for {context}")]
    UnexpectedStatus {
        target: &'static str,
        status: u16,
        context: String,
    },

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
