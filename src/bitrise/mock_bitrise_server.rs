use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Router;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const BUILD_LIST_JSON: &str = r#"{
  "data": [
    {
      "triggered_at": "2024-03-05T09:12:44Z",
      "started_on_worker_at": "2024-03-05T09:12:50Z",
      "environment_prepare_finished_at": "2024-03-05T09:13:02Z",
      "finished_at": null,
      "slug": "9f3c2a1b7e6d5c40",
      "status": 1,
      "status_text": "success",
      "abort_reason": null,
      "is_on_hold": false,
      "branch": "main",
      "build_number": 1287,
      "commit_hash": "8d1e0b6",
      "commit_message": "Bump version",
      "tag": null,
      "triggered_workflow": "release",
      "triggered_by": "manual-api-demo",
      "stack_config_type": "standard1",
      "stack_identifier": "osx-xcode-15.2.x",
      "original_build_params": {
        "branch": "main",
        "workflow_id": "release",
        "environments": [
          { "mapped_to": "CHANNEL", "value": "beta", "is_expand": true }
        ]
      },
      "pull_request_id": 0,
      "pull_request_target_branch": null,
      "pull_request_view_url": null,
      "commit_view_url": "https://github.com/acme/app/commit/8d1e0b6"
    }
  ],
  "paging": { "total_item_count": 311, "page_item_limit": 1, "next": "8c7d6e5f4a3b2c10" }
}"#;

pub const EMPTY_BUILD_LIST_JSON: &str =
    r#"{"data": [], "paging": {"total_item_count": 0, "page_item_limit": 1}}"#;

pub const BUILD_LOG_JSON: &str = r#"{
  "expiring_raw_log_url": "https://bitrise-build-log-archives.s3.amazonaws.com/9f3c2a1b7e6d5c40.log",
  "generated_log_chunks_num": 3,
  "is_archived": false,
  "log_chunks": [
    { "chunk": "Switching to step: version-bump\nAppVersion 4.12.0 (build 1287)\n", "position": 1 },
    { "chunk": "foo 1.0\n", "position": 0 },
    { "chunk": "AppVersion 9.9.9\n", "position": 2 }
  ],
  "timestamp": null
}"#;

pub const BUILD_LOG_WITHOUT_MATCH_JSON: &str = r#"{
  "generated_log_chunks_num": 1,
  "is_archived": false,
  "log_chunks": [ { "chunk": "nothing here", "position": 0 } ],
  "timestamp": null
}"#;

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub body: String,
}

impl MockResponse {
    pub fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Debug)]
struct MockServerState {
    builds: MockResponse,
    log: MockResponse,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Bitrise api stand-in: answers `.../log` with the log response and anything else with the builds response.
pub struct MockBitriseServer {
    pub url: String,
    state: Arc<MockServerState>,
}

impl MockBitriseServer {
    pub async fn start(builds: MockResponse, log: MockResponse) -> Self {
        let state = Arc::new(MockServerState {
            builds,
            log,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .fallback(handle_request)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle_request(
    State(state): State<Arc<MockServerState>>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, String) {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(|q| q.to_string()),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string()),
    });

    let resp = if uri.path().ends_with("/log") {
        &state.log
    } else {
        &state.builds
    };

    (resp.status, resp.body.clone())
}
