// ABOUTME: HTTP release backend client over a skipper-style REST API.
// ABOUTME: Hand-rolled hyper HTTP/1 requests with a per-request handshake.

use super::deployer::Deployer;
use super::error::BackendError;
use super::release::{AppStates, ReleaseBackend};
use crate::release::{ReleaseRecord, UpdateRequest};
use crate::stream::{DefinitionId, StreamDefinition, StreamDeployment};
use crate::types::{ReleaseVersion, StreamName};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::StatusCode;
use hyper_util::rt::TokioIo;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tokio::net::TcpStream;

/// Release backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpReleaseBackend {
    authority: String,
    timeout: Duration,
}

/// One batch state entry on the wire; the map form is rebuilt client-side
/// because definition ids are not JSON object keys.
#[derive(Debug, Serialize, Deserialize)]
struct StateEntry {
    id: DefinitionId,
    states: AppStates,
}

impl HttpReleaseBackend {
    /// Create a client for the backend at `host:port`.
    pub fn new(authority: impl Into<String>, timeout: Duration) -> Self {
        Self {
            authority: authority.into(),
            timeout,
        }
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Bytes>,
    ) -> Result<(StatusCode, Bytes), BackendError> {
        let fut = self.request_inner(method, path, body);
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| BackendError::Timeout {
                seconds: self.timeout.as_secs(),
            })?
    }

    async fn request_inner(
        &self,
        method: &str,
        path: &str,
        body: Option<Bytes>,
    ) -> Result<(StatusCode, Bytes), BackendError> {
        let stream =
            TcpStream::connect(&self.authority)
                .await
                .map_err(|e| BackendError::Transport {
                    message: format!("failed to connect to {}: {}", self.authority, e),
                })?;

        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| BackendError::Transport {
                message: format!("HTTP handshake failed: {}", e),
            })?;

        // Spawn connection handler
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::warn!("backend connection error: {}", e);
            }
        });

        let mut builder = hyper::Request::builder()
            .method(method)
            .uri(path)
            .header("Host", self.authority.as_str())
            .header("Accept", "application/json");
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let req = builder
            .body(Full::new(body.unwrap_or_default()))
            .map_err(|e| BackendError::Transport {
                message: format!("failed to build request: {}", e),
            })?;

        tracing::debug!("{} {}{}", method, self.authority, path);

        let resp = sender
            .send_request(req)
            .await
            .map_err(|e| BackendError::Transport {
                message: format!("request failed: {}", e),
            })?;

        let status = resp.status();
        let body = resp
            .into_body()
            .collect()
            .await
            .map_err(|e| BackendError::Transport {
                message: format!("failed to read response: {}", e),
            })?;

        Ok((status, body.to_bytes()))
    }

    /// Issue a request and reject any non-success status. A 404 on a
    /// stream-scoped path maps to `ReleaseNotFound` for that stream.
    async fn expect_success(
        &self,
        method: &str,
        path: &str,
        body: Option<Bytes>,
        stream_name: Option<&str>,
    ) -> Result<Bytes, BackendError> {
        let (status, bytes) = self.request(method, path, body).await?;
        if status == StatusCode::NOT_FOUND
            && let Some(name) = stream_name
        {
            return Err(BackendError::ReleaseNotFound {
                name: name.to_string(),
            });
        }
        if !status.is_success() {
            return Err(BackendError::Response {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(bytes)
    }

    fn json_body<T: Serialize>(value: &T) -> Result<Bytes, BackendError> {
        let vec = serde_json::to_vec(value).map_err(|source| BackendError::Decode { source })?;
        Ok(Bytes::from(vec))
    }

    fn decode<T: for<'de> Deserialize<'de>>(bytes: &Bytes) -> Result<T, BackendError> {
        serde_json::from_slice(bytes).map_err(|source| BackendError::Decode { source })
    }

    fn stream_path(name: &StreamName, suffix: &str) -> String {
        let encoded = urlencoding::encode(name.as_str());
        format!("/streams/{}{}", encoded, suffix)
    }
}

#[async_trait]
impl ReleaseBackend for HttpReleaseBackend {
    async fn deploy_stream(
        &self,
        name: &StreamName,
        properties: &BTreeMap<String, String>,
    ) -> Result<(), BackendError> {
        let path = Self::stream_path(name, "/deploy");
        let body = Self::json_body(properties)?;
        self.expect_success("POST", &path, Some(body), Some(name.as_str()))
            .await?;
        Ok(())
    }

    async fn update_stream(
        &self,
        name: &StreamName,
        request: &UpdateRequest,
    ) -> Result<(), BackendError> {
        let path = Self::stream_path(name, "/update");
        let body = Self::json_body(request)?;
        self.expect_success("POST", &path, Some(body), Some(name.as_str()))
            .await?;
        Ok(())
    }

    async fn rollback_stream(
        &self,
        name: &StreamName,
        version: ReleaseVersion,
    ) -> Result<(), BackendError> {
        let path = Self::stream_path(name, &format!("/rollback/{}", version));
        self.expect_success("POST", &path, None, Some(name.as_str()))
            .await?;
        Ok(())
    }

    async fn manifest(
        &self,
        name: &StreamName,
        version: ReleaseVersion,
    ) -> Result<String, BackendError> {
        let path = Self::stream_path(name, &format!("/manifest/{}", version));
        let bytes = self.expect_success("GET", &path, None, Some(name.as_str())).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn history(&self, name: &StreamName) -> Result<Vec<ReleaseRecord>, BackendError> {
        let path = Self::stream_path(name, "/history");
        let bytes = self.expect_success("GET", &path, None, Some(name.as_str())).await?;
        Self::decode(&bytes)
    }

    async fn platform_list(&self) -> Result<Vec<Deployer>, BackendError> {
        let bytes = self.expect_success("GET", "/platforms", None, None).await?;
        Self::decode(&bytes)
    }

    async fn info(&self, name: &StreamName) -> Result<Option<StreamDeployment>, BackendError> {
        let path = Self::stream_path(name, "/deployment");
        let (status, bytes) = self.request("GET", &path, None).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(BackendError::Response {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(Some(Self::decode(&bytes)?))
    }

    async fn state(
        &self,
        definitions: &[StreamDefinition],
    ) -> Result<HashMap<DefinitionId, AppStates>, BackendError> {
        let body = Self::json_body(&definitions)?;
        let bytes = self
            .expect_success("POST", "/streams/state", Some(body), None)
            .await?;
        let entries: Vec<StateEntry> = Self::decode(&bytes)?;
        Ok(entries.into_iter().map(|e| (e.id, e.states)).collect())
    }
}
