//! Async HTTP transport for the messaging backend. No retries; a failed call
//! is reported to the caller as-is.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use insight_core::config::ApiConfig;
use insight_core::errors::{ApiError, InsightError, InsightResult};
use insight_core::models::{GroupSnapshot, KickReport};
use insight_core::traits::{IGroupFetcher, IMemberKicker};

use crate::protocol::{
    self, ApiEnvelope, ChatRoomInfo, DelChatRoomMemberRequest, GetChatRoomInfoRequest,
    KickResult,
};

/// Convert a string into an `ApiError::Network`.
fn net_err(reason: String) -> InsightError {
    ApiError::Network { reason }.into()
}

/// Client for the group and member endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> InsightResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .gzip(true)
            .build()
            .map_err(|e: reqwest::Error| net_err(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> InsightResult<String> {
        if self.config.base_url.trim().is_empty() {
            return Err(ApiError::NotConfigured {
                missing: "base_url".to_string(),
            }
            .into());
        }
        if self.config.api_key.trim().is_empty() {
            return Err(ApiError::NotConfigured {
                missing: "api_key".to_string(),
            }
            .into());
        }
        Ok(format!(
            "{}/{}",
            self.config.base_url.trim().trim_end_matches('/'),
            path
        ))
    }

    /// POST `body` as JSON and decode the enveloped response.
    async fn post<Req: Serialize + Sync, Resp: DeserializeOwned>(
        &self,
        path: &str,
        body: &Req,
    ) -> InsightResult<ApiEnvelope<Resp>> {
        let url = self.endpoint(path)?;
        tracing::debug!(path, "api request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                if e.is_timeout() {
                    net_err(format!(
                        "request to {path} timed out after {}s",
                        self.config.request_timeout_secs
                    ))
                } else {
                    net_err(format!("request to {path} failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "api returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        response
            .json::<ApiEnvelope<Resp>>()
            .await
            .map_err(|e: reqwest::Error| {
                InsightError::from(ApiError::Decode {
                    reason: e.to_string(),
                })
            })
    }
}

#[async_trait]
impl IGroupFetcher for ApiClient {
    async fn fetch_group_snapshot(&self, group_id: &str) -> InsightResult<GroupSnapshot> {
        let envelope: ApiEnvelope<ChatRoomInfo> = self
            .post(
                protocol::GET_CHATROOM_INFO_PATH,
                &GetChatRoomInfoRequest::single(group_id),
            )
            .await?;
        let snapshot = protocol::snapshot_from_response(group_id, envelope)?;
        tracing::info!(
            group_id,
            group_name = %snapshot.group_name,
            members = snapshot.member_count(),
            "fetched group snapshot"
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl IMemberKicker for ApiClient {
    async fn kick_members(
        &self,
        group_id: &str,
        member_ids: &[String],
    ) -> InsightResult<KickReport> {
        if member_ids.is_empty() {
            return Err(InsightError::KickFailed {
                group_id: group_id.to_string(),
                reason: "no members to remove".to_string(),
            });
        }

        tracing::info!(group_id, members = ?member_ids, "sending kick request");
        let request = DelChatRoomMemberRequest {
            chat_room_name: group_id.to_string(),
            user_list: member_ids.to_vec(),
        };
        let envelope: ApiEnvelope<KickResult> = self
            .post(protocol::DEL_CHATROOM_MEMBER_PATH, &request)
            .await?;
        protocol::kick_report_from_response(group_id, envelope)
    }
}
