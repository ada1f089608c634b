//! Wire format of the messaging backend.
//!
//! Every response is wrapped as `{"Code": .., "Text": .., "Data": ..}`;
//! `Code == 200` means the call itself went through, while the payload may
//! still carry its own status (`baseResponse.ret`).

use serde::{Deserialize, Serialize};

use insight_core::errors::{ApiError, InsightError, InsightResult};
use insight_core::models::{GroupSnapshot, KickReport, MemberRecord};

pub const GET_CHATROOM_INFO_PATH: &str = "group/GetChatRoomInfo";
pub const DEL_CHATROOM_MEMBER_PATH: &str = "group/SendDelDelChatRoomMember";

/// `Code` value of a successful call.
pub const CODE_OK: i64 = 200;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct GetChatRoomInfoRequest {
    #[serde(rename = "ChatRoomWxIdList")]
    pub chat_room_ids: Vec<String>,
}

impl GetChatRoomInfoRequest {
    pub fn single(group_id: &str) -> Self {
        Self {
            chat_room_ids: vec![group_id.to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DelChatRoomMemberRequest {
    #[serde(rename = "ChatRoomName")]
    pub chat_room_name: String,
    #[serde(rename = "UserList")]
    pub user_list: Vec<String>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(rename = "Code")]
    pub code: i64,
    #[serde(rename = "Text", default)]
    pub text: String,
    #[serde(rename = "Data")]
    pub data: Option<T>,
}

/// `{"str": "..."}` wrapper used for most string fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireString {
    #[serde(rename = "str", default)]
    pub value: Option<String>,
}

impl WireString {
    fn non_blank(&self) -> Option<&str> {
        self.value.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BaseResponse {
    #[serde(default)]
    pub ret: i64,
    #[serde(rename = "errMsg", default)]
    pub err_msg: Option<WireString>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRoomInfo {
    #[serde(rename = "contactCount", default)]
    pub contact_count: i64,
    #[serde(rename = "contactList", default)]
    pub contact_list: Vec<ChatRoomContact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRoomContact {
    #[serde(rename = "userName", default)]
    pub user_name: Option<WireString>,
    #[serde(rename = "nickName", default)]
    pub nick_name: Option<WireString>,
    #[serde(rename = "newChatroomData", default)]
    pub chatroom_data: Option<ChatRoomData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRoomData {
    #[serde(default)]
    pub chatroom_member_list: Vec<WireMember>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireMember {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub nick_name: Option<String>,
    /// Id of the inviter; empty when unknown.
    #[serde(default)]
    pub unknow: Option<String>,
}

impl From<WireMember> for MemberRecord {
    fn from(wire: WireMember) -> Self {
        Self {
            id: wire.user_name,
            display_name: wire.nick_name.filter(|n| !n.trim().is_empty()),
            inviter: wire.unknow.filter(|i| !i.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KickResult {
    #[serde(rename = "baseResponse", default)]
    pub base_response: BaseResponse,
    #[serde(rename = "memberList", default)]
    pub member_list: Vec<KickedMember>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KickedMember {
    #[serde(rename = "memberName", default)]
    pub member_name: Option<WireString>,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Turn a `GetChatRoomInfo` response into a snapshot of `group_id`.
pub fn snapshot_from_response(
    group_id: &str,
    envelope: ApiEnvelope<ChatRoomInfo>,
) -> InsightResult<GroupSnapshot> {
    if envelope.code != CODE_OK {
        return Err(ApiError::Rejected {
            code: envelope.code,
            message: envelope.text,
        }
        .into());
    }
    let info = envelope.data.ok_or_else(|| ApiError::Decode {
        reason: "response has no Data".to_string(),
    })?;

    let not_found = || InsightError::GroupNotFound {
        group_id: group_id.to_string(),
    };
    if info.contact_count <= 0 {
        return Err(not_found());
    }
    let contact = info.contact_list.into_iter().next().ok_or_else(not_found)?;

    let group_name = contact
        .nick_name
        .as_ref()
        .and_then(WireString::non_blank)
        .unwrap_or(group_id)
        .to_string();
    let members = contact
        .chatroom_data
        .map(|data| {
            data.chatroom_member_list
                .into_iter()
                .map(MemberRecord::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(GroupSnapshot::new(group_id, group_name, members))
}

/// Turn a `SendDelDelChatRoomMember` response into the list of removed ids.
pub fn kick_report_from_response(
    group_id: &str,
    envelope: ApiEnvelope<KickResult>,
) -> InsightResult<KickReport> {
    let failed = |reason: String| InsightError::KickFailed {
        group_id: group_id.to_string(),
        reason,
    };

    if envelope.code != CODE_OK {
        return Err(failed(format!("code {}: {}", envelope.code, envelope.text)));
    }
    let result = envelope
        .data
        .ok_or_else(|| failed("response has no Data".to_string()))?;
    if result.base_response.ret != 0 {
        let message = result
            .base_response
            .err_msg
            .as_ref()
            .and_then(WireString::non_blank)
            .unwrap_or("no message");
        return Err(failed(format!(
            "ret {}: {message}",
            result.base_response.ret
        )));
    }

    let kicked = result
        .member_list
        .iter()
        .filter_map(|m| m.member_name.as_ref().and_then(WireString::non_blank))
        .map(str::to_string)
        .collect();
    Ok(KickReport { kicked })
}
