/// Wire models for the platform API
///
/// This module defines structures for:
/// - Draft: resumable content submissions and their video-asset sub-record
/// - Publish: the finalize response
/// - Series: ordered content collections and their creation request
///
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ========================================
// Draft Models
// ========================================

/// Access tier a draft is published under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessTier {
    Free,
    Paid,
}

impl AccessTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Paid => "Paid",
        }
    }

    /// Parse the wire string; tolerant of casing from older backends
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("free") {
            Some(Self::Free)
        } else if s.eq_ignore_ascii_case("paid") {
            Some(Self::Paid)
        } else {
            None
        }
    }
}

/// Draft upsert request DTO
///
/// `draft_id` present means update-in-place; absent means create, with the
/// assigned id returned in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftUpsertRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub genre: String,
    pub access_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub language: String,
    pub age_restricted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub autoplay_start_seconds: u32,
    pub unlock_from_seconds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
}

/// Draft upsert response DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftUpsertResponse {
    pub draft_id: Uuid,
}

/// Video-asset sub-record of a stored draft
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoAsset {
    pub present: bool,
    pub url: Option<String>,
    pub file_name: Option<String>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Stored draft as returned by fetch/list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRecord {
    pub draft_id: Uuid,
    pub name: String,
    pub description: String,
    pub genre: String,
    pub access_type: String,
    pub amount: Option<f64>,
    pub language: String,
    pub age_restricted: bool,
    pub content_type: Option<String>,
    pub autoplay_start_seconds: u32,
    pub unlock_from_seconds: u32,
    pub community_id: Option<String>,
    pub series: Option<SeriesSummary>,
    pub video: VideoAsset,
    pub expires_at: DateTime<Utc>,
}

impl DraftRecord {
    pub fn access_tier(&self) -> Option<AccessTier> {
        AccessTier::from_str(&self.access_type)
    }
}

// ========================================
// Upload / Publish Models
// ========================================

/// Binary payload for the video upload phase
#[derive(Clone)]
pub struct UploadPayload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

// Payload bytes are large; keep them out of Debug output
impl std::fmt::Debug for UploadPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadPayload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Upload acknowledgement; receipt only, no byte-level progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadAck {
    pub draft_id: Uuid,
}

/// Finalize response DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
    pub content_id: Uuid,
}

// ========================================
// Series Models
// ========================================

/// Series as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub id: Uuid,
    pub title: String,
    pub episode_count: i64,
}

/// Create series request DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSeriesRequest {
    pub title: String,
}

// ========================================
// Error Body
// ========================================

/// Error payload shape the backend returns on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
