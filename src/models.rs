use serde::{Deserialize, Serialize};

/// One video search result, mapped from the Data API search.list snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub video_id: String,
    pub title: String,
    pub channel_id: String,
    pub channel_title: String,
    pub published_at: String,
    pub description: String,
    pub thumbnail_url: String,
    /// Attached by the duration enrichment step; None until then (and
    /// stays None when the lookup fails).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
}

/// Aggregate statistics for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub channel_id: String,
    pub subscriber_count: u64,
    pub video_count: u64,
}

/// A user-curated trusted channel, as stored by the whitelist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhitelistChannel {
    pub id: String,
    pub channel_id: String,
    pub channel_name: String,
    pub category: Option<String>,
    pub subscriber_count: Option<u64>,
    pub created_at: String,
}

/// Payload for adding a channel to the whitelist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWhitelistChannel {
    pub channel_id: String,
    pub channel_name: String,
    pub category: Option<String>,
    pub subscriber_count: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    None,
    Whitelist,
    Moderate,
    Strict,
}

/// Threshold parameters for one filter mode. Modes whose behavior is
/// structural (none, whitelist) carry no thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPreset {
    pub mode: FilterMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_subscribers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_video_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_keywords: Option<Vec<String>>,
}

/// Parameters for a keyword search against the Data API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    pub q: String,
    /// 1..=50, defaults to 50 (the upstream per-request cap).
    pub max_results: Option<u32>,
    /// Restrict results to videos published within the last N days.
    pub days: Option<i64>,
}

/// Channel metadata returned by a channel lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub subscriber_count: u64,
    pub video_count: u64,
}
