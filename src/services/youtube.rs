use crate::config::YOUTUBE_API_KEY;
use crate::models::{ChannelInfo, ChannelStats, SearchParams, VideoInfo};
use crate::utils::parse_duration;
use anyhow::{anyhow, Context, Result};
use chrono::{Duration, SecondsFormat, Utc};
use lazy_static::lazy_static;
use log::{error, info};
use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

const YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// The Data API caps id-list endpoints at 50 ids per request.
const MAX_IDS_PER_REQUEST: usize = 50;

const DEFAULT_MAX_RESULTS: u32 = 50;

lazy_static! {
    static ref CHANNEL_ID_RE: Regex =
        Regex::new(r"^UC[0-9A-Za-z_-]{22}$").expect("valid channel id regex");
}

/// Search videos by keyword, newest first.
///
/// Documentation: https://developers.google.com/youtube/v3/docs/search/list
pub async fn search_videos(params: &SearchParams) -> Result<Vec<VideoInfo>> {
    let max_results = params.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
    if !(1..=50).contains(&max_results) {
        return Err(anyhow!("maxResults must be between 1 and 50"));
    }

    let api_key = &*YOUTUBE_API_KEY;
    let mut query: Vec<(&str, String)> = vec![
        ("part", "snippet".to_string()),
        ("type", "video".to_string()),
        ("order", "date".to_string()),
        ("q", params.q.clone()),
        ("maxResults", max_results.to_string()),
        ("key", api_key.clone()),
    ];

    if let Some(days) = params.days {
        if days < 1 {
            return Err(anyhow!("days must be greater than 0"));
        }
        let published_after = Utc::now() - Duration::days(days);
        query.push((
            "publishedAfter",
            published_after.to_rfc3339_opts(SecondsFormat::Secs, true),
        ));
    }

    let client = Client::new();
    let response = client
        .get(format!("{YOUTUBE_API_BASE_URL}/search"))
        .query(&query)
        .send()
        .await
        .context("YouTube search request failed")?;

    if !response.status().is_success() {
        let body = response.json::<Value>().await.unwrap_or_default();
        return Err(anyhow!(
            "YouTube API Error: {} (Code: {})",
            body["error"]["message"].as_str().unwrap_or("unknown"),
            body["error"]["code"].as_i64().unwrap_or(0),
        ));
    }

    let body = response
        .json::<Value>()
        .await
        .context("Failed to parse YouTube search response as JSON")?;

    let videos = parse_search_items(&body);
    info!("Search returned {} videos for '{}'", videos.len(), params.q);
    Ok(videos)
}

/// Fetch aggregate statistics for the given channels, batching the id list
/// to stay under the per-request cap.
///
/// Documentation: https://developers.google.com/youtube/v3/docs/channels
pub async fn fetch_channel_stats(channel_ids: &[String]) -> Result<Vec<ChannelStats>> {
    let client = Client::new();
    let api_key = &*YOUTUBE_API_KEY;
    let mut all_stats = Vec::new();

    for chunk in channel_ids.chunks(MAX_IDS_PER_REQUEST) {
        let url = format!(
            "{YOUTUBE_API_BASE_URL}/channels?part=statistics&id={}&key={api_key}",
            chunk.join(",")
        );

        let response = client
            .get(&url)
            .send()
            .await
            .context("YouTube channels request failed")?
            .json::<Value>()
            .await
            .context("Failed to parse YouTube channels response as JSON")?;

        all_stats.extend(parse_channel_stats_items(&response));
    }

    Ok(all_stats)
}

/// Fetch durations for the given videos, batched like the statistics
/// fetch. A failed batch is logged and skipped so callers proceed without
/// duration data instead of failing the whole search.
///
/// Documentation: https://developers.google.com/youtube/v3/docs/videos
pub async fn fetch_video_durations(video_ids: &[String]) -> HashMap<String, u64> {
    let client = Client::new();
    let api_key = &*YOUTUBE_API_KEY;
    let mut durations = HashMap::new();

    for chunk in video_ids.chunks(MAX_IDS_PER_REQUEST) {
        let url = format!(
            "{YOUTUBE_API_BASE_URL}/videos?part=contentDetails&id={}&key={api_key}",
            chunk.join(",")
        );

        let response = match client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to fetch durations for {} videos: {e:?}", chunk.len());
                continue;
            }
        };

        let body = match response.json::<Value>().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to parse video durations response: {e:?}");
                continue;
            }
        };

        collect_durations(&body, &mut durations);
    }

    durations
}

/// Attach parsed durations to search results. Videos without a looked-up
/// duration keep `duration_seconds = None`.
pub fn attach_durations(videos: &mut [VideoInfo], durations: &HashMap<String, u64>) {
    for video in videos.iter_mut() {
        if let Some(seconds) = durations.get(&video.video_id) {
            video.duration_seconds = Some(*seconds);
        }
    }
}

/// Search videos and enrich each result with its parsed duration.
pub async fn search_videos_with_durations(params: &SearchParams) -> Result<Vec<VideoInfo>> {
    let mut videos = search_videos(params).await?;

    let video_ids: Vec<String> = videos.iter().map(|video| video.video_id.clone()).collect();
    let durations = fetch_video_durations(&video_ids).await;
    attach_durations(&mut videos, &durations);

    Ok(videos)
}

/// Resolve a channel from a URL, an @handle or a raw channel id, then
/// fetch its snippet and statistics.
pub async fn lookup_channel(input: &str) -> Result<ChannelInfo> {
    let client = Client::new();
    let channel_id = resolve_channel_id(&client, input.trim()).await?;

    let api_key = &*YOUTUBE_API_KEY;
    let url = format!(
        "{YOUTUBE_API_BASE_URL}/channels?part=snippet,statistics&id={channel_id}&key={api_key}"
    );

    let response = client
        .get(&url)
        .send()
        .await
        .context("YouTube channel request failed")?
        .json::<Value>()
        .await
        .context("Failed to parse YouTube channel response as JSON")?;

    let channel = &response["items"][0];
    if channel.is_null() {
        return Err(anyhow!("Channel not found: {input}"));
    }

    Ok(channel_info_from_item(channel, channel_id))
}

async fn resolve_channel_id(client: &Client, input: &str) -> Result<String> {
    if CHANNEL_ID_RE.is_match(input) {
        return Ok(input.to_string());
    }

    if let Some(handle) = input.strip_prefix('@') {
        return resolve_by_param(client, "forHandle", handle).await;
    }

    let url = Url::parse(input).map_err(|_| anyhow!("Invalid channel URL or id: {input}"))?;
    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.collect())
        .unwrap_or_default();

    match segments.as_slice() {
        // Format: https://www.youtube.com/channel/UCTeLqJq1mXUX5WWoNXLmOIA
        ["channel", id, ..] => Ok((*id).to_string()),
        // Format: https://www.youtube.com/c/RobertsSpaceInd
        ["c", custom, ..] => resolve_by_param(client, "forUsername", custom).await,
        // Format: https://youtube.com/@RobertsSpaceInd
        [first, ..] => match first.strip_prefix('@') {
            Some(handle) => resolve_by_param(client, "forHandle", handle).await,
            None => Err(anyhow!("Invalid channel URL format: {input}")),
        },
        [] => Err(anyhow!("Invalid channel URL format: {input}")),
    }
}

async fn resolve_by_param(client: &Client, param: &str, value: &str) -> Result<String> {
    let api_key = &*YOUTUBE_API_KEY;
    let url = format!("{YOUTUBE_API_BASE_URL}/channels?part=id&{param}={value}&key={api_key}");

    let response = client
        .get(&url)
        .send()
        .await
        .context("YouTube channel id request failed")?
        .json::<Value>()
        .await
        .context("Failed to parse YouTube channel id response as JSON")?;

    response["items"][0]["id"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| anyhow!("No channel found for {param}={value}"))
}

fn parse_search_items(response: &Value) -> Vec<VideoInfo> {
    let items = match response["items"].as_array() {
        Some(items) => items,
        None => return Vec::new(),
    };

    items.iter().filter_map(video_from_search_item).collect()
}

fn video_from_search_item(item: &Value) -> Option<VideoInfo> {
    // channel results and playlist results carry no videoId; skip them
    let video_id = item["id"]["videoId"].as_str()?;
    let snippet = &item["snippet"];

    let thumbnails = &snippet["thumbnails"];
    let thumbnail_url = ["high", "medium", "default"]
        .iter()
        .find_map(|size| thumbnails[*size]["url"].as_str())
        .unwrap_or("")
        .to_string();

    Some(VideoInfo {
        video_id: video_id.to_string(),
        title: snippet["title"].as_str().unwrap_or("").to_string(),
        channel_id: snippet["channelId"].as_str().unwrap_or("").to_string(),
        channel_title: snippet["channelTitle"].as_str().unwrap_or("").to_string(),
        published_at: snippet["publishedAt"].as_str().unwrap_or("").to_string(),
        description: snippet["description"].as_str().unwrap_or("").to_string(),
        thumbnail_url,
        duration_seconds: None,
    })
}

fn parse_channel_stats_items(response: &Value) -> Vec<ChannelStats> {
    let items = match response["items"].as_array() {
        Some(items) => items,
        None => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| {
            let channel_id = item["id"].as_str()?;
            let statistics = &item["statistics"];

            Some(ChannelStats {
                channel_id: channel_id.to_string(),
                subscriber_count: statistics["subscriberCount"]
                    .as_str()
                    .unwrap_or("0")
                    .parse()
                    .unwrap_or(0),
                video_count: statistics["videoCount"]
                    .as_str()
                    .unwrap_or("0")
                    .parse()
                    .unwrap_or(0),
            })
        })
        .collect()
}

fn collect_durations(response: &Value, durations: &mut HashMap<String, u64>) {
    if let Some(items) = response["items"].as_array() {
        for item in items {
            if let Some(video_id) = item["id"].as_str() {
                let encoded = item["contentDetails"]["duration"].as_str().unwrap_or("");
                durations.insert(video_id.to_string(), parse_duration(encoded));
            }
        }
    }
}

fn channel_info_from_item(channel: &Value, channel_id: String) -> ChannelInfo {
    ChannelInfo {
        channel_id,
        title: channel["snippet"]["title"].as_str().unwrap_or("").to_string(),
        description: channel["snippet"]["description"]
            .as_str()
            .unwrap_or("")
            .to_string(),
        thumbnail_url: channel["snippet"]["thumbnails"]["default"]["url"]
            .as_str()
            .map(String::from),
        subscriber_count: channel["statistics"]["subscriberCount"]
            .as_str()
            .unwrap_or("0")
            .parse()
            .unwrap_or(0),
        video_count: channel["statistics"]["videoCount"]
            .as_str()
            .unwrap_or("0")
            .parse()
            .unwrap_or(0),
    }
}
