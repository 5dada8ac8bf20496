use crate::models::{ChannelStats, FilterMode, FilterPreset, VideoInfo};
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Videos at or under this many seconds count as shorts.
const SHORTS_MAX_SECONDS: u64 = 60;

lazy_static! {
    /// Threshold table for the built-in filter modes. The numbers are part
    /// of the observable contract; treat this as configuration data.
    pub static ref FILTER_PRESETS: HashMap<FilterMode, FilterPreset> = {
        let mut presets = HashMap::new();
        presets.insert(
            FilterMode::None,
            FilterPreset {
                mode: FilterMode::None,
                min_subscribers: None,
                min_video_count: None,
                exclude_keywords: None,
            },
        );
        presets.insert(
            FilterMode::Whitelist,
            FilterPreset {
                mode: FilterMode::Whitelist,
                min_subscribers: None,
                min_video_count: None,
                exclude_keywords: None,
            },
        );
        presets.insert(
            FilterMode::Moderate,
            FilterPreset {
                mode: FilterMode::Moderate,
                min_subscribers: Some(10_000),
                min_video_count: Some(10),
                exclude_keywords: None,
            },
        );
        presets.insert(
            FilterMode::Strict,
            FilterPreset {
                mode: FilterMode::Strict,
                min_subscribers: Some(100_000),
                min_video_count: Some(50),
                exclude_keywords: None,
            },
        );
        presets
    };
}

pub fn filter_preset(mode: FilterMode) -> &'static FilterPreset {
    &FILTER_PRESETS[&mode]
}

/// Deduplicated channel ids referenced by a video list, in order of first
/// appearance. Drives the statistics fetch.
pub fn extract_unique_channel_ids(videos: &[VideoInfo]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut channel_ids = Vec::new();

    for video in videos {
        if seen.insert(video.channel_id.as_str()) {
            channel_ids.push(video.channel_id.clone());
        }
    }

    channel_ids
}

/// Index channel statistics by channel id. Later entries overwrite earlier
/// ones; a missing channel stays missing (lookups must distinguish absent
/// from zero-valued).
pub fn build_stats_index(stats: &[ChannelStats]) -> HashMap<&str, &ChannelStats> {
    let mut index = HashMap::new();
    for entry in stats {
        index.insert(entry.channel_id.as_str(), entry);
    }
    index
}

/// Filter a video list under the selected mode, then drop shorts when
/// requested. The two stages are sequential and both preserve input order.
///
/// An empty whitelist with `FilterMode::Whitelist` yields an empty result:
/// an unconfigured whitelist is not "allow all".
pub fn filter_videos(
    videos: Vec<VideoInfo>,
    stats: &[ChannelStats],
    mode: FilterMode,
    whitelist: &HashSet<String>,
    exclude_shorts: bool,
) -> Vec<VideoInfo> {
    let mut filtered = match mode {
        FilterMode::None => videos,
        FilterMode::Whitelist => {
            let mut kept = videos;
            kept.retain(|video| whitelist.contains(&video.channel_id));
            kept
        }
        FilterMode::Moderate | FilterMode::Strict => {
            let preset = filter_preset(mode);
            let index = build_stats_index(stats);
            let mut kept = videos;
            kept.retain(|video| passes_preset(video, &index, preset));
            kept
        }
    };

    if exclude_shorts {
        filtered.retain(|video| match video.duration_seconds {
            // unknown duration is never penalized
            None => true,
            Some(seconds) => seconds > SHORTS_MAX_SECONDS,
        });
    }

    filtered
}

fn passes_preset(
    video: &VideoInfo,
    index: &HashMap<&str, &ChannelStats>,
    preset: &FilterPreset,
) -> bool {
    // a channel missing from the index counts as untrusted
    let stats = match index.get(video.channel_id.as_str()) {
        Some(stats) => *stats,
        None => return false,
    };

    if let Some(min_subscribers) = preset.min_subscribers {
        if stats.subscriber_count < min_subscribers {
            return false;
        }
    }

    if let Some(min_video_count) = preset.min_video_count {
        if stats.video_count < min_video_count {
            return false;
        }
    }

    if let Some(keywords) = &preset.exclude_keywords {
        let title = video.title.to_lowercase();
        let description = video.description.to_lowercase();

        for keyword in keywords {
            let keyword = keyword.to_lowercase();
            if title.contains(&keyword) || description.contains(&keyword) {
                return false;
            }
        }
    }

    true
}
