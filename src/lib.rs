//! Search YouTube videos, score their channels against trust presets or a
//! user-curated whitelist, and hand a filtered, order-preserving video set
//! to whatever builds the playlist.

pub mod config;
pub mod filter;
pub mod models;
pub mod services;
pub mod utils;

pub use filter::{
    build_stats_index, extract_unique_channel_ids, filter_preset, filter_videos, FILTER_PRESETS,
};
pub use models::{
    ChannelInfo, ChannelStats, FilterMode, FilterPreset, NewWhitelistChannel, SearchParams,
    VideoInfo, WhitelistChannel,
};
pub use utils::parse_duration;
