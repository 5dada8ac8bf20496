use std::collections::HashMap;

use youtube_extract::services::whitelist::WhitelistStore;
use youtube_extract::{
    build_stats_index, extract_unique_channel_ids, filter_videos, parse_duration, ChannelStats,
    FilterMode, NewWhitelistChannel, VideoInfo,
};

fn video(video_id: &str, channel_id: &str, duration: &str) -> VideoInfo {
    VideoInfo {
        video_id: video_id.to_string(),
        title: format!("Video {video_id}"),
        channel_id: channel_id.to_string(),
        channel_title: format!("Channel {channel_id}"),
        published_at: "2024-06-01T12:00:00Z".to_string(),
        description: "description".to_string(),
        thumbnail_url: format!("https://i.ytimg.com/vi/{video_id}/hq.jpg"),
        duration_seconds: match duration {
            "" => None,
            encoded => Some(parse_duration(encoded)),
        },
    }
}

fn stats(channel_id: &str, subscribers: u64, videos: u64) -> ChannelStats {
    ChannelStats {
        channel_id: channel_id.to_string(),
        subscriber_count: subscribers,
        video_count: videos,
    }
}

#[test]
fn moderate_filter_keeps_only_the_trusted_channel() {
    // channel A has enough subscribers and videos, B never returned
    // statistics, C is below the subscriber threshold
    let videos = vec![
        video("from-a", "ch-a", "PT4M20S"),
        video("from-b", "ch-b", "PT10M"),
        video("from-c", "ch-c", "PT2M"),
    ];

    let channel_ids = extract_unique_channel_ids(&videos);
    assert_eq!(channel_ids, vec!["ch-a", "ch-b", "ch-c"]);

    // the statistics fetch came back without ch-b
    let fetched = vec![stats("ch-a", 15_000, 12), stats("ch-c", 5_000, 20)];
    let index = build_stats_index(&fetched);
    assert!(index.get("ch-b").is_none());

    let filtered = filter_videos(
        videos,
        &fetched,
        FilterMode::Moderate,
        &Default::default(),
        false,
    );

    let surviving: Vec<&str> = filtered.iter().map(|v| v.video_id.as_str()).collect();
    assert_eq!(surviving, vec!["from-a"]);
}

#[test]
fn whitelist_projection_feeds_the_engine() {
    let mut store = WhitelistStore::new();
    store
        .add(NewWhitelistChannel {
            channel_id: "ch-trusted".to_string(),
            channel_name: "Trusted".to_string(),
            category: Some("news".to_string()),
            subscriber_count: Some(1_200),
        })
        .unwrap();

    let videos = vec![
        video("listed-long", "ch-trusted", "PT3M"),
        video("listed-short", "ch-trusted", "PT45S"),
        video("unlisted", "ch-other", "PT3M"),
    ];

    let filtered = filter_videos(
        videos,
        &[],
        FilterMode::Whitelist,
        &store.channel_id_set(),
        true,
    );

    let surviving: Vec<&str> = filtered.iter().map(|v| v.video_id.as_str()).collect();
    assert_eq!(surviving, vec!["listed-long"]);
}

#[test]
fn shorts_filter_applies_even_without_a_trust_filter() {
    let videos = vec![
        video("sixty", "ch-a", "PT1M"),
        video("sixty-one", "ch-a", "PT1M1S"),
        video("no-duration", "ch-a", ""),
    ];

    let filtered = filter_videos(videos, &[], FilterMode::None, &Default::default(), true);

    let surviving: Vec<&str> = filtered.iter().map(|v| v.video_id.as_str()).collect();
    assert_eq!(surviving, vec!["sixty-one", "no-duration"]);
}

#[test]
fn refiltering_a_filtered_set_is_stable() {
    let videos: Vec<VideoInfo> = (0..20)
        .map(|i| {
            let channel = if i % 3 == 0 { "ch-big" } else { "ch-small" };
            video(&format!("v{i}"), channel, "PT2M")
        })
        .collect();
    let fetched = vec![stats("ch-big", 250_000, 80), stats("ch-small", 900, 3)];

    let once = filter_videos(
        videos,
        &fetched,
        FilterMode::Strict,
        &Default::default(),
        true,
    );
    let twice = filter_videos(
        once.clone(),
        &fetched,
        FilterMode::Strict,
        &Default::default(),
        true,
    );

    assert_eq!(once, twice);

    // survivors keep their original relative order
    let ids: Vec<&str> = once.iter().map(|v| v.video_id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort_by_key(|id| id[1..].parse::<u32>().unwrap());
    assert_eq!(ids, sorted);
}

#[test]
fn duration_enrichment_is_optional_per_video() {
    let mut videos = vec![video("v1", "ch-a", ""), video("v2", "ch-a", "")];

    // the duration lookup only resolved one of the two ids
    let durations: HashMap<String, u64> = [("v1".to_string(), 75)].into_iter().collect();
    for v in videos.iter_mut() {
        if let Some(seconds) = durations.get(&v.video_id) {
            v.duration_seconds = Some(*seconds);
        }
    }

    let filtered = filter_videos(videos, &[], FilterMode::None, &Default::default(), true);
    let surviving: Vec<&str> = filtered.iter().map(|v| v.video_id.as_str()).collect();

    // v1 is over the cutoff, v2 is unknown and passes open
    assert_eq!(surviving, vec!["v1", "v2"]);
}
