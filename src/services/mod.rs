pub mod whitelist;

#[cfg(feature = "youtube_data_api")]
pub mod youtube;
