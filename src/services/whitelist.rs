use crate::models::{NewWhitelistChannel, WhitelistChannel};
use log::info;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WhitelistError {
    #[error("channel {0} is already in the whitelist")]
    Duplicate(String),
    #[error("no whitelist entry with id {0}")]
    NotFound(String),
}

/// In-memory set of user-curated trusted channels. `channel_id` is unique
/// across entries; adding a known channel is a conflict, mirroring the
/// unique constraint of the backing store.
#[derive(Debug, Default)]
pub struct WhitelistStore {
    channels: Vec<WhitelistChannel>,
}

impl WhitelistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, new: NewWhitelistChannel) -> Result<WhitelistChannel, WhitelistError> {
        if self
            .channels
            .iter()
            .any(|channel| channel.channel_id == new.channel_id)
        {
            return Err(WhitelistError::Duplicate(new.channel_id));
        }

        let channel = WhitelistChannel {
            id: format!("{}_{}", chrono::Utc::now().timestamp(), new.channel_id),
            channel_id: new.channel_id,
            channel_name: new.channel_name,
            category: new.category,
            subscriber_count: new.subscriber_count,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        info!(
            "Added channel to whitelist: {} ({})",
            channel.channel_name, channel.channel_id
        );

        self.channels.push(channel.clone());
        Ok(channel)
    }

    /// Entries newest first, optionally restricted to one category.
    pub fn list(&self, category: Option<&str>) -> Vec<&WhitelistChannel> {
        let mut entries: Vec<&WhitelistChannel> = self
            .channels
            .iter()
            .filter(|channel| match category {
                Some(category) => channel.category.as_deref() == Some(category),
                None => true,
            })
            .collect();

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }

    pub fn remove(&mut self, id: &str) -> Result<WhitelistChannel, WhitelistError> {
        match self.channels.iter().position(|channel| channel.id == id) {
            Some(position) => {
                let channel = self.channels.remove(position);
                info!(
                    "Removed channel from whitelist: {} ({})",
                    channel.channel_name, channel.channel_id
                );
                Ok(channel)
            }
            None => Err(WhitelistError::NotFound(id.to_string())),
        }
    }

    /// The projection the filter engine consumes.
    pub fn channel_id_set(&self) -> HashSet<String> {
        self.channels
            .iter()
            .map(|channel| channel.channel_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
