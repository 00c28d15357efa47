use crate::embed::Embed;
use crate::settings::Settings;

/// Posts dealer announcements somewhere players can see them.
#[async_trait::async_trait]
pub trait Announcer: Send + Sync {
    async fn announce(&self, embed: &Embed) -> anyhow::Result<()>;
}

/// Writes announcements to the log, tagged with the channel they are
/// meant for. Stands in wherever no chat transport is wired up.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    channel: Option<String>,
}

impl Logger {
    pub fn new(channel: Option<String>) -> Self {
        Self { channel }
    }
}

/// Announces to whatever dealer channel is configured.
impl From<&Settings> for Logger {
    fn from(settings: &Settings) -> Self {
        Self::new(settings.dealer_channel.clone())
    }
}

#[async_trait::async_trait]
impl Announcer for Logger {
    async fn announce(&self, embed: &Embed) -> anyhow::Result<()> {
        let channel = self.channel.as_deref().unwrap_or("dealer");
        for line in embed.to_string().lines() {
            log::info!("[#{}] {}", channel, line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_configured_channel() {
        let settings = Settings {
            dealer_channel: Some("1395227013765267566".into()),
            ..Settings::default()
        };
        let logger = Logger::from(&settings);
        assert_eq!(logger.channel.as_deref(), Some("1395227013765267566"));
        assert_eq!(Logger::from(&Settings::default()).channel, None);
    }

    #[tokio::test]
    async fn logging_never_fails() {
        let embed = Embed::new(crate::RED).title("Day 1 | Flop Draw");
        assert!(Logger::default().announce(&embed).await.is_ok());
    }
}
