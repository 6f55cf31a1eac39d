use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use tracing::{debug, error};

use crate::{Context, Error};

/// What the excuse responder needs from the chat host.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), Error>;

    fn log_error(&self, text: &str) {
        error!("{}", text);
    }

    fn log_debug(&self, text: &str) {
        debug!("{}", text);
    }
}

/// Replies into the channel a triggering message came from.
pub struct ChannelMessenger<'a> {
    ctx: &'a serenity::Context,
    channel_id: serenity::ChannelId,
}

impl<'a> ChannelMessenger<'a> {
    pub fn new(ctx: &'a serenity::Context, channel_id: serenity::ChannelId) -> Self {
        ChannelMessenger { ctx, channel_id }
    }
}

#[async_trait]
impl Messenger for ChannelMessenger<'_> {
    async fn send(&self, text: &str) -> Result<(), Error> {
        self.channel_id.say(&self.ctx.http, text).await?;
        Ok(())
    }
}

/// Replies to a slash or prefix command invocation.
pub struct CommandMessenger<'a> {
    ctx: Context<'a>,
}

impl<'a> CommandMessenger<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        CommandMessenger { ctx }
    }
}

#[async_trait]
impl Messenger for CommandMessenger<'_> {
    async fn send(&self, text: &str) -> Result<(), Error> {
        self.ctx.say(text).await?;
        Ok(())
    }
}
