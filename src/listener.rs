use poise::serenity_prelude as serenity;
use tracing::info;

use crate::excuse::Trigger;
use crate::messenger::ChannelMessenger;
use crate::Data;

/// Replies with an excuse when someone mentions the bot, or DMs it, with a trigger phrase.
pub async fn handle_excuse_messages(ctx: &serenity::Context, msg: &serenity::Message, data: &Data) {
    let addressed = is_addressed(msg.mentions_user_id(data.bot_id), msg.guild_id.is_none());

    if !should_respond(msg.author.bot, addressed, &msg.content, data.responder.trigger()) {
        return;
    }

    info!("Excuse requested by {} in channel {}", msg.author.name, msg.channel_id);

    let messenger = ChannelMessenger::new(ctx, msg.channel_id);
    data.responder.respond(&messenger).await;
}

fn is_addressed(mentions_bot: bool, direct_message: bool) -> bool {
    mentions_bot || direct_message
}

fn should_respond(from_bot: bool, addressed: bool, content: &str, trigger: &Trigger) -> bool {
    !from_bot && addressed && trigger.matches(content)
}
