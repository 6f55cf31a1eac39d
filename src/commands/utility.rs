use crate::{Context, Error};

#[poise::command(slash_command, prefix_command)]
pub async fn info(ctx: Context<'_>) -> Result<(), Error> {
    let response = "\
        • `/excuse` or `!excuse` - Get a new excuse for why you can't get any work done\n\
        • Mention me with \"excuse\" or \"can't chart\" - Same thing, in conversation\n\
        • `/info` or `!info` - Show this message\n";
    ctx.say(response).await?;
    Ok(())
}
