use crate::messenger::CommandMessenger;
use crate::{Context, Error};

/// Get a new excuse for why you can't get any work done
#[poise::command(slash_command, prefix_command, aliases("cantchart"))]
pub async fn excuse(ctx: Context<'_>) -> Result<(), Error> {
    // GitHub can be slower than Discord's interaction deadline.
    ctx.defer().await?;

    let messenger = CommandMessenger::new(ctx);
    ctx.data().responder.respond(&messenger).await;
    Ok(())
}
