use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod excuse;
mod github;
mod listener;
mod messenger;

use config::Config;
use excuse::ExcuseResponder;
use github::GitHubClient;

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

pub struct Data {
    responder: ExcuseResponder,
    bot_id: serenity::UserId,
}

async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        listener::handle_excuse_messages(ctx, new_message, data).await;
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize the logger, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if config.github_token.is_none() {
        warn!("Neither `HUBOT_GITHUB_TOKEN` nor `GITHUB_TOKEN` set; excuses will be unavailable");
    }

    let responder = ExcuseResponder::new(GitHubClient::new(), config.github_token.clone());

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::excuse(), commands::info()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("!".into()),
                // Mentions are handled by the listener.
                mention_as_prefix: false,
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Logged in as {}", ready.user.name);
                Ok(Data {
                    responder,
                    bot_id: ready.user.id,
                })
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await;

    info!("Starting bot...");

    match client {
        Ok(mut client) => {
            if let Err(e) = client.start().await {
                error!("Client error: {}", e);
            }
        }
        Err(e) => error!("Failed to create client: {}", e),
    }
}
