use std::error::Error as StdError;
use std::fmt;

use rand::Rng;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use thiserror::Error;

use crate::github::{Comment, GitHubClient};
use crate::messenger::Messenger;

const TRIGGER_PATTERN: &str = r"excuse|can['’]?t chart";

/// Discord rejects message content longer than this many characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

const ELLIPSIS: char = '…';

/// Every way fetching an excuse can stop short. `Display` is the log line,
/// `user_message` is what goes back to the chat.
#[derive(Debug, Error)]
pub enum ExcuseError {
    #[error("Neither `HUBOT_GITHUB_TOKEN` nor `GITHUB_TOKEN` set")]
    MissingCredential,

    #[error("HTTP request error: {0}")]
    Transport(String),

    #[error("GitHub API returned 401 Unauthorized. Token may be invalid or expired.")]
    Unauthorized,

    #[error("GitHub API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Error parsing JSON from GitHub: {0}")]
    MalformedPayload(String),

    #[error("GitHub returned no comments")]
    EmptyResult,

    #[error("Unexpected response format: missing comment user information.")]
    UnexpectedShape,
}

impl ExcuseError {
    pub fn user_message(&self) -> String {
        match self {
            ExcuseError::MissingCredential => "`HUBOT_GITHUB_TOKEN` is not set.".to_string(),
            ExcuseError::Transport(message) => format!("Error making request: {}", message),
            ExcuseError::Unauthorized => {
                "Authentication with GitHub failed. Please check the `HUBOT_GITHUB_TOKEN`.".to_string()
            }
            ExcuseError::Upstream { status, .. } => format!("GitHub API error: {}", status),
            ExcuseError::MalformedPayload(_) => "Could not parse response from GitHub.".to_string(),
            ExcuseError::EmptyResult => "No excuses found today.".to_string(),
            ExcuseError::UnexpectedShape => "Something went wrong retrieving the excuse.".to_string(),
        }
    }

    /// An empty comment list is a normal outcome, not a failure.
    pub fn is_logged(&self) -> bool {
        !matches!(self, ExcuseError::EmptyResult)
    }
}

impl From<reqwest::Error> for ExcuseError {
    fn from(err: reqwest::Error) -> Self {
        ExcuseError::Transport(error_chain(&err))
    }
}

/// Joins an error with its `source()` chain, skipping causes already quoted by their parent.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excuse {
    pub body: String,
    pub author: String,
}

impl Excuse {
    /// The chat reply, with the body cut short so the whole line fits in `max_chars`.
    pub fn reply(&self, max_chars: usize) -> String {
        let full = self.to_string();
        if full.chars().count() <= max_chars {
            return full;
        }

        // Two quotes, " -- ", the author and the ellipsis.
        let overhead = self.author.chars().count() + 7;
        let keep = max_chars.saturating_sub(overhead);
        let mut body: String = self.body.chars().take(keep).collect();
        body.push(ELLIPSIS);

        let reply = format!("\"{}\" -- {}", body, self.author);
        if reply.chars().count() <= max_chars {
            reply
        } else {
            reply.chars().take(max_chars).collect()
        }
    }
}

impl fmt::Display for Excuse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" -- {}", self.body, self.author)
    }
}

/// Case-insensitive match on "excuse", "cant chart" or "can't chart" (either apostrophe).
#[derive(Debug, Clone)]
pub struct Trigger {
    pattern: Regex,
}

impl Trigger {
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

impl Default for Trigger {
    fn default() -> Self {
        let pattern = RegexBuilder::new(TRIGGER_PATTERN)
            .case_insensitive(true)
            .build()
            .expect("trigger pattern is a valid regex");
        Trigger { pattern }
    }
}

/// Picks an index uniformly from `0..len`. Only called with `len > 0`.
pub trait IndexPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

pub struct ExcuseResponder {
    github: GitHubClient,
    token: Option<String>,
    picker: Box<dyn IndexPicker>,
    trigger: Trigger,
}

impl ExcuseResponder {
    pub fn new(github: GitHubClient, token: Option<String>) -> Self {
        ExcuseResponder {
            github,
            token,
            picker: Box::new(ThreadRngPicker),
            trigger: Trigger::default(),
        }
    }

    pub fn with_picker(mut self, picker: impl IndexPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Runs one request and sends exactly one reply. Nothing escapes to the caller.
    pub async fn respond(&self, messenger: &dyn Messenger) {
        let reply = match self.fetch_excuse().await {
            Ok(excuse) => {
                messenger.log_debug(&format!(
                    "Author: {}, Comment Body: {}",
                    excuse.author, excuse.body
                ));
                excuse.reply(MAX_MESSAGE_CHARS)
            }
            Err(e) => {
                if e.is_logged() {
                    messenger.log_error(&e.to_string());
                }
                e.user_message()
            }
        };

        if let Err(e) = messenger.send(&reply).await {
            messenger.log_error(&format!("Failed to send excuse response: {}", e));
        }
    }

    pub async fn fetch_excuse(&self) -> Result<Excuse, ExcuseError> {
        let token = self.token.as_deref().ok_or(ExcuseError::MissingCredential)?;

        let response = self.github.fetch_issue_comments(token).await?;

        if response.status == 401 {
            return Err(ExcuseError::Unauthorized);
        }
        if response.status >= 400 {
            return Err(ExcuseError::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        let payload: Value = serde_json::from_str(&response.body)
            .map_err(|e| ExcuseError::MalformedPayload(e.to_string()))?;

        let comments = match payload {
            Value::Array(items) if !items.is_empty() => items,
            _ => return Err(ExcuseError::EmptyResult),
        };

        let index = self.picker.pick(comments.len());
        let chosen = comments
            .into_iter()
            .nth(index)
            .ok_or(ExcuseError::UnexpectedShape)?;

        excuse_from(chosen)
    }
}

fn excuse_from(value: Value) -> Result<Excuse, ExcuseError> {
    let comment: Comment = serde_json::from_value(value).map_err(|_| ExcuseError::UnexpectedShape)?;

    let author = comment.author().ok_or(ExcuseError::UnexpectedShape)?.to_string();
    let body = comment.body.ok_or(ExcuseError::UnexpectedShape)?;

    Ok(Excuse { body, author })
}
