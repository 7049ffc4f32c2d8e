use std::sync::Arc;

use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::{bot::command::Dispatcher, state::AppState};

pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: Arc<AppState>,
    pub dispatcher: Dispatcher,
}

impl Handler {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            dispatcher: Dispatcher::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel the bot can see
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, &self.dispatcher, ctx, message).await;
    }
}
