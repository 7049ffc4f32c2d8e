use serenity::all::{ChannelId, GuildId, UserId};
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::{
    bot::command::Dispatcher,
    data::task::TaskRegistry,
    error::command::CommandError,
    model::{invocation::Invocation, reply::Reply},
    service::moderation::MessageFilter,
    startup::{compile_bad_word, compile_shame_channel_pattern},
    state::AppState,
};

mod dance;
mod dispatch;
mod task;

const GUILD: u64 = 1;
const CHANNEL: u64 = 10;

/// Builds state backed by the files in `test`.
fn state_for(test: &TestContext) -> AppState {
    AppState::new(
        TaskRegistry::new(),
        MessageFilter::new(
            vec![compile_bad_word("darn").unwrap()],
            compile_shame_channel_pattern(".*wall.*of.*shame.*").unwrap(),
        ),
        test.dance_path.clone(),
    )
}

fn setup() -> (TestContext, AppState) {
    let test = TestBuilder::new().with_dance_file().build().unwrap();
    let state = state_for(&test);
    (test, state)
}

/// Guild message from a human named "Kiran".
fn invocation(content: &str) -> Invocation {
    Invocation {
        guild_id: Some(GuildId::new(GUILD)),
        channel_id: ChannelId::new(CHANNEL),
        author_name: "Kiran".to_string(),
        author_is_bot: false,
        content: content.to_string(),
        mentions: Vec::new(),
    }
}

fn run(state: &AppState, invocation: &Invocation) -> Result<Vec<Reply>, CommandError> {
    Dispatcher::new()
        .dispatch(state, invocation)
        .expect("message should be a command")
}

/// Runs a command and returns the text of every reply.
fn texts(state: &AppState, content: &str) -> Vec<String> {
    run(state, &invocation(content))
        .unwrap()
        .into_iter()
        .map(|reply| match reply {
            Reply::Text(text) => text,
            Reply::Attachment(path) => panic!("unexpected attachment {}", path.display()),
        })
        .collect()
}
