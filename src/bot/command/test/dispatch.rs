use super::*;

/// Tests that ordinary messages are not commands.
///
/// Expected: None
#[test]
fn ignores_non_commands() {
    let (_test, state) = setup();
    let dispatcher = Dispatcher::new();

    for content in ["hello", "", "!", "! hello", "say !hello"] {
        assert!(
            dispatcher.dispatch(&state, &invocation(content)).is_none(),
            "{:?} was dispatched",
            content
        );
    }
}

/// Tests that bots cannot run commands.
///
/// Expected: None for a bot author
#[test]
fn ignores_bots() {
    let (_test, state) = setup();
    let mut message = invocation("!hello");
    message.author_is_bot = true;

    assert!(Dispatcher::new().dispatch(&state, &message).is_none());
}

/// Tests an unknown command name.
///
/// Expected: Err(CommandNotFound) with the name
#[test]
fn unknown_command_is_error() {
    let (_test, state) = setup();

    match run(&state, &invocation("!frobnicate now")) {
        Err(CommandError::CommandNotFound(name)) => assert_eq!(name, "frobnicate"),
        other => panic!("expected CommandNotFound, got {:?}", other),
    }
}

/// Tests that command names are case sensitive.
///
/// Expected: Err(CommandNotFound) for "HELLO"
#[test]
fn names_are_case_sensitive() {
    let (_test, state) = setup();

    assert!(matches!(
        run(&state, &invocation("!HELLO")),
        Err(CommandError::CommandNotFound(_))
    ));
}

/// Tests that direct messages share one task list.
///
/// Expected: a task added in one DM is listed in another
#[test]
fn direct_messages_share_task_list() {
    let (_test, state) = setup();
    let mut add = invocation("!task add dm task");
    add.guild_id = None;
    let mut list = invocation("!task list");
    list.guild_id = None;
    list.channel_id = ChannelId::new(CHANNEL + 1);

    run(&state, &add).unwrap();

    assert_eq!(run(&state, &list).unwrap(), vec![Reply::text("1. dm task")]);
}
