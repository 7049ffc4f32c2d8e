use super::*;

/// Tests adding a task and listing it.
///
/// Expected: "Added task buy milk", then "1. buy milk"
#[test]
fn adds_and_lists_tasks() {
    let (_test, state) = setup();

    assert_eq!(texts(&state, "!task add buy milk"), vec!["Added task buy milk"]);
    assert_eq!(texts(&state, "!task add walk dog"), vec!["Added task walk dog"]);

    assert_eq!(texts(&state, "!task list"), vec!["1. buy milk\n2. walk dog"]);
}

/// Tests listing before anything was added.
///
/// Expected: "There are no tasks. Yay!"
#[test]
fn lists_empty() {
    let (_test, state) = setup();

    assert_eq!(texts(&state, "!task list"), vec!["There are no tasks. Yay!"]);
}

/// Tests that mentioned users get one combined notification.
///
/// Expected: second reply addressing both users
#[test]
fn notifies_mentioned_users() {
    let (_test, state) = setup();
    let mut message = invocation("!task add @Ann and @Bob review");
    message.mentions = vec![UserId::new(100), UserId::new(200)];

    let replies = run(&state, &message).unwrap();

    assert_eq!(
        replies,
        vec![
            Reply::text("Added task @Ann and @Bob review"),
            Reply::text("<@100> <@200> You have a new task!"),
        ]
    );
}

/// Tests `task add` without text.
///
/// Expected: Err(MissingArgument) for "new_task"
#[test]
fn add_requires_text() {
    let (_test, state) = setup();

    assert!(matches!(
        run(&state, &invocation("!task add")),
        Err(CommandError::MissingArgument { param: "new_task" })
    ));
}

/// Tests removing by 1-based number.
///
/// Expected: "Deleted task b" and the remaining list renumbered
#[test]
fn removes_task() {
    let (_test, state) = setup();
    texts(&state, "!task add a");
    texts(&state, "!task add b");
    texts(&state, "!task add c");

    assert_eq!(texts(&state, "!task remove 2"), vec!["Deleted task b"]);
    assert_eq!(texts(&state, "!task list"), vec!["1. a\n2. c"]);
}

/// Tests out-of-range numbers.
///
/// Expected: "No such task" and an unchanged list for 0, negative, past the end and beyond i64
#[test]
fn remove_out_of_range_replies_no_such_task() {
    let (_test, state) = setup();
    texts(&state, "!task add a");

    for index in ["0", "-1", "2", "99999999999999999999", "-99999999999999999999"] {
        assert_eq!(
            texts(&state, &format!("!task remove {}", index)),
            vec!["No such task"]
        );
    }
    assert_eq!(texts(&state, "!task list"), vec!["1. a"]);
}

/// Tests a non-numeric index.
///
/// Expected: Err(BadArgument) for "task_index"
#[test]
fn remove_rejects_non_integer() {
    let (_test, state) = setup();

    match run(&state, &invocation("!task remove two")) {
        Err(CommandError::BadArgument { param, value, .. }) => {
            assert_eq!(param, "task_index");
            assert_eq!(value, "two");
        }
        other => panic!("expected BadArgument, got {:?}", other),
    }
}

/// Tests clearing the list.
///
/// Expected: "Cleared tasks" followed by an empty list
#[test]
fn clears_tasks() {
    let (_test, state) = setup();
    texts(&state, "!task add a");

    assert_eq!(texts(&state, "!task clear"), vec!["Cleared tasks"]);
    assert_eq!(texts(&state, "!task list"), vec!["There are no tasks. Yay!"]);
}

/// Tests that each guild sees only its own tasks.
///
/// Expected: guild 2 list empty after guild 1 adds
#[test]
fn isolates_guilds() {
    let (_test, state) = setup();
    texts(&state, "!task add a");

    let mut other_guild = invocation("!task list");
    other_guild.guild_id = Some(GuildId::new(2));

    assert_eq!(
        run(&state, &other_guild).unwrap(),
        vec![Reply::text("There are no tasks. Yay!")]
    );
}

/// Tests `task` without or with an unknown subcommand.
///
/// Expected: group help listing every subcommand
#[test]
fn replies_group_help_for_unknown_subcommand() {
    let (_test, state) = setup();

    for content in ["!task", "!task frobnicate"] {
        let replies = texts(&state, content);
        assert_eq!(replies.len(), 1);
        let help = &replies[0];
        assert!(help.starts_with("```\n!task\n\nManage tasks"));
        for sub in ["add", "clear", "list", "remove"] {
            assert!(help.contains(&format!("  {}", sub)), "missing {} in {}", sub, help);
        }
    }
}
