use super::*;

/// Tests adding a task to a guild that has no list yet.
///
/// Verifies that the list is created lazily and the returned number is 1-based.
///
/// Expected: Ok with task number 1 and a one-element list
#[test]
fn creates_list_on_first_add() {
    let registry = TaskRegistry::new();
    let guild = Some(GuildId::new(1));

    let number = registry.add(guild, "water the plants".to_string());

    assert_eq!(number, 1);
    assert_eq!(registry.list(guild), vec!["water the plants"]);
}

/// Tests that tasks keep insertion order and duplicates are allowed.
///
/// Expected: list equals the added sequence including the duplicate
#[test]
fn preserves_order_and_duplicates() {
    let registry = TaskRegistry::new();
    let guild = Some(GuildId::new(1));

    for task in ["a", "b", "a", "c"] {
        registry.add(guild, task.to_string());
    }

    assert_eq!(registry.list(guild), vec!["a", "b", "a", "c"]);
}

/// Tests that adding to one guild leaves every other guild untouched.
///
/// Expected: guild B and the direct-message list stay empty
#[test]
fn isolates_guilds() {
    let registry = TaskRegistry::new();
    let guild_a = Some(GuildId::new(1));
    let guild_b = Some(GuildId::new(2));

    registry.add(guild_a, "only in A".to_string());

    assert_eq!(registry.list(guild_a), vec!["only in A"]);
    assert!(registry.list(guild_b).is_empty());
    assert!(registry.list(None).is_empty());
}

/// Tests that direct messages share a list of their own.
///
/// Expected: task added with no guild is listed under no guild only
#[test]
fn direct_messages_have_their_own_list() {
    let registry = TaskRegistry::new();

    registry.add(None, "dm task".to_string());

    assert_eq!(registry.list(None), vec!["dm task"]);
    assert!(registry.list(Some(GuildId::new(1))).is_empty());
}
