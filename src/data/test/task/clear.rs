use super::*;

/// Tests clearing a populated list.
///
/// Expected: empty list afterwards
#[test]
fn clears_all_tasks() {
    let guild = GuildId::new(1);
    let registry = registry_with(guild, &["a", "b", "c"]);

    registry.clear(Some(guild));

    assert!(registry.list(Some(guild)).is_empty());
}

/// Tests clearing a guild that was never initialized.
///
/// Expected: no panic, list still empty
#[test]
fn clearing_unknown_guild_is_noop() {
    let registry = TaskRegistry::new();

    registry.clear(Some(GuildId::new(9)));

    assert!(registry.list(Some(GuildId::new(9))).is_empty());
}

/// Tests that clearing one guild does not touch another.
///
/// Expected: other guild keeps its tasks
#[test]
fn only_clears_target_guild() {
    let guild_a = GuildId::new(1);
    let guild_b = GuildId::new(2);
    let registry = registry_with(guild_a, &["a"]);
    registry.add(Some(guild_b), "b".to_string());

    registry.clear(Some(guild_a));

    assert!(registry.list(Some(guild_a)).is_empty());
    assert_eq!(registry.list(Some(guild_b)), vec!["b"]);
}
