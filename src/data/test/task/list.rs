use super::*;

/// Tests listing a guild that was never initialized.
///
/// Verifies that an absent list behaves like an empty one instead of failing.
///
/// Expected: empty list
#[test]
fn unknown_guild_is_empty() {
    let registry = TaskRegistry::new();

    assert!(registry.list(Some(GuildId::new(42))).is_empty());
}

/// Tests that listing returns a snapshot rather than a live view.
///
/// Expected: snapshot taken before a later add stays unchanged
#[test]
fn returns_snapshot() {
    let guild = GuildId::new(1);
    let registry = registry_with(guild, &["first"]);

    let snapshot = registry.list(Some(guild));
    registry.add(Some(guild), "second".to_string());

    assert_eq!(snapshot, vec!["first"]);
    assert_eq!(registry.list(Some(guild)), vec!["first", "second"]);
}
