use super::*;

/// Tests removing each valid position.
///
/// Verifies the 1-based index maps to the right element and the rest keep their order.
///
/// Expected: Ok with the removed task, remaining tasks in order
#[test]
fn removes_by_one_based_index() {
    let guild = GuildId::new(1);

    for (index, expected, remaining) in [
        (1, "a", vec!["b", "c"]),
        (2, "b", vec!["a", "c"]),
        (3, "c", vec!["a", "b"]),
    ] {
        let registry = registry_with(guild, &["a", "b", "c"]);

        assert_eq!(registry.remove(Some(guild), index), Ok(expected.to_string()));
        assert_eq!(registry.list(Some(guild)), remaining);
    }
}

/// Tests out-of-range indices, including zero and negatives.
///
/// Verifies the list is left unchanged, even on repeated invalid removals.
///
/// Expected: Err(TaskError::NotFound) and unchanged list
#[test]
fn out_of_range_is_not_found() {
    let guild = GuildId::new(1);
    let registry = registry_with(guild, &["a", "b"]);

    for index in [0, -1, 3, 100, i64::MIN, i64::MAX] {
        assert_eq!(
            registry.remove(Some(guild), index),
            Err(TaskError::NotFound { index })
        );
        assert_eq!(registry.list(Some(guild)), vec!["a", "b"]);
    }
}

/// Tests removing from a guild that was never initialized.
///
/// Expected: Err(TaskError::NotFound) without creating a list
#[test]
fn unknown_guild_is_not_found() {
    let registry = TaskRegistry::new();

    assert_eq!(
        registry.remove(Some(GuildId::new(7)), 1),
        Err(TaskError::NotFound { index: 1 })
    );
}
