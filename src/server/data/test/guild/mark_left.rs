use super::*;

/// Tests marking an active guild as left.
///
/// Verifies the record is kept with is_active = false and left_at set.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deactivates_active_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db).guild_id("321").build().await?;

    let repo = GuildRepository::new(db);
    let changed = repo.mark_left(321).await?;

    assert!(changed);
    let guild = repo.find_by_guild_id(321).await?.unwrap();
    assert!(!guild.is_active);
    assert!(guild.left_at.is_some());

    Ok(())
}

/// Tests marking a guild as left when there is no active record.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let changed = repo.mark_left(999).await?;

    assert!(!changed);

    Ok(())
}
