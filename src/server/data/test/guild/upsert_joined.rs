use super::*;

/// Tests recording a join for a guild the bot has never seen.
///
/// Expected: Ok with an active record using the default prefix
#[tokio::test]
async fn creates_record_with_default_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo
        .upsert_joined(UpsertGuildParams {
            guild_id: 123456789,
            name: "New Guild".to_string(),
        })
        .await?;

    assert_eq!(guild.guild_id, 123456789);
    assert_eq!(guild.name, "New Guild");
    assert_eq!(guild.prefix, "!");
    assert!(guild.is_active);
    assert!(guild.left_at.is_none());

    Ok(())
}

/// Tests rejoining a guild that was left earlier.
///
/// Verifies the record is reactivated, renamed, and keeps its custom prefix.
///
/// Expected: Ok with is_active = true, left_at cleared, prefix unchanged
#[tokio::test]
async fn reactivates_left_guild_and_keeps_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("555")
        .name("Old Name")
        .prefix("$")
        .left_at(Utc::now())
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo
        .upsert_joined(UpsertGuildParams {
            guild_id: 555,
            name: "New Name".to_string(),
        })
        .await?;

    assert_eq!(guild.name, "New Name");
    assert_eq!(guild.prefix, "$");
    assert!(guild.is_active);
    assert!(guild.left_at.is_none());

    let count = repo.get_active().await?.len();
    assert_eq!(count, 1);

    Ok(())
}
