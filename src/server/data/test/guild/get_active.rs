use super::*;

/// Tests listing active guilds when some have been left.
///
/// Expected: Ok with only the active guilds, in join order
#[tokio::test]
async fn excludes_left_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::guild::create_guild(db).await?;
    factory::guild::GuildFactory::new(db)
        .left_at(Utc::now())
        .build()
        .await?;
    let third = factory::guild::create_guild(db).await?;

    let repo = GuildRepository::new(db);
    let guilds = repo.get_active().await?;

    assert_eq!(guilds.len(), 2);
    assert_eq!(guilds[0].guild_id.to_string(), first.guild_id);
    assert_eq!(guilds[1].guild_id.to_string(), third.guild_id);

    Ok(())
}

/// Tests listing active guilds on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guilds = repo.get_active().await?;

    assert!(guilds.is_empty());

    Ok(())
}

/// Tests that a stored guild_id which is not a snowflake surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unparseable_guild_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("not-a-number")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let active = repo.get_active().await;

    assert!(matches!(active, Err(DbErr::Custom(_))));

    Ok(())
}
