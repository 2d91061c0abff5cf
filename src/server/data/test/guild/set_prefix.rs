use super::*;

/// Tests setting the prefix of an existing guild.
///
/// Expected: Ok with the new prefix and the name untouched
#[tokio::test]
async fn updates_existing_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("777")
        .name("Keep Me")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo
        .set_prefix(777, "Ignored".to_string(), "?".to_string())
        .await?;

    assert_eq!(guild.prefix, "?");
    assert_eq!(guild.name, "Keep Me");

    Ok(())
}

/// Tests setting a prefix for a guild that has no record yet.
///
/// Expected: Ok with a new active record carrying the prefix
#[tokio::test]
async fn creates_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo
        .set_prefix(888, "Fresh".to_string(), "%%".to_string())
        .await?;

    assert_eq!(guild.guild_id, 888);
    assert_eq!(guild.prefix, "%%");
    assert!(guild.is_active);

    Ok(())
}

/// Tests that prefixes are scoped per guild.
///
/// Expected: Ok with guild B still using the default prefix
#[tokio::test]
async fn prefix_is_scoped_to_one_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db).guild_id("1").build().await?;
    factory::guild::GuildFactory::new(db).guild_id("2").build().await?;

    let repo = GuildRepository::new(db);
    repo.set_prefix(1, "A".to_string(), "?".to_string()).await?;

    let a = repo.find_by_guild_id(1).await?.unwrap();
    let b = repo.find_by_guild_id(2).await?.unwrap();
    assert_eq!(a.prefix, "?");
    assert_eq!(b.prefix, "!");

    Ok(())
}
