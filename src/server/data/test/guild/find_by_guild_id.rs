use super::*;

/// Tests finding an existing guild by its Discord ID.
///
/// Expected: Ok(Some) with the stored prefix
#[tokio::test]
async fn finds_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::GuildFactory::new(db)
        .guild_id("111111111111111111")
        .prefix("?")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id(111111111111111111).await?;

    assert!(guild.is_some());
    let guild = guild.unwrap();
    assert_eq!(guild.guild_id, 111111111111111111);
    assert_eq!(guild.prefix, "?");

    Ok(())
}

/// Tests looking up a guild that has no record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild::create_guild(db).await?;

    let repo = GuildRepository::new(db);
    let guild = repo.find_by_guild_id(42).await?;

    assert!(guild.is_none());

    Ok(())
}
