use super::*;

/// Tests that logs are filtered to the requested guild.
///
/// Expected: Ok with only guild 1's logs
#[tokio::test]
async fn filters_by_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::moderation_log::create_moderation_log(db, "1").await?;
    factory::moderation_log::create_moderation_log(db, "2").await?;
    factory::moderation_log::create_moderation_log(db, "1").await?;

    let repo = ModerationLogRepository::new(db);
    let logs = repo.get_recent_for_guild(1, 50).await?;

    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|log| log.guild_id == 1));

    Ok(())
}

/// Tests the bounded suffix ordering.
///
/// Expected: Ok with the last 2 actions, oldest first
#[tokio::test]
async fn returns_most_recent_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for action in ["kick", "ban", "mute"] {
        factory::moderation_log::ModerationLogFactory::new(db, "5")
            .action(action)
            .build()
            .await?;
    }

    let repo = ModerationLogRepository::new(db);
    let logs = repo.get_recent_for_guild(5, 2).await?;

    let actions: Vec<ModerationAction> = logs.iter().map(|log| log.action).collect();
    assert_eq!(actions, vec![ModerationAction::Ban, ModerationAction::Mute]);

    Ok(())
}

/// Tests querying a guild without logs.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_guild_without_logs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModerationLogRepository::new(db);

    assert!(repo.get_recent_for_guild(1, 50).await?.is_empty());

    Ok(())
}
