use super::*;

/// Tests recording a usage in a guild.
///
/// Expected: Ok with a generated id and the given fields persisted
#[tokio::test]
async fn records_guild_usage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);
    let usage = repo
        .create(RecordUsageParams {
            guild_id: Some(10),
            user_id: 20,
            command: "kick".to_string(),
        })
        .await?;

    assert!(!usage.usage_id.is_empty());
    assert_eq!(usage.guild_id, Some(10));
    assert_eq!(usage.user_id, 20);
    assert_eq!(usage.command, "kick");

    let stored = entity::prelude::CommandUsage::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].usage_id, usage.usage_id);

    Ok(())
}

/// Tests recording a usage from a direct message.
///
/// Expected: Ok with guild_id = None
#[tokio::test]
async fn records_direct_message_usage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);
    let usage = repo
        .create(RecordUsageParams {
            guild_id: None,
            user_id: 20,
            command: "ping".to_string(),
        })
        .await?;

    assert!(usage.guild_id.is_none());

    Ok(())
}

/// Tests that two records created back to back get distinct ids.
///
/// Expected: Ok with different usage ids
#[tokio::test]
async fn generates_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);
    let params = RecordUsageParams {
        guild_id: None,
        user_id: 1,
        command: "ping".to_string(),
    };
    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.usage_id, second.usage_id);

    Ok(())
}
