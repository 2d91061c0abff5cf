use super::*;

/// Tests fetching fewer records than are stored.
///
/// Verifies the result is the last `limit` records, oldest of them first.
///
/// Expected: Ok with the 2 newest records in insertion order
#[tokio::test]
async fn returns_suffix_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for command in ["help", "ping", "stats", "invite"] {
        factory::command_usage::create_usage(db, command).await?;
    }

    let repo = CommandUsageRepository::new(db);
    let recent = repo.get_recent(2).await?;

    let commands: Vec<&str> = recent.iter().map(|u| u.command.as_str()).collect();
    assert_eq!(commands, vec!["stats", "invite"]);

    Ok(())
}

/// Tests fetching with a limit larger than the table.
///
/// Expected: Ok with every record
#[tokio::test]
async fn returns_everything_when_limit_exceeds_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::command_usage::create_usage(db, "help").await?;
    factory::command_usage::create_usage(db, "ping").await?;

    let repo = CommandUsageRepository::new(db);
    let recent = repo.get_recent(100).await?;

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].command, "help");

    Ok(())
}

/// Tests fetching from an empty store.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_usage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);

    assert!(repo.get_recent(100).await?.is_empty());
    assert!(repo.get_recent(0).await?.is_empty());

    Ok(())
}
