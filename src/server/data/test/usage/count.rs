use super::*;

/// Tests counting all recorded invocations.
///
/// Expected: Ok(3)
#[tokio::test]
async fn counts_all_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    for _ in 0..3 {
        factory::command_usage::create_usage(db, "ping").await?;
    }

    assert_eq!(repo.count().await?, 3);

    Ok(())
}
