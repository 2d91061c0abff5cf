use super::*;

/// Tests finding a stored usage record by its public id.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let stored = factory::create_usage(db, "help").await?;

    let found = CommandUsageRepository::new(db)
        .find_by_id(&stored.usage_id)
        .await?
        .unwrap();

    assert_eq!(found.usage_id, stored.usage_id);
    assert_eq!(found.command, "help");

    Ok(())
}

/// Tests looking up an id that was never issued.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = CommandUsageRepository::new(db).find_by_id("missing").await?;

    assert!(found.is_none());

    Ok(())
}
