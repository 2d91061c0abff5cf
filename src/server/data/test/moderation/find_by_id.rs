use super::*;

/// Tests reading back an entry written by `create`.
///
/// Expected: Ok(Some) with the parsed action and duration
#[tokio::test]
async fn finds_created_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModerationLogRepository::new(db);
    let created = repo
        .create(CreateModerationLogParams {
            guild_id: 1,
            moderator_id: 2,
            target_id: 3,
            action: ModerationAction::Mute,
            reason: None,
            duration: Some(15),
        })
        .await?;

    let found = repo.find_by_id(&created.log_id).await?.unwrap();

    assert_eq!(found.log_id, created.log_id);
    assert_eq!(found.action, ModerationAction::Mute);
    assert_eq!(found.duration, Some(15));

    Ok(())
}

/// Tests looking up an id that was never issued.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_moderation_log(db, "1").await?;

    let found = ModerationLogRepository::new(db).find_by_id("missing").await?;

    assert!(found.is_none());

    Ok(())
}
