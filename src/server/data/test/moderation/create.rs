use super::*;

/// Tests writing a mute log with a duration.
///
/// Expected: Ok with the action stored as "mute" and the duration kept
#[tokio::test]
async fn creates_mute_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModerationLogRepository::new(db);
    let log = repo
        .create(CreateModerationLogParams {
            guild_id: 1,
            moderator_id: 2,
            target_id: 3,
            action: ModerationAction::Mute,
            reason: None,
            duration: Some(10),
        })
        .await?;

    assert_eq!(log.action, ModerationAction::Mute);
    assert_eq!(log.duration, Some(10));
    assert_eq!(log.target_id, 3);

    let stored = repo.get_recent_for_guild(1, 10).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].log_id, log.log_id);

    Ok(())
}

/// Tests that a stored action the domain does not know is reported as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_action() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::moderation_log::ModerationLogFactory::new(db, "1")
        .action("warn")
        .build()
        .await?;

    let repo = ModerationLogRepository::new(db);
    let result = repo.get_recent_for_guild(1, 10).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
