use super::*;

/// Tests storing a snapshot of the live counters.
///
/// Expected: Ok with every counter copied
#[tokio::test]
async fn stores_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotStatsRepository::new(db);
    let snapshot = repo.create(live_stats(42)).await?;

    assert_eq!(snapshot.server_count, 3);
    assert_eq!(snapshot.user_count, 150);
    assert_eq!(snapshot.commands_executed, 42);
    assert_eq!(snapshot.uptime_secs, 60);

    Ok(())
}
