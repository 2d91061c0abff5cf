use super::*;

/// Tests fetching the newest snapshots.
///
/// Expected: Ok with the last 2 snapshots, oldest first
#[tokio::test]
async fn returns_newest_snapshots_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStats)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotStatsRepository::new(db);
    for commands in [1, 2, 3] {
        repo.create(live_stats(commands)).await?;
    }

    let recent = repo.get_recent(2).await?;
    let counts: Vec<i64> = recent.iter().map(|s| s.commands_executed).collect();
    assert_eq!(counts, vec![2, 3]);

    Ok(())
}
