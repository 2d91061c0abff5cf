//! Shared connection state of the bot.
//!
//! Written by the `ready` handler and startup code, read by the `debug` and `stats`
//! commands, the stats scheduler and the status endpoint.

use serenity::all::ShardManager;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

/// Point-in-time view of the bot's connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub online: bool,
    pub user_id: Option<u64>,
    pub tag: Option<String>,
}

#[derive(Default)]
struct StatusInner {
    online: bool,
    user_id: Option<u64>,
    tag: Option<String>,
    shard_manager: Option<Arc<ShardManager>>,
}

#[derive(Clone)]
pub struct BotStatus {
    inner: Arc<RwLock<StatusInner>>,
    started_at: Instant,
}

impl Default for BotStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStatus {
    /// Creates an offline status; uptime is measured from this call.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StatusInner::default())),
            started_at: Instant::now(),
        }
    }

    /// Records that the gateway session is ready.
    pub async fn mark_ready(&self, user_id: u64, tag: String) {
        let mut inner = self.inner.write().await;
        inner.online = true;
        inner.user_id = Some(user_id);
        inner.tag = Some(tag);
    }

    pub async fn mark_offline(&self) {
        self.inner.write().await.online = false;
    }

    /// Gives the status access to shard latencies.
    pub async fn attach_shard_manager(&self, shard_manager: Arc<ShardManager>) {
        self.inner.write().await.shard_manager = Some(shard_manager);
    }

    pub async fn snapshot(&self) -> StatusSnapshot {
        let inner = self.inner.read().await;
        StatusSnapshot {
            online: inner.online,
            user_id: inner.user_id,
            tag: inner.tag.clone(),
        }
    }

    /// Average heartbeat latency across shards, `None` before the first heartbeat ack.
    pub async fn latency(&self) -> Option<Duration> {
        let shard_manager = self.inner.read().await.shard_manager.clone()?;
        let runners = shard_manager.runners.lock().await;

        let latencies: Vec<Duration> = runners.values().filter_map(|r| r.latency).collect();
        if latencies.is_empty() {
            return None;
        }
        Some(latencies.iter().sum::<Duration>() / latencies.len() as u32)
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
