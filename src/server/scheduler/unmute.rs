//! Timed reversal of voice mutes.
//!
//! Pending unmutes live in a min-heap ordered by fire time and are drained by one
//! worker task. Cancelled tasks are dropped from the task table and their heap
//! entries skipped when they surface.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    sync::{Mutex, Notify},
    task::JoinHandle,
    time::Instant,
};

use crate::server::bot::gateway::DiscordGateway;

/// Upper bound on a single unmute delay, keeping `Instant` arithmetic in range.
const MAX_DELAY: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// What happens to a pending auto-unmute when the member is unmuted or muted again by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmutePolicy {
    /// The task fires on schedule regardless of later commands.
    #[default]
    FireRegardless,
    /// A manual unmute or a new mute of the same member cancels the pending task.
    CancelOnManual,
}

impl FromStr for UnmutePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fire_regardless" => Ok(Self::FireRegardless),
            "cancel_on_manual" => Ok(Self::CancelOnManual),
            other => Err(format!(
                "expected 'fire_regardless' or 'cancel_on_manual', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for UnmutePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FireRegardless => "fire_regardless",
            Self::CancelOnManual => "cancel_on_manual",
        })
    }
}

/// A scheduled unmute of one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmuteTask {
    pub task_id: u64,
    pub guild_id: u64,
    pub user_id: u64,
    pub fire_at: Instant,
}

#[derive(Default)]
struct Queue {
    heap: BinaryHeap<Reverse<(Instant, u64)>>,
    tasks: HashMap<u64, UnmuteTask>,
}

impl Queue {
    /// Fire time of the earliest live task, discarding cancelled heap entries.
    fn next_fire_at(&mut self) -> Option<Instant> {
        while let Some(Reverse((fire_at, task_id))) = self.heap.peek().copied() {
            if self.tasks.contains_key(&task_id) {
                return Some(fire_at);
            }
            self.heap.pop();
        }
        None
    }

    fn take_due(&mut self, now: Instant) -> Vec<UnmuteTask> {
        let mut due = Vec::new();
        while let Some(Reverse((fire_at, task_id))) = self.heap.peek().copied() {
            if fire_at > now {
                break;
            }
            self.heap.pop();
            if let Some(task) = self.tasks.remove(&task_id) {
                due.push(task);
            }
        }
        due
    }
}

struct Inner {
    queue: Mutex<Queue>,
    wake: Notify,
    next_id: AtomicU64,
}

/// Handle to the auto-unmute queue. Clones share the same queue.
#[derive(Clone)]
pub struct UnmuteScheduler {
    inner: Arc<Inner>,
}

impl Default for UnmuteScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl UnmuteScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                queue: Mutex::new(Queue::default()),
                wake: Notify::new(),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Queues an unmute of `user_id` in `guild_id` after `delay`.
    ///
    /// # Returns
    /// - `u64` - Id of the scheduled task
    pub async fn schedule(&self, guild_id: u64, user_id: u64, delay: Duration) -> u64 {
        let task_id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let fire_at = Instant::now() + delay.min(MAX_DELAY);

        {
            let mut queue = self.inner.queue.lock().await;
            queue.heap.push(Reverse((fire_at, task_id)));
            queue.tasks.insert(
                task_id,
                UnmuteTask {
                    task_id,
                    guild_id,
                    user_id,
                    fire_at,
                },
            );
        }
        self.inner.wake.notify_one();

        tracing::debug!(
            "Scheduled unmute {} of user {} in guild {} in {:?}",
            task_id,
            user_id,
            guild_id,
            delay
        );

        task_id
    }

    /// Cancels every pending unmute of `user_id` in `guild_id`.
    ///
    /// # Returns
    /// - `usize` - Number of tasks cancelled
    pub async fn cancel_for(&self, guild_id: u64, user_id: u64) -> usize {
        let mut queue = self.inner.queue.lock().await;
        let before = queue.tasks.len();
        queue
            .tasks
            .retain(|_, task| !(task.guild_id == guild_id && task.user_id == user_id));
        before - queue.tasks.len()
    }

    /// Pending tasks, earliest first.
    pub async fn pending(&self) -> Vec<UnmuteTask> {
        let queue = self.inner.queue.lock().await;
        let mut tasks: Vec<UnmuteTask> = queue.tasks.values().cloned().collect();
        tasks.sort_by_key(|task| (task.fire_at, task.task_id));
        tasks
    }

    /// Spawns the worker that fires due tasks through `gateway`.
    ///
    /// Failures are logged and never retried. The worker runs until the runtime
    /// shuts down or the handle is aborted.
    pub fn start(&self, gateway: Arc<dyn DiscordGateway>) -> JoinHandle<()> {
        let inner = self.inner.clone();

        tokio::spawn(async move {
            tracing::info!("Auto-unmute worker started");

            loop {
                let (due, next) = {
                    let mut queue = inner.queue.lock().await;
                    let due = queue.take_due(Instant::now());
                    (due, queue.next_fire_at())
                };

                for task in due {
                    fire(gateway.as_ref(), &task).await;
                }

                match next {
                    Some(fire_at) => {
                        tokio::select! {
                            _ = tokio::time::sleep_until(fire_at) => {}
                            _ = inner.wake.notified() => {}
                        }
                    }
                    None => inner.wake.notified().await,
                }
            }
        })
    }
}

async fn fire(gateway: &dyn DiscordGateway, task: &UnmuteTask) {
    match gateway
        .set_voice_mute(task.guild_id, task.user_id, false)
        .await
    {
        Ok(()) => tracing::info!(
            "Auto-unmuted user {} in guild {}",
            task.user_id,
            task.guild_id
        ),
        Err(e) => tracing::error!(
            "Failed to auto-unmute user {} in guild {}: {}",
            task.user_id,
            task.guild_id,
            e
        ),
    }
}
