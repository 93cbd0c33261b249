//! Task queue client and worker pool.
//!
//! Jobs are submitted over an mpsc channel to a pool of workers spawned at
//! startup. A submission returns a [`TaskHandle`] whose `get` awaits the
//! worker's reply; there is no timeout and no way to cancel a job once it
//! has been dispatched.

use crate::error::AppError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, Mutex};
use uuid::Uuid;

const QUEUE_DEPTH: usize = 64;

struct Job {
    id: Uuid,
    amount: i64,
    x: i64,
    y: i64,
    reply: oneshot::Sender<i64>,
}

/// Clone-able client handle for the worker pool.
#[derive(Clone)]
pub struct TaskQueue {
    tx: mpsc::Sender<Job>,
}

/// A submitted job. Await [`TaskHandle::get`] for its result.
pub struct TaskHandle {
    id: Uuid,
    reply: oneshot::Receiver<i64>,
}

impl TaskQueue {
    /// Spawns `workers` background workers and returns the client handle.
    pub fn start(workers: usize) -> Self {
        let (tx, rx) = mpsc::channel::<Job>(QUEUE_DEPTH);
        let rx = Arc::new(Mutex::new(rx));

        for worker in 0..workers {
            let rx = Arc::clone(&rx);
            tokio::spawn(async move {
                loop {
                    // Hold the lock only while receiving so other workers can
                    // pick up jobs while this one computes.
                    let job = { rx.lock().await.recv().await };
                    let Some(job) = job else { break };

                    log::debug!("worker {} picked up job {}", worker, job.id);
                    let result = run_computation(job.amount, job.x, job.y).await;

                    // The submitter may have gone away; the result is simply
                    // dropped then.
                    if job.reply.send(result).is_err() {
                        log::debug!("job {} finished but nobody was waiting", job.id);
                    }
                }
                log::info!("worker {} shutting down", worker);
            });
        }

        Self { tx }
    }

    /// Enqueues a job and returns a handle for its result.
    pub async fn submit(&self, amount: i64, x: i64, y: i64) -> Result<TaskHandle, AppError> {
        let id = Uuid::new_v4();
        let (reply_tx, reply_rx) = oneshot::channel();

        let job = Job {
            id,
            amount,
            x,
            y,
            reply: reply_tx,
        };
        self.tx
            .send(job)
            .await
            .map_err(|_| AppError::InternalServerError("task queue is not running".into()))?;

        log::debug!("submitted job {}", id);
        Ok(TaskHandle { id, reply: reply_rx })
    }
}

impl TaskHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Blocks the caller until the worker replies.
    pub async fn get(self) -> Result<i64, AppError> {
        self.reply
            .await
            .map_err(|_| AppError::InternalServerError("worker dropped the job".into()))
    }
}

/// The delegated computation: wait `amount` seconds, then sum the operands.
async fn run_computation(amount: i64, x: i64, y: i64) -> i64 {
    if amount > 0 {
        tokio::time::sleep(Duration::from_secs(amount as u64)).await;
    }
    x + y
}
