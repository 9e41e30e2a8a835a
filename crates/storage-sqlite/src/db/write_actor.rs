use super::DbPool;
use crate::errors::StorageError;
use assetdb_core::errors::{Error, Result};
use diesel::SqliteConnection;
use log::error;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job runs against the writer's dedicated connection inside an
// immediate transaction. Results are type-erased so one channel serves all jobs.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type ErasedResult = Result<Box<dyn Any + Send + 'static>>;

/// Maximum number of queued write jobs.
const WRITE_QUEUE_CAPACITY: usize = 1024;

/// Handle for sending jobs to the writer actor.
///
/// All catalogue writes funnel through one connection, so multi-table writes
/// (an equity and its router row, for instance) never interleave.
#[derive(Clone)]
pub struct WriteHandle {
    #[allow(clippy::type_complexity)]
    tx: mpsc::Sender<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<ErasedResult>,
    )>,
}

impl WriteHandle {
    /// Executes `job` on the writer connection and waits for its result.
    ///
    /// The job's changes are committed only when it returns `Ok`.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_gone("writer actor has stopped"))?;

        let boxed = ret_rx
            .await
            .map_err(|_| writer_gone("writer actor dropped the reply"))??;

        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::Unexpected("writer actor returned an unexpected type".to_string()))
    }
}

fn writer_gone(reason: &str) -> Error {
    StorageError::WriterUnavailable(reason.to_string()).into()
}

/// Spawns the single writer task for a catalogue.
///
/// The task takes one connection from `pool` for its whole life and runs jobs
/// serially. It stops once every [`WriteHandle`] has been dropped. Must be
/// called from within a Tokio runtime.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<ErasedResult>,
    )>(WRITE_QUEUE_CAPACITY);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("Writer actor could not acquire a connection: {}", e);
                // Dropping `rx` makes every pending and future exec fail.
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: ErasedResult = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            if let Err(e) = &result {
                error!("Catalogue write rolled back: {}", e);
            }

            // The caller may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
