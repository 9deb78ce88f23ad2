//! Identification orchestrator.
//!
//! Dispatches one identification attempt to exactly one backend and
//! normalizes the outcome into the unified [`Identification`] shape.
//! The orchestrator holds no per-call state: each call is a single-shot
//! dispatch, and nothing is cached or carried between calls.

use crate::db::SpeciesDb;
use crate::error::{Error, Result};
use crate::identify::{Identification, Mode, SpeciesDetails};
use crate::media::ImageHandle;
use async_trait::async_trait;
use tracing::{debug, info};

/// Port to the remote identification service.
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    /// Identify the image with a single remote inference round trip.
    async fn identify(&self, image: &ImageHandle) -> Result<SpeciesDetails>;
}

/// Port to the on-device classifier.
#[async_trait]
pub trait LocalClassifier: Send + Sync {
    /// Classify the image, returning the highest-confidence label.
    async fn classify(&self, image: &ImageHandle) -> Result<String>;
}

/// On-device classifier availability for the lifetime of the session.
///
/// Initialization failure is permanent: every offline call fails with the
/// same reason, while online mode is unaffected.
#[derive(Debug)]
pub enum LocalState<L> {
    /// The classifier initialized and is ready for inference.
    Ready(L),
    /// The classifier failed to initialize, with the recorded reason.
    Unavailable(String),
}

/// Dispatches identification attempts to the selected backend.
pub struct Identifier<R, L> {
    remote: R,
    local: LocalState<L>,
    db: SpeciesDb,
}

impl<R: RemoteBackend, L: LocalClassifier> Identifier<R, L> {
    /// Create an orchestrator over the two backends and the species table.
    pub fn new(remote: R, local: LocalState<L>, db: SpeciesDb) -> Self {
        Self { remote, local, db }
    }

    /// Run one identification attempt.
    ///
    /// Exactly one backend is invoked per call; with no image, neither is.
    pub async fn identify(
        &self,
        image: Option<&ImageHandle>,
        mode: Mode,
    ) -> Result<Identification> {
        let image = image.ok_or(Error::NoImageSelected)?;

        match mode {
            Mode::Online => {
                debug!("Identifying online: {}", image.path().display());
                self.remote.identify(image).await.map(Identification::Found)
            }
            Mode::Offline => self.identify_offline(image).await,
        }
    }

    async fn identify_offline(&self, image: &ImageHandle) -> Result<Identification> {
        let classifier = match &self.local {
            LocalState::Ready(classifier) => classifier,
            LocalState::Unavailable(reason) => {
                return Err(Error::ClassifierUnavailable {
                    reason: reason.clone(),
                });
            }
        };

        debug!("Identifying offline: {}", image.path().display());
        let label = classifier.classify(image).await?;
        info!("Classifier predicted: {label}");

        match self.db.lookup(&label) {
            Some(record) => Ok(Identification::Found(SpeciesDetails::from_record(record))),
            None => Ok(Identification::NotFound { label }),
        }
    }
}
