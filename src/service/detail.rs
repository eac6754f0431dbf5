use std::sync::Arc;

use tokio::sync::watch;

use crate::app::Result;
use crate::domain::{Ayah, LoadPhase};
use crate::quran::QuranApi;

/// Published state of one surah's verses.
///
/// `surah` tracks the most recent request; after a failure the retained
/// `ayahs` may still belong to an earlier surah.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub phase: LoadPhase,
    pub surah: Option<u32>,
    pub ayahs: Vec<Ayah>,
    pub error: Option<String>,
    // Monotonic request id; a response is applied only when it still matches.
    seq: u64,
}

/// Owns the verse set of the selected surah.
pub struct SurahDetailService {
    client: Arc<dyn QuranApi + Send + Sync>,
    tx: watch::Sender<DetailState>,
}

impl SurahDetailService {
    pub fn new(client: Arc<dyn QuranApi + Send + Sync>) -> Self {
        Self {
            client,
            tx: watch::Sender::new(DetailState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DetailState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.tx.subscribe()
    }

    /// Fetch the verses of `number`, replacing the current set on success.
    ///
    /// Selecting a different surah while a load is in flight supersedes it:
    /// the older response is discarded when it arrives. Re-requesting the
    /// surah already being loaded is a no-op.
    pub async fn load(&self, number: u32) -> Result<()> {
        let mut seq = 0;
        let entered = self.tx.send_if_modified(|state| {
            if state.phase.is_loading() && state.surah == Some(number) {
                return false;
            }
            state.phase = LoadPhase::Loading;
            state.surah = Some(number);
            state.seq += 1;
            seq = state.seq;
            true
        });
        if !entered {
            tracing::debug!(surah = number, "detail load already in flight, ignoring");
            return Ok(());
        }

        match self.client.fetch_surah_detail(number).await {
            Ok(ayahs) => {
                let applied = self.tx.send_if_modified(|state| {
                    if state.seq != seq {
                        return false;
                    }
                    state.phase = LoadPhase::Loaded;
                    state.ayahs = ayahs;
                    state.error = None;
                    true
                });
                if applied {
                    tracing::info!(surah = number, "surah detail loaded");
                } else {
                    tracing::debug!(surah = number, "discarding superseded detail response");
                }
                Ok(())
            }
            Err(e) => {
                let applied = self.tx.send_if_modified(|state| {
                    if state.seq != seq {
                        return false;
                    }
                    state.phase = LoadPhase::Failed;
                    state.error = Some(e.to_string());
                    true
                });
                if applied {
                    tracing::error!(surah = number, "surah detail load failed: {}", e);
                } else {
                    tracing::debug!(surah = number, "discarding superseded detail failure");
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;
    use url::Url;

    use super::*;
    use crate::app::MinbarError;
    use crate::domain::Surah;

    fn ayahs_for(surah: u32) -> Vec<Ayah> {
        (1..=3)
            .map(|id| Ayah {
                id,
                text: format!("verse {} of surah {}", id, surah),
                audio: Url::parse(&format!("https://cdn.example.org/{}/{}.mp3", surah, id))
                    .unwrap(),
            })
            .collect()
    }

    /// Serves `ayahs_for(n)`; requests for surah 1 block until released.
    struct GatedDetail {
        calls: AtomicUsize,
        started: Notify,
        release: Notify,
    }

    impl GatedDetail {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                started: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl QuranApi for GatedDetail {
        async fn fetch_surah_list(&self) -> Result<Vec<Surah>> {
            unimplemented!("detail tests never fetch the catalog")
        }

        async fn fetch_surah_detail(&self, number: u32) -> Result<Vec<Ayah>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if number == 1 {
                self.started.notify_one();
                self.release.notified().await;
            }
            Ok(ayahs_for(number))
        }
    }

    /// Fails surah 1, serves everything else.
    struct FlakyDetail;

    #[async_trait]
    impl QuranApi for FlakyDetail {
        async fn fetch_surah_list(&self) -> Result<Vec<Surah>> {
            unimplemented!("detail tests never fetch the catalog")
        }

        async fn fetch_surah_detail(&self, number: u32) -> Result<Vec<Ayah>> {
            if number == 1 {
                Err(MinbarError::Other("connection reset".into()))
            } else {
                Ok(ayahs_for(number))
            }
        }
    }

    #[tokio::test]
    async fn test_load_selects_surah() {
        let service = SurahDetailService::new(Arc::new(FlakyDetail));

        service.load(2).await.unwrap();

        let state = service.state();
        assert_eq!(state.phase, LoadPhase::Loaded);
        assert_eq!(state.surah, Some(2));
        assert_eq!(state.ayahs, ayahs_for(2));
    }

    #[tokio::test]
    async fn test_new_selection_replaces_prior_set() {
        let service = SurahDetailService::new(Arc::new(FlakyDetail));

        service.load(2).await.unwrap();
        service.load(3).await.unwrap();

        let state = service.state();
        assert_eq!(state.surah, Some(3));
        assert_eq!(state.ayahs, ayahs_for(3));
    }

    #[tokio::test]
    async fn test_failure_retains_prior_set() {
        let service = SurahDetailService::new(Arc::new(FlakyDetail));

        service.load(2).await.unwrap();
        assert!(service.load(1).await.is_err());

        let state = service.state();
        assert_eq!(state.phase, LoadPhase::Failed);
        assert_eq!(state.surah, Some(1));
        assert_eq!(state.ayahs, ayahs_for(2));
        assert_eq!(state.error.as_deref(), Some("connection reset"));
    }

    #[tokio::test]
    async fn test_stale_response_discarded_after_supersession() {
        let client = Arc::new(GatedDetail::new());
        let service = Arc::new(SurahDetailService::new(client.clone()));

        let stale = tokio::spawn({
            let service = service.clone();
            async move { service.load(1).await }
        });
        client.started.notified().await;

        // Selecting a different surah supersedes the in-flight request.
        service.load(2).await.unwrap();
        assert_eq!(service.state().ayahs, ayahs_for(2));

        client.release.notify_one();
        stale.await.unwrap().unwrap();

        // The late response for surah 1 must not overwrite surah 2's verses.
        let state = service.state();
        assert_eq!(state.phase, LoadPhase::Loaded);
        assert_eq!(state.surah, Some(2));
        assert_eq!(state.ayahs, ayahs_for(2));
    }

    #[tokio::test]
    async fn test_duplicate_load_same_surah_is_deduplicated() {
        let client = Arc::new(GatedDetail::new());
        let service = Arc::new(SurahDetailService::new(client.clone()));

        let first = tokio::spawn({
            let service = service.clone();
            async move { service.load(1).await }
        });
        client.started.notified().await;

        service.load(1).await.unwrap();
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);

        client.release.notify_one();
        first.await.unwrap().unwrap();
        assert_eq!(service.state().ayahs, ayahs_for(1));
    }
}
