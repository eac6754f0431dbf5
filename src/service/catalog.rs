use std::sync::Arc;

use tokio::sync::watch;

use crate::app::Result;
use crate::domain::{LoadPhase, Surah};
use crate::quran::QuranApi;

/// Published state of the surah catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub phase: LoadPhase,
    pub surahs: Vec<Surah>,
    pub error: Option<String>,
}

/// Owns the list of surahs and its loading lifecycle.
pub struct SurahCatalogService {
    client: Arc<dyn QuranApi + Send + Sync>,
    tx: watch::Sender<CatalogState>,
}

impl SurahCatalogService {
    pub fn new(client: Arc<dyn QuranApi + Send + Sync>) -> Self {
        Self {
            client,
            tx: watch::Sender::new(CatalogState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CatalogState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.tx.subscribe()
    }

    /// Fetch the catalog, replacing the collection on success.
    ///
    /// A call while a load is already in flight is a no-op. On failure the
    /// previous collection is retained and the error recorded.
    pub async fn load(&self) -> Result<()> {
        let entered = self.tx.send_if_modified(|state| {
            if state.phase.is_loading() {
                return false;
            }
            state.phase = LoadPhase::Loading;
            true
        });
        if !entered {
            tracing::debug!("catalog load already in flight, ignoring");
            return Ok(());
        }

        match self.client.fetch_surah_list().await {
            Ok(surahs) => {
                tracing::info!(count = surahs.len(), "surah catalog loaded");
                self.tx.send_modify(|state| {
                    state.phase = LoadPhase::Loaded;
                    state.surahs = surahs;
                    state.error = None;
                });
                Ok(())
            }
            Err(e) => {
                tracing::error!("surah catalog load failed: {}", e);
                self.tx.send_modify(|state| {
                    state.phase = LoadPhase::Failed;
                    state.error = Some(e.to_string());
                });
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::app::MinbarError;
    use crate::domain::{Ayah, RevelationType};

    fn sample_surahs() -> Vec<Surah> {
        vec![
            Surah {
                number: 1,
                name: "سورة الفاتحة".into(),
                english_name: "Al-Faatiha".into(),
                revelation_type: RevelationType::Meccan,
            },
            Surah {
                number: 2,
                name: "سورة البقرة".into(),
                english_name: "Al-Baqara".into(),
                revelation_type: RevelationType::Medinan,
            },
        ]
    }

    /// Returns scripted responses in order; panics on extra calls.
    struct ScriptedQuran {
        responses: Mutex<VecDeque<Result<Vec<Surah>>>>,
    }

    impl ScriptedQuran {
        fn new(responses: Vec<Result<Vec<Surah>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
            }
        }
    }

    #[async_trait]
    impl QuranApi for ScriptedQuran {
        async fn fetch_surah_list(&self) -> Result<Vec<Surah>> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected catalog fetch")
        }

        async fn fetch_surah_detail(&self, _number: u32) -> Result<Vec<Ayah>> {
            unimplemented!("catalog tests never fetch detail")
        }
    }

    /// Blocks each fetch until released, counting calls.
    struct GatedQuran {
        calls: AtomicUsize,
        release: Notify,
        surahs: Vec<Surah>,
    }

    impl GatedQuran {
        fn new(surahs: Vec<Surah>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                release: Notify::new(),
                surahs,
            }
        }
    }

    #[async_trait]
    impl QuranApi for GatedQuran {
        async fn fetch_surah_list(&self) -> Result<Vec<Surah>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(self.surahs.clone())
        }

        async fn fetch_surah_detail(&self, _number: u32) -> Result<Vec<Ayah>> {
            unimplemented!("catalog tests never fetch detail")
        }
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let client = Arc::new(ScriptedQuran::new(vec![]));
        let service = SurahCatalogService::new(client);

        let state = service.state();
        assert_eq!(state.phase, LoadPhase::Idle);
        assert!(state.surahs.is_empty());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_load_replaces_collection() {
        let client = Arc::new(ScriptedQuran::new(vec![Ok(sample_surahs())]));
        let service = SurahCatalogService::new(client);

        service.load().await.unwrap();

        let state = service.state();
        assert_eq!(state.phase, LoadPhase::Loaded);
        assert_eq!(state.surahs, sample_surahs());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_failure_retains_prior_collection() {
        let client = Arc::new(ScriptedQuran::new(vec![
            Ok(sample_surahs()),
            Err(MinbarError::Other("connection reset".into())),
        ]));
        let service = SurahCatalogService::new(client);

        service.load().await.unwrap();
        assert!(service.load().await.is_err());

        let state = service.state();
        assert_eq!(state.phase, LoadPhase::Failed);
        assert_eq!(state.surahs, sample_surahs());
        assert_eq!(state.error.as_deref(), Some("connection reset"));
    }

    #[tokio::test]
    async fn test_subscriber_observes_loaded_state() {
        let client = Arc::new(ScriptedQuran::new(vec![Ok(sample_surahs())]));
        let service = SurahCatalogService::new(client);
        let mut rx = service.subscribe();

        service.load().await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().phase, LoadPhase::Loaded);
    }

    #[tokio::test]
    async fn test_duplicate_load_is_deduplicated() {
        let client = Arc::new(GatedQuran::new(sample_surahs()));
        let service = Arc::new(SurahCatalogService::new(client.clone()));

        let first = tokio::spawn({
            let service = service.clone();
            async move { service.load().await }
        });

        // Wait for the first load to reach the gate.
        while client.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(service.state().phase.is_loading());

        // A second call while loading must not issue another fetch.
        service.load().await.unwrap();
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);

        client.release.notify_one();
        first.await.unwrap().unwrap();

        // Exactly one coherent response, never an interleaving of two.
        let state = service.state();
        assert_eq!(state.phase, LoadPhase::Loaded);
        assert_eq!(state.surahs, sample_surahs());
    }
}
