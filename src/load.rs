// src/load.rs
//
// Page-visit loading.
//
// Each visit that needs data calls `Loader::start`, which runs the fetch on a
// worker thread and reports back over the loader's channel. The UI calls
// `poll` once per frame and renders from the returned `LoadState`. Starting a
// new load bumps the generation; deliveries tagged with an older generation
// are dropped on arrival.

use std::sync::{
    Arc, Mutex,
    mpsc::{self, Receiver, Sender},
};
use std::thread;

use crate::{
    error::FetchError,
    progress::Progress,
    record::Directory,
};

#[derive(Clone, Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Failed(String),
    Ready(Arc<Directory>),
}

impl LoadState {
    pub fn from_result(res: Result<Directory, FetchError>) -> Self {
        match res {
            Ok(dir) => LoadState::Ready(Arc::new(dir)),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool { matches!(self, LoadState::Loading) }

    pub fn directory(&self) -> Option<&Arc<Directory>> {
        match self {
            LoadState::Ready(dir) => Some(dir),
            _ => None,
        }
    }
}

type Delivery = (u64, Result<Directory, FetchError>);

pub struct Loader {
    generation: u64,
    state: LoadState,
    // One channel for the loader's lifetime; every worker gets a clone of `tx`.
    tx: Sender<Delivery>,
    rx: Receiver<Delivery>,
    /// Deliveries discarded because a newer load had started
    dropped: u64,
    /// Last progress line, shared with the worker
    status: Arc<Mutex<String>>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(s!())))
    }
}

impl Loader {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        let (tx, rx) = mpsc::channel::<Delivery>();
        Self { generation: 0, state: LoadState::Loading, tx, rx, dropped: 0, status }
    }

    pub fn generation(&self) -> u64 { self.generation }
    pub fn state(&self) -> &LoadState { &self.state }
    pub fn dropped(&self) -> u64 { self.dropped }

    /// Begin a fresh load. Any load still in flight is superseded.
    /// `make_progress` builds the worker's progress sink from the shared status;
    /// `fetch` runs on the worker (the app passes `sources::load`).
    pub fn start<P, F, L>(&mut self, make_progress: F, fetch: L)
    where
        P: Progress + Send + 'static,
        F: FnOnce(Arc<Mutex<String>>) -> P,
        L: FnOnce(&mut dyn Progress) -> Result<Directory, FetchError> + Send + 'static,
    {
        self.generation += 1;
        let generation = self.generation;
        self.state = LoadState::Loading;

        let tx = self.tx.clone();
        let mut progress = make_progress(Arc::clone(&self.status));
        logd!("Loader: start generation={}", generation);

        thread::spawn(move || {
            let res = fetch(&mut progress);
            // Receiver gone means the app has shut down; nothing to do.
            let _ = tx.send((generation, res));
        });
    }

    /// Install a finished result directly. Supersedes anything in flight.
    pub fn settle(&mut self, res: Result<Directory, FetchError>) {
        self.generation += 1;
        self.state = LoadState::from_result(res);
    }

    /// Pick up finished loads. Returns true when the state changed this call.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok((generation, res)) = self.rx.try_recv() {
            if generation != self.generation {
                logd!("Loader: dropping stale generation={} (current={})", generation, self.generation);
                self.dropped += 1;
                continue;
            }
            self.state = LoadState::from_result(res);
            changed = true;
        }
        changed
    }

    pub fn status(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}
