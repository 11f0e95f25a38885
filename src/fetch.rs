// src/fetch.rs
//
// Loading sources: local files or plain-HTTP static files, fetched on a
// small worker pool. A source that fails to load becomes an empty document;
// the others are unaffected.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    sync::{mpsc, Arc, atomic::{AtomicU64, AtomicUsize, Ordering}},
    thread,
};

use thiserror::Error;

use crate::{
    config::consts::WORKERS,
    core::net,
    csv::CsvDocument,
    progress::Progress,
};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("request to {url} failed")]
    Io {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed URL {0}")]
    BadUrl(String),

    #[error("unsupported URL {0} (only plain http:// is supported)")]
    UnsupportedScheme(String),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("malformed HTTP response from {0}")]
    Malformed(String),
}

/* ---------------- Locations ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    File(PathBuf),
    Http(String),
}

impl Location {
    /// `http(s)://…` stays a URL; anything else is a path under `base`
    /// (absolute paths are kept as-is).
    pub fn resolve(base: &Path, target: &str) -> Self {
        let lower = target.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Location::Http(s!(target))
        } else {
            Location::File(base.join(target))
        }
    }

    pub fn fetch_text(&self) -> Result<String, FetchError> {
        match self {
            Location::File(path) => fs::read_to_string(path)
                .map_err(|source| FetchError::Read { path: path.clone(), source }),
            Location::Http(url) => net::http_get(url),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File(p) => write!(f, "{}", p.display()),
            Location::Http(u) => f.write_str(u),
        }
    }
}

/* ---------------- Requests ---------------- */

/// One source to load. `label` is the game tag or table label.
#[derive(Clone, Debug)]
pub struct Request {
    pub label: String,
    pub location: Location,
}

impl Request {
    pub fn new(label: impl Into<String>, location: Location) -> Self {
        Self { label: label.into(), location }
    }
}

#[derive(Clone, Debug)]
pub struct Loaded {
    pub label: String,
    pub location: Location,
    pub doc: CsvDocument,
    /// Set when the source failed and `doc` is the empty stand-in.
    pub error: Option<String>,
}

impl Loaded {
    pub fn is_ok(&self) -> bool { self.error.is_none() }
}

/// Fetch and parse one source. Failures degrade to an empty document.
pub fn load_one(req: &Request) -> Loaded {
    match req.location.fetch_text() {
        Ok(text) => {
            let doc = CsvDocument::parse(&text);
            logd!("Fetch: {} ← {} (rows={})", req.label, req.location, doc.row_count());
            Loaded { label: req.label.clone(), location: req.location.clone(), doc, error: None }
        }
        Err(e) => {
            let msg = error_chain(&e);
            loge!("Fetch: {} ← {} failed: {msg}", req.label, req.location);
            Loaded {
                label: req.label.clone(),
                location: req.location.clone(),
                doc: CsvDocument::default(),
                error: Some(msg),
            }
        }
    }
}

/// Load every request concurrently and wait for all of them.
/// Results come back in request order.
pub fn load_all(requests: &[Request], mut progress: Option<&mut dyn Progress>) -> Vec<Loaded> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(requests.len());
    }
    if requests.is_empty() {
        if let Some(p) = progress.as_deref_mut() { p.finish(); }
        return Vec::new();
    }

    let reqs = Arc::new(requests.to_vec());
    let cursor = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel::<(usize, Loaded)>();

    let workers = WORKERS.min(reqs.len()).max(1);
    for _ in 0..workers {
        let reqs = Arc::clone(&reqs);
        let cursor = Arc::clone(&cursor);
        let tx = tx.clone();
        thread::spawn(move || {
            loop {
                let i = cursor.fetch_add(1, Ordering::Relaxed);
                if i >= reqs.len() {
                    break;
                }
                if tx.send((i, load_one(&reqs[i]))).is_err() {
                    break;
                }
            }
        });
    }
    drop(tx); // main thread is sole receiver now

    let mut slots: Vec<Option<Loaded>> = vec![None; reqs.len()];
    for (i, loaded) in rx.iter() {
        if let Some(p) = progress.as_deref_mut() {
            match &loaded.error {
                None => p.item_done(&loaded.label),
                Some(e) => p.item_failed(&loaded.label, e),
            }
        }
        slots[i] = Some(loaded);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // A worker that died mid-request leaves a hole; treat it as a failed source.
    slots
        .into_iter()
        .zip(reqs.iter())
        .map(|(slot, req)| slot.unwrap_or_else(|| Loaded {
            label: req.label.clone(),
            location: req.location.clone(),
            doc: CsvDocument::default(),
            error: Some(s!("worker stopped before finishing")),
        }))
        .collect()
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut msg = e.to_string();
    let mut cur = e.source();
    while let Some(inner) = cur {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        cur = inner.source();
    }
    msg
}

/* ---------------- Request tokens ---------------- */

/// Identifies one load request; compare against the `Generation` before committing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token(u64);

/// Monotonic request counter. Starting a new load makes older tokens stale.
#[derive(Clone, Debug, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    pub fn new() -> Self { Self::default() }

    pub fn begin(&self) -> Token {
        Token(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: Token) -> bool {
        self.0.load(Ordering::SeqCst) == token.0
    }
}
