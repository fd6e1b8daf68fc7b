use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Invalidation seam for previously rendered page paths. Actions only ever
/// mark paths stale; filling the cache is the rendering layer's business.
pub trait PageCache {
    fn invalidate(&self, path: &str);
}

/// In-process cache of rendered pages keyed by request path.
///
/// The actions in this crate only ever call [`PageCache::invalidate`].
/// `put` and `get` are the filling side of the contract, owned by the
/// external rendering layer; they exist here so that layer (and the tests
/// standing in for it) can observe what invalidation removes.
#[derive(Clone, Default)]
pub struct RenderCache {
    pages: Arc<Mutex<HashMap<String, String>>>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, path: &str, body: String) {
        let mut pages = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        pages.insert(path.to_string(), body);
    }

    pub fn get(&self, path: &str) -> Option<String> {
        let pages = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        pages.get(path).cloned()
    }
}

impl PageCache for RenderCache {
    fn invalidate(&self, path: &str) {
        let mut pages = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        pages.remove(path);
    }
}
