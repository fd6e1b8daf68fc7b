//! RenderCache: stale paths disappear, others are untouched.

use wildhaven::cache::{PageCache, RenderCache};

#[test]
fn invalidate_drops_only_the_named_path() {
    let cache = RenderCache::new();
    cache.put("/account/reservations", "<ul>…</ul>".to_string());
    cache.put("/account/profile", "<form>…</form>".to_string());

    cache.invalidate("/account/reservations");

    assert_eq!(cache.get("/account/reservations"), None);
    assert_eq!(cache.get("/account/profile"), Some("<form>…</form>".to_string()));
}

#[test]
fn invalidating_an_uncached_path_is_a_no_op() {
    let cache = RenderCache::new();
    cache.invalidate("/cabins/9");
    assert_eq!(cache.get("/cabins/9"), None);
}

#[test]
fn put_replaces_a_previous_render() {
    let cache = RenderCache::new();
    cache.put("/cabins/9", "old".to_string());
    cache.put("/cabins/9", "new".to_string());
    assert_eq!(cache.get("/cabins/9"), Some("new".to_string()));
}
