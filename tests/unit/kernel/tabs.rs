use super::*;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct HandleCounts {
    shown: Cell<usize>,
    disposed: Cell<usize>,
    closed_by_host: Cell<bool>,
}

struct FakeHandle {
    id: String,
    counts: Rc<HandleCounts>,
}

impl ViewHandle for FakeHandle {
    fn id(&self) -> &str {
        &self.id
    }

    fn show(&self) {
        self.counts.shown.set(self.counts.shown.get() + 1);
    }

    fn dispose(self: Box<Self>) {
        self.counts.disposed.set(self.counts.disposed.get() + 1);
    }

    fn is_disposed(&self) -> bool {
        self.counts.closed_by_host.get()
    }
}

fn view(key: ResourceKey, seq: u64, released: &Arc<AtomicUsize>) -> (OpenView, Rc<HandleCounts>) {
    let counts = Rc::new(HandleCounts::default());
    let handle = FakeHandle {
        id: key.id(),
        counts: Rc::clone(&counts),
    };
    let counter = Arc::clone(released);
    let resource = ViewResource::with_release(key.clone(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (OpenView::new(key, seq, Box::new(handle), resource), counts)
}

#[test]
fn insert_then_find() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut registry = TabRegistry::new();
    let (v, counts) = view(ResourceKey::group("g"), 1, &released);
    assert!(registry.insert(v).is_none());

    let found = registry.find(&ResourceKey::group("g")).unwrap();
    assert_eq!(found.id(), "g");
    assert_eq!(found.seq(), 1);
    found.show();
    assert_eq!(counts.shown.get(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn insert_hands_back_the_replaced_view() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut registry = TabRegistry::new();
    let (first, first_counts) = view(ResourceKey::stream("g", "s"), 1, &released);
    let (second, _) = view(ResourceKey::stream("g", "s"), 2, &released);

    assert!(registry.insert(first).is_none());
    let replaced = registry.insert(second).unwrap();
    assert_eq!(replaced.seq(), 1);
    replaced.dispose();

    assert_eq!(first_counts.disposed.get(), 1);
    assert_eq!(released.load(Ordering::SeqCst), 1);
    assert_eq!(registry.find(&ResourceKey::stream("g", "s")).map(OpenView::seq), Some(2));
}

#[test]
fn find_drops_entries_closed_by_the_host() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut registry = TabRegistry::new();
    let (v, counts) = view(ResourceKey::group("g"), 1, &released);
    let _ = registry.insert(v);

    counts.closed_by_host.set(true);
    assert!(registry.get(&ResourceKey::group("g")).is_some());
    assert!(registry.find(&ResourceKey::group("g")).is_none());
    assert!(!registry.contains(&ResourceKey::group("g")));
    assert_eq!(released.load(Ordering::SeqCst), 1);
    assert_eq!(counts.disposed.get(), 0);
}

#[test]
fn release_does_not_dispose_the_handle() {
    let released = Arc::new(AtomicUsize::new(0));
    let (v, counts) = view(ResourceKey::group("g"), 1, &released);
    v.release();
    assert_eq!(counts.disposed.get(), 0);
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn drain_and_ids() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut registry = TabRegistry::new();
    for key in [
        ResourceKey::group("b"),
        ResourceKey::stream("a", "s"),
        ResourceKey::group("a"),
    ] {
        let (v, _) = view(key, 0, &released);
        let _ = registry.insert(v);
    }
    assert_eq!(registry.ids(), vec!["a", "a/s", "b"]);

    let drained = registry.drain();
    assert_eq!(drained.len(), 3);
    assert!(registry.is_empty());
    drop(drained);
    assert_eq!(released.load(Ordering::SeqCst), 3);
}

#[test]
fn group_and_stream_sharing_an_id_are_separate_entries() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut registry = TabRegistry::new();
    let group = ResourceKey::group("/aws/lambda/x");
    let stream = ResourceKey::stream("/aws/lambda", "x");
    assert_eq!(group.id(), stream.id());

    let (g, _) = view(group.clone(), 1, &released);
    let (s, _) = view(stream.clone(), 2, &released);
    assert!(registry.insert(g).is_none());
    assert!(registry.insert(s).is_none());

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find(&group).map(OpenView::key), Some(&group));
    assert_eq!(registry.find(&stream).map(OpenView::key), Some(&stream));
    assert_eq!(registry.ids(), vec!["/aws/lambda/x", "/aws/lambda/x"]);

    drop(registry.remove(&stream));
    assert!(registry.contains(&group));
    assert_eq!(released.load(Ordering::SeqCst), 1);
}
