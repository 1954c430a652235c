use std::rc::Rc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::macros::debug_log;
use crate::messages::Action;
use crate::models::SocialPreview;
use crate::router::{Tagged, TaggedRouter};
use crate::schema_validation::validate_action;

/// Immutable snapshot of every partition, keyed by platform.
///
/// Partitions are `Rc`-shared between snapshots, so a transition that leaves
/// a partition alone hands back the very same allocation.  Use
/// [`CompositeState::same_as`] to test for that and `==` to compare by value.
#[derive(Debug)]
pub struct CompositeState<S> {
    partitions: Vec<(Rc<str>, Rc<S>)>,
}

impl<S> CompositeState<S> {
    pub(crate) fn from_partitions(partitions: Vec<(Rc<str>, Rc<S>)>) -> Self {
        Self { partitions }
    }

    pub(crate) fn entries(&self) -> &[(Rc<str>, Rc<S>)] {
        &self.partitions
    }

    pub fn get(&self, platform: &str) -> Option<&S> {
        self.partition(platform).map(|p| &**p)
    }

    /// The shared handle for a partition, for identity checks.
    pub fn partition(&self, platform: &str) -> Option<&Rc<S>> {
        self.partitions
            .iter()
            .find(|(tag, _)| &**tag == platform)
            .map(|(_, state)| state)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &S)> {
        self.partitions.iter().map(|(tag, state)| (&**tag, &**state))
    }

    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.partitions.iter().map(|(tag, _)| &**tag)
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// True when both snapshots hold the same partition allocations.
    pub fn same_as(&self, other: &Self) -> bool {
        self.partitions.len() == other.partitions.len()
            && self
                .partitions
                .iter()
                .zip(&other.partitions)
                .all(|((a_tag, a), (b_tag, b))| a_tag == b_tag && Rc::ptr_eq(a, b))
    }
}

impl<S> Clone for CompositeState<S> {
    fn clone(&self) -> Self {
        Self {
            partitions: self.partitions.clone(),
        }
    }
}

impl<S: PartialEq> PartialEq for CompositeState<S> {
    fn eq(&self, other: &Self) -> bool {
        self.partitions == other.partitions
    }
}

impl<S: Serialize> Serialize for CompositeState<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.partitions.len()))?;
        for (tag, state) in &self.partitions {
            map.serialize_entry(&**tag, &**state)?;
        }
        map.end()
    }
}

/// Session holder: a router plus the current snapshot.
///
/// Every dispatch bumps `version` whether or not anything changed, so
/// observers can tell dispatches apart.
pub struct Store<S, A> {
    router: TaggedRouter<S, A>,
    state: CompositeState<S>,
    version: u64,
}

impl<S: Clone, A: Tagged> Store<S, A> {
    pub fn new(router: TaggedRouter<S, A>) -> Self {
        let state = router.initial_state();
        Self {
            router,
            state,
            version: 0,
        }
    }

    pub fn state(&self) -> &CompositeState<S> {
        &self.state
    }

    pub fn router(&self) -> &TaggedRouter<S, A> {
        &self.router
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies one action.  Returns true if any partition was replaced.
    pub fn dispatch(&mut self, action: &A) -> bool {
        if !self.router.handles(action.tag()) {
            debug_log!("No partition registered for platform '{}', ignoring", action.tag());
        }

        let next = self.router.transition(Some(&self.state), action);
        let changed = !next.same_as(&self.state);
        self.state = next;
        self.version += 1;
        changed
    }

    /// Back to the registered defaults.
    pub fn reset(&mut self) {
        self.state = self.router.initial_state();
        self.version += 1;
    }
}

pub type PreviewStore = Store<SocialPreview, Action>;

impl Store<SocialPreview, Action> {
    /// Dispatches a raw JSON action.  Anything that fails validation or
    /// decoding is logged and treated as a no-op.
    pub fn dispatch_json(&mut self, raw: &Value) -> bool {
        if !validate_action(raw) {
            debug_log!("Dropping malformed action: {}", raw);
            return false;
        }

        match serde_json::from_value::<Action>(raw.clone()) {
            Ok(action) => self.dispatch(&action),
            Err(e) => {
                debug_log!("Failed to decode action {}: {}", raw, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::social_preview::social_previews_router;
    use serde_json::json;

    fn store() -> PreviewStore {
        Store::new(social_previews_router().unwrap())
    }

    #[test]
    fn dispatch_reports_changes() {
        let mut store = store();
        assert!(store.dispatch(&Action::set_title("facebook", "Hello")));
        assert_eq!(store.state().get("facebook").unwrap().title, "Hello");
        assert_eq!(store.version(), 1);

        assert!(!store.dispatch(&Action::set_title("mastodon", "Hello")));
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn dispatch_json_decodes_wire_actions() {
        let mut store = store();
        assert!(store.dispatch_json(&json!({
            "type": "SET_DESCRIPTION",
            "platform": "twitter",
            "description": "D1",
        })));
        assert_eq!(store.state().get("twitter").unwrap().description, "D1");
    }

    #[test]
    fn dispatch_json_ignores_malformed() {
        let mut store = store();
        let before = store.state().clone();

        assert!(!store.dispatch_json(&json!("SET_TITLE")));
        assert!(!store.dispatch_json(&json!({ "platform": "facebook", "title": "x" })));
        assert!(!store.dispatch_json(&json!({ "type": "SET_TITLE", "platform": "facebook" })));
        assert!(!store.dispatch_json(&json!({ "type": "NOOP", "platform": "facebook" })));

        assert!(store.state().same_as(&before));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = store();
        store.dispatch(&Action::set_image_url("facebook", "http://x/y.png"));
        store.reset();
        assert_eq!(store.state(), &store.router().initial_state());
    }

    #[test]
    fn serializes_as_platform_map() {
        let store = store();
        let value = serde_json::to_value(store.state()).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"facebook".to_string()));
        assert!(keys.contains(&"twitter".to_string()));
        assert_eq!(value["twitter"]["image"]["type"], "");
    }
}
