//! Tagged state router: one shared reducer multiplexed over named partitions.
//!
//! Each registered [`Partition`] owns a slot in the [`CompositeState`].  An
//! action only reaches the partition whose platform equals the action's
//! [`Tagged::tag`]; every other partition is passed through untouched (same
//! `Rc`, reducer never called).

use std::collections::HashSet;
use std::rc::Rc;

use crate::error::RouterError;
use crate::state::CompositeState;

/// Anything that names the partition it is addressed to.
pub trait Tagged {
    fn tag(&self) -> &str;
}

/// A reducer over one partition.  Returns true if the action was handled;
/// when it returns false the router keeps the previous partition value.
pub type Reducer<S, A> = fn(&mut S, &A) -> bool;

/// One `(platform, initial state, reducer)` registration.
pub struct Partition<S, A> {
    platform: Rc<str>,
    initial: Rc<S>,
    reducer: Reducer<S, A>,
}

impl<S, A> Partition<S, A> {
    pub fn new(platform: &str, initial: S, reducer: Reducer<S, A>) -> Self {
        Self {
            platform: Rc::from(platform),
            initial: Rc::new(initial),
            reducer,
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }
}

pub struct TaggedRouter<S, A> {
    partitions: Vec<Partition<S, A>>,
}

impl<S: Clone, A: Tagged> TaggedRouter<S, A> {
    /// Builds a router from an explicit list of partitions.  Platforms must
    /// be non-empty and unique; order is kept for iteration and output.
    pub fn new(partitions: Vec<Partition<S, A>>) -> Result<Self, RouterError> {
        if partitions.is_empty() {
            return Err(RouterError::NoPartitions);
        }

        let mut seen = HashSet::new();
        for partition in &partitions {
            if partition.platform.is_empty() {
                return Err(RouterError::EmptyPlatform);
            }
            if !seen.insert(partition.platform()) {
                return Err(RouterError::DuplicatePlatform(partition.platform().to_string()));
            }
        }

        Ok(Self { partitions })
    }

    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.partitions.iter().map(Partition::platform)
    }

    pub fn handles(&self, platform: &str) -> bool {
        self.partition(platform).is_some()
    }

    fn partition(&self, platform: &str) -> Option<&Partition<S, A>> {
        self.partitions.iter().find(|p| p.platform() == platform)
    }

    /// Composite state with every partition at its registered default.
    pub fn initial_state(&self) -> CompositeState<S> {
        CompositeState::from_partitions(
            self.partitions
                .iter()
                .map(|p| (Rc::clone(&p.platform), Rc::clone(&p.initial)))
                .collect(),
        )
    }

    /// Computes the next composite state.
    ///
    /// `None` is the initialization call and always yields the defaults,
    /// whatever the action says.  Otherwise only the partition matching
    /// `action.tag()` is recomputed; actions for unknown platforms and
    /// actions the reducer does not handle return a state whose partitions
    /// are all pointer-equal to the input's.
    pub fn transition(&self, state: Option<&CompositeState<S>>, action: &A) -> CompositeState<S> {
        let Some(state) = state else {
            return self.initial_state();
        };

        let target = action.tag();
        let partitions = state
            .entries()
            .iter()
            .map(|(platform, current)| {
                let next = match self.partition(platform) {
                    Some(entry) if &**platform == target => {
                        let mut draft = S::clone(current);
                        if (entry.reducer)(&mut draft, action) {
                            Rc::new(draft)
                        } else {
                            Rc::clone(current)
                        }
                    }
                    _ => Rc::clone(current),
                };
                (Rc::clone(platform), next)
            })
            .collect();

        CompositeState::from_partitions(partitions)
    }
}
