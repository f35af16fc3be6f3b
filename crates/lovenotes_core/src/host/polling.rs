//! Proximity source driven by explicit viewport polling.
//!
//! Stands in for a native intersection observer: the host records
//! subscriptions here and calls [`PollingProximity::poll`] whenever the
//! viewport moves, then forwards the returned entries to the timeline.

use crate::host::geometry::Rect;
use crate::host::{ObserverRole, ProximityEntry, ProximitySource};
use log::debug;

#[derive(Debug, Clone)]
struct Subscription<E> {
    connected: bool,
    generation: u64,
    targets: Vec<E>,
}

impl<E> Default for Subscription<E> {
    fn default() -> Self {
        Self {
            connected: false,
            generation: 0,
            targets: Vec::new(),
        }
    }
}

/// Manual-polling proximity source.
#[derive(Debug, Clone)]
pub struct PollingProximity<E> {
    reveal: Subscription<E>,
    sentinel: Subscription<E>,
}

impl<E> Default for PollingProximity<E> {
    fn default() -> Self {
        Self {
            reveal: Subscription::default(),
            sentinel: Subscription::default(),
        }
    }
}

impl<E: Clone + PartialEq> PollingProximity<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self, role: ObserverRole) -> bool {
        self.subscription(role).connected
    }

    /// How many observers of `role` have been created so far.
    pub fn generation(&self, role: ObserverRole) -> u64 {
        self.subscription(role).generation
    }

    pub fn observed(&self, role: ObserverRole) -> &[E] {
        self.subscription(role).targets.as_slice()
    }

    /// Evaluates every observed target of `role` against `viewport`.
    ///
    /// Only triggered targets are reported. Targets `rect_of` cannot place
    /// are skipped.
    pub fn poll<F>(&self, role: ObserverRole, viewport: Rect, rect_of: F) -> Vec<ProximityEntry<E>>
    where
        F: Fn(&E) -> Option<Rect>,
    {
        let subscription = self.subscription(role);
        if !subscription.connected {
            return Vec::new();
        }
        let config = role.config();
        subscription
            .targets
            .iter()
            .filter(|target| {
                rect_of(*target).is_some_and(|rect| config.is_triggered(rect, viewport))
            })
            .cloned()
            .map(ProximityEntry::intersecting)
            .collect()
    }

    fn subscription(&self, role: ObserverRole) -> &Subscription<E> {
        match role {
            ObserverRole::Reveal => &self.reveal,
            ObserverRole::Sentinel => &self.sentinel,
        }
    }

    fn subscription_mut(&mut self, role: ObserverRole) -> &mut Subscription<E> {
        match role {
            ObserverRole::Reveal => &mut self.reveal,
            ObserverRole::Sentinel => &mut self.sentinel,
        }
    }
}

impl<E: Clone + PartialEq> ProximitySource<E> for PollingProximity<E> {
    fn connect(&mut self, role: ObserverRole) {
        let subscription = self.subscription_mut(role);
        subscription.targets.clear();
        subscription.connected = true;
        subscription.generation += 1;
    }

    fn observe(&mut self, role: ObserverRole, target: &E) {
        let subscription = self.subscription_mut(role);
        if !subscription.connected {
            debug!(
                "event=observe_skipped module=polling status=disconnected role={}",
                role.as_str()
            );
            return;
        }
        if !subscription.targets.contains(target) {
            subscription.targets.push(target.clone());
        }
    }

    fn unobserve(&mut self, role: ObserverRole, target: &E) {
        self.subscription_mut(role)
            .targets
            .retain(|observed| observed != target);
    }

    fn disconnect(&mut self, role: ObserverRole) {
        let subscription = self.subscription_mut(role);
        subscription.targets.clear();
        subscription.connected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::PollingProximity;
    use crate::host::geometry::Rect;
    use crate::host::{ObserverRole, ProximitySource};

    #[test]
    fn reconnect_drops_previous_targets() {
        let mut proximity = PollingProximity::<u32>::new();
        proximity.connect(ObserverRole::Sentinel);
        proximity.observe(ObserverRole::Sentinel, &1);
        proximity.connect(ObserverRole::Sentinel);

        assert!(proximity.observed(ObserverRole::Sentinel).is_empty());
        assert_eq!(proximity.generation(ObserverRole::Sentinel), 2);
    }

    #[test]
    fn observe_is_deduplicated_and_ignored_when_disconnected() {
        let mut proximity = PollingProximity::<u32>::new();
        proximity.observe(ObserverRole::Reveal, &1);
        assert!(proximity.observed(ObserverRole::Reveal).is_empty());

        proximity.connect(ObserverRole::Reveal);
        proximity.observe(ObserverRole::Reveal, &1);
        proximity.observe(ObserverRole::Reveal, &1);
        assert_eq!(proximity.observed(ObserverRole::Reveal), &[1]);
    }

    #[test]
    fn poll_reports_only_triggered_targets() {
        let mut proximity = PollingProximity::<u32>::new();
        proximity.connect(ObserverRole::Reveal);
        proximity.observe(ObserverRole::Reveal, &1);
        proximity.observe(ObserverRole::Reveal, &2);

        let viewport = Rect::new(0.0, 0.0, 400.0, 1000.0);
        let entries = proximity.poll(ObserverRole::Reveal, viewport, |id| match id {
            1 => Some(Rect::new(0.0, 100.0, 400.0, 200.0)),
            _ => Some(Rect::new(0.0, 2000.0, 400.0, 200.0)),
        });

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].target, 1);
    }
}
