/// Elements currently registered with the reveal observer, tracked by
/// identity so repeated re-renders never register the same node twice.
#[derive(Debug)]
pub struct RevealRegistry<E> {
    observed: Vec<E>,
}

impl<E> Default for RevealRegistry<E> {
    fn default() -> Self {
        Self {
            observed: Vec::new(),
        }
    }
}

impl<E: PartialEq> RevealRegistry<E> {
    /// Track `element`. Returns `false` if it was already tracked.
    pub fn admit(&mut self, element: E) -> bool {
        if self.observed.contains(&element) {
            return false;
        }
        self.observed.push(element);
        true
    }

    /// Stop tracking `element` (it became visible).
    pub fn release(&mut self, element: &E) -> bool {
        let before = self.observed.len();
        self.observed.retain(|e| e != element);
        self.observed.len() != before
    }

    /// Drop every element for which `is_live` is false and hand them back so
    /// the caller can unobserve them.
    pub fn prune(&mut self, is_live: impl Fn(&E) -> bool) -> Vec<E> {
        let (live, dead) = std::mem::take(&mut self.observed)
            .into_iter()
            .partition(|e| is_live(e));
        self.observed = live;
        dead
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_is_idempotent() {
        let mut registry = RevealRegistry::default();
        assert!(registry.admit("card-1"));
        assert!(!registry.admit("card-1"));
        assert!(registry.admit("card-2"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_release() {
        let mut registry = RevealRegistry::default();
        registry.admit(1);
        registry.admit(2);
        assert!(registry.release(&1));
        assert!(!registry.release(&1));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_prune_returns_detached() {
        let mut registry = RevealRegistry::default();
        for id in 1..=6 {
            registry.admit(id);
        }
        let dead = registry.prune(|id| id % 2 == 0);
        assert_eq!(dead, vec![1, 3, 5]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_repeated_renders_stay_bounded() {
        let mut registry = RevealRegistry::default();
        // Each "render" replaces the live set with a fresh batch of ten nodes;
        // the previous batch is detached.
        for render in 0..50u32 {
            let live = render * 10..render * 10 + 10;
            registry.prune(|id| live.contains(id));
            for id in live.clone() {
                registry.admit(id);
            }
            assert!(registry.len() <= 10);
        }
        assert!(!registry.is_empty());
    }
}
