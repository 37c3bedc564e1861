use rand::Rng;

use crate::core::Component;

/// A source of uniformly distributed indices
///
/// Every [`rand::Rng`] is an index source; tests can supply a fixed one.
pub trait IndexSource {
    /// Pick an index in `0..len`. Only called with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> IndexSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Picks the component reported as "the cycle"
pub struct CycleSelector;

impl CycleSelector {
    /// Select one component at an index chosen by `source`
    ///
    /// Returns `None` only when there are no components.
    pub fn select<'a, S>(components: &'a [Component], source: &mut S) -> Option<&'a Component>
    where
        S: IndexSource + ?Sized,
    {
        if components.is_empty() {
            return None;
        }
        components.get(source.pick_index(components.len()))
    }
}
