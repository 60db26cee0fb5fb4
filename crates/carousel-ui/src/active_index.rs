/// The focused item together with its neighbours.
///
/// `prev` is `None` on the first item and `next` is `None` on the last, so
/// stepping clamps at the ends instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActiveIndex {
    pub prev: Option<usize>,
    pub active: usize,
    pub next: Option<usize>,
}

impl ActiveIndex {
    /// Neighbourhood of `active` within a sequence of `len` items.
    pub fn new(active: usize, len: usize) -> Self {
        debug_assert!(active < len, "active index {active} outside {len} items");
        Self {
            prev: active.checked_sub(1),
            active,
            next: (active + 1 < len).then_some(active + 1),
        }
    }

    pub fn is_first(&self) -> bool {
        self.prev.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_item_has_both_neighbours() {
        let index = ActiveIndex::new(2, 5);
        assert_eq!(index.prev, Some(1));
        assert_eq!(index.next, Some(3));
    }

    #[test]
    fn boundaries_have_no_outer_neighbour() {
        let first = ActiveIndex::new(0, 3);
        assert!(first.is_first());
        assert_eq!(first.next, Some(1));

        let last = ActiveIndex::new(2, 3);
        assert!(last.is_last());
        assert_eq!(last.prev, Some(1));
    }

    #[test]
    fn single_item_is_both_first_and_last() {
        let only = ActiveIndex::new(0, 1);
        assert!(only.is_first() && only.is_last());
    }
}
