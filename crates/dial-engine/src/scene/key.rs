use super::ZIndex;

/// Stable sort key for draw items.
///
/// Field order defines the ordering:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    /// Z-layer. Lower values are drawn first (further back).
    pub z: ZIndex,
    /// Insertion index, ensuring stable ordering within a layer.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_insertion_order() {
        let back = SortKey::new(ZIndex::BACKGROUND, 7);
        let front = SortKey::new(ZIndex::OVERLAY, 0);
        assert!(back < front);
    }

    #[test]
    fn insertion_order_breaks_ties() {
        let first = SortKey::new(ZIndex::CONTENT, 1);
        let second = SortKey::new(ZIndex::CONTENT, 2);
        assert!(first < second);
    }
}
