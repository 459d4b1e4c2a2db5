/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Static backdrop layer.
    pub const BACKGROUND: ZIndex = ZIndex(0);
    /// Content drawn over the backdrop.
    pub const CONTENT: ZIndex = ZIndex(10);
    /// Topmost overlay.
    pub const OVERLAY: ZIndex = ZIndex(20);
}
