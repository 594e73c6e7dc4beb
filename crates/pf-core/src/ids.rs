use core::fmt;
use core::num::NonZeroU32;

/// Stable identity of a block on the flowsheet.
///
/// - identities are handed out sequentially by the block factory
/// - `NonZero` makes `Option<BlockId>` the "no block" sentinel at no cost,
///   so the raw value `0` never names a block
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockId(NonZeroU32);

impl BlockId {
    /// Wrap a raw identity; `None` for the invalid identity `0`.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// The raw identity value.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.get())
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Port number on a block. Port 0 is the input of every non-feed block.
pub type PortNo = u16;

/// The input port every link feeds into.
pub const INPUT_PORT: PortNo = 0;
