//! Block construction and id assignment.

use pf_core::BlockId;

use crate::feed::Feed;
use crate::kind::BlockKind;
use crate::observer::Observer;
use crate::screen::DeslimeScreen;
use crate::sump_pump::SumpPump;
use crate::traits::FlowBlock;

/// First id handed out by a default factory.
pub const DEFAULT_BASE_ID: u32 = 100;

/// Creates blocks by kind or numeric tag and hands out sequential ids.
///
/// Ids are only consumed when a block is actually built.
#[derive(Debug, Clone)]
pub struct BlockFactory {
    start: u32,
    next: u32,
}

impl Default for BlockFactory {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_ID)
    }
}

impl BlockFactory {
    /// A factory whose first id is `start` (ids are non-zero, so 0 becomes 1).
    pub fn new(start: u32) -> Self {
        let start = start.max(1);
        Self { start, next: start }
    }

    /// The id the next successful creation will use.
    pub fn peek_next(&self) -> Option<BlockId> {
        BlockId::new(self.next)
    }

    /// Restart ids from the base.
    pub fn reset(&mut self) {
        self.next = self.start;
    }

    /// Build a block from its numeric tag; `None` for unknown tags.
    pub fn create(&mut self, tag: u16, fraction_count: usize) -> Option<Box<dyn FlowBlock>> {
        let kind = BlockKind::from_tag(tag)?;
        self.create_kind(kind, fraction_count)
    }

    /// Build a block of `kind`; `None` once the id space is exhausted.
    pub fn create_kind(&mut self, kind: BlockKind, fraction_count: usize) -> Option<Box<dyn FlowBlock>> {
        let id = BlockId::new(self.next)?;
        let following = self.next.checked_add(1)?;
        let block: Box<dyn FlowBlock> = match kind {
            BlockKind::Feed => Box::new(Feed::new(id, fraction_count)),
            BlockKind::DeslimeSingleDeck => Box::new(DeslimeScreen::single_deck(id, fraction_count)),
            BlockKind::DeslimeDoubleDeck => Box::new(DeslimeScreen::double_deck(id, fraction_count)),
            BlockKind::Observer => Box::new(Observer::new(id, fraction_count)),
            BlockKind::SumpPump => Box::new(SumpPump::new(id, fraction_count)),
        };
        self.next = following;
        Some(block)
    }
}
