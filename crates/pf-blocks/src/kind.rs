//! Block kinds and their numeric tags.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BlockError;

/// The kinds of block a flowsheet can hold.
///
/// Tags follow the process numbering of the plant model: 3 to 6 are reserved
/// for kinds that are not built (drain-and-rinse screens, heavy-medium
/// cyclone, classifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Feed,
    DeslimeSingleDeck,
    DeslimeDoubleDeck,
    Observer,
    SumpPump,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Feed,
        BlockKind::DeslimeSingleDeck,
        BlockKind::DeslimeDoubleDeck,
        BlockKind::Observer,
        BlockKind::SumpPump,
    ];

    pub fn tag(self) -> u16 {
        match self {
            BlockKind::Feed => 0,
            BlockKind::DeslimeSingleDeck => 1,
            BlockKind::DeslimeDoubleDeck => 2,
            BlockKind::Observer => 7,
            BlockKind::SumpPump => 8,
        }
    }

    pub fn from_tag(tag: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Feed => "feed",
            BlockKind::DeslimeSingleDeck => "deslime_single_deck",
            BlockKind::DeslimeDoubleDeck => "deslime_double_deck",
            BlockKind::Observer => "observer",
            BlockKind::SumpPump => "sump_pump",
        }
    }

    /// Number of screen decks, `None` for kinds that are not screens.
    pub fn deck_count(self) -> Option<usize> {
        match self {
            BlockKind::DeslimeSingleDeck => Some(1),
            BlockKind::DeslimeDoubleDeck => Some(2),
            _ => None,
        }
    }

    /// Ports a block of this kind owns, input included.
    pub fn port_count(self) -> usize {
        // feed + drain + one per deck
        self.deck_count().map_or(1, |decks| decks + 2)
    }

    /// Whether the block originates flow rather than receiving it.
    pub fn is_source(self) -> bool {
        self == BlockKind::Feed
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| BlockError::UnknownKind { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn reserved_tags_are_unknown() {
        for tag in 3..=6 {
            assert_eq!(BlockKind::from_tag(tag), None);
        }
        assert_eq!(BlockKind::from_tag(99), None);
    }

    #[test]
    fn port_counts() {
        assert_eq!(BlockKind::Feed.port_count(), 1);
        assert_eq!(BlockKind::Observer.port_count(), 1);
        assert_eq!(BlockKind::SumpPump.port_count(), 1);
        assert_eq!(BlockKind::DeslimeSingleDeck.port_count(), 3);
        assert_eq!(BlockKind::DeslimeDoubleDeck.port_count(), 4);
    }

    #[test]
    fn names_parse_back() {
        assert_eq!("sump_pump".parse::<BlockKind>().unwrap(), BlockKind::SumpPump);
        assert_eq!(BlockKind::DeslimeDoubleDeck.to_string(), "deslime_double_deck");
        assert!("cyclone".parse::<BlockKind>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&BlockKind::DeslimeSingleDeck).unwrap();
        assert_eq!(json, "\"deslime_single_deck\"");
    }
}
