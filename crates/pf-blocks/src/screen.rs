//! Deslime screen with one or more decks.
//!
//! Port layout: 0 is the feed, 1 is the drain (undersize and water), and
//! ports 2 upward are the deck discharges from the bottom deck to the top.
//! Cut points and deck moistures are stored bottom deck first.

use pf_core::{BlockId, PortNo, Real};
use pf_flow::{BlockPorts, FlowsheetParameters, ProcessSettings};

use crate::kind::BlockKind;
use crate::params::{BlockParameters, KindParameters, ParameterOutcome};
use crate::traits::FlowBlock;

#[derive(Debug, Clone)]
pub struct DeslimeScreen {
    id: BlockId,
    kind: BlockKind,
    cut_points: Vec<Real>,
    deck_moisture: Vec<Real>,
    pub wash_water: Real,
    ports: BlockPorts,
}

impl DeslimeScreen {
    pub fn single_deck(id: BlockId, fraction_count: usize) -> Self {
        Self::with_kind(id, BlockKind::DeslimeSingleDeck, 1, fraction_count)
    }

    pub fn double_deck(id: BlockId, fraction_count: usize) -> Self {
        Self::with_kind(id, BlockKind::DeslimeDoubleDeck, 2, fraction_count)
    }

    fn with_kind(id: BlockId, kind: BlockKind, decks: usize, fraction_count: usize) -> Self {
        Self {
            id,
            kind,
            cut_points: vec![0.0; decks],
            deck_moisture: vec![0.0; decks],
            wash_water: 0.0,
            ports: BlockPorts::new(decks + 2, fraction_count),
        }
    }

    /// Port carrying the drain flow.
    pub const fn drain_port() -> PortNo {
        1
    }

    /// Port carrying the discharge of deck `n`, counted from the bottom.
    pub const fn deck_port(n: PortNo) -> PortNo {
        n + 2
    }

    pub fn decks(&self) -> usize {
        self.cut_points.len()
    }

    /// Cut points in millimetres, bottom deck first.
    pub fn cut_points(&self) -> &[Real] {
        &self.cut_points
    }

    /// Deck surface moistures, bottom deck first.
    pub fn deck_moisture(&self) -> &[Real] {
        &self.deck_moisture
    }

    /// Split the feed solids by size: the drain takes everything below the
    /// bottom cut point, each deck takes the slice between its own cut point
    /// and the one beneath, and the top deck runs up to the top size.
    ///
    /// Every output port is zeroed first, fluid included.
    fn screen_the_feed(&mut self, params: &FlowsheetParameters) {
        let dist = &params.distribution;
        let Some(top) = dist.top_size() else {
            return;
        };
        let decks = self.decks();
        let Some((feed, outputs)) = self.ports.split_input_mut() else {
            return;
        };
        let mut retained = 0.0;
        for (i, out) in outputs.iter_mut().enumerate().take(decks + 1) {
            let passing = self.cut_points.get(i).copied().unwrap_or(top);
            out.zero();
            for j in dist.range(passing, retained).indices() {
                if let Some(&mass) = feed.fractions().get(j) {
                    if let Some(slot) = out.fractions_mut().get_mut(j) {
                        *slot = mass;
                    }
                }
            }
            out.resum_solids();
            retained = passing;
        }
    }
}

impl FlowBlock for DeslimeScreen {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> BlockKind {
        self.kind
    }

    fn ports(&self) -> &BlockPorts {
        &self.ports
    }

    fn ports_mut(&mut self) -> &mut BlockPorts {
        &mut self.ports
    }

    fn on_parameters(&mut self, params: &BlockParameters) -> ParameterOutcome {
        if params.kind() != self.kind {
            return ParameterOutcome::Ignored;
        }
        match params.settings {
            KindParameters::DeslimeSingleDeck {
                deck_moisture,
                cut_point,
                wash_water,
            } => {
                self.cut_points = vec![cut_point];
                self.deck_moisture = vec![deck_moisture];
                self.wash_water = wash_water;
            }
            KindParameters::DeslimeDoubleDeck {
                top_moisture,
                bottom_moisture,
                top_cut,
                bottom_cut,
                wash_water,
            } => {
                self.cut_points = vec![bottom_cut, top_cut];
                self.deck_moisture = vec![bottom_moisture, top_moisture];
                self.wash_water = wash_water;
            }
            _ => return ParameterOutcome::Ignored,
        }
        ParameterOutcome::Applied
    }

    fn update_solids(&mut self, params: &FlowsheetParameters) {
        self.screen_the_feed(params);
    }

    /// Decks carry the water their surface moisture implies; the drain takes
    /// the wash water plus whatever feed water the decks did not.
    fn update_fluid(&mut self, settings: &ProcessSettings) {
        let Some((feed, outputs)) = self.ports.split_input_mut() else {
            return;
        };
        let Some((drain, decks)) = outputs.split_first_mut() else {
            return;
        };
        let mut drain_fluid = self.wash_water + feed.fluid_rate;
        for (deck, &sm) in decks.iter_mut().zip(&self.deck_moisture) {
            deck.fluid_from_surface_moisture(sm, settings);
            drain_fluid -= deck.fluid_rate;
        }
        drain.fluid_rate = drain_fluid;
        drain.round_fluid(settings.water_round_to);
    }
}
