//! Integration tests: blocks chained by hand, checking conservation.

use pf_blocks::{
    BlockFactory, BlockKind, BlockParameters, DeslimeScreen, FlowBlock, KindParameters,
};
use pf_flow::FlowsheetParameters;
use pf_sizing::SizeDistribution;
use proptest::prelude::*;

const TABLE: &str = "5
50 25.4 12 12
25.4 12.7 23 35
12.7 6.35 30 65
6.35 0.5 25 90
0.5 0 10 100
";

fn flowsheet_params() -> FlowsheetParameters {
    let mut p = FlowsheetParameters::default();
    p.distribution = SizeDistribution::parse(TABLE).unwrap();
    p
}

fn double_deck(factory: &mut BlockFactory, p: &FlowsheetParameters, wash: f64) -> Box<dyn FlowBlock> {
    let mut screen = factory
        .create_kind(BlockKind::DeslimeDoubleDeck, p.fraction_count())
        .unwrap();
    let id = screen.id();
    screen.on_parameters(&BlockParameters::new(
        id,
        KindParameters::DeslimeDoubleDeck {
            top_moisture: 0.10,
            bottom_moisture: 0.14,
            top_cut: 25.4,
            bottom_cut: 6.35,
            wash_water: wash,
        },
    ));
    screen
}

fn feed(factory: &mut BlockFactory, p: &FlowsheetParameters, rate: f64, sm: f64) -> Box<dyn FlowBlock> {
    let mut feed = factory.create_kind(BlockKind::Feed, p.fraction_count()).unwrap();
    let id = feed.id();
    feed.on_parameters(&BlockParameters::new(
        id,
        KindParameters::Feed {
            feed_rate: rate,
            surface_moisture: sm,
        },
    ));
    feed
}

fn transfer(from: &dyn FlowBlock, port: u16, to: &mut dyn FlowBlock) {
    let fd = from.port(port).unwrap().clone();
    to.ports_mut().port_mut(0).unwrap().clone_from(&fd);
}

#[test]
fn feed_into_double_deck_conserves_solids() {
    let p = flowsheet_params();
    let mut factory = BlockFactory::default();
    let mut feed = feed(&mut factory, &p, 700.0, 0.7);
    let mut screen = double_deck(&mut factory, &p, 300.0);

    feed.on_update(&p);
    transfer(feed.as_ref(), 0, screen.as_mut());
    screen.on_update(&p);

    let solids: f64 = (1..4).map(|n| screen.port(n).unwrap().solid_rate).sum();
    assert!((solids - 700.0).abs() < 1e-9);

    // top deck holds the +25.4 mm fraction only
    let top = screen.port(DeslimeScreen::deck_port(1)).unwrap();
    assert!((top.solid_rate - 84.0).abs() < 1e-9);

    // drain fluid is rounded and closes the water balance
    let drain = screen.port(DeslimeScreen::drain_port()).unwrap();
    assert_eq!(drain.fluid_rate, drain.fluid_rate.trunc());
    let fluid: f64 = (1..4).map(|n| screen.port(n).unwrap().fluid_rate).sum();
    let feed_fluid = feed.port(0).unwrap().fluid_rate;
    assert_eq!(fluid, feed_fluid + 300.0);
}

proptest! {
    #[test]
    fn screens_never_create_or_lose_solids(rate in 0.0f64..5000.0, sm in 0.0f64..0.9) {
        let p = flowsheet_params();
        let mut factory = BlockFactory::default();
        let mut feed = feed(&mut factory, &p, rate, sm);
        let mut screen = double_deck(&mut factory, &p, 0.0);

        feed.on_update(&p);
        transfer(feed.as_ref(), 0, screen.as_mut());
        screen.on_update(&p);

        let input = screen.port(0).unwrap().solid_rate;
        let output = screen.ports().output_solids();
        prop_assert!((input - output).abs() <= 1e-9 * input.max(1.0));
        prop_assert!((input - rate).abs() <= 1e-9 * rate.max(1.0));
    }
}
