//! Integration tests for pf-graph.

use pf_core::BlockId;
use pf_graph::{Link, Topology};
use proptest::prelude::*;

fn id(raw: u32) -> BlockId {
    BlockId::new(raw).unwrap()
}

#[test]
fn plant_layout() {
    // feed -> screen, screen drain -> pump, screen decks -> observers
    let (feed, screen, pump, obs_a, obs_b) = (id(100), id(102), id(106), id(103), id(104));
    let mut t = Topology::new();
    t.link(feed, 0, screen);
    t.link(screen, 1, pump);
    t.link(screen, 2, obs_b);
    t.link(screen, 3, obs_a);

    assert_eq!(t.link_count(), 4);
    assert_eq!(t.destinations_of(screen), &[pump, obs_b, obs_a]);
    let into_pump: Vec<Link> = t.links().filter(|l| l.to == pump).collect();
    assert_eq!(
        into_pump,
        vec![Link {
            from: screen,
            from_port: 1,
            to: pump
        }]
    );

    t.remove_block(screen);
    assert!(t.is_empty());
}

#[derive(Debug, Clone)]
enum Op {
    Link(u32, u16, u32),
    Unlink(u32, u16, u32),
    Remove(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..6, 0u16..3, 1u32..6).prop_map(|(a, p, b)| Op::Link(a, p, b)),
        (1u32..6, 0u16..3, 1u32..6).prop_map(|(a, p, b)| Op::Unlink(a, p, b)),
        (1u32..6).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn indexes_stay_consistent(ops in prop::collection::vec(op(), 0..40)) {
        let mut t = Topology::new();
        for op in ops {
            match op {
                Op::Link(a, p, b) => t.link(id(a), p, id(b)),
                Op::Unlink(a, p, b) => {
                    t.unlink(id(a), p, id(b));
                }
                Op::Remove(a) => {
                    t.remove_block(id(a));
                    prop_assert!(t.links().all(|l| l.from != id(a) && l.to != id(a)));
                }
            }
            prop_assert!(t.is_consistent());
        }
    }
}
