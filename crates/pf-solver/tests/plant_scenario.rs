//! End-to-end solve of a feed, double-deck deslime screen and two sump pumps.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use pf_blocks::{BlockKind, BlockParameters, KindParameters, ParameterOutcome};
use pf_core::{BlockId, UnitSystem};
use pf_solver::Flowsheet;

const TABLE: &str = "5
50 25.4 12 12
25.4 12.7 23 35
12.7 6.35 30 65
6.35 0.5 25 90
0.5 0 10 100
";

static FIXTURES: AtomicUsize = AtomicUsize::new(0);

fn write_table(name: &str) -> PathBuf {
    let n = FIXTURES.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "plantflow_{name}_{}_{n}.txt",
        std::process::id()
    ));
    std::fs::write(&path, TABLE).unwrap();
    path
}

struct Plant {
    fs: Flowsheet,
    feed: BlockId,
    screen: BlockId,
    top_obs: BlockId,
    bottom_obs: BlockId,
    drain_obs: BlockId,
    rc_pump: BlockId,
    hmc_pump: BlockId,
    hmc_obs: BlockId,
}

fn build_plant() -> Plant {
    let mut fs = Flowsheet::default();
    fs.set_unit_system(UnitSystem::Imperial);
    fs.set_tolerance(0.01);
    fs.set_max_iterations(100);
    fs.set_water_round_to(2);

    let path = write_table("plant");
    fs.load_size_distribution(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let tags = [0u16, 7, 2, 7, 7, 7, 8, 7, 8, 7];
    let ids: Vec<BlockId> = tags
        .iter()
        .map(|&t| fs.create_block_by_tag(t).unwrap())
        .collect();
    assert_eq!(ids.first().unwrap().get(), 100);
    assert_eq!(ids.last().unwrap().get(), 109);
    let id = |raw: u32| BlockId::new(raw).unwrap();

    let links = [
        (100, 0, 101),
        (100, 0, 102),
        (102, 1, 105),
        (102, 1, 106),
        (102, 2, 104),
        (102, 2, 108),
        (102, 3, 103),
        (106, 0, 107),
        (108, 0, 109),
    ];
    for (from, port, to) in links {
        fs.make_link(id(from), port, id(to)).unwrap();
    }

    let params = [
        BlockParameters::new(
            id(100),
            KindParameters::Feed {
                feed_rate: 700.0,
                surface_moisture: 0.7,
            },
        ),
        BlockParameters::new(
            id(102),
            KindParameters::DeslimeDoubleDeck {
                top_moisture: 0.10,
                bottom_moisture: 0.14,
                top_cut: 25.4,
                bottom_cut: 6.35,
                wash_water: 300.0,
            },
        ),
        BlockParameters::new(id(106), KindParameters::SumpPump { add_water: 300.0 }),
        BlockParameters::new(id(108), KindParameters::SumpPump { add_water: 300.0 }),
    ];
    for p in &params {
        assert_eq!(fs.push_parameters(p).unwrap(), ParameterOutcome::Applied);
    }

    Plant {
        fs,
        feed: id(100),
        screen: id(102),
        top_obs: id(103),
        bottom_obs: id(104),
        drain_obs: id(105),
        rc_pump: id(106),
        hmc_pump: id(108),
        hmc_obs: id(109),
    }
}

fn solve_solids_then_water(fs: &mut Flowsheet) {
    fs.set_update_solids(true);
    fs.set_update_water(false);
    let solids = fs.solve();
    assert!(solids.converged);
    assert_eq!(solids.iterations, 2);

    fs.set_update_solids(false);
    fs.set_update_water(true);
    let water = fs.solve();
    assert!(water.converged);
    assert_eq!(water.iterations, 2);
}

#[test]
fn solids_pass_splits_feed_by_deck() {
    let mut plant = build_plant();
    let fs = &mut plant.fs;
    fs.set_update_water(false);
    let report = fs.solve();
    assert!(report.converged);

    let feed = fs.port(plant.feed, 0).unwrap();
    assert_eq!(feed.fractions(), &[84.0, 161.0, 210.0, 175.0, 70.0]);
    assert_eq!(feed.solid_rate, 700.0);
    assert_eq!(feed.fluid_rate, 0.0);

    assert_eq!(fs.port(plant.screen, 1).unwrap().solid_rate, 245.0);
    assert_eq!(fs.port(plant.screen, 2).unwrap().solid_rate, 371.0);
    assert_eq!(fs.port(plant.screen, 3).unwrap().solid_rate, 84.0);

    assert_eq!(fs.port(plant.top_obs, 0).unwrap().solid_rate, 84.0);
    assert_eq!(fs.port(plant.bottom_obs, 0).unwrap().solid_rate, 371.0);
    assert_eq!(fs.port(plant.drain_obs, 0).unwrap().solid_rate, 245.0);
    assert_eq!(fs.port(plant.hmc_obs, 0).unwrap().solid_rate, 371.0);
}

#[test]
fn water_pass_balances_imperial_water() {
    let mut plant = build_plant();
    solve_solids_then_water(&mut plant.fs);
    let fs = &plant.fs;

    // 700 / 0.3 - 700 short tons, times four gallons, rounded to 2
    assert_eq!(fs.port(plant.feed, 0).unwrap().fluid_rate, 6532.0);
    assert_eq!(fs.port(plant.screen, 2).unwrap().fluid_rate, 240.0);
    assert_eq!(fs.port(plant.screen, 3).unwrap().fluid_rate, 36.0);
    assert_eq!(fs.port(plant.screen, 1).unwrap().fluid_rate, 6556.0);

    assert_eq!(fs.port(plant.rc_pump, 0).unwrap().fluid_rate, 6856.0);
    assert_eq!(fs.port(plant.hmc_pump, 0).unwrap().fluid_rate, 540.0);
    assert_eq!(fs.port(plant.hmc_obs, 0).unwrap().fluid_rate, 540.0);

    // solids survive the water pass
    assert_eq!(fs.port(plant.hmc_obs, 0).unwrap().solid_rate, 371.0);

    let observed = fs.block(plant.hmc_obs).unwrap().last_observed().unwrap();
    assert_eq!(observed.fluid_rate, 540.0);
}

#[test]
fn screen_conserves_solids_and_water() {
    let mut plant = build_plant();
    solve_solids_then_water(&mut plant.fs);
    let screen = plant.fs.block(plant.screen).unwrap();
    let ports = screen.ports();
    let input = ports.port(0).unwrap();
    assert!((ports.output_solids() - input.solid_rate).abs() < 1e-9);
    assert_eq!(ports.output_fluid(), input.fluid_rate + 300.0);
}

#[test]
fn reloading_the_distribution_reproduces_the_solution() {
    let mut plant = build_plant();
    solve_solids_then_water(&mut plant.fs);
    let before: Vec<_> = plant
        .fs
        .block_ids()
        .map(|id| plant.fs.block(id).unwrap().ports().clone())
        .collect();

    let path = write_table("reload");
    plant.fs.load_size_distribution(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(plant.fs.port(plant.screen, 1).unwrap().solid_rate, 0.0);

    solve_solids_then_water(&mut plant.fs);
    let after: Vec<_> = plant
        .fs
        .block_ids()
        .map(|id| plant.fs.block(id).unwrap().ports().clone())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn breaking_a_link_starves_the_downstream_block() {
    let mut plant = build_plant();
    assert_eq!(plant.fs.break_link(plant.screen, 2, plant.hmc_pump), 1);
    assert_eq!(plant.fs.break_link(plant.screen, 2, plant.hmc_pump), 0);
    solve_solids_then_water(&mut plant.fs);
    assert_eq!(plant.fs.port(plant.hmc_pump, 0).unwrap().solid_rate, 0.0);
    assert_eq!(plant.fs.port(plant.hmc_pump, 0).unwrap().fluid_rate, 300.0);
    assert!(plant.fs.validate().is_ok());
}
