use super::*;
use crate::patterns;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn core_with(rows: i32, cols: i32, alive: &[(i32, i32)]) -> LifeCore {
    let mut core = LifeCore::new(rows, cols);
    for &(r, c) in alive {
        assert_eq!(core.toggle(r, c), Ok(CellState::Alive));
    }
    core
}

fn live_cells(core: &LifeCore) -> Vec<(u32, u32)> {
    let (rows, cols) = core.dimensions();
    let mut out = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if core.grid.is_alive(r, c) {
                out.push((r, c));
            }
        }
    }
    out
}

#[test]
fn new_grid_is_dead_and_never_ticked() {
    let core = LifeCore::new(4, 6);
    assert_eq!(core.dimensions(), (4, 6));
    assert_eq!(core.updated(), UpdateState::NeverTicked);
    assert_eq!(core.population(), 0);
    for r in 0..4 {
        for c in 0..6 {
            assert_eq!(core.current_state(r, c), Ok(CellState::Dead));
        }
    }
}

#[test]
fn negative_dimensions_are_sign_flipped() {
    init_logging();
    let core = LifeCore::new(-3, -5);
    assert_eq!(core.dimensions(), (3, 5));
    assert_eq!(core.cells_len(), 15);

    let core = LifeCore::new(i32::MIN, 0);
    assert_eq!(core.dimensions(), (2_147_483_648, 0));
    assert_eq!(core.cells_len(), 0);
}

#[test]
fn try_new_rejects_negative_dimensions() {
    assert_eq!(
        LifeCore::try_new(-1, 4).err(),
        Some(GridError::InvalidDimensions { rows: -1, cols: 4 })
    );
    assert!(LifeCore::try_new(0, 0).is_ok());
    assert_eq!(LifeCore::try_new(2, 3).unwrap().dimensions(), (2, 3));
}

#[test]
fn toggle_twice_restores_every_cell() {
    let mut core = core_with(3, 4, &[(1, 1), (2, 3)]);
    let before = core.grid.cells().to_vec();
    for r in 0..3 {
        for c in 0..4 {
            let first = core.toggle(r, c).unwrap();
            let second = core.toggle(r, c).unwrap();
            assert_ne!(first, second);
        }
    }
    assert_eq!(core.grid.cells(), &before[..]);
}

#[test]
fn out_of_bounds_access_is_rejected_without_mutation() {
    let mut core = core_with(3, 3, &[(1, 1)]);
    let before = core.grid.cells().to_vec();

    for (r, c) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MAX, i32::MIN), (-7, 42)] {
        let expected = GridError::OutOfBounds { row: r as i64, col: c as i64, rows: 3, cols: 3 };
        assert_eq!(core.toggle(r, c), Err(expected.clone()));
        assert_eq!(core.current_state(r, c), Err(expected.clone()));
        assert_eq!(core.set_cell(r, c, CellState::Alive), Err(expected));
    }
    assert_eq!(core.grid.cells(), &before[..]);
}

#[test]
fn empty_grid_rejects_every_index_and_ticks() {
    let mut core = LifeCore::new(0, 5);
    assert!(core.toggle(0, 0).is_err());
    core.tick();
    assert_eq!(core.updated(), UpdateState::Unchanged);
    assert_eq!(core.generation(), 1);
}

#[test]
fn dead_grid_stays_dead() {
    let mut core = LifeCore::new(6, 6);
    core.tick();
    assert_eq!(core.population(), 0);
    assert_eq!(core.updated(), UpdateState::Unchanged);
    assert!(core.is_halted());
}

#[test]
fn block_is_still_life() {
    let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
    let mut core = core_with(6, 6, &block);
    core.tick();
    assert_eq!(live_cells(&core), vec![(2, 2), (2, 3), (3, 2), (3, 3)]);
    assert_eq!(core.updated(), UpdateState::Unchanged);
    assert_eq!(core.cycle_period(), Some(1));
}

#[test]
fn blinker_oscillates_forever() {
    let mut core = core_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    let horizontal = vec![(2, 1), (2, 2), (2, 3)];
    let vertical = vec![(1, 2), (2, 2), (3, 2)];

    for generation in 1..=20 {
        core.tick();
        assert_eq!(core.updated(), UpdateState::Changed);
        assert!(!core.is_halted());
        let expected = if generation % 2 == 1 { &vertical } else { &horizontal };
        assert_eq!(&live_cells(&core), expected, "generation {generation}");
    }
    assert_eq!(core.cycle_period(), Some(2));
}

#[test]
fn tick_reads_only_the_previous_generation() {
    // An in-place update would see (2,1) already dead when visiting (1,2)
    // and never give birth there.
    let mut core = core_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    core.tick();
    assert_eq!(core.current_state(1, 2), Ok(CellState::Alive));
    assert_eq!(core.current_state(3, 2), Ok(CellState::Alive));
    assert_eq!(core.last_births(), 2);
    assert_eq!(core.last_deaths(), 2);
}

#[test]
fn glider_translates_diagonally_every_four_ticks() {
    let mut core = LifeCore::new(12, 12);
    let glider = patterns::find("Glider").unwrap();
    core.apply_pattern(glider, 2, 2, false);
    let start = live_cells(&core);

    for _ in 0..4 {
        core.tick();
    }
    let shifted: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(live_cells(&core), shifted);
    assert_eq!(core.population(), 5);
}

#[test]
fn glider_never_wraps_past_the_far_corner() {
    let mut core = LifeCore::new(8, 8);
    core.apply_pattern(patterns::find("Glider").unwrap(), 0, 0, false);

    for generation in 1..=60 {
        core.tick();
        if generation >= 4 {
            assert!(
                live_cells(&core).iter().all(|&(r, c)| r > 0 && c > 0),
                "cell wrapped onto the first row/col at generation {generation}"
            );
        }
    }
    // Crashes into the corner and settles as a block
    assert_eq!(live_cells(&core), vec![(6, 6), (6, 7), (7, 6), (7, 7)]);
}

#[test]
fn top_edge_line_has_no_neighbors_above() {
    let mut core = core_with(5, 5, &[(0, 0), (0, 1), (0, 2)]);
    core.tick();
    assert_eq!(live_cells(&core), vec![(0, 1), (1, 1)]);
    core.tick();
    assert!(live_cells(&core).is_empty());
    assert_eq!(core.updated(), UpdateState::Changed);
    core.tick();
    assert_eq!(core.updated(), UpdateState::Unchanged);
}

#[test]
fn corner_neighbor_count_is_at_most_three() {
    let mut core = LifeCore::new(3, 3);
    for r in 0..3 {
        for c in 0..3 {
            core.toggle(r, c).unwrap();
        }
    }
    assert_eq!(core.neighbor_count(0, 0), 3);
    assert_eq!(core.neighbor_count(2, 2), 3);
    assert_eq!(core.neighbor_count(1, 1), 8);
}

#[test]
fn reset_kills_everything_and_keeps_dimensions() {
    let mut core = core_with(4, 5, &[(0, 0), (1, 2), (3, 4)]);
    core.reset();
    assert_eq!(core.dimensions(), (4, 5));
    for r in 0..4 {
        for c in 0..5 {
            assert_eq!(core.current_state(r, c), Ok(CellState::Dead));
        }
    }
    assert_eq!(core.population(), 0);
}

#[test]
fn reset_leaves_update_signal_untouched() {
    let mut core = LifeCore::new(5, 5);
    core.reset();
    assert_eq!(core.updated(), UpdateState::NeverTicked);

    let mut core = core_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    core.tick();
    assert_eq!(core.updated(), UpdateState::Changed);
    core.reset();
    assert_eq!(core.updated(), UpdateState::Changed);
    assert_eq!(core.generation(), 0);
    assert_eq!(core.cycle_period(), None);
}

#[test]
fn run_stops_once_stable() {
    init_logging();
    let mut core = LifeCore::new(8, 8);
    core.apply_pattern(patterns::find("Glider").unwrap(), 0, 0, false);
    assert_eq!(core.run(60), 24);
    assert!(core.is_halted());
    assert_eq!(core.generation(), 24);

    let mut blinker = core_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    assert_eq!(blinker.run(10), 10);
}

#[test]
fn pulsar_has_period_three() {
    let mut core = LifeCore::new(17, 17);
    core.apply_pattern(patterns::find("Pulsar").unwrap(), 2, 2, true);
    let start = live_cells(&core);

    core.tick();
    assert_eq!(core.cycle_period(), None);
    core.tick();
    assert_eq!(core.cycle_period(), None);
    core.tick();
    assert_eq!(core.cycle_period(), Some(3));
    assert_eq!(live_cells(&core), start);
}

#[test]
fn edits_invalidate_cycle_history() {
    let mut core = core_with(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
    core.tick();
    assert_eq!(core.cycle_period(), Some(1));
    core.toggle(0, 0).unwrap();
    assert_eq!(core.cycle_period(), None);
}

#[test]
fn pattern_stamping_clips_at_edges() {
    init_logging();
    let mut core = LifeCore::new(4, 4);
    let placed = core.apply_pattern(patterns::find("Blinker").unwrap(), 3, 2, false);
    assert_eq!(placed, 2);
    assert_eq!(live_cells(&core), vec![(3, 2), (3, 3)]);

    let placed = core.apply_pattern(patterns::find("Block").unwrap(), 0, 0, true);
    assert_eq!(placed, 4);
    assert_eq!(core.population(), 4);
}

#[test]
fn set_cell_reports_changes() {
    let mut core = LifeCore::new(3, 3);
    assert_eq!(core.set_cell(1, 1, CellState::Alive), Ok(true));
    assert_eq!(core.set_cell(1, 1, CellState::Alive), Ok(false));
    assert_eq!(core.current_state(1, 1), Ok(CellState::Alive));
    assert_eq!(core.set_cell(1, 1, CellState::Dead), Ok(true));
}

#[test]
fn sparse_rows_are_skipped() {
    let mut core = core_with(20, 5, &[(10, 1), (10, 2), (10, 3)]);
    core.enable_perf_metrics(true);
    core.tick();
    let stats = core.get_perf_stats();
    assert_eq!(stats.rows_processed(), 3);
    assert_eq!(stats.rows_skipped(), 17);
    assert_eq!(stats.births(), 2);
    assert_eq!(stats.deaths(), 2);
    assert_eq!(stats.population(), 3);
    assert_eq!(stats.generation(), 1);
    assert!(stats.tick_ms() >= 0.0);
}

#[test]
fn perf_stats_are_zero_when_disabled() {
    let mut core = core_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    core.tick();
    let stats = core.get_perf_stats();
    assert_eq!(stats.rows_processed(), 0);
    assert_eq!(stats.generation(), 0);
}

#[test]
fn config_drives_construction() {
    let core = LifeCore::from_config_json(r#"{ "rows": -6, "cols": 9, "tick_interval_ms": 250 }"#).unwrap();
    assert_eq!(core.dimensions(), (6, 9));
    assert_eq!(core.tick_interval_ms(), 250);

    assert!(matches!(
        LifeCore::from_config_json(r#"{ "tick_interval_ms": 0 }"#),
        Err(ConfigError::InvalidTickInterval(0))
    ));
}

#[test]
fn tick_interval_must_be_positive() {
    let mut core = LifeCore::new(2, 2);
    assert_eq!(core.tick_interval_ms(), 500);
    assert!(core.set_tick_interval_ms(0).is_err());
    assert_eq!(core.tick_interval_ms(), 500);
    core.set_tick_interval_ms(40).unwrap();
    assert_eq!(core.tick_interval_ms(), 40);
}
