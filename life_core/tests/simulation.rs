use life_core::{
    next_generation, Grid, LifeConfig, LifeError, MemoryStore, NullObserver, NullSink, PatternStore,
    SimulationController, SimulationState, StabilityDetector, StepOutcome, Verdict,
};

type Headless = SimulationController<NullSink, MemoryStore, NullObserver>;

fn headless(size: usize) -> Headless {
    SimulationController::new(LifeConfig::new(size, 30.0), NullSink, MemoryStore::new(), NullObserver).unwrap()
}

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter().filter(|&(_, _, alive)| alive).map(|(x, y, _)| (x, y)).collect()
}

#[test]
fn blinker_end_to_end() {
    let mut life = headless(5);
    for y in 1..4 {
        life.toggle(2, y);
    }

    life.step();
    assert_eq!(live_cells(life.grid()), vec![(1, 2), (2, 2), (3, 2)]);

    let outcome = life.step();
    assert_eq!(live_cells(life.grid()), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(outcome, StepOutcome::Terminal { iteration: 2 });
    assert!(life.detector().is_terminal());
    assert_eq!(life.state(), SimulationState::Stopped);
}

#[test]
fn three_by_three_torus_has_no_room_for_a_blinker() {
    // Every cell neighbors every other cell, so three live cells fill the
    // board and the full board then starves.
    let mut life = headless(3);
    for y in 0..3 {
        life.toggle(1, y);
    }
    life.step();
    assert_eq!(life.grid().alive_count(), 9);
    life.step();
    assert_eq!(life.grid().alive_count(), 0);
}

#[test]
fn dead_board_is_terminal_within_two_ticks() {
    let mut life = headless(6);
    assert!(!life.step().is_terminal());
    assert!(life.step().is_terminal());
}

#[test]
fn dying_pattern_stops_once_board_is_empty() {
    let mut life = headless(6);
    life.toggle(0, 0);
    life.toggle(3, 3);
    life.start();

    let mut outcomes = Vec::new();
    while life.is_running() {
        outcomes.push(life.step());
    }
    // live -> dead -> dead -> dead: third generation repeats the first empty one
    assert_eq!(outcomes.len(), 3);
    assert_eq!(life.iteration(), 3);
    assert_eq!(life.grid().alive_count(), 0);
}

#[test]
fn restart_always_resets_and_runs() {
    let mut life = headless(5);
    life.restart();
    assert!(life.is_running());
    assert_eq!(life.iteration(), 0);

    life.toggle(1, 1);
    life.toggle(2, 1);
    life.toggle(3, 1);
    life.step();
    life.step();
    life.restart();
    assert_eq!(life.iteration(), 0);
    assert!(life.detector().is_empty());
    assert_eq!(life.state(), SimulationState::Running);
}

#[test]
fn save_ids_are_sequential_from_one() {
    let mut life = headless(4);
    assert!(life.store().list().unwrap().is_empty());
    assert_eq!(life.save_pattern().unwrap().id, 1);
    assert_eq!(life.store().list().unwrap().len(), 1);
    assert_eq!(life.save_pattern().unwrap().id, 2);
}

#[test]
fn load_unknown_id_leaves_state_untouched() {
    let mut life = headless(5);
    life.toggle(2, 2);
    life.step();
    let (grid, iteration) = (life.grid().clone(), life.iteration());

    assert!(matches!(life.load_pattern(42), Err(LifeError::PatternNotFound(42))));
    assert_eq!(life.grid(), &grid);
    assert_eq!(life.iteration(), iteration);
}

#[test]
fn saved_pattern_round_trips_through_the_controller() {
    let mut life = headless(6);
    life.toggle(1, 4);
    life.toggle(5, 0);
    let saved = life.save_pattern().unwrap();
    life.clear();

    let loaded = life.load_pattern(saved.id).unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(live_cells(life.grid()), vec![(5, 0), (1, 4)]);
}

#[test]
fn detector_matches_rule_engine_on_still_life() {
    let mut block = Grid::new(6).unwrap();
    for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        block.set(x, y, true);
    }
    let mut detector = StabilityDetector::new();
    let mut grid = block;
    let mut verdicts = Vec::new();
    for _ in 0..3 {
        verdicts.push(detector.record(grid.clone()));
        grid = next_generation(&grid);
    }
    assert_eq!(verdicts, vec![Verdict::Continue, Verdict::Continue, Verdict::Terminal]);
}
