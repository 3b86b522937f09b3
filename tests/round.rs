use mathpath::board::{generate_round, generate_round_with, RoundError, RoundLimits, Walk};
use mathpath::numeric::NumericValue;
use mathpath::path::PathLimits;
use mathpath::sequence::{Entry, SequenceError};
use mathpath::validate::{validate_path, ValidationRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

#[rstest]
#[case(1, 11)]
#[case(2, 12)]
#[case(3, 13)]
#[case(4, 14)]
#[case(5, 15)]
#[tokio::test]
async fn intended_path_solves_every_level(#[case] level: u8, #[case] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let round = generate_round(level, &mut rng).await.unwrap();

    assert_eq!(round.level, level);
    assert!(round.entries.len() >= round.path.len());
    let result = round.validate(&round.solution());
    assert!(result.is_solved(), "{:?}", result.error_details);

    // One calculation per group, each matching the generated step.
    assert_eq!(result.steps.len(), (round.path.len() - 1) / 3);
    for (computed, step) in result.steps.iter().zip(&round.sequence) {
        assert!(step.result.approx_eq(computed.result));
    }
}

#[tokio::test]
async fn board_holds_the_chain_along_the_path() {
    let mut rng = StdRng::seed_from_u64(3);
    let round = generate_round(2, &mut rng).await.unwrap();
    let cells = round.board.cells();

    for (position, index) in round.solution().into_iter().enumerate() {
        assert_eq!(cells[index].path_index, Some(position));
        assert_eq!(cells[index].entry, Some(round.entries[position]));
    }
    let off_path = cells.iter().filter(|c| !c.is_on_path()).count();
    assert_eq!(off_path, 100 - round.path.len());
    assert!(cells.iter().all(|c| c.entry.is_some()));
}

#[tokio::test]
async fn spare_removal_keeps_the_solution() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut round = generate_round(3, &mut rng).await.unwrap();
    let spare = round.board.spare_cells().len();

    let removed = round.board.remove_spare_cells(0.5, &mut rng);
    assert_eq!(removed.len(), spare.div_ceil(2));
    round.board.remove_spare_cells(1.0, &mut rng);
    assert!(round.board.spare_cells().is_empty());

    assert!(round.validate(&round.solution()).is_solved());
}

#[tokio::test]
async fn failed_check_truncates_the_walk() {
    let mut rng = StdRng::seed_from_u64(8);
    let round = generate_round(1, &mut rng).await.unwrap();
    let solution = round.solution();

    let mut walk = Walk::for_path(&round.path);
    for &cell in &solution[..10] {
        assert!(walk.toggle(cell));
    }

    // Level 1 numbers stop at 30, so 31 never matches a result.
    let mut grid = round.board.grid_entries();
    grid[solution[6]] = Some(Entry::Number(NumericValue::Integer(31)));
    let result = validate_path(ValidationRequest {
        user_path: walk.cells(),
        grid_entries: &grid,
        original_path: &round.path,
    });
    assert_eq!(result.error_step, Some(1));

    walk.truncate_at_error(&result);
    assert_eq!(walk.cells(), &solution[..3]);
}

#[tokio::test]
async fn player_walk_follows_the_board_rules() {
    let mut rng = StdRng::seed_from_u64(17);
    let round = generate_round(2, &mut rng).await.unwrap();
    let solution = round.solution();

    let mut walk = Walk::for_path(&round.path);
    assert!(!walk.toggle(solution[1]));
    for &cell in &solution[..3] {
        assert!(walk.toggle(cell));
    }
    // Clicking the previous cell keeps it and drops the tip.
    assert!(walk.toggle(solution[1]));
    assert_eq!(walk.cells(), &solution[..2]);

    for &cell in &solution[2..] {
        assert!(walk.toggle(cell));
    }
    assert!(round.validate(walk.cells()).is_solved());
}

#[tokio::test]
async fn unknown_level_fails_before_generation() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate_round(0, &mut rng).await.unwrap_err();
    assert_eq!(err, RoundError::Sequence(SequenceError::InvalidLevel(0)));
}

#[tokio::test]
async fn no_sequence_attempts_is_too_short() {
    let mut rng = StdRng::seed_from_u64(5);
    let limits = RoundLimits {
        path: PathLimits::default(),
        sequence_attempts: 0,
    };
    let err = generate_round_with(1, limits, &mut rng).await.unwrap_err();
    assert!(matches!(
        err,
        RoundError::SequenceTooShort { longest: 0, attempts: 0, .. }
    ));
}
