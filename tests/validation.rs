use mathpath::numeric::{NumericValue, Operator};
use mathpath::path::{Coordinate, GridPath};
use mathpath::sequence::{sequence_to_entries, Entry, SequenceStep};
use mathpath::validate::{validate_path, StepFault, ValidationRequest};
use rstest::{fixture, rstest};

/// A board with a hand-written chain laid along the top row and down the
/// right column, so the path ends on the (9, 9) corner.
struct Fixture {
    path: GridPath,
    grid: Vec<Option<Entry>>,
}

impl Fixture {
    fn indices(&self) -> Vec<usize> {
        self.path.cell_indices()
    }
}

fn step(num1: i64, operator: Operator, num2: i64, result: i64) -> SequenceStep {
    SequenceStep {
        num1: NumericValue::Integer(num1),
        operator,
        num2: NumericValue::Integer(num2),
        result: NumericValue::Integer(result),
    }
}

#[fixture]
fn board() -> Fixture {
    let mut cells: Vec<Coordinate> = (0..10).filter_map(|x| Coordinate::new(x, 0)).collect();
    cells.extend((1..10).filter_map(|y| Coordinate::new(9, y)));
    // 19 cells: one seed and six groups.
    let steps = vec![
        step(5, Operator::Add, 3, 8),
        step(8, Operator::Multiply, 2, 16),
        step(16, Operator::Divide, 4, 4),
        step(4, Operator::Subtract, 1, 3),
        step(3, Operator::Multiply, 7, 21),
        step(21, Operator::Divide, 3, 7),
    ];
    let entries = sequence_to_entries(&steps);
    assert_eq!(entries.len(), cells.len());

    let path = GridPath::new(cells);
    let mut grid = vec![None; 100];
    for (index, entry) in path.cell_indices().into_iter().zip(entries) {
        grid[index] = Some(entry);
    }
    Fixture { path, grid }
}

#[rstest]
fn consistent_short_walk_is_valid_but_too_short(board: Fixture) {
    let walk = board.indices();
    let result = validate_path(ValidationRequest {
        user_path: &walk,
        grid_entries: &board.grid,
        original_path: &board.path,
    });
    assert!(result.is_valid);
    assert!(!result.is_valid_length);
    assert!(result.starts_at_start_square);
    assert!(result.ends_at_end_square);
    assert!(!result.is_solved());
    let results: Vec<f64> = result.steps.iter().map(|s| s.result).collect();
    assert_eq!(results, vec![8.0, 16.0, 4.0, 3.0, 21.0, 7.0]);
}

#[rstest]
#[case::seed_only(1, true)]
#[case::one_group(4, true)]
#[case::open_tip(6, true)]
#[case::two_groups(7, true)]
fn walk_prefixes(board: Fixture, #[case] length: usize, #[case] valid: bool) {
    let walk: Vec<usize> = board.indices().into_iter().take(length).collect();
    let result = validate_path(ValidationRequest {
        user_path: &walk,
        grid_entries: &board.grid,
        original_path: &board.path,
    });
    assert_eq!(result.is_valid, valid);
    assert_eq!(result.walked_length, length);
    assert!(!result.ends_at_end_square);
}

#[rstest]
fn tampered_result_in_group_one(mut board: Fixture) {
    let walk = board.indices();
    // Cell 6 of the walk holds the result of 8 × 2.
    board.grid[walk[6]] = Some(Entry::Number(NumericValue::Integer(17)));

    let result = validate_path(ValidationRequest {
        user_path: &walk,
        grid_entries: &board.grid,
        original_path: &board.path,
    });
    assert!(!result.is_valid);
    assert_eq!(result.error_step, Some(1));
    assert_eq!(result.error_offset(), Some(3));
    assert_eq!(
        result.error_details.as_deref(),
        Some("Invalid calculation: 8 x 2 = 17, but the result is 16")
    );
    assert_eq!(result.steps.len(), 1);
}

#[rstest]
fn walking_off_the_chain_reports_the_token(board: Fixture) {
    let mut walk: Vec<usize> = board.indices().into_iter().take(3).collect();
    // Step down from (2, 0) into an empty cell.
    walk.push(12);
    let result = validate_path(ValidationRequest {
        user_path: &walk,
        grid_entries: &board.grid,
        original_path: &board.path,
    });
    assert_eq!(result.error_step, Some(0));
    assert_eq!(result.fault, Some(StepFault::MissingEntry { position: 3 }));
}

#[rstest]
fn division_by_zero_is_a_fault(mut board: Fixture) {
    let walk = board.indices();
    board.grid[walk[1]] = Some(Entry::Operator(Operator::Divide));
    board.grid[walk[2]] = Some(Entry::Number(NumericValue::Integer(0)));
    let result = validate_path(ValidationRequest {
        user_path: &walk,
        grid_entries: &board.grid,
        original_path: &board.path,
    });
    assert_eq!(result.error_step, Some(0));
    assert!(matches!(
        result.fault,
        Some(StepFault::DivisionByZero { .. })
    ));
}
