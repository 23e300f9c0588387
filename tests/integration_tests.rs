use rand::SeedableRng;
use rand::rngs::StdRng;

use vialsort::generator::generate_vials;
use vialsort::loader::{Puzzle, load_board};
use vialsort::model::{Board, Vial};

fn contents(board: &Board) -> Vec<Vec<u32>> {
    board
        .get_vials()
        .iter()
        .map(|v| v.get_units().to_vec())
        .collect()
}

#[test]
fn generated_puzzles_load_into_playable_boards() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut vials = generate_vials(4, 4, &mut rng);
    vials.extend((0..2).map(|_| Vec::new()));

    let line = serde_json::to_string(&Puzzle {
        vial_size: 4,
        vials,
    })
    .unwrap();

    let board = load_board(&line).unwrap();
    assert_eq!(board.get_num_vials(), 6);
    assert_eq!(board.get_vial_size(), 4);
    assert!(board.is_vial_empty(4));
    assert!(board.is_vial_empty(5));
    assert!(board.get_max_color() <= 3);
    // A freshly dealt puzzle with shuffled colors is essentially never
    // pre-solved with this seed.
    assert!(!board.is_solved());
}

#[test]
fn any_sequence_of_actions_fully_unwinds() {
    let mut board = Board::new(
        4,
        vec![
            Vial::from_units(vec![0, 1, 0, 1]),
            Vial::from_units(vec![1, 0, 1, 0]),
            Vial::new(),
        ],
    );
    let original = contents(&board);

    // A mix of effective pours, no-op pours, and vial additions.
    board.pour(0, 2);
    board.pour(1, 2);
    board.pour(0, 1);
    board.add_empty_vial();
    board.pour(1, 3);
    board.pour(0, 0);
    board.pour(2, 0);
    board.add_empty_vial();

    for _ in 0..20 {
        board.undo();
    }

    assert_eq!(contents(&board), original);
    assert_eq!(board.get_num_vials(), 3);
}

#[test]
fn solving_a_small_puzzle_end_to_end() {
    let mut board =
        load_board(r#"{"vial_size": 2, "vials": [[0, 1], [1], [0]]}"#).unwrap();
    assert!(!board.is_solved());

    board.pour(0, 1);
    board.pour(0, 2);
    assert!(board.is_solved());

    board.undo();
    board.undo();
    assert_eq!(contents(&board), vec![vec![0, 1], vec![1], vec![0]]);
}
