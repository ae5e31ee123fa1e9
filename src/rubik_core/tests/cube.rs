use log::info;
use rubik_core::{Cube, Direction, Layer, Move, MoveSequence};

fn random_sequence(rng: &mut fastrand::Rng, length: usize) -> MoveSequence {
    let all: Vec<Move> = Move::all().collect();
    (0..length).map(|_| all[rng.usize(..all.len())]).collect()
}

fn apply_repeated(cube: &mut Cube, moves: &str, repeat: usize) {
    let sequence = MoveSequence::parse(moves);
    for _ in 0..repeat {
        cube.apply_sequence(&sequence);
    }
}

#[test_log::test]
fn test_reverse_restores_solved() {
    let mut rng = fastrand::Rng::with_seed(7);
    for dimension in [2, 3] {
        for length in [0, 1, 2, 5, 20, 200, 10_000] {
            let mut cube = Cube::new(dimension).unwrap();
            let mut scramble = random_sequence(&mut rng, length);
            cube.apply_sequence(&scramble);

            scramble.reverse();
            cube.apply_sequence(&scramble);
            assert!(cube.is_solved(), "{dimension}x{dimension} after {length} moves");
        }
    }
}

#[test_log::test]
fn test_long_scramble_is_not_solved() {
    let mut rng = fastrand::Rng::with_seed(42);
    let mut cube = Cube::new(3).unwrap();
    let mut scramble = random_sequence(&mut rng, 10_000);
    scramble.simplify();
    info!("Scrambled with {} moves", scramble.len());
    cube.apply_sequence(&scramble);
    assert!(!cube.is_solved());
}

#[test_log::test]
fn test_turn_orders() {
    for dimension in [2, 3] {
        for layer in [Layer::U, Layer::D, Layer::R, Layer::L, Layer::F, Layer::B] {
            let quarter = Move::new(layer, Direction::Clockwise);
            let double = Move::new(layer, Direction::Double);

            let mut cube = Cube::new(dimension).unwrap();
            for turn in 1..=4 {
                cube.apply(quarter);
                assert_eq!(cube.is_solved(), turn == 4, "{quarter} x{turn}");
            }

            let mut cube = Cube::new(dimension).unwrap();
            cube.apply(double);
            assert!(!cube.is_solved());
            cube.apply(double);
            assert!(cube.is_solved());
        }
    }
}

#[test_log::test]
fn test_opposite_turns_cancel() {
    for move_ in Move::all() {
        let mut cube = Cube::new(3).unwrap();
        let before = cube.clone();
        cube.apply(move_);
        cube.apply(move_.inverse());
        assert_eq!(cube, before, "{move_} {}", move_.inverse());
    }
}

#[test_log::test]
fn test_known_orders_on_three_by_three() {
    // Orders of these sequences on a physical 3x3x3 cube.
    for (moves, order) in [("R U R' U'", 6), ("R2 U2", 6), ("R U", 105), ("R U F", 80)] {
        let mut cube = Cube::new(3).unwrap();
        apply_repeated(&mut cube, moves, order - 1);
        assert!(!cube.is_solved(), "({moves}) x{}", order - 1);
        apply_repeated(&mut cube, moves, 1);
        assert!(cube.is_solved(), "({moves}) x{order}");
    }
}

#[test_log::test]
fn test_known_orders_on_two_by_two() {
    for (moves, order) in [("R U R' U'", 6), ("R2 U2", 3), ("R U", 15)] {
        let mut cube = Cube::new(2).unwrap();
        apply_repeated(&mut cube, moves, order - 1);
        assert!(!cube.is_solved(), "({moves}) x{}", order - 1);
        apply_repeated(&mut cube, moves, 1);
        assert!(cube.is_solved(), "({moves}) x{order}");
    }
}

fn order(dimension: usize, sequence: &MoveSequence) -> usize {
    let mut cube = Cube::new(dimension).unwrap();
    (1..)
        .find(|_| {
            cube.apply_sequence(sequence);
            cube.is_solved()
        })
        .unwrap()
}

fn opposite(layer: Layer) -> Layer {
    match layer {
        Layer::U => Layer::D,
        Layer::D => Layer::U,
        Layer::R => Layer::L,
        Layer::L => Layer::R,
        Layer::F => Layer::B,
        Layer::B => Layer::F,
    }
}

#[test_log::test]
fn test_orders_of_every_layer_pair() {
    // X Y and X Y' have different orders on a physical cube, so a face wired
    // to turn the wrong way shows up for every pair it is part of.
    let layers = [Layer::U, Layer::D, Layer::R, Layer::L, Layer::F, Layer::B];
    for first in layers {
        for second in layers.into_iter().filter(|&layer| layer != first) {
            let clockwise: MoveSequence = [
                Move::new(first, Direction::Clockwise),
                Move::new(second, Direction::Clockwise),
            ]
            .into_iter()
            .collect();
            let mixed: MoveSequence = [
                Move::new(first, Direction::Clockwise),
                Move::new(second, Direction::CounterClockwise),
            ]
            .into_iter()
            .collect();

            if second == opposite(first) {
                assert_eq!(order(3, &clockwise), 4, "{clockwise}");
                assert_eq!(order(3, &mixed), 4, "{mixed}");
            } else {
                assert_eq!(order(3, &clockwise), 105, "{clockwise}");
                assert_eq!(order(3, &mixed), 63, "{mixed}");
                assert_eq!(order(2, &clockwise), 15, "{clockwise}");
                assert_eq!(order(2, &mixed), 9, "{mixed}");
            }
        }
    }
}

#[test_log::test]
fn test_simplified_sequence_has_same_effect() {
    let mut rng = fastrand::Rng::with_seed(3);
    for dimension in [2, 3] {
        for _ in 0..50 {
            let original = random_sequence(&mut rng, 30);
            let mut simplified = original.clone();
            simplified.simplify();
            assert!(simplified.len() <= original.len());

            let mut a = Cube::new(dimension).unwrap();
            a.apply_sequence(&original);
            let mut b = Cube::new(dimension).unwrap();
            b.apply_sequence(&simplified);
            assert_eq!(a, b, "{original} vs {simplified}");
        }
    }
}

#[test_log::test]
fn test_simplify_leaves_no_mergeable_neighbors() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..100 {
        let mut sequence = random_sequence(&mut rng, 40);
        sequence.simplify();
        for pair in sequence.windows(2) {
            assert_ne!(pair[0].layer(), pair[1].layer(), "{sequence}");
        }
    }
}
