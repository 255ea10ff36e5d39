//! Piece catalog tests

use block_blast::core::{color_of, piece_def, shape_of, PieceRandomizer, CATALOG};
use block_blast::types::{PieceKind, MAX_SHAPE_CELLS, MAX_SHAPE_EDGE};

#[test]
fn test_catalog_order_matches_all_kinds() {
    let kinds: Vec<PieceKind> = CATALOG.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, PieceKind::ALL.to_vec());
    for kind in PieceKind::ALL {
        assert_eq!(piece_def(kind).kind, kind);
    }
}

#[test]
fn test_cell_counts() {
    let expected = [
        (PieceKind::Single, 1),
        (PieceKind::Square2, 4),
        (PieceKind::Line4, 4),
        (PieceKind::Line5, 5),
        (PieceKind::Square3, 9),
        (PieceKind::I, 4),
        (PieceKind::O, 4),
        (PieceKind::T, 4),
        (PieceKind::S, 4),
        (PieceKind::Z, 4),
        (PieceKind::J, 4),
        (PieceKind::L, 4),
    ];
    for (kind, cells) in expected {
        assert_eq!(shape_of(kind).cell_count(), cells, "{kind:?}");
    }
}

#[test]
fn test_shapes_fit_preview_box() {
    for kind in PieceKind::ALL {
        let shape = shape_of(kind);
        assert!(shape.height() <= MAX_SHAPE_EDGE, "{kind:?}");
        assert!(shape.width() <= MAX_SHAPE_EDGE, "{kind:?}");
        assert!(shape.cell_count() as usize <= MAX_SHAPE_CELLS);
        assert!(shape.cell_count() > 0);
    }
}

#[test]
fn test_tetromino_matrices_keep_padding() {
    let i = shape_of(PieceKind::I);
    assert_eq!((i.height(), i.width()), (4, 4));
    assert!(!i.is_filled(0, 0));
    assert!(i.is_filled(1, 0) && i.is_filled(1, 3));

    let t = shape_of(PieceKind::T);
    assert_eq!((t.height(), t.width()), (3, 3));
    assert_eq!(t.cells().collect::<Vec<_>>(), vec![(0, 1), (1, 0), (1, 1), (1, 2)]);

    assert_eq!((shape_of(PieceKind::O).height(), shape_of(PieceKind::O).width()), (2, 2));
}

#[test]
fn test_colors() {
    assert_eq!(color_of(PieceKind::Single).hex(), "#FF6B6B");
    assert_eq!(color_of(PieceKind::Square3).hex(), "#FFEAA7");
    assert_eq!(color_of(PieceKind::L).hex(), "#FF8C00");
}

#[test]
fn test_kind_names_round_trip() {
    for kind in PieceKind::ALL {
        assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
    }
    assert_eq!(PieceKind::from_str("hexomino"), None);
}

#[test]
fn test_randomizer_is_deterministic_and_covers_catalog() {
    let mut a = PieceRandomizer::new(2024);
    let mut b = PieceRandomizer::new(2024);
    let mut seen = [false; 12];
    for _ in 0..600 {
        let k = a.draw();
        assert_eq!(k, b.draw());
        let idx = PieceKind::ALL.iter().position(|&p| p == k).unwrap();
        seen[idx] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
