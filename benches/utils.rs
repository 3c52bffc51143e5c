use chess_rules::{core::utils::all_cells, Board, Color, Rules};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn count_all_moves(board: &Board, color: Color) -> usize {
    board
        .iter_pieces()
        .filter(|(_, piece)| piece.color == color)
        .map(|(pos, _)| board.destinations(pos, color).len())
        .sum()
}

fn validate_everything(board: &Board) -> usize {
    all_cells()
        .flat_map(|from| all_cells().map(move |to| (from, to)))
        .filter(|(from, to)| board.validate(*from, *to, Color::White).is_ok())
        .count()
}

fn opening(board: &mut Board) {
    board.attempt_move(6, 4, 4, 4, true);
    board.attempt_move(1, 3, 3, 3, false);
    board.attempt_move(4, 4, 3, 3, true);
}

fn utils_benchmark(c: &mut Criterion) {
    c.bench_function("snapshot", |b| {
        b.iter(|| black_box(Board::default()).snapshot())
    });
    c.bench_function("all moves lenient", |b| {
        b.iter(|| count_all_moves(black_box(&Board::default()), Color::White))
    });
    c.bench_function("all moves strict", |b| {
        b.iter(|| count_all_moves(black_box(&Board::with_rules(Rules::strict())), Color::White))
    });
    c.bench_function("validate 64x64", |b| {
        b.iter(|| validate_everything(black_box(&Board::default())))
    });
    c.bench_function("opening exchange", |b| {
        b.iter(|| {
            let mut board = Board::default();
            opening(black_box(&mut board));
            board
        })
    });
}

criterion_group!(benches, utils_benchmark);
criterion_main!(benches);
