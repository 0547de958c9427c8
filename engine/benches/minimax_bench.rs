use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{Board, GameState, Mark, Position, SessionRng, choose_move, minimax};

fn bench_first_reply(c: &mut Criterion) {
    c.bench_function("minimax_first_reply", |b| {
        let mut board = Board::new();
        board.set(Position::new(1, 1), Mark::Human);

        b.iter(|| {
            let mut scratch = board;
            minimax(&mut scratch, 8, Mark::Machine)
        });
    });
}

fn bench_mid_game_move(c: &mut Criterion) {
    c.bench_function("minimax_mid_game", |b| {
        let mut board = Board::new();
        let moves = [
            (1, 1, Mark::Human),
            (0, 0, Mark::Machine),
            (2, 2, Mark::Human),
            (0, 2, Mark::Machine),
        ];
        for (row, col, mark) in moves {
            board.set(Position::new(row, col), mark);
        }
        let mut rng = SessionRng::new(42);

        b.iter(|| choose_move(&board, &mut rng));
    });
}

fn bench_full_self_play(c: &mut Criterion) {
    c.bench_function("self_play_game", |b| {
        b.iter(|| {
            let mut rng = SessionRng::new(7);
            let mut game = GameState::new();
            let opening = choose_move(game.board(), &mut rng).unwrap();
            game.place_mark(Mark::Machine, opening).unwrap();

            let mut player = Mark::Human;
            while !game.is_over() {
                let depth = game.board().empty_cells().len();
                let mut scratch = *game.board();
                let pos = minimax(&mut scratch, depth, player).position.unwrap();
                game.place_mark(player, pos).unwrap();
                player = player.opponent().unwrap();
            }
            game.status()
        });
    });
}

criterion_group!(
    benches,
    bench_first_reply,
    bench_mid_game_move,
    bench_full_self_play
);
criterion_main!(benches);
