use criterion::{black_box, criterion_group, criterion_main, Criterion};

use minesweeper_ai::board::{Board, Minefield};
use minesweeper_ai::core::{BoardConfig, Cell, GameRng};
use minesweeper_ai::knowledge::KnowledgeBase;
use minesweeper_ai::play::{simulate, PlayConfig};

/// Reveal every safe cell of an expert board in row-major order.
fn reveal_expert_board(c: &mut Criterion) {
    let config = BoardConfig::expert();
    let board = Minefield::new(config, &mut GameRng::new(42));
    let safe_cells: Vec<Cell> = Cell::all(config.height(), config.width())
        .filter(|&cell| !board.is_mine(cell))
        .collect();

    c.bench_function("add_knowledge expert board", |b| {
        b.iter(|| {
            let mut kb = KnowledgeBase::for_board(&config);
            for &cell in &safe_cells {
                kb.add_knowledge(cell, board.nearby_mines(cell)).unwrap();
            }
            black_box(kb.mines().len())
        })
    });
}

fn simulate_beginner(c: &mut Criterion) {
    let config = PlayConfig::new(BoardConfig::beginner()).with_games(10);

    c.bench_function("simulate 10 beginner games", |b| {
        b.iter(|| black_box(simulate(&config).unwrap()))
    });
}

criterion_group!(benches, reveal_expert_board, simulate_beginner);
criterion_main!(benches);
