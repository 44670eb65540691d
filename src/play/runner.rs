//! Game loop: an agent against a board.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::agent::{Agent, Strategy};
use crate::board::{Board, Minefield};
use crate::core::{Cell, GameRng, GameRngState, ObservationError};

use super::{PlayConfig, PlayStats};

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every mine flagged.
    Won,
    /// Revealed a mine.
    Lost { cell: Cell },
    /// No move left without having won.
    Exhausted,
    /// Hit the move limit.
    MoveLimit,
}

/// Summary of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub outcome: Outcome,
    /// Moves taken from deduced safe cells.
    pub safe_moves: usize,
    /// Moves that were guesses, including a losing one.
    pub random_moves: usize,
    /// Mines the agent had deduced when the game ended.
    pub mines_found: usize,
    /// Generator state a seeded game started from; feed it to `replay`.
    pub rng: Option<GameRngState>,
}

/// Play until the game is won, lost, or stuck.
///
/// After each move every mine the agent knows about is flagged on the board.
/// At most `config.effective_max_moves()` moves are made, so `config.board`
/// should describe `board`. An error means the board reported a count that
/// contradicts the agent's knowledge; the agent keeps its state from before
/// that move.
pub fn play_game<B: Board>(
    board: &mut B,
    agent: &mut Agent,
    config: &PlayConfig,
) -> Result<GameReport, ObservationError> {
    let max_moves = config.effective_max_moves();
    let mut safe_moves = 0;
    let mut random_moves = 0;

    let outcome = 'game: {
        if board.won() {
            break 'game Outcome::Won;
        }
        for _ in 0..max_moves {
            let Some(mv) = agent.next_move() else {
                break 'game Outcome::Exhausted;
            };
            match mv.strategy {
                Strategy::Safe => safe_moves += 1,
                Strategy::Random => random_moves += 1,
            }

            if board.is_mine(mv.cell) {
                break 'game Outcome::Lost { cell: mv.cell };
            }
            let count = board.nearby_mines(mv.cell);
            debug!(cell = %mv.cell, count, strategy = ?mv.strategy, "revealed cell");
            agent.add_knowledge(mv.cell, count)?;

            for &mine in agent.mines() {
                board.flag(mine);
            }
            if board.won() {
                break 'game Outcome::Won;
            }
        }
        Outcome::MoveLimit
    };

    let report = GameReport {
        outcome,
        safe_moves,
        random_moves,
        mines_found: agent.mines().len(),
        rng: None,
    };
    debug!(?report, "game finished");
    Ok(report)
}

/// Play one game on a fresh `Minefield`, drawing the mine layout and the
/// agent's guesses from separate streams of `game_rng`.
///
/// The report records `game_rng`'s state so the game can be replayed.
pub fn play_seeded(config: &PlayConfig, game_rng: &GameRng) -> Result<GameReport, ObservationError> {
    let mut board = Minefield::new(config.board, &mut game_rng.for_context("minefield"));
    let mut agent = Agent::with_rng(&config.board, game_rng.for_context("moves"));

    let mut report = play_game(&mut board, &mut agent, config)?;
    report.rng = Some(game_rng.state());
    Ok(report)
}

/// Play a seeded game again from the state stored in its report.
pub fn replay(config: &PlayConfig, state: &GameRngState) -> Result<GameReport, ObservationError> {
    play_seeded(config, &GameRng::from_state(state))
}

/// Play `config.games` independent games and aggregate the results.
///
/// Game `i` uses the `i`-th fork of `config.seed`, so runs are reproducible.
pub fn simulate(config: &PlayConfig) -> Result<PlayStats, ObservationError> {
    let mut master = GameRng::new(config.seed);
    let mut stats = PlayStats::new();

    for game in 0..config.games {
        let report = play_seeded(config, &master.fork())?;
        debug!(game, outcome = ?report.outcome, "simulated game");
        stats.record(&report);
    }

    info!(
        games = stats.games,
        wins = stats.wins,
        losses = stats.losses,
        win_rate = stats.win_rate(),
        "simulation complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardConfig;

    fn c(row: usize, col: usize) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn test_mine_free_board_wins_immediately() {
        let config = BoardConfig::new(3, 3, 0).unwrap();
        let mut board = Minefield::from_mines(config, Vec::<Cell>::new()).unwrap();
        let mut agent = Agent::new(&config, 1);

        let report = play_game(&mut board, &mut agent, &PlayConfig::new(config)).unwrap();
        assert_eq!(report.outcome, Outcome::Won);
        assert_eq!(report.safe_moves + report.random_moves, 0);
    }

    #[test]
    fn test_single_row_is_solved_by_deduction() {
        // . . X
        let config = BoardConfig::new(1, 3, 1).unwrap();
        let mut board = Minefield::from_mines(config, [c(0, 2)]).unwrap();
        let mut agent = Agent::new(&config, 0);
        agent.mark_safe(c(0, 0));

        let report = play_game(&mut board, &mut agent, &PlayConfig::new(config)).unwrap();

        // (0,0)=0 clears (0,1); (0,1)=1 pins the mine on (0,2)
        assert_eq!(report.outcome, Outcome::Won);
        assert_eq!(report.safe_moves, 2);
        assert_eq!(report.random_moves, 0);
        assert_eq!(report.mines_found, 1);
        assert!(board.flagged().contains(&c(0, 2)));
    }

    #[test]
    fn test_revealing_mine_loses() {
        let config = BoardConfig::new(1, 2, 1).unwrap();
        let mut board = Minefield::from_mines(config, [c(0, 1)]).unwrap();
        let mut agent = Agent::new(&config, 0);
        agent.mark_safe(c(0, 1));

        let report = play_game(&mut board, &mut agent, &PlayConfig::new(config)).unwrap();
        assert_eq!(report.outcome, Outcome::Lost { cell: c(0, 1) });
    }

    #[test]
    fn test_move_limit() {
        let config = BoardConfig::new(3, 3, 1).unwrap();
        let mut board = Minefield::from_mines(config, [c(2, 2)]).unwrap();
        let mut agent = Agent::new(&config, 0);
        agent.mark_safe(c(0, 0));

        let play = PlayConfig::new(config).with_max_moves(1);

        // (0,0)=0 opens its neighbors, but one move cannot finish the board
        let report = play_game(&mut board, &mut agent, &play).unwrap();
        assert_eq!(report.outcome, Outcome::MoveLimit);
        assert_eq!(report.safe_moves, 1);
        assert_eq!(report.rng, None);
    }

    /// Reports one mine next to (0,0) and two next to every other cell.
    struct InconsistentBoard;

    impl Board for InconsistentBoard {
        fn height(&self) -> usize {
            2
        }

        fn width(&self) -> usize {
            2
        }

        fn is_mine(&self, _cell: Cell) -> bool {
            false
        }

        fn nearby_mines(&self, cell: Cell) -> usize {
            if cell == c(0, 0) {
                1
            } else {
                2
            }
        }

        fn flag(&mut self, _cell: Cell) {}

        fn won(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_contradicting_board_is_an_error() {
        let config = BoardConfig::new(2, 2, 0).unwrap();
        let mut agent = Agent::new(&config, 0);
        agent.mark_safe(c(0, 0));
        agent.mark_safe(c(0, 1));

        // (0,0)=1 gives {(1,0), (1,1)} = 1; (0,1)=2 claims both
        let err = play_game(&mut InconsistentBoard, &mut agent, &PlayConfig::new(config))
            .unwrap_err();

        assert!(
            matches!(err, ObservationError::Contradiction { cell, count: 2, .. } if cell == c(0, 1)),
            "{:?}",
            err
        );
        assert!(agent.moves_made().contains(&c(0, 0)));
        assert!(!agent.moves_made().contains(&c(0, 1)));
    }

    #[test]
    fn test_replay_reproduces_game() {
        let config = PlayConfig::new(BoardConfig::beginner());
        let mut master = GameRng::new(17);
        master.fork();

        let report = play_seeded(&config, &master.fork()).unwrap();
        let state = report.rng.clone().unwrap();

        assert_eq!(replay(&config, &state).unwrap(), report);
    }

    #[test]
    fn test_simulate_is_reproducible() {
        let config = PlayConfig::new(BoardConfig::default()).with_games(10).with_seed(7);

        let first = simulate(&config).unwrap();
        let second = simulate(&config).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.games, 10);
        assert_eq!(first.wins + first.losses + first.unfinished, 10);
    }
}
