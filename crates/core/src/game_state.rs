//! Game state module - one game session
//!
//! Ties together the board, the tile bag and the players. A turn is a
//! [`Move`] from the current player; the session resolves its hand indices,
//! asks the board to place the tiles, then scores, refills and advances.
//!
//! The game ends (and stays ended) when, with the bag empty:
//! - the player who just moved has emptied their hand (they get the end bonus),
//! - no player can put any hand tile anywhere on the board, or
//! - every player has passed in a row.

use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::player::Player;
use crate::rng::TileBag;
use crate::types::{Move, PlacementRequest, TilePlacement, MAX_PLAYERS};

/// What a successful turn did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Index of the player who moved
    pub player: usize,
    /// Points scored by the placement (0 for a pass)
    pub points: u32,
    /// End-of-game bonus awarded for emptying the hand
    pub end_bonus: u32,
    pub passed: bool,
    /// The game is over after this turn
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
    pub(crate) bag: TileBag,
    pub(crate) passes_in_row: usize,
    pub(crate) over: bool,
}

impl GameState {
    /// Start a game: shuffle the bag and deal every player a full hand
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let count = config.players.len();
        if !(1..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::PlayerCount {
                got: count,
                max: MAX_PLAYERS,
            });
        }
        if !config.rules.is_valid() {
            return Err(GameError::InvalidRules(format!("{:?}", config.rules)));
        }

        let mut bag = TileBag::new(config.seed);
        let players = config
            .players
            .iter()
            .map(|name| {
                let mut player = Player::new(name.as_str());
                player.refill(&mut bag);
                player
            })
            .collect();

        info!(
            "new game: {} players, seed {}, {} tiles left in the bag",
            count,
            config.seed,
            bag.len()
        );

        Ok(Self {
            board: Board::with_rules(config.rules),
            players,
            current: 0,
            bag,
            passes_in_row: 0,
            over: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    pub fn passes_in_row(&self) -> usize {
        self.passes_in_row
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Players ordered by score, highest first; ties keep seating order
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score().cmp(&a.score()));
        ranked
    }

    /// Play one turn for the current player
    ///
    /// A rejected move changes nothing: the board, the hand and the turn
    /// order are exactly as before.
    pub fn play(&mut self, mv: Move) -> Result<TurnOutcome, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }

        let mover = self.current;
        let Some(request) = resolve(&self.players[mover], &mv)? else {
            return Ok(self.pass());
        };

        let points = self.board.apply(&request)?;

        let rules = *self.board.rules();
        let player = &mut self.players[mover];
        player.add_score(points);
        player.remove_indices(&mv.indices());
        player.refill(&mut self.bag);
        self.passes_in_row = 0;
        debug!(
            "{} scored {} ({} total), {} tiles left in the bag",
            player.name(),
            points,
            player.score(),
            self.bag.len()
        );

        let mut end_bonus = 0;
        if player.hand().is_empty() && self.bag.is_empty() {
            end_bonus = rules.end_game_bonus;
            player.add_score(end_bonus);
            self.finish("a player emptied their hand");
        } else {
            self.advance();
        }

        Ok(TurnOutcome {
            player: mover,
            points,
            end_bonus,
            passed: false,
            game_over: self.over,
        })
    }

    fn pass(&mut self) -> TurnOutcome {
        let mover = self.current;
        self.passes_in_row += 1;
        debug!("{} passed ({} in a row)", self.players[mover].name(), self.passes_in_row);
        self.advance();
        TurnOutcome {
            player: mover,
            points: 0,
            end_bonus: 0,
            passed: true,
            game_over: self.over,
        }
    }

    /// Hand the turn to the next player and check for a stalled game
    fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();

        if !self.bag.is_empty() {
            return;
        }
        if self.passes_in_row >= self.players.len() {
            self.finish("every player passed");
        } else if self.is_blocked() {
            self.finish("no tile can be placed");
        }
    }

    /// No player holds a tile that fits anywhere on the board
    fn is_blocked(&self) -> bool {
        !self.board.is_empty()
            && self.players.iter().all(|player| {
                player
                    .hand()
                    .iter()
                    .all(|&tile| self.board.find_spot(tile).is_none())
            })
    }

    fn finish(&mut self, reason: &str) {
        self.over = true;
        let summary: Vec<String> = self
            .standings()
            .iter()
            .map(|p| format!("{} {}", p.name(), p.score()))
            .collect();
        info!("game over ({}): {}", reason, summary.join(", "));
    }
}

/// Turn a move into a placement request; `None` for a pass
fn resolve(player: &Player, mv: &Move) -> Result<Option<PlacementRequest>, GameError> {
    let request = match mv {
        Move::Pass => return Ok(None),
        Move::First { direction, indices } => PlacementRequest::First {
            direction: *direction,
            tiles: player.tiles_at(indices)?,
        },
        Move::Single { row, col, index } => PlacementRequest::Single {
            row: *row,
            col: *col,
            tile: player.tile(*index)?,
        },
        Move::Run {
            row,
            col,
            direction,
            indices,
        } => PlacementRequest::Run {
            row: *row,
            col: *col,
            direction: *direction,
            tiles: player.tiles_at(indices)?,
        },
        Move::Set(triples) => {
            let tiles = player.tiles_at(&mv.indices())?;
            PlacementRequest::Set(
                triples
                    .iter()
                    .zip(tiles)
                    .map(|(&(row, col, _), tile)| TilePlacement::new(row, col, tile))
                    .collect(),
            )
        }
    };
    Ok(Some(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Direction, Shape, Tile};

    fn two_players(seed: u32) -> GameState {
        GameState::new(&GameConfig::new(vec!["Ada".into(), "Grace".into()], seed)).unwrap()
    }

    /// A game whose first player holds exactly `hand` and whose bag is `bag`
    fn rigged(hand: &[Tile], other: &[Tile], bag: Vec<Tile>) -> GameState {
        let mut game = two_players(1);
        game.players[0] = Player::restore("Ada".into(), 0, hand).unwrap();
        game.players[1] = Player::restore("Grace".into(), 0, other).unwrap();
        game.bag = TileBag::from_tiles(bag);
        game
    }

    #[test]
    fn test_new_deals_full_hands() {
        let game = two_players(9);
        assert_eq!(game.players().len(), 2);
        assert!(game.players().iter().all(|p| p.hand().len() == 6));
        assert_eq!(game.bag_len(), 108 - 12);
        assert_eq!(game.current_index(), 0);
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_player_count_is_checked() {
        let none = GameConfig::new(Vec::new(), 1);
        assert_eq!(
            GameState::new(&none),
            Err(GameError::PlayerCount { got: 0, max: 4 })
        );

        let five = GameConfig::new((0..5).map(|i| format!("P{}", i)).collect(), 1);
        assert_eq!(
            GameState::new(&five),
            Err(GameError::PlayerCount { got: 5, max: 4 })
        );
    }

    #[test]
    fn test_first_move_scores_and_refills() {
        let hand = [
            Tile::new(Color::Blue, Shape::Plus),
            Tile::new(Color::Blue, Shape::Cross),
            Tile::new(Color::Red, Shape::Star),
        ];
        let mut game = rigged(&hand, &[], TileBag::new(2).remaining().to_vec());
        let bag_before = game.bag_len();

        let outcome = game
            .play(Move::First {
                direction: Direction::Right,
                indices: vec![0, 1],
            })
            .unwrap();
        assert_eq!(outcome.points, 2);
        assert_eq!(outcome.player, 0);
        assert!(!outcome.game_over);

        assert_eq!(game.players()[0].score(), 2);
        assert_eq!(game.players()[0].hand().len(), 6);
        assert_eq!(game.players()[0].hand()[0], Tile::new(Color::Red, Shape::Star));
        assert_eq!(game.bag_len(), bag_before - 5);
        assert_eq!(game.current_index(), 1);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = two_players(3);
        let before = game.clone();

        let err = game.play(Move::Single {
            row: 45,
            col: 45,
            index: 0,
        });
        assert!(matches!(err, Err(GameError::Placement(_))));
        assert_eq!(game, before);

        let err = game.play(Move::First {
            direction: Direction::Right,
            indices: vec![0, 0],
        });
        assert_eq!(err, Err(GameError::RepeatedHandIndex(0)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_emptying_hand_with_empty_bag_ends_game() {
        let ada = [
            Tile::new(Color::Green, Shape::Star),
            Tile::new(Color::Green, Shape::Round),
        ];
        let grace = [Tile::new(Color::Red, Shape::Square)];
        let mut game = rigged(&ada, &grace, Vec::new());

        let outcome = game
            .play(Move::First {
                direction: Direction::Down,
                indices: vec![0, 1],
            })
            .unwrap();
        assert!(outcome.game_over);
        assert_eq!(outcome.end_bonus, 6);
        assert_eq!(game.players()[0].score(), 2 + 6);
        assert!(game.is_over());

        assert_eq!(game.play(Move::Pass), Err(GameError::GameOver));
        assert_eq!(game.standings()[0].name(), "Ada");
    }

    #[test]
    fn test_blocked_board_ends_game() {
        let ada = [
            Tile::new(Color::Green, Shape::Star),
            Tile::new(Color::Purple, Shape::Plus),
        ];
        let grace = [Tile::new(Color::Green, Shape::Star)];
        let mut game = rigged(&ada, &grace, Vec::new());

        // Ada keeps a purple plus that fits nowhere; Grace's copy of the
        // green star fits nowhere next to the lone green star either.
        let outcome = game
            .play(Move::First {
                direction: Direction::Right,
                indices: vec![0],
            })
            .unwrap();
        assert!(outcome.game_over);
        assert_eq!(outcome.end_bonus, 0);
    }

    #[test]
    fn test_all_players_passing_with_empty_bag_ends_game() {
        let mut game = rigged(
            &[Tile::new(Color::Blue, Shape::Star)],
            &[Tile::new(Color::Red, Shape::Round)],
            Vec::new(),
        );

        assert!(!game.play(Move::Pass).unwrap().game_over);
        assert_eq!(game.passes_in_row(), 1);
        let outcome = game.play(Move::Pass).unwrap();
        assert!(outcome.passed);
        assert!(outcome.game_over);
    }

    #[test]
    fn test_passing_with_tiles_in_bag_continues() {
        let mut game = two_players(5);
        for _ in 0..6 {
            assert!(!game.play(Move::Pass).unwrap().game_over);
        }
        assert_eq!(game.current_index(), 0);
        assert_eq!(game.passes_in_row(), 6);
    }
}
