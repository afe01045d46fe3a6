//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::boxed::Box;
use alloc::vec::Vec;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::build_deck;
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::presenter::{NullPresenter, Presenter};
use crate::result::RoundResult;
use crate::round::{Round, Side};
use crate::sync::Mutex;

mod actions;
mod computer;
pub mod state;

pub use state::{ComputerStep, Phase, PlayerHit};

/// A single-table game between a player and a scripted computer opponent.
///
/// The game owns the round state, the turn phase, and the random number
/// generator used to shuffle each new deck. Every operation takes `&self`
/// and completes immediately; pacing of the computer's turn is left to a
/// [`ComputerTurnDriver`](crate::ComputerTurnDriver) or to the caller.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Scores and deck of the current round.
    pub round: Mutex<Round>,
    /// Current turn phase.
    pub phase: Mutex<Phase>,
    /// Player's final score, set when the computer's turn begins.
    threshold: Mutex<Option<u16>>,
    /// Result of the current round once it is decided.
    result: Mutex<Option<RoundResult>>,
    /// Bumped whenever the current round is replaced or abandoned.
    round_id: AtomicU32,
    /// Display layer notified of table changes.
    presenter: Mutex<Box<dyn Presenter + Send>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed, ready for the player's turn.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::PlayerTurn);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let round = Round::new(build_deck(&mut rng));

        Self {
            options,
            round: Mutex::new(round),
            phase: Mutex::new(Phase::PlayerTurn),
            threshold: Mutex::new(None),
            result: Mutex::new(None),
            round_id: AtomicU32::new(0),
            presenter: Mutex::new(Box::new(NullPresenter)),
            rng: Mutex::new(rng),
        }
    }

    /// Replaces the presenter that receives table updates.
    pub fn set_presenter(&self, presenter: Box<dyn Presenter + Send>) {
        *self.presenter.lock() = presenter;
    }

    /// Starts a new round: fresh shuffled deck, both scores at zero, player
    /// to act.
    ///
    /// Any [`ComputerTurnDriver`](crate::ComputerTurnDriver) created for the
    /// previous round stops dealing.
    pub fn start_round(&self) {
        let id = self.round_id.fetch_add(1, Ordering::SeqCst).wrapping_add(1);

        let deck = self.rng.with(build_deck);
        *self.round.lock() = Round::new(deck);
        *self.threshold.lock() = None;
        *self.result.lock() = None;
        *self.phase.lock() = Phase::PlayerTurn;

        info!("round {id} started");

        self.notify(|presenter| {
            presenter.round_started();
            presenter.score_changed(Side::Player, 0);
            presenter.score_changed(Side::Computer, 0);
            presenter.controls_changed(true);
        });
    }

    /// Ends the current round without a result.
    ///
    /// The round moves straight to [`Phase::RoundOver`] from whatever phase
    /// it was in, and pending computer turn drivers are invalidated. Does
    /// nothing if the round is already over.
    pub fn abandon_round(&self) {
        let was = core::mem::replace(&mut *self.phase.lock(), Phase::RoundOver);
        if was == Phase::RoundOver {
            return;
        }

        self.round_id.fetch_add(1, Ordering::SeqCst);
        info!("round abandoned during {was:?}");
        self.notify(|presenter| presenter.controls_changed(false));
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        *self.phase.lock()
    }

    /// Identifies the current round. Changes on every
    /// [`start_round`](Self::start_round) and
    /// [`abandon_round`](Self::abandon_round).
    pub fn round_id(&self) -> u32 {
        self.round_id.load(Ordering::SeqCst)
    }

    /// Returns the player's score.
    pub fn player_score(&self) -> u16 {
        self.round.lock().player_score()
    }

    /// Returns the computer's score.
    pub fn computer_score(&self) -> u16 {
        self.round.lock().computer_score()
    }

    /// Returns the cards dealt to `side` this round.
    pub fn cards(&self, side: Side) -> Vec<Card> {
        self.round.lock().cards(side).to_vec()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.round.lock().cards_remaining()
    }

    /// Returns the score the computer has to reach, once the player's turn
    /// is over.
    pub fn threshold(&self) -> Option<u16> {
        *self.threshold.lock()
    }

    /// Returns the round result once the computer's turn is over.
    pub fn result(&self) -> Option<RoundResult> {
        *self.result.lock()
    }

    pub(crate) fn ensure_phase(&self, expected: Phase) -> Result<(), ActionError> {
        let found = *self.phase.lock();
        if found == expected {
            Ok(())
        } else {
            Err(ActionError::InvalidPhase { expected, found })
        }
    }

    fn notify(&self, f: impl FnOnce(&mut dyn Presenter)) {
        self.presenter.with(|presenter| f(presenter.as_mut()));
    }
}
