use serde::Serialize;
use twentyone::{
    Card, ComputerStep, Game, GameOptions, Outcome, Phase, PlayerHit, Reason, RoundResult, Side,
    Suit,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn start_round(&self) {
        self.game.start_round();
    }

    pub fn abandon_round(&self) {
        self.game.abandon_round();
    }

    pub fn player_hit(&self) -> Result<JsValue, JsValue> {
        let hit = self.game.player_hit().map_err(js_err)?;
        to_js_value(&JsPlayerHit::from(hit))
    }

    pub fn player_stand(&self) -> Result<(), JsValue> {
        self.game.player_stand().map_err(js_err)
    }

    /// Deals one computer card for round `round_id`, as read from
    /// `round_id()` when the page started its timer. The page calls this
    /// every `step_interval_ms` until the returned `done` is true; once the
    /// round is replaced the call fails and deals nothing, so the timer can
    /// be cleared from the error path.
    pub fn computer_step(&self, round_id: u32) -> Result<JsValue, JsValue> {
        let step = self.game.computer_step_in(round_id).map_err(js_err)?;
        to_js_value(&JsComputerStep::from(step))
    }

    pub fn round_id(&self) -> u32 {
        self.game.round_id()
    }

    pub fn step_interval_ms(&self) -> u32 {
        self.game.options.step_interval.as_millis() as u32
    }

    pub fn banner_duration_ms(&self) -> u32 {
        self.game.options.banner_duration.as_millis() as u32
    }

    pub fn perfect_banner_duration_ms(&self) -> u32 {
        self.game.options.perfect_banner_duration.as_millis() as u32
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            phase: phase_to_str(self.game.phase()),
            round_id: self.game.round_id(),
            player_score: self.game.player_score(),
            computer_score: self.game.computer_score(),
            player_cards: cards_to_js(&self.game.cards(Side::Player)),
            computer_cards: cards_to_js(&self.game.cards(Side::Computer)),
            threshold: self.game.threshold(),
            result: self.game.result().map(JsRoundResult::from),
            cards_remaining: self.game.cards_remaining() as u32,
            controls_enabled: self.game.phase() == Phase::PlayerTurn,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    round_id: u32,
    player_score: u16,
    computer_score: u16,
    player_cards: Vec<JsCard>,
    computer_cards: Vec<JsCard>,
    threshold: Option<u16>,
    result: Option<JsRoundResult>,
    cards_remaining: u32,
    controls_enabled: bool,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
    code: String,
}

#[derive(Serialize)]
struct JsPlayerHit {
    card: JsCard,
    score: u16,
    phase: &'static str,
    perfect: bool,
}

impl From<PlayerHit> for JsPlayerHit {
    fn from(hit: PlayerHit) -> Self {
        Self {
            card: card_to_js(hit.card),
            score: hit.score,
            phase: phase_to_str(hit.phase),
            perfect: hit.score == twentyone::BUST_LIMIT,
        }
    }
}

#[derive(Serialize)]
struct JsComputerStep {
    card: JsCard,
    score: u16,
    done: bool,
    result: Option<JsRoundResult>,
}

impl From<ComputerStep> for JsComputerStep {
    fn from(step: ComputerStep) -> Self {
        Self {
            card: card_to_js(step.card),
            score: step.score,
            done: step.done,
            result: step.result.map(JsRoundResult::from),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    reason: &'static str,
    message: String,
    threshold: u16,
    computer_score: u16,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            reason: reason_to_str(result.reason),
            message: result.to_string(),
            threshold: result.threshold,
            computer_score: result.computer_score,
        }
    }
}

fn cards_to_js(cards: &[Card]) -> Vec<JsCard> {
    cards.iter().copied().map(card_to_js).collect()
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
        value: card.value(),
        code: card.code().to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::PlayerTurn => "PlayerTurn",
        Phase::ComputerTurn => "ComputerTurn",
        Phase::RoundOver => "RoundOver",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Tie => "Tie",
        Outcome::PlayerWins => "PlayerWins",
        Outcome::ComputerWins => "ComputerWins",
    }
}

fn reason_to_str(reason: Reason) -> &'static str {
    match reason {
        Reason::EqualScore => "EqualScore",
        Reason::PlayerBust => "PlayerBust",
        Reason::ComputerBust => "ComputerBust",
        Reason::HigherScore => "HigherScore",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
