//! The game session.
//!
//! `GameSession` owns everything a running game needs: board, ledger,
//! lanes, turn context, the step scheduler and the output queue. Hosts
//! feed it input events and frame ticks; it never blocks and never reads
//! a clock of its own.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::event::{InputEvent, InputOutcome, SessionEvent};
use super::state::{GameResult, TurnState};
use super::turn::{DiceRoll, TurnContext, TurnRecord};
use crate::action::{ActionChoice, ActionPolicy, ActionPrompt, SkipPolicy};
use crate::board::{generate, Board};
use crate::core::{Actor, GameError, GameRng, GameRngState, SessionConfig, SetupForm};
use crate::inventory::Ledger;
use crate::lane::{LaneView, Lanes};
use crate::schedule::Scheduler;

/// Display name of the computer opponent.
pub const BOT_NAME: &str = "Bot";

/// Deferred continuation of the turn machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Bot's turn: roll without waiting for input.
    BeginRoll,
    /// Show these faces (a flicker frame or the final roll).
    ShowFaces(DiceRoll),
    /// Dice animation done.
    FinishRoll,
    /// Lane slide done: highlight and prompt.
    SettleLane,
}

/// State built when the game starts.
#[derive(Clone, Debug)]
struct Table {
    board: Board,
    ledger: Ledger,
    lanes: Lanes,
}

/// Serializable view of a session, for debugging and tests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: TurnState,
    pub turn: TurnContext,
    pub status: String,
    pub board: Option<Board>,
    pub ledger: Option<Ledger>,
    pub lanes: Option<Lanes>,
    pub prompt: Option<ActionPrompt>,
    pub result: Option<GameResult>,
    pub history: Vector<TurnRecord>,
    pub rng: GameRngState,
}

/// A two-lane game between the human and the bot.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use lane_monopoly::core::{Actor, AnimationTimings, SessionConfig};
/// use lane_monopoly::session::{GameSession, InputEvent, TurnState};
///
/// let config = SessionConfig::new(7)
///     .with_timings(AnimationTimings::instant())
///     .skip_setup();
/// let mut session = GameSession::new(config).unwrap();
/// assert_eq!(session.state(), TurnState::PlayGame);
///
/// session.handle_input(InputEvent::Confirm).unwrap();
/// session.tick(Duration::ZERO).unwrap();
///
/// // The human landed somewhere and must answer the prompt.
/// assert_eq!(session.prompt().map(|p| p.actor), Some(Actor::Human));
/// ```
pub struct GameSession {
    config: SessionConfig,
    state: TurnState,
    turn: TurnContext,
    rng: GameRng,
    flicker_rng: GameRng,
    table: Option<Table>,
    prompt: Option<ActionPrompt>,
    result: Option<GameResult>,
    status: String,
    history: Vector<TurnRecord>,
    scheduler: Scheduler<Step>,
    events: Vec<SessionEvent>,
    policy: Box<dyn ActionPolicy>,
    quit_requested: bool,
}

impl GameSession {
    /// Create a session whose bot always skips.
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        Self::with_policy(config, Box::new(SkipPolicy))
    }

    /// Create a session with a custom bot policy.
    ///
    /// Starts in `Idle` unless `config.skip_setup` is set, in which case
    /// the game starts right away.
    pub fn with_policy(
        config: SessionConfig,
        policy: Box<dyn ActionPolicy>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        log::info!("session created (seed {})", config.seed);

        let rng = GameRng::new(config.seed);
        let flicker_rng = rng.for_context("flicker");
        let skip_setup = config.skip_setup;

        let mut session = Self {
            config,
            state: TurnState::Idle,
            turn: TurnContext::default(),
            rng,
            flicker_rng,
            table: None,
            prompt: None,
            result: None,
            status: String::new(),
            history: Vector::new(),
            scheduler: Scheduler::new(),
            events: Vec::new(),
            policy,
            quit_requested: false,
        };

        if skip_setup {
            session.start()?;
        }
        Ok(session)
    }

    // === Setup ===

    /// Edit the setup fields. Only while idle.
    pub fn setup_form(&mut self) -> Result<SetupForm<'_>, GameError> {
        if self.state != TurnState::Idle {
            return Err(GameError::NotIdle(self.state));
        }
        Ok(SetupForm::new(&mut self.config))
    }

    /// Build the board and inventories and begin the human's first turn.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state != TurnState::Idle {
            return Err(GameError::NotIdle(self.state));
        }
        if let Err(err) = self.config.validate() {
            log::warn!("cannot start: {}", err);
            return Err(err.into());
        }

        let board = generate(self.config.tile_count, &mut self.rng);
        let ledger = Ledger::new(
            &mut self.rng,
            self.config.starting_money,
            self.config.turn_bonus,
        );
        let lanes = Lanes::new(self.config.visible_slots, board.len());
        log::info!(
            "game started for {} on {} tiles",
            self.config.player_name,
            board.len()
        );

        self.table = Some(Table {
            board,
            ledger,
            lanes,
        });
        for actor in Actor::ALL {
            self.events.push(SessionEvent::InventoryChanged(actor));
        }
        self.enter_play_game()
    }

    // === Input and time ===

    /// Feed one input event.
    ///
    /// Input that makes no sense in the current state (confirm during a
    /// roll, navigation during a slide) is ignored, not an error.
    pub fn handle_input(&mut self, input: InputEvent) -> Result<InputOutcome, GameError> {
        match input {
            InputEvent::Escape => {
                log::info!("quit requested");
                self.quit_requested = true;
                self.events.push(SessionEvent::QuitRequested);
                Ok(InputOutcome::Accepted)
            }
            _ if self.state.is_terminal() => Err(GameError::GameFinished),
            InputEvent::Confirm => self.confirm(),
            InputEvent::Navigate { lane, delta } => self.navigate(lane, delta),
            InputEvent::Choose(choice) => self.choose(choice),
        }
    }

    /// Advance the clock by `dt` and run every step that came due,
    /// including steps those steps schedule with no delay.
    pub fn tick(&mut self, dt: Duration) -> Result<(), GameError> {
        if self.state.is_terminal() {
            return Ok(());
        }
        self.scheduler.advance(dt);
        while let Some(step) = self.scheduler.pop_due() {
            log::debug!("step {:?} at {:?}", step, self.scheduler.now());
            self.run_step(step)?;
        }
        Ok(())
    }

    /// Change an actor's gold. The hook for economic effects.
    pub fn adjust_money(&mut self, actor: Actor, delta: i64) -> Result<(), GameError> {
        self.table_mut()?.ledger.adjust_money(actor, delta);
        self.events.push(SessionEvent::InventoryChanged(actor));
        Ok(())
    }

    /// Take all output events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn turn(&self) -> &TurnContext {
        &self.turn
    }

    /// Current status line.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Last rolled dice (both show one before the first roll).
    #[must_use]
    pub fn dice(&self) -> DiceRoll {
        self.turn.dice
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.table.as_ref().map(|t| &t.board)
    }

    #[must_use]
    pub fn ledger(&self) -> Option<&Ledger> {
        self.table.as_ref().map(|t| &t.ledger)
    }

    #[must_use]
    pub fn lane_view(&self, actor: Actor) -> Option<LaneView> {
        self.table.as_ref().map(|t| t.lanes.view(actor))
    }

    /// Unwrapped lane position of an actor.
    #[must_use]
    pub fn lane_position(&self, actor: Actor) -> Option<i64> {
        self.table.as_ref().map(|t| t.lanes.lane(actor).position())
    }

    /// Gold and power panel text for an actor.
    #[must_use]
    pub fn inventory_summary(&self, actor: Actor) -> Option<String> {
        self.ledger().map(|l| l.summary(actor))
    }

    #[must_use]
    pub fn prompt(&self) -> Option<&ActionPrompt> {
        self.prompt.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Completed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// True while a dice roll or lane slide is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Time until the next scheduled step, if any.
    #[must_use]
    pub fn next_step_in(&self) -> Option<Duration> {
        self.scheduler.next_due_in()
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    #[must_use]
    pub fn display_name(&self, actor: Actor) -> &str {
        match actor {
            Actor::Human => &self.config.player_name,
            Actor::Bot => BOT_NAME,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            turn: self.turn,
            status: self.status.clone(),
            board: self.table.as_ref().map(|t| t.board.clone()),
            ledger: self.table.as_ref().map(|t| t.ledger.clone()),
            lanes: self.table.as_ref().map(|t| t.lanes.clone()),
            prompt: self.prompt.clone(),
            result: self.result,
            history: self.history.clone(),
            rng: self.rng.state(),
        }
    }

    // === Input handlers ===

    fn confirm(&mut self) -> Result<InputOutcome, GameError> {
        match self.state {
            TurnState::Idle => {
                self.start()?;
                Ok(InputOutcome::Accepted)
            }
            TurnState::PlayGame if !self.turn.actor.is_bot() && self.scheduler.is_idle() => {
                self.begin_roll()?;
                Ok(InputOutcome::Accepted)
            }
            state => {
                log::debug!("confirm ignored in {:?}", state);
                Ok(InputOutcome::Ignored)
            }
        }
    }

    fn navigate(&mut self, lane: Actor, delta: i64) -> Result<InputOutcome, GameError> {
        if self.state != TurnState::PlayGame || !self.scheduler.is_idle() || self.prompt.is_some() {
            return Ok(InputOutcome::Ignored);
        }
        let view = self.table_mut()?.lanes.nudge(lane, delta);
        log::debug!("{} lane nudged to {}", lane, view.highlighted_index);
        self.events.push(SessionEvent::LaneSettled { lane, view });
        Ok(InputOutcome::Accepted)
    }

    fn choose(&mut self, choice: ActionChoice) -> Result<InputOutcome, GameError> {
        match &self.prompt {
            None => Err(GameError::NoPendingPrompt),
            Some(prompt) if prompt.actor.is_bot() => Ok(InputOutcome::Ignored),
            Some(_) => {
                self.resolve_prompt(choice)?;
                Ok(InputOutcome::Accepted)
            }
        }
    }

    // === Turn machine ===

    fn run_step(&mut self, step: Step) -> Result<(), GameError> {
        match step {
            Step::BeginRoll => self.begin_roll(),
            Step::ShowFaces(faces) => {
                self.events.push(SessionEvent::DiceFaces(faces));
                Ok(())
            }
            Step::FinishRoll => self.enter_move_player(),
            Step::SettleLane => self.settle_lane(),
        }
    }

    fn transition(&mut self, next: TurnState) -> Result<(), GameError> {
        let from = self.state;
        self.state = from.transition_to(next)?;
        log::info!("{:?} -> {:?} ({})", from, next, self.turn.actor);
        self.events.push(SessionEvent::StateChanged { from, to: next });
        Ok(())
    }

    fn set_status(&mut self, message: String) {
        log::info!("{} says: {}", self.turn.actor, message);
        self.status.clone_from(&message);
        self.events.push(SessionEvent::StatusChanged(message));
    }

    /// Victory check, turn-start bonus, announcement.
    fn enter_play_game(&mut self) -> Result<(), GameError> {
        self.transition(TurnState::PlayGame)?;
        let actor = self.turn.actor;

        let losers = self.table()?.ledger.losers();
        if let Some(result) = GameResult::from_losers(&losers) {
            return self.enter_game_over(result);
        }

        if let Some(bonus) = self.table_mut()?.ledger.apply_turn_start_bonus(actor) {
            log::info!("{} receives {} bonus gold", actor, bonus);
            self.events.push(SessionEvent::InventoryChanged(actor));
        }

        self.set_status(turn_start_message(actor).to_string());
        if actor.is_bot() {
            self.scheduler
                .schedule(self.config.timings.bot_think, Step::BeginRoll);
        }
        Ok(())
    }

    /// Draw the final dice now and schedule the flicker frames before them.
    fn begin_roll(&mut self) -> Result<(), GameError> {
        self.transition(TurnState::RollDice)?;

        let roll = DiceRoll::roll(&mut self.rng);
        self.turn.dice = roll;
        log::info!(
            "{} rolled {} and {}",
            self.turn.actor,
            roll.first,
            roll.second
        );

        let timings = &self.config.timings;
        for frame in 0..timings.flicker_frames {
            let faces = DiceRoll::roll(&mut self.flicker_rng);
            self.scheduler
                .schedule(timings.flicker_interval * frame, Step::ShowFaces(faces));
        }
        let settle = timings.roll_duration();
        self.scheduler.schedule(settle, Step::ShowFaces(roll));
        self.scheduler.schedule(settle, Step::FinishRoll);
        Ok(())
    }

    /// Slide the acting lane by the dice sum.
    fn enter_move_player(&mut self) -> Result<(), GameError> {
        self.transition(TurnState::MovePlayer)?;
        let actor = self.turn.actor;
        let roll = self.turn.dice;
        self.set_status(dice_result_message(actor, roll));

        let slide_time = self.config.timings.lane_slide;
        let slide = self
            .table_mut()?
            .lanes
            .advance(actor, i64::from(roll.sum()), slide_time);
        self.events.push(SessionEvent::LaneSlideStarted(slide));
        self.scheduler.schedule(slide_time, Step::SettleLane);
        Ok(())
    }

    /// Highlight the landing tile and open the prompt. The bot answers at once.
    fn settle_lane(&mut self) -> Result<(), GameError> {
        let actor = self.turn.actor;
        let table = self.table.as_ref().ok_or(GameError::NotStarted)?;
        let view = table.lanes.view(actor);
        let tile = *table.board.tile_at(table.lanes.lane(actor).position());
        let prompt = ActionPrompt::new(actor, view.highlighted_index, tile);
        let bot_choice = if actor.is_bot() {
            Some(self.policy.choose(&prompt, &table.ledger))
        } else {
            None
        };

        log::info!("{} landed on {} (tile {})", actor, tile, view.highlighted_index);
        self.events.push(SessionEvent::LaneSettled { lane: actor, view });
        self.events.push(SessionEvent::PromptOpened(prompt.clone()));
        self.prompt = Some(prompt);

        match bot_choice {
            Some(choice) => self.resolve_prompt(choice),
            None => Ok(()),
        }
    }

    /// Close the prompt, record the move and hand over the turn.
    fn resolve_prompt(&mut self, choice: ActionChoice) -> Result<(), GameError> {
        let prompt = self.prompt.as_mut().ok_or(GameError::NoPendingPrompt)?;
        prompt.resolve(choice)?;
        let record = TurnRecord {
            turn: self.turn.turn,
            actor: prompt.actor,
            dice: self.turn.dice,
            tile_index: prompt.tile_index,
            choice,
        };
        self.prompt = None;

        self.events.push(SessionEvent::PromptClosed {
            actor: record.actor,
            choice,
        });
        self.history.push_back(record);
        self.turn.pass_turn();
        self.enter_play_game()
    }

    fn enter_game_over(&mut self, result: GameResult) -> Result<(), GameError> {
        self.transition(TurnState::GameOver)?;
        self.scheduler.clear();
        self.prompt = None;
        self.result = Some(result);

        let message = match result {
            GameResult::Winner(winner) => format!("{} wins!", self.display_name(winner)),
            GameResult::Draw => "Draw!".to_string(),
        };
        self.set_status(message);
        self.events.push(SessionEvent::GameOver(result));
        Ok(())
    }

    fn table(&self) -> Result<&Table, GameError> {
        self.table.as_ref().ok_or(GameError::NotStarted)
    }

    fn table_mut(&mut self) -> Result<&mut Table, GameError> {
        self.table.as_mut().ok_or(GameError::NotStarted)
    }
}

fn turn_start_message(actor: Actor) -> &'static str {
    match actor {
        Actor::Human => "Press enter to play...",
        Actor::Bot => "Now it's my turn! let me think...",
    }
}

fn dice_result_message(actor: Actor, roll: DiceRoll) -> String {
    match actor {
        Actor::Human => format!(
            "you rolled {} and {}, that makes {}",
            roll.first,
            roll.second,
            roll.sum()
        ),
        Actor::Bot => format!(
            "What? Only {} and {}? You cheater..",
            roll.first, roll.second
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::FixedPolicy;
    use crate::core::AnimationTimings;

    fn instant_config(seed: u64) -> SessionConfig {
        SessionConfig::new(seed).with_timings(AnimationTimings::instant())
    }

    /// Human rolls and lands; returns with the human prompt open.
    fn play_human_roll(session: &mut GameSession) {
        assert_eq!(
            session.handle_input(InputEvent::Confirm).unwrap(),
            InputOutcome::Accepted
        );
        session.tick(Duration::ZERO).unwrap();
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(SessionConfig::new(1)).unwrap();
        assert_eq!(session.state(), TurnState::Idle);
        assert!(session.board().is_none());
        assert!(session.lane_view(Actor::Human).is_none());
        assert_eq!(session.dice(), DiceRoll::new(1, 1));
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = SessionConfig::new(1).with_tile_count(1);
        assert!(matches!(
            GameSession::new(config),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_confirm_in_idle_starts() {
        let mut session = GameSession::new(instant_config(1)).unwrap();
        session.handle_input(InputEvent::Confirm).unwrap();

        assert_eq!(session.state(), TurnState::PlayGame);
        assert_eq!(session.turn().actor, Actor::Human);
        assert_eq!(session.status(), "Press enter to play...");
        assert_eq!(session.board().map(Board::len), Some(20));
    }

    #[test]
    fn test_start_twice_fails() {
        let mut session = GameSession::new(instant_config(1).skip_setup()).unwrap();
        assert_eq!(
            session.start(),
            Err(GameError::NotIdle(TurnState::PlayGame))
        );
        assert!(session.setup_form().is_err());
    }

    #[test]
    fn test_setup_form_edits_apply_at_start() {
        let mut session = GameSession::new(instant_config(1)).unwrap();
        {
            let mut form = session.setup_form().unwrap();
            assert!(form.set_tile_count_text("9"));
            assert!(!form.set_tile_count_text("nine"));
            form.set_player_name_text("");
        }
        session.start().unwrap();

        assert_eq!(session.board().map(Board::len), Some(9));
        assert_eq!(session.display_name(Actor::Human), "Player1");
    }

    #[test]
    fn test_start_rejects_board_smaller_than_window() {
        let mut session = GameSession::new(instant_config(1)).unwrap();
        session.setup_form().unwrap().set_tile_count_text("1");

        assert!(matches!(session.start(), Err(GameError::InvalidConfig(_))));
        assert_eq!(session.state(), TurnState::Idle);
    }

    #[test]
    fn test_human_turn_flow() {
        let mut session = GameSession::new(instant_config(3).skip_setup()).unwrap();
        play_human_roll(&mut session);

        assert_eq!(session.state(), TurnState::MovePlayer);
        let roll = session.dice();
        assert_eq!(session.lane_position(Actor::Human), Some(i64::from(roll.sum())));
        assert_eq!(session.lane_position(Actor::Bot), Some(0));
        assert!(session.status().starts_with("you rolled"));

        let prompt = session.prompt().cloned().unwrap();
        assert_eq!(prompt.actor, Actor::Human);
        assert_eq!(
            Some(prompt.tile_index),
            session.lane_view(Actor::Human).map(|v| v.highlighted_index)
        );
    }

    #[test]
    fn test_choice_hands_turn_to_bot_and_back() {
        let mut session = GameSession::new(instant_config(3).skip_setup()).unwrap();
        play_human_roll(&mut session);

        session
            .handle_input(InputEvent::Choose(ActionChoice::Buy))
            .unwrap();
        assert_eq!(session.state(), TurnState::PlayGame);
        assert_eq!(session.turn().actor, Actor::Bot);
        assert_eq!(session.turn().turn, 2);
        assert_eq!(session.status(), "Now it's my turn! let me think...");

        // Bot plays its whole turn on the next tick.
        session.tick(Duration::ZERO).unwrap();
        assert_eq!(session.state(), TurnState::PlayGame);
        assert_eq!(session.turn().actor, Actor::Human);
        assert_eq!(session.turn().turn, 3);

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].actor, Actor::Human);
        assert_eq!(history[0].choice, ActionChoice::Buy);
        assert_eq!(history[1].actor, Actor::Bot);
        assert_eq!(history[1].choice, ActionChoice::Skip);
    }

    #[test]
    fn test_bot_policy_is_used() {
        let mut session = GameSession::with_policy(
            instant_config(3).skip_setup(),
            Box::new(FixedPolicy(ActionChoice::Auction)),
        )
        .unwrap();
        play_human_roll(&mut session);
        session
            .handle_input(InputEvent::Choose(ActionChoice::Skip))
            .unwrap();
        session.tick(Duration::ZERO).unwrap();

        assert_eq!(session.history()[1].choice, ActionChoice::Auction);
    }

    #[test]
    fn test_confirm_ignored_while_rolling() {
        let config = SessionConfig::new(5).skip_setup();
        let mut session = GameSession::new(config).unwrap();

        session.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(session.state(), TurnState::RollDice);
        assert!(session.is_animating());
        assert_eq!(
            session.handle_input(InputEvent::Confirm).unwrap(),
            InputOutcome::Ignored
        );
    }

    #[test]
    fn test_choose_without_prompt() {
        let mut session = GameSession::new(instant_config(5).skip_setup()).unwrap();
        assert_eq!(
            session.handle_input(InputEvent::Choose(ActionChoice::Buy)),
            Err(GameError::NoPendingPrompt)
        );
    }

    #[test]
    fn test_bonus_applied_at_turn_start() {
        let session = GameSession::new(instant_config(8).skip_setup()).unwrap();
        let ledger = session.ledger().unwrap();
        let expected = match ledger.power(Actor::Human) {
            crate::inventory::Power::Bonus => 130,
            crate::inventory::Power::CheaperUpgrades => 100,
        };
        assert_eq!(ledger.money(Actor::Human), expected);
        assert_eq!(ledger.money(Actor::Bot), 100);
    }

    #[test]
    fn test_broke_human_loses_before_rolling() {
        let mut session = GameSession::new(instant_config(3).skip_setup()).unwrap();
        play_human_roll(&mut session);
        session.adjust_money(Actor::Human, -1_000).unwrap();
        session
            .handle_input(InputEvent::Choose(ActionChoice::Skip))
            .unwrap();

        assert_eq!(session.state(), TurnState::GameOver);
        assert_eq!(session.result(), Some(GameResult::Winner(Actor::Bot)));
        assert_eq!(session.status(), "Bot wins!");
        assert!(!session.is_animating());
    }

    #[test]
    fn test_both_broke_is_a_draw() {
        let config = instant_config(3).with_starting_money(0).skip_setup();
        let session = GameSession::new(config).unwrap();

        assert_eq!(session.state(), TurnState::GameOver);
        assert_eq!(session.result(), Some(GameResult::Draw));
        assert_eq!(session.status(), "Draw!");
    }

    #[test]
    fn test_game_over_is_final() {
        let config = instant_config(3).with_starting_money(0).skip_setup();
        let mut session = GameSession::new(config).unwrap();
        let before = session.snapshot();

        assert_eq!(
            session.handle_input(InputEvent::Confirm),
            Err(GameError::GameFinished)
        );
        session.tick(Duration::from_secs(10)).unwrap();
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_escape_sets_quit_flag() {
        let mut session = GameSession::new(SessionConfig::new(1)).unwrap();
        session.handle_input(InputEvent::Escape).unwrap();
        assert!(session.quit_requested());
        assert_eq!(session.drain_events(), vec![SessionEvent::QuitRequested]);
    }

    #[test]
    fn test_messages() {
        let roll = DiceRoll::new(3, 4);
        assert_eq!(
            dice_result_message(Actor::Human, roll),
            "you rolled 3 and 4, that makes 7"
        );
        assert_eq!(
            dice_result_message(Actor::Bot, roll),
            "What? Only 3 and 4? You cheater.."
        );
    }
}
