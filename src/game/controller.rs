// Top-level drill controller
//
// Owns every piece of round state and drives the peripherals from a single
// loop. Each call to `step` is one loop tick: it runs the current state's
// work, applies the pure state transition, redraws the input screen when
// it is showing, and sleeps the tick interval.

use glam::{IVec2, UVec2};
use log::{debug, info};

use crate::core::math::approach;
use crate::engine::display::{text_width, GLYPH_HEIGHT};
use crate::engine::game_loop::Pacer;
use crate::engine::indicator::{breath_level, Channel};
use crate::engine::input::{interpret, AnswerBuffer, KeyAction};
use crate::engine::Peripherals;

use super::config::DrillConfig;
use super::evaluator::{evaluate, Tally, Verdict};
use super::feedback::FeedbackSequencer;
use super::question::{Problem, ProblemSource};
use super::state::{Event, GameState};

pub const HEADING: &str = "Solve it:";
pub const HINTS: &str = "A:OK *:Clear";
pub const EMPTY_PROMPT: &str = "Type an answer";

/// Placeholder drawn where the answer goes before anything is typed
const ANSWER_PLACEHOLDER: &str = "?";

/// Pixel row of the hint / prompt line
const BOTTOM_ROW: i32 = 56;

/// The drill's state machine and everything it owns
pub struct GameController {
    config: DrillConfig,
    problems: Box<dyn ProblemSource>,
    devices: Peripherals,
    pacer: Pacer,
    state: GameState,
    problem: Problem,
    buffer: AnswerBuffer,
    /// Animated row of the question text
    offset: f32,
    /// Ticks left for the "type an answer" prompt
    prompt_ticks_left: u32,
    round: u64,
    tally: Tally,
}

impl GameController {
    pub fn new(config: DrillConfig, problems: Box<dyn ProblemSource>, devices: Peripherals) -> Self {
        Self {
            pacer: Pacer::new(config.tick_interval),
            offset: config.idle_offset,
            config,
            problems,
            devices,
            state: GameState::default(),
            problem: Problem::default(),
            buffer: AnswerBuffer::new(),
            prompt_ticks_left: 0,
            round: 0,
            tally: Tally::default(),
        }
    }

    /// Play the power-on blink and jingle
    pub fn power_on(&mut self) {
        info!(
            "Powering on, loop tick {} ms",
            self.pacer.tick_interval().as_millis()
        );
        FeedbackSequencer::new(&mut self.devices).run_power_on();
    }

    /// Run the drill forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Run one loop tick and return the resulting state
    pub fn step(&mut self) -> GameState {
        let event = match self.state {
            GameState::GeneratingQuestion => self.start_round(),
            GameState::AwaitingInput => self.collect_input(),
            GameState::CheckingAnswer => self.check_answer(),
        };

        let next = self.state.next(event);
        if next != self.state {
            debug!("{:?} -> {:?}", self.state, next);
            self.state = next;
        }

        if self.state.shows_question() {
            self.render_question();
        }

        self.pacer.end_tick(&mut *self.devices.clock);
        self.state
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn buffer(&self) -> &AnswerBuffer {
        &self.buffer
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_ticks_left > 0
    }

    fn start_round(&mut self) -> Event {
        self.problem = self.problems.next_problem();
        self.buffer.clear();
        self.offset = self.config.idle_offset;
        self.prompt_ticks_left = 0;
        self.round += 1;

        info!("Round {}: {} = ?", self.round, self.problem);
        Event::QuestionReady
    }

    fn collect_input(&mut self) -> Event {
        let level = breath_level(self.pacer.ticks());
        self.devices.indicator.set_brightness(Channel::Blue, level);
        self.prompt_ticks_left = self.prompt_ticks_left.saturating_sub(1);

        let event = match self.devices.keypad.scan() {
            Some(key) => {
                let action = interpret(key, &self.buffer);
                self.apply(action);
                Event::Key(action)
            }
            None => Event::NoInput,
        };

        let target = if self.buffer.is_empty() {
            self.config.idle_offset
        } else {
            self.config.typing_offset
        };
        self.offset = approach(self.offset, target, self.config.offset_step);

        event
    }

    fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Digit(digit) => {
                self.buffer.append(digit);
                self.prompt_ticks_left = 0;
            }
            KeyAction::Clear => self.buffer.clear(),
            KeyAction::SubmitEmpty => self.prompt_ticks_left = self.config.prompt_ticks,
            KeyAction::Submit | KeyAction::Ignored => {}
        }

        if let Some(tone) = action.confirmation_tone() {
            self.devices.buzzer.play_tone(tone);
        }

        if action.is_recognized() {
            debug!("{:?}, answer now \"{}\"", action, self.buffer);
            self.devices.clock.sleep(self.config.debounce);
        }
    }

    fn check_answer(&mut self) -> Event {
        let submitted = self.buffer.as_integer();
        let verdict = evaluate(&self.problem, submitted);
        self.tally.record(verdict);

        info!(
            "Round {}: {} = {} is {:?} ({}/{} correct)",
            self.round,
            self.problem,
            submitted,
            verdict,
            self.tally.correct,
            self.tally.answered
        );

        let mut feedback = FeedbackSequencer::new(&mut self.devices);
        match verdict {
            Verdict::Correct => feedback.run_correct(),
            Verdict::Incorrect => feedback.run_incorrect(self.problem.correct_answer),
        }

        Event::FeedbackDone
    }

    fn render_question(&mut self) {
        let y = self.offset.round() as i32;
        let prompt = self.problem.prompt();
        let answer_x = text_width(&prompt);

        let display = &mut self.devices.display;
        display.clear();
        display.draw_text_centered(HEADING, 0);
        display.draw_text(IVec2::new(0, y), &prompt);

        if self.buffer.is_empty() {
            display.draw_text(IVec2::new(answer_x, y), ANSWER_PLACEHOLDER);
        } else {
            let answer = self.buffer.as_str();
            display.draw_text(IVec2::new(answer_x, y), answer);
            display.draw_rect(
                IVec2::new(answer_x - 1, y - 1),
                UVec2::new(text_width(answer) as u32 + 2, GLYPH_HEIGHT as u32 + 2),
            );
        }

        if self.prompt_ticks_left > 0 {
            display.draw_text_centered(EMPTY_PROMPT, BOTTOM_ROW);
        } else if !self.buffer.is_empty() {
            display.draw_text_centered(HINTS, BOTTOM_ROW);
        }

        display.present();
    }
}
