// Drill state machine

use crate::engine::input::KeyAction;

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Drawing a new problem
    #[default]
    GeneratingQuestion,
    /// Collecting key presses
    AwaitingInput,
    /// Judging the answer and playing feedback
    CheckingAnswer,
}

/// What happened during one loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A new problem is on screen
    QuestionReady,
    /// A key was pressed and interpreted
    Key(KeyAction),
    /// The scan reported nothing
    NoInput,
    /// The feedback sequence has finished
    FeedbackDone,
}

impl GameState {
    /// State after `event`. Events that do not apply leave the state unchanged.
    pub fn next(self, event: Event) -> Self {
        match (self, event) {
            (Self::GeneratingQuestion, Event::QuestionReady) => Self::AwaitingInput,
            (Self::AwaitingInput, Event::Key(KeyAction::Submit)) => Self::CheckingAnswer,
            (Self::CheckingAnswer, Event::FeedbackDone) => Self::GeneratingQuestion,
            (state, _) => state,
        }
    }

    /// Whether the input screen is drawn in this state
    pub fn shows_question(&self) -> bool {
        matches!(self, Self::AwaitingInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(GameState::default(), GameState::GeneratingQuestion);
    }

    #[test]
    fn test_full_round_transitions() {
        let state = GameState::default();
        let state = state.next(Event::QuestionReady);
        assert_eq!(state, GameState::AwaitingInput);
        let state = state.next(Event::Key(KeyAction::Submit));
        assert_eq!(state, GameState::CheckingAnswer);
        let state = state.next(Event::FeedbackDone);
        assert_eq!(state, GameState::GeneratingQuestion);
    }

    #[test]
    fn test_submit_empty_stays_awaiting() {
        assert_eq!(
            GameState::AwaitingInput.next(Event::Key(KeyAction::SubmitEmpty)),
            GameState::AwaitingInput
        );
    }

    #[test]
    fn test_other_keys_stay_awaiting() {
        for action in [
            KeyAction::Digit(4),
            KeyAction::Clear,
            KeyAction::Ignored,
        ] {
            assert_eq!(
                GameState::AwaitingInput.next(Event::Key(action)),
                GameState::AwaitingInput
            );
        }
        assert_eq!(
            GameState::AwaitingInput.next(Event::NoInput),
            GameState::AwaitingInput
        );
    }

    #[test]
    fn test_mismatched_events_ignored() {
        assert_eq!(
            GameState::GeneratingQuestion.next(Event::Key(KeyAction::Submit)),
            GameState::GeneratingQuestion
        );
        assert_eq!(
            GameState::CheckingAnswer.next(Event::QuestionReady),
            GameState::CheckingAnswer
        );
        assert_eq!(
            GameState::AwaitingInput.next(Event::FeedbackDone),
            GameState::AwaitingInput
        );
    }

    #[test]
    fn test_only_awaiting_input_shows_question() {
        assert!(GameState::AwaitingInput.shows_question());
        assert!(!GameState::GeneratingQuestion.shows_question());
        assert!(!GameState::CheckingAnswer.shows_question());
    }
}
