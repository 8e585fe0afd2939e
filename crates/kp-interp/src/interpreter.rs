//! The single entry point: raw line in, structured interpretation out.
//!
//! Pipeline, in strict order: `!!` history replay, the fixed shorthand map,
//! numbered-action lookup for bare integers, the strategy parser, and
//! finally the intent classification gate for anything still unrecognized.
//! Nothing here mutates world state, and no failure corrupts the history
//! ring or the action list.

use kp_world::WorldView;

use crate::actions::{ActionContext, ActionKind};
use crate::command::Command;
use crate::history::CommandHistory;
use crate::intent::{Intent, IntentClassifier, classify_gated, contextual_examples};
use crate::parser::{Parsed, closest_commands, parse};

/// What one line of player input turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    /// A command ready for its handler.
    Command(Command),
    /// A short response that consumes no game time ("take what?").
    Message(String),
    /// Input nobody understood, with contextual example commands.
    Unknown {
        /// The didn't-understand response.
        message: String,
        /// Up to four deduplicated example commands.
        suggestions: Vec<String>,
    },
}

/// The free-text command interpreter.
///
/// Owns the command history ring and the numbered action context; world
/// state is passed in per call and only ever read.
#[derive(Default)]
pub struct Interpreter {
    history: CommandHistory,
    actions: ActionContext,
    classifier: Option<Box<dyn IntentClassifier>>,
}

impl Interpreter {
    /// Create an interpreter with no classifier configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an external intent classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn IntentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Interpret one raw line of player input.
    pub fn interpret(&mut self, raw: &str, view: &dyn WorldView) -> Interpretation {
        let line = raw.trim();

        if line == "!!" {
            return match self.history.repeat_last() {
                Some(previous) => {
                    let previous = previous.to_string();
                    self.interpret_line(&previous, view)
                }
                None => Interpretation::Message("Nothing to repeat yet.".to_string()),
            };
        }

        self.interpret_line(line, view)
    }

    fn interpret_line(&mut self, line: &str, view: &dyn WorldView) -> Interpretation {
        if let Some(command) = shorthand(line) {
            return Interpretation::Command(command);
        }

        if let Ok(n) = line.parse::<usize>() {
            if let Some(action) = self.actions.resolve(n) {
                return Interpretation::Command(numbered_command(action.kind, &action.target));
            }
            // Stale or out-of-range numbers fall through to normal parsing.
        }

        match parse(line) {
            Parsed::Command(command) => Interpretation::Command(command),
            Parsed::Incomplete { prompt, .. } => Interpretation::Message(prompt.to_string()),
            Parsed::Unknown { head, .. } => self.escalate(line, &head, view),
        }
    }

    /// Unrecognized command: try the classification gate, else give up
    /// with suggestions.
    fn escalate(&self, line: &str, head: &str, view: &dyn WorldView) -> Interpretation {
        if let Some(classifier) = &self.classifier {
            let classification = classify_gated(classifier.as_ref(), line, view);
            if classification.accepted() {
                let target = classification.target;
                let command = match classification.intent {
                    Intent::Move => Command::MoveTo { target },
                    Intent::Take => Command::Take { target },
                    Intent::Examine => Command::Examine { target },
                    Intent::Talk => Command::TalkTo { target },
                    Intent::Unknown => unreachable!("accepted() excludes unknown"),
                };
                return Interpretation::Command(command);
            }
        }

        let mut message = "I didn't understand that.".to_string();
        let near = closest_commands(head, 3);
        if !near.is_empty() {
            message.push_str(&format!(" Did you mean: {}?", near.join(", ")));
        }
        Interpretation::Unknown {
            message,
            suggestions: contextual_examples(view),
        }
    }

    /// Rebuild the numbered action context from a freshly rendered view.
    pub fn rebuild_actions(&mut self, view: &dyn WorldView) {
        self.actions.rebuild(view);
    }

    /// The current numbered action context.
    pub fn actions(&self) -> &ActionContext {
        &self.actions
    }

    /// Record an executed command in the history ring.
    pub fn record_history(&mut self, command: &Command) {
        self.history.record(command);
    }

    /// The most recent recorded canonical command, if any.
    pub fn repeat_last(&self) -> Option<&str> {
        self.history.repeat_last()
    }

    /// The command history ring.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}

/// Fixed single-letter and shorthand map, checked before any parsing.
fn shorthand(line: &str) -> Option<Command> {
    let target = |s: &str| Command::MoveTo {
        target: s.to_string(),
    };
    match line.to_lowercase().as_str() {
        "" | "l" | "look" => Some(Command::Look),
        "n" => Some(target("north")),
        "s" => Some(target("south")),
        "e" => Some(target("east")),
        "w" => Some(target("west")),
        "i" | "inv" => Some(Command::Inventory),
        _ => None,
    }
}

fn numbered_command(kind: ActionKind, target: &str) -> Command {
    let target = target.to_string();
    match kind {
        ActionKind::LookAt => Command::Examine { target },
        ActionKind::TalkTo => Command::TalkTo { target },
        ActionKind::Select => Command::SelectItem { target },
        ActionKind::Move => Command::MoveTo { target },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClassifierError, ClassifierResult};
    use crate::intent::{ClassifierContext, RawClassification};
    use kp_world::{ExitView, ItemView, NpcView, StaticWorld};

    fn street_scene() -> StaticWorld {
        StaticWorld::new()
            .with_npc(NpcView::new("Sonia"))
            .with_location_item(ItemView::new("loaf of bread"))
            .with_exit(ExitView::new("haymarket", "the bustling Haymarket square"))
    }

    fn move_to(target: &str) -> Interpretation {
        Interpretation::Command(Command::MoveTo {
            target: target.to_string(),
        })
    }

    #[test]
    fn single_letters_bypass_the_parser() {
        let mut interp = Interpreter::new();
        let view = street_scene();
        assert_eq!(interp.interpret("n", &view), move_to("north"));
        assert_eq!(interp.interpret("s", &view), move_to("south"));
        assert_eq!(interp.interpret("e", &view), move_to("east"));
        assert_eq!(interp.interpret("w", &view), move_to("west"));
        assert_eq!(
            interp.interpret("l", &view),
            Interpretation::Command(Command::Look)
        );
        assert_eq!(
            interp.interpret("inv", &view),
            Interpretation::Command(Command::Inventory)
        );
    }

    #[test]
    fn bare_integer_hits_the_action_context() {
        let mut interp = Interpreter::new();
        let view = street_scene();
        interp.rebuild_actions(&view);

        // Sonia contributes entries 1 (look at) and 2 (talk to).
        assert_eq!(
            interp.interpret("2", &view),
            Interpretation::Command(Command::TalkTo {
                target: "Sonia".to_string()
            })
        );
        assert_eq!(
            interp.interpret("3", &view),
            Interpretation::Command(Command::SelectItem {
                target: "loaf of bread".to_string()
            })
        );
        assert_eq!(interp.interpret("4", &view), move_to("haymarket"));
    }

    #[test]
    fn out_of_range_integer_falls_through() {
        let mut interp = Interpreter::new();
        let view = street_scene();
        interp.rebuild_actions(&view);

        match interp.interpret("99", &view) {
            Interpretation::Unknown { .. } => {}
            other => panic!("expected unknown, got {other:?}"),
        }
    }

    #[test]
    fn repeat_last_replays_canonical_text() {
        let mut interp = Interpreter::new();
        let view = street_scene();

        let taken = Command::Take {
            target: "loaf".to_string(),
        };
        interp.record_history(&taken);
        assert_eq!(interp.interpret("!!", &view), Interpretation::Command(taken));
    }

    #[test]
    fn repeat_with_empty_history() {
        let mut interp = Interpreter::new();
        assert_eq!(
            interp.interpret("!!", &street_scene()),
            Interpretation::Message("Nothing to repeat yet.".to_string())
        );
    }

    #[test]
    fn meta_commands_never_reach_the_ring() {
        let mut interp = Interpreter::new();
        interp.record_history(&Command::History);
        interp.record_history(&Command::SelectItem {
            target: "loaf".to_string(),
        });
        assert!(interp.repeat_last().is_none());
    }

    #[test]
    fn incomplete_verbs_answer_without_the_classifier() {
        let mut interp = Interpreter::new();
        assert_eq!(
            interp.interpret("take", &street_scene()),
            Interpretation::Message("take what?".to_string())
        );
    }

    struct Fixed(RawClassification);

    impl IntentClassifier for Fixed {
        fn classify(
            &self,
            _input: &str,
            _context: &ClassifierContext,
        ) -> ClassifierResult<RawClassification> {
            Ok(self.0.clone())
        }
    }

    struct Down;

    impl IntentClassifier for Down {
        fn classify(
            &self,
            _input: &str,
            _context: &ClassifierContext,
        ) -> ClassifierResult<RawClassification> {
            Err(ClassifierError::Timeout(800))
        }
    }

    fn fixed(intent: &str, target: &str, confidence: f64) -> Box<Fixed> {
        Box::new(Fixed(RawClassification {
            intent: intent.to_string(),
            target: Some(target.to_string()),
            confidence: Some(confidence),
        }))
    }

    #[test]
    fn confident_classification_is_honored() {
        let mut interp = Interpreter::new().with_classifier(fixed("take", "loaf of bread", 0.70));
        assert_eq!(
            interp.interpret("hungry for some bread", &street_scene()),
            Interpretation::Command(Command::Take {
                target: "loaf of bread".to_string()
            })
        );
    }

    #[test]
    fn low_confidence_is_rejected() {
        let mut interp = Interpreter::new().with_classifier(fixed("take", "loaf of bread", 0.69));
        match interp.interpret("hungry for some bread", &street_scene()) {
            Interpretation::Unknown { suggestions, .. } => {
                assert_eq!(
                    suggestions,
                    ["look", "talk to Sonia", "take loaf of bread", "go to haymarket"]
                );
            }
            other => panic!("expected unknown, got {other:?}"),
        }
    }

    #[test]
    fn classifier_failure_degrades_quietly() {
        let mut interp = Interpreter::new().with_classifier(Box::new(Down));
        match interp.interpret("mumble something", &street_scene()) {
            Interpretation::Unknown { .. } => {}
            other => panic!("expected unknown, got {other:?}"),
        }
    }

    #[test]
    fn no_classifier_still_answers() {
        let mut interp = Interpreter::new();
        match interp.interpret("mumble something", &street_scene()) {
            Interpretation::Unknown { message, .. } => {
                assert!(message.contains("didn't understand"));
            }
            other => panic!("expected unknown, got {other:?}"),
        }
    }

    #[test]
    fn typo_gets_a_did_you_mean() {
        let mut interp = Interpreter::new();
        match interp.interpret("tkae bread", &street_scene()) {
            Interpretation::Unknown { message, .. } => {
                assert!(message.contains("take"), "message was {message:?}");
            }
            other => panic!("expected unknown, got {other:?}"),
        }
    }

    #[test]
    fn unsafe_input_never_calls_out() {
        struct Panics;
        impl IntentClassifier for Panics {
            fn classify(
                &self,
                _input: &str,
                _context: &ClassifierContext,
            ) -> ClassifierResult<RawClassification> {
                panic!("classifier must not see unsafe input");
            }
        }
        let mut interp = Interpreter::new().with_classifier(Box::new(Panics));
        match interp.interpret("wish to hurt myself", &street_scene()) {
            Interpretation::Unknown { .. } => {}
            other => panic!("expected unknown, got {other:?}"),
        }
    }

    #[test]
    fn empty_line_is_a_look() {
        let mut interp = Interpreter::new();
        assert_eq!(
            interp.interpret("   ", &street_scene()),
            Interpretation::Command(Command::Look)
        );
    }

    #[test]
    fn full_line_still_parses_normally() {
        let mut interp = Interpreter::new();
        assert_eq!(
            interp.interpret("talk to sonia", &street_scene()),
            Interpretation::Command(Command::TalkTo {
                target: "sonia".to_string()
            })
        );
    }
}
