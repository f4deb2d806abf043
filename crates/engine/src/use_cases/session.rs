//! Presentation session - the one live playthrough and its front door.
//!
//! Every player action goes through [`PresentationSession::dispatch`], which
//! applies it to the playthrough, logs the outcome and answers with the view
//! of the resulting screen.

use std::sync::Arc;

use tribunal_domain::{
    ContentPack, Playthrough, PlaythroughAction, PlaythroughId, PlaythroughUpdate,
};
use tribunal_shared::{ActionResponse, PlayerAction, StageView};

use crate::api::stage_protocol::stage_view;

/// Rejection reason for actions this engine does not understand.
pub const UNSUPPORTED_ACTION: &str = "unsupported action";

pub struct PresentationSession {
    id: PlaythroughId,
    playthrough: Playthrough,
}

impl PresentationSession {
    pub fn new(content: Arc<ContentPack>) -> Self {
        let id = PlaythroughId::new();
        tracing::info!(
            playthrough_id = %id,
            question_count = content.question_count(),
            "Playthrough started"
        );
        Self {
            id,
            playthrough: Playthrough::new(content),
        }
    }

    /// Identifier of the current playthrough; a restart issues a new one.
    pub fn id(&self) -> PlaythroughId {
        self.id
    }

    pub fn playthrough(&self) -> &Playthrough {
        &self.playthrough
    }

    /// View of the current screen.
    pub fn view(&self) -> StageView {
        stage_view(&self.playthrough)
    }

    /// Apply one player action and describe the resulting screen.
    pub fn dispatch(&mut self, action: PlayerAction) -> ActionResponse {
        tracing::debug!(
            playthrough_id = %self.id,
            stage = %self.playthrough.stage(),
            action = action.kind(),
            "Dispatching player action"
        );

        let Some(intent) = to_intent(action) else {
            tracing::debug!(
                playthrough_id = %self.id,
                reason = UNSUPPORTED_ACTION,
                "Player action rejected"
            );
            return ActionResponse::rejected(UNSUPPORTED_ACTION, self.view());
        };

        let update = self.playthrough.apply(intent);
        self.record(&update);

        match update.rejection() {
            Some(rejection) => ActionResponse::rejected(rejection.to_string(), self.view()),
            None => ActionResponse::accepted(self.view()),
        }
    }

    fn record(&mut self, update: &PlaythroughUpdate) {
        match update {
            PlaythroughUpdate::Rejected(rejection) => {
                tracing::debug!(
                    playthrough_id = %self.id,
                    stage = %self.playthrough.stage(),
                    reason = %rejection,
                    "Player action rejected"
                );
            }
            PlaythroughUpdate::Restarted { from } => {
                let previous = self.id;
                self.id = PlaythroughId::new();
                tracing::info!(
                    previous_playthrough_id = %previous,
                    playthrough_id = %self.id,
                    from = %from,
                    "Playthrough restarted"
                );
            }
            PlaythroughUpdate::StageChanged { from, to } => {
                tracing::info!(
                    playthrough_id = %self.id,
                    from = %from,
                    to = %to,
                    "Stage changed"
                );
            }
            PlaythroughUpdate::RoleSelected { role } => {
                tracing::info!(playthrough_id = %self.id, role = %role, "Role selected");
            }
            PlaythroughUpdate::QuizStarted { question_count } => {
                tracing::info!(
                    playthrough_id = %self.id,
                    question_count = question_count,
                    "Quiz started"
                );
            }
            PlaythroughUpdate::AnswerRecorded {
                question_index,
                option,
                correct,
            } => {
                tracing::info!(
                    playthrough_id = %self.id,
                    question_index = question_index,
                    option = option,
                    correct = correct,
                    "Answer recorded"
                );
            }
            PlaythroughUpdate::AnswerAlreadyRecorded {
                question_index,
                option,
            } => {
                tracing::debug!(
                    playthrough_id = %self.id,
                    question_index = question_index,
                    option = option,
                    "Answer already recorded"
                );
            }
            PlaythroughUpdate::QuestionAdvanced { from, to } => {
                tracing::info!(
                    playthrough_id = %self.id,
                    from = from,
                    to = to,
                    "Question advanced"
                );
            }
            PlaythroughUpdate::QuizCompleted { score } => {
                tracing::info!(
                    playthrough_id = %self.id,
                    correct = score.correct(),
                    total = score.total(),
                    percent = score.rounded_percent(),
                    "Verdict reached"
                );
            }
        }
    }
}

fn to_intent(action: PlayerAction) -> Option<PlaythroughAction> {
    match action {
        PlayerAction::Advance => Some(PlaythroughAction::Advance),
        PlayerAction::SelectRole { role } => Some(PlaythroughAction::SelectRole(role)),
        PlayerAction::SelectAnswer { option } => Some(PlaythroughAction::SelectAnswer(option)),
        PlayerAction::GoBack => Some(PlaythroughAction::GoBack),
        PlayerAction::Restart => Some(PlaythroughAction::Restart),
        PlayerAction::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::content_sources::BuiltinContent;
    use crate::infrastructure::ports::ContentSource;
    use tribunal_domain::{Role, Stage};

    fn session() -> PresentationSession {
        let pack = BuiltinContent::new().load().expect("built-in pack");
        PresentationSession::new(Arc::new(pack))
    }

    fn dispatch_all(session: &mut PresentationSession, actions: &[PlayerAction]) {
        for action in actions {
            let response = session.dispatch(*action);
            assert!(response.accepted, "{action:?}: {:?}", response.rejection);
        }
    }

    fn to_quiz(session: &mut PresentationSession) {
        dispatch_all(
            session,
            &[
                PlayerAction::Advance,
                PlayerAction::SelectRole {
                    role: Role::Prosecution,
                },
                PlayerAction::Advance,
                PlayerAction::Advance,
                PlayerAction::Advance,
                PlayerAction::Advance,
            ],
        );
    }

    mod dispatch {
        use super::*;

        #[test]
        fn accepted_action_returns_new_view() {
            let mut session = session();

            let response = session.dispatch(PlayerAction::Advance);

            assert!(response.accepted);
            assert_eq!(response.rejection, None);
            assert_eq!(response.view.stage_name(), "character-select");
        }

        #[test]
        fn rejected_action_keeps_state_and_explains() {
            let mut session = session();
            session.dispatch(PlayerAction::Advance);
            let before = session.playthrough().clone();

            let response = session.dispatch(PlayerAction::Advance);

            assert!(!response.accepted);
            assert_eq!(
                response.rejection.as_deref(),
                Some("select a role to continue")
            );
            assert_eq!(session.playthrough(), &before);
            assert_eq!(response.view, session.view());
        }

        #[test]
        fn unknown_action_is_rejected_without_change() {
            let mut session = session();
            let before = session.playthrough().clone();

            let response = session.dispatch(PlayerAction::Unknown);

            assert!(!response.accepted);
            assert_eq!(response.rejection.as_deref(), Some(UNSUPPORTED_ACTION));
            assert_eq!(session.playthrough(), &before);
        }

        #[test]
        fn go_back_returns_to_intro() {
            let mut session = session();
            dispatch_all(&mut session, &[PlayerAction::Advance, PlayerAction::GoBack]);

            assert_eq!(session.playthrough().stage(), Stage::Intro);
        }

        #[test]
        fn repeating_the_recorded_answer_is_accepted() {
            let mut session = session();
            to_quiz(&mut session);
            dispatch_all(&mut session, &[PlayerAction::SelectAnswer { option: 1 }]);

            let response = session.dispatch(PlayerAction::SelectAnswer { option: 1 });

            assert!(response.accepted);
        }

        #[test]
        fn changing_a_recorded_answer_is_rejected() {
            let mut session = session();
            to_quiz(&mut session);
            dispatch_all(&mut session, &[PlayerAction::SelectAnswer { option: 1 }]);

            let response = session.dispatch(PlayerAction::SelectAnswer { option: 0 });

            assert!(!response.accepted);
            assert_eq!(session.playthrough().quiz().answers()[0], Some(1));
        }
    }

    mod full_walkthrough {
        use super::*;

        #[test]
        fn perfect_run_reaches_a_full_score() {
            let mut session = session();
            to_quiz(&mut session);
            for option in [1, 2, 3, 2] {
                dispatch_all(
                    &mut session,
                    &[PlayerAction::SelectAnswer { option }, PlayerAction::Advance],
                );
            }

            match session.view() {
                StageView::Verdict { score, .. } => {
                    assert_eq!(score.correct, 4);
                    assert_eq!(score.rounded_percent, 100);
                }
                other => panic!("expected verdict, got {other:?}"),
            }
        }

        #[test]
        fn advance_on_verdict_is_rejected() {
            let mut session = session();
            to_quiz(&mut session);
            for _ in 0..4 {
                dispatch_all(
                    &mut session,
                    &[
                        PlayerAction::SelectAnswer { option: 0 },
                        PlayerAction::Advance,
                    ],
                );
            }

            let response = session.dispatch(PlayerAction::Advance);

            assert!(!response.accepted);
            assert_eq!(session.playthrough().stage(), Stage::Verdict);
        }
    }

    mod restart {
        use super::*;

        #[test]
        fn restart_issues_a_new_playthrough_id() {
            let mut session = session();
            to_quiz(&mut session);
            let first = session.id();

            let response = session.dispatch(PlayerAction::Restart);

            assert!(response.accepted);
            assert_ne!(session.id(), first);
            assert_eq!(response.view.stage_name(), "intro");
            assert_eq!(session.playthrough().role(), None);
            assert!(session
                .playthrough()
                .quiz()
                .answers()
                .iter()
                .all(Option::is_none));
        }

        #[test]
        fn rejected_actions_keep_the_playthrough_id() {
            let mut session = session();
            let id = session.id();

            session.dispatch(PlayerAction::SelectAnswer { option: 0 });

            assert_eq!(session.id(), id);
        }
    }
}
