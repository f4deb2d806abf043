//! Protocol conversion helpers for the presentation state
//!
//! These functions convert a `Playthrough` into wire format types. They live
//! in the API layer so the domain never sees `tribunal_shared`.

use tribunal_domain::{Playthrough, Role, RoleBadge, Score, Stage, COURTROOM_STEPS};
use tribunal_shared::{
    BadgeData, CourtHeader, OptionData, QuizQuestionData, ScoreData, StageView,
};

/// Build the view of the screen the playthrough is on.
pub fn stage_view(playthrough: &Playthrough) -> StageView {
    let content = playthrough.content();
    match playthrough.stage() {
        Stage::Intro => StageView::Intro {
            intro: content.intro().clone(),
        },
        Stage::CharacterSelect => StageView::CharacterSelect {
            roles: content.profiles().cloned().collect(),
            can_go_back: playthrough.can_go_back(),
        },
        Stage::CharacterIntro => StageView::CharacterIntro {
            profile: content.display_profile(playthrough.role()).clone(),
        },
        Stage::Prosecution => StageView::Prosecution {
            header: court_header(playthrough),
            advocate: content.advocate(Role::Prosecution).cloned(),
        },
        Stage::Defense => StageView::Defense {
            header: court_header(playthrough),
            advocate: content.advocate(Role::Defense).cloned(),
        },
        Stage::Witnesses => StageView::Witnesses {
            header: court_header(playthrough),
            witnesses: content.witnesses().to_vec(),
        },
        Stage::Quiz => quiz_or_verdict(playthrough, quiz_question(playthrough)),
        Stage::Verdict => verdict_view(playthrough),
    }
}

/// The quiz screen, or the verdict when no question is open.
///
/// Validated packs always have a question under the cursor, so the verdict
/// branch only shows up with a broken record.
fn quiz_or_verdict(playthrough: &Playthrough, question: Option<QuizQuestionData>) -> StageView {
    match question {
        Some(question) => StageView::Quiz {
            header: court_header(playthrough),
            question,
        },
        None => {
            tracing::warn!(
                stage = %Stage::Quiz,
                "Quiz stage without an open question; showing the verdict"
            );
            verdict_view(playthrough)
        }
    }
}

fn verdict_view(playthrough: &Playthrough) -> StageView {
    StageView::Verdict {
        header: court_header(playthrough),
        score: score_data(playthrough.score()),
        ruling: playthrough.content().ruling().clone(),
    }
}

fn court_header(playthrough: &Playthrough) -> CourtHeader {
    CourtHeader {
        step: playthrough.stage().courtroom_step().unwrap_or_default(),
        total_steps: COURTROOM_STEPS,
        progress: playthrough
            .progress()
            .map(|progress| progress.value())
            .unwrap_or_default(),
        badge: badge_data(playthrough.badge()),
    }
}

fn badge_data(badge: RoleBadge) -> BadgeData {
    BadgeData {
        role: badge.role,
        label: badge.label,
        icon: badge.icon,
    }
}

fn quiz_question(playthrough: &Playthrough) -> Option<QuizQuestionData> {
    let question = playthrough.current_question()?;
    let quiz = playthrough.quiz();
    let marks = playthrough.option_marks();

    let options = question
        .options()
        .iter()
        .zip(marks)
        .enumerate()
        .map(|(index, (text, mark))| OptionData {
            index,
            text: text.clone(),
            mark,
        })
        .collect();

    Some(QuizQuestionData {
        number: quiz.current_question_index() + 1,
        total: quiz.question_count(),
        question_id: question.id(),
        prompt: question.prompt().to_string(),
        options,
        selected_answer: quiz.selected_answer(),
        explanation_visible: quiz.explanation_visible(),
        explanation: quiz
            .explanation_visible()
            .then(|| question.explanation().to_string()),
        is_correct: playthrough.selected_is_correct(),
        can_advance: playthrough.can_advance(),
        is_last: quiz.is_last_question(),
    })
}

fn score_data(score: Score) -> ScoreData {
    ScoreData {
        correct: score.correct(),
        total: score.total(),
        percentage: score.percentage(),
        rounded_percent: score.rounded_percent(),
    }
}
