//! Plain-text rendering of stage views.

use std::fmt::Write as _;

use tribunal_domain::{OptionMark, Role, RoleProfile};
use tribunal_shared::{ActionResponse, CourtHeader, QuizQuestionData, StageView};

/// Text for one response: the rejection notice (if any) and then the screen.
pub fn render_response(response: &ActionResponse) -> String {
    let mut out = String::new();
    if let Some(reason) = &response.rejection {
        let _ = writeln!(out, "! {reason}");
        out.push('\n');
    }
    out.push_str(&render_view(&response.view));
    out
}

pub fn render_view(view: &StageView) -> String {
    let mut out = String::new();
    if let Some(header) = view.header() {
        render_header(&mut out, header);
    }

    match view {
        StageView::Intro { intro } => {
            let _ = writeln!(out, "== {} ==", intro.title);
            let _ = writeln!(out, "{}", intro.summary);
            out.push('\n');
            let _ = writeln!(out, "[advance] choose a character");
        }
        StageView::CharacterSelect { roles, can_go_back } => {
            let _ = writeln!(out, "== Choose your role ==");
            for profile in roles {
                render_role_card(&mut out, profile);
            }
            out.push('\n');
            let _ = writeln!(out, "[select <role>] play as that role");
            if *can_go_back {
                let _ = writeln!(out, "[back] return to the intro");
            }
        }
        StageView::CharacterIntro { profile } => {
            let _ = writeln!(out, "== You play as: {} ==", profile.label);
            if !profile.quote.is_empty() {
                let _ = writeln!(out, "\"{}\"", profile.quote);
            }
            for fact in &profile.facts {
                let _ = writeln!(out, "  * {fact}");
            }
            if let Some(highlight) = &profile.highlight {
                let _ = writeln!(out, "  >> {}", highlight.text);
            }
            out.push('\n');
            let _ = writeln!(out, "[advance] open the hearing");
        }
        StageView::Prosecution { advocate, .. } | StageView::Defense { advocate, .. } => {
            if let Some(advocate) = advocate {
                let _ = writeln!(out, "== {} ==", advocate.name);
                let _ = writeln!(out, "\"{}\"", advocate.stance);
                for (number, argument) in advocate.arguments.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {argument}", number + 1);
                }
            }
            out.push('\n');
            let _ = writeln!(out, "[advance] continue");
        }
        StageView::Witnesses { witnesses, .. } => {
            let _ = writeln!(out, "== Witnesses ==");
            for witness in witnesses {
                let _ = writeln!(out, "- {} ({})", witness.name, side_label(witness.side));
                let _ = writeln!(out, "  \"{}\"", witness.testimony);
            }
            out.push('\n');
            let _ = writeln!(out, "[advance] start the knowledge check");
        }
        StageView::Quiz { question, .. } => render_question(&mut out, question),
        StageView::Verdict { score, ruling, .. } => {
            let _ = writeln!(out, "== Verdict ==");
            let _ = writeln!(
                out,
                "Your score: {} of {} ({}%)",
                score.correct, score.total, score.rounded_percent
            );
            out.push('\n');
            let _ = writeln!(out, "{}", ruling.headline);
            let _ = writeln!(out, "{}", ruling.summary);
            let _ = writeln!(out, "Harmful: {}", ruling.harmful_effects.join(", "));
            let _ = writeln!(out, "Useful: {}", ruling.useful_effects.join(", "));
            let _ = writeln!(out, "{}", ruling.conclusion);
            out.push('\n');
            let _ = writeln!(out, "[restart] play again");
        }
    }
    out
}

fn render_header(out: &mut String, header: &CourtHeader) {
    let _ = writeln!(
        out,
        "Step {} of {} | {:.0}% | You are: {}",
        header.step, header.total_steps, header.progress, header.badge.label
    );
    out.push('\n');
}

fn render_role_card(out: &mut String, profile: &RoleProfile) {
    let _ = writeln!(out, "- {} [{}]: {}", profile.label, profile.role, profile.tagline);
    if !profile.description.is_empty() {
        let _ = writeln!(out, "  {}", profile.description);
    }
    if !profile.mission.is_empty() {
        let _ = writeln!(out, "  Mission: {}", profile.mission);
    }
}

fn render_question(out: &mut String, question: &QuizQuestionData) {
    let _ = writeln!(
        out,
        "== Question {} of {} ==",
        question.number, question.total
    );
    let _ = writeln!(out, "{}", question.prompt);
    for option in &question.options {
        let _ = writeln!(
            out,
            "  {} {}. {}",
            mark_symbol(option.mark),
            option.index + 1,
            option.text
        );
    }

    if let Some(correct) = question.is_correct {
        out.push('\n');
        let _ = writeln!(out, "{}", if correct { "Correct!" } else { "Incorrect" });
    }
    if let Some(explanation) = &question.explanation {
        let _ = writeln!(out, "{explanation}");
    }

    out.push('\n');
    if question.can_advance {
        let next = if question.is_last {
            "deliver the verdict"
        } else {
            "next question"
        };
        let _ = writeln!(out, "[advance] {next}");
    } else {
        let _ = writeln!(out, "[answer <n>] choose an option");
    }
}

fn mark_symbol(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Selectable => "( )",
        OptionMark::Correct => "(+)",
        OptionMark::Incorrect => "(x)",
        OptionMark::Neutral => "   ",
    }
}

fn side_label(side: Role) -> &'static str {
    match side {
        Role::Prosecution => "for the prosecution",
        Role::Defense => "for the defense",
        Role::Judge => "for the court",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribunal_domain::IntroCard;
    use tribunal_shared::{BadgeData, OptionData, ScoreData};

    fn header(step: u8, progress: f64) -> CourtHeader {
        CourtHeader {
            step,
            total_steps: 5,
            progress,
            badge: BadgeData {
                role: Role::Judge,
                label: "Judge".to_string(),
                icon: "Scale".to_string(),
            },
        }
    }

    fn question(selected: Option<usize>, is_last: bool) -> QuizQuestionData {
        let answered = selected.is_some();
        let mark = |index: usize| match (answered, selected) {
            (false, _) => OptionMark::Selectable,
            (true, _) if index == 1 => OptionMark::Correct,
            (true, Some(chosen)) if chosen == index => OptionMark::Incorrect,
            _ => OptionMark::Neutral,
        };
        QuizQuestionData {
            number: 2,
            total: 4,
            question_id: 2,
            prompt: "Which friction is smallest?".to_string(),
            options: ["static", "rolling"]
                .iter()
                .enumerate()
                .map(|(index, text)| OptionData {
                    index,
                    text: text.to_string(),
                    mark: mark(index),
                })
                .collect(),
            selected_answer: selected,
            explanation_visible: answered,
            explanation: answered.then(|| "Rolling wins.".to_string()),
            is_correct: selected.map(|chosen| chosen == 1),
            can_advance: answered,
            is_last,
        }
    }

    #[test]
    fn rejection_is_printed_above_the_screen() {
        let response = ActionResponse::rejected(
            "select a role to continue",
            StageView::Intro {
                intro: IntroCard {
                    title: "Trial".to_string(),
                    summary: "Friction stands accused".to_string(),
                },
            },
        );

        let text = render_response(&response);

        assert!(text.starts_with("! select a role to continue\n"));
        assert!(text.contains("== Trial =="));
    }

    #[test]
    fn courtroom_screens_show_step_progress_and_badge() {
        let view = StageView::Witnesses {
            header: header(3, 60.0),
            witnesses: Vec::new(),
        };

        let text = render_view(&view);

        assert!(text.starts_with("Step 3 of 5 | 60% | You are: Judge\n"));
    }

    #[test]
    fn unanswered_question_asks_for_an_answer() {
        let view = StageView::Quiz {
            header: header(4, 65.0),
            question: question(None, false),
        };

        let text = render_view(&view);

        assert!(text.contains("( ) 1. static"));
        assert!(text.contains("( ) 2. rolling"));
        assert!(text.contains("[answer <n>]"));
        assert!(!text.contains("Correct!"));
    }

    #[test]
    fn wrong_answer_shows_marks_and_explanation() {
        let view = StageView::Quiz {
            header: header(4, 65.0),
            question: question(Some(0), false),
        };

        let text = render_view(&view);

        assert!(text.contains("(x) 1. static"));
        assert!(text.contains("(+) 2. rolling"));
        assert!(text.contains("Incorrect"));
        assert!(text.contains("Rolling wins."));
        assert!(text.contains("[advance] next question"));
    }

    #[test]
    fn last_question_offers_the_verdict() {
        let view = StageView::Quiz {
            header: header(4, 75.0),
            question: question(Some(1), true),
        };

        let text = render_view(&view);

        assert!(text.contains("Correct!"));
        assert!(text.contains("[advance] deliver the verdict"));
    }

    #[test]
    fn verdict_shows_rounded_percent() {
        let view = StageView::Verdict {
            header: header(5, 100.0),
            score: ScoreData {
                correct: 3,
                total: 4,
                percentage: 75.0,
                rounded_percent: 75,
            },
            ruling: tribunal_domain::Ruling {
                headline: "Ambivalent".to_string(),
                summary: String::new(),
                harmful_effects: vec!["wear".to_string()],
                useful_effects: vec!["walking".to_string(), "brakes".to_string()],
                conclusion: String::new(),
            },
        };

        let text = render_view(&view);

        assert!(text.contains("Your score: 3 of 4 (75%)"));
        assert!(text.contains("Useful: walking, brakes"));
        assert!(text.contains("[restart] play again"));
    }
}
