use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

use crate::quiz::presenter::{policy_label, policy_options, render_choices};
use crate::quiz::{Direction, QuizError, Session, Variant, FIELD_QUIZ, FORCE_QUIZ};

pub const FORCE_QUIZ_BUTTON: &str = "Magnetic force";
pub const FIELD_QUIZ_BUTTON: &str = "Magnetic field";
pub const NEXT_BUTTON: &str = "Next";
pub const STOP_BUTTON: &str = "/stop";

const ANSWERS_PER_ROW: usize = 2;

/// Callback data for an answer button: `"{generation}:{label}"`.
pub fn encode_answer(generation: u64, direction: Direction) -> String {
    format!("{}:{}", generation, direction.label())
}

pub fn decode_answer(data: &str) -> Result<(u64, Direction), QuizError> {
    let malformed = || QuizError::MalformedAnswer(data.to_string());
    let (generation, label) = data.split_once(':').ok_or_else(malformed)?;
    let generation = generation.parse().map_err(|_| malformed())?;
    Ok((generation, label.parse::<Direction>()?))
}

pub fn quiz_tag(button: &str) -> Option<&'static str> {
    match button {
        FORCE_QUIZ_BUTTON => Some(FORCE_QUIZ),
        FIELD_QUIZ_BUTTON => Some(FIELD_QUIZ),
        _ => None,
    }
}

pub fn quiz_choice_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(FORCE_QUIZ_BUTTON),
        KeyboardButton::new(FIELD_QUIZ_BUTTON),
    ]])
}

/// Prompt and buttons for picking the mode of `quiz`.
pub fn mode_prompt(quiz: &str) -> Result<(&'static str, KeyboardMarkup), QuizError> {
    let modes = Variant::mode_tags(quiz)?;
    let prompt = match quiz.trim() {
        FORCE_QUIZ => "Moving particles or currents?",
        _ => "A straight current or a current loop?",
    };
    let keyboard = KeyboardMarkup::new(vec![modes
        .iter()
        .map(|&mode| KeyboardButton::new(mode))
        .collect::<Vec<_>>()]);
    Ok((prompt, keyboard))
}

/// Policy menu on the first row, "Next" and "/stop" below.
pub fn quiz_keyboard(session: &Session) -> KeyboardMarkup {
    let variant = session.variant();
    let policies = policy_options(variant)
        .into_iter()
        .map(|policy| KeyboardButton::new(policy_label(variant, policy)))
        .collect::<Vec<_>>();
    KeyboardMarkup::new(vec![
        policies,
        vec![KeyboardButton::new(NEXT_BUTTON), KeyboardButton::new(STOP_BUTTON)],
    ])
}

pub fn answer_keyboard(session: &Session) -> InlineKeyboardMarkup {
    let generation = session.generation();
    let rows = render_choices(session.problem())
        .chunks(ANSWERS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|&d| {
                    InlineKeyboardButton::callback(
                        format!("{} {}", d.symbol(), d.label()),
                        encode_answer(generation, d),
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}
