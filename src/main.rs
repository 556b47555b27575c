mod config;
mod keyboard;
mod quiz;

use std::sync::Arc;

use config::Config;
use keyboard::{
    answer_keyboard, mode_prompt, quiz_choice_keyboard, quiz_keyboard, quiz_tag, NEXT_BUTTON,
    STOP_BUTTON,
};
use log::{debug, warn};
use quiz::presenter::{parse_policy, render_problem};
use quiz::Session;
use teloxide::{
    dispatching::dialogue::{serializer::Json, ErasedStorage, SqliteStorage, Storage},
    prelude::*,
};

type QuizDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    /// `last_generation` is the last problem generation sent to this chat,
    /// so a new session never reuses the stamp of an old answer button.
    ReceiveQuizChoice {
        last_generation: u64,
    },
    ReceiveMode {
        quiz: String,
        last_generation: u64,
    },
    Quiz {
        session: Session,
    },
}

type QuizStorage = std::sync::Arc<ErasedStorage<State>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Arc::new(Config::from_env()?);
    log::info!("Starting right-hand-rule quiz bot...");

    let bot = Bot::from_env();

    log::info!("Opening dialogue storage at {}", config.db_path);
    let storage: QuizStorage = SqliteStorage::open(&config.db_path, Json).await?.erase();

    Dispatcher::builder(
        bot,
        dptree::entry()
            .branch(
                Update::filter_message()
                    .enter_dialogue::<Message, ErasedStorage<State>, State>()
                    .branch(dptree::case![State::Start].endpoint(start))
                    .branch(
                        dptree::case![State::ReceiveQuizChoice { last_generation }]
                            .endpoint(receive_quiz_choice),
                    )
                    .branch(
                        dptree::case![State::ReceiveMode {
                            quiz,
                            last_generation
                        }]
                        .endpoint(receive_mode),
                    )
                    .branch(dptree::case![State::Quiz { session }].endpoint(quiz_step)),
            )
            .branch(
                Update::filter_callback_query()
                    .enter_dialogue::<CallbackQuery, ErasedStorage<State>, State>()
                    .branch(dptree::case![State::Quiz { session }].endpoint(receive_answer))
                    .branch(dptree::endpoint(answer_outside_quiz)),
            ),
    )
    .dependencies(dptree::deps![storage, config])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;

    Ok(())
}

const GREETING_TEXT: &str = "Hi! Let's practise the magnetic right-hand rules. Which rule do you want to test?";
async fn start(bot: Bot, dialogue: QuizDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT)
        .reply_markup(quiz_choice_keyboard())
        .await?;

    dialogue
        .update(State::ReceiveQuizChoice { last_generation: 0 })
        .await?;
    Ok(())
}

async fn receive_quiz_choice(
    bot: Bot,
    dialogue: QuizDialogue,
    last_generation: u64,
    msg: Message,
) -> HandlerResult {
    let Some(tag) = msg.text().and_then(quiz_tag) else {
        bot.send_message(msg.chat.id, "Please pick one of the options")
            .reply_markup(quiz_choice_keyboard())
            .await?;
        return Ok(());
    };

    let (prompt, keyboard) = mode_prompt(tag)?;
    bot.send_message(msg.chat.id, prompt)
        .reply_markup(keyboard)
        .await?;

    dialogue
        .update(State::ReceiveMode {
            quiz: tag.to_string(),
            last_generation,
        })
        .await?;
    Ok(())
}

async fn receive_mode(
    config: Arc<Config>,
    bot: Bot,
    dialogue: QuizDialogue,
    (quiz, last_generation): (String, u64),
    msg: Message,
) -> HandlerResult {
    let started = Session::start(
        &quiz,
        msg.text().unwrap_or_default(),
        last_generation,
        &mut rand::thread_rng(),
    );
    let mut session = match started {
        Ok(session) => session,
        Err(err) => {
            debug!("Rejected mode for {} quiz: {}", quiz, err);
            let (_, keyboard) = mode_prompt(&quiz)?;
            bot.send_message(msg.chat.id, "Please pick one of the options")
                .reply_markup(keyboard)
                .await?;
            return Ok(());
        }
    };
    if let Ok(policy) = parse_policy(session.variant(), &config.default_policy) {
        if policy != session.policy() {
            session.set_unknown_policy(policy, &mut rand::thread_rng());
        }
    }

    bot.send_message(
        msg.chat.id,
        "Pick the quantity to look for below, or tap Next for another problem.",
    )
    .reply_markup(quiz_keyboard(&session))
    .await?;
    send_problem(&bot, msg.chat.id, &session).await?;

    dialogue.update(State::Quiz { session }).await?;
    Ok(())
}

async fn quiz_step(
    bot: Bot,
    dialogue: QuizDialogue,
    session: Session,
    msg: Message,
) -> HandlerResult {
    let mut session = session;
    match msg.text() {
        Some(STOP_BUTTON) => {
            bot.send_message(msg.chat.id, "Which rule do you want to test next?")
                .reply_markup(quiz_choice_keyboard())
                .await?;
            dialogue
                .update(State::ReceiveQuizChoice {
                    last_generation: session.generation(),
                })
                .await?;
            return Ok(());
        }
        Some(NEXT_BUTTON) => {
            session.request_next(&mut rand::thread_rng());
        }
        Some(text) => match parse_policy(session.variant(), text) {
            Ok(policy) => {
                session.set_unknown_policy(policy, &mut rand::thread_rng());
            }
            Err(err) => {
                debug!("{}", err);
                bot.send_message(msg.chat.id, "Tap an answer button, Next, or a quantity to look for")
                    .await?;
                return Ok(());
            }
        },
        None => {
            bot.send_message(msg.chat.id, "Tap an answer button, Next, or a quantity to look for")
                .await?;
            return Ok(());
        }
    }

    send_problem(&bot, msg.chat.id, &session).await?;
    dialogue.update(State::Quiz { session }).await?;
    Ok(())
}

async fn send_problem(bot: &Bot, chat_id: ChatId, session: &Session) -> HandlerResult {
    bot.send_message(chat_id, render_problem(session.problem()))
        .reply_markup(answer_keyboard(session))
        .await?;
    Ok(())
}

async fn receive_answer(
    bot: Bot,
    dialogue: QuizDialogue,
    session: Session,
    q: CallbackQuery,
) -> HandlerResult {
    let decoded = keyboard::decode_answer(q.data.as_deref().unwrap_or_default());
    let (generation, direction) = match decoded {
        Ok(answer) => answer,
        Err(err) => {
            warn!("Undecodable callback data {:?}: {}", q.data, err);
            bot.answer_callback_query(q.id).await?;
            return Ok(());
        }
    };

    match session.submit_answer(generation, Some(direction)) {
        Some(verdict) => {
            bot.answer_callback_query(q.id).text(verdict.to_string()).await?;
            bot.send_message(dialogue.chat_id(), format!("{}: {}", direction, verdict))
                .await?;
        }
        None => {
            bot.answer_callback_query(q.id)
                .text("That problem has been replaced")
                .await?;
        }
    }
    Ok(())
}

async fn answer_outside_quiz(bot: Bot, q: CallbackQuery) -> HandlerResult {
    bot.answer_callback_query(q.id)
        .text("Start a quiz first")
        .await?;
    Ok(())
}
