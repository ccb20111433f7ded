mod app;
use flashcard_quiz::*;

use app::QuizApp;
use source::load_configured_deck;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let deck = load_configured_deck(&config.quiz);

    log::info!("Loaded deck '{}' ({} cards)", deck.name, deck.len());

    let engine = match QuizEngine::with_max_attempts(deck, config.quiz.max_attempts) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Cannot start quiz: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.display.window_width, config.display.window_height]),
        ..Default::default()
    };
    let feedback_duration = config.display.feedback_duration();
    eframe::run_native(
        "Flashcards Quiz",
        options,
        Box::new(move |_cc| Ok(Box::new(QuizApp::new(engine, feedback_duration)))),
    )
}
