//! Main application UI.
//! Renders the quiz, owns the typed answer and shows feedback in a snackbar.

use eframe::egui;
use flashcard_quiz::source::{load_deck_from_path, save_deck_to_path};
use flashcard_quiz::{Deck, Feedback, FeedbackAction, QuizEngine, QuizError, Snackbar};
use std::time::{Duration, Instant};

/// Main application state
pub struct QuizApp {
    engine: QuizEngine,
    user_answer: String,
    snackbar: Snackbar,
    refocus_answer: bool,

    show_result_dialog: bool,
    result_message: String,
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.snackbar.tick(now);

        let mut action_import = false;
        let mut action_export = false;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Flashcards Quiz");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Export Deck").clicked() {
                        action_export = true;
                    }
                    if ui.button("Import Deck").clicked() {
                        action_import = true;
                    }
                });
            });
        });

        self.render_snackbar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| self.render_quiz(ui));

        if self.show_result_dialog {
            egui::Window::new("Import/Export Result")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }

        if action_import {
            self.handle_import();
        }
        if action_export {
            self.handle_export();
        }

        // Wake up again when the visible message should expire
        if let Some(remaining) = self.snackbar.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl QuizApp {
    pub fn new(engine: QuizEngine, feedback_duration: Duration) -> Self {
        Self {
            engine,
            user_answer: String::new(),
            snackbar: Snackbar::new(feedback_duration),
            refocus_answer: false,
            show_result_dialog: false,
            result_message: String::new(),
        }
    }

    /// Single submit path for both the Enter key and the button.
    fn submit(&mut self, now: Instant) {
        if self.snackbar.is_busy() {
            return;
        }

        let outcome = match self.engine.submit_answer(&self.user_answer) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Answer submitted in the wrong state: {}", e);
                return;
            }
        };

        if let Some(feedback) = Feedback::for_outcome(&outcome) {
            self.snackbar.show(feedback, now);
        }
        // Enter takes focus away from the field; hand it back once input is enabled again
        self.refocus_answer = !self.engine.is_complete();
        if outcome.advanced() {
            self.user_answer.clear();
            if self.engine.is_complete() {
                log::info!("Quiz on deck '{}' complete", self.engine.deck().name);
                self.snackbar.show(Feedback::quiz_complete(), now);
            }
        }
    }

    fn take_snackbar_action(&mut self, now: Instant) {
        match self.snackbar.take_action(now) {
            Some(FeedbackAction::Restart) => self.restart(),
            None => {}
        }
    }

    fn restart(&mut self) {
        self.engine.restart();
        self.user_answer.clear();
        self.refocus_answer = true;
        log::info!("Quiz restarted");
    }

    /// Swaps in a new deck and starts over, keeping the attempt limit.
    fn replace_deck(&mut self, deck: Deck) -> Result<(), QuizError> {
        self.engine = QuizEngine::with_max_attempts(deck, self.engine.max_attempts())?;
        self.user_answer.clear();
        self.snackbar.clear();
        self.refocus_answer = true;
        Ok(())
    }

    /// Renders the current question, answer field and attempts counter
    fn render_quiz(&mut self, ui: &mut egui::Ui) {
        let mut action_submit = false;
        let input_enabled = !self.snackbar.is_busy();

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            let Some(card) = self.engine.current_question() else {
                ui.heading("Quiz Complete!");
                return;
            };
            let question = card.question.clone();

            ui.label(self.engine.progress_message());
            ui.add_space(10.0);

            ui.group(|ui| {
                ui.set_min_height(120.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(egui::RichText::new(question).size(18.0));
                    ui.add_space(20.0);
                });
            });

            ui.add_space(16.0);

            let response = ui.add_enabled(
                input_enabled,
                egui::TextEdit::singleline(&mut self.user_answer)
                    .hint_text("Your Answer")
                    .desired_width(f32::INFINITY),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action_submit = true;
            } else if input_enabled && self.refocus_answer {
                response.request_focus();
                self.refocus_answer = false;
            }

            ui.add_space(16.0);

            if ui
                .add_enabled(input_enabled, egui::Button::new("Submit Answer"))
                .clicked()
            {
                action_submit = true;
            }

            ui.label(format!("Attempts left: {}", self.engine.attempts_left()));
        });

        if action_submit {
            self.submit(Instant::now());
        }
    }

    /// Renders the visible feedback message, with its action button if it has one
    fn render_snackbar(&mut self, ctx: &egui::Context) {
        let mut action_taken = false;
        let current = self.snackbar.current().cloned();

        egui::TopBottomPanel::bottom("snackbar").show_animated(ctx, current.is_some(), |ui| {
            if let Some(feedback) = &current {
                ui.horizontal(|ui| {
                    ui.label(&feedback.message);
                    if let Some(action) = feedback.action {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(action.label()).clicked() {
                                action_taken = true;
                            }
                        });
                    }
                });
            }
        });

        if action_taken {
            self.take_snackbar_action(Instant::now());
        }
    }

    /// Handles deck import from a JSON file
    fn handle_import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        self.result_message = match load_deck_from_path(&path) {
            Ok(deck) => {
                let name = deck.name.clone();
                let count = deck.len();
                match self.replace_deck(deck) {
                    Ok(()) => format!("Deck '{}' imported successfully with {} cards!", name, count),
                    Err(e) => format!("Import failed: {}", e),
                }
            }
            Err(e) => {
                log::warn!("Import of '{}' failed: {}", path.display(), e);
                format!(
                    "Import failed: {}\n\nPlease check if the file has correct structure:\n{{\n  \"name\": \"Deck Name\",\n  \"flashcards\": [{{ \"question\": \"...\", \"answer\": \"...\" }}]\n}}",
                    e
                )
            }
        };
        self.show_result_dialog = true;
    }

    /// Handles export of the current deck to a JSON file
    fn handle_export(&mut self) {
        let deck = self.engine.deck();
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.json", deck.name))
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        self.result_message = match save_deck_to_path(deck, &path) {
            Ok(()) => format!("Deck '{}' exported successfully!", deck.name),
            Err(e) => format!("Export failed: {}", e),
        };
        self.show_result_dialog = true;
    }
}
