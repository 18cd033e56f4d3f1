//! Education view: topic articles and the planetary-defense quiz.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::education::{QUIZ, QuizState, TOPICS};

use super::{AppView, back_button, colors, icons};

/// Resource tracking the education view's state.
#[derive(Resource)]
pub struct EducationState {
    /// Selected topic id.
    pub topic: &'static str,
    /// Whether the quiz is shown instead of an article.
    pub quiz_mode: bool,
    /// Quiz progression.
    pub quiz: QuizState,
}

impl Default for EducationState {
    fn default() -> Self {
        Self {
            topic: TOPICS[0].id,
            quiz_mode: false,
            quiz: QuizState::default(),
        }
    }
}

/// System rendering the education view.
pub fn education_system(
    mut contexts: EguiContexts,
    mut view: ResMut<AppView>,
    mut state: ResMut<EducationState>,
) {
    if *view != AppView::Education {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("education_topics")
        .exact_width(260.0)
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(12, 12)),
        )
        .show(ctx, |ui| {
            back_button(ui, &mut view, AppView::Dashboard, "Back to Dashboard");
            ui.label(
                egui::RichText::new(format!("{} Education Center", icons::BOOK))
                    .size(18.0)
                    .strong(),
            );
            ui.add_space(8.0);

            for topic in TOPICS {
                let selected = !state.quiz_mode && state.topic == topic.id;
                if ui.selectable_label(selected, topic.title).clicked() {
                    state.topic = topic.id;
                    state.quiz_mode = false;
                }
            }
            ui.separator();
            if ui
                .selectable_label(
                    state.quiz_mode,
                    format!("{} Knowledge Quiz", icons::AWARD),
                )
                .clicked()
            {
                state.quiz_mode = true;
                state.quiz.reset();
            }
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(20, 16)),
        )
        .show(ctx, |ui| {
            if state.quiz_mode {
                quiz_panel(ui, &mut state.quiz);
            } else {
                let topic = TOPICS
                    .iter()
                    .find(|t| t.id == state.topic)
                    .unwrap_or(&TOPICS[0]);
                ui.label(egui::RichText::new(topic.title).size(22.0).strong());
                ui.add_space(8.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.label(egui::RichText::new(topic.content).size(14.0));
                });
            }
        });
}

fn quiz_panel(ui: &mut egui::Ui, quiz: &mut QuizState) {
    ui.label(egui::RichText::new("Knowledge Quiz").size(22.0).strong());
    ui.add_space(4.0);

    if quiz.finished {
        ui.label(
            egui::RichText::new(format!("{} Quiz Complete!", icons::AWARD))
                .size(18.0)
                .color(colors::SUCCESS),
        );
        ui.label(format!("Score: {} / {}", quiz.score, QUIZ.len()));
        let verdict = if quiz.score == QUIZ.len() {
            "Perfect! You are ready for planetary defense duty."
        } else if quiz.score * 2 >= QUIZ.len() {
            "Good work. Review the topics to close the gaps."
        } else {
            "Time to revisit the education topics."
        };
        ui.label(egui::RichText::new(verdict).color(colors::TEXT_DIM));
        if ui.button("Try Again").clicked() {
            quiz.reset();
        }
        return;
    }

    let Some(question) = quiz.question() else {
        return;
    };

    ui.label(
        egui::RichText::new(format!("Question {} of {}", quiz.current + 1, QUIZ.len()))
            .color(colors::TEXT_DIM),
    );
    ui.add(egui::ProgressBar::new(quiz.current as f32 / QUIZ.len() as f32));
    ui.add_space(8.0);
    ui.label(egui::RichText::new(question.question).size(16.0).strong());
    ui.add_space(8.0);

    for (i, option) in question.options.iter().enumerate() {
        let revealed = quiz.chosen.is_some();
        let text = if revealed && i == question.correct {
            egui::RichText::new(format!("{} {option}", icons::CHECK)).color(colors::SUCCESS)
        } else if quiz.chosen == Some(i) {
            egui::RichText::new(format!("{} {option}", icons::CROSS)).color(colors::DANGER)
        } else {
            egui::RichText::new(*option)
        };
        if ui.button(text).clicked() {
            quiz.choose(i);
        }
    }

    if quiz.chosen.is_some() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(question.explanation).color(colors::TEXT_DIM));
        let label = if quiz.current + 1 == QUIZ.len() {
            "Finish"
        } else {
            "Next Question"
        };
        if ui.button(format!("{label} {}", icons::FORWARD)).clicked() {
            quiz.advance();
        }
    }
}
