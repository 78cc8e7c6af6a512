use crate::html::instruction_html;
use crate::screen::Screen;
use crate::text;
use dccs_core::{Dimension, TaskPhase};
use dccs_task::catalogue::{practice_trials, test_trials};
use dccs_task::{generate_mixed, TaskConfig};
use rand::Rng;

/// Assembles the full run as an ordered screen list: instructions (if
/// enabled), color practice with feedback, the two single-dimension test
/// blocks, the generated mixed block, and the summary screen (if enabled).
pub fn build_timeline<R: Rng + ?Sized>(config: &TaskConfig, rng: &mut R) -> Vec<Screen> {
    let mut screens = Vec::new();

    if config.show_instructions {
        screens.push(instruction(text::WELCOME));
        screens.push(instruction(text::COLOR_GAME));
    }
    for trial in practice_trials(config.practice_trials) {
        screens.push(Screen::trial(trial, TaskPhase::ColorPractice));
    }

    if config.show_instructions {
        screens.push(instruction(text::COLOR_TEST));
    }
    for trial in test_trials(Dimension::Color, config.test_trials) {
        screens.push(Screen::trial(trial, TaskPhase::ColorTest));
    }

    if config.show_instructions {
        screens.push(instruction(text::SHAPE_GAME));
    }
    for trial in test_trials(Dimension::Shape, config.test_trials) {
        screens.push(Screen::trial(trial, TaskPhase::ShapeTest));
    }

    if config.show_instructions {
        screens.push(instruction(text::MIXED_GAME));
    }
    for trial in generate_mixed(config.mixed_trials, rng) {
        screens.push(Screen::trial(trial, TaskPhase::Mixed));
    }

    if config.show_summary {
        screens.push(Screen::summary());
    }

    screens
}

fn instruction(body: &str) -> Screen {
    Screen::instruction(instruction_html(body), body.to_string())
}
