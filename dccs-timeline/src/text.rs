//! Instruction and feedback copy, kept together so wording changes stay
//! out of the layout code.

use dccs_core::Dimension;

pub const WELCOME: &str =
    "Welcome! We are going to play some card games. \
     In each game you will see a card on top and two cards below it. \
     Press the card below that goes with the card on top.";

pub const COLOR_GAME: &str =
    "First we play the color game. \
     In the color game, choose the card that is the same color as the card on top. \
     Let's practice a few first.";

pub const COLOR_TEST: &str =
    "Good job! Now we keep playing the color game, but you won't be told \
     whether you were right. Keep choosing the card with the same color.";

pub const SHAPE_GAME: &str =
    "Now we switch to the shape game. \
     In the shape game, choose the card that is the same shape as the card on top. \
     Don't think about the color anymore.";

pub const MIXED_GAME: &str =
    "Last game! Now the rule changes from card to card. \
     Before each card you will see whether to play the color game or the shape game. \
     Pay attention, the rule switches often.";

pub const REMINDER: &str = "Please choose one of the two cards.";

pub const FEEDBACK_CORRECT: &str = "That's right!";

pub fn feedback_incorrect(dimension: Dimension) -> String {
    format!(
        "That's not right. Remember, in the {} game you choose the card with the same {}.",
        dimension.label(),
        dimension.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incorrect_feedback_names_the_active_rule() {
        assert!(feedback_incorrect(Dimension::Color).contains("color game"));
        assert!(feedback_incorrect(Dimension::Shape).contains("same shape"));
    }
}
