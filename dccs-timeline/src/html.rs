//! HTML fragment builders. Plain string assembly; the host owns the page
//! these land in.

use dccs_core::{CardStimulus, Dimension, SortTrial};
use dccs_task::PhaseSummary;

pub fn card_img(card: &CardStimulus) -> String {
    format!(
        "<img class=\"dccs-card\" src=\"{}\" alt=\"{}\">",
        card.image, card.name
    )
}

pub fn instruction_html(body: &str) -> String {
    format!("<div class=\"dccs-instruction\"><p>{body}</p></div>")
}

/// Target card on top, the two choices below. The rule cue is only shown
/// for mixed trials, which carry their dimension
pub fn trial_html(trial: &SortTrial) -> String {
    let mut html = String::from("<div class=\"dccs-trial\">");
    if let Some(dimension) = trial.dimension {
        html.push_str(&format!(
            "<p class=\"dccs-rule\">{} game</p>",
            dimension.label()
        ));
    }
    html.push_str(&format!(
        "<div class=\"dccs-target\">{}</div>",
        card_img(&trial.target)
    ));
    html.push_str("<div class=\"dccs-choices\">");
    html.push_str(&format!(
        "<button class=\"dccs-choice\" data-choice=\"0\">{}</button>",
        card_img(&trial.left)
    ));
    html.push_str(&format!(
        "<button class=\"dccs-choice\" data-choice=\"1\">{}</button>",
        card_img(&trial.right)
    ));
    html.push_str("</div></div>");
    html
}

pub fn feedback_html(correct: bool, dimension: Dimension) -> String {
    let line = if correct {
        crate::text::FEEDBACK_CORRECT.to_string()
    } else {
        crate::text::feedback_incorrect(dimension)
    };
    format!("<p class=\"dccs-feedback\">{line}</p>")
}

/// One row per phase: accuracy and mean reaction time
pub fn summary_html(summaries: &[PhaseSummary]) -> String {
    let mut html = String::from(
        "<div class=\"dccs-summary\"><h2>Results</h2><table>\
         <tr><th>Phase</th><th>Accuracy</th><th>Mean RT</th></tr>",
    );
    for s in summaries {
        let rt = s
            .mean_rt_ms
            .map(|ms| format!("{ms} ms"))
            .unwrap_or_else(|| "-".to_string());
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}%</td><td>{}</td></tr>",
            s.phase, s.accuracy_pct, rt
        ));
    }
    html.push_str("</table></div>");
    html
}
