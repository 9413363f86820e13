use maud::{Markup, html};

use crate::directory::PlayerDirectory;
use crate::model::DEFAULT_SEASON;

pub const INDEX_TITLE: &str = "Shot Charts";

#[must_use]
pub fn render_index_template(directory: &PlayerDirectory) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (INDEX_TITLE) }
        }
        body {
            h1 { (INDEX_TITLE) }
            p class="hint" {
                "Field goal attempts for the " (DEFAULT_SEASON) " season. Add "
                code { "?season=YYYY-YY" }
                " to a chart link for another season."
            }
            @if directory.is_empty() {
                p class="empty" { "No players loaded." }
            } @else {
                ul id="players" {
                    @for (name, id) in directory.iter() {
                        li {
                            a href=(format!("chart/{id}")) { (name) }
                        }
                    }
                }
            }
        }
    }
}
