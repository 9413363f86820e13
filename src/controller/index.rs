use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};

use crate::AppState;
use crate::view::index::render_index_template;

pub async fn index(state: Data<AppState>) -> impl Responder {
    let markup = render_index_template(&state.directory);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
