pub mod account_handlers;
pub mod auth_handlers;
pub mod booking_handlers;

use actix_web::HttpResponse;

use crate::actions::Outcome;

/// Map an action outcome to the response a form submission expects.
pub(crate) fn respond(outcome: Outcome) -> HttpResponse {
    match outcome {
        Outcome::Stay => HttpResponse::NoContent().finish(),
        Outcome::Redirect(location) => HttpResponse::SeeOther()
            .insert_header(("Location", location))
            .finish(),
    }
}
