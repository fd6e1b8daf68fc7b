use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::actions::auth;
use crate::auth::provider::HostedAuth;
use crate::errors::AppError;
use crate::handlers::respond;

pub async fn sign_in(provider: web::Data<HostedAuth>) -> Result<HttpResponse, AppError> {
    Ok(respond(auth::sign_in(provider.get_ref())))
}

pub async fn sign_out(
    provider: web::Data<HostedAuth>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    session.purge();
    Ok(respond(auth::sign_out(provider.get_ref())))
}
