use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use sqlx::PgPool;

use crate::actions::profile;
use crate::auth::session::get_guest_id;
use crate::cache::RenderCache;
use crate::errors::AppError;
use crate::handlers::respond;

#[derive(Deserialize)]
pub struct UpdateProfileForm {
    #[serde(rename = "nationalID")]
    pub national_id: String,
    pub nationality: String,
}

pub async fn update_profile(
    pool: web::Data<PgPool>,
    cache: web::Data<RenderCache>,
    session: Session,
    form: web::Form<UpdateProfileForm>,
) -> Result<HttpResponse, AppError> {
    let viewer = get_guest_id(&session);
    let outcome = profile::update_guest(
        viewer,
        &form.national_id,
        &form.nationality,
        pool.get_ref(),
        cache.get_ref(),
    )
    .await?;
    Ok(respond(outcome))
}
