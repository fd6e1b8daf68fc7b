use crate::actions::Outcome;
use crate::cache::PageCache;
use crate::errors::AppError;
use crate::models::guest::ProfileUpdate;
use crate::store::GuestStore;
use crate::validate;

/// Validate and persist the viewer's profile fields.
pub async fn update_guest<S, C>(
    viewer: Option<i64>,
    national_id: &str,
    nationality_packed: &str,
    store: &S,
    cache: &C,
) -> Result<Outcome, AppError>
where
    S: GuestStore,
    C: PageCache,
{
    let guest_id = viewer.ok_or_else(|| AppError::unauthenticated("update your profile"))?;

    if let Some(msg) = validate::validate_national_id(national_id) {
        return Err(AppError::Validation(msg));
    }
    let (nationality, country_flag) = validate::split_nationality(nationality_packed);

    let update = ProfileUpdate {
        nationality: nationality.to_string(),
        country_flag: country_flag.to_string(),
        national_id: national_id.to_string(),
    };
    if let Err(e) = store.update_profile(guest_id, &update).await {
        log::error!("profile update for guest {guest_id} failed: {e}");
        return Err(AppError::Persistence("Guest could not be updated"));
    }

    cache.invalidate("/account/profile");
    Ok(Outcome::Stay)
}
