use actix_session::Session;

/// The guest id of the signed-in viewer, if any. The identity provider's
/// callback layer writes this value; we only ever read it.
pub fn get_guest_id(session: &Session) -> Option<i64> {
    session.get::<i64>("guest_id").unwrap_or(None)
}
