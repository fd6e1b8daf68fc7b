use sqlx::PgPool;

use crate::models::guest::ProfileUpdate;
use crate::store::GuestStore;

impl GuestStore for PgPool {
    async fn update_profile(
        &self,
        guest_id: i64,
        update: &ProfileUpdate,
    ) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "UPDATE guests
             SET nationality = $1, country_flag = $2, national_id = $3
             WHERE id = $4",
        )
        .bind(&update.nationality)
        .bind(&update.country_flag)
        .bind(&update.national_id)
        .bind(guest_id)
        .execute(self)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
