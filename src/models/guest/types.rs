/// The three profile fields a guest may change through the account form.
/// `nationality` and `country_flag` arrive packed as `"<name>%<flagUrl>"`;
/// everything else on the guest row is managed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub nationality: String,
    pub country_flag: String,
    pub national_id: String,
}
