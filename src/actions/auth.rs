use crate::actions::Outcome;
use crate::auth::provider::IdentityProvider;

pub const SIGN_IN_PROVIDER: &str = "google";
pub const AFTER_SIGN_IN: &str = "/account";
pub const AFTER_SIGN_OUT: &str = "/";

/// Hand the browser to the identity provider's consent screen.
pub fn sign_in<P: IdentityProvider>(provider: &P) -> Outcome {
    Outcome::Redirect(provider.sign_in_url(SIGN_IN_PROVIDER, AFTER_SIGN_IN))
}

/// Send the browser through the provider's logout endpoint. Purging the
/// local cookie session is the handler's job.
pub fn sign_out<P: IdentityProvider>(provider: &P) -> Outcome {
    Outcome::Redirect(provider.sign_out_url(AFTER_SIGN_OUT))
}
