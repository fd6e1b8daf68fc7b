/// Capability interface over the external identity provider, so the concrete
/// provider stays swappable. Sign-in and sign-out are pure delegation: we
/// only build the URL the browser is sent through.
pub trait IdentityProvider {
    fn sign_in_url(&self, provider: &str, redirect_to: &str) -> String;
    fn sign_out_url(&self, redirect_to: &str) -> String;
}

/// Hosted OAuth gateway exposing GoTrue-style endpoints under one base URL.
#[derive(Clone)]
pub struct HostedAuth {
    base_url: String,
}

impl HostedAuth {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl IdentityProvider for HostedAuth {
    fn sign_in_url(&self, provider: &str, redirect_to: &str) -> String {
        format!(
            "{}/authorize?provider={}&redirect_to={}",
            self.base_url, provider, redirect_to
        )
    }

    fn sign_out_url(&self, redirect_to: &str) -> String {
        format!("{}/logout?redirect_to={}", self.base_url, redirect_to)
    }
}
