/// Base path every static asset is served under. Set `PUBLIC_URL` at build
/// time when the site is not hosted at the domain root.
pub fn get_public_url() -> &'static str {
    option_env!("PUBLIC_URL")
        .unwrap_or("")
        .trim_end_matches('/')
}

pub fn asset_url(relative: &str) -> String {
    join_asset(get_public_url(), relative)
}

fn join_asset(base: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

pub const CONTACT_FORM_URL: &str = "https://forms.gle/CC3BTBAhBMWgQ7HE8";
pub const CONTACT_FORM_HEIGHT: u32 = 520;
