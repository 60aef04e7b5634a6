//! Build-time configuration of the browser application.
//!
//! Values are baked in with `option_env!` when the bundle is compiled, e.g.
//! `SUPABASE_URL=... SUPABASE_ANON_KEY=... trunk build --release`.

/// Where the relay lives relative to the page.
pub const RELAY_BASE: &str = "/api";

const SUPABASE_URL: Option<&str> = option_env!("SUPABASE_URL");
const SUPABASE_ANON_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: &'static str,
    pub anon_key: &'static str,
}

/// The account backend, when the bundle was built with one.
pub fn supabase() -> Option<SupabaseConfig> {
    match (SUPABASE_URL, SUPABASE_ANON_KEY) {
        (Some(url), Some(anon_key)) if !url.is_empty() && !anon_key.is_empty() => {
            Some(SupabaseConfig { url, anon_key })
        }
        _ => None,
    }
}
