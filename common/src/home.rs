//! トップ画面の文言

pub const TAGLINE: &str = "Sustaining Earth";
pub const HEADLINE: &str = "Grow the Future with";
pub const HEADLINE_ACCENT: &str = "Sustainable Agriculture";
pub const BLURB: &str = "We empower farmers with eco-friendly methods, modern tools, and a \
shared mission to nourish the planet — naturally and responsibly.";
