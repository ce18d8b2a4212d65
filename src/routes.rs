//! Route paths shared by pages, links and navigation.

/// Landing view after a successful login.
pub const HOME: &str = "/home";
/// Doctor dashboard, loaded after a successful registration.
pub const DASHBOARD: &str = "/dashboard";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const SIGN_UP_DOCTOR: &str = "/sign-up-doctor";
pub const LOGIN_DOC: &str = "/login-doc";
