//! Application-wide constants.

/// Storefront name shown in the title bar and header.
pub const APP_NAME: &str = "Fresh Bowl";

/// Auth backend endpoint resolving the signed-in identity.
pub const AUTH_ME_ENDPOINT: &str = "/api/auth/me";

/// Auth backend endpoint ending the current session.
pub const AUTH_LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Auth backend page that starts the sign-in flow.
pub const AUTH_SIGN_IN_URL: &str = "/auth/sign-in";

/// Menu copy drafting endpoint served by this application's server.
pub const DESCRIBE_ENDPOINT: &str = "/api/menu/describe";
