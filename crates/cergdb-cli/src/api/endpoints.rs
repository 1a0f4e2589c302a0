//! API endpoint URL builders
//!
//! Endpoint paths are relative to the server URL, which always ends in `/`.

pub const LOGIN: &str = "login";
pub const REGISTER: &str = "register";
pub const USER_PROFILE: &str = "user_profile";
pub const SUBMIT: &str = "submit";
pub const RETRIEVE: &str = "retrieve";
pub const DELETE: &str = "delete";
pub const RENAME: &str = "rename";

/// Build the server URL: `http(s)://host:port/[api_root/]`
pub fn server_url(host: &str, port: u16, tls: bool, api_root: &str) -> String {
    let scheme = if tls { "https" } else { "http" };
    let root = api_root.trim_matches('/');

    if root.is_empty() {
        format!("{}://{}:{}/", scheme, host, port)
    } else {
        format!("{}://{}:{}/{}/", scheme, host, port, root)
    }
}

/// Join an endpoint path onto a server URL
pub fn endpoint_url(server_url: &str, path: &str) -> String {
    format!("{}{}", server_url, path.trim_start_matches('/'))
}
