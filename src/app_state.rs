use crate::config::Config;
use crate::token::jwt::TokenIssuer;

#[derive(Debug)]
pub struct AppState {
    pub issuer: TokenIssuer,
}

pub fn build_app_state(config: &Config) -> AppState {
    AppState {
        issuer: TokenIssuer::new(config.jwt_secret.as_bytes()),
    }
}
