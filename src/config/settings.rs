use dotenv::dotenv;
use std::env;

/// Port used whenever `PORT` is unset or doesn't parse.
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
}

impl Settings {
    pub fn new() -> Self {
        dotenv().ok(); // loads `.env` file automatically

        Self {
            port: port_from_env(env::var("PORT").ok().as_deref()),
        }
    }
}

// Startup must survive any PORT value, so a bad one falls back
// instead of erroring.
fn port_from_env(raw: Option<&str>) -> u16 {
    match raw {
        Some(s) => s.trim().parse::<u16>().unwrap_or(DEFAULT_PORT),
        None => DEFAULT_PORT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_falls_back() {
        assert_eq!(port_from_env(None), DEFAULT_PORT);
    }

    #[test]
    fn valid_port_is_used() {
        assert_eq!(port_from_env(Some("8080")), 8080);
        assert_eq!(port_from_env(Some(" 3000 ")), 3000);
    }

    #[test]
    fn garbage_port_falls_back() {
        assert_eq!(port_from_env(Some("")), DEFAULT_PORT);
        assert_eq!(port_from_env(Some("not-a-port")), DEFAULT_PORT);
        assert_eq!(port_from_env(Some("80.5")), DEFAULT_PORT);
    }

    #[test]
    fn out_of_range_port_falls_back() {
        assert_eq!(port_from_env(Some("70000")), DEFAULT_PORT);
        assert_eq!(port_from_env(Some("-1")), DEFAULT_PORT);
    }
}
