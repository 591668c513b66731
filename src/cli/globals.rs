use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub api_token: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            api_token: SecretString::default(),
        }
    }

    pub fn set_token(&mut self, token: SecretString) {
        self.api_token = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let url = "https://api.example.com".to_string();
        let mut args = GlobalArgs::new(url);
        assert_eq!(args.api_url, "https://api.example.com");
        assert_eq!(args.api_token.expose_secret(), "");

        args.set_token(SecretString::from("t0ken".to_string()));
        assert_eq!(args.api_token.expose_secret(), "t0ken");
    }
}
