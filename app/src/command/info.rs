use tenderlens_config::Config;

/// Strategy for displaying the effective configuration.
///
/// Falls back to built-in defaults when no config file exists; the API key
/// is always masked.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load_or_default()?;

        println!("=== tenderlens Configuration ===\n");

        println!("Config File:");
        if config_path.exists() {
            println!("  Path: {}", config_path.display());
        } else {
            println!("  Path: {} (not found, using defaults)", config_path.display());
        }
        println!();

        println!("Summarizer:");
        println!("  Mode: {}", config.summarizer.mode);
        println!();

        let openrouter = &config.providers.openrouter;
        println!("OpenRouter:");
        let api_key = openrouter
            .resolved_api_key()
            .map_or_else(|| "(not set)".to_string(), |key| mask_api_key(&key));
        println!("  API Key: {api_key}");
        println!("  Base URL: {}", openrouter.base_url);
        println!("  Model: {}", openrouter.model);
        println!("  Max Tokens: {}", openrouter.max_tokens);
        println!("  Temperature: {}", openrouter.temperature);
        println!("  Referer: {}", openrouter.referer);
        println!("  Title: {}", openrouter.title);

        Ok(())
    }
}

fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_keys_keep_both_ends() {
        assert_eq!(mask_api_key("sk-or-v1-abcdef123456"), "sk-o...3456");
    }

    #[test]
    fn short_keys_are_fully_hidden() {
        assert_eq!(mask_api_key("sk-1234"), "***");
    }
}
