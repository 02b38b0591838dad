//! Manages the loading of the LLM provider configuration.

use llm::builder::{LLMBackend, LLMBuilder};
use serde::Deserialize;
use std::env;
use std::fs;
use std::str::FromStr;

use crate::api::LlmBackend;
use crate::core::storage::AppCtx;

#[derive(Deserialize, Debug)]
struct Config {
    provider: Option<ProviderConfig>,
}

#[derive(Deserialize, Debug)]
struct ProviderConfig {
    backend: String,
    model: String,
    api_key_env: Option<String>,
    base_url: Option<String>,
}

/// Builds the generation backend from a `provider:model` override or from
/// `~/.classmate-ai/config.toml` (`[provider]` table).
pub fn load_backend(ctx: &AppCtx, override_spec: Option<&str>) -> Result<LlmBackend, String> {
    if let Some(spec) = override_spec {
        let (provider_str, model) = spec
            .split_once(':')
            .ok_or("Invalid backend format. Use 'provider:model'")?;
        return build(provider_str, model, None, None);
    }

    if !ctx.config_path.exists() {
        return Err(format!(
            "No LLM provider configured. Create {} or pass --backend 'provider:model'.",
            ctx.config_path.display()
        ));
    }

    let config_content = fs::read_to_string(&ctx.config_path)
        .map_err(|e| format!("Failed to read config.toml: {}", e))?;
    let config: Config =
        toml::from_str(&config_content).map_err(|e| format!("Failed to parse config.toml: {}", e))?;
    let provider = config
        .provider
        .ok_or("config.toml has no [provider] table.")?;

    build(
        &provider.backend,
        &provider.model,
        provider.api_key_env.as_deref(),
        provider.base_url.as_deref(),
    )
}

fn build(
    provider_str: &str,
    model: &str,
    api_key_env: Option<&str>,
    base_url: Option<&str>,
) -> Result<LlmBackend, String> {
    let backend = LLMBackend::from_str(provider_str)
        .map_err(|_| format!("Unknown provider: {}", provider_str))?;

    let api_key_env_var = match api_key_env {
        Some(var) => var.to_string(),
        None => match backend {
            LLMBackend::OpenAI => "OPENAI_API_KEY".to_string(),
            LLMBackend::Anthropic => "ANTHROPIC_API_KEY".to_string(),
            LLMBackend::Google => "GOOGLE_API_KEY".to_string(),
            LLMBackend::Groq => "GROQ_API_KEY".to_string(),
            LLMBackend::Ollama => String::new(),
            LLMBackend::XAI => "XAI_API_KEY".to_string(),
            LLMBackend::Cohere => "COHERE_API_KEY".to_string(),
            LLMBackend::DeepSeek => "DEEPSEEK_API_KEY".to_string(),
            LLMBackend::Mistral => "MISTRAL_API_KEY".to_string(),
            _ => return Err(format!("Provider '{}' is not supported.", provider_str)),
        },
    };

    let mut builder = LLMBuilder::new().backend(backend).model(model);

    if !api_key_env_var.is_empty() {
        let api_key = env::var(&api_key_env_var)
            .map_err(|_| format!("API key env var '{}' not found.", api_key_env_var))?;
        builder = builder.api_key(api_key);
    }
    if let Some(base_url) = base_url {
        builder = builder.base_url(base_url);
    }

    let provider = builder.build().map_err(|e| e.to_string())?;
    Ok(LlmBackend::new(provider))
}
