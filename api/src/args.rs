use anyhow::bail;
use bitebot_core::domain::{
    common::{BiteBotConfig, DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODELS, FormConfig, LlmConfig},
    recipe::value_objects::DietLabelStyle,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bitebot-api", about = "BiteBot recipe suggestion API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value = "3333")]
    pub port: u16,

    /// Path prefix every route is mounted under
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Origins allowed by CORS
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON", default_value = "false")]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Gemini API key. The server refuses to start without one.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    /// Candidate models, probed in order at startup
    #[arg(
        long,
        env = "GEMINI_MODELS",
        value_delimiter = ',',
        default_values_t = DEFAULT_GEMINI_MODELS.map(String::from)
    )]
    pub gemini_models: Vec<String>,

    /// Base URL of the generative-language REST endpoint
    #[arg(long, env = "GEMINI_API_BASE", default_value = DEFAULT_GEMINI_API_BASE)]
    pub gemini_api_base: String,

    /// Overall request timeout in seconds. Unset means no timeout.
    #[arg(long, env = "GEMINI_TIMEOUT_SECS")]
    pub gemini_timeout_secs: Option<u64>,

    /// Diet label set the form shows: classic or compact
    #[arg(long, env = "DIET_LABELS", default_value = "classic")]
    pub diet_labels: String,
}

impl TryFrom<Args> for BiteBotConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let Some(gemini_api_key) = args.llm.gemini_api_key else {
            bail!("Missing GEMINI_API_KEY. Set it in the environment or a .env file.");
        };

        Ok(BiteBotConfig {
            llm: LlmConfig {
                gemini_api_key,
                gemini_models: args.llm.gemini_models,
                api_base: args.llm.gemini_api_base,
                request_timeout_secs: args.llm.gemini_timeout_secs,
            },
            form: FormConfig {
                diet_labels: DietLabelStyle::from(args.llm.diet_labels.as_str()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_the_known_candidate_models() {
        let args = Args::parse_from(["bitebot-api", "--gemini-api-key", "k"]);

        assert_eq!(
            args.llm.gemini_models,
            vec![
                "gemini-3-flash-preview",
                "gemini-2.5-flash",
                "gemini-1.5-flash"
            ]
        );
    }

    #[test]
    fn test_config_requires_an_api_key() {
        let mut args = Args::parse_from(["bitebot-api", "--gemini-api-key", "k"]);
        args.llm.gemini_api_key = None;

        let error = BiteBotConfig::try_from(args).unwrap_err();
        assert!(error.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_model_list_is_comma_separated() {
        let args = Args::parse_from([
            "bitebot-api",
            "--gemini-api-key",
            "k",
            "--gemini-models",
            "model-a,model-b",
        ]);

        let config = BiteBotConfig::try_from(args).unwrap();
        assert_eq!(config.llm.gemini_models, vec!["model-a", "model-b"]);
    }

    #[test]
    fn test_unknown_label_style_falls_back_to_classic() {
        let args = Args::parse_from([
            "bitebot-api",
            "--gemini-api-key",
            "k",
            "--diet-labels",
            "fancy",
        ]);

        let config = BiteBotConfig::try_from(args).unwrap();
        assert_eq!(config.form.diet_labels, DietLabelStyle::Classic);
    }
}
