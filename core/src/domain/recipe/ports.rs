use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{CartConfirmation, RecipeGeneration, RecipeOutcome},
        export::ExportArtifact,
        value_objects::{ConfirmCartInput, GenerateOptions, GenerateRecipesInput, PromptPart},
    },
};

/// LLM client trait for one generation call against the bound model
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_content(
        &self,
        parts: Vec<PromptPart>,
        options: GenerateOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the recipe generation pipeline
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<RecipeGeneration, CoreError>> + Send;

    fn export_recipe(&self, outcome: &RecipeOutcome) -> ExportArtifact;
}

/// Service trait for the shopping cart checkout stub
#[cfg_attr(test, mockall::automock)]
pub trait CartService: Send + Sync {
    fn confirm_cart(&self, input: ConfirmCartInput) -> Result<CartConfirmation, CoreError>;
}
