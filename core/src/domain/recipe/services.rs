use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::{CartConfirmation, RecipeEntry, RecipeGeneration, RecipeOutcome},
        export::{self, ExportArtifact},
        helpers::create_cards_and_cart,
        ports::{CartService, LlmClient, RecipeService},
        prompt,
        schema::get_recipe_response_schema,
        value_objects::{
            ConfirmCartInput, GenerateOptions, GenerateRecipesInput, OutputMode, PromptPart,
        },
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LlmClient,
{
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<RecipeGeneration, CoreError> {
        // 1. Reject requests with no usable content before any model call.
        //    Whitespace-only ingredient text counts as absent.
        let ingredients = input
            .ingredients
            .as_deref()
            .map(str::trim)
            .filter(|items| !items.is_empty());

        if ingredients.is_none() && input.image.is_none() {
            return Err(CoreError::InvalidInput(
                "Upload a photo or type ingredients".to_string(),
            ));
        }

        // 2. Assemble the content parts: instruction first, then the typed
        //    ingredient list, then the photo
        let diet_label = input.diet.label(self.form.diet_labels);
        let mut parts = vec![PromptPart::Text(prompt::build_instruction(
            input.mode,
            diet_label,
            input.max_time,
        ))];

        if let Some(items) = ingredients {
            parts.push(PromptPart::Text(prompt::ingredients_part(items)));
        }

        if let Some(image) = input.image {
            parts.push(PromptPart::Image(image));
        }

        // 3. Structured mode constrains the answer to the recipe schema
        let options = match input.mode {
            OutputMode::Freeform => GenerateOptions::default(),
            OutputMode::Structured => GenerateOptions {
                response_schema: Some(get_recipe_response_schema()),
            },
        };

        // 4. Call LLM
        let raw_response = self.llm_client.generate_content(parts, options).await?;

        // 5. Parse per mode. A structured answer that does not decode fails
        //    the request; it is never degraded to freeform.
        let outcome = match input.mode {
            OutputMode::Freeform => RecipeOutcome::Freeform { text: raw_response },
            OutputMode::Structured => {
                let entries: Vec<RecipeEntry> =
                    serde_json::from_str(&raw_response).map_err(|e| {
                        tracing::error!("Failed to parse recipe response: {}", e);
                        CoreError::ExternalServiceError(format!(
                            "Failed to parse recipe response: {}",
                            e
                        ))
                    })?;

                let (recipes, cart) = create_cards_and_cart(entries);
                RecipeOutcome::Structured { recipes, cart }
            }
        };

        Ok(RecipeGeneration::new(
            &self.engine,
            input.diet,
            input.max_time,
            outcome,
        ))
    }

    fn export_recipe(&self, outcome: &RecipeOutcome) -> ExportArtifact {
        export::to_artifact(outcome)
    }
}

impl<LLM> CartService for Service<LLM>
where
    LLM: LlmClient,
{
    fn confirm_cart(&self, input: ConfirmCartInput) -> Result<CartConfirmation, CoreError> {
        // Clients may echo duplicates back; collapse them, keep order
        let mut selected: Vec<String> = Vec::with_capacity(input.selected.len());
        for name in input.selected {
            if !selected.contains(&name) {
                selected.push(name);
            }
        }

        Ok(CartConfirmation::new(selected))
    }
}
