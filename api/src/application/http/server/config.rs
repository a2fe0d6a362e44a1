use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use bitebot_core::domain::recipe::value_objects::{Diet, DietLabelStyle, OutputMode, TimeBudget};

use super::{api_entities::response::Response, app_state::AppState};

pub const APP_TITLE: &str = "BiteBot.ai";
pub const APP_TAGLINE: &str = "Fast Food, Faster.";

/// Everything a frontend needs to render the request form.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppConfigResponse {
    pub title: String,
    pub tagline: String,
    pub engine: String,
    pub diets: Vec<String>,
    pub max_times: Vec<String>,
    pub modes: Vec<String>,
}

pub async fn get_config(State(state): State<AppState>) -> Response<AppConfigResponse> {
    let style = DietLabelStyle::from(state.args.llm.diet_labels.as_str());

    Response::OK(AppConfigResponse {
        title: APP_TITLE.to_string(),
        tagline: APP_TAGLINE.to_string(),
        engine: state.service.engine().model.to_string(),
        diets: Diet::ALL
            .iter()
            .map(|diet| diet.label(style).to_string())
            .collect(),
        max_times: TimeBudget::ALL
            .iter()
            .map(|budget| budget.as_str().to_string())
            .collect(),
        modes: OutputMode::ALL
            .iter()
            .map(|mode| mode.as_str().to_string())
            .collect(),
    })
}
