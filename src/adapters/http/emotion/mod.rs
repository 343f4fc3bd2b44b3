//! HTTP adapter for emotion endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    EmotionResponse, EmotionStatsResponse, ListEmotionsParams, LogEmotionRequest, StatsParams,
};
pub use handlers::EmotionHandlers;
pub use routes::emotion_routes;
