//! Emotion journal command and query handlers.

mod delete_emotion;
mod get_emotion_stats;
mod list_emotions;
mod log_emotion;

pub use delete_emotion::{DeleteEmotionCommand, DeleteEmotionHandler, DeleteEmotionResult};
pub use get_emotion_stats::{GetEmotionStatsHandler, GetEmotionStatsQuery};
pub use list_emotions::{ListEmotionsHandler, ListEmotionsQuery};
pub use log_emotion::{LogEmotionCommand, LogEmotionHandler};
