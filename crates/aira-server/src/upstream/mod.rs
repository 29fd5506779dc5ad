mod gemini;
mod mapbiomas;

pub use gemini::GeminiClient;
pub use mapbiomas::MapBiomasClient;
