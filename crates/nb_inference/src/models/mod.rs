pub mod groq;

pub use groq::{GroqModel, DEFAULT_MODEL};
