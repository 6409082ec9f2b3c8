use crate::error::AppError;
use crate::labels::{EnglishLabels, JapaneseLabels, LabelTable};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    Japanese,
}

impl Locale {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "en" => Ok(Locale::English),
            "ja" => Ok(Locale::Japanese),
            other => Err(AppError::ConfigError(format!(
                "Unsupported language '{}' (expected en or ja)",
                other
            ))),
        }
    }

    pub fn labels(self) -> &'static dyn LabelTable {
        match self {
            Locale::English => &EnglishLabels,
            Locale::Japanese => &JapaneseLabels,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub locale: Locale,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let locale = match env::var("SCOUT_LANG") {
            Ok(value) => Locale::parse(&value)?,
            Err(_) => Locale::English,
        };

        Ok(Config { locale })
    }
}
