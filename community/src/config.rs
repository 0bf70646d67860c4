use std::env;
use std::str::FromStr;

use crate::domain::entities::{Member, DEFAULT_MEMBER_ID, DEFAULT_MEMBER_NAME};
use crate::error::AppError;

/// How the binary prints what it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(AppError::Config(format!(
                "FEED_OUTPUT must be 'markdown' or 'json', got '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Member the binary acts as
    pub member_id: String,
    pub member_name: String,
    pub member_avatar: Option<String>,
    pub member_verified: bool,
    /// Start from the starter posts and groups instead of an empty feed
    pub seed: bool,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let flag = |key: &str, default: bool| -> Result<bool, AppError> {
            match get(key) {
                Some(raw) => parse_flag(&raw).ok_or_else(|| {
                    AppError::Config(format!("{} is not a boolean: '{}'", key, raw))
                }),
                None => Ok(default),
            }
        };
        let seed = flag("FEED_SEED", true)?;
        let member_verified = flag("FEED_MEMBER_VERIFIED", false)?;
        let output = match get("FEED_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            member_id: get("FEED_MEMBER_ID").unwrap_or_else(|| DEFAULT_MEMBER_ID.to_string()),
            member_name: get("FEED_MEMBER_NAME")
                .unwrap_or_else(|| DEFAULT_MEMBER_NAME.to_string()),
            member_avatar: get("FEED_MEMBER_AVATAR").filter(|a| !a.trim().is_empty()),
            member_verified,
            seed,
            output,
        })
    }

    /// Identity used for likes, comments and new posts
    pub fn member(&self) -> Member {
        let mut member = Member::new(self.member_id.clone(), self.member_name.clone());
        if let Some(avatar) = &self.member_avatar {
            member = member.with_avatar(avatar.clone());
        }
        if self.member_verified {
            member = member.verified();
        }
        member
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
