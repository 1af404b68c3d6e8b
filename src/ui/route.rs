use std::fmt;
use thiserror::Error;

use crate::catalog::RecordKey;

/// Top-level screens, each addressed by a path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/gallery`
    Gallery,
    /// `/pokemon/{id-or-name}`
    Detail(RecordKey),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown route '{path}' (expected '/', '/gallery' or '/pokemon/<id>')")]
pub struct ParseRouteError {
    pub path: String,
}

impl Route {
    pub fn from_path(path: &str) -> Result<Self, ParseRouteError> {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(Self::List),
            ["gallery"] => Ok(Self::Gallery),
            ["pokemon", key] => RecordKey::parse(key).map(Self::Detail).ok_or_else(|| {
                ParseRouteError {
                    path: trimmed.to_string(),
                }
            }),
            _ => Err(ParseRouteError {
                path: trimmed.to_string(),
            }),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Gallery => "/gallery".to_string(),
            Self::Detail(key) => format!("/pokemon/{key}"),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::List => "List View",
            Self::Gallery => "Gallery View",
            Self::Detail(_) => "Detail",
        }
    }

    /// List and Gallery show a whole roster; Detail shows one record.
    pub fn needs_roster(&self) -> bool {
        matches!(self, Self::List | Self::Gallery)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
