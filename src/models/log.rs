use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Thought,
    Airdrop,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Thought => "thought",
            LogKind::Airdrop => "airdrop",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LogKind::Thought => "Thought",
            LogKind::Airdrop => "Airdrop",
        }
    }
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for LogKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "thought" => Ok(LogKind::Thought),
            "airdrop" => Ok(LogKind::Airdrop),
            _ => Err(anyhow::anyhow!("Unknown log kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub kind: LogKind,
    pub body: String,
    pub created_at: String,
}
