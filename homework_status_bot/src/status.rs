use std::{fmt::Display, str::FromStr};

use serde_json::Value;

use crate::{error::excerpt, Error, Result};

/// Review state of a homework, as the API reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Code used by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human readable sentence for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Review complete: the reviewer liked everything. Hooray!",
            Self::Reviewing => "The work has been taken for review by the reviewer.",
            Self::Rejected => "Review complete: the reviewer has comments.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

impl Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn one homework record into the message to send about it.
///
/// The name is taken from `homework_name`, or `name` if that's absent.
///
/// # Errors
/// Errors if the name or status is missing or isn't a string, or if the
/// status is not one we know.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = homework
        .get("homework_name")
        .or_else(|| homework.get("name"))
        .ok_or(Error::MissingField("name"))?;
    let status = homework.get("status").ok_or(Error::MissingField("status"))?;

    let Value::String(name) = name else {
        return Err(Error::Shape(format!(
            "homework name is not a string: {}",
            excerpt(&name.to_string())
        )));
    };
    let Value::String(status) = status else {
        return Err(Error::Shape(format!(
            "homework status is not a string: {}",
            excerpt(&status.to_string())
        )));
    };

    let status: HomeworkStatus = status.parse().inspect_err(|e| log::error!("{e}"))?;
    log::debug!("Homework \"{name}\" is now {status}");
    let verdict = status.verdict();

    let mut message = format!("Review status changed for \"{name}\". {verdict}");
    if !verdict.ends_with(['.', '!', '?']) {
        message.push('.');
    }
    Ok(message)
}
