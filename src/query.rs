use std::fmt;
use std::ops::{Range, RangeInclusive};
use std::str::FromStr;
use thiserror::Error;

use crate::{SafeSubscripts, SafeSubscriptsMut};

/// A single lookup or write against a list of elements.
///
/// Parsed from `2`, `1..3`, `0..=2`, `1=99` or `1=` (write with no value).
/// The value of a write is everything after the first `=`, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Element(i64),
    Range(Range<i64>),
    RangeInclusive(RangeInclusive<i64>),
    Set {
        position: i64,
        element: Option<String>,
    },
}

impl Query {
    pub fn apply(&self, elements: &mut Vec<String>) -> Outcome {
        log::debug!("Applying {} to {} elements", self, elements.len());

        let outcome = match self {
            Query::Element(position) => Outcome::Element(elements.safe_get(*position).cloned()),
            Query::Range(bounds) => {
                Outcome::Range(elements.safe_range(bounds.clone()).map(<[String]>::to_vec))
            }
            Query::RangeInclusive(bounds) => Outcome::Range(
                elements
                    .safe_range_inclusive(bounds.clone())
                    .map(<[String]>::to_vec),
            ),
            Query::Set {
                position,
                element: Some(element),
            } => Outcome::Replaced(elements.safe_replace(*position, element.clone())),
            Query::Set {
                position,
                element: None,
            } => {
                elements.safe_set(*position, None);
                Outcome::Replaced(None)
            }
        };

        if outcome.is_absent() {
            log::trace!("No element for {}", self);
        }

        outcome
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(QueryError::Empty);
        }

        // An `=` left of any `..` separates a position from the value
        if let Some((position, element)) = s
            .split_once('=')
            .filter(|(position, _)| !position.contains(".."))
        {
            let element = element.trim();
            Ok(Query::Set {
                position: parse_position(position)?,
                element: (!element.is_empty()).then(|| element.to_owned()),
            })
        } else if let Some((lower, upper)) = s.split_once("..=") {
            Ok(Query::RangeInclusive(
                parse_position(lower)?..=parse_position(upper)?,
            ))
        } else if let Some((lower, upper)) = s.split_once("..") {
            Ok(Query::Range(parse_position(lower)?..parse_position(upper)?))
        } else {
            Ok(Query::Element(parse_position(s)?))
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Element(position) => write!(f, "{}", position),
            Query::Range(bounds) => write!(f, "{}..{}", bounds.start, bounds.end),
            Query::RangeInclusive(bounds) => write!(f, "{}..={}", bounds.start(), bounds.end()),
            Query::Set { position, element } => {
                write!(f, "{}={}", position, element.as_deref().unwrap_or_default())
            }
        }
    }
}

fn parse_position(text: &str) -> Result<i64, QueryError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| QueryError::InvalidPosition(text.to_owned()))
}

/// Result of applying a [`Query`].
///
/// Ranges display as `[a, b]` with the elements joined verbatim, so elements
/// that themselves contain `, ` do not round-trip through the display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Element(Option<String>),
    Range(Option<Vec<String>>),
    /// Element that was overwritten, `None` if the write was ignored.
    Replaced(Option<String>),
}

impl Outcome {
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            Outcome::Element(None) | Outcome::Range(None) | Outcome::Replaced(None)
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Element(Some(element)) => write!(f, "{}", element),
            Outcome::Range(Some(elements)) => write!(f, "[{}]", elements.join(", ")),
            Outcome::Replaced(Some(previous)) => write!(f, "replaced {}", previous),
            Outcome::Element(None) | Outcome::Range(None) => write!(f, "none"),
            Outcome::Replaced(None) => write!(f, "ignored"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("empty query")]
    Empty,

    #[error("invalid position: {0:?}")]
    InvalidPosition(String),
}
