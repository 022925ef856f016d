use std::collections::BTreeMap;
use std::fmt;

use crate::common::{Error, ErrorKind, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    // Trailing `*`, matches the rest of the path.
    Rest,
}

// Path pattern such as `/academy/:slug/exams/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

// Parameters captured by a successful match.
pub type Params = BTreeMap<String, String>;

impl RoutePattern {
    pub(crate) fn parse(pattern: &str) -> Result<Self> {
        let invalid = |description: &str| {
            Error::from(ErrorKind::InvalidRoutePattern {
                pattern: pattern.to_owned(),
                description: description.to_owned(),
            })
        };

        if !pattern.starts_with('/') {
            return Err(invalid("pattern must start with '/'"));
        }

        let parts: Vec<&str> = split_segments(pattern).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (i, part) in parts.iter().enumerate() {
            let segment = if *part == "*" {
                if i + 1 != parts.len() {
                    return Err(invalid("'*' is only allowed as the last segment"));
                }
                Segment::Rest
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter name is empty"));
                }
                Segment::Param(name.to_owned())
            } else {
                Segment::Static((*part).to_owned())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: pattern.to_owned(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    // Match a request path. Query string, fragment and trailing slash are ignored.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut params = Params::new();
        let mut parts = split_segments(strip_query(path));

        for segment in &self.segments {
            match segment {
                Segment::Rest => {
                    let rest = parts.by_ref().collect::<Vec<_>>().join("/");
                    params.insert("*".to_owned(), rest);
                    return Some(params);
                }
                Segment::Static(expected) => {
                    if parts.next()? != expected.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), parts.next()?.to_owned());
                }
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.raw)
    }
}

fn strip_query(path: &str) -> &str {
    path.split(|c: char| c == '?' || c == '#').next().unwrap_or(path)
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
