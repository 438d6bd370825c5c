//! URL path patterns with positional `:param` segments.
//!
//! Matching is segment-wise and case-sensitive. When several patterns match
//! the same path, the one with the higher [`PathPattern::rank`] wins, so a
//! static segment always beats a parameter at the same position.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

/// One segment of a parsed pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Static(&'static str),
    Param(&'static str),
}

const STATIC_SCORE: u8 = 3;
const PARAM_SCORE: u8 = 2;

impl Segment {
    fn score(self) -> u8 {
        match self {
            Self::Static(_) => STATIC_SCORE,
            Self::Param(_) => PARAM_SCORE,
        }
    }
}

/// A parsed route pattern such as `/products/:id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    source: &'static str,
    segments: Vec<Segment>,
}

/// Parameters extracted from a matched path, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(&'static str, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PathPattern {
    /// Parse pattern text. Segments starting with `:` are parameters.
    ///
    /// Parsing never fails; malformed patterns (missing leading slash, empty
    /// parameter names) are reported by `RouteTable::validate`.
    pub fn parse(source: &'static str) -> Self {
        let segments: Vec<Segment> = split_segments(source)
            .map(|segs| {
                segs.into_iter()
                    .map(|seg| match seg.strip_prefix(':') {
                        Some(name) => Segment::Param(name),
                        None => Segment::Static(seg),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { source, segments }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of all parameter segments, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Param(name) => Some(*name),
            Segment::Static(_) => None,
        })
    }

    /// Per-segment specificity scores, compared lexicographically.
    pub fn rank(&self) -> Vec<u8> {
        self.segments.iter().map(|seg| seg.score()).collect()
    }

    /// Match a bare path (no query or fragment) against this pattern.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts = split_segments(path)?;
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (seg, part) in self.segments.iter().zip(parts) {
            match seg {
                Segment::Static(expected) => {
                    if *expected != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.push((*name, decode_segment(part)));
                }
            }
        }
        Some(RouteParams(params))
    }
}

/// Split an absolute path into segments, ignoring one trailing slash.
///
/// Returns `None` for relative paths and for paths starting with an empty
/// segment (`//...`). `/` yields no segments.
fn split_segments(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    if rest.starts_with('/') {
        return None;
    }
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return Some(Vec::new());
    }
    Some(rest.split('/').collect())
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
}
