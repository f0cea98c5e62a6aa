//! Song text templates.
//!
//! Templates use `{field}` placeholders with the fields `album`, `title`,
//! `artist` and `trackNumber`. Doubled braces produce literal braces. A
//! placeholder may carry a spec after `:` with an optional alignment
//! (`<`, `>`, `^`), a minimum width and a `.N` maximum length, e.g.
//! `{title:<20.20}`. Widths and lengths above [`MAX_FIELD_WIDTH`] are
//! rejected when the template is parsed.

use regex::Regex;

use super::ModuleError;
use crate::services::mpris::Metadata;

const TOKEN_PATTERN: &str = r"\{\{|\}\}|\{([^{}]*)\}|[{}]";
const SPEC_PATTERN: &str = r"^([<>^])?(\d+)?(?:\.(\d+))?$";

/// Largest width or maximum length a placeholder may ask for
pub const MAX_FIELD_WIDTH: usize = 1024;

/// Metadata field a placeholder refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `{album}`
    Album,
    /// `{title}`
    Title,
    /// `{artist}`
    Artist,
    /// `{trackNumber}`
    TrackNumber,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "album" => Some(Self::Album),
            "title" => Some(Self::Title),
            "artist" => Some(Self::Artist),
            "trackNumber" => Some(Self::TrackNumber),
            _ => None,
        }
    }

    fn value(self, metadata: &Metadata) -> &str {
        match self {
            Self::Album => &metadata.album,
            Self::Title => &metadata.title,
            Self::Artist => &metadata.artist,
            Self::TrackNumber => &metadata.track_number,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Align {
    #[default]
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct FieldSpec {
    align: Align,
    width: Option<usize>,
    precision: Option<usize>,
}

impl FieldSpec {
    fn apply(&self, value: &str) -> String {
        let truncated: String = match self.precision {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };

        let len = truncated.chars().count();
        let Some(width) = self.width.filter(|width| *width > len) else {
            return truncated;
        };

        let fill = width - len;
        let (before, after) = match self.align {
            Align::Left => (0, fill),
            Align::Right => (fill, 0),
            Align::Center => (fill / 2, fill - fill / 2),
        };

        format!("{}{truncated}{}", " ".repeat(before), " ".repeat(after))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field, FieldSpec),
}

/// A parsed song format template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse and validate a template string
    ///
    /// # Errors
    /// Returns a `ModuleError` for unknown or empty placeholders, stray
    /// braces, and format specs that cannot be parsed
    pub fn parse(template: &str) -> Result<Self, ModuleError> {
        let tokens = Regex::new(TOKEN_PATTERN)?;
        let specs = Regex::new(SPEC_PATTERN)?;

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last_end = 0;

        for captures in tokens.captures_iter(template) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            literal.push_str(&template[last_end..whole.start()]);
            last_end = whole.end();

            match whole.as_str() {
                "{{" => literal.push('{'),
                "}}" => literal.push('}'),
                "{" | "}" => {
                    return Err(ModuleError::UnbalancedBrace {
                        brace: whole.as_str().chars().next().unwrap_or('{'),
                        position: whole.start(),
                    });
                }
                _ => {
                    let inner = captures.get(1).map_or("", |m| m.as_str());
                    let (field, spec) = parse_placeholder(inner, whole.start(), &specs)?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field, spec));
                }
            }
        }

        literal.push_str(&template[last_end..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Substitute `metadata` into the template
    pub fn render(&self, metadata: &Metadata) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.clone(),
                Segment::Field(field, spec) => spec.apply(field.value(metadata)),
            })
            .collect()
    }
}

fn parse_placeholder(
    inner: &str,
    position: usize,
    specs: &Regex,
) -> Result<(Field, FieldSpec), ModuleError> {
    let (name, spec) = match inner.split_once(':') {
        Some((name, spec)) => (name, Some(spec)),
        None => (inner, None),
    };

    if name.is_empty() {
        return Err(ModuleError::EmptyPlaceholder { position });
    }

    let field = Field::from_name(name).ok_or_else(|| ModuleError::UnknownPlaceholder {
        name: name.to_string(),
    })?;

    let Some(spec) = spec else {
        return Ok((field, FieldSpec::default()));
    };

    let invalid = || ModuleError::InvalidFormatSpec {
        name: name.to_string(),
        spec: spec.to_string(),
    };

    let captures = specs.captures(spec).ok_or_else(invalid)?;
    let align = match captures.get(1).map(|m| m.as_str()) {
        Some(">") => Align::Right,
        Some("^") => Align::Center,
        _ => Align::Left,
    };
    let number = |index: usize| -> Result<Option<usize>, ModuleError> {
        captures
            .get(index)
            .map(|m| {
                m.as_str()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n <= MAX_FIELD_WIDTH)
                    .ok_or_else(invalid)
            })
            .transpose()
    };

    Ok((
        field,
        FieldSpec {
            align,
            width: number(2)?,
            precision: number(3)?,
        },
    ))
}
