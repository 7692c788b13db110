use crate::error::{RecordError, RecordKind, TagListError};
use crate::tokenizer::normalize;
use crate::QueryId;
use serde::{Deserialize, Serialize};
use std::iter::Peekable;
use std::str::CharIndices;

/// Tags arrive either as a real JSON array or as a string holding a literal
/// list, e.g. `"['linear-algebra', 'matrices']"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagSource {
    List(Vec<String>),
    Text(String),
}

impl TagSource {
    pub fn tags(&self) -> Result<Vec<String>, TagListError> {
        match self {
            TagSource::List(tags) => Ok(tags.clone()),
            TagSource::Text(text) => parse_tag_list(text),
        }
    }
}

impl From<Vec<String>> for TagSource {
    fn from(tags: Vec<String>) -> Self { TagSource::List(tags) }
}

impl From<&[&str]> for TagSource {
    fn from(tags: &[&str]) -> Self { TagSource::List(tags.iter().map(|t| t.to_string()).collect()) }
}

/// A topic record: the title is the conjunctive part, tags the disjunctive one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Query {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: Option<QueryId>,
    #[serde(rename = "Title", alias = "title", default)]
    pub title: Option<String>,
    #[serde(rename = "Tags", alias = "tags", default)]
    pub tags: Option<TagSource>,
}

/// A query reduced to normalized terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub id: QueryId,
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

impl Query {
    pub fn new(id: impl Into<QueryId>, title: impl Into<String>, tags: impl Into<TagSource>) -> Self {
        Self { id: Some(id.into()), title: Some(title.into()), tags: Some(tags.into()) }
    }

    /// Normalize title and tags. Tags are joined with spaces before
    /// normalizing, so a multi-word tag yields several terms.
    pub fn parse(&self) -> Result<ParsedQuery, RecordError> {
        let id = match &self.id {
            Some(id) if !id.is_blank() => id.clone(),
            _ => return Err(missing("<unknown>".into(), "Id")),
        };
        let title = self.title.as_deref().ok_or_else(|| missing(id.to_string(), "Title"))?;
        let tags = match &self.tags {
            None => return Err(missing(id.to_string(), "Tags")),
            Some(source) => source.tags().map_err(|error| {
                tracing::debug!(query = %id, %error, "unreadable tag list");
                missing(id.to_string(), "Tags")
            })?,
        };
        Ok(ParsedQuery { required: normalize(title), optional: normalize(&tags.join(" ")), id })
    }
}

fn missing(id: String, field: &'static str) -> RecordError {
    RecordError::MissingField { kind: RecordKind::Query, id, field }
}

/// Parse a bracketed list of quoted strings: `['a', "b",]`. Only string
/// literals are accepted; nothing in the text is ever evaluated.
pub fn parse_tag_list(text: &str) -> Result<Vec<String>, TagListError> {
    let trimmed = text.trim_start();
    let offset = text.len() - trimmed.len() + 1;
    let inner = trimmed
        .trim_end()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or(TagListError::NotAList)?;

    let mut tags = Vec::new();
    let mut chars = inner.char_indices().peekable();
    let mut expect_item = true;
    loop {
        while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
        let Some((pos, c)) = chars.next() else { break };
        match c {
            '\'' | '"' if expect_item => {
                tags.push(read_literal(&mut chars, c, offset + pos)?);
                expect_item = false;
            }
            ',' if !expect_item => expect_item = true,
            found => return Err(TagListError::Unexpected { pos: offset + pos, found }),
        }
    }
    Ok(tags)
}

fn read_literal(chars: &mut Peekable<CharIndices<'_>>, quote: char, start: usize) -> Result<String, TagListError> {
    let mut out = String::new();
    while let Some((_, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, 'n')) => out.push('\n'),
                Some((_, 't')) => out.push('\t'),
                Some((_, e @ ('\\' | '\'' | '"'))) => out.push(e),
                Some((_, e)) => {
                    out.push('\\');
                    out.push(e);
                }
                None => break,
            },
            c if c == quote => return Ok(out),
            c => out.push(c),
        }
    }
    Err(TagListError::Unterminated(start))
}
