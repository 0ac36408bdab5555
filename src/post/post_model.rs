use crate::utils::error::CustomError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Post {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A post that passed validation and is waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Parses `body` as a JSON object. Arrays, scalars and malformed JSON yield
/// `None`.
fn parse_object(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice(body).ok()? {
        Value::Object(fields) => Some(fields),
        _ => None,
    }
}

/// Takes `name` out of `fields`. A present value must be a string.
fn take_string(fields: &mut Map<String, Value>, name: &str) -> Result<Option<String>, CustomError> {
    match fields.remove(name) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(CustomError::InvalidBody),
    }
}

/// First value for `key`; later repeats are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

#[derive(Debug, Default)]
pub struct CreatePostRequest {
    fields: Map<String, Value>,
}

impl CreatePostRequest {
    /// An unreadable body counts as one with no fields at all.
    pub fn from_body(body: &[u8]) -> Self {
        CreatePostRequest {
            fields: parse_object(body).unwrap_or_default(),
        }
    }

    /// Missing keys are reported first; a present key with a non-string
    /// value is an invalid body.
    pub fn validate(mut self) -> Result<NewPost, CustomError> {
        let missing: Vec<&'static str> = ["title", "content"]
            .into_iter()
            .filter(|name| !self.fields.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(CustomError::MissingFields(missing));
        }

        let title = take_string(&mut self.fields, "title")?.ok_or(CustomError::InvalidBody)?;
        let content = take_string(&mut self.fields, "content")?.ok_or(CustomError::InvalidBody)?;
        Ok(NewPost { title, content })
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, CustomError> {
        let mut fields = parse_object(body).ok_or(CustomError::InvalidBody)?;

        Ok(UpdatePostRequest {
            title: take_string(&mut fields, "title")?,
            content: take_string(&mut fields, "content")?,
        })
    }

    /// Overwrites only the fields this request supplies.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    fn key(self, post: &Post) -> String {
        match self {
            SortField::Title => post.title.to_lowercase(),
            SortField::Content => post.content.to_lowercase(),
        }
    }
}

impl FromStr for SortField {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            _ => Err(CustomError::InvalidSortField),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(CustomError::InvalidDirection),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl PostOrder {
    /// Case-insensitive comparison on the chosen field. Equal keys compare
    /// equal in both directions so a stable sort keeps insertion order.
    pub fn compare(&self, a: &Post, b: &Post) -> Ordering {
        let ordering = self.field.key(a).cmp(&self.field.key(b));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ListPostsQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl ListPostsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        ListPostsQuery {
            sort: first_value(pairs, "sort"),
            direction: first_value(pairs, "direction"),
        }
    }

    /// `None` means insertion order. `sort` is checked before `direction`.
    pub fn into_order(self) -> Result<Option<PostOrder>, CustomError> {
        let field = match self.sort.as_deref() {
            None | Some("") => None,
            Some(sort) => Some(sort.parse::<SortField>()?),
        };
        let direction = match self.direction.as_deref() {
            None => SortDirection::default(),
            Some(direction) => direction.parse()?,
        };

        Ok(field.map(|field| PostOrder { field, direction }))
    }
}

#[derive(Debug, Default)]
pub struct SearchPostsQuery {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl SearchPostsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        SearchPostsQuery {
            title: first_value(pairs, "title"),
            content: first_value(pairs, "content"),
        }
    }

    pub fn into_filter(self) -> PostFilter {
        PostFilter {
            title: self.title.unwrap_or_default().to_lowercase(),
            content: self.content.unwrap_or_default().to_lowercase(),
        }
    }
}

/// Lower-cased substring filters; an empty filter matches everything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PostFilter {
    title: String,
    content: String,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        let matches_title =
            self.title.is_empty() || post.title.to_lowercase().contains(&self.title);
        let matches_content =
            self.content.is_empty() || post.content.to_lowercase().contains(&self.content);

        matches_title && matches_content
    }
}
