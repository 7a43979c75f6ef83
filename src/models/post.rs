//! Blog post models and client-side form rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Id, User};
use crate::error::ValidationError;

/// A post as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub user_id: Option<Id>,
}

impl Post {
    /// The user-editable part of the post.
    pub fn fields(&self) -> PostFields {
        PostFields {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            category: self.category.clone(),
        }
    }

    /// Whether `user` is the author of record.
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.user_id.as_ref() == Some(&user.id)
    }
}

/// The fields a user fills in when creating or editing a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFields {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
}

impl PostFields {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            category: category.into(),
        }
    }

    /// Check the form rules in field order. Returns the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::required("title", "Title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::required(
                "description",
                "Description is required",
            ));
        }
        if self.image_url.trim().is_empty() {
            return Err(ValidationError::required("imageUrl", "Image URL is required"));
        }
        if !self.image_url.starts_with("http") {
            return Err(ValidationError::new("imageUrl", "Must be a valid URL"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::required("category", "Category is required"));
        }
        Ok(())
    }

    /// Overlay the values present in `patch`.
    pub fn apply(mut self, patch: PostPatch) -> Self {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        self
    }
}

/// A partial edit; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
    }
}

/// Body of `POST /posts` and `PUT /posts/:id`: the form fields stamped with
/// the author's identity and the client's current date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    #[serde(flatten)]
    pub fields: PostFields,
    pub user_id: Id,
    pub author: String,
    pub date: String,
}

impl PostPayload {
    pub fn enrich(fields: PostFields, user: &User, date: impl Into<String>) -> Self {
        Self {
            fields,
            user_id: user.id.clone(),
            author: user.name.clone(),
            date: date.into(),
        }
    }
}

/// Format a date the way the web client stamps posts (`M/D/YYYY`).
pub fn format_client_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Today's date in local time, formatted for a post stamp.
pub fn client_date() -> String {
    format_client_date(chrono::Local::now().date_naive())
}
