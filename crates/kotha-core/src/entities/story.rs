//! Story entity - an anonymous narrative review of a company

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::value_objects::CounterPair;

/// Overall tone of a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoryCategory {
    Positive,
    Negative,
    Mixed,
}

impl StoryCategory {
    /// Stable string form used in the `stories.category` column
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for StoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a category from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown story category")]
pub struct CategoryParseError;

impl FromStr for StoryCategory {
    type Err = CategoryParseError;

    /// Case-insensitive; the original clients send both "positive" and "Positive"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "mixed" => Ok(Self::Mixed),
            _ => Err(CategoryParseError),
        }
    }
}

/// Story entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: Uuid,
    /// Author (anonymous user)
    pub user_id: Uuid,
    pub title: String,
    pub company: String,
    pub designation: Option<String>,
    pub content: String,
    pub category: StoryCategory,
    pub likes: i64,
    pub dislikes: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Story {
    /// Create a new Story with zeroed counters
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        title: String,
        company: String,
        content: String,
        category: StoryCategory,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            title,
            company,
            designation: None,
            content,
            category,
            likes: 0,
            dislikes: 0,
            comment_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the author's designation
    pub fn with_designation(mut self, designation: Option<String>) -> Self {
        self.designation = designation;
        self
    }

    /// Check if a user authored this story
    #[inline]
    pub fn is_author(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// The story's reaction counters
    #[inline]
    pub fn counters(&self) -> CounterPair {
        CounterPair::new(self.likes, self.dislikes)
    }

    /// Apply an edit, bumping `updated_at`
    pub fn edit(
        &mut self,
        title: String,
        company: String,
        content: String,
        category: StoryCategory,
    ) {
        self.title = title;
        self.company = company;
        self.content = content;
        self.category = category;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(user_id: Uuid) -> Story {
        Story::new(
            Uuid::new_v4(),
            user_id,
            "Great first job".to_string(),
            "Acme Corp".to_string(),
            "Learned a lot.".to_string(),
            StoryCategory::Positive,
        )
    }

    #[test]
    fn test_new_story_has_zero_counters() {
        let s = story(Uuid::new_v4());
        assert_eq!(s.counters(), CounterPair::new(0, 0));
        assert_eq!(s.comment_count, 0);
    }

    #[test]
    fn test_is_author() {
        let author = Uuid::new_v4();
        let s = story(author);
        assert!(s.is_author(author));
        assert!(!s.is_author(Uuid::new_v4()));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("positive".parse::<StoryCategory>().unwrap(), StoryCategory::Positive);
        assert_eq!("Mixed".parse::<StoryCategory>().unwrap(), StoryCategory::Mixed);
        assert_eq!("NEGATIVE".parse::<StoryCategory>().unwrap(), StoryCategory::Negative);
        assert!("hostile".parse::<StoryCategory>().is_err());
    }

    #[test]
    fn test_edit_bumps_updated_at() {
        let mut s = story(Uuid::new_v4());
        let before = s.updated_at;
        s.edit(
            "New title".to_string(),
            "Acme Corp".to_string(),
            "Revised.".to_string(),
            StoryCategory::Mixed,
        );
        assert!(s.updated_at >= before);
        assert_eq!(s.category, StoryCategory::Mixed);
    }
}
