/**
 * Content Models
 * 
 * Row types and input payloads for the portfolio content: projects, blog
 * posts, skills, work history, and the single-row profile (biography).
 * 
 * Row types derive `sqlx::FromRow` and serialize straight to the public
 * API. Input types are the write payloads accepted by the admin handlers.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio project
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: uuid::Uuid,
    pub title: String,
    /// URL-safe unique identifier used in public routes
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub tags: Vec<String>,
    pub sort_order: i32,
    /// Unpublished projects are visible to the admin area only
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Write payload for creating or replacing a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub published: bool,
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: uuid::Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Markdown body
    pub body: String,
    pub cover_image_url: Option<String>,
    pub published: bool,
    /// Set when the post first transitions to published
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Write payload for creating or replacing a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub body: String,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub published: bool,
}

/// A skill entry
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: uuid::Uuid,
    pub name: String,
    /// Grouping shown on the public page (e.g. "Languages", "Tooling")
    pub category: String,
    /// Self-assessed proficiency, 1-5
    pub level: i16,
    pub sort_order: i32,
}

/// Write payload for creating or replacing a skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillInput {
    pub name: String,
    pub category: String,
    pub level: i16,
    #[serde(default)]
    pub sort_order: i32,
}

/// A work-history entry
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Experience {
    pub id: uuid::Uuid,
    pub company: String,
    pub role: String,
    pub summary: String,
    pub start_date: NaiveDate,
    /// None for a current position
    pub end_date: Option<NaiveDate>,
    pub sort_order: i32,
}

/// Write payload for creating or replacing an experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceInput {
    pub company: String,
    pub role: String,
    pub summary: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub sort_order: i32,
}

/// The single-row biography record shown on the public site
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: uuid::Uuid,
    pub display_name: String,
    pub headline: String,
    /// Markdown biography
    pub bio: String,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub contact_email: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Write payload for updating the profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub display_name: String,
    pub headline: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub contact_email: Option<String>,
}
