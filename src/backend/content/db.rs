//! Database operations for portfolio content
//!
//! Plain sqlx queries for projects, posts, skills, experience, and the
//! profile row. Public listings exclude unpublished rows; the admin
//! variants see everything.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::content::models::{
    Experience, ExperienceInput, Post, PostInput, Profile, ProfileInput, Project, ProjectInput,
    Skill, SkillInput,
};

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// List projects, newest sort_order first
pub async fn list_projects(
    pool: &PgPool,
    include_unpublished: bool,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT id, title, slug, summary, description, image_url, repo_url, live_url,
               tags, sort_order, published, created_at, updated_at
        FROM projects
        WHERE published OR $1
        ORDER BY sort_order ASC, created_at DESC
        "#,
    )
    .bind(include_unpublished)
    .fetch_all(pool)
    .await
}

/// Get a single project by its slug
pub async fn get_project_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT id, title, slug, summary, description, image_url, repo_url, live_url,
               tags, sort_order, published, created_at, updated_at
        FROM projects
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

/// Insert a new project
pub async fn insert_project(
    pool: &PgPool,
    input: &ProjectInput,
) -> Result<Project, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (id, title, slug, summary, description, image_url, repo_url,
                              live_url, tags, sort_order, published, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
        RETURNING id, title, slug, summary, description, image_url, repo_url, live_url,
                  tags, sort_order, published, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.summary)
    .bind(&input.description)
    .bind(&input.image_url)
    .bind(&input.repo_url)
    .bind(&input.live_url)
    .bind(&input.tags)
    .bind(input.sort_order)
    .bind(input.published)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Replace a project's fields
pub async fn update_project(
    pool: &PgPool,
    id: Uuid,
    input: &ProjectInput,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
        SET title = $1, slug = $2, summary = $3, description = $4, image_url = $5,
            repo_url = $6, live_url = $7, tags = $8, sort_order = $9, published = $10,
            updated_at = $11
        WHERE id = $12
        RETURNING id, title, slug, summary, description, image_url, repo_url, live_url,
                  tags, sort_order, published, created_at, updated_at
        "#,
    )
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.summary)
    .bind(&input.description)
    .bind(&input.image_url)
    .bind(&input.repo_url)
    .bind(&input.live_url)
    .bind(&input.tags)
    .bind(input.sort_order)
    .bind(input.published)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a project; returns whether a row was removed
pub async fn delete_project(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// List posts, newest first. Public listings see published posts only.
pub async fn list_posts(
    pool: &PgPool,
    include_unpublished: bool,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, slug, excerpt, body, cover_image_url, published,
               published_at, created_at, updated_at
        FROM posts
        WHERE published OR $1
        ORDER BY COALESCE(published_at, created_at) DESC
        "#,
    )
    .bind(include_unpublished)
    .fetch_all(pool)
    .await
}

/// Get a single post by its slug
pub async fn get_post_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, slug, excerpt, body, cover_image_url, published,
               published_at, created_at, updated_at
        FROM posts
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await
}

/// Insert a new post; `published_at` is stamped when it starts published
pub async fn insert_post(pool: &PgPool, input: &PostInput) -> Result<Post, sqlx::Error> {
    let now = Utc::now();
    let published_at = input.published.then_some(now);
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, slug, excerpt, body, cover_image_url, published,
                           published_at, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
        RETURNING id, title, slug, excerpt, body, cover_image_url, published,
                  published_at, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.excerpt)
    .bind(&input.body)
    .bind(&input.cover_image_url)
    .bind(input.published)
    .bind(published_at)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Replace a post's fields; `published_at` is stamped on the first
/// transition to published and kept thereafter
pub async fn update_post(
    pool: &PgPool,
    id: Uuid,
    input: &PostInput,
) -> Result<Option<Post>, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, slug = $2, excerpt = $3, body = $4, cover_image_url = $5,
            published = $6,
            published_at = CASE WHEN $6 THEN COALESCE(published_at, $7) ELSE published_at END,
            updated_at = $7
        WHERE id = $8
        RETURNING id, title, slug, excerpt, body, cover_image_url, published,
                  published_at, created_at, updated_at
        "#,
    )
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.excerpt)
    .bind(&input.body)
    .bind(&input.cover_image_url)
    .bind(input.published)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a post; returns whether a row was removed
pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// List all skills grouped by category ordering
pub async fn list_skills(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>(
        r#"
        SELECT id, name, category, level, sort_order
        FROM skills
        ORDER BY category ASC, sort_order ASC, name ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Insert a new skill
pub async fn insert_skill(pool: &PgPool, input: &SkillInput) -> Result<Skill, sqlx::Error> {
    sqlx::query_as::<_, Skill>(
        r#"
        INSERT INTO skills (id, name, category, level, sort_order)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, category, level, sort_order
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&input.name)
    .bind(&input.category)
    .bind(input.level)
    .bind(input.sort_order)
    .fetch_one(pool)
    .await
}

/// Replace a skill's fields
pub async fn update_skill(
    pool: &PgPool,
    id: Uuid,
    input: &SkillInput,
) -> Result<Option<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>(
        r#"
        UPDATE skills
        SET name = $1, category = $2, level = $3, sort_order = $4
        WHERE id = $5
        RETURNING id, name, category, level, sort_order
        "#,
    )
    .bind(&input.name)
    .bind(&input.category)
    .bind(input.level)
    .bind(input.sort_order)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a skill; returns whether a row was removed
pub async fn delete_skill(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM skills WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

/// List work history, most recent first
pub async fn list_experience(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
    sqlx::query_as::<_, Experience>(
        r#"
        SELECT id, company, role, summary, start_date, end_date, sort_order
        FROM experience
        ORDER BY sort_order ASC, start_date DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Insert a new experience entry
pub async fn insert_experience(
    pool: &PgPool,
    input: &ExperienceInput,
) -> Result<Experience, sqlx::Error> {
    sqlx::query_as::<_, Experience>(
        r#"
        INSERT INTO experience (id, company, role, summary, start_date, end_date, sort_order)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, company, role, summary, start_date, end_date, sort_order
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&input.company)
    .bind(&input.role)
    .bind(&input.summary)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(input.sort_order)
    .fetch_one(pool)
    .await
}

/// Replace an experience entry's fields
pub async fn update_experience(
    pool: &PgPool,
    id: Uuid,
    input: &ExperienceInput,
) -> Result<Option<Experience>, sqlx::Error> {
    sqlx::query_as::<_, Experience>(
        r#"
        UPDATE experience
        SET company = $1, role = $2, summary = $3, start_date = $4, end_date = $5,
            sort_order = $6
        WHERE id = $7
        RETURNING id, company, role, summary, start_date, end_date, sort_order
        "#,
    )
    .bind(&input.company)
    .bind(&input.role)
    .bind(&input.summary)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(input.sort_order)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete an experience entry; returns whether a row was removed
pub async fn delete_experience(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM experience WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Get the profile row, if one has been created yet
pub async fn get_profile(pool: &PgPool) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        SELECT id, display_name, headline, bio, avatar_url, location,
               github_url, linkedin_url, contact_email, updated_at
        FROM profile
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await
}

/// Create or replace the single profile row
pub async fn upsert_profile(
    pool: &PgPool,
    input: &ProfileInput,
) -> Result<Profile, sqlx::Error> {
    // The table carries a singleton flag with a unique index, so the
    // upsert always targets the same row.
    sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profile (id, singleton, display_name, headline, bio, avatar_url,
                             location, github_url, linkedin_url, contact_email, updated_at)
        VALUES ($1, TRUE, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (singleton)
        DO UPDATE SET display_name = EXCLUDED.display_name,
                      headline = EXCLUDED.headline,
                      bio = EXCLUDED.bio,
                      avatar_url = EXCLUDED.avatar_url,
                      location = EXCLUDED.location,
                      github_url = EXCLUDED.github_url,
                      linkedin_url = EXCLUDED.linkedin_url,
                      contact_email = EXCLUDED.contact_email,
                      updated_at = EXCLUDED.updated_at
        RETURNING id, display_name, headline, bio, avatar_url, location,
                  github_url, linkedin_url, contact_email, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&input.display_name)
    .bind(&input.headline)
    .bind(&input.bio)
    .bind(&input.avatar_url)
    .bind(&input.location)
    .bind(&input.github_url)
    .bind(&input.linkedin_url)
    .bind(&input.contact_email)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}
