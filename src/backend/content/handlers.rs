/**
 * Content HTTP Handlers
 * 
 * Handlers for the public portfolio API and the admin CRUD surface.
 * 
 * Public handlers see published content only. Admin handlers run behind
 * the route guard (mounted under `/api/admin`) and additionally take the
 * `AdminUser` extractor, so wiring one outside the guarded prefix fails
 * with 401 instead of silently exposing a mutation.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::content::db;
use crate::backend::content::models::{
    Experience, ExperienceInput, Post, PostInput, Profile, ProfileInput, Project, ProjectInput,
    Skill, SkillInput,
};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AdminUser;

/// Map a slug-uniqueness violation to a client error, everything else to 500
fn map_insert_error(e: sqlx::Error, what: &str) -> BackendError {
    if e.as_database_error()
        .is_some_and(|d| d.is_unique_violation())
    {
        BackendError::validation(format!("{what} slug already in use"))
    } else {
        tracing::error!("Database error writing {}: {:?}", what, e);
        BackendError::Database(e)
    }
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/projects - published projects
pub async fn list_projects(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Project>>, BackendError> {
    Ok(Json(db::list_projects(&pool, false).await?))
}

/// GET /api/projects/{slug} - a single published project
pub async fn get_project(
    State(pool): State<PgPool>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, BackendError> {
    let project = db::get_project_by_slug(&pool, &slug)
        .await?
        .filter(|p| p.published)
        .ok_or_else(|| BackendError::not_found("no such project"))?;
    Ok(Json(project))
}

/// GET /api/posts - published posts
pub async fn list_posts(State(pool): State<PgPool>) -> Result<Json<Vec<Post>>, BackendError> {
    Ok(Json(db::list_posts(&pool, false).await?))
}

/// GET /api/posts/{slug} - a single published post
pub async fn get_post(
    State(pool): State<PgPool>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, BackendError> {
    let post = db::get_post_by_slug(&pool, &slug)
        .await?
        .filter(|p| p.published)
        .ok_or_else(|| BackendError::not_found("no such post"))?;
    Ok(Json(post))
}

/// GET /api/skills
pub async fn list_skills(State(pool): State<PgPool>) -> Result<Json<Vec<Skill>>, BackendError> {
    Ok(Json(db::list_skills(&pool).await?))
}

/// GET /api/experience
pub async fn list_experience(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Experience>>, BackendError> {
    Ok(Json(db::list_experience(&pool).await?))
}

/// GET /api/profile
pub async fn get_profile(State(pool): State<PgPool>) -> Result<Json<Profile>, BackendError> {
    let profile = db::get_profile(&pool)
        .await?
        .ok_or_else(|| BackendError::not_found("profile not configured"))?;
    Ok(Json(profile))
}

// ---------------------------------------------------------------------------
// Admin handlers (behind the route guard)
// ---------------------------------------------------------------------------

/// GET /api/admin/projects - all projects, unpublished included
pub async fn admin_list_projects(
    _admin: AdminUser,
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Project>>, BackendError> {
    Ok(Json(db::list_projects(&pool, true).await?))
}

/// POST /api/admin/projects
pub async fn create_project(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Json(input): Json<ProjectInput>,
) -> Result<(StatusCode, Json<Project>), BackendError> {
    validate_slug(&input.slug)?;
    let project = db::insert_project(&pool, &input)
        .await
        .map_err(|e| map_insert_error(e, "project"))?;
    tracing::info!("Project created: {}", project.slug);
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/admin/projects/{id}
pub async fn replace_project(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(input): Json<ProjectInput>,
) -> Result<Json<Project>, BackendError> {
    validate_slug(&input.slug)?;
    let project = db::update_project(&pool, id, &input)
        .await
        .map_err(|e| map_insert_error(e, "project"))?
        .ok_or_else(|| BackendError::not_found("no such project"))?;
    Ok(Json(project))
}

/// DELETE /api/admin/projects/{id}
pub async fn remove_project(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    if db::delete_project(&pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BackendError::not_found("no such project"))
    }
}

/// GET /api/admin/posts - all posts, drafts included
pub async fn admin_list_posts(
    _admin: AdminUser,
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Post>>, BackendError> {
    Ok(Json(db::list_posts(&pool, true).await?))
}

/// POST /api/admin/posts
pub async fn create_post(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Json(input): Json<PostInput>,
) -> Result<(StatusCode, Json<Post>), BackendError> {
    validate_slug(&input.slug)?;
    let post = db::insert_post(&pool, &input)
        .await
        .map_err(|e| map_insert_error(e, "post"))?;
    tracing::info!("Post created: {}", post.slug);
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/admin/posts/{id}
pub async fn replace_post(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, BackendError> {
    validate_slug(&input.slug)?;
    let post = db::update_post(&pool, id, &input)
        .await
        .map_err(|e| map_insert_error(e, "post"))?
        .ok_or_else(|| BackendError::not_found("no such post"))?;
    Ok(Json(post))
}

/// DELETE /api/admin/posts/{id}
pub async fn remove_post(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    if db::delete_post(&pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BackendError::not_found("no such post"))
    }
}

/// POST /api/admin/skills
pub async fn create_skill(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Json(input): Json<SkillInput>,
) -> Result<(StatusCode, Json<Skill>), BackendError> {
    validate_level(input.level)?;
    let skill = db::insert_skill(&pool, &input).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// PUT /api/admin/skills/{id}
pub async fn replace_skill(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(input): Json<SkillInput>,
) -> Result<Json<Skill>, BackendError> {
    validate_level(input.level)?;
    let skill = db::update_skill(&pool, id, &input)
        .await?
        .ok_or_else(|| BackendError::not_found("no such skill"))?;
    Ok(Json(skill))
}

/// DELETE /api/admin/skills/{id}
pub async fn remove_skill(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    if db::delete_skill(&pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BackendError::not_found("no such skill"))
    }
}

/// POST /api/admin/experience
pub async fn create_experience(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Json(input): Json<ExperienceInput>,
) -> Result<(StatusCode, Json<Experience>), BackendError> {
    validate_dates(&input)?;
    let entry = db::insert_experience(&pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/admin/experience/{id}
pub async fn replace_experience(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(input): Json<ExperienceInput>,
) -> Result<Json<Experience>, BackendError> {
    validate_dates(&input)?;
    let entry = db::update_experience(&pool, id, &input)
        .await?
        .ok_or_else(|| BackendError::not_found("no such experience entry"))?;
    Ok(Json(entry))
}

/// DELETE /api/admin/experience/{id}
pub async fn remove_experience(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    if db::delete_experience(&pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BackendError::not_found("no such experience entry"))
    }
}

/// PUT /api/admin/profile - create or replace the biography record
pub async fn put_profile(
    _admin: AdminUser,
    State(pool): State<PgPool>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<Profile>, BackendError> {
    if input.display_name.trim().is_empty() {
        return Err(BackendError::validation("display_name must not be empty"));
    }
    Ok(Json(db::upsert_profile(&pool, &input).await?))
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Slugs appear in URLs: lowercase alphanumerics and hyphens only
fn validate_slug(slug: &str) -> Result<(), BackendError> {
    let ok = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if ok {
        Ok(())
    } else {
        Err(BackendError::validation(
            "slug must be lowercase alphanumerics and hyphens",
        ))
    }
}

fn validate_level(level: i16) -> Result<(), BackendError> {
    if (1..=5).contains(&level) {
        Ok(())
    } else {
        Err(BackendError::validation("level must be between 1 and 5"))
    }
}

fn validate_dates(input: &ExperienceInput) -> Result<(), BackendError> {
    match input.end_date {
        Some(end) if end < input.start_date => Err(BackendError::validation(
            "end_date must not precede start_date",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("my-first-post").is_ok());
        assert!(validate_slug("post2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Has Spaces").is_err());
        assert!(validate_slug("UPPER").is_err());
        assert!(validate_slug("under_score").is_err());
    }

    #[test]
    fn test_validate_level_bounds() {
        assert!(validate_level(1).is_ok());
        assert!(validate_level(5).is_ok());
        assert!(validate_level(0).is_err());
        assert!(validate_level(6).is_err());
    }

    #[test]
    fn test_validate_dates() {
        let input = ExperienceInput {
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            summary: String::new(),
            start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()),
            sort_order: 0,
        };
        assert!(validate_dates(&input).is_err());

        let open_ended = ExperienceInput {
            end_date: None,
            ..input
        };
        assert!(validate_dates(&open_ended).is_ok());
    }
}
