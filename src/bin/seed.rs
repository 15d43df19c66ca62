/**
 * Admin Identity Seeding
 *
 * Out-of-band creation of the administrative identity. This is the only
 * way an identity enters the credential store; the HTTP surface has no
 * signup endpoint.
 *
 * Reads ADMIN_EMAIL and ADMIN_PASSWORD from the environment, hashes the
 * password, and upserts the identity. Re-running with the same email
 * replaces the stored hash, so the operation is idempotent.
 */

use folio::backend::auth::password::hash_password;
use folio::backend::auth::users::upsert_user;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL must be set to run the seed")?;
    let email = std::env::var("ADMIN_EMAIL")
        .map_err(|_| "ADMIN_EMAIL must be set to run the seed")?;
    let password = std::env::var("ADMIN_PASSWORD")
        .map_err(|_| "ADMIN_PASSWORD must be set to run the seed")?;

    if password.len() < 8 {
        return Err("ADMIN_PASSWORD must be at least 8 characters".into());
    }

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;
    sqlx::migrate!().run(&pool).await?;

    let password_hash = hash_password(&password)?;
    let user = upsert_user(&pool, &email, &password_hash).await?;

    tracing::info!("Seeded admin identity {} ({})", user.email, user.id);
    Ok(())
}
