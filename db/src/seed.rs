use common::{env_config::Config, error::Res, password};
use sqlx::PgPool;

/// Provisions the well-known system account that guest bookings are
/// attributed to. Idempotent: runs once at boot, and an already-present
/// account is left untouched. The booking path only ever looks this account
/// up; it must not create it as a side effect.
pub async fn provision_system_account(pool: &PgPool, config: &Config) -> Res<()> {
    let email = config.system_account.email.to_lowercase();
    let password_hash = password::hash_password(&config.system_account.password)?;

    let result = sqlx::query(
        r#"
        INSERT INTO users (email, password_hash, name, role, verified)
        VALUES ($1, $2, 'System', 'admin', TRUE)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(&email)
    .bind(password_hash)
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        log::info!("Provisioned system account {}", email);
    } else {
        log::debug!("System account {} already provisioned", email);
    }
    Ok(())
}
