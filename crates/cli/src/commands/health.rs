//! Health command.

use std::io;

use storefront_app::api::HealthApi;
use tracing::info;

use crate::commands::CommandError;

pub(crate) async fn run(
    health: &dyn HealthApi,
    out: &mut dyn io::Write,
) -> Result<(), CommandError> {
    let status = health.health().await.map_err(CommandError::Health)?;

    info!(status = %status.status, "backend health");

    if !status.is_up() {
        return Err(CommandError::Unhealthy(status.status));
    }

    writeln!(out, "Backend: {}", status.status)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use storefront_app::api::{HealthStatus, MockHealthApi};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn down_backend_is_an_error() {
        let mut health = MockHealthApi::new();

        health.expect_health().once().return_once(|| {
            Ok(HealthStatus {
                status: "DOWN".to_string(),
            })
        });

        let mut out = Vec::new();

        let result = run(&health, &mut out).await;

        assert!(
            matches!(&result, Err(CommandError::Unhealthy(status)) if status == "DOWN"),
            "expected Unhealthy, got {result:?}"
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn up_backend_is_reported() -> TestResult {
        let mut health = MockHealthApi::new();

        health.expect_health().once().return_once(|| {
            Ok(HealthStatus {
                status: "UP".to_string(),
            })
        });

        let mut out = Vec::new();

        run(&health, &mut out).await?;

        assert_eq!(String::from_utf8(out)?, "Backend: UP\n");

        Ok(())
    }
}
