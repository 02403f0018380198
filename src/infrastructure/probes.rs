//! Readiness probes for external dependencies.

use async_trait::async_trait;
use mongodb::{Database, bson::doc};

use crate::health::{HealthProbe, READY_TAG};

/// Readiness probe verifying MongoDB connectivity with a `ping` command.
pub struct MongoPingProbe {
    db: Database,
}

impl MongoPingProbe {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthProbe for MongoPingProbe {
    fn name(&self) -> &str {
        "mongodb"
    }

    fn tags(&self) -> &[&'static str] {
        &[READY_TAG]
    }

    async fn check(&self) -> anyhow::Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
