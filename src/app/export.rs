use tokio::io::{AsyncWriteExt, BufWriter};

use crate::vitals::CheckOutcome;

use super::runner::RunOutcome;

pub(crate) async fn export_json(path: &str, outcome: &RunOutcome) -> Result<(), std::io::Error> {
    let checks_json: Vec<serde_json::Value> = outcome.outcomes.iter().map(check_json).collect();

    let payload = serde_json::json!({
        "target": outcome.url,
        "started_at": outcome.started_at.to_rfc3339(),
        "duration_ms": millis(outcome.duration),
        "totals": {
            "passed": outcome.totals.passed,
            "failed": outcome.totals.failed,
            "inconclusive": outcome.totals.inconclusive
        },
        "checks": checks_json
    });

    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    let json = serde_json::to_vec_pretty(&payload).map_err(std::io::Error::other)?;
    writer.write_all(&json).await?;
    writer.flush().await?;
    Ok(())
}

fn check_json(check: &CheckOutcome) -> serde_json::Value {
    serde_json::json!({
        "metric": check.metric.as_str(),
        "observation": check.observation,
        "threshold": check.threshold.bound(),
        "unit": check.metric.unit(),
        "verdict": check.verdict,
        "reason": check.reason,
        "elapsed_ms": millis(check.elapsed)
    })
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
