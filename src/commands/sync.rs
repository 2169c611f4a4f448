use crate::Data;

/// reconcile the local list against the server once.
#[tracing::instrument(skip_all)]
pub async fn run(data: &Data) -> anyhow::Result<()> {
    println!("syncing with server...");

    let report = crate::sync::sync_quotes(data).await?;

    if report.conflicts > 0 {
        println!(
            "conflict detected: {} quote(s) already existed.",
            report.conflicts
        );
    }

    println!(
        "sync complete. fetched {} quote(s), added {}.",
        report.fetched, report.added
    );

    Ok(())
}
