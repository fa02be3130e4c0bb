use anyhow::Context;
use sqlx::{PgConnection, PgPool, Row};
use uuid::Uuid;

use crate::models::{MonthlyReferral, Office};
use crate::month::YearMonth;
use crate::scoring;

pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub async fn seed(pool: &PgPool) -> anyhow::Result<()> {
    let offices = vec![
        ("ofc-bayview", "Bayview Family Dentistry"),
        ("ofc-cedar", "Cedar Park Dental Group"),
        ("ofc-harbor", "Harbor Smiles"),
        ("ofc-maple", "Maple Street Orthodontics"),
        ("ofc-summit", "Summit Pediatric Dental"),
        ("ofc-willow", "Willow Creek Dental Care"),
    ];

    let mut tx = pool.begin().await?;
    for (id, name) in offices {
        upsert_office(&mut *tx, id, name).await?;
    }

    let referrals = vec![
        ("ofc-bayview", "2026-09", 14),
        ("ofc-bayview", "2026-08", 11),
        ("ofc-bayview", "2026-06", 9),
        ("ofc-bayview", "2026-01", 12),
        ("ofc-cedar", "2026-07", 6),
        ("ofc-cedar", "2026-03", 18),
        ("ofc-cedar", "2025-12", 21),
        ("ofc-harbor", "2026-09", 3),
        ("ofc-harbor", "2026-08", 2),
        ("ofc-maple", "2025-11", 25),
        ("ofc-maple", "2025-10", 19),
        ("ofc-summit", "2026-05", 7),
        ("ofc-summit", "2026-02", 5),
    ];

    for (office_id, year_month, count) in referrals {
        upsert_referral(&mut *tx, office_id, year_month, count).await?;
    }
    tx.commit().await.context("failed to commit seed data")?;

    tracing::info!("seeded referral offices and monthly counts");
    Ok(())
}

pub async fn fetch_offices(pool: &PgPool) -> anyhow::Result<Vec<Office>> {
    let rows = sqlx::query("SELECT id, name FROM referral_tiers.offices ORDER BY name, id")
        .fetch_all(pool)
        .await
        .context("failed to load office catalog")?;

    let offices: Vec<Office> = rows
        .into_iter()
        .map(|row| Office {
            office_id: row.get("id"),
            name: row.get("name"),
        })
        .collect();

    tracing::debug!(count = offices.len(), "loaded office catalog");
    Ok(offices)
}

pub async fn fetch_monthly_referrals(pool: &PgPool) -> anyhow::Result<Vec<MonthlyReferral>> {
    let rows = sqlx::query(
        "SELECT office_id, year_month, patient_count \
         FROM referral_tiers.monthly_referrals \
         ORDER BY office_id, year_month",
    )
    .fetch_all(pool)
    .await
    .context("failed to load monthly referrals")?;

    let mut referrals = Vec::with_capacity(rows.len());
    for row in rows {
        let patient_count: i32 = row.get("patient_count");
        referrals.push(MonthlyReferral {
            office_id: row.get("office_id"),
            year_month: row.get("year_month"),
            patient_count: i64::from(patient_count),
        });
    }

    tracing::debug!(count = referrals.len(), "loaded monthly referrals");
    Ok(referrals)
}

/// A validated row from an import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub office_id: String,
    pub office_name: String,
    pub year_month: YearMonth,
    pub patient_count: i32,
}

/// Reads and validates every row before anything is written.
pub fn read_import_rows<R: std::io::Read>(source: R) -> anyhow::Result<Vec<ImportRow>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        office_id: String,
        office_name: String,
        year_month: String,
        patient_count: i32,
    }

    let mut reader = csv::Reader::from_reader(source);
    let mut rows = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let line = index + 2;
        let row = result.with_context(|| format!("unreadable row on line {line}"))?;

        let year_month = scoring::parse_month(&row.year_month)
            .with_context(|| format!("line {line}"))?;
        scoring::validate_count(&row.office_id, &row.year_month, i64::from(row.patient_count))
            .with_context(|| format!("line {line}"))?;

        rows.push(ImportRow {
            office_id: row.office_id,
            office_name: row.office_name,
            year_month,
            patient_count: row.patient_count,
        });
    }

    Ok(rows)
}

/// Imports a CSV file in one transaction; a rejected file changes nothing.
pub async fn import_csv(pool: &PgPool, csv_path: &std::path::Path) -> anyhow::Result<usize> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let rows = read_import_rows(file)
        .with_context(|| format!("rejected {}", csv_path.display()))?;

    let mut tx = pool.begin().await?;
    let mut written = 0usize;

    for row in &rows {
        upsert_office(&mut *tx, &row.office_id, &row.office_name).await?;
        let affected = upsert_referral(
            &mut *tx,
            &row.office_id,
            &row.year_month.to_string(),
            row.patient_count,
        )
        .await?;

        if affected > 0 {
            written += 1;
        }
    }

    tx.commit().await.context("failed to commit import")?;
    tracing::info!(rows = written, path = %csv_path.display(), "imported monthly referrals");
    Ok(written)
}

async fn upsert_office(conn: &mut PgConnection, id: &str, name: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO referral_tiers.offices (id, name)
        VALUES ($1, $2)
        ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
        "#,
    )
    .bind(id)
    .bind(name)
    .execute(&mut *conn)
    .await
    .with_context(|| format!("failed to upsert office {id}"))?;
    Ok(())
}

async fn upsert_referral(
    conn: &mut PgConnection,
    office_id: &str,
    year_month: &str,
    patient_count: i32,
) -> anyhow::Result<u64> {
    let result = sqlx::query(
        r#"
        INSERT INTO referral_tiers.monthly_referrals
        (id, office_id, year_month, patient_count)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (office_id, year_month) DO UPDATE
        SET patient_count = EXCLUDED.patient_count, updated_at = now()
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(office_id)
    .bind(year_month)
    .bind(patient_count)
    .execute(&mut *conn)
    .await
    .with_context(|| format!("failed to upsert referrals for {office_id} in {year_month}"))?;

    Ok(result.rows_affected())
}
