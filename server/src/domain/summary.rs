//! Daily analytics summary
//!
//! Pure read-and-compute: loads the profile goals and one day's logged
//! metrics, produces feedback strings plus the raw values. Nothing is
//! persisted. The feedback wording (Spanish, one decimal for deficits)
//! is part of the wire contract consumed by the frontend.

use serde::Serialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::data::SqliteError;
use crate::data::sqlite::repositories::metric::{self, MetricKind};
use crate::data::sqlite::repositories::profile;
use crate::data::types::ProfileRow;

/// Feedback for one day against the profile goals
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailySummary {
    pub water: String,
    pub sleep: String,
    pub kcal: String,
    #[serde(rename = "waterValue")]
    pub water_value: f64,
    #[serde(rename = "sleepValue")]
    pub sleep_value: f64,
    #[serde(rename = "kcalValue")]
    pub kcal_value: i64,
}

/// Compare one day's values against the profile goals
pub fn build_summary(p: &ProfileRow, water: f64, sleep: f64, kcal: i64) -> DailySummary {
    let water_feedback = if water >= p.water_goal {
        "¡Excelente! Has alcanzado tu meta de agua.".to_string()
    } else {
        format!(
            "Te faltan {:.1} litros para cumplir tu meta.",
            p.water_goal - water
        )
    };

    let sleep_feedback = if sleep >= p.sleep_goal {
        "¡Buen trabajo! Has cumplido tu meta de sueño.".to_string()
    } else {
        format!("Te faltan {:.1} horas de sueño.", p.sleep_goal - sleep)
    };

    let kcal_feedback = if kcal <= p.kcal_goal {
        "Perfecto, tu consumo calórico está dentro del rango.".to_string()
    } else {
        "Cuidado, has superado el consumo recomendado de calorías.".to_string()
    };

    DailySummary {
        water: water_feedback,
        sleep: sleep_feedback,
        kcal: kcal_feedback,
        water_value: water,
        sleep_value: sleep,
        kcal_value: kcal,
    }
}

/// Summarize one day.
///
/// Returns None when no profile exists; metrics with no row for the date
/// count as zero.
pub async fn daily_summary(
    pool: &SqlitePool,
    date_id: i64,
) -> Result<Option<DailySummary>, SqliteError> {
    let Some(p) = profile::get_profile(pool).await? else {
        return Ok(None);
    };

    let water = metric::get_by_date::<f64>(pool, MetricKind::Water, date_id)
        .await?
        .map(|r| r.value)
        .unwrap_or(0.0);
    let sleep = metric::get_by_date::<f64>(pool, MetricKind::Sleep, date_id)
        .await?
        .map(|r| r.value)
        .unwrap_or(0.0);
    let kcal = metric::get_by_date::<i64>(pool, MetricKind::Calories, date_id)
        .await?
        .map(|r| r.value)
        .unwrap_or(0);

    Ok(Some(build_summary(&p, water, sleep, kcal)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sqlite::repositories::date;
    use crate::data::sqlite::repositories::test_support::setup_test_pool;
    use crate::data::types::ProfileFields;

    fn profile_with_goals(water_goal: f64, sleep_goal: f64, kcal_goal: i64) -> ProfileRow {
        ProfileRow {
            id: 1,
            name: "Ana".to_string(),
            age: 28,
            weight: 64.5,
            height: 168.0,
            target_weight: 60.0,
            water_goal,
            sleep_goal,
            kcal_goal,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_deficits_and_goal_met_wording() {
        let p = profile_with_goals(3.0, 7.0, 2000);
        let summary = build_summary(&p, 1.5, 8.0, 2500);

        assert_eq!(summary.water, "Te faltan 1.5 litros para cumplir tu meta.");
        assert_eq!(summary.sleep, "¡Buen trabajo! Has cumplido tu meta de sueño.");
        assert_eq!(
            summary.kcal,
            "Cuidado, has superado el consumo recomendado de calorías."
        );
        assert_eq!(summary.water_value, 1.5);
        assert_eq!(summary.sleep_value, 8.0);
        assert_eq!(summary.kcal_value, 2500);
    }

    #[test]
    fn test_no_logged_metrics_counts_as_zero() {
        let p = profile_with_goals(2.0, 8.0, 1500);
        let summary = build_summary(&p, 0.0, 0.0, 0);

        assert!(summary.water.starts_with("Te faltan"));
        assert!(summary.sleep.starts_with("Te faltan"));
        // 0 kcal is within any non-negative goal
        assert_eq!(
            summary.kcal,
            "Perfecto, tu consumo calórico está dentro del rango."
        );
        assert_eq!(summary.water_value, 0.0);
        assert_eq!(summary.sleep_value, 0.0);
        assert_eq!(summary.kcal_value, 0);
    }

    #[test]
    fn test_deficit_is_formatted_to_one_decimal() {
        let p = profile_with_goals(2.0, 8.0, 1500);
        let summary = build_summary(&p, 0.75, 6.25, 0);

        assert_eq!(summary.water, "Te faltan 1.2 litros para cumplir tu meta.");
        assert_eq!(summary.sleep, "Te faltan 1.8 horas de sueño.");
    }

    #[test]
    fn test_zero_goal_counts_as_met() {
        let p = profile_with_goals(0.0, 0.0, 0);
        let summary = build_summary(&p, 0.0, 0.0, 0);

        assert_eq!(summary.water, "¡Excelente! Has alcanzado tu meta de agua.");
        assert_eq!(summary.sleep, "¡Buen trabajo! Has cumplido tu meta de sueño.");
        assert_eq!(
            summary.kcal,
            "Perfecto, tu consumo calórico está dentro del rango."
        );
    }

    #[test]
    fn test_serializes_with_camel_case_value_keys() {
        let p = profile_with_goals(2.0, 8.0, 1500);
        let summary = build_summary(&p, 2.0, 8.0, 1200);
        let json = serde_json::to_value(&summary).unwrap();

        assert!(json.get("waterValue").is_some());
        assert!(json.get("sleepValue").is_some());
        assert!(json.get("kcalValue").is_some());
        assert!(json.get("water_value").is_none());
    }

    #[tokio::test]
    async fn test_daily_summary_without_profile_is_none() {
        let pool = setup_test_pool().await;
        let date_id = date::resolve_or_create(&pool, "2025-03-14").await.unwrap();

        assert!(daily_summary(&pool, date_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_daily_summary_reads_logged_metrics() {
        let pool = setup_test_pool().await;
        profile::create_profile(
            &pool,
            &ProfileFields {
                name: "Ana".to_string(),
                age: 28,
                weight: 64.5,
                height: 168.0,
                target_weight: 60.0,
                water_goal: 3.0,
                sleep_goal: 7.0,
                kcal_goal: 2000,
            },
        )
        .await
        .unwrap();

        let date_id = date::resolve_or_create(&pool, "2025-03-14").await.unwrap();
        metric::upsert(&pool, MetricKind::Water, date_id, 1.5f64)
            .await
            .unwrap();
        metric::upsert(&pool, MetricKind::Sleep, date_id, 8.0f64)
            .await
            .unwrap();
        metric::upsert(&pool, MetricKind::Calories, date_id, 2500i64)
            .await
            .unwrap();

        let summary = daily_summary(&pool, date_id).await.unwrap().unwrap();
        assert_eq!(summary.water, "Te faltan 1.5 litros para cumplir tu meta.");
        assert_eq!(summary.sleep, "¡Buen trabajo! Has cumplido tu meta de sueño.");
        assert_eq!(
            summary.kcal,
            "Cuidado, has superado el consumo recomendado de calorías."
        );
        assert_eq!(summary.kcal_value, 2500);
    }

    #[tokio::test]
    async fn test_daily_summary_missing_metrics_are_zero() {
        let pool = setup_test_pool().await;
        profile::create_profile(
            &pool,
            &ProfileFields {
                name: "Ana".to_string(),
                age: 28,
                weight: 64.5,
                height: 168.0,
                target_weight: 60.0,
                water_goal: 2.0,
                sleep_goal: 8.0,
                kcal_goal: 1500,
            },
        )
        .await
        .unwrap();
        let date_id = date::resolve_or_create(&pool, "2025-03-14").await.unwrap();

        let summary = daily_summary(&pool, date_id).await.unwrap().unwrap();
        assert_eq!(summary.water_value, 0.0);
        assert_eq!(summary.sleep_value, 0.0);
        assert_eq!(summary.kcal_value, 0);
        assert!(summary.water.starts_with("Te faltan"));
        assert!(summary.sleep.starts_with("Te faltan"));
        assert_eq!(
            summary.kcal,
            "Perfecto, tu consumo calórico está dentro del rango."
        );
    }
}
