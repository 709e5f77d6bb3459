// CSV export of already-fetched detail data. These are local transforms
// only, no server round-trip.

use anyhow::{Context, Result};

use crate::models::{Goal, Payment, WorkoutPlan};

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().context("Failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

fn date_or_empty(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

/// Goals as CSV, one row per goal
pub fn goals_csv(goals: &[Goal]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["title", "status", "target_date", "description"])?;

    for goal in goals {
        writer.write_record([
            goal.title.as_str(),
            &goal.status.to_string(),
            &date_or_empty(goal.target_date),
            goal.description.as_deref().unwrap_or(""),
        ])?;
    }

    finish(writer)
}

/// Payments as CSV, one row per payment
pub fn payments_csv(payments: &[Payment]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["amount", "status", "due_date", "paid_date", "method", "notes"])?;

    for payment in payments {
        writer.write_record([
            &format!("{:.2}", payment.amount),
            &payment.status.to_string(),
            &date_or_empty(payment.due_date),
            &date_or_empty(payment.paid_date),
            payment.method.as_deref().unwrap_or(""),
            payment.notes.as_deref().unwrap_or(""),
        ])?;
    }

    finish(writer)
}

/// Workout plans as CSV, flattened to one row per exercise
pub fn workouts_csv(plans: &[WorkoutPlan]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["plan", "exercise", "sets", "reps", "weight_kg", "rest_seconds"])?;

    for plan in plans {
        for exercise in &plan.exercises {
            writer.write_record([
                plan.name.as_str(),
                exercise.name.as_str(),
                &exercise.sets.to_string(),
                &exercise.reps.to_string(),
                &exercise
                    .weight_kg
                    .map(|w| format!("{:.1}", w))
                    .unwrap_or_default(),
                &exercise
                    .rest_seconds
                    .map(|r| r.to_string())
                    .unwrap_or_default(),
            ])?;
        }
    }

    finish(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exercise, GoalStatus, PaymentStatus};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    #[test]
    fn test_goals_csv() {
        let goals = vec![Goal {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            title: "Lose 5kg".to_string(),
            description: None,
            target_date: NaiveDate::from_ymd_opt(2026, 12, 1),
            status: GoalStatus::Active,
            created_at: Utc::now(),
        }];

        let csv = goals_csv(&goals).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "title,status,target_date,description");
        assert_eq!(lines.next().unwrap(), "Lose 5kg,Active,2026-12-01,");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_payments_csv_formats_amount() {
        let payments = vec![Payment {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            amount: 49.9,
            status: PaymentStatus::Pending,
            due_date: None,
            paid_date: None,
            method: Some("card".to_string()),
            notes: None,
        }];

        let csv = payments_csv(&payments).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("49.90,Pending"));
    }

    #[test]
    fn test_workouts_csv_flattens_exercises() {
        let plans = vec![WorkoutPlan {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            name: "Push Day".to_string(),
            description: None,
            exercises: vec![
                Exercise {
                    name: "Bench Press".to_string(),
                    sets: 4,
                    reps: 8,
                    weight_kg: Some(80.0),
                    rest_seconds: Some(120),
                    notes: None,
                },
                Exercise {
                    name: "Dips".to_string(),
                    sets: 3,
                    reps: 12,
                    weight_kg: None,
                    rest_seconds: None,
                    notes: None,
                },
            ],
            created_at: Utc::now(),
        }];

        let csv = workouts_csv(&plans).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Push Day,Bench Press,4,8,80.0,120");
        assert_eq!(lines[2], "Push Day,Dips,3,12,,");
    }

    #[test]
    fn test_field_with_comma_is_quoted() {
        let goals = vec![Goal {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            title: "Run 10k, then rest".to_string(),
            description: None,
            target_date: None,
            status: GoalStatus::Active,
            created_at: Utc::now(),
        }];

        let csv = goals_csv(&goals).unwrap();
        assert!(csv.contains("\"Run 10k, then rest\""));
    }
}
