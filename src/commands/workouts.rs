use anyhow::{Context, Result};
use uuid::Uuid;

use crate::api::workouts::CreateWorkoutPlanRequest;
use crate::models::Exercise;

/// Parse an exercise spec of the form `NAME:SETSxREPS[@WEIGHT][:REST]`,
/// e.g. `Bench Press:4x8@80:120` or `Dips:3x12`.
pub fn parse_exercise(spec: &str) -> Result<Exercise> {
    let mut parts = spec.splitn(3, ':');

    let name = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .context("Exercise spec is missing a name")?;

    let scheme = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .with_context(|| format!("Exercise '{}' is missing a SETSxREPS scheme", name))?;

    let rest_seconds = parts
        .next()
        .map(str::trim)
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("Invalid rest seconds '{}' for '{}'", s, name))
        })
        .transpose()?;

    // Split off an optional @WEIGHT suffix from the scheme
    let (scheme, weight_kg) = match scheme.split_once('@') {
        Some((scheme, weight)) => {
            let weight = weight
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid weight '{}' for '{}'", weight, name))?;
            (scheme, Some(weight))
        }
        None => (scheme, None),
    };

    let (sets, reps) = scheme
        .split_once(['x', 'X'])
        .with_context(|| format!("Expected SETSxREPS in '{}' for '{}'", scheme, name))?;

    let sets = sets
        .trim()
        .parse::<u32>()
        .with_context(|| format!("Invalid set count '{}' for '{}'", sets, name))?;
    let reps = reps
        .trim()
        .parse::<u32>()
        .with_context(|| format!("Invalid rep count '{}' for '{}'", reps, name))?;

    Ok(Exercise {
        name: name.to_string(),
        sets,
        reps,
        weight_kg,
        rest_seconds,
        notes: None,
    })
}

pub async fn list(client: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let plans = api.list_workout_plans(client).await?;

    if plans.is_empty() {
        println!("No workout plans for this client.");
        return Ok(());
    }

    println!("{:<38} {:<26} {}", "ID", "NAME", "EXERCISES");
    for plan in &plans {
        println!("{:<38} {:<26} {}", plan.id, plan.name, plan.exercises.len());
    }

    Ok(())
}

pub async fn show(id: Uuid) -> Result<()> {
    let api = super::api_client()?;
    let plan = api.get_workout_plan(id).await?;

    println!("{}", plan.name);
    if let Some(description) = &plan.description {
        println!("{}", description);
    }
    println!();

    if plan.exercises.is_empty() {
        println!("No exercises in this plan.");
        return Ok(());
    }

    for exercise in &plan.exercises {
        let weight = exercise
            .weight_kg
            .map(|w| format!(" @ {:.1}kg", w))
            .unwrap_or_default();
        let rest = exercise
            .rest_seconds
            .map(|r| format!(", rest {}s", r))
            .unwrap_or_default();

        println!(
            "  {} — {}x{}{}{}",
            exercise.name, exercise.sets, exercise.reps, weight, rest
        );
    }

    Ok(())
}

pub async fn add(
    client: Uuid,
    name: String,
    description: Option<String>,
    exercise_specs: Vec<String>,
) -> Result<()> {
    let exercises = exercise_specs
        .iter()
        .map(|spec| parse_exercise(spec))
        .collect::<Result<Vec<_>>>()?;

    let api = super::api_client()?;
    let plan = api
        .create_workout_plan(
            client,
            &CreateWorkoutPlanRequest {
                name,
                description,
                exercises,
            },
        )
        .await?;

    println!(
        "✓ Workout plan created: {} ({} exercises)",
        plan.name,
        plan.exercises.len()
    );

    Ok(())
}

pub async fn delete(id: Uuid, force: bool) -> Result<()> {
    if !super::confirm("Delete this workout plan?", force)? {
        println!("Aborted.");
        return Ok(());
    }

    let api = super::api_client()?;
    api.delete_workout_plan(id).await?;

    println!("✓ Workout plan deleted.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_spec() {
        let exercise = parse_exercise("Bench Press:4x8@80:120").unwrap();

        assert_eq!(exercise.name, "Bench Press");
        assert_eq!(exercise.sets, 4);
        assert_eq!(exercise.reps, 8);
        assert_eq!(exercise.weight_kg, Some(80.0));
        assert_eq!(exercise.rest_seconds, Some(120));
    }

    #[test]
    fn test_parse_minimal_spec() {
        let exercise = parse_exercise("Dips:3x12").unwrap();

        assert_eq!(exercise.name, "Dips");
        assert_eq!(exercise.sets, 3);
        assert_eq!(exercise.reps, 12);
        assert_eq!(exercise.weight_kg, None);
        assert_eq!(exercise.rest_seconds, None);
    }

    #[test]
    fn test_parse_weight_without_rest() {
        let exercise = parse_exercise("Squat:5x5@100").unwrap();

        assert_eq!(exercise.weight_kg, Some(100.0));
        assert_eq!(exercise.rest_seconds, None);
    }

    #[test]
    fn test_parse_rejects_missing_scheme() {
        assert!(parse_exercise("Bench Press").is_err());
        assert!(parse_exercise("Bench Press:").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert!(parse_exercise("Squat:fivex5").is_err());
        assert!(parse_exercise("Squat:5x5@heavy").is_err());
        assert!(parse_exercise("Squat:5x5:soon").is_err());
    }
}
