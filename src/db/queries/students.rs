use sqlx::{PgExecutor, PgPool};
use tracing::debug;

use crate::db::errors::{DatabaseError, Result};
use crate::models::Student;

/// Load a student by id. Executor-generic so the award path can read it
/// inside its open transaction.
pub async fn get_student<'e, E>(executor: E, student_id: i64) -> Result<Option<Student>>
where
    E: PgExecutor<'e>,
{
    let student = sqlx::query_as::<_, Student>(
        r#"
        SELECT id, name, grade, cohort, is_active, created_at
        FROM club_student
        WHERE id = $1
        "#,
    )
    .bind(student_id)
    .fetch_optional(executor)
    .await
    .map_err(DatabaseError::QueryError)?;

    Ok(student)
}

/// List active students, ordered by name
pub async fn list_active_students(pool: &PgPool) -> Result<Vec<Student>> {
    let students = sqlx::query_as::<_, Student>(
        r#"
        SELECT id, name, grade, cohort, is_active, created_at
        FROM club_student
        WHERE is_active = TRUE
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::QueryError)?;

    debug!("Loaded {} active students", students.len());
    Ok(students)
}

/// List the students linked to a guardian, for the guardian portal
pub async fn list_students_for_guardian(pool: &PgPool, guardian_id: i64) -> Result<Vec<Student>> {
    let students = sqlx::query_as::<_, Student>(
        r#"
        SELECT s.id, s.name, s.grade, s.cohort, s.is_active, s.created_at
        FROM club_student s
        JOIN club_guardianstudent gs ON gs.student_id = s.id
        WHERE gs.guardian_id = $1
        ORDER BY s.name
        "#,
    )
    .bind(guardian_id)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::QueryError)?;

    debug!(
        "Loaded {} students for guardian {}",
        students.len(),
        guardian_id
    );
    Ok(students)
}
