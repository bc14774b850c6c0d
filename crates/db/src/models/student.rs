//! Student (aluno) entity model, DTOs and the outcomes of seat-bound writes.

use enrollment_core::assignment::AssignmentError;
use enrollment_core::registration::RegistrationInput;
use enrollment_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `alunos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub shift: Option<String>,
    pub period: Option<i32>,
    pub group_id: DbId,
}

/// DTO for inserting a student. The group is chosen at write time.
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub shift: Option<String>,
    pub period: Option<i32>,
}

impl From<RegistrationInput> for CreateStudent {
    fn from(input: RegistrationInput) -> Self {
        CreateStudent {
            name: input.name,
            email: input.email,
            phone: input.phone,
            course: input.course,
            shift: input.shift,
            period: input.period,
        }
    }
}

/// Result of a registration attempt that reached the database.
#[derive(Debug)]
pub enum RegistrationOutcome {
    /// The student was written into the chosen group.
    Registered(Student),
    /// The policy found no eligible group; nothing was written.
    Rejected(AssignmentError),
}

/// Result of moving a student to another group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The student already belongs to the target group.
    Unchanged,
    GroupFull,
    StudentNotFound,
    GroupNotFound,
}
