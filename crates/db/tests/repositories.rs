//! Integration tests for the repository layer against a real database:
//! - Track creation with sequential groups
//! - Registration under the capacity and course-balance rules
//! - Moves between groups
//! - Cascade deletes
//! - Roster report folding

use assert_matches::assert_matches;
use enrollment_core::assignment::{assign_group, is_track_full, AssignmentError, GROUP_CAPACITY};
use enrollment_core::naming::group_names;
use enrollment_core::types::DbId;
use enrollment_db::models::student::{CreateStudent, MoveOutcome, RegistrationOutcome};
use enrollment_db::models::track::CreateTrack;
use enrollment_db::repositories::{GroupRepo, ReportRepo, StudentRepo, TrackRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_track(pool: &PgPool, name: &str, groups: u32) -> (DbId, Vec<DbId>) {
    let input = CreateTrack {
        name: name.to_string(),
        description: Some(format!("Eixo {name}")),
    };
    let (track, groups) = TrackRepo::create_with_groups(pool, &input, &group_names(name, groups))
        .await
        .unwrap();
    (track.id, groups.into_iter().map(|g| g.id).collect())
}

fn student(name: &str, course: &str) -> CreateStudent {
    CreateStudent {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        course: Some(course.to_string()),
        shift: Some("Noturno".to_string()),
        period: Some(2),
    }
}

/// Insert a student straight into a given group, bypassing the policy.
async fn seed(pool: &PgPool, group_id: DbId, name: &str, course: &str) -> DbId {
    let outcome = StudentRepo::register(pool, 0, &student(name, course), |_| Ok(group_id))
        .await
        .unwrap();
    match outcome {
        RegistrationOutcome::Registered(s) => s.id,
        RegistrationOutcome::Rejected(e) => panic!("seeding rejected: {e}"),
    }
}

async fn register(pool: &PgPool, track_id: DbId, name: &str, course: &str) -> RegistrationOutcome {
    StudentRepo::register(pool, track_id, &student(name, course), assign_group)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Tracks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_track_creates_named_groups(pool: PgPool) {
    let (track_id, group_ids) = create_track(&pool, "Saúde", 3).await;
    assert_eq!(group_ids.len(), 3);

    let groups = GroupRepo::list_by_track(&pool, track_id).await.unwrap();
    let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Equipe 1 - Saúde", "Equipe 2 - Saúde", "Equipe 3 - Saúde"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_track_cascades(pool: PgPool) {
    let (track_id, group_ids) = create_track(&pool, "Tecnologia", 2).await;
    let student_id = seed(&pool, group_ids[0], "Ana", "Computação").await;

    assert!(TrackRepo::delete(&pool, track_id).await.unwrap());

    assert!(TrackRepo::find_by_id(&pool, track_id).await.unwrap().is_none());
    assert!(GroupRepo::find_by_id(&pool, group_ids[0]).await.unwrap().is_none());
    assert!(StudentRepo::find_by_id(&pool, student_id).await.unwrap().is_none());
    assert!(!TrackRepo::delete(&pool, track_id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_availability_marks_full_and_empty_tracks(pool: PgPool) {
    let (_, open_groups) = create_track(&pool, "Aberto", 2).await;
    let (_, full_groups) = create_track(&pool, "Lotado", 1).await;
    create_track(&pool, "Vazio", 0).await;

    seed(&pool, open_groups[0], "Ana", "Direito").await;
    for i in 0..GROUP_CAPACITY {
        seed(&pool, full_groups[0], &format!("Aluno{i}"), "Direito").await;
    }

    let tracks = TrackRepo::list_with_availability(&pool, GROUP_CAPACITY)
        .await
        .unwrap();
    assert_eq!(tracks.len(), 3);

    assert_eq!(tracks[0].name, "Aberto");
    assert_eq!(tracks[0].open_groups, 2);
    assert!(!tracks[0].is_full);

    assert_eq!(tracks[1].group_count, 1);
    assert!(tracks[1].is_full);

    assert_eq!(tracks[2].group_count, 0);
    assert!(tracks[2].is_full);

    // Aggregated head counts agree with per-group counts.
    for track in &tracks {
        let mut totals = Vec::new();
        for group in GroupRepo::list_by_track(&pool, track.id).await.unwrap() {
            totals.push(StudentRepo::count_by_group(&pool, group.id).await.unwrap());
        }
        assert_eq!(track.is_full, is_track_full(&totals, GROUP_CAPACITY), "{}", track.name);
    }
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_prefers_fewest_same_course(pool: PgPool) {
    let (track_id, groups) = create_track(&pool, "Health", 2).await;
    let (a, b) = (groups[0], groups[1]);

    // A: 9 students, 3 of Nursing. B: 5 students, 1 of Nursing.
    for i in 0..3 {
        seed(&pool, a, &format!("NA{i}"), "Nursing").await;
    }
    for i in 0..6 {
        seed(&pool, a, &format!("OA{i}"), "Medicine").await;
    }
    seed(&pool, b, "NB0", "Nursing").await;
    for i in 0..4 {
        seed(&pool, b, &format!("OB{i}"), "Medicine").await;
    }

    let outcome = register(&pool, track_id, "Newcomer", "Nursing").await;
    assert_matches!(outcome, RegistrationOutcome::Registered(s) if s.group_id == b);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_skips_full_group(pool: PgPool) {
    let (track_id, groups) = create_track(&pool, "Exatas", 2).await;
    for i in 0..GROUP_CAPACITY {
        seed(&pool, groups[0], &format!("A{i}"), "Física").await;
    }
    // Group 2 has more same-course students but is the only one with a seat.
    for i in 0..3 {
        seed(&pool, groups[1], &format!("B{i}"), "Química").await;
    }

    let outcome = register(&pool, track_id, "Nova", "Química").await;
    assert_matches!(outcome, RegistrationOutcome::Registered(s) if s.group_id == groups[1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_full_track_writes_nothing(pool: PgPool) {
    let (track_id, groups) = create_track(&pool, "Cheio", 1).await;
    for i in 0..GROUP_CAPACITY {
        seed(&pool, groups[0], &format!("A{i}"), "Artes").await;
    }

    let outcome = register(&pool, track_id, "Atrasado", "Artes").await;
    assert_matches!(outcome, RegistrationOutcome::Rejected(AssignmentError::TrackFull));
    assert_eq!(
        StudentRepo::count_by_group(&pool, groups[0]).await.unwrap(),
        GROUP_CAPACITY
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_without_groups(pool: PgPool) {
    let (track_id, _) = create_track(&pool, "Sem grupos", 0).await;
    let outcome = register(&pool, track_id, "Ana", "Artes").await;
    assert_matches!(outcome, RegistrationOutcome::Rejected(AssignmentError::NoGroups));

    let outcome = register(&pool, 999_999, "Ana", "Artes").await;
    assert_matches!(outcome, RegistrationOutcome::Rejected(AssignmentError::NoGroups));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_registrations_respect_capacity(pool: PgPool) {
    let (track_id, groups) = create_track(&pool, "Concorrido", 1).await;

    let mut handles = Vec::new();
    for i in 0..(GROUP_CAPACITY + 5) {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            StudentRepo::register(
                &pool,
                track_id,
                &student(&format!("C{i}"), "Letras"),
                assign_group,
            )
            .await
            .unwrap()
        }));
    }

    let mut registered = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            RegistrationOutcome::Registered(_) => registered += 1,
            RegistrationOutcome::Rejected(AssignmentError::TrackFull) => rejected += 1,
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    assert_eq!(registered, GROUP_CAPACITY);
    assert_eq!(rejected, 5);
    assert_eq!(
        StudentRepo::count_by_group(&pool, groups[0]).await.unwrap(),
        GROUP_CAPACITY
    );
}

// ---------------------------------------------------------------------------
// Moves
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_move_student(pool: PgPool) {
    let (_, groups) = create_track(&pool, "Humanas", 2).await;
    let id = seed(&pool, groups[0], "Ana", "História").await;

    let outcome = StudentRepo::move_to_group(&pool, id, groups[1], GROUP_CAPACITY)
        .await
        .unwrap();
    assert_eq!(outcome, MoveOutcome::Moved);

    let moved = StudentRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(moved.group_id, groups[1]);

    let again = StudentRepo::move_to_group(&pool, id, groups[1], GROUP_CAPACITY)
        .await
        .unwrap();
    assert_eq!(again, MoveOutcome::Unchanged);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_move_into_full_group_rejected(pool: PgPool) {
    let (_, groups) = create_track(&pool, "Lotada", 2).await;
    for i in 0..GROUP_CAPACITY {
        seed(&pool, groups[1], &format!("B{i}"), "Letras").await;
    }
    let id = seed(&pool, groups[0], "Ana", "Letras").await;

    let outcome = StudentRepo::move_to_group(&pool, id, groups[1], GROUP_CAPACITY)
        .await
        .unwrap();
    assert_eq!(outcome, MoveOutcome::GroupFull);

    let unchanged = StudentRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(unchanged.group_id, groups[0]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_move_unknown_ids(pool: PgPool) {
    let (_, groups) = create_track(&pool, "Misc", 1).await;
    let id = seed(&pool, groups[0], "Ana", "Letras").await;

    assert_eq!(
        StudentRepo::move_to_group(&pool, id, 999_999, GROUP_CAPACITY)
            .await
            .unwrap(),
        MoveOutcome::GroupNotFound
    );
    assert_eq!(
        StudentRepo::move_to_group(&pool, 999_999, groups[0], GROUP_CAPACITY)
            .await
            .unwrap(),
        MoveOutcome::StudentNotFound
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_student(pool: PgPool) {
    let (_, groups) = create_track(&pool, "Misc", 1).await;
    let id = seed(&pool, groups[0], "Ana", "Letras").await;

    assert!(StudentRepo::delete(&pool, id).await.unwrap());
    assert!(!StudentRepo::delete(&pool, id).await.unwrap());
    assert_eq!(StudentRepo::count_by_group(&pool, groups[0]).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_roster_nests_tracks_groups_students(pool: PgPool) {
    let (t1, g1) = create_track(&pool, "Saúde", 2).await;
    let (t2, _) = create_track(&pool, "Vazio", 0).await;
    seed(&pool, g1[0], "Bruno", "Enfermagem").await;
    seed(&pool, g1[0], "Ana", "Enfermagem").await;

    let report = ReportRepo::roster(&pool).await.unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report[0].id, t1);
    assert_eq!(report[0].groups.len(), 2);
    assert_eq!(report[0].groups[0].total, 2);
    assert_eq!(report[0].groups[0].students[0].name, "Ana");
    assert_eq!(report[0].groups[1].total, 0);
    assert_eq!(report[1].id, t2);
    assert!(report[1].groups.is_empty());

    let selector = GroupRepo::list_with_track(&pool).await.unwrap();
    assert_eq!(selector.len(), 2);
    assert_eq!(selector[0].track_name, "Saúde");
    assert_eq!(selector[0].total, 2);
}
