//! Complaint store behaviour: snapshots, filters, and status updates.

use hostelease_db::models::resident::CreateResident;
use hostelease_db::repositories::complaint_repo::NewComplaint;
use hostelease_db::repositories::{ComplaintRepo, ResidentRepo};
use sqlx::SqlitePool;

fn applicant(email: &str) -> CreateResident {
    CreateResident {
        first_name: "Asha".to_string(),
        last_name: "Verma".to_string(),
        email: email.to_string(),
        phone: "9876543210".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        check_in_date: "2026-09-01".to_string(),
        address: "42 MG Road".to_string(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        profession: "Student".to_string(),
        company_name: "Fergusson College".to_string(),
        emergency_contact: "9123456780".to_string(),
        id_proof: "uploads/id.png".to_string(),
        room_preference: "double".to_string(),
        special_requirements: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_snapshots_name_and_room(pool: SqlitePool) {
    let resident = ResidentRepo::create(&pool, &applicant("asha@example.com"))
        .await
        .unwrap();
    let complaint = ComplaintRepo::create(
        &pool,
        &NewComplaint {
            resident_id: resident.id,
            resident_name: "Asha Verma",
            room: Some("101"),
            title: "Leaky tap",
            description: "Drips all night",
            category: "Plumbing",
            priority: "high",
        },
    )
    .await
    .unwrap();

    assert_eq!(complaint.status, "pending");
    assert_eq!(complaint.room.as_deref(), Some("101"));

    // Snapshot survives resident deletion.
    ResidentRepo::delete_with_release(&pool, resident.id).await.unwrap();
    let after = ComplaintRepo::find_by_id(&pool, complaint.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.resident_id, None);
    assert_eq!(after.resident_name, "Asha Verma");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_status_update_keeps_notes_unless_replaced(pool: SqlitePool) {
    let resident = ResidentRepo::create(&pool, &applicant("asha@example.com"))
        .await
        .unwrap();
    let complaint = ComplaintRepo::create(
        &pool,
        &NewComplaint {
            resident_id: resident.id,
            resident_name: "Asha Verma",
            room: None,
            title: "Wifi down",
            description: "No signal on the second floor",
            category: "Internet",
            priority: "medium",
        },
    )
    .await
    .unwrap();

    let updated = ComplaintRepo::update_status(
        &pool,
        complaint.id,
        "in-progress",
        Some("Technician scheduled"),
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.status, "in-progress");

    let resolved = ComplaintRepo::update_status(&pool, complaint.id, "resolved", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resolved.admin_notes.as_deref(), Some("Technician scheduled"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters_and_per_resident_view(pool: SqlitePool) {
    let asha = ResidentRepo::create(&pool, &applicant("asha@example.com"))
        .await
        .unwrap();
    let ravi = ResidentRepo::create(&pool, &applicant("ravi@example.com"))
        .await
        .unwrap();
    ComplaintRepo::create(
        &pool,
        &NewComplaint {
            resident_id: asha.id,
            resident_name: "Asha Verma",
            room: None,
            title: "Leaky tap",
            description: "Drips",
            category: "Plumbing",
            priority: "high",
        },
    )
    .await
    .unwrap();
    let wifi = ComplaintRepo::create(
        &pool,
        &NewComplaint {
            resident_id: ravi.id,
            resident_name: "Ravi Kumar",
            room: None,
            title: "Wifi down",
            description: "No signal",
            category: "Internet",
            priority: "low",
        },
    )
    .await
    .unwrap();
    ComplaintRepo::update_status(&pool, wifi.id, "resolved", None)
        .await
        .unwrap();

    let high = ComplaintRepo::list(&pool, None, None, Some("high")).await.unwrap();
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].title, "Leaky tap");

    let resolved = ComplaintRepo::list(&pool, None, Some("resolved"), None).await.unwrap();
    assert_eq!(resolved.len(), 1);

    let searched = ComplaintRepo::list(&pool, Some("wifi"), None, None).await.unwrap();
    assert_eq!(searched.len(), 1);

    let ashas = ComplaintRepo::list_by_resident(&pool, asha.id).await.unwrap();
    assert_eq!(ashas.len(), 1);

    assert!(ComplaintRepo::delete(&pool, wifi.id).await.unwrap());
    assert!(!ComplaintRepo::delete(&pool, wifi.id).await.unwrap());
}
