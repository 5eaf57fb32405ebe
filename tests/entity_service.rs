mod common;

use chrono::{Local, NaiveDate};
use common::{entity_service, entity_service_with, new_entity, seed_len};
use staffdesk::error::{ServiceError, Surface};
use staffdesk::model::{seed_entities, EntityPatch};

#[tokio::test]
async fn all_returns_the_seed() {
    let service = entity_service();
    let all = service.all().await.unwrap();
    assert_eq!(all.len(), 10);
    assert_eq!(all, seed_entities());
}

#[tokio::test]
async fn add_assigns_next_id_and_defaults_hire_date() {
    let service = entity_service();
    let added = service
        .add(new_entity("Nora", "Quinn", "nora.quinn@company.com", 30))
        .await
        .unwrap();

    assert_eq!(added.id, 11);
    let fetched = service.get(11).await.unwrap();
    assert_eq!(fetched.first_name, "Nora");
    assert_eq!(fetched.last_name, "Quinn");
    assert_eq!(fetched.email, "nora.quinn@company.com");
    assert_eq!(fetched.age, 30);
    assert_eq!(fetched.hire_date, Local::now().date_naive());
    assert_eq!(fetched, added);
    assert_eq!(service.len(), seed_len() + 1);
}

#[tokio::test]
async fn ids_strictly_increase_even_after_deleting_the_newest() {
    let service = entity_service();
    let first = service
        .add(new_entity("Nora", "Quinn", "nora@company.com", 30))
        .await
        .unwrap();
    service.delete(first.id).await.unwrap();
    let second = service
        .add(new_entity("Omar", "Reyes", "omar@company.com", 41))
        .await
        .unwrap();

    assert_eq!(first.id, 11);
    assert!(second.id > first.id);
}

#[tokio::test]
async fn first_id_in_an_empty_store_is_one() {
    let service = entity_service_with(Vec::new());
    let added = service
        .add(new_entity("Nora", "Quinn", "nora@company.com", 30))
        .await
        .unwrap();
    assert_eq!(added.id, 1);
}

#[tokio::test]
async fn duplicate_email_on_add_is_a_conflict_and_leaves_store_unchanged() {
    let service = entity_service();
    let err = service
        .add(new_entity("Jay", "Doe", "JOHN.DOE@example.com", 30))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict { .. }));
    assert_eq!(err.surface(), Surface::Inline);
    assert_eq!(service.all().await.unwrap(), seed_entities());
}

#[tokio::test]
async fn duplicate_email_differing_in_non_ascii_case_is_a_conflict() {
    let service = entity_service();
    service
        .add(new_entity("Émile", "Roux", "ÉMILE@company.com", 33))
        .await
        .unwrap();
    let err = service
        .add(new_entity("Emile", "Roux", "émile@company.com", 33))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict { .. }));
    assert_eq!(service.len(), seed_len() + 1);
}

#[tokio::test]
async fn edit_to_a_non_ascii_case_variant_of_another_email_is_a_conflict() {
    let service = entity_service();
    let added = service
        .add(new_entity("Émile", "Roux", "émile@company.com", 33))
        .await
        .unwrap();
    let err = service
        .edit(
            3,
            EntityPatch {
                email: Some("ÉMILE@company.com".to_string()),
                ..EntityPatch::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict { .. }));
    assert_ne!(service.get(3).await.unwrap().email, "ÉMILE@company.com");
    assert_eq!(service.get(added.id).await.unwrap(), added);
}

#[tokio::test]
async fn edit_merges_the_patch() {
    let service = entity_service();
    let updated = service
        .edit(
            2,
            EntityPatch {
                age: Some(29),
                ..EntityPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.age, 29);
    assert_eq!(updated.first_name, "Jane");
    assert_eq!(service.get(2).await.unwrap(), updated);
}

#[tokio::test]
async fn edit_may_keep_its_own_email_but_not_take_another() {
    let service = entity_service();
    service
        .edit(
            2,
            EntityPatch {
                email: Some("jane.smith@example.com".to_string()),
                ..EntityPatch::default()
            },
        )
        .await
        .unwrap();

    let err = service
        .edit(
            2,
            EntityPatch {
                email: Some("bob.johnson@example.com".to_string()),
                ..EntityPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict { .. }));
    assert_eq!(service.get(2).await.unwrap().email, "jane.smith@example.com");
}

#[tokio::test]
async fn edit_of_missing_id_is_not_found() {
    let service = entity_service();
    let err = service
        .edit(
            99,
            EntityPatch {
                age: Some(30),
                ..EntityPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, ServiceError::NotFound { id: 99 });
    assert_eq!(err.to_string(), "Entity with id 99 not found");
    assert_eq!(err.surface(), Surface::Global);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let service = entity_service_with(seed_entities().into_iter().take(3).collect());
    let confirmation = service.delete(2).await.unwrap();
    assert_eq!(confirmation.removed, vec![2]);

    assert_eq!(
        service.get(2).await.unwrap_err(),
        ServiceError::NotFound { id: 2 }
    );
    let ids: Vec<u64> = service.all().await.unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn delete_of_missing_id_fails() {
    let service = entity_service();
    assert!(matches!(
        service.delete(42).await,
        Err(ServiceError::NotFound { id: 42 })
    ));
    assert_eq!(service.len(), seed_len());
}

#[tokio::test]
async fn delete_many_ignores_unknown_ids_and_is_idempotent() {
    let service = entity_service();
    let first = service.delete_many(&[1, 3, 99]).await.unwrap();
    assert_eq!(first.removed, vec![1, 3]);
    let after_first = service.all().await.unwrap();

    let second = service.delete_many(&[1, 3, 99]).await.unwrap();
    assert!(second.removed.is_empty());
    assert_eq!(service.all().await.unwrap(), after_first);
    assert_eq!(after_first.len(), 8);
}

#[tokio::test]
async fn clones_share_one_store() {
    let service = entity_service();
    let other = service.clone();
    other.delete(1).await.unwrap();
    assert_eq!(service.len(), 9);
}

#[tokio::test]
async fn explicit_hire_date_is_kept() {
    let service = entity_service();
    let mut fields = new_entity("Nora", "Quinn", "nora@company.com", 30);
    fields.hire_date = NaiveDate::from_ymd_opt(2020, 5, 4);
    let added = service.add(fields).await.unwrap();
    assert_eq!(added.hire_date, NaiveDate::from_ymd_opt(2020, 5, 4).unwrap());
}
