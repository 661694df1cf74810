//! PostgreSQL backend tests. Run with `DATABASE_URL` set and `--ignored`.

use assert_matches::assert_matches;
use dineflow_db::models::complaint::Complaint;
use dineflow_db::models::settings::MessSettings;
use dineflow_db::store::{PgRepository, PgSingleton, Repository, SingletonStore};
use dineflow_db::{Repositories, StoreError};
use serde_json::json;
use sqlx::PgPool;

fn complaint(id: &str, title: &str) -> Complaint {
    Complaint {
        id: id.into(),
        title: title.into(),
        description: "details".into(),
        ..Default::default()
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_find_and_overwrite(pool: PgPool) {
    let repo = PgRepository::<Complaint>::new(pool);

    repo.create(complaint("a", "first")).await.unwrap();
    repo.create(complaint("b", "second")).await.unwrap();
    repo.create(complaint("a", "replaced")).await.unwrap();

    let all = repo.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, "a");
    assert_eq!(all[0].title, "replaced");
    assert_eq!(repo.get("missing").await.unwrap(), Complaint::default());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn cursor_pagination_visits_each_record_once(pool: PgPool) {
    let repo = PgRepository::<Complaint>::new(pool);
    for id in ["r1", "r2", "r3", "r4", "r5"] {
        repo.create(complaint(id, id)).await.unwrap();
    }

    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = repo.list(cursor.as_deref(), Some(2)).await.unwrap();
        seen.extend(page.items.into_iter().map(|c| c.id));
        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }
    assert_eq!(seen, vec!["r1", "r2", "r3", "r4", "r5"]);

    assert_matches!(
        repo.list(Some("nope"), None).await,
        Err(StoreError::InvalidCursor(_))
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn patch_merges_and_keeps_id(pool: PgPool) {
    let repo = PgRepository::<Complaint>::new(pool);
    repo.create(complaint("a", "first")).await.unwrap();

    let merged = repo
        .patch("a", json!({ "id": "other", "managerReply": "On it" }))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(merged.id, "a");
    assert_eq!(merged.manager_reply.as_deref(), Some("On it"));
    assert_eq!(merged.title, "first");

    assert_matches!(
        repo.patch("a", json!({ "title": 42 })).await,
        Err(StoreError::InvalidPatch(_))
    );
    assert_eq!(repo.get("a").await.unwrap().title, "first");
    assert!(repo.patch("missing", json!({})).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn seeding_is_idempotent(pool: PgPool) {
    let repos = Repositories::postgres(pool);

    assert_eq!(repos.ensure_seed().await.unwrap(), 15);
    assert_eq!(repos.ensure_seed().await.unwrap(), 0);
    assert_eq!(repos.complaints.count().await.unwrap(), 3);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn singleton_save_replaces_value(pool: PgPool) {
    let store = PgSingleton::<MessSettings>::new(pool);
    assert_eq!(store.load().await.unwrap(), MessSettings::default());

    assert!(store.ensure_seed().await.unwrap());
    assert!(!store.ensure_seed().await.unwrap());

    let updated = MessSettings {
        monthly_amount: 4000,
        rules: vec!["Be on time.".into()],
    };
    store.save(updated.clone()).await.unwrap();
    assert_eq!(store.load().await.unwrap(), updated);
}
