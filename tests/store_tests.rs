use sea_orm::EntityTrait;
use uuid::Uuid;

use emotrack::db::Store;
use emotrack::entities::users;
use emotrack::limits::EmotionKind;

async fn memory_store() -> Store {
    Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("Failed to create store")
}

#[tokio::test]
async fn record_emotion_upserts_a_single_limit_row() {
    let store = memory_store().await;
    let user_id = Uuid::new_v4();
    store.insert_user(user_id, "Alice Smith").await.unwrap();

    store
        .record_emotion(user_id, EmotionKind::Positive, 5, "523.71")
        .await
        .unwrap();
    store
        .record_emotion(user_id, EmotionKind::Negative, 3, "104.20")
        .await
        .unwrap();

    let limits = store.list_credit_limits().await.unwrap();
    assert_eq!(limits.len(), 1);
    assert_eq!(limits[0].credit_limit, "104.20");
    assert_eq!(limits[0].user_id, user_id.to_string());

    let latest = store.latest_credit_limit(user_id).await.unwrap().unwrap();
    assert_eq!(latest.credit_limit, "104.20");

    let emotions = store.list_emotions().await.unwrap();
    assert_eq!(emotions.len(), 2);
    assert_eq!(emotions[0].emotion_type, "positive");
    assert_eq!(emotions[1].emotion_type, "negative");
}

#[tokio::test]
async fn record_emotion_without_user_writes_nothing() {
    let store = memory_store().await;

    // Foreign-key violation on the emotion insert aborts the transaction,
    // so neither table gains a row.
    let result = store
        .record_emotion(Uuid::new_v4(), EmotionKind::Positive, 5, "510.00")
        .await;
    assert!(result.is_err());

    assert!(store.list_emotions().await.unwrap().is_empty());
    assert!(store.list_credit_limits().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_user_id_is_rejected() {
    let store = memory_store().await;
    let user_id = Uuid::new_v4();

    store.insert_user(user_id, "Alice Smith").await.unwrap();
    assert!(store.insert_user(user_id, "Bob Jones").await.is_err());

    let all = store.list_users().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Alice Smith");
}

#[tokio::test]
async fn deleting_a_user_cascades_to_owned_rows() {
    let store = memory_store().await;
    let user_id = Uuid::new_v4();
    store.insert_user(user_id, "Alice Smith").await.unwrap();
    store
        .record_emotion(user_id, EmotionKind::Positive, 8, "577.03")
        .await
        .unwrap();

    // No delete endpoint exists; the cascade lives at the storage level.
    users::Entity::delete_by_id(user_id.to_string())
        .exec(&store.conn)
        .await
        .unwrap();

    assert!(store.list_users().await.unwrap().is_empty());
    assert!(store.list_emotions().await.unwrap().is_empty());
    assert!(store.list_credit_limits().await.unwrap().is_empty());
}

#[tokio::test]
async fn latest_credit_limit_is_scoped_to_the_user() {
    let store = memory_store().await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    store.insert_user(alice, "Alice Smith").await.unwrap();
    store.insert_user(bob, "Bob Jones").await.unwrap();

    store
        .record_emotion(alice, EmotionKind::Positive, 5, "532.19")
        .await
        .unwrap();
    store
        .record_emotion(bob, EmotionKind::Negative, 2, "113.46")
        .await
        .unwrap();

    let for_alice = store.latest_credit_limit(alice).await.unwrap().unwrap();
    assert_eq!(for_alice.credit_limit, "532.19");

    let for_bob = store.latest_credit_limit(bob).await.unwrap().unwrap();
    assert_eq!(for_bob.credit_limit, "113.46");

    assert!(
        store
            .latest_credit_limit(Uuid::new_v4())
            .await
            .unwrap()
            .is_none()
    );
}
