use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

use whispercards::{AppError, auth, cards, db, messages, profiles};

async fn test_pool() -> SqlitePool {
    let db_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::init_schema(&db_pool).await.unwrap();
    db_pool
}

fn send(recipient: &str, content: &str, template: Option<&str>) -> messages::SendMessageRequest {
    messages::SendMessageRequest {
        recipient: recipient.to_owned(),
        content: content.to_owned(),
        card_template: template.map(str::to_owned),
    }
}

#[tokio::test]
async fn a_message_travels_the_whole_lifecycle() {
    let db_pool = test_pool().await;

    // register and sign in
    let alice = auth::create_user(&db_pool, "alice").await.unwrap();
    let token = auth::issue_token(&db_pool, &alice.id).await.unwrap();
    let caller = auth::authenticate(&db_pool, &token).await.unwrap();
    assert_eq!(caller.username, "alice");

    // the recipient prefers a card style for unstyled sends
    profiles::update_profile(
        &db_pool,
        &alice.id,
        profiles::UpdateProfileRequest {
            preferred_card_template: Some("midnight-blue".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // three anonymous strangers write in
    let styled = messages::send_message(&db_pool, send("alice", "you rock", Some("fire"))).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let unstyled = messages::send_message(&db_pool, send("alice", "hey", None)).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let latest = messages::send_message(&db_pool, send("alice", "hi again", None)).await.unwrap();

    // inbox arrives newest first, fully unread
    let inbox = messages::fetch_inbox(&db_pool, &caller.id).await.unwrap();
    assert_eq!(
        inbox.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
        [latest.as_str(), unstyled.as_str(), styled.as_str()]
    );
    assert_eq!(messages::unread_count(&db_pool, &caller.id).await.unwrap(), 3);

    // template binding: explicit choice vs. recipient preference
    assert_eq!(inbox[2].card_template, "fire");
    assert_eq!(inbox[1].card_template, "midnight-blue");

    // the viewing client marks everything it fetched as read
    let ids: Vec<String> = inbox.iter().map(|m| m.id.clone()).collect();
    let updated = messages::mark_read(&db_pool, &caller.id, &ids).await.unwrap();
    assert_eq!(updated, 3);
    assert_eq!(messages::unread_count(&db_pool, &caller.id).await.unwrap(), 0);

    // re-marking is a harmless no-op
    assert_eq!(messages::mark_read(&db_pool, &caller.id, &ids).await.unwrap(), 0);

    // export gets a style-complete render target
    let target = cards::render_target(&inbox[2].content, &inbox[2].card_template, false);
    assert_eq!(target.spec.id, "fire");
    assert_eq!(target.font_family, cards::OWNER_FONT);

    // delete is permanent; the second attempt finds nothing
    let id = Uuid::parse_str(&latest).unwrap();
    messages::delete_message(&db_pool, &caller.id, &id).await.unwrap();
    assert!(matches!(
        messages::delete_message(&db_pool, &caller.id, &id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(messages::fetch_inbox(&db_pool, &caller.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn inboxes_are_isolated_per_recipient() {
    let db_pool = test_pool().await;

    let alice = auth::create_user(&db_pool, "alice").await.unwrap();
    let bob = auth::create_user(&db_pool, "bob").await.unwrap();

    messages::send_message(&db_pool, send("alice", "for alice", None)).await.unwrap();
    let bobs = messages::send_message(&db_pool, send("bob", "for bob", None)).await.unwrap();

    assert_eq!(messages::fetch_inbox(&db_pool, &alice.id).await.unwrap().len(), 1);
    assert_eq!(messages::fetch_inbox(&db_pool, &bob.id).await.unwrap().len(), 1);

    // alice can neither read nor delete bob's mail
    let updated = messages::mark_read(&db_pool, &alice.id, &[bobs.clone()]).await.unwrap();
    assert_eq!(updated, 0);
    assert!(matches!(
        messages::delete_message(&db_pool, &alice.id, &Uuid::parse_str(&bobs).unwrap()).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(messages::unread_count(&db_pool, &bob.id).await.unwrap(), 1);
}
