mod delete;
mod inbox;
mod read;
mod render;
mod send;

use axum::{Router, routing::{get, post}};

use crate::AppState;

pub use delete::delete_message;
pub use inbox::{fetch_inbox, unread_count};
pub use read::{mark_one_read, mark_read};
pub use send::{MAX_CONTENT_CHARS, SendMessageRequest, send_message};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inbox::inbox).post(send::send))
        .route("/unread", get(inbox::unread))
        .route("/mark-read", post(read::mark_read_batch))
        .route("/{id}", axum::routing::delete(delete::delete))
        .route("/{id}/read", axum::routing::put(read::mark_one))
        .route("/{id}/card", get(render::render_card))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::{AppError, auth, auth::tests::test_pool};

    fn request(recipient: &str, content: &str, template: Option<&str>) -> SendMessageRequest {
        SendMessageRequest {
            recipient: recipient.to_owned(),
            content: content.to_owned(),
            card_template: template.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn send_rejects_empty_content() {
        let db_pool = test_pool().await;
        auth::create_user(&db_pool, "alice").await.unwrap();

        let err = send_message(&db_pool, request("alice", "", None)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn send_enforces_the_content_cap() {
        let db_pool = test_pool().await;
        auth::create_user(&db_pool, "alice").await.unwrap();

        let at_cap = "x".repeat(MAX_CONTENT_CHARS);
        assert!(send_message(&db_pool, request("alice", &at_cap, None)).await.is_ok());

        let over_cap = "x".repeat(MAX_CONTENT_CHARS + 1);
        let err = send_message(&db_pool, request("alice", &over_cap, None)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn send_to_unknown_recipient_creates_nothing() {
        let db_pool = test_pool().await;

        let err = send_message(&db_pool, request("nobody", "hi", None)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(&db_pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn template_binding_covers_all_three_branches() {
        let db_pool = test_pool().await;
        let alice = auth::create_user(&db_pool, "alice").await.unwrap();

        // explicit sender choice wins, even an id the catalog doesn't know
        let id = send_message(&db_pool, request("alice", "a", Some("galaxy"))).await.unwrap();
        assert_eq!(stored_template(&db_pool, &id).await, "galaxy");

        let id = send_message(&db_pool, request("alice", "b", Some("not-in-catalog"))).await.unwrap();
        assert_eq!(stored_template(&db_pool, &id).await, "not-in-catalog");

        // no sender choice falls back to the recipient preference
        sqlx::query("UPDATE users SET preferred_card_template='sunset' WHERE id=?")
            .bind(&alice.id)
            .execute(&db_pool)
            .await
            .unwrap();
        let id = send_message(&db_pool, request("alice", "c", None)).await.unwrap();
        assert_eq!(stored_template(&db_pool, &id).await, "sunset");

        // empty strings count as absent at both steps
        sqlx::query("UPDATE users SET preferred_card_template='' WHERE id=?")
            .bind(&alice.id)
            .execute(&db_pool)
            .await
            .unwrap();
        let id = send_message(&db_pool, request("alice", "d", Some(""))).await.unwrap();
        assert_eq!(stored_template(&db_pool, &id).await, "default");
    }

    async fn stored_template(db_pool: &sqlx::SqlitePool, id: &str) -> String {
        let (template,): (String,) = sqlx::query_as("SELECT card_template FROM messages WHERE id=?")
            .bind(id)
            .fetch_one(db_pool)
            .await
            .unwrap();
        template
    }

    #[tokio::test]
    async fn send_touches_recipient_last_seen() {
        let db_pool = test_pool().await;
        let alice = auth::create_user(&db_pool, "alice").await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        send_message(&db_pool, request("alice", "hello", None)).await.unwrap();

        let user = crate::db::fetch_user(&db_pool, &alice.id).await.unwrap().unwrap();
        assert!(user.last_seen > alice.last_seen);
    }

    #[tokio::test]
    async fn inbox_is_newest_first() {
        let db_pool = test_pool().await;
        let alice = auth::create_user(&db_pool, "alice").await.unwrap();

        let mut sent = Vec::new();
        for content in ["first", "second", "third"] {
            sent.push(send_message(&db_pool, request("alice", content, None)).await.unwrap());
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let inbox = fetch_inbox(&db_pool, &alice.id).await.unwrap();
        assert_eq!(inbox.len(), 3);
        assert_eq!(inbox[0].id, sent[2]);
        assert_eq!(inbox[1].id, sent[1]);
        assert_eq!(inbox[2].id, sent[0]);
        assert!(inbox.iter().all(|m| !m.is_read));
    }

    #[tokio::test]
    async fn mark_read_skips_messages_the_caller_does_not_own() {
        let db_pool = test_pool().await;
        let alice = auth::create_user(&db_pool, "alice").await.unwrap();
        let bob = auth::create_user(&db_pool, "bob").await.unwrap();

        let alices = send_message(&db_pool, request("alice", "for alice", None)).await.unwrap();
        let bobs = send_message(&db_pool, request("bob", "for bob", None)).await.unwrap();

        let updated = mark_read(&db_pool, &alice.id, &[alices.clone(), bobs.clone()])
            .await
            .unwrap();
        assert_eq!(updated, 1);

        let alice_inbox = fetch_inbox(&db_pool, &alice.id).await.unwrap();
        assert!(alice_inbox[0].is_read);
        let bob_inbox = fetch_inbox(&db_pool, &bob.id).await.unwrap();
        assert!(!bob_inbox[0].is_read);
    }

    #[tokio::test]
    async fn mark_read_is_idempotent() {
        let db_pool = test_pool().await;
        let alice = auth::create_user(&db_pool, "alice").await.unwrap();
        let id = send_message(&db_pool, request("alice", "once", None)).await.unwrap();

        assert_eq!(mark_read(&db_pool, &alice.id, &[id.clone()]).await.unwrap(), 1);
        assert_eq!(mark_read(&db_pool, &alice.id, &[id.clone()]).await.unwrap(), 0);

        // unknown and malformed ids are skipped, not errors
        let updated = mark_read(
            &db_pool,
            &alice.id,
            &[Uuid::now_v7().to_string(), "garbage".to_owned()],
        )
        .await
        .unwrap();
        assert_eq!(updated, 0);
    }

    #[tokio::test]
    async fn marking_one_foreign_message_is_forbidden() {
        let db_pool = test_pool().await;
        auth::create_user(&db_pool, "alice").await.unwrap();
        let bob = auth::create_user(&db_pool, "bob").await.unwrap();

        let id = send_message(&db_pool, request("alice", "private", None)).await.unwrap();
        let id = Uuid::parse_str(&id).unwrap();

        assert!(matches!(
            mark_one_read(&db_pool, &bob.id, &id).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            mark_one_read(&db_pool, &bob.id, &Uuid::now_v7()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn unread_count_is_an_exact_recount() {
        let db_pool = test_pool().await;
        let alice = auth::create_user(&db_pool, "alice").await.unwrap();

        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(send_message(&db_pool, request("alice", &format!("m{i}"), None)).await.unwrap());
        }
        assert_eq!(unread_count(&db_pool, &alice.id).await.unwrap(), 5);

        mark_read(&db_pool, &alice.id, &ids[..2]).await.unwrap();
        assert_eq!(unread_count(&db_pool, &alice.id).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let db_pool = test_pool().await;
        let alice = auth::create_user(&db_pool, "alice").await.unwrap();
        let bob = auth::create_user(&db_pool, "bob").await.unwrap();

        let id = send_message(&db_pool, request("alice", "bye", None)).await.unwrap();
        let id = Uuid::parse_str(&id).unwrap();

        // only the owning recipient may delete
        assert!(matches!(
            delete_message(&db_pool, &bob.id, &id).await,
            Err(AppError::NotFound(_))
        ));

        delete_message(&db_pool, &alice.id, &id).await.unwrap();
        assert!(matches!(
            delete_message(&db_pool, &alice.id, &id).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(fetch_inbox(&db_pool, &alice.id).await.unwrap().len(), 0);
    }
}
