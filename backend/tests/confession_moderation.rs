//! End-to-end confession moderation: the public feed only shows approved
//! confessions, approval is admin-only and idempotent, and deletion is
//! terminal.

mod support;

use actix_web::test::TestRequest;
use serde_json::json;
use uuid::Uuid;

use support::{as_caller, init_app, send};

#[actix_web::test]
async fn pending_confessions_stay_out_of_the_public_feed_until_approved() {
    let app = init_app().await;
    let author = Uuid::new_v4();
    let admin = Uuid::new_v4();

    let (status, created) = send(
        &app,
        as_caller(TestRequest::post().uri("/api/confessions"), author, "student")
            .set_json(json!({ "content": "I nap in the library" })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["data"]["isAnonymous"], true);
    assert_eq!(created["data"]["isApproved"], false);
    let id = created["data"]["id"].as_str().expect("id").to_owned();

    // Public feed is empty; the moderation feed sees the pending record.
    let (_, public) = send(&app, TestRequest::get().uri("/api/confessions")).await;
    assert_eq!(public["count"], 0);

    let (status, _) = send(
        &app,
        as_caller(TestRequest::get().uri("/api/confessions/all"), author, "student"),
    )
    .await;
    assert_eq!(status, 403);

    let (_, moderation) = send(
        &app,
        as_caller(TestRequest::get().uri("/api/confessions/all"), admin, "admin"),
    )
    .await;
    assert_eq!(moderation["count"], 1);

    // Approval is idempotent: a second call leaves the record approved.
    for _ in 0..2 {
        let (status, approved) = send(
            &app,
            as_caller(
                TestRequest::put().uri(&format!("/api/confessions/{id}/approve")),
                admin,
                "admin",
            ),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(approved["data"]["isApproved"], true);
    }

    let (_, public) = send(&app, TestRequest::get().uri("/api/confessions")).await;
    assert_eq!(public["count"], 1);
    assert_eq!(public["data"][0]["id"], id.as_str());
}

#[actix_web::test]
async fn likes_toggle_and_deletion_is_terminal() {
    let app = init_app().await;
    let author = Uuid::new_v4();
    let fan = Uuid::new_v4();

    let (_, created) = send(
        &app,
        as_caller(TestRequest::post().uri("/api/confessions"), author, "student")
            .set_json(json!({ "content": "secret", "isAnonymous": false })),
    )
    .await;
    assert_eq!(created["data"]["isAnonymous"], false);
    let id = created["data"]["id"].as_str().expect("id").to_owned();

    let (_, liked) = send(
        &app,
        as_caller(
            TestRequest::put().uri(&format!("/api/confessions/{id}/like")),
            fan,
            "student",
        ),
    )
    .await;
    assert_eq!(liked["data"]["likes"], 1);

    let (_, unliked) = send(
        &app,
        as_caller(
            TestRequest::put().uri(&format!("/api/confessions/{id}/like")),
            fan,
            "student",
        ),
    )
    .await;
    assert_eq!(unliked["data"]["likes"], 0);

    // A stranger cannot delete; the author can; the record stays gone.
    let (status, _) = send(
        &app,
        as_caller(
            TestRequest::delete().uri(&format!("/api/confessions/{id}")),
            fan,
            "student",
        ),
    )
    .await;
    assert_eq!(status, 403);

    let (status, deleted) = send(
        &app,
        as_caller(
            TestRequest::delete().uri(&format!("/api/confessions/{id}")),
            author,
            "student",
        ),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(deleted["message"], "Confession deleted");

    let (status, gone) = send(
        &app,
        as_caller(
            TestRequest::put().uri(&format!("/api/confessions/{id}/like")),
            fan,
            "student",
        ),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(gone["message"], "Confession not found");
}
