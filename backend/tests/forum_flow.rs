//! End-to-end forum flow over in-memory storage: open a post, read it,
//! reply, toggle the upvote, mark it solved, and tear it down.

mod support;

use actix_web::test::TestRequest;
use serde_json::json;
use uuid::Uuid;

use support::{as_caller, init_app, send};

fn post_payload() -> serde_json::Value {
    json!({
        "title": "Where to print posters cheaply?",
        "content": "Need A2 prints by Friday",
        "category": "Campus Life",
        "tags": ["printing"],
    })
}

#[actix_web::test]
async fn post_lifecycle_with_votes_replies_and_the_solved_marker() {
    let app = init_app().await;
    let author = Uuid::new_v4();
    let voter = Uuid::new_v4();
    let admin = Uuid::new_v4();

    let (status, created) = send(
        &app,
        as_caller(TestRequest::post().uri("/api/forum/posts"), author, "student")
            .set_json(post_payload()),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["data"]["isSolved"], false);
    let id = created["data"]["id"].as_str().expect("post id").to_owned();

    // Two anonymous reads each count a view.
    let (_, first) = send(&app, TestRequest::get().uri(&format!("/api/forum/posts/{id}"))).await;
    assert_eq!(first["data"]["views"], 1);
    let (_, second) = send(&app, TestRequest::get().uri(&format!("/api/forum/posts/{id}"))).await;
    assert_eq!(second["data"]["views"], 2);

    // A reply bumps updatedAt and comes back inside the post.
    let (status, replied) = send(
        &app,
        as_caller(
            TestRequest::post().uri(&format!("/api/forum/posts/{id}/replies")),
            voter,
            "student",
        )
        .set_json(json!({ "content": "Try the stationery near gate 2" })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(replied["data"]["replies"][0]["author"], voter.to_string());
    assert!(replied["data"]["updatedAt"] != created["data"]["updatedAt"]);

    // Upvote toggles on, then off, restoring the pair.
    let (_, upvoted) = send(
        &app,
        as_caller(
            TestRequest::put().uri(&format!("/api/forum/posts/{id}/upvote")),
            voter,
            "student",
        ),
    )
    .await;
    assert_eq!(upvoted["data"]["upvotes"], 1);
    assert_eq!(upvoted["data"]["upvotedBy"], json!([voter.to_string()]));
    let (_, revoked) = send(
        &app,
        as_caller(
            TestRequest::put().uri(&format!("/api/forum/posts/{id}/upvote")),
            voter,
            "student",
        ),
    )
    .await;
    assert_eq!(revoked["data"]["upvotes"], 0);
    assert_eq!(revoked["data"]["upvotedBy"], json!([]));

    // Solving is for the author alone; admins get turned away.
    let (status, denied) = send(
        &app,
        as_caller(
            TestRequest::put().uri(&format!("/api/forum/posts/{id}/solve")),
            admin,
            "admin",
        ),
    )
    .await;
    assert_eq!(status, 403);
    assert_eq!(denied["message"], "not authorized to mark this post solved");

    let (_, solved) = send(
        &app,
        as_caller(
            TestRequest::put().uri(&format!("/api/forum/posts/{id}/solve")),
            author,
            "student",
        ),
    )
    .await;
    assert_eq!(solved["data"]["isSolved"], true);

    // An admin may delete a foreign post, after which it stays gone.
    let (status, deleted) = send(
        &app,
        as_caller(
            TestRequest::delete().uri(&format!("/api/forum/posts/{id}")),
            admin,
            "admin",
        ),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(deleted["message"], "Post deleted");

    let (status, gone) = send(&app, TestRequest::get().uri(&format!("/api/forum/posts/{id}"))).await;
    assert_eq!(status, 404);
    assert_eq!(gone["message"], "Post not found");
}

#[actix_web::test]
async fn listing_orders_follow_the_sort_parameter() {
    let app = init_app().await;
    let author = Uuid::new_v4();

    for title in ["first", "second"] {
        let (status, _) = send(
            &app,
            as_caller(TestRequest::post().uri("/api/forum/posts"), author, "student").set_json(
                json!({
                    "title": title,
                    "content": "body",
                    "category": "General",
                }),
            ),
        )
        .await;
        assert_eq!(status, 201);
    }

    // Read the listing once so the first post in it gains a view.
    let (_, feed) = send(&app, TestRequest::get().uri("/api/forum/posts")).await;
    assert_eq!(feed["count"], 2);
    let viewed_id = {
        let id = feed["data"][0]["id"].as_str().expect("id").to_owned();
        let (_, _) = send(&app, TestRequest::get().uri(&format!("/api/forum/posts/{id}"))).await;
        id
    };

    let (_, by_views) = send(&app, TestRequest::get().uri("/api/forum/posts?sort=views")).await;
    assert_eq!(by_views["data"][0]["id"], viewed_id.as_str());

    // Upvote the other post and check the popular order.
    let other_id = feed["data"][1]["id"].as_str().expect("id").to_owned();
    let (_, _) = send(
        &app,
        as_caller(
            TestRequest::put().uri(&format!("/api/forum/posts/{other_id}/upvote")),
            Uuid::new_v4(),
            "student",
        ),
    )
    .await;
    let (_, popular) = send(&app, TestRequest::get().uri("/api/forum/posts?sort=popular")).await;
    assert_eq!(popular["data"][0]["id"], other_id.as_str());
}

#[actix_web::test]
async fn anonymous_writes_are_rejected_with_the_failure_envelope() {
    let app = init_app().await;
    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/api/forum/posts")
            .set_json(post_payload()),
    )
    .await;
    assert_eq!(status, 401);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "caller identity required");
}
