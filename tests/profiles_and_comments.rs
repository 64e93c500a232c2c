// tests/profiles_and_comments.rs
mod support;

use conduit_core::application::{
    commands::{
        comments::{AddCommentCommand, DeleteCommentCommand},
        profiles::FollowCommand,
    },
    error::ErrorKind,
    projection::Viewer,
};
use std::sync::atomic::Ordering;
use support::{ArticleSeed, TestApp, actor, seed_follow, seed_user};

fn target(username: &str) -> FollowCommand {
    FollowCommand {
        username: username.into(),
    }
}

fn comment(slug: &str, body: &str) -> AddCommentCommand {
    AddCommentCommand {
        slug: slug.into(),
        body: body.into(),
    }
}

/* -------------------------------- profiles -------------------------------- */

#[tokio::test]
async fn follow_is_idempotent_and_unfollow_reverts() {
    let app = TestApp::new();
    let jake = seed_user(&app.store, "jake");
    let anna = seed_user(&app.store, "anna");
    let commands = &app.services.profile_commands;

    let first = commands.follow(&actor(&jake), target("anna")).await.unwrap();
    let second = commands.follow(&actor(&jake), target("anna")).await.unwrap();
    assert!(first.following && second.following);
    assert!(app.store.is_following(jake.id, anna.id));

    let profile = app
        .services
        .profile_queries
        .get_profile(&Viewer::from(&actor(&jake)), "anna")
        .await
        .unwrap();
    assert!(profile.following);

    let after = commands.unfollow(&actor(&jake), target("anna")).await.unwrap();
    assert!(!after.following);
    assert!(!app.store.is_following(jake.id, anna.id));
    // Unfollowing again is a no-op.
    commands.unfollow(&actor(&jake), target("anna")).await.unwrap();
}

#[tokio::test]
async fn following_yourself_is_rejected() {
    let app = TestApp::new();
    let jake = seed_user(&app.store, "jake");

    let err = app
        .services
        .profile_commands
        .follow(&actor(&jake), target("jake"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn unknown_profile_is_not_found() {
    let app = TestApp::new();
    let jake = seed_user(&app.store, "jake");

    let err = app
        .services
        .profile_commands
        .follow(&actor(&jake), target("ghost"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = app
        .services
        .profile_queries
        .get_profile(&Viewer::Anonymous, "ghost")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn own_profile_is_never_followed() {
    let app = TestApp::new();
    let jake = seed_user(&app.store, "jake");
    app.store.counters.reset();

    let profile = app
        .services
        .profile_queries
        .get_profile(&Viewer::from(&actor(&jake)), "jake")
        .await
        .unwrap();

    assert!(!profile.following);
    assert_eq!(app.store.counters.follow_lookups(), 0);
}

/* -------------------------------- comments -------------------------------- */

#[tokio::test]
async fn comments_list_newest_first_with_batched_follow_flags() {
    let app = TestApp::new();
    let viewer = seed_user(&app.store, "viewer");
    let alice = seed_user(&app.store, "alice");
    let bob = seed_user(&app.store, "bob");
    seed_follow(&app.store, &viewer, &alice);
    ArticleSeed::titled("Talk").by(&app.store, &alice);
    let commands = &app.services.comment_commands;

    commands.add_comment(&actor(&alice), comment("talk", "first")).await.unwrap();
    commands.add_comment(&actor(&bob), comment("talk", "second")).await.unwrap();
    commands.add_comment(&actor(&viewer), comment("talk", "third")).await.unwrap();
    app.store.counters.reset();

    let comments = app
        .services
        .comment_queries
        .list_comments(&Viewer::from(&actor(&viewer)), "talk")
        .await
        .unwrap();

    let seen: Vec<(&str, &str, bool)> = comments
        .iter()
        .map(|c| (c.body.as_str(), c.author.username.as_str(), c.author.following))
        .collect();
    assert_eq!(
        seen,
        [
            ("third", "viewer", false),
            ("second", "bob", false),
            ("first", "alice", true),
        ]
    );
    assert_eq!(app.store.counters.followed_among.load(Ordering::SeqCst), 1);
    assert_eq!(app.store.counters.follow_exists.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn comment_needs_article_and_body() {
    let app = TestApp::new();
    let jake = seed_user(&app.store, "jake");

    let err = app
        .services
        .comment_commands
        .add_comment(&actor(&jake), comment("missing", "hello"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = app
        .services
        .comment_commands
        .add_comment(&actor(&jake), comment("missing", "  "))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn only_comment_author_may_delete() {
    let app = TestApp::new();
    let jake = seed_user(&app.store, "jake");
    let anna = seed_user(&app.store, "anna");
    ArticleSeed::titled("Post").by(&app.store, &jake);
    let commands = &app.services.comment_commands;

    let added = commands
        .add_comment(&actor(&anna), comment("post", "nice"))
        .await
        .unwrap();
    let delete = |id: i64| DeleteCommentCommand {
        slug: "post".into(),
        comment_id: id,
    };

    // The article author is not the comment author.
    let err = commands
        .delete_comment(&actor(&jake), delete(added.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let err = commands
        .delete_comment(&actor(&anna), delete(added.id + 100))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    commands
        .delete_comment(&actor(&anna), delete(added.id))
        .await
        .unwrap();
    assert_eq!(app.store.comment_count(), 0);
}

#[tokio::test]
async fn comment_ids_are_scoped_to_their_article() {
    let app = TestApp::new();
    let jake = seed_user(&app.store, "jake");
    ArticleSeed::titled("One").by(&app.store, &jake);
    ArticleSeed::titled("Two").by(&app.store, &jake);
    let commands = &app.services.comment_commands;

    let added = commands
        .add_comment(&actor(&jake), comment("one", "hi"))
        .await
        .unwrap();

    let err = commands
        .delete_comment(
            &actor(&jake),
            DeleteCommentCommand {
                slug: "two".into(),
                comment_id: added.id,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
