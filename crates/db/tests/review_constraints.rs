//! Integration tests for reviews and comments.
//!
//! Exercises the one-review-per-(title, author) constraint, score bounds,
//! cascade behaviour through titles, users, and reviews, and retrieval
//! ordering of comments.

use assert_matches::assert_matches;
use critica_core::error::CoreError;
use critica_db::error::DbError;
use critica_db::models::comment::CreateComment;
use critica_db::models::review::{CreateReview, UpdateReview};
use critica_db::models::title::CreateTitle;
use critica_db::models::user::CreateUser;
use critica_db::repositories::{CommentRepo, ReviewRepo, TitleRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            role: "user".to_string(),
            bio: None,
            first_name: None,
            last_name: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_title(pool: &PgPool, name: &str) -> i64 {
    TitleRepo::create(
        pool,
        &CreateTitle {
            name: name.to_string(),
            year: 1999,
            category_id: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn new_review(title_id: i64, author_id: i64, score: i32) -> CreateReview {
    CreateReview {
        title_id,
        author_id,
        text: "A fine piece of work.".to_string(),
        score: Some(score),
    }
}

fn new_comment(review_id: i64, author_id: i64, text: &str) -> CreateComment {
    CreateComment {
        review_id,
        author_id,
        text: text.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Score bounds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_score_bounds_accepted(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let low = seed_user(&pool, "alice").await;
    let high = seed_user(&pool, "bob").await;

    let review = ReviewRepo::create(&pool, &new_review(title, low, 1)).await.unwrap();
    assert_eq!(review.score, 1);
    let review = ReviewRepo::create(&pool, &new_review(title, high, 10)).await.unwrap();
    assert_eq!(review.score, 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_score_out_of_range_rejected(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let author = seed_user(&pool, "alice").await;

    let err = ReviewRepo::create(&pool, &new_review(title, author, 0))
        .await
        .expect_err("score 0 should fail validation");
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));

    let err = ReviewRepo::create(&pool, &new_review(title, author, 11))
        .await
        .expect_err("score 11 should fail validation");
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_score_defaults_to_one(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let author = seed_user(&pool, "alice").await;

    let mut input = new_review(title, author, 5);
    input.score = None;

    let review = ReviewRepo::create(&pool, &input).await.unwrap();
    assert_eq!(review.score, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_review_text_rejected(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let author = seed_user(&pool, "alice").await;

    let mut input = new_review(title, author, 5);
    input.text = "   ".to_string();

    let err = ReviewRepo::create(&pool, &input)
        .await
        .expect_err("blank text should fail validation");
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));
}

// ---------------------------------------------------------------------------
// One review per (title, author)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_review_per_title_author_rejected(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let other_title = seed_title(&pool, "Stalker").await;
    let author = seed_user(&pool, "alice").await;
    let other_author = seed_user(&pool, "bob").await;

    ReviewRepo::create(&pool, &new_review(title, author, 7))
        .await
        .unwrap();

    // Same (title, author): rejected.
    let err = ReviewRepo::create(&pool, &new_review(title, author, 9))
        .await
        .expect_err("second review for the same (title, author) should fail");
    assert!(err.is_unique_violation());
    assert_eq!(err.unique_constraint(), Some("uq_reviews_title_author"));

    // Different author or different title: fine.
    ReviewRepo::create(&pool, &new_review(title, other_author, 9))
        .await
        .unwrap();
    ReviewRepo::create(&pool, &new_review(other_title, author, 9))
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_title_and_author(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let author = seed_user(&pool, "alice").await;

    assert!(ReviewRepo::find_by_title_and_author(&pool, title, author)
        .await
        .unwrap()
        .is_none());

    let review = ReviewRepo::create(&pool, &new_review(title, author, 7))
        .await
        .unwrap();

    let found = ReviewRepo::find_by_title_and_author(&pool, title, author)
        .await
        .unwrap()
        .expect("review should be findable by (title, author)");
    assert_eq!(found.id, review.id);
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_title_cascades_reviews_and_comments(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let author = seed_user(&pool, "alice").await;
    let commenter = seed_user(&pool, "bob").await;

    let review = ReviewRepo::create(&pool, &new_review(title, author, 7))
        .await
        .unwrap();
    let comment = CommentRepo::create(&pool, &new_comment(review.id, commenter, "Agreed."))
        .await
        .unwrap();

    assert!(TitleRepo::delete(&pool, title).await.unwrap());

    assert!(ReviewRepo::find_by_id(&pool, review.id)
        .await
        .unwrap()
        .is_none());
    assert!(CommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .is_none());

    // The authors survive.
    assert!(UserRepo::find_by_id(&pool, author).await.unwrap().is_some());
    assert!(UserRepo::find_by_id(&pool, commenter)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_review_cascades_comments(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let author = seed_user(&pool, "alice").await;

    let review = ReviewRepo::create(&pool, &new_review(title, author, 7))
        .await
        .unwrap();
    let comment = CommentRepo::create(&pool, &new_comment(review.id, author, "Self-reply."))
        .await
        .unwrap();

    assert!(ReviewRepo::delete(&pool, review.id).await.unwrap());
    assert!(CommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .is_none());

    // The title survives.
    assert!(TitleRepo::find_by_id(&pool, title).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_user_cascades_reviews_and_comments(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let author = seed_user(&pool, "alice").await;
    let commenter = seed_user(&pool, "bob").await;

    let review = ReviewRepo::create(&pool, &new_review(title, author, 7))
        .await
        .unwrap();
    let comment = CommentRepo::create(&pool, &new_comment(review.id, commenter, "Agreed."))
        .await
        .unwrap();

    // Deleting the commenter removes only their comment.
    assert!(UserRepo::delete(&pool, commenter).await.unwrap());
    assert!(CommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .is_none());
    assert!(ReviewRepo::find_by_id(&pool, review.id)
        .await
        .unwrap()
        .is_some());

    // Deleting the review author removes the review.
    assert!(UserRepo::delete(&pool, author).await.unwrap());
    assert!(ReviewRepo::find_by_id(&pool, review.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Ordering and aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comments_ordered_oldest_first(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let author = seed_user(&pool, "alice").await;
    let review = ReviewRepo::create(&pool, &new_review(title, author, 7))
        .await
        .unwrap();

    CommentRepo::create(&pool, &new_comment(review.id, author, "first"))
        .await
        .unwrap();
    CommentRepo::create(&pool, &new_comment(review.id, author, "second"))
        .await
        .unwrap();
    CommentRepo::create(&pool, &new_comment(review.id, author, "third"))
        .await
        .unwrap();

    let texts: Vec<String> = CommentRepo::list_by_review(&pool, review.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.text)
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reviews_listed_newest_first(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    ReviewRepo::create(&pool, &new_review(title, alice, 7))
        .await
        .unwrap();
    ReviewRepo::create(&pool, &new_review(title, bob, 9))
        .await
        .unwrap();

    let reviews = ReviewRepo::list_by_title(&pool, title).await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].author_id, bob, "newest review should come first");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_average_score(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    assert!(ReviewRepo::average_score(&pool, title)
        .await
        .unwrap()
        .is_none());

    ReviewRepo::create(&pool, &new_review(title, alice, 4))
        .await
        .unwrap();
    ReviewRepo::create(&pool, &new_review(title, bob, 9))
        .await
        .unwrap();

    let avg = ReviewRepo::average_score(&pool, title)
        .await
        .unwrap()
        .expect("average should exist once reviews do");
    assert!((avg - 6.5).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// Patch updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_review_patch(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let author = seed_user(&pool, "alice").await;
    let review = ReviewRepo::create(&pool, &new_review(title, author, 7))
        .await
        .unwrap();

    let updated = ReviewRepo::update(
        &pool,
        review.id,
        &UpdateReview {
            text: None,
            score: Some(3),
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");

    assert_eq!(updated.score, 3);
    assert_eq!(updated.text, review.text, "text should be untouched");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_review_score_out_of_range_rejected(pool: PgPool) {
    let title = seed_title(&pool, "Solaris").await;
    let author = seed_user(&pool, "alice").await;
    let review = ReviewRepo::create(&pool, &new_review(title, author, 7))
        .await
        .unwrap();

    let err = ReviewRepo::update(
        &pool,
        review.id,
        &UpdateReview {
            text: None,
            score: Some(12),
        },
    )
    .await
    .expect_err("score 12 should fail validation");
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));
}
