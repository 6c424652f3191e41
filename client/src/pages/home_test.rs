use super::*;

fn jane() -> User {
    fixtures::current_user()
}

#[test]
fn feed_or_fixtures_keeps_fetched_posts() {
    let fetched = vec![compose_post(&jane(), "hello", &[]).unwrap()];
    assert_eq!(feed_or_fixtures(Ok(fetched.clone())), fetched);
}

#[test]
fn feed_or_fixtures_falls_back_on_error() {
    assert_eq!(feed_or_fixtures(Err(ApiError::Status { status: 503 })), fixtures::posts());
    assert_eq!(feed_or_fixtures(Err(ApiError::Unavailable)), fixtures::posts());
}

#[test]
fn feed_or_fixtures_falls_back_on_empty_feed() {
    assert_eq!(feed_or_fixtures(Ok(Vec::new())), fixtures::posts());
}

#[test]
fn compose_post_ignores_blank_text() {
    assert_eq!(compose_post(&jane(), "   \n", &fixtures::posts()), None);
}

#[test]
fn compose_post_trims_and_attributes_to_author() {
    let post = compose_post(&jane(), "  Shipping today  ", &[]).unwrap();
    assert_eq!(post.content, "Shipping today");
    assert_eq!(post.author.name, "Jane Doe");
    assert_eq!(post.posted, "Just now");
    assert_eq!((post.likes, post.comments, post.shares), (0, 0, 0));
    assert!(post.image.is_none());
}

#[test]
fn compose_post_id_follows_largest_existing() {
    let existing = fixtures::posts();
    let max = existing.iter().map(|p| p.id).max().unwrap();
    let post = compose_post(&jane(), "next", &existing).unwrap();
    assert_eq!(post.id, max + 1);
}

#[test]
fn compose_post_saturates_at_max_id() {
    let mut existing = fixtures::posts();
    existing[0].id = u64::MAX;
    assert_eq!(compose_post(&jane(), "edge", &existing).unwrap().id, u64::MAX);
}

#[test]
fn merge_feed_keeps_composed_posts_after_late_fetch() {
    let first = compose_post(&jane(), "first", &fixtures::posts()).unwrap();
    let second = compose_post(&jane(), "second", &[first.clone()]).unwrap();
    let composed = vec![second, first];

    let fetched = vec![compose_post(&jane(), "from server", &[]).unwrap()];
    let merged = merge_feed(&composed, &fetched);

    let contents: Vec<&str> = merged.iter().map(|p| p.content.as_str()).collect();
    assert_eq!(contents, vec!["second", "first", "from server"]);
}

#[test]
fn merge_feed_ids_stay_unique_and_newest_highest() {
    let composed = vec![
        compose_post(&jane(), "newer", &[]).unwrap(),
        compose_post(&jane(), "older", &[]).unwrap(),
    ];
    let fetched = fixtures::posts();
    let max_fetched = fetched.iter().map(|p| p.id).max().unwrap();
    let merged = merge_feed(&composed, &fetched);

    let ids: std::collections::HashSet<u64> = merged.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), merged.len());
    assert_eq!(merged[0].id, max_fetched + 2);
    assert_eq!(merged[1].id, max_fetched + 1);
}

#[test]
fn merge_feed_without_composed_is_fetched() {
    assert_eq!(merge_feed(&[], &fixtures::posts()), fixtures::posts());
}

#[test]
fn compose_post_first_id_is_one() {
    assert_eq!(compose_post(&jane(), "first", &[]).unwrap().id, 1);
}
