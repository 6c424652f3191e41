use std::collections::HashSet;

use super::*;

#[test]
fn sidebar_has_hidden_links_beyond_visible_count() {
    assert!(SIDEBAR_LINKS.len() > SIDEBAR_VISIBLE);
}

#[test]
fn post_ids_are_unique() {
    let ids: HashSet<u64> = posts().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), posts().len());
}

#[test]
fn image_flag_produces_placeholder_url() {
    let posts = posts();
    assert_eq!(posts[0].image, None);
    assert_eq!(posts[1].image.as_deref(), Some("https://picsum.photos/800/450?random=102"));
}

#[test]
fn user_by_id_resolves_current_user_and_contacts() {
    assert_eq!(user_by_id(1), current_user());
    assert_eq!(user_by_id(2).name, "Bill Gates");
}

#[test]
fn user_by_id_unknown_gets_placeholder_name() {
    assert_eq!(user_by_id(404).name, "User 404");
}

#[test]
fn profile_posts_are_authored_by_profile_user() {
    let user = current_user();
    assert!(profile_posts(&user).iter().all(|p| p.author.name == user.name));
}
