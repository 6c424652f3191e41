use super::*;

#[test]
fn root_is_home() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    assert_eq!(AppRoute::from_path(""), AppRoute::Home);
}

#[test]
fn profile_parses_numeric_id() {
    assert_eq!(AppRoute::from_path("/profile/1"), AppRoute::Profile(1));
    assert_eq!(AppRoute::from_path("/profile/1/"), AppRoute::Profile(1));
    assert_eq!(AppRoute::from_path("/profile/abc"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/profile"), AppRoute::NotFound);
}

#[test]
fn signup_aliases_register() {
    assert_eq!(AppRoute::from_path("/signup"), AppRoute::Register);
    assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
}

#[test]
fn query_and_fragment_are_ignored() {
    assert_eq!(AppRoute::from_path("/friends?tab=all"), AppRoute::Friends);
    assert_eq!(AppRoute::from_path("/messages#latest"), AppRoute::Messages);
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(AppRoute::from_path("/watch"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/settings/privacy"), AppRoute::NotFound);
}

#[test]
fn path_round_trips_through_from_path() {
    for route in [AppRoute::Home, AppRoute::Profile(7), AppRoute::Friends, AppRoute::Login] {
        assert_eq!(AppRoute::from_path(&route.path()), route);
    }
}

#[test]
fn active_link_matching() {
    assert!(is_active("/", "/"));
    assert!(is_active("/friends?x=1", "/friends"));
    assert!(!is_active("/friends", "/"));
    assert!(!is_active("/watch", "/gaming"));
}
