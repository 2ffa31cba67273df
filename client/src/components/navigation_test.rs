use super::*;

#[test]
fn nav_links_follow_route_paths_and_titles() {
    let links: Vec<_> = nav_links().collect();
    assert_eq!(links, vec![("/", "Home"), ("/profile", "Profile")]);
}

#[test]
fn every_nav_link_resolves_to_its_own_route() {
    for (route, (href, _)) in NAV_ROUTES.into_iter().zip(nav_links()) {
        assert_eq!(Route::from_path(href), route);
    }
}
