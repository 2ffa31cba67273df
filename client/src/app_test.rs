use super::*;
use crate::util::location::StaticNavigator;

#[test]
fn profile_path_maps_to_profile() {
    assert_eq!(Route::from_path("/profile"), Route::Profile);
}

#[test]
fn root_and_unknown_paths_map_to_home() {
    for path in ["/", "", "/unknown", "/profile/", "/Profile", "/profile/edit"] {
        assert_eq!(Route::from_path(path), Route::Home, "path={path:?}");
    }
}

#[test]
fn route_paths_round_trip() {
    for route in [Route::Home, Route::Profile] {
        assert_eq!(Route::from_path(route.path()), route);
    }
}

#[test]
fn current_route_reads_navigator_path() {
    let profile = StaticNavigator::new("http://localhost:3000/profile?from=nav");
    assert_eq!(current_route(&profile), Route::Profile);

    let unknown = StaticNavigator::new("http://localhost:3000/unknown");
    assert_eq!(current_route(&unknown), Route::Home);
}

#[test]
fn route_titles() {
    assert_eq!(Route::Home.title(), "Home");
    assert_eq!(Route::Profile.title(), "Profile");
}
