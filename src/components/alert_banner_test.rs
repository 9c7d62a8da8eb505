use super::*;

#[test]
fn hidden_banner_has_no_parts() {
    assert_eq!(banner_parts(&Banner::Hidden), None);
}

#[test]
fn error_banner_targets_error_container() {
    let banner = Banner::Error("File \"a.png\" is not a supported format.".to_owned());
    assert_eq!(
        banner_parts(&banner),
        Some(("error-container", "alert alert-danger", "File \"a.png\" is not a supported format."))
    );
}

#[test]
fn success_banner_targets_success_container() {
    let banner = Banner::Success("Converted".to_owned());
    assert_eq!(banner_parts(&banner), Some(("success-container", "alert alert-success", "Converted")));
}
