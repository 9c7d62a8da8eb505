use super::*;
use crate::state::search::find_tool;
use crate::state::ui::Banner;
use crate::util::upload::{UploadFile, validate_upload};

fn file(name: &str, media_type: &str, size: u64) -> UploadFile {
    UploadFile { name: name.to_owned(), media_type: media_type.to_owned(), size }
}

#[test]
fn accept_attr_joins_media_types() {
    let tool = find_tool("word-to-pdf.html").expect("word tool");
    assert_eq!(
        accept_attr(&tool.upload),
        "application/msword,application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
}

#[test]
fn clean_selection_clears_banner() {
    let mut ui = UiState::default();
    ui.show_error("stale");
    let check = validate_upload(vec![file("a.pdf", "application/pdf", 10)], &["application/pdf"]);

    assert!(report_check(&mut ui, &check));
    assert_eq!(ui.banner, Banner::Hidden);
}

#[test]
fn bad_selection_shows_every_error() {
    let mut ui = UiState::default();
    let check = validate_upload(
        vec![file("a.png", "image/png", 10), file("b.pdf", "application/pdf", 11 * 1024 * 1024)],
        &["application/pdf"],
    );

    assert!(!report_check(&mut ui, &check));
    assert_eq!(
        ui.banner,
        Banner::Error(
            "File \"a.png\" is not a supported format. File \"b.pdf\" exceeds the 10MB size limit.".to_owned()
        )
    );
}
