use super::*;

fn names(tools: &[&ToolDescriptor]) -> Vec<&'static str> {
    tools.iter().map(|t| t.name).collect()
}

#[test]
fn catalogue_has_eleven_tools() {
    assert_eq!(TOOLS.len(), 11);
}

#[test]
fn pdf_matches_every_tool_case_insensitively() {
    let results = filter_tools("pdf");
    assert_eq!(results.len(), 11);
    assert_eq!(filter_tools("PDF").len(), 11);
}

#[test]
fn unmatched_query_returns_nothing() {
    assert!(filter_tools("zzz").is_empty());
}

#[test]
fn empty_query_returns_everything() {
    assert_eq!(filter_tools("").len(), 11);
}

#[test]
fn filter_matches_name() {
    assert_eq!(names(&filter_tools("watermark")), vec!["Add Watermark"]);
}

#[test]
fn filter_matches_category_and_preserves_order() {
    assert_eq!(
        names(&filter_tools("edit")),
        vec!["Rotate PDF", "Add Page Numbers", "Add Watermark"]
    );
}

#[test]
fn filter_matches_name_or_category() {
    // "office" hits the Office to PDF category only; "word" hits two names.
    assert_eq!(names(&filter_tools("Office")), vec!["PowerPoint to PDF", "Excel to PDF"]);
    assert_eq!(names(&filter_tools("word")), vec!["Word to PDF", "PDF to Word"]);
}

#[test]
fn find_tool_by_page_name() {
    let tool = find_tool("rotate-pdf.html").unwrap();
    assert_eq!(tool.name, "Rotate PDF");
    assert_eq!(tool.upload.action, "/rotate-pdf");
    assert!(find_tool("nope.html").is_none());
}

#[test]
fn jpg_to_pdf_accepts_multiple_jpegs() {
    let tool = find_tool("jpg-to-pdf.html").unwrap();
    assert!(tool.upload.multiple);
    assert_eq!(tool.upload.field, "files");
    assert_eq!(tool.upload.accept, &["image/jpeg"]);
}

#[test]
fn pdf_input_tools_accept_pdf_only() {
    for page in ["pdf-to-jpg.html", "pdf-to-word.html", "rotate-pdf.html", "add-watermark.html"] {
        assert_eq!(find_tool(page).unwrap().upload.accept, &["application/pdf"], "{page}");
    }
}

#[test]
fn categories_are_distinct_in_order() {
    assert_eq!(categories(), vec!["Create PDF", "Convert PDF", "Edit PDF", "Office to PDF"]);
}
