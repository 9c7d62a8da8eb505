use super::*;

#[test]
fn every_tool_lands_in_exactly_one_category_group() {
    let grouped: usize = categories().into_iter().map(|c| tools_in(c).count()).sum();
    assert_eq!(grouped, TOOLS.len());
}

#[test]
fn office_group_holds_powerpoint_and_excel() {
    let names: Vec<_> = tools_in("Office to PDF").map(|t| t.name).collect();
    assert_eq!(names, vec!["PowerPoint to PDF", "Excel to PDF"]);
}
