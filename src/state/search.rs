//! Static tool catalogue and the search filter over it.
//!
//! DESIGN
//! ======
//! The catalogue is a fixed compile-time list. Search rescans the whole list
//! on every call; with eleven entries there is nothing to index.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Rendered in place of results when nothing matches.
pub const NO_TOOLS_FOUND: &str = "No tools found";

const PDF: &[&str] = &["application/pdf"];
const JPEG: &[&str] = &["image/jpeg"];
const WORD: &[&str] = &[
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];
const HTML: &[&str] = &["text/html"];
const POWERPOINT: &[&str] = &[
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
];
const EXCEL: &[&str] = &[
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// How a tool's upload form talks to the conversion backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadSpec {
    /// Form `action` on the backend.
    pub action: &'static str,
    /// Multipart field name.
    pub field: &'static str,
    pub multiple: bool,
    /// Accepted media types.
    pub accept: &'static [&'static str],
}

/// One conversion utility offered by the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub category: &'static str,
    pub url: &'static str,
    pub upload: UploadSpec,
}

const fn tool(
    name: &'static str,
    category: &'static str,
    url: &'static str,
    action: &'static str,
    accept: &'static [&'static str],
) -> ToolDescriptor {
    ToolDescriptor { name, category, url, upload: UploadSpec { action, field: "file", multiple: false, accept } }
}

pub const TOOLS: [ToolDescriptor; 11] = [
    ToolDescriptor {
        name: "JPG to PDF",
        category: "Create PDF",
        url: "/tools/jpg-to-pdf.html",
        upload: UploadSpec { action: "/convert-jpg-to-pdf", field: "files", multiple: true, accept: JPEG },
    },
    tool("Word to PDF", "Create PDF", "/tools/word-to-pdf.html", "/convert-word-to-pdf", WORD),
    tool("HTML to PDF", "Create PDF", "/tools/html-to-pdf.html", "/convert-html-to-pdf", HTML),
    tool("PDF to JPG", "Convert PDF", "/tools/pdf-to-jpg.html", "/convert-pdf-to-jpeg", PDF),
    tool("PDF to Word", "Convert PDF", "/tools/pdf-to-word.html", "/convert-pdf-to-word", PDF),
    tool("PDF to Excel", "Convert PDF", "/tools/pdf-to-excel.html", "/convert-pdf-to-excel", PDF),
    tool("Rotate PDF", "Edit PDF", "/tools/rotate-pdf.html", "/rotate-pdf", PDF),
    tool("Add Page Numbers", "Edit PDF", "/tools/add-page-numbers.html", "/add-page-numbers", PDF),
    tool("Add Watermark", "Edit PDF", "/tools/add-watermark.html", "/add-watermark", PDF),
    tool("PowerPoint to PDF", "Office to PDF", "/tools/powerpoint-to-pdf.html", "/convert-powerpoint-to-pdf", POWERPOINT),
    tool("Excel to PDF", "Office to PDF", "/tools/excel-to-pdf.html", "/convert-excel-to-pdf", EXCEL),
];

/// Tools whose name or category contains `query`, case-insensitively, in catalogue order.
#[must_use]
pub fn filter_tools(query: &str) -> Vec<&'static ToolDescriptor> {
    let needle = query.to_lowercase();
    TOOLS
        .iter()
        .filter(|tool| tool.name.to_lowercase().contains(&needle) || tool.category.to_lowercase().contains(&needle))
        .collect()
}

/// Look up a tool by the last path segment of its URL (`"rotate-pdf.html"`).
#[must_use]
pub fn find_tool(page: &str) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|tool| tool.url.rsplit('/').next() == Some(page))
}

/// Distinct categories in catalogue order.
#[must_use]
pub fn categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for tool in &TOOLS {
        if !out.contains(&tool.category) {
            out.push(tool.category);
        }
    }
    out
}
