//! Markdown rendering for converted documents.

use crate::error::Result;
use crate::model::{Block, Document, Page, Paragraph, Table, TextStyle};

/// Render a document to Markdown.
///
/// Output starts with a level-1 title heading. Each page that produced at
/// least one block contributes a `## Page N` marker, its rendered blocks,
/// and a horizontal-rule separator; empty pages contribute nothing.
pub fn to_markdown(doc: &Document) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", doc.title));

    for page in &doc.pages {
        render_page(&mut output, page);
    }

    Ok(output.trim_end().to_string())
}

fn render_page(output: &mut String, page: &Page) {
    if page.is_empty() {
        return;
    }

    output.push_str(&format!("## Page {}\n\n", page.number));

    for block in &page.blocks {
        render_block(output, block);
    }

    output.push_str("---\n\n");
}

fn render_block(output: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            let prefix = "#".repeat((*level).clamp(1, 6) as usize);
            output.push_str(&prefix);
            output.push(' ');
            output.push_str(text);
            output.push_str("\n\n");
        }
        Block::Paragraph(p) => render_paragraph(output, p),
        Block::Table(t) => render_table(output, t),
    }
}

fn render_paragraph(output: &mut String, para: &Paragraph) {
    if para.is_empty() {
        return;
    }

    output.push_str(&apply_text_style(&para.text, para.style));
    output.push_str("\n\n");
}

/// Apply inline style markers, innermost first: bold wraps the text, italic
/// wraps the result, so a bold-italic paragraph nests italic outside bold.
fn apply_text_style(text: &str, style: TextStyle) -> String {
    let mut result = text.to_string();

    if style.bold {
        result = format!("**{}**", result);
    }
    if style.italic {
        result = format!("*{}*", result);
    }

    result
}

fn render_table(output: &mut String, table: &Table) {
    if table.column_count() == 0 {
        return;
    }

    render_row(output, &table.header);

    output.push('|');
    for _ in 0..table.column_count() {
        output.push_str(" --- |");
    }
    output.push('\n');

    for row in &table.rows {
        render_row(output, row);
    }

    output.push('\n');
}

fn render_row(output: &mut String, cells: &[String]) {
    output.push('|');
    for cell in cells {
        let content = cell.replace('\n', " ");
        output.push_str(&format!(" {} |", content.trim()));
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_only() {
        let doc = Document::new("report");
        let result = to_markdown(&doc).unwrap();
        assert_eq!(result, "# report");
    }

    #[test]
    fn test_empty_page_contributes_nothing() {
        let mut doc = Document::new("report");
        doc.add_page(Page::new(1));
        let result = to_markdown(&doc).unwrap();
        assert!(!result.contains("Page 1"));
    }

    #[test]
    fn test_page_with_content() {
        let mut doc = Document::new("report");
        let mut page = Page::new(1);
        page.add_block(Block::heading(1, "第一章 总则"));
        page.add_block(Block::paragraph("本章规定了基本原则。"));
        doc.add_page(page);

        let result = to_markdown(&doc).unwrap();
        assert!(result.starts_with("# report\n\n## Page 1\n\n# 第一章 总则"));
        assert!(result.contains("本章规定了基本原则。"));
        assert!(result.ends_with("---"));
    }

    #[test]
    fn test_heading_levels() {
        let mut doc = Document::new("doc");
        let mut page = Page::new(1);
        page.add_block(Block::heading(3, "小节"));
        doc.add_page(page);

        let result = to_markdown(&doc).unwrap();
        assert!(result.contains("### 小节"));
    }

    #[test]
    fn test_styled_paragraphs() {
        assert_eq!(
            apply_text_style("文本", TextStyle { bold: true, italic: false }),
            "**文本**"
        );
        assert_eq!(
            apply_text_style("文本", TextStyle { bold: false, italic: true }),
            "*文本*"
        );
        // Bold wraps first, italic outside
        assert_eq!(
            apply_text_style("文本", TextStyle { bold: true, italic: true }),
            "***文本***"
        );
    }

    #[test]
    fn test_table_rendering() {
        let mut doc = Document::new("doc");
        let mut page = Page::new(1);
        page.add_block(Block::Table(Table {
            header: vec!["A".into(), "B".into()],
            rows: vec![vec!["1".into(), "2".into()]],
        }));
        doc.add_page(page);

        let result = to_markdown(&doc).unwrap();
        assert!(result.contains("| A | B |\n| --- | --- |\n| 1 | 2 |"));
    }

    #[test]
    fn test_ragged_table_rendering() {
        let mut doc = Document::new("doc");
        let mut page = Page::new(1);
        page.add_block(Block::Table(Table {
            header: vec!["A".into(), "B".into()],
            rows: vec![vec!["1".into()]],
        }));
        doc.add_page(page);

        let result = to_markdown(&doc).unwrap();
        // Body row keeps its own arity
        assert!(result.contains("| A | B |\n| --- | --- |\n| 1 |"));
    }

    #[test]
    fn test_page_order() {
        let mut doc = Document::new("doc");
        for n in 1..=3 {
            let mut page = Page::new(n);
            page.add_block(Block::paragraph(format!("第{}页内容", n)));
            doc.add_page(page);
        }

        let result = to_markdown(&doc).unwrap();
        let p1 = result.find("## Page 1").unwrap();
        let p2 = result.find("## Page 2").unwrap();
        let p3 = result.find("## Page 3").unwrap();
        assert!(p1 < p2 && p2 < p3);
    }
}
