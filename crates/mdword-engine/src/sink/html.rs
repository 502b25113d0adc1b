use std::convert::Infallible;

use crate::model::Document;

use super::{DocumentSink, FontHint, QuotePart, StyledRun, emit};

/// Renders a document as an HTML fragment.
///
/// Consecutive list items of the same kind share one `<ul>`/`<ol>`. Colours,
/// sizes and shading are written as inline `style` attributes so the
/// fragment can be pasted anywhere.
#[derive(Debug, Default)]
pub struct HtmlSink {
    buffer: String,
    /// `Some(ordered)` while a list is open.
    open_list: Option<bool>,
}

impl HtmlSink {
    pub const CODE_BACKGROUND: &'static str = "#F5F5F5";
    pub const HEADER_SHADING: &'static str = "#EEEEEE";
    pub const QUOTE_BACKGROUND: &'static str = "#F8F8F8";
    pub const QUOTE_BORDER: &'static str = "#CCCCCC";

    pub fn new() -> Self {
        Self::default()
    }

    /// Closes any open list and returns the HTML.
    pub fn finish(mut self) -> String {
        self.close_list();
        self.buffer
    }

    fn close_list(&mut self) {
        if let Some(ordered) = self.open_list.take() {
            self.buffer
                .push_str(if ordered { "</ol>\n" } else { "</ul>\n" });
        }
    }

    fn open_list(&mut self, ordered: bool) {
        if self.open_list == Some(ordered) {
            return;
        }
        self.close_list();
        self.buffer.push_str(if ordered { "<ol>\n" } else { "<ul>\n" });
        self.open_list = Some(ordered);
    }

    fn text(&mut self, text: &str) {
        let escaped = html_escape::encode_text(text);
        self.buffer.push_str(&escaped.replace('\n', "<br>"));
    }

    fn runs(&mut self, runs: &[StyledRun]) {
        for run in runs {
            self.run(run);
        }
    }

    fn run(&mut self, run: &StyledRun) {
        let style = style_attr(run);
        if let Some(style) = &style {
            self.buffer.push_str(&format!("<span{style}>"));
        }
        if run.bold {
            self.buffer.push_str("<strong>");
        }
        if run.font == FontHint::Monospace {
            self.buffer.push_str("<code>");
        }
        self.text(&run.text);
        if run.font == FontHint::Monospace {
            self.buffer.push_str("</code>");
        }
        if run.bold {
            self.buffer.push_str("</strong>");
        }
        if style.is_some() {
            self.buffer.push_str("</span>");
        }
    }

    fn code(&mut self, label: Option<&StyledRun>, code: &StyledRun) {
        self.buffer.push_str(&format!(
            "<pre style=\"background:{}\">",
            Self::CODE_BACKGROUND
        ));
        if let Some(label) = label {
            self.run(label);
            self.buffer.push('\n');
        }
        let style = style_attr(code).unwrap_or_default();
        self.buffer.push_str(&format!("<code{style}>"));
        self.buffer
            .push_str(html_escape::encode_text(&code.text).as_ref());
        self.buffer.push_str("</code></pre>\n");
    }

    fn quote(&mut self, parts: &[QuotePart]) {
        self.buffer.push_str(&format!(
            "<blockquote style=\"border-left:3px solid {};background:{};padding-left:1em\">\n",
            Self::QUOTE_BORDER,
            Self::QUOTE_BACKGROUND
        ));
        for part in parts {
            match part {
                QuotePart::Text(runs) => {
                    self.buffer.push_str("<p>");
                    self.runs(runs);
                    self.buffer.push_str("</p>\n");
                }
                QuotePart::Code { label, code } => self.code(label.as_ref(), code),
                QuotePart::Quote(inner) => self.quote(inner),
            }
        }
        self.buffer.push_str("</blockquote>\n");
    }
}

/// ` style="..."` for a run's colour and size, if it has either.
fn style_attr(run: &StyledRun) -> Option<String> {
    let mut decls = Vec::new();
    if let Some(color) = run.color {
        decls.push(format!("color:{color}"));
    }
    if let Some(points) = run.size_hint {
        decls.push(format!("font-size:{points}pt"));
    }
    (!decls.is_empty()).then(|| format!(" style=\"{}\"", decls.join(";")))
}

impl DocumentSink for HtmlSink {
    type Error = Infallible;

    fn append_heading(&mut self, level: u8, runs: &[StyledRun]) -> Result<(), Infallible> {
        self.close_list();
        let level = level.clamp(1, 6);
        self.buffer.push_str(&format!("<h{level}>"));
        self.runs(runs);
        self.buffer.push_str(&format!("</h{level}>\n"));
        Ok(())
    }

    fn append_paragraph(&mut self, runs: &[StyledRun]) -> Result<(), Infallible> {
        self.close_list();
        self.buffer.push_str("<p>");
        self.runs(runs);
        self.buffer.push_str("</p>\n");
        Ok(())
    }

    fn append_list_item(&mut self, ordered: bool, runs: &[StyledRun]) -> Result<(), Infallible> {
        self.open_list(ordered);
        self.buffer.push_str("<li>");
        self.runs(runs);
        self.buffer.push_str("</li>\n");
        Ok(())
    }

    fn append_code_block(
        &mut self,
        label: Option<&StyledRun>,
        code: &StyledRun,
    ) -> Result<(), Infallible> {
        self.close_list();
        self.code(label, code);
        Ok(())
    }

    fn append_table(
        &mut self,
        rows: &[Vec<Vec<StyledRun>>],
        has_header: bool,
    ) -> Result<(), Infallible> {
        self.close_list();
        self.buffer
            .push_str("<table style=\"border-collapse:collapse\">\n");
        for (i, row) in rows.iter().enumerate() {
            let (tag, style) = if has_header && i == 0 {
                (
                    "th",
                    format!("border:1px solid #000000;background:{}", Self::HEADER_SHADING),
                )
            } else {
                ("td", "border:1px solid #000000".to_string())
            };
            self.buffer.push_str("<tr>");
            for cell in row {
                self.buffer.push_str(&format!("<{tag} style=\"{style}\">"));
                self.runs(cell);
                self.buffer.push_str(&format!("</{tag}>"));
            }
            self.buffer.push_str("</tr>\n");
        }
        self.buffer.push_str("</table>\n");
        Ok(())
    }

    fn append_block_quote(&mut self, parts: &[QuotePart]) -> Result<(), Infallible> {
        self.close_list();
        self.quote(parts);
        Ok(())
    }

    fn append_thematic_break(&mut self) -> Result<(), Infallible> {
        self.close_list();
        self.buffer.push_str("<hr>\n");
        Ok(())
    }
}

/// Renders `document` with a fresh [`HtmlSink`].
pub fn render_html(document: &Document) -> String {
    let mut sink = HtmlSink::new();
    let Ok(()) = emit(document, &mut sink);
    sink.finish()
}
