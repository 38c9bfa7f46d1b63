//! Assembles print-ready HTML: renders markup through an external renderer and
//! splices in the embedded font, print overrides and the optimized stylesheet.
//! Turning that HTML into a PDF is left to the pagination engine.

use crate::error::OptimizerError;
use crate::optimizer::LayoutOptimizer;
use crate::persistence;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use quire_idf::Document;
use quire_style::{CssRule, CssSheet};
use std::fs;
use std::path::{Path, PathBuf};

/// Renders a document to HTML. Implemented by the report's markup renderer.
pub trait MarkupRenderer {
    fn render(&self, document: &Document) -> Result<String, OptimizerError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    OpenType,
    TrueType,
}

impl FontFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("otf") => FontFormat::OpenType,
            _ => FontFormat::TrueType,
        }
    }

    pub fn css_name(self) -> &'static str {
        match self {
            FontFormat::OpenType => "opentype",
            FontFormat::TrueType => "truetype",
        }
    }
}

/// A font file inlined into the stylesheet as a data URL.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedFont {
    pub family: String,
    pub format: FontFormat,
    pub data: Vec<u8>,
}

impl EmbeddedFont {
    pub const FAMILY: &'static str = "SourceHanSerif";

    /// Looked up in order; the full font wins over the subsets for glyph coverage.
    pub const CANDIDATES: [&'static str; 3] = [
        "SourceHanSerifSC-Medium.otf",
        "SourceHanSerifSC-Medium-Subset.ttf",
        "SourceHanSerifSC-Medium-Subset.otf",
    ];

    pub fn new(family: impl Into<String>, format: FontFormat, data: Vec<u8>) -> Self {
        Self {
            family: family.into(),
            format,
            data,
        }
    }

    /// Loads the first candidate font present in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, OptimizerError> {
        let dir = dir.as_ref();
        let path = Self::CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
            .ok_or_else(|| OptimizerError::FontNotFound(dir.to_path_buf()))?;

        log::info!("Embedding font: {}", path.display());
        let data = fs::read(&path).map_err(|e| OptimizerError::io(&path, e))?;
        Ok(Self::new(Self::FAMILY, FontFormat::from_path(&path), data))
    }

    /// The `@font-face` rule plus a rule forcing the family onto text elements.
    pub fn font_face_rules(&self) -> Vec<CssRule> {
        let format = self.format.css_name();
        vec![
            CssRule::new("@font-face")
                .decl("font-family", format!("'{}'", self.family))
                .decl(
                    "src",
                    format!(
                        "url(data:font/{};base64,{}) format('{}')",
                        format,
                        STANDARD.encode(&self.data),
                        format
                    ),
                )
                .decl("font-weight", "normal")
                .decl("font-style", "normal"),
            CssRule::new("body, h1, h2, h3, h4, h5, h6, p, li, td, th, div, span")
                .important("font-family", format!("'{}', serif", self.family)),
        ]
    }
}

/// Rules hiding screen-only chrome and swapping interactive charts for their fallbacks.
pub fn print_overrides() -> Vec<CssRule> {
    vec![
        CssRule::new(".report-header").important("display", "none"),
        CssRule::new(".no-print").important("display", "none"),
        CssRule::new("body").important("background", "white"),
        CssRule::new(".chart-container").important("display", "none"),
        CssRule::new(".chart-fallback").important("display", "block"),
    ]
}

/// Inserts `css` as a `<style>` block before the first `</head>`, or at the
/// very start when the markup has no head.
pub fn inject_stylesheet(html: &str, css: &str) -> String {
    let block = format!("<style>\n{}</style>\n", css);
    match html.find("</head>") {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + block.len());
            out.push_str(&html[..pos]);
            out.push_str(&block);
            out.push_str(&html[pos..]);
            out
        }
        None => {
            log::warn!("Markup has no </head>, prepending print stylesheet");
            format!("{}{}", block, html)
        }
    }
}

/// Produces print HTML for documents, optionally optimizing the layout per document.
pub struct PrintAssembler<R: MarkupRenderer> {
    renderer: R,
    optimizer: LayoutOptimizer,
    font: Option<EmbeddedFont>,
    log_dir: Option<PathBuf>,
}

impl<R: MarkupRenderer> PrintAssembler<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            optimizer: LayoutOptimizer::default(),
            font: None,
            log_dir: None,
        }
    }

    pub fn with_optimizer(mut self, optimizer: LayoutOptimizer) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn with_font(mut self, font: EmbeddedFont) -> Self {
        self.font = Some(font);
        self
    }

    /// Each optimization pass writes its config and audit record into `dir`.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn optimizer(&self) -> &LayoutOptimizer {
        &self.optimizer
    }

    /// Renders `document` and splices in the print stylesheet.
    ///
    /// With `optimize`, a pass runs first and its config replaces the current one.
    /// The config is only replaced once its audit file, if any, has been written.
    pub fn prepare_html(
        &mut self,
        document: &Document,
        optimize: bool,
    ) -> Result<String, OptimizerError> {
        if optimize {
            let optimization = self.optimizer.optimize_for_document(document);
            if let Some(dir) = &self.log_dir {
                let path = persistence::layout_log_path(dir, optimization.record.timestamp);
                persistence::save_layout(&path, &optimization.config, Some(&optimization.record))?;
            }
            self.optimizer.apply(&optimization);
        }

        let html = self.renderer.render(document)?;
        Ok(inject_stylesheet(&html, &self.stylesheet()))
    }

    /// The full print stylesheet: font face, overrides, then the layout rules.
    pub fn stylesheet(&self) -> String {
        let mut sheet = CssSheet::new();
        if let Some(font) = &self.font {
            sheet.comment("Embedded font");
            for rule in font.font_face_rules() {
                sheet.rule(rule);
            }
        }
        sheet.comment("Print overrides");
        for rule in print_overrides() {
            sheet.rule(rule);
        }
        format!("{}\n{}", sheet, self.optimizer.generate_css())
    }
}
