//! README Scraping Rules
//!
//! Heuristic extraction of a display title, preview image, description, and
//! year from a repository's README document.
//!
//! ## Overview
//!
//! Each rule is a named pure function over the document text returning an
//! optional match; the enricher composes them as an ordered fallback list so
//! the precedence chain stays testable rule by rule. The rules are
//! intentionally heuristic and order-sensitive:
//!
//! - Title: first top-level `# ` heading, conventional leading emoji stripped
//! - Image: HTML `<img src>` candidates before Markdown `![..](..)` ones,
//!   first candidate not hosted on a badge domain wins
//! - Description: `## Description|About|Overview` section paragraph, then the
//!   block-quoted tagline, then the first plain line
//! - Year: first `202x` token anywhere in the text
//!
//! Markdown link syntax is reduced to its link text in every extracted
//! string.

use provider_github::RepoId;
use regex::Regex;

/// Hosts (or URL fragments) that serve status badges rather than preview
/// images. A candidate matching any of these is skipped.
const BADGE_HOSTS: &[&str] = &["shields.io", "travis-ci", "badge", "github.com/workflows"];

/// Compiled README extraction rules.
///
/// Compiling the patterns once per extractor keeps repeated enrichment runs
/// cheap; the output for a fixed document is fully deterministic.
pub struct ReadmeExtractor {
    title: Regex,
    html_image: Regex,
    md_image: Regex,
    section: Regex,
    tagline: Regex,
    link: Regex,
    year: Regex,
    paragraph_split: Regex,
}

impl ReadmeExtractor {
    pub fn new() -> Self {
        Self {
            title: Regex::new(r"(?m)^#\s+(?:\p{Emoji_Presentation}\s+)?(.+)$")
                .expect("invalid title pattern"),
            html_image: Regex::new(r#"(?i)<img[^>]+src\s*=\s*["']([^"']+)["']"#)
                .expect("invalid html image pattern"),
            md_image: Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").expect("invalid md image pattern"),
            section: Regex::new(
                r"(?ims)^##\s+(?:\p{Emoji_Presentation}\s+)?(?:Description|About|Overview)[^\n]*\n+(.*?)(?:\n##|\z)",
            )
            .expect("invalid section pattern"),
            tagline: Regex::new(r"(?m)^>\s+(.+)$").expect("invalid tagline pattern"),
            link: Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("invalid link pattern"),
            year: Regex::new(r"\b202\d\b").expect("invalid year pattern"),
            paragraph_split: Regex::new(r"\n{2,}").expect("invalid paragraph pattern"),
        }
    }

    /// First top-level heading, with a conventional leading emoji stripped.
    pub fn extract_title(&self, text: &str) -> Option<String> {
        self.title
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// All image references in precedence order: HTML `<img>` sources first,
    /// then Markdown image targets, each group in document order.
    pub fn image_candidates(&self, text: &str) -> Vec<String> {
        let html = self
            .html_image
            .captures_iter(text)
            .map(|caps| caps[1].to_string());
        let markdown = self
            .md_image
            .captures_iter(text)
            .map(|caps| caps[1].to_string());
        html.chain(markdown).collect()
    }

    /// First image candidate not hosted on a known badge domain.
    pub fn extract_image(&self, text: &str) -> Option<String> {
        self.image_candidates(text)
            .into_iter()
            .find(|url| !is_badge_url(url))
    }

    /// First non-empty, non-media, non-HTML paragraph under a heading named
    /// Description, About, or Overview.
    pub fn extract_section_description(&self, text: &str) -> Option<String> {
        let caps = self.section.captures(text)?;
        let body = caps.get(1)?.as_str();

        self.paragraph_split
            .split(body)
            .map(str::trim)
            .find(|p| !p.is_empty() && !p.starts_with('<') && !p.starts_with('!'))
            .map(|p| self.strip_links(p).trim().to_string())
    }

    /// First block-quoted line, the conventional tagline position.
    pub fn extract_tagline(&self, text: &str) -> Option<String> {
        self.tagline
            .captures(text)
            .map(|caps| self.strip_links(caps[1].trim()).trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// First line that is not a heading, image, HTML tag, or code-fence
    /// delimiter.
    pub fn extract_first_paragraph(&self, text: &str) -> Option<String> {
        text.lines()
            .map(str::trim)
            .find(|line| {
                !line.is_empty()
                    && !line.starts_with('#')
                    && !line.starts_with("![")
                    && !line.starts_with('<')
                    && !line.starts_with("```")
            })
            .map(|line| self.strip_links(line).trim().to_string())
    }

    /// First 4-digit token of the current decade anywhere in the text.
    pub fn extract_year(&self, text: &str) -> Option<String> {
        self.year.find(text).map(|m| m.as_str().to_string())
    }

    /// Reduce Markdown link syntax to the plain link text.
    pub fn strip_links(&self, text: &str) -> String {
        self.link.replace_all(text, "${1}").into_owned()
    }
}

impl Default for ReadmeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an image URL points at a badge host rather than a preview image.
pub fn is_badge_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    BADGE_HOSTS.iter().any(|host| lower.contains(host))
}

/// Resolve a README asset path to an absolute raw-content URL.
///
/// Absolute URLs pass through unchanged; relative paths have their leading
/// `./` / `/` markers removed and are rewritten against the repository's
/// resolved default branch.
pub fn resolve_asset_url(raw_base: &str, id: &RepoId, branch: &str, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }

    let mut clean = path;
    while let Some(rest) = clean.strip_prefix("./").or_else(|| clean.strip_prefix('/')) {
        clean = rest;
    }

    format!("{}/{}/{}/{}/{}", raw_base, id.owner, id.name, branch, clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ReadmeExtractor {
        ReadmeExtractor::new()
    }

    #[test]
    fn test_title_plain_heading() {
        let text = "# Widget\n\nSome text.";
        assert_eq!(extractor().extract_title(text), Some("Widget".to_string()));
    }

    #[test]
    fn test_title_strips_leading_emoji() {
        let text = "# 🚀 Widget Factory\n";
        assert_eq!(
            extractor().extract_title(text),
            Some("Widget Factory".to_string())
        );
    }

    #[test]
    fn test_title_ignores_subheadings() {
        let text = "## Setup\n\n# Real Title\n";
        assert_eq!(
            extractor().extract_title(text),
            Some("Real Title".to_string())
        );
    }

    #[test]
    fn test_title_absent() {
        assert_eq!(extractor().extract_title("just text, no heading"), None);
    }

    #[test]
    fn test_image_html_takes_precedence_over_markdown() {
        let text = "![md](md.png)\n<img src=\"html.png\" alt=\"x\">\n";
        assert_eq!(extractor().extract_image(text), Some("html.png".to_string()));
    }

    #[test]
    fn test_image_markdown_when_no_html() {
        let text = "intro\n![banner](./img/banner.png)\n";
        assert_eq!(
            extractor().extract_image(text),
            Some("./img/banner.png".to_string())
        );
    }

    #[test]
    fn test_image_html_single_quotes_and_attributes() {
        let text = "<img width='600' src='shots/demo.gif' align='center'>";
        assert_eq!(
            extractor().extract_image(text),
            Some("shots/demo.gif".to_string())
        );
    }

    #[test]
    fn test_image_skips_badges() {
        let text = concat!(
            "![build](https://img.shields.io/badge/build-passing-green)\n",
            "![ci](https://travis-ci.org/acme/widget.svg)\n",
            "![banner](./banner.png)\n",
        );
        assert_eq!(
            extractor().extract_image(text),
            Some("./banner.png".to_string())
        );
    }

    #[test]
    fn test_image_all_badges_yields_none() {
        let text = "![build](https://img.shields.io/badge/build-passing-green)";
        assert_eq!(extractor().extract_image(text), None);
    }

    #[test]
    fn test_section_description_first_paragraph() {
        let text = concat!(
            "# Widget\n\n",
            "## Description\n\n",
            "![screenshot](s.png)\n\n",
            "A tool for making widgets quickly.\n\n",
            "Second paragraph.\n\n",
            "## Install\n",
        );
        assert_eq!(
            extractor().extract_section_description(text),
            Some("A tool for making widgets quickly.".to_string())
        );
    }

    #[test]
    fn test_section_description_matches_about_with_emoji() {
        let text = "## 📖 About the project\n\nBuilds things.\n";
        assert_eq!(
            extractor().extract_section_description(text),
            Some("Builds things.".to_string())
        );
    }

    #[test]
    fn test_section_description_strips_links() {
        let text = "## Overview\n\nUses [serde](https://serde.rs) underneath.\n";
        assert_eq!(
            extractor().extract_section_description(text),
            Some("Uses serde underneath.".to_string())
        );
    }

    #[test]
    fn test_section_description_absent() {
        assert_eq!(
            extractor().extract_section_description("# Widget\n\nNo sections here.\n"),
            None
        );
    }

    #[test]
    fn test_tagline() {
        let text = "# Widget\n\n> Fast widgets.\n";
        assert_eq!(
            extractor().extract_tagline(text),
            Some("Fast widgets.".to_string())
        );
    }

    #[test]
    fn test_tagline_strips_links() {
        let text = "> Powered by [tokio](https://tokio.rs).";
        assert_eq!(
            extractor().extract_tagline(text),
            Some("Powered by tokio.".to_string())
        );
    }

    #[test]
    fn test_first_paragraph_skips_noise() {
        let text = concat!(
            "# Title\n",
            "![badge](b.svg)\n",
            "<p align=\"center\">\n",
            "```sh\n",
            "cargo run\n",
            "```\n",
            "The actual description line.\n",
        );
        // Only the fence delimiters are filtered, not the fence body, so the
        // first plain line here is the command inside the fence.
        assert_eq!(
            extractor().extract_first_paragraph(text),
            Some("cargo run".to_string())
        );
    }

    #[test]
    fn test_first_paragraph_plain_line() {
        let text = "# Title\n\nBuilds widgets at scale.\n";
        assert_eq!(
            extractor().extract_first_paragraph(text),
            Some("Builds widgets at scale.".to_string())
        );
    }

    #[test]
    fn test_year_found() {
        let text = "Built during winter 2024 as an experiment.";
        assert_eq!(extractor().extract_year(text), Some("2024".to_string()));
    }

    #[test]
    fn test_year_ignores_other_numbers() {
        assert_eq!(extractor().extract_year("v1.2021999 and 1995"), None);
    }

    #[test]
    fn test_resolve_asset_url_relative() {
        let id = RepoId::new("acme", "widget");
        assert_eq!(
            resolve_asset_url("https://raw.example.com", &id, "main", "./img/banner.png"),
            "https://raw.example.com/acme/widget/main/img/banner.png"
        );
        assert_eq!(
            resolve_asset_url("https://raw.example.com", &id, "main", "/img/banner.png"),
            "https://raw.example.com/acme/widget/main/img/banner.png"
        );
        assert_eq!(
            resolve_asset_url("https://raw.example.com", &id, "trunk", "banner.png"),
            "https://raw.example.com/acme/widget/trunk/banner.png"
        );
    }

    #[test]
    fn test_resolve_asset_url_absolute_passthrough() {
        let id = RepoId::new("acme", "widget");
        assert_eq!(
            resolve_asset_url("https://raw.example.com", &id, "main", "https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "# 🚀 Widget\n\n> Fast widgets since 2023.\n\n![banner](./b.png)\n";
        let ex = extractor();

        let first = (
            ex.extract_title(text),
            ex.extract_image(text),
            ex.extract_tagline(text),
            ex.extract_year(text),
        );
        let second = (
            ex.extract_title(text),
            ex.extract_image(text),
            ex.extract_tagline(text),
            ex.extract_year(text),
        );

        assert_eq!(first, second);
    }
}
