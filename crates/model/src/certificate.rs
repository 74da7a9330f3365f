//! Certification card markup

/// Caller-supplied certificate shown in the certifications grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub title: String,
    pub provider: String,
    pub year: String,
    pub image_url: String,
    pub certificate_url: String,
}

impl Certificate {
    pub fn new(
        title: impl Into<String>,
        provider: impl Into<String>,
        year: impl Into<String>,
        image_url: impl Into<String>,
        certificate_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            provider: provider.into(),
            year: year.into(),
            image_url: image_url.into(),
            certificate_url: certificate_url.into(),
        }
    }

    /// Grid column markup for this card. Every field is escaped, so text and
    /// attribute values render exactly as given and never become markup.
    pub fn card_html(&self) -> String {
        let title = escape_html(&self.title);
        format!(
            r#"
            <div class="col-lg-4 col-md-6 mb-4">
                <div class="certification-card fade-in">
                    <div class="certification-image">
                        <img src="{image}" alt="{title} Certificate" class="certificate-image">
                        <div class="certificate-placeholder">
                            <i class="fas fa-certificate"></i>
                            <p>Certificate Image</p>
                        </div>
                    </div>
                    <div class="certification-content">
                        <h4 class="certification-title">{title}</h4>
                        <p class="certification-provider">{provider}</p>
                        <p class="certification-year">{year}</p>
                        <a href="{link}" class="btn certificate-link" target="_blank" rel="noopener">
                            View Certificate
                        </a>
                    </div>
                </div>
            </div>
        "#,
            image = escape_html(&self.image_url),
            provider = escape_html(&self.provider),
            year = escape_html(&self.year),
            link = escape_html(&self.certificate_url),
        )
    }
}

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unescape(input: &str) -> String {
        input
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_card_contains_plain_fields() {
        let cert = Certificate::new(
            "Rust Fundamentals",
            "Ferris Academy",
            "2024",
            "https://example.com/cert.png",
            "https://example.com/verify/42",
        );
        let html = cert.card_html();
        assert!(html.contains(r#"<h4 class="certification-title">Rust Fundamentals</h4>"#));
        assert!(html.contains(r#"<p class="certification-provider">Ferris Academy</p>"#));
        assert!(html.contains(r#"<p class="certification-year">2024</p>"#));
        assert!(html.contains(r#"src="https://example.com/cert.png""#));
        assert!(html.contains(r#"alt="Rust Fundamentals Certificate""#));
        assert!(html.contains(r#"href="https://example.com/verify/42""#));
        assert!(html.contains("certification-card fade-in"));
    }

    #[test]
    fn test_card_escapes_markup() {
        let cert = Certificate::new(
            "<script>alert(1)</script>",
            "A & B",
            "2023\"",
            "x\" onerror=\"alert(1)",
            "javascript:'x'",
        );
        let html = cert.card_html();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("onerror=\"alert"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("2023&quot;"));
        assert!(html.contains("javascript:&#39;x&#39;"));
    }

    proptest! {
        #[test]
        fn escaping_preserves_literal_text(input in ".*") {
            let escaped = escape_html(&input);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('"'));
            prop_assert_eq!(unescape(&escaped), input);
        }
    }
}
