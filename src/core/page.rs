use crate::domain::model::{
    ObserverCommand, ObserverReply, PageAnnouncement, PageImage, PageLink, PageSnapshot,
};
use scraper::{Html, Selector};

pub const TEXT_LIMIT: usize = 5000;
pub const LINK_LIMIT: usize = 20;
pub const IMAGE_LIMIT: usize = 10;

/// Images narrower than this are treated as decoration and skipped.
const IMAGE_MIN_WIDTH: i64 = 100;

/// Observes a single page and answers extraction commands synchronously.
///
/// All state is captured up front from the parsed document; absent elements
/// default to empty values rather than erroring.
pub struct PageObserver {
    snapshot: PageSnapshot,
    meta: String,
    selection: Option<String>,
}

impl PageObserver {
    pub fn new(html: &str, url: &str) -> Self {
        let document = Html::parse_document(html);

        let title = first_text(&document, "title");
        let meta = document
            .select(&selector(r#"meta[name="description"]"#))
            .next()
            .and_then(|el| el.value().attr("content"))
            .unwrap_or_default()
            .to_string();

        let form_count = document.select(&selector("form")).count();
        tracing::debug!(
            forms = form_count,
            url = %url,
            "attached passive submit listeners"
        );

        let snapshot = PageSnapshot {
            url: url.to_string(),
            title,
            text: body_text(&document),
            links: collect_links(&document),
            images: collect_images(&document),
        };

        Self {
            snapshot,
            meta,
            selection: None,
        }
    }

    /// Page-load summary message, fire-and-forget.
    pub fn announce(&self) -> PageAnnouncement {
        PageAnnouncement {
            kind: "PAGE_DATA".to_string(),
            url: self.snapshot.url.clone(),
            title: self.snapshot.title.clone(),
            meta: self.meta.clone(),
        }
    }

    pub fn handle(&self, command: ObserverCommand) -> ObserverReply {
        match command {
            ObserverCommand::ExtractPage => ObserverReply::Snapshot(self.snapshot.clone()),
            ObserverCommand::CaptureSelection => ObserverReply::Selection {
                selection: self.selection.clone().unwrap_or_default(),
            },
        }
    }

    pub fn set_selection(&mut self, selection: impl Into<String>) {
        self.selection = Some(selection.into());
    }

    pub fn snapshot(&self) -> &PageSnapshot {
        &self.snapshot
    }
}

fn selector(css: &str) -> Selector {
    // Selectors here are compile-time constants; a parse failure is a bug.
    Selector::parse(css).expect("static selector")
}

fn first_text(document: &Html, css: &str) -> String {
    document
        .select(&selector(css))
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Whitespace-normalized body text, truncated to `TEXT_LIMIT` characters.
fn body_text(document: &Html) -> String {
    let raw = match document.select(&selector("body")).next() {
        Some(body) => body.text().collect::<Vec<_>>().join(" "),
        None => String::new(),
    };

    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    normalized.chars().take(TEXT_LIMIT).collect()
}

fn collect_links(document: &Html) -> Vec<PageLink> {
    document
        .select(&selector("a[href]"))
        .filter_map(|el| {
            let href = el.value().attr("href").unwrap_or_default();
            if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
                return None;
            }
            let text = el.text().collect::<String>().trim().to_string();
            if text.is_empty() {
                return None;
            }
            Some(PageLink {
                href: href.to_string(),
                text,
            })
        })
        .take(LINK_LIMIT)
        .collect()
}

fn collect_images(document: &Html) -> Vec<PageImage> {
    document
        .select(&selector("img"))
        .filter_map(|el| {
            let src = el.value().attr("src").unwrap_or_default();
            if src.is_empty() {
                return None;
            }
            let width: i64 = el.value().attr("width")?.parse().ok()?;
            if width <= IMAGE_MIN_WIDTH {
                return None;
            }
            Some(PageImage {
                src: src.to_string(),
                alt: el.value().attr("alt").unwrap_or_default().to_string(),
            })
        })
        .take(IMAGE_LIMIT)
        .collect()
}
