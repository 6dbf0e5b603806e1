use std::collections::BTreeSet;

/// The attributes of an `<a>` element the page scripts care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchor {
    pub href: Option<String>,
    pub target: Option<String>,
    pub rel: Option<String>,
    pub classes: BTreeSet<String>,
}

impl Anchor {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Last segment of the document path; the site root is `index.html`.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => "index.html",
    }
}

/// Marks every navigation link pointing at the current page as active.
pub fn highlight_active_link(pathname: &str, links: &mut [Anchor]) {
    let page = current_page(pathname);
    for link in links.iter_mut() {
        if link.href.as_deref() == Some(page) {
            link.classes.insert(super::ACTIVE_CLASS.to_string());
        }
    }
}

/// Outbound links open in a new tab without handing over `window.opener`.
/// Anchors with an explicit target are left alone. Returns how many changed.
pub fn harden_external_links(anchors: &mut [Anchor]) -> usize {
    let mut hardened = 0;
    for anchor in anchors.iter_mut() {
        let external = anchor
            .href
            .as_deref()
            .is_some_and(|href| href.starts_with("http"));
        if external && anchor.target.is_none() {
            anchor.target = Some("_blank".to_string());
            anchor.rel = Some("noopener noreferrer".to_string());
            hardened += 1;
        }
    }
    tracing::debug!("Hardened {hardened} external links.");
    hardened
}
