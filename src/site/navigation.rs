/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu container and toggle both carry `active` while open.
    pub fn css_class(&self) -> Option<&'static str> {
        self.open.then_some(super::ACTIVE_CLASS)
    }

    /// The page body does not scroll behind an open menu.
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Following a navigation link closes the menu.
    pub fn on_link_click(&mut self) {
        self.close();
    }

    pub fn on_document_click(&mut self, inside_nav: bool, on_toggle: bool) {
        if !inside_nav && !on_toggle && self.open {
            self.close();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderShadow {
    Resting,
    Elevated,
}

impl HeaderShadow {
    pub fn box_shadow(&self) -> &'static str {
        match self {
            HeaderShadow::Resting => "0 2px 4px rgba(0,0,0,0.1)",
            HeaderShadow::Elevated => "0 2px 12px rgba(0,0,0,0.1)",
        }
    }
}

pub fn header_shadow(scroll_y: f64, threshold: f64) -> HeaderShadow {
    if scroll_y > threshold {
        HeaderShadow::Elevated
    } else {
        HeaderShadow::Resting
    }
}
