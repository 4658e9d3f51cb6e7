//! Page identifiers and view selection

/// One of the six views the shell can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Discover,
    Integrate,
    Actualize,
    About,
    Contact,
}

impl Page {
    /// Every page, in navbar order
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Discover,
        Page::Integrate,
        Page::Actualize,
        Page::About,
        Page::Contact,
    ];

    /// The three methodology steps, in order
    pub const METHODOLOGY: [Page; 3] = [Page::Discover, Page::Integrate, Page::Actualize];

    /// Identifier stored in navigation state
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Discover => "discover",
            Page::Integrate => "integrate",
            Page::Actualize => "actualize",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    /// Map a stored identifier to the view to render.
    ///
    /// Total: anything that is not one of the five non-home pages renders home.
    pub fn resolve(id: &str) -> Page {
        match id {
            "discover" => Page::Discover,
            "integrate" => Page::Integrate,
            "actualize" => Page::Actualize,
            "about" => Page::About,
            "contact" => Page::Contact,
            _ => Page::Home,
        }
    }

    /// Link text used in the navbar and mobile menu
    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Discover => "Discover",
            Page::Integrate => "Integrate",
            Page::Actualize => "Actualize",
            Page::About => "About Us",
            Page::Contact => "Contact",
        }
    }

    /// Document title shown in the browser tab
    pub fn document_title(self) -> String {
        match self {
            Page::Home => "Kairos AI Coaching".to_string(),
            page => format!("{} | Kairos AI Coaching", page.nav_label()),
        }
    }

    pub fn is_methodology(self) -> bool {
        Page::METHODOLOGY.contains(&self)
    }
}

impl From<Page> for String {
    fn from(page: Page) -> Self {
        page.id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("home", Page::Home)]
    #[case("discover", Page::Discover)]
    #[case("integrate", Page::Integrate)]
    #[case("actualize", Page::Actualize)]
    #[case("about", Page::About)]
    #[case("contact", Page::Contact)]
    fn test_resolve_known_ids(#[case] id: &str, #[case] expected: Page) {
        assert_eq!(Page::resolve(id), expected);
    }

    #[rstest]
    #[case("")]
    #[case("pricing")]
    #[case("Discover")]
    #[case(" about")]
    #[case("contact/")]
    fn test_resolve_unknown_ids_fall_back_to_home(#[case] id: &str) {
        assert_eq!(Page::resolve(id), Page::Home);
    }

    #[test]
    fn test_id_round_trips_through_resolve() {
        for page in Page::ALL {
            assert_eq!(Page::resolve(page.id()), page);
            assert_eq!(String::from(page), page.id());
        }
    }

    #[test]
    fn test_methodology_pages() {
        assert!(Page::Discover.is_methodology());
        assert!(Page::Actualize.is_methodology());
        assert!(!Page::Home.is_methodology());
        assert!(!Page::Contact.is_methodology());
    }

    #[test]
    fn test_document_titles() {
        assert_eq!(Page::Home.document_title(), "Kairos AI Coaching");
        assert_eq!(
            Page::About.document_title(),
            "About Us | Kairos AI Coaching"
        );
    }
}
