/// Named, vertically stacked regions of the page, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

pub const SECTION_ORDER: [SectionId; 6] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Skills,
    SectionId::Contact,
];

impl SectionId {
    /// DOM id of the section element.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown on the navigation button.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    /// Parse a DOM id back into a section; anything outside the fixed list is `None`.
    pub fn from_dom_id(id: &str) -> Option<Self> {
        SECTION_ORDER.iter().copied().find(|s| s.dom_id() == id)
    }
}
