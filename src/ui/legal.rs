/// Static Terms of Use and Privacy Policy pages
use chrono::NaiveDate;
use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length};

use super::Route;
use crate::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalPage {
    Terms,
    Privacy,
}

pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct LegalDocument {
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: &'static [Section],
}

static TERMS: LegalDocument = LegalDocument {
    title: "Terms of Use",
    intro: "Welcome to How Hot? By using our service, you agree to the following terms.",
    sections: &[
        Section {
            heading: "1. Acceptance of Terms",
            body: "By accessing this application, you agree to be bound by these Terms of Use.",
        },
        Section {
            heading: "2. Usage Restrictions",
            body: "You agree not to misuse this application in any way.",
        },
        Section {
            heading: "3. Changes to Terms",
            body: "We reserve the right to modify these terms at any time.",
        },
        Section {
            heading: "4. Spiciness Prediction Disclaimer",
            body: "Our application uses AI to predict the spiciness level of food based on images \
                   and user feedback. Please note that these predictions are for informational \
                   purposes only and may not accurately reflect the actual spiciness level of the \
                   food. We are not responsible for any discomfort, injury, or other consequences \
                   resulting from underestimating or overestimating the spiciness of food based on \
                   our predictions. Always use your own judgment and take necessary precautions if \
                   you are sensitive to spicy food.",
        },
    ],
};

static PRIVACY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    intro: "Your privacy is important to us. This Privacy Policy explains how we collect and use \
            your information.",
    sections: &[
        Section {
            heading: "1. Information We Collect",
            body: "We collect user inputs and usage data to improve the app experience.",
        },
        Section {
            heading: "2. How We Use Your Information",
            body: "Your data is used only to provide responses and improve AI capabilities.",
        },
        Section {
            heading: "3. Data Protection",
            body: "We take appropriate security measures to protect your data.",
        },
    ],
};

impl LegalPage {
    /// Page for a route, None for the main screen
    pub fn for_route(route: Route) -> Option<Self> {
        match route {
            Route::Home => None,
            Route::Terms => Some(LegalPage::Terms),
            Route::Privacy => Some(LegalPage::Privacy),
        }
    }

    pub fn document(self) -> &'static LegalDocument {
        match self {
            LegalPage::Terms => &TERMS,
            LegalPage::Privacy => &PRIVACY,
        }
    }

    /// Both documents were last revised together
    pub fn last_updated(self) -> String {
        NaiveDate::from_ymd_opt(2025, 4, 8)
            .map(|date| format!("Last updated: {}", date.format("%B %-d, %Y")))
            .unwrap_or_default()
    }
}

pub fn view<'a>(page: LegalPage) -> Element<'a, Message> {
    let document = page.document();

    let mut content = column![
        text(document.title).size(32),
        text(page.last_updated()).size(14),
        text(document.intro),
    ]
    .spacing(12);

    for section in document.sections {
        content = content
            .push(text(section.heading).size(22))
            .push(text(section.body));
    }

    content = content.push(
        button(text("Back to Home").size(14))
            .style(button::text)
            .on_press(Message::Navigate(Route::Home)),
    );

    scrollable(
        container(content)
            .max_width(800)
            .padding(20)
            .center_x(Length::Fill),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_map_to_pages() {
        assert_eq!(LegalPage::for_route(Route::Home), None);
        assert_eq!(LegalPage::for_route(Route::Terms), Some(LegalPage::Terms));
        assert_eq!(LegalPage::for_route(Route::Privacy), Some(LegalPage::Privacy));
    }

    #[test]
    fn test_last_updated_date() {
        assert_eq!(LegalPage::Terms.last_updated(), "Last updated: April 8, 2025");
    }

    #[test]
    fn test_documents() {
        let terms = LegalPage::Terms.document();
        assert_eq!(terms.title, "Terms of Use");
        assert_eq!(terms.sections.len(), 4);
        assert!(terms.sections[3].heading.contains("Disclaimer"));

        let privacy = LegalPage::Privacy.document();
        assert_eq!(privacy.title, "Privacy Policy");
        assert_eq!(privacy.sections.len(), 3);
    }
}
