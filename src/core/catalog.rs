//! Static marketing content: service cards, portfolio, company facts
//!
//! The portfolio filter is the only logic here. It is stateless: the
//! selected label maps to a [`PortfolioFilter`] and the visible items are
//! recomputed from the full list.

/// Label of the filter button that shows every portfolio entry
pub const ALL_LABEL: &str = "Все";

/// Portfolio categories in the order the filter buttons are shown
pub const PORTFOLIO_CATEGORIES: &[&str] = &[
    "Черновая квартира в новостройке",
    "Квартира на вторичке",
    "Частный дом, коттедж",
    "Коммерческое помещение",
];

/// Card in the "Наши услуги" section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        icon: "hammer",
        title: "Ремонт под ключ",
        description: "Полный цикл работ от черновой отделки до финишных штрихов",
    },
    ServiceCard {
        icon: "pen-tool",
        title: "Дизайн-проект",
        description: "Профессиональная визуализация и планировка пространства",
    },
    ServiceCard {
        icon: "home",
        title: "Капитальный ремонт",
        description: "Комплексное обновление вторичного жилья с перепланировкой",
    },
    ServiceCard {
        icon: "shopping-bag",
        title: "Магазин материалов",
        description: "Собственный склад отделочных материалов с выгодными ценами",
    },
];

/// Finished project shown in the before/after gallery
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: u32,
    pub category: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub area: &'static str,
    pub description: &'static str,
}

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        category: "Черновая квартира в новостройке",
        before: "/placeholder.svg",
        after: "/placeholder.svg",
        area: "75 м²",
        description: "Современная двухкомнатная квартира с яркими акцентами",
    },
    PortfolioItem {
        id: 2,
        category: "Квартира на вторичке",
        before: "/placeholder.svg",
        after: "/placeholder.svg",
        area: "52 м²",
        description: "Капремонт с перепланировкой и дизайн-проектом",
    },
    PortfolioItem {
        id: 3,
        category: "Частный дом, коттедж",
        before: "/placeholder.svg",
        after: "/placeholder.svg",
        area: "180 м²",
        description: "Загородный дом в скандинавском стиле",
    },
    PortfolioItem {
        id: 4,
        category: "Коммерческое помещение",
        before: "/placeholder.svg",
        after: "/placeholder.svg",
        area: "120 м²",
        description: "Современный офис с open-space зонами",
    },
];

/// Headline figure in the "О компании" section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyStat {
    pub value: &'static str,
    pub caption: &'static str,
}

pub const COMPANY_STATS: &[CompanyStat] = &[
    CompanyStat {
        value: "500+",
        caption: "Завершённых объектов",
    },
    CompanyStat {
        value: "10",
        caption: "Лет на рынке",
    },
    CompanyStat {
        value: "98%",
        caption: "Довольных клиентов",
    },
];

pub const COMPANY_NAME: &str = "Здесь ремонт";
pub const CONTACT_PHONE: &str = "+7 (xxx) xxx-xx-xx";
pub const CONTACT_EMAIL: &str = "info@zdesremont.ru";
pub const CONTACT_ADDRESS: &str = "г. Москва, ул. Примерная, д. 1";

/// Selected portfolio filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PortfolioFilter {
    #[default]
    All,
    Category(&'static str),
}

impl PortfolioFilter {
    /// Resolve a filter button label; unknown labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        if label == ALL_LABEL {
            return Some(Self::All);
        }
        PORTFOLIO_CATEGORIES
            .iter()
            .find(|&&category| category == label)
            .map(|&category| Self::Category(category))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Category(category) => category,
        }
    }

    /// Every filter in button order, starting with "Все"
    pub fn all() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(PORTFOLIO_CATEGORIES.iter().map(|&c| Self::Category(c)))
    }

    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.category == category,
        }
    }
}

/// Items visible under the given filter, in their original order
pub fn filter_portfolio(items: &[PortfolioItem], filter: PortfolioFilter) -> Vec<PortfolioItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_full_portfolio() {
        let items = filter_portfolio(PORTFOLIO, PortfolioFilter::All);
        assert_eq!(items, PORTFOLIO.to_vec());
    }

    #[test]
    fn test_category_returns_exact_subset() {
        for &category in PORTFOLIO_CATEGORIES {
            let filter = PortfolioFilter::from_label(category).unwrap();
            let items = filter_portfolio(PORTFOLIO, filter);

            let expected: Vec<_> = PORTFOLIO
                .iter()
                .filter(|i| i.category == category)
                .cloned()
                .collect();
            assert_eq!(items, expected);
            assert!(!items.is_empty(), "{category} has portfolio entries");
        }
    }

    #[test]
    fn test_filter_on_custom_items() {
        let mut items = PORTFOLIO.to_vec();
        items.push(PortfolioItem {
            id: 5,
            category: PORTFOLIO_CATEGORIES[1],
            before: "/placeholder.svg",
            after: "/placeholder.svg",
            area: "40 м²",
            description: "Студия",
        });

        let filtered = filter_portfolio(&items, PortfolioFilter::Category(PORTFOLIO_CATEGORIES[1]));
        let ids: Vec<_> = filtered.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(PortfolioFilter::from_label("Все"), Some(PortfolioFilter::All));
        assert_eq!(
            PortfolioFilter::from_label("Квартира на вторичке"),
            Some(PortfolioFilter::Category("Квартира на вторичке"))
        );
        assert_eq!(PortfolioFilter::from_label("Дача"), None);
    }

    #[test]
    fn test_unknown_label_shows_everything() {
        let filter = PortfolioFilter::from_label("Дача").unwrap_or_default();
        assert_eq!(filter_portfolio(PORTFOLIO, filter), PORTFOLIO.to_vec());
    }

    #[test]
    fn test_filter_buttons_order() {
        let labels: Vec<_> = PortfolioFilter::all().map(PortfolioFilter::label).collect();

        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], ALL_LABEL);
        assert_eq!(&labels[1..], PORTFOLIO_CATEGORIES);
    }

    #[test]
    fn test_categories_are_object_types() {
        for category in PORTFOLIO_CATEGORIES {
            assert!(crate::core::intake::OBJECT_TYPES.contains(category));
        }
    }
}
