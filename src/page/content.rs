//! Static page copy
//!
//! Headings, blurbs and decorative items that the page renders verbatim.
//! Icons are referenced by symbolic name and resolved by an
//! [`IconRenderer`](crate::icons::IconRenderer).

/// A labelled button with a leading icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub icon: &'static str,
    pub label: &'static str,
}

/// Service preview card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BRAND: &str = "NINJA NUTRITION";
pub const BRAND_BADGE: &str = "🥷🥗";

pub const NAV_ITEMS: [&str; 8] = [
    "Главная",
    "Услуги",
    "Рецепты",
    "Отзывы",
    "Обо мне",
    "Консультации",
    "Контакты",
    "Блог",
];

pub const HERO_HEADLINE: &str = "КОВАBUNGA!";
pub const HERO_SUBTITLE: &str = "Супергеройское питание для настоящих ниндзя!";
pub const HERO_PITCH: &str = "Откройте секреты здорового питания вместе с профессиональным \
нутрициологом. Станьте сильнее, быстрее и здоровее!";

pub const HERO_ACTIONS: [Action; 2] = [
    Action {
        icon: "Calendar",
        label: "Записаться на консультацию",
    },
    Action {
        icon: "BookOpen",
        label: "Изучить рецепты",
    },
];

pub const RECIPES_HEADING: &str = "БАЗА СУПЕРГЕРОЙСКИХ РЕЦЕПТОВ";
pub const RECIPES_SUBHEADING: &str = "Найдите идеальные рецепты с точным расчетом калорий и БЖУ";
pub const SEARCH_PLACEHOLDER: &str = "Поиск рецептов...";
pub const VIEW_RECIPE_LABEL: &str = "Посмотреть рецепт";

pub const SERVICES_HEADING: &str = "СУПЕРГЕРОЙСКИЕ УСЛУГИ";
pub const SERVICES: [Service; 3] = [
    Service {
        icon: "UserCheck",
        title: "Персональные консультации",
        description: "Индивидуальный план питания",
    },
    Service {
        icon: "BarChart3",
        title: "Анализ питания",
        description: "Полная диагностика рациона",
    },
    Service {
        icon: "Trophy",
        title: "Программы похудения",
        description: "Достигайте целей как ниндзя",
    },
];

pub const CTA_HEADING: &str = "ГОТОВЫ СТАТЬ СУПЕРГЕРОЕМ ПИТАНИЯ?";
pub const CTA_TEXT: &str = "Запишитесь на консультацию и получите персональный план питания!";
pub const CTA_ACTION: Action = Action {
    icon: "Zap",
    label: "ПОЕХАЛИ!",
};

pub const FOOTER_TAGLINE: &str = "Ваш путь к здоровому питанию начинается здесь!";
pub const SOCIAL_ICONS: [&str; 3] = ["Instagram", "Facebook", "MessageCircle"];

/// Labels used by the detail view
pub mod detail {
    pub const CALORIES: &str = "ккал";
    pub const PROTEIN: &str = "белки";
    pub const CARBS: &str = "углеводы";
    pub const FAT: &str = "жиры";
    pub const GRAMS: &str = "г";
    pub const INGREDIENTS: &str = "Ингредиенты:";
    pub const INSTRUCTIONS: &str = "Приготовление:";
}
