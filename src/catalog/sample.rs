//! Bundled sample recipes shown when no catalog file is configured

use super::Recipe;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The three recipes the landing page ships with
#[must_use]
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Супергеройский смузи".into(),
            calories: 250,
            protein: 15,
            carbs: 35,
            fat: 8,
            cook_time: "5 мин".into(),
            category: "Завтрак".into(),
            ingredients: strings(&["Банан", "Шпинат", "Протеин", "Миндальное молоко", "Ягоды"]),
            instructions: strings(&[
                "Смешать все ингредиенты",
                "Взбить в блендере",
                "Подавать холодным",
            ]),
        },
        Recipe {
            id: 2,
            name: "Черепашка пицца".into(),
            calories: 320,
            protein: 18,
            carbs: 28,
            fat: 12,
            cook_time: "25 мин".into(),
            category: "Обед".into(),
            ingredients: strings(&[
                "Цельнозерновая основа",
                "Томатный соус",
                "Моцарелла",
                "Овощи",
                "Базилик",
            ]),
            instructions: strings(&[
                "Раскатать тесто",
                "Добавить соус и топпинги",
                "Запечь 15 минут",
            ]),
        },
        Recipe {
            id: 3,
            name: "Ниндзя салат".into(),
            calories: 180,
            protein: 12,
            carbs: 15,
            fat: 9,
            cook_time: "10 мин".into(),
            category: "Ужин".into(),
            ingredients: strings(&[
                "Микс салатов",
                "Авокадо",
                "Семечки",
                "Оливковое масло",
                "Лимон",
            ]),
            instructions: strings(&[
                "Нарезать овощи",
                "Смешать заправку",
                "Перемешать все ингредиенты",
            ]),
        },
    ]
}
