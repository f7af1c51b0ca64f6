use clap::ValueEnum;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum Category {
    #[strum(serialize = "Arts & Literature")]
    ArtsAndLiterature,
    #[strum(serialize = "Film & TV")]
    FilmAndTv,
    #[strum(serialize = "Food & Drink")]
    FoodAndDrink,
    #[strum(serialize = "General Knowledge")]
    GeneralKnowledge,
    Geography,
    History,
    Music,
    Science,
    #[strum(serialize = "Society & Culture")]
    SocietyAndCulture,
    #[strum(serialize = "Sport & Leisure")]
    SportAndLeisure,
}

impl Category {
    /// Provider-side identifier
    pub fn slug(&self) -> &'static str {
        match self {
            Category::ArtsAndLiterature => "arts_and_literature",
            Category::FilmAndTv => "film_and_tv",
            Category::FoodAndDrink => "food_and_drink",
            Category::GeneralKnowledge => "general_knowledge",
            Category::Geography => "geography",
            Category::History => "history",
            Category::Music => "music",
            Category::Science => "science",
            Category::SocietyAndCulture => "society_and_culture",
            Category::SportAndLeisure => "sport_and_leisure",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_param(&self) -> String {
        self.to_string().to_lowercase()
    }
}

/// Fixed menu of categories and difficulties offered to the player
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub categories: &'static [Category],
    pub difficulties: &'static [Difficulty],
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            categories: &[
                Category::ArtsAndLiterature,
                Category::FilmAndTv,
                Category::FoodAndDrink,
                Category::GeneralKnowledge,
                Category::Geography,
                Category::History,
                Category::Music,
                Category::Science,
                Category::SocietyAndCulture,
                Category::SportAndLeisure,
            ],
            difficulties: &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard],
        }
    }

    /// Menu size for categories, the last entry meaning "any"
    pub fn category_choices(&self) -> usize {
        self.categories.len() + 1
    }

    pub fn difficulty_choices(&self) -> usize {
        self.difficulties.len() + 1
    }

    /// Maps a 1-based menu choice; the trailing "any" entry yields None
    pub fn category(&self, choice: usize) -> Option<Category> {
        choice
            .checked_sub(1)
            .and_then(|i| self.categories.get(i))
            .copied()
    }

    pub fn difficulty(&self, choice: usize) -> Option<Difficulty> {
        choice
            .checked_sub(1)
            .and_then(|i| self.difficulties.get(i))
            .copied()
    }
}
