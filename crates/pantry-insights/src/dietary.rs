use std::fmt;
use std::str::FromStr;

use pantry_types::RecipeSummary;
use serde::{Deserialize, Serialize};

/// Dietary preference, matched by keyword against a recipe's free text
///
/// This is a best-effort classifier: a recipe only matches if its title or
/// instructions mention one of the keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dietary {
    Vegetarian,
    Vegan,
    GlutenFree,
}

impl Dietary {
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Dietary::Vegetarian => &["vegetarian", "veggie"],
            Dietary::Vegan => &["vegan"],
            Dietary::GlutenFree => &["gluten-free", "gluten free"],
        }
    }

    pub fn matches(self, recipe: &RecipeSummary) -> bool {
        let title = recipe.title.to_lowercase();
        let instructions = recipe
            .instructions_text
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        self.keywords()
            .iter()
            .any(|keyword| title.contains(keyword) || instructions.contains(keyword))
    }
}

impl FromStr for Dietary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vegetarian" => Ok(Dietary::Vegetarian),
            "vegan" => Ok(Dietary::Vegan),
            "gluten-free" | "gluten_free" | "glutenfree" => Ok(Dietary::GlutenFree),
            other => Err(format!("unknown dietary option: {}", other)),
        }
    }
}

impl fmt::Display for Dietary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dietary::Vegetarian => "Vegetarian",
            Dietary::Vegan => "Vegan",
            Dietary::GlutenFree => "Gluten-Free",
        };
        f.write_str(label)
    }
}
