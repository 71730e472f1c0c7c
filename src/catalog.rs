use crate::errors::CatalogError;
use crate::keys::CheckboxId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// The fixed workout groups tracked by the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "treinoA")]
    TreinoA,
    #[serde(rename = "treinoB")]
    TreinoB,
    #[serde(rename = "treinoPerna")]
    TreinoPerna,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::TreinoA, Category::TreinoB, Category::TreinoPerna];

    pub fn id(self) -> &'static str {
        match self {
            Category::TreinoA => "treinoA",
            Category::TreinoB => "treinoB",
            Category::TreinoPerna => "treinoPerna",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::TreinoA => "Treino A",
            Category::TreinoB => "Treino B",
            Category::TreinoPerna => "Treino de Perna",
        }
    }

    /// Suffix used by the page element ids (`progressoA`, `totalPerna`).
    pub fn suffix(self) -> &'static str {
        match self {
            Category::TreinoA => "A",
            Category::TreinoB => "B",
            Category::TreinoPerna => "Perna",
        }
    }

    pub fn reset_label(self) -> String {
        format!("Limpar {}", self.label())
    }

    pub fn reset_confirmation(self) -> String {
        format!(
            "Tem certeza que deseja limpar todas as marcações do {}?",
            self.reset_label()
        )
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| s.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: CheckboxId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<CategoryGroup>,
}

/// Exercise checklist, one group per category in `Category::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<CategoryGroup>,
}

impl Catalog {
    /// Builds a catalog, checking that every category appears exactly once
    /// and that no checkbox id is shared between exercises.
    pub fn new(groups: Vec<CategoryGroup>) -> Result<Self, CatalogError> {
        let mut ordered = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let mut matching = groups.iter().filter(|group| group.category == category);
            let group = matching
                .next()
                .ok_or(CatalogError::MissingCategory(category.id()))?;
            if matching.next().is_some() {
                return Err(CatalogError::DuplicateCategory(category.id()));
            }
            ordered.push(group.clone());
        }

        let mut seen = HashSet::new();
        for exercise in ordered.iter().flat_map(|group| &group.exercises) {
            if !seen.insert(exercise.id.clone()) {
                return Err(CatalogError::DuplicateCheckbox(exercise.id.to_string()));
            }
        }

        Ok(Self { groups: ordered })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.categories)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn exercises(&self, category: Category) -> &[Exercise] {
        self.groups
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.exercises.as_slice())
            .unwrap_or_default()
    }

    pub fn find(&self, id: &str) -> Option<(Category, &Exercise)> {
        self.groups.iter().find_map(|group| {
            group
                .exercises
                .iter()
                .find(|exercise| exercise.id.as_str() == id)
                .map(|exercise| (group.category, exercise))
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let group = |category, items: &[(&str, &str)]| CategoryGroup {
            category,
            exercises: items
                .iter()
                .filter_map(|(id, label)| {
                    CheckboxId::new(*id).ok().map(|id| Exercise {
                        id,
                        label: (*label).to_owned(),
                    })
                })
                .collect(),
        };

        Self {
            groups: vec![
                group(
                    Category::TreinoA,
                    &[
                        ("a-supino-reto", "Supino reto"),
                        ("a-supino-inclinado", "Supino inclinado com halteres"),
                        ("a-crucifixo", "Crucifixo"),
                        ("a-desenvolvimento", "Desenvolvimento de ombros"),
                        ("a-elevacao-lateral", "Elevação lateral"),
                        ("a-triceps-corda", "Tríceps na corda"),
                    ],
                ),
                group(
                    Category::TreinoB,
                    &[
                        ("b-puxada", "Puxada frontal"),
                        ("b-remada-curvada", "Remada curvada"),
                        ("b-remada-baixa", "Remada baixa"),
                        ("b-face-pull", "Face pull"),
                        ("b-rosca-direta", "Rosca direta"),
                        ("b-rosca-martelo", "Rosca martelo"),
                    ],
                ),
                group(
                    Category::TreinoPerna,
                    &[
                        ("perna-agachamento", "Agachamento livre"),
                        ("perna-leg-press", "Leg press"),
                        ("perna-extensora", "Cadeira extensora"),
                        ("perna-flexora", "Mesa flexora"),
                        ("perna-stiff", "Stiff"),
                        ("perna-panturrilha", "Panturrilha em pé"),
                    ],
                ),
            ],
        }
    }
}
