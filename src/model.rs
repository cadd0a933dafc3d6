use serde::{Deserialize, Serialize};

/// A recipe as returned by the search API. `uri` is the unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub uri: String,
    pub label: String,
    pub image: String,
    /// External page with the full recipe
    pub url: String,
    pub calories: f64,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Publisher attribution
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub text: String,
}

/// Envelope wrapping each recipe in a search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub recipe: Recipe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
}

impl SearchResponse {
    /// Unwraps every hit envelope, keeping response order
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.hits.into_iter().map(|hit| hit.recipe).collect()
    }
}

impl Recipe {
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Calories with two decimals, as shown on a card
    pub fn calories_display(&self) -> String {
        format!("{:.2}", self.calories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_recipes_ignores_envelope_fields() {
        let body = r#"{
            "q": "pasta",
            "from": 0,
            "to": 10,
            "count": 2,
            "hits": [
                {
                    "recipe": {
                        "uri": "recipe_1",
                        "label": "Carbonara",
                        "image": "https://edamam-product-images.s3.amazonaws.com/a.jpg",
                        "url": "https://example.com/carbonara",
                        "calories": 1234.5678,
                        "ingredients": [{"text": "200g spaghetti", "weight": 200}, {"text": "2 eggs"}],
                        "source": "Example Kitchen",
                        "yield": 4
                    },
                    "_links": {"self": {"href": "https://api.edamam.com/x"}}
                },
                {
                    "recipe": {
                        "uri": "recipe_2",
                        "label": "Pesto",
                        "image": "https://edamam-product-images.s3.amazonaws.com/b.jpg",
                        "url": "https://example.com/pesto",
                        "calories": 80,
                        "source": "Example Kitchen"
                    }
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let recipes = response.into_recipes();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].label, "Carbonara");
        assert_eq!(recipes[0].ingredient_count(), 2);
        assert_eq!(recipes[0].calories_display(), "1234.57");
        assert_eq!(recipes[1].uri, "recipe_2");
        assert_eq!(recipes[1].ingredient_count(), 0);
        assert_eq!(recipes[1].calories_display(), "80.00");
    }

    #[test]
    fn test_missing_hits_is_an_error() {
        let result = serde_json::from_str::<SearchResponse>(r#"{"count": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_label_is_an_error() {
        let body = r#"{"hits": [{"recipe": {"uri": "x", "image": "", "url": "", "calories": 1, "source": ""}}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }
}
