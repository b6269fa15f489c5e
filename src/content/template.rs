//! @acp:module "Template Generator"
//! @acp:summary "QuestionGenerator backed by handlebars templates and fact rows"
//! @acp:domain content
//! @acp:layer logic

use handlebars::Handlebars;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::RngCore;
use serde_json::{Map, Value};

use super::types::GeneratorDef;
use crate::error::Result;
use crate::selection::{Question, QuestionGenerator};

const PROMPT_TEMPLATE: &str = "prompt";
const ANSWER_TEMPLATE: &str = "answer";

fn choice_template(index: usize) -> String {
    format!("choice-{}", index)
}

/// Generator that renders one randomly drawn fact through its templates
pub struct TemplateGenerator {
    id: String,
    tags: Vec<String>,
    weight: f64,
    source: Option<String>,
    choice_count: usize,
    facts: Vec<Map<String, Value>>,
    templates: Handlebars<'static>,
}

impl TemplateGenerator {
    /// Compile the definition's templates; a malformed template fails here
    /// rather than at question time.
    pub fn from_def(def: GeneratorDef, source: Option<String>) -> Result<Self> {
        let mut templates = Handlebars::new();
        // Plain text output, not HTML
        templates.register_escape_fn(handlebars::no_escape);
        templates.register_template_string(PROMPT_TEMPLATE, &def.prompt)?;
        templates.register_template_string(ANSWER_TEMPLATE, &def.answer)?;
        for (i, choice) in def.choices.iter().enumerate() {
            templates.register_template_string(&choice_template(i), choice)?;
        }

        Ok(Self {
            id: def.id,
            tags: def.tags,
            weight: def.weight,
            source,
            choice_count: def.choices.len(),
            facts: def.facts,
            templates,
        })
    }
}

impl QuestionGenerator for TemplateGenerator {
    fn id(&self) -> &str {
        &self.id
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<Question> {
        let empty = Map::new();
        let fact = self.facts.choose(rng).unwrap_or(&empty);

        let prompt = self.templates.render(PROMPT_TEMPLATE, fact)?;
        let answer = self.templates.render(ANSWER_TEMPLATE, fact)?;

        let mut choices = (0..self.choice_count)
            .map(|i| self.templates.render(&choice_template(i), fact))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        choices.shuffle(rng);

        Ok(Question::new(&self.id, prompt, answer).with_choices(choices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn capitals_def() -> GeneratorDef {
        let fact = |country: &str, capital: &str| {
            json!({ "country": country, "capital": capital })
                .as_object()
                .cloned()
                .unwrap()
        };
        GeneratorDef {
            id: "capitals".to_string(),
            tags: vec!["geography::capitals".to_string()],
            weight: 2.0,
            prompt: "What is the capital of {{country}}?".to_string(),
            answer: "{{capital}}".to_string(),
            choices: vec![],
            facts: vec![fact("France", "Paris"), fact("Japan", "Tokyo")],
        }
    }

    #[test]
    fn test_renders_a_fact() {
        let generator = TemplateGenerator::from_def(capitals_def(), Some("world".into())).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let question = generator.generate(&mut rng).unwrap();

        assert_eq!(question.generator_id, "capitals");
        assert!(
            (question.prompt == "What is the capital of France?" && question.answer == "Paris")
                || (question.prompt == "What is the capital of Japan?"
                    && question.answer == "Tokyo")
        );
        assert_eq!(generator.source(), Some("world"));
        assert_eq!(generator.weight(), 2.0);
    }

    #[test]
    fn test_choices_rendered_and_contain_answer() {
        let mut def = capitals_def();
        def.choices = vec!["{{capital}}".to_string(), "Berlin".to_string(), "Rome".to_string()];
        let generator = TemplateGenerator::from_def(def, None).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let question = generator.generate(&mut rng).unwrap();

        assert_eq!(question.choices.len(), 3);
        assert!(question.choices.contains(&question.answer));
    }

    #[test]
    fn test_no_facts_renders_static_text() {
        let mut def = capitals_def();
        def.facts.clear();
        def.prompt = "Name any capital".to_string();
        let generator = TemplateGenerator::from_def(def, None).unwrap();
        let question = generator.generate(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(question.prompt, "Name any capital");
        assert_eq!(question.answer, "");
    }

    #[test]
    fn test_malformed_template_rejected() {
        let mut def = capitals_def();
        def.prompt = "{{#if country}}unterminated".to_string();
        assert!(TemplateGenerator::from_def(def, None).is_err());
    }

    #[test]
    fn test_no_html_escaping() {
        let mut def = capitals_def();
        def.facts = vec![json!({ "country": "Bosnia & Herzegovina", "capital": "Sarajevo" })
            .as_object()
            .cloned()
            .unwrap()];
        let generator = TemplateGenerator::from_def(def, None).unwrap();
        let question = generator.generate(&mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(question.prompt, "What is the capital of Bosnia & Herzegovina?");
    }
}
