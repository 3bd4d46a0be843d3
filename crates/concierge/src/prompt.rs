use serde::Serialize;
use tera::{Context, Error as TeraError, Tera};

use crate::profile::Profile;

const SYSTEM_TEMPLATE: &str = include_str!("prompts/system.md");

pub fn render_prompt<T: Serialize>(template: &str, context_data: &T) -> Result<String, TeraError> {
    let mut tera = Tera::default();
    tera.add_raw_template("inline_template", template)?;
    let context = Context::from_serialize(context_data)?;
    tera.render("inline_template", &context)
}

#[derive(Serialize)]
struct SystemContext<'a> {
    name: &'a str,
    summary: &'a str,
    background: &'a str,
}

/// Render the fixed system prompt from the loaded profile.
pub fn build_system_prompt(profile: &Profile) -> Result<String, TeraError> {
    render_prompt(
        SYSTEM_TEMPLATE,
        &SystemContext {
            name: &profile.name,
            summary: &profile.summary,
            background: &profile.background,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_render_prompt() {
        let template = "Hello, {{ name }}!";
        let mut context = HashMap::new();
        context.insert("name".to_string(), "Alice".to_string());

        let result = render_prompt(template, &context).unwrap();
        assert_eq!(result, "Hello, Alice!");
    }

    #[test]
    fn test_render_prompt_missing_variable() {
        let template = "Hello, {{ name }}!";
        let context: HashMap<String, String> = HashMap::new();
        assert!(render_prompt(template, &context).is_err());
    }

    #[test]
    fn test_build_system_prompt_includes_profile() {
        let profile = Profile {
            name: "Ada Lovelace".to_string(),
            summary: "Engineer working on front-end and AI.".to_string(),
            background: "Ten years of experience.".to_string(),
        };

        let prompt = build_system_prompt(&profile).unwrap();
        assert!(prompt.contains("Ada Lovelace"));
        assert!(prompt.contains("Engineer working on front-end and AI."));
        assert!(prompt.contains("Ten years of experience."));
        assert!(prompt.contains("record_unknown_question"));
        assert!(prompt.contains("record_user_details"));
    }
}
