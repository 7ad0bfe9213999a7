//! The three fixed coaching personas and their canned fallback material.
//!
//! Personas are process-lifetime constants: selection is a pure function of
//! [`Category`] with no unmapped input.

mod fallback;
mod prompts;

use kindred_core::{Category, Persona};

pub use fallback::{fallback_pool, pick_fallback};
pub use prompts::system_prompt;

/// Crisis de-escalation persona. Firm, directive, immediate.
pub const GUARDIAN: Persona = Persona {
    name: "The Guardian",
    goal: "Provide immediate crisis intervention.",
    backstory: "Expert crisis specialist. Firm and directive.",
};

/// Empathetic journaling persona.
pub const REFLECTOR: Persona = Persona {
    name: "The Reflector",
    goal: "Validate feelings.",
    backstory: "Empathetic therapeutic companion.",
};

/// Habit-coaching persona for general questions.
pub const STRATEGIST: Persona = Persona {
    name: "The Strategist",
    goal: "Provide habit strategies.",
    backstory: "Habit coach. Logical and structured.",
};

/// Selects the persona for a category.
pub fn persona_for(category: Category) -> &'static Persona {
    match category {
        Category::Crisis => &GUARDIAN,
        Category::Reflection => &REFLECTOR,
        Category::General => &STRATEGIST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_persona() {
        assert_eq!(persona_for(Category::Crisis).name, "The Guardian");
        assert_eq!(persona_for(Category::Reflection).name, "The Reflector");
        assert_eq!(persona_for(Category::General).name, "The Strategist");
    }

    #[test]
    fn unknown_context_routes_to_the_strategist() {
        let category = Category::from_context("unknown-category");
        assert_eq!(persona_for(category).name, "The Strategist");
    }

    #[test]
    fn system_prompt_carries_goal_and_backstory() {
        let prompt = system_prompt(&GUARDIAN);
        assert!(prompt.contains("The Guardian"));
        assert!(prompt.contains(GUARDIAN.goal));
        assert!(prompt.contains(GUARDIAN.backstory));
    }
}
