//! Home page salutations.

use platform_i18n::{MessageKey, Translator};
use rand::{Rng, rngs::ThreadRng, seq::SliceRandom};

const SALUTATIONS: [MessageKey; 5] = [
    MessageKey::GreetingHey,
    MessageKey::GreetingHowsItGoing,
    MessageKey::GreetingHowdy,
    MessageKey::GreetingGreetings,
    MessageKey::GreetingGoodToSee,
];

const PROMPTS: [MessageKey; 3] = [
    MessageKey::CuriosityKnow,
    MessageKey::CuriosityMind,
    MessageKey::CuriosityFindOut,
];

pub struct Greeting<'a, R = ThreadRng> {
    i18n: &'a dyn Translator,
    rng: R,
}

impl<'a> Greeting<'a> {
    pub fn new(i18n: &'a dyn Translator) -> Self {
        Self::with_rng(i18n, rand::thread_rng())
    }
}

impl<'a, R: Rng> Greeting<'a, R> {
    pub fn with_rng(i18n: &'a dyn Translator, rng: R) -> Self {
        Self { i18n, rng }
    }

    fn pick(&mut self, keys: &[MessageKey]) -> MessageKey {
        *keys
            .choose(&mut self.rng)
            .unwrap_or(&MessageKey::GreetingHey)
    }

    pub fn simple_greeting(&mut self) -> String {
        let key = self.pick(&SALUTATIONS);
        self.i18n.text(key)
    }

    /// Salutation addressed to `name`; the question-form salutation gets a
    /// trailing question mark.
    pub fn say_hello(&mut self, name: Option<&str>) -> String {
        let key = self.pick(&SALUTATIONS);
        let salutation = self.i18n.text(key);
        let Some(name) = name else {
            return salutation;
        };
        let template = if key == MessageKey::GreetingHowsItGoing {
            MessageKey::GreetingAddressedQuestion
        } else {
            MessageKey::GreetingAddressed
        };
        self.i18n.translate(template, &[salutation.as_str(), name])
    }

    pub fn encourage_curiosity(&mut self) -> String {
        let key = self.pick(&PROMPTS);
        self.i18n.text(key)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use platform_i18n::Catalog;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn every_salutation_is_reachable() {
        let catalog = Catalog::english();
        let mut greeting = Greeting::with_rng(&catalog, StdRng::seed_from_u64(7));
        let seen: HashSet<_> = (0..500).map(|_| greeting.simple_greeting()).collect();
        assert_eq!(seen.len(), SALUTATIONS.len());

        let prompts: HashSet<_> = (0..500).map(|_| greeting.encourage_curiosity()).collect();
        assert_eq!(prompts.len(), PROMPTS.len());
    }

    #[test]
    fn personalized_greetings_punctuate_questions() {
        let catalog = Catalog::english();
        let mut greeting = Greeting::with_rng(&catalog, StdRng::seed_from_u64(11));
        for _ in 0..200 {
            let hello = greeting.say_hello(Some("Ada"));
            if hello.starts_with("How's it going") {
                assert_eq!(hello, "How's it going, Ada?");
            } else {
                assert!(hello.ends_with(", Ada"), "{hello}");
            }
        }
    }

    #[test]
    fn addressed_forms_come_from_the_catalog() {
        let catalog = Catalog::from_json_str(
            r#"{"locale": "fr", "messages": {
                "greeting.addressed": "{0} {1} !",
                "greeting.addressed_question": "{0} {1} ?"
            }}"#,
        )
        .unwrap();
        let mut greeting = Greeting::with_rng(&catalog, StdRng::seed_from_u64(3));
        for _ in 0..100 {
            let hello = greeting.say_hello(Some("Ada"));
            assert!(hello.ends_with(" Ada !") || hello.ends_with(" Ada ?"), "{hello}");
            assert_eq!(hello.ends_with('?'), hello.starts_with("How's it going"));
        }
    }

    #[test]
    fn anonymous_greeting_is_bare() {
        let catalog = Catalog::english();
        let mut greeting = Greeting::new(&catalog);
        let hello = greeting.say_hello(None);
        assert!(!hello.contains(','));
    }
}
