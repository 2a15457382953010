use rand::Rng;
use rand::seq::IndexedRandom;

/// Shown to the model in place of an image description.
pub const NO_IMAGE_PLACEHOLDER: &str = "No image provided";

const ROLE_STATEMENT: &str = "You are a social media caption expert. Generate 3 engaging captions and 3 relevant hashtags for the given content.";

const CREATIVITY_BOOSTERS: [&str; 5] = [
    "Be creative and think outside the box.",
    "Focus on viral potential and engagement.",
    "Consider current trends and popular culture.",
    "Make it memorable and shareable.",
    "Think about what would make people stop scrolling.",
];

const PLATFORM_GUIDELINES: &str = "PLATFORM GUIDELINES:
- Instagram: Visual storytelling, emojis, 1-2 sentences max
- Twitter: Concise, trending topics, 1-2 sentences max
- LinkedIn: Professional, value-driven, 2-3 sentences
- TikTok: Trendy, conversational, 1-2 sentences
- Facebook: Community-focused, 2-3 sentences";

const TONE_OPTIONS: &str = "TONE OPTIONS:
- Professional: Formal, business-appropriate
- Casual: Friendly, conversational
- Funny: Humorous, witty
- Inspirational: Motivational, uplifting
- Trendy: Current, hip, viral-worthy";

const OUTPUT_FORMAT: &str = r##"OUTPUT FORMAT: Return ONLY valid JSON in this exact structure:
{"captions": ["caption1", "caption2", "caption3"], "hashtags": ["#tag1", "#tag2", "#tag3"], "image_description": "brief description"}

Keep captions under 150 characters. Make hashtags relevant and platform-appropriate."##;

type UserTemplate = fn(PromptInput<'_>) -> String;

const USER_TEMPLATES: [UserTemplate; 3] = [template_labeled, template_request, template_form];

fn template_labeled(input: PromptInput<'_>) -> String {
    format!(
        "CONTENT: \"{}\"\nPLATFORM: {}\nTONE: {}\nIMAGE: {}\n\nGenerate captions and hashtags now.",
        input.content_text,
        input.platform,
        input.tone,
        input.image_or_placeholder()
    )
}

fn template_request(input: PromptInput<'_>) -> String {
    format!(
        "Create engaging social media content for this:\nContent: \"{}\"\nTarget Platform: {}\nDesired Tone: {}\nImage Context: {}\n\nPlease generate 3 captions and 3 hashtags.",
        input.content_text,
        input.platform,
        input.tone,
        input.image_or_placeholder()
    )
}

fn template_form(input: PromptInput<'_>) -> String {
    format!(
        "Social Media Caption Request:\nPost Description: \"{}\"\nPlatform: {}\nTone: {}\nImage: {}\n\nGenerate creative captions and relevant hashtags.",
        input.content_text,
        input.platform,
        input.tone,
        input.image_or_placeholder()
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system_instruction: String,
    pub user_instruction: String,
}

#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub content_text: &'a str,
    pub platform: &'a str,
    pub tone: &'a str,
    pub image_description: Option<&'a str>,
}

impl PromptInput<'_> {
    fn image_or_placeholder(&self) -> &str {
        self.image_description.unwrap_or(NO_IMAGE_PLACEHOLDER)
    }
}

/// Builds a fresh prompt pair, drawing booster and template from the thread RNG.
///
/// Output differs between calls on purpose, so nothing here may be memoized.
pub fn compose(input: PromptInput<'_>) -> PromptPair {
    compose_with(&mut rand::rng(), input)
}

pub fn compose_with<R: Rng + ?Sized>(rng: &mut R, input: PromptInput<'_>) -> PromptPair {
    let booster = CREATIVITY_BOOSTERS
        .choose(rng)
        .copied()
        .unwrap_or(CREATIVITY_BOOSTERS[0]);
    let template = USER_TEMPLATES
        .choose(rng)
        .copied()
        .unwrap_or(template_labeled as UserTemplate);

    PromptPair {
        system_instruction: system_instruction(booster),
        user_instruction: template(input),
    }
}

fn system_instruction(booster: &str) -> String {
    format!("{ROLE_STATEMENT}\n\n{booster}\n\n{PLATFORM_GUIDELINES}\n\n{TONE_OPTIONS}\n\n{OUTPUT_FORMAT}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const INPUT: PromptInput<'static> = PromptInput {
        content_text: "A sunset over the mountains",
        platform: "instagram",
        tone: "inspirational",
        image_description: None,
    };

    #[test]
    fn test_system_instruction_blocks() {
        let pair = compose(INPUT);
        let system = &pair.system_instruction;
        assert!(system.starts_with(ROLE_STATEMENT));
        assert!(CREATIVITY_BOOSTERS.iter().any(|b| system.contains(b)));
        for platform in ["Instagram", "Twitter", "LinkedIn", "TikTok", "Facebook"] {
            assert!(system.contains(&format!("- {platform}:")), "{platform}");
        }
        for tone in ["Professional", "Casual", "Funny", "Inspirational", "Trendy"] {
            assert!(system.contains(&format!("- {tone}:")), "{tone}");
        }
        assert!(system.contains(
            r##"{"captions": ["caption1", "caption2", "caption3"], "hashtags": ["#tag1", "#tag2", "#tag3"], "image_description": "brief description"}"##
        ));
        assert!(system.contains("under 150 characters"));
    }

    #[test]
    fn test_user_instruction_embeds_fields() {
        let pair = compose(PromptInput {
            image_description: Some("cat.png (640×480) — photo"),
            ..INPUT
        });
        let user = &pair.user_instruction;
        assert!(user.contains("\"A sunset over the mountains\""));
        assert!(user.contains("instagram"));
        assert!(user.contains("inspirational"));
        assert!(user.contains("cat.png (640×480) — photo"));
        assert!(!user.contains(NO_IMAGE_PLACEHOLDER));
        assert!(!user.contains('{'));
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let pair = compose(INPUT);
        assert!(pair.user_instruction.contains(NO_IMAGE_PLACEHOLDER));
    }

    #[test]
    fn test_sentence_with_placeholder_text_is_kept_verbatim() {
        let pair = compose(PromptInput {
            content_text: "literally {tone}",
            ..INPUT
        });
        assert!(pair.user_instruction.contains("\"literally {tone}\""));
    }

    #[test]
    fn test_every_pool_entry_is_reachable() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut boosters = HashSet::new();
        let mut templates = HashSet::new();
        for _ in 0..500 {
            let pair = compose_with(&mut rng, INPUT);
            let booster = CREATIVITY_BOOSTERS
                .iter()
                .position(|b| pair.system_instruction.contains(b))
                .unwrap();
            boosters.insert(booster);
            let first_line = pair.user_instruction.lines().next().unwrap().to_string();
            templates.insert(first_line);
        }
        assert_eq!(boosters.len(), CREATIVITY_BOOSTERS.len());
        assert_eq!(templates.len(), USER_TEMPLATES.len());
    }

    #[test]
    fn test_repeated_calls_vary() {
        let distinct: HashSet<PromptPairKey> = (0..50).map(|_| compose(INPUT).into()).collect();
        assert!(distinct.len() > 1);
    }

    #[derive(Hash, PartialEq, Eq)]
    struct PromptPairKey(String, String);

    impl From<PromptPair> for PromptPairKey {
        fn from(pair: PromptPair) -> Self {
            PromptPairKey(pair.system_instruction, pair.user_instruction)
        }
    }
}
